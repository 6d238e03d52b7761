// src/domain/diagram.rs
//
// Change classification. Two explicit layers:
//   1. trust the generator's sentinel,
//   2. otherwise compare normalized text ourselves.

use regex::Regex;
use serde::Serialize;
use std::sync::OnceLock;
use tracing::warn;

/// Literal token meaning "no material change".
pub const SENTINEL: &str = "NO_CHANGE";

/// Every valid diagram starts with this keyword.
pub const DIAGRAM_KEYWORD: &str = "erDiagram";

const EXCERPT_CHARS: usize = 120;

fn re_fence() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?s)\A```[\w+.-]*[ \t]*\r?\n(.*?)\s*```\z").unwrap_or_else(|_| {
            // Hardcoded pattern, kept panic-free for the security guard.
            Regex::new("$^").unwrap_or_else(|_| unreachable!())
        })
    })
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "diagram", rename_all = "snake_case")]
pub enum ComparisonResult {
    NoChange,
    /// Carries the cleaned (not normalized) generator output.
    MaterialChange(String),
}

/// Which layer settled the outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Decision {
    Sentinel,
    NormalizedMatch,
    Diff,
}

/// The generator answered with neither the sentinel nor a diagram.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContractViolation {
    pub message: String,
    pub excerpt: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Classification {
    pub result: ComparisonResult,
    pub decided_by: Decision,
    pub contract_violation: Option<ContractViolation>,
}

impl Classification {
    pub fn is_material(&self) -> bool {
        matches!(self.result, ComparisonResult::MaterialChange(_))
    }

    pub fn proposed_diagram(&self) -> Option<&str> {
        match &self.result {
            ComparisonResult::MaterialChange(diagram) => Some(diagram),
            ComparisonResult::NoChange => None,
        }
    }
}

/// Trims the raw completion and strips one enclosing code fence, if any.
pub fn clean_output(raw: &str) -> String {
    let trimmed = raw.trim();
    match re_fence().captures(trimmed).and_then(|c| c.get(1)) {
        Some(body) => body.as_str().trim().to_string(),
        None => trimmed.to_string(),
    }
}

/// Layer 1.
pub fn is_sentinel(cleaned: &str) -> bool {
    cleaned.trim().eq_ignore_ascii_case(SENTINEL)
}

pub fn starts_with_keyword(text: &str) -> bool {
    text.trim_start()
        .get(..DIAGRAM_KEYWORD.len())
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case(DIAGRAM_KEYWORD))
}

/// Unified line endings, trimmed lines, no blank lines, lower case.
pub fn normalize(text: &str) -> String {
    text.replace("\r\n", "\n")
        .replace('\r', "\n")
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
        .to_lowercase()
}

/// Layer 2.
pub fn normalized_equal(stored: &str, candidate: &str) -> bool {
    normalize(stored) == normalize(candidate)
}

pub fn check_contract(cleaned: &str) -> Option<ContractViolation> {
    if is_sentinel(cleaned) || starts_with_keyword(cleaned) {
        return None;
    }
    Some(ContractViolation {
        message: format!(
            "Generator output is neither '{}' nor a diagram starting with '{}'",
            SENTINEL, DIAGRAM_KEYWORD
        ),
        excerpt: cleaned.chars().take(EXCERPT_CHARS).collect(),
    })
}

/// Classifies the cleaned generator output against the stored diagram.
pub fn classify(cleaned: &str, stored: Option<&str>) -> Classification {
    if is_sentinel(cleaned) {
        return Classification {
            result: ComparisonResult::NoChange,
            decided_by: Decision::Sentinel,
            contract_violation: None,
        };
    }

    let contract_violation = check_contract(cleaned);
    if let Some(violation) = &contract_violation {
        warn!(excerpt = %violation.excerpt, "⚠️  {}", violation.message);
    }

    if stored.is_some_and(|current| normalized_equal(current, cleaned)) {
        return Classification {
            result: ComparisonResult::NoChange,
            decided_by: Decision::NormalizedMatch,
            contract_violation,
        };
    }

    Classification {
        result: ComparisonResult::MaterialChange(cleaned.to_string()),
        decided_by: Decision::Diff,
        contract_violation,
    }
}
