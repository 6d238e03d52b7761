// erdwatch-core/src/infrastructure/report/summary.rs
//
// Markdown block shared by the console and the job-runner step summary.

use crate::domain::diagram::Decision;
use crate::domain::report::CheckReport;

pub fn render_markdown(report: &CheckReport) -> String {
    let mut out = String::new();

    if report.requires_update() {
        out.push_str("## ❌ ERD update required\n\n");
    } else {
        out.push_str("## ✅ ERD is up to date\n\n");
    }

    out.push_str(&format!(
        "Repository: `{}` · Model: `{}` · Schema files: {}\n",
        report.repository,
        report.model,
        report.schema_files.len()
    ));

    if report.truncated {
        out.push_str("\n> ⚠️ Schema sources exceeded the prompt budget and were truncated.\n");
    }

    if let Some(violation) = &report.classification.contract_violation {
        out.push_str(&format!(
            "\n> ⚠️ {}. Output started with: `{}`\n",
            violation.message,
            violation.excerpt.replace('`', "'").replace('\n', " ")
        ));
    }

    match report.classification.proposed_diagram() {
        Some(diagram) => {
            let fence = fence_for(diagram);
            out.push_str(&format!(
                "\nUpdate `{}` with the proposed diagram below:\n\n{fence}mermaid\n{}\n{fence}\n",
                report.output_path.display(),
                diagram
            ));
        }
        None if report.classification.decided_by == Decision::NormalizedMatch => {
            out.push_str("\nThe generator proposed a diagram that only differs cosmetically from the stored one.\n");
        }
        None => {}
    }

    out
}

/// Backtick fence one longer than the longest backtick run in `text` (minimum 3).
fn fence_for(text: &str) -> String {
    let longest = text
        .split(|c: char| c != '`')
        .map(str::len)
        .max()
        .unwrap_or(0);
    "`".repeat((longest + 1).max(3))
}
