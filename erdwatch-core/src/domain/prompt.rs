// src/domain/prompt.rs
//
// Builds the instruction document sent to the generator.
// Pure function of `PromptContext` + byte budget: no clock, no randomness.

use crate::domain::diagram::{DIAGRAM_KEYWORD, SENTINEL};
use crate::domain::schema::{PromptContext, SchemaFile};

/// Upper bound for the concatenated schema text, in bytes.
pub const MAX_SCHEMA_BYTES: usize = 250_000;

/// File names treated as the authoritative schema definition.
pub const PRIMARY_SCHEMA_FILES: &[&str] =
    &["schema.prisma", "schema.sql", "structure.sql", "schema.rb"];

const FILE_DELIMITER: &str = "\n\n-----8<-----\n\n";
const NO_DIAGRAM_MARKER: &str = "(none: no diagram has been stored yet)";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposedPrompt {
    pub text: String,
    /// Bytes of schema text actually embedded (after truncation).
    pub schema_bytes: usize,
    pub truncated: bool,
}

#[derive(Debug, Clone)]
pub struct PromptComposer {
    max_schema_bytes: usize,
}

impl Default for PromptComposer {
    fn default() -> Self {
        Self::new(MAX_SCHEMA_BYTES)
    }
}

impl PromptComposer {
    pub fn new(max_schema_bytes: usize) -> Self {
        Self { max_schema_bytes }
    }

    pub fn compose(&self, ctx: &PromptContext) -> ComposedPrompt {
        let ordered = order_schema_files(&ctx.schema_files);
        let joined = concat_schema_files(&ordered);
        let schema_text = truncate_utf8(&joined, self.max_schema_bytes);
        let truncated = schema_text.len() < joined.len();

        let current = ctx
            .current_diagram
            .as_deref()
            .unwrap_or(NO_DIAGRAM_MARKER);

        let mut text = String::with_capacity(schema_text.len() + current.len() + 2048);
        text.push_str(&format!(
            "You maintain the Mermaid entity-relationship diagram of the repository `{}`.\n\
             Derive the diagram from the schema sources below and compare it with the current diagram.\n\n",
            ctx.repository
        ));

        text.push_str("## Schema sources\n\n");
        text.push_str(schema_text);
        if truncated {
            text.push_str("\n\n[... schema sources truncated ...]");
        }

        text.push_str("\n\n## Current diagram\n\n");
        text.push_str(current);

        text.push_str("\n\n");
        text.push_str(&output_contract());

        ComposedPrompt {
            text,
            schema_bytes: schema_text.len(),
            truncated,
        }
    }
}

/// Primary schema files first, everything else in arrival order (stable sort).
pub fn order_schema_files(files: &[SchemaFile]) -> Vec<&SchemaFile> {
    let mut ordered: Vec<&SchemaFile> = files.iter().collect();
    ordered.sort_by_key(|f| !is_primary_schema(&f.path));
    ordered
}

pub fn is_primary_schema(path: &str) -> bool {
    let file_name = path.rsplit(|c: char| c == '/' || c == '\\').next().unwrap_or(path);
    PRIMARY_SCHEMA_FILES.contains(&file_name)
}

fn concat_schema_files(files: &[&SchemaFile]) -> String {
    files
        .iter()
        .map(|f| format!("### File: {}\n{}", f.path, f.content))
        .collect::<Vec<_>>()
        .join(FILE_DELIMITER)
}

/// Longest prefix of `text` that fits in `max_bytes` without splitting a char.
pub fn truncate_utf8(text: &str, max_bytes: usize) -> &str {
    if text.len() <= max_bytes {
        return text;
    }
    let mut end = max_bytes;
    while end > 0 && !text.is_char_boundary(end) {
        end -= 1;
    }
    &text[..end]
}

fn output_contract() -> String {
    format!(
        "## Output contract\n\
         \n\
         Respond with exactly one of the following, and nothing else:\n\
         \n\
         1. The single token `{sentinel}` if the diagram you would produce is semantically \
         equivalent to the current diagram, ignoring formatting, ordering and cosmetic differences.\n\
         2. Otherwise, the complete updated diagram. It must start with the keyword `{keyword}`. \
         Do not wrap it in code fences, markdown or any explanation.\n\
         \n\
         A difference is MATERIAL when any of these change:\n\
         - an entity (table, model, view) is added, removed or renamed in the schema\n\
         - a column or field is added, removed, renamed or changes type\n\
         - a key or constraint changes (primary key, foreign key, unique, not null)\n\
         - a relationship is added or removed, or its cardinality changes\n\
         \n\
         A difference is COSMETIC (answer `{sentinel}`) when only these change:\n\
         - whitespace, indentation, blank lines or line endings\n\
         - the order of entities, attributes or relationships\n\
         - comments or relationship labels\n\
         - letter case or purely cosmetic renames that do not reflect a schema change\n",
        sentinel = SENTINEL,
        keyword = DIAGRAM_KEYWORD,
    )
}
