// erdwatch/src/commands/prompt.rs
//
// USE CASE: Show the exact prompt without spending an API call.

use erdwatch_core::application::preview_prompt;
use erdwatch_core::infrastructure::collector::GitAwareCollector;

use crate::cli::SourceArgs;

pub fn execute(source: SourceArgs) -> anyhow::Result<()> {
    let config = super::resolve_config(&source, None)?;

    let prompt = match preview_prompt(&config, &GitAwareCollector::default()) {
        Ok(prompt) => prompt,
        Err(e) => {
            eprintln!("\n💥 PROMPT ERROR: {:?}", miette::Report::new(e));
            std::process::exit(1);
        }
    };

    println!("{}", prompt.text);
    eprintln!(
        "📝 {} bytes of schema text embedded{}",
        prompt.schema_bytes,
        if prompt.truncated { " (truncated)" } else { "" }
    );
    Ok(())
}
