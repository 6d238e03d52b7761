// erdwatch-core/src/infrastructure/report/mod.rs

pub mod console;
pub mod json;
pub mod step_summary;
pub mod summary;

pub use console::ConsoleReporter;
pub use json::JsonReporter;
pub use step_summary::StepSummaryReporter;
pub use summary::render_markdown;
