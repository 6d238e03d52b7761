use crate::application::ports::Reporter;
use crate::domain::report::CheckReport;
use crate::error::ErdwatchError;
use crate::infrastructure::report::summary::render_markdown;

/// Human-readable output on stdout.
pub struct ConsoleReporter;

impl Reporter for ConsoleReporter {
    fn report(&self, report: &CheckReport) -> Result<(), ErdwatchError> {
        println!("\n{}", render_markdown(report));
        Ok(())
    }
}
