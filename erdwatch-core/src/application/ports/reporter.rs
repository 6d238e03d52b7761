use crate::domain::report::CheckReport;
use crate::error::ErdwatchError;

pub trait Reporter: Send + Sync {
    fn report(&self, report: &CheckReport) -> Result<(), ErdwatchError>;
}
