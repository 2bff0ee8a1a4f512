use crate::application::dto::OutdatedReport;
use crate::shared::Result;

/// ReportFormatter port for turning a finished check into printable output
pub trait ReportFormatter {
    /// Formats the outdated tables and the closing summary line
    ///
    /// # Errors
    /// Returns an error if the report cannot be formatted
    fn format(&self, report: &OutdatedReport) -> Result<String>;
}
