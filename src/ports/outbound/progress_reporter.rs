/// ProgressReporter port for reporting progress during a check
///
/// Progress is reported from the dispatch pool's tasks, so implementations
/// must be `Send + Sync`.
pub trait ProgressReporter: Send + Sync {
    /// Reports a progress message
    fn report(&self, message: &str);

    /// Reports progress towards `total` completed lookups
    ///
    /// # Arguments
    /// * `current` - Number of lookups completed so far
    /// * `total` - Number of lookups submitted
    /// * `message` - Optional message, typically the package just checked
    fn report_progress(&self, current: usize, total: usize, message: Option<&str>);

    /// Reports an error or warning message
    fn report_error(&self, message: &str);

    /// Reports completion of an operation
    fn report_completion(&self, message: &str);
}
