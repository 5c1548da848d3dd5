/// ProgressReporter port for user-facing feedback during a catalog run
///
/// Progress goes to the user, not into the catalog output, so adapters
/// write it to stderr or discard it.
pub trait ProgressReporter {
    /// Reports a stage of the run ("listing catalog", "resolving 412 hits")
    fn report(&self, message: &str);

    /// Reports how many of `total` items are done
    fn report_progress(&self, current: usize, total: usize, message: Option<&str>);

    /// Reports a warning that did not stop the run
    fn report_error(&self, message: &str);

    /// Reports the end of the run with its summary
    fn report_completion(&self, message: &str);
}
