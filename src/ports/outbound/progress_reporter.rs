/// ProgressReporter port for diagnostics during scanning and rendering
///
/// All diagnostics go to the error stream so the primary report artifact
/// on stdout can be piped or redirected cleanly.
pub trait ProgressReporter {
    /// Reports a progress message
    fn report(&self, message: &str);

    /// Reports scan progress with a position out of a total
    fn report_progress(&self, current: usize, total: usize, message: Option<&str>);

    /// Reports a warning, e.g. a package skipped during scanning
    fn report_warning(&self, message: &str);

    /// Reports completion of an operation, e.g. the inventory summary
    fn report_completion(&self, message: &str);
}
