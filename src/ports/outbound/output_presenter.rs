use crate::shared::Result;

/// OutputPresenter port for presenting final output
///
/// This port abstracts the output destination (stdout, file, etc.)
/// where the rendered report artifact is presented.
pub trait OutputPresenter {
    /// Presents the rendered report to the output destination
    ///
    /// # Errors
    /// Returns an error if writing to the output destination fails;
    /// destination failures are fatal for the invocation and must be
    /// surfaced to the caller, never swallowed.
    fn present(&self, content: &str) -> Result<()>;
}
