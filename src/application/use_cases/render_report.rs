use crate::application::dto::OutputFormat;
use crate::application::factories::FormatterFactory;
use crate::inventory::domain::{InventoryStats, PackageRecord, ReportMetadata};
use crate::ports::outbound::{OutputPresenter, ProgressReporter};
use crate::shared::Result;

/// RenderReportUseCase - The Report Generator
///
/// Renders a package record set into the requested format, presents the
/// artifact through the injected presenter and always emits the operator
/// summary (count, total, average) to the diagnostic stream afterwards.
///
/// # Type Parameters
/// * `PR` - ProgressReporter implementation
pub struct RenderReportUseCase<PR> {
    progress_reporter: PR,
}

impl<PR> RenderReportUseCase<PR>
where
    PR: ProgressReporter,
{
    pub fn new(progress_reporter: PR) -> Self {
        Self { progress_reporter }
    }

    /// Executes the render, with fresh report metadata per invocation
    ///
    /// # Errors
    /// Returns an error if serialization fails or the presenter cannot
    /// write to its destination; destination failures are fatal for the
    /// invocation.
    pub fn execute(
        &self,
        records: &[PackageRecord],
        format: OutputFormat,
        presenter: &dyn OutputPresenter,
    ) -> Result<()> {
        self.progress_reporter
            .report(FormatterFactory::progress_message(format));

        let metadata = ReportMetadata::generate();
        let formatter = FormatterFactory::create(format);
        let artifact = formatter.format(records, &metadata)?;

        presenter.present(&artifact)?;

        let stats = InventoryStats::from_records(records);
        self.progress_reporter.report_completion(&stats.summary_line());

        Ok(())
    }
}
