use crate::inventory::domain::PackageRecord;
use crate::inventory::services::{directory_size, resolve_install_dir};
use crate::ports::outbound::{PackageMetadataSource, ProgressReporter};
use crate::shared::Result;

/// ScanPackagesUseCase - The Package Locator
///
/// Enumerates installed distributions from the injected metadata source,
/// resolves each to an on-disk install directory and measures its total
/// byte size. Failures are isolated per package: a distribution that
/// cannot be resolved or sized is logged as a warning and skipped, never
/// aborting the scan of the others.
///
/// # Type Parameters
/// * `MS` - PackageMetadataSource implementation
/// * `PR` - ProgressReporter implementation
pub struct ScanPackagesUseCase<MS, PR> {
    metadata_source: MS,
    progress_reporter: PR,
}

impl<MS, PR> ScanPackagesUseCase<MS, PR>
where
    MS: PackageMetadataSource,
    PR: ProgressReporter,
{
    pub fn new(metadata_source: MS, progress_reporter: PR) -> Self {
        Self {
            metadata_source,
            progress_reporter,
        }
    }

    /// Executes the scan, returning records in registry enumeration order
    ///
    /// # Errors
    /// Returns an error only when the metadata registry itself cannot be
    /// enumerated; per-package failures are recovered locally.
    pub fn execute(&self) -> Result<Vec<PackageRecord>> {
        let distributions = self.metadata_source.distributions()?;
        self.progress_reporter.report(&format!(
            "🔍 Scanning {} installed package(s)...",
            distributions.len()
        ));

        let total = distributions.len();
        let mut records = Vec::with_capacity(total);

        for (index, dist) in distributions.iter().enumerate() {
            self.progress_reporter
                .report_progress(index + 1, total, Some(&dist.name));

            let Some(location) = resolve_install_dir(dist) else {
                self.progress_reporter.report_warning(&format!(
                    "Skipping {}: could not resolve install directory under {}",
                    dist.name,
                    dist.install_root.display()
                ));
                continue;
            };

            match directory_size(&location) {
                Ok(size_bytes) => records.push(PackageRecord::new(
                    dist.name.clone(),
                    dist.version.clone(),
                    size_bytes,
                    location.display().to_string(),
                )),
                Err(e) => {
                    self.progress_reporter
                        .report_warning(&format!("Skipping {}: {}", dist.name, e));
                }
            }
        }

        Ok(records)
    }
}
