use pip_inventory::adapters::outbound::console::StderrProgressReporter;
use pip_inventory::adapters::outbound::filesystem::{FileSystemWriter, StdoutPresenter};
use pip_inventory::adapters::outbound::python::SitePackagesMetadataSource;
use pip_inventory::application::dto::OutputFormat;
use pip_inventory::application::use_cases::{RenderReportUseCase, ScanPackagesUseCase};
use pip_inventory::cli::Args;
use pip_inventory::config;
use pip_inventory::ports::outbound::OutputPresenter;
use pip_inventory::shared::error::ExitCode;
use pip_inventory::shared::Result;
use std::path::{Path, PathBuf};
use std::process;

fn main() {
    if let Err(e) = run() {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        // Display error chain
        let mut source = e.source();
        while let Some(err) = source {
            eprintln!("\nCaused by: {}", err);
            source = err.source();
        }

        eprintln!();
        process::exit(ExitCode::ApplicationError.as_i32());
    }
}

fn run() -> Result<()> {
    let args = Args::parse_args();

    // Explicit config path must exist; the default is discovered silently
    let config = match args.config.as_deref() {
        Some(path) => config::load_config_from_path(Path::new(path))?,
        None => config::discover_config(Path::new("."))?.unwrap_or_default(),
    };

    // CLI flags override config values
    let format = match args.format {
        Some(format) => format,
        None => config.output_format()?.unwrap_or(OutputFormat::Text),
    };
    let output = args.output.or_else(|| config.output.clone());
    let site_packages = args
        .site_packages
        .or_else(|| config.site_packages.clone())
        .map(PathBuf::from);

    // Create adapters (Dependency Injection)
    let metadata_source = SitePackagesMetadataSource::discover(site_packages)?;
    let scan = ScanPackagesUseCase::new(metadata_source, StderrProgressReporter::new());
    let records = scan.execute()?;

    let presenter: Box<dyn OutputPresenter> = match output {
        Some(path) => Box::new(FileSystemWriter::new(PathBuf::from(path))),
        None => Box::new(StdoutPresenter::new()),
    };

    let render = RenderReportUseCase::new(StderrProgressReporter::new());
    render.execute(&records, format, presenter.as_ref())?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pip_inventory::config::ConfigFile;

    // run() wiring is covered end to end by tests/e2e_test.rs.
    #[test]
    fn test_default_format_is_text() {
        let config = ConfigFile::default();
        let format = config.output_format().unwrap().unwrap_or(OutputFormat::Text);
        assert_eq!(format, OutputFormat::Text);
    }
}
