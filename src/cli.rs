use clap::Parser;

use crate::application::dto::OutputFormat;

/// Inventory installed Python packages with their on-disk sizes
#[derive(Parser, Debug)]
#[command(name = "pip-inventory")]
#[command(version)]
#[command(
    about = "Inventory installed Python packages with their on-disk sizes",
    long_about = None
)]
pub struct Args {
    /// Output format: text, json, cyclonedx or csv
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long)]
    pub output: Option<String>,

    /// Site-packages directory to scan (defaults to the active virtual
    /// environment)
    #[arg(short = 'p', long = "site-packages", value_name = "DIR")]
    pub site_packages: Option<String>,

    /// Config file path (defaults to ./pip-inventory.config.yml when present)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<String>,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
