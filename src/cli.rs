use crate::config::{load_config, CalculatorConfig};
use crate::cvss::Cvss;
use crate::formatting::{ColorMode, FormattingConfig};
use crate::interactive::ask_interactively;
use crate::output::{create_writer, OutputFormat};
use crate::scanner::parse_cvss_from_text;
use crate::standard::{MinorVersion, Standard};
use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Computes CVSS2/3/4 scores of a vector given on the command line or built
/// interactively. By default only mandatory metrics are asked for and
/// CVSS3.1 is used.
#[derive(Parser, Debug)]
#[command(name = "cvss_calculator")]
#[command(about = "CVSS v2, v3.x and v4.0 score calculator", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Compute CVSS2 instead
    #[arg(short = '2', conflicts_with_all = ["v3", "v4"])]
    pub v2: bool,

    /// Compute CVSS3.0 instead
    #[arg(short = '3', conflicts_with = "v4")]
    pub v3: bool,

    /// Compute CVSS4.0 instead
    #[arg(short = '4')]
    pub v4: bool,

    /// Ask for all metrics
    #[arg(short, long)]
    pub all: bool,

    /// Input string with CVSS vector
    #[arg(short, long, conflicts_with_all = ["rh", "scan"])]
    pub vector: Option<String>,

    /// Do not use terminal coloring
    #[arg(short = 'n', long = "no-colors")]
    pub no_colors: bool,

    /// Output format (defaults to the config file value, then text)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Vector in Red Hat notation (score/vector) to verify and score
    #[arg(long, conflicts_with = "scan")]
    pub rh: Option<String>,

    /// Report every vector found in a text file ("-" reads stdin)
    #[arg(long)]
    pub scan: Option<PathBuf>,

    /// Increase logging verbosity (can be repeated)
    #[arg(long = "verbose", action = clap::ArgAction::Count)]
    pub verbosity: u8,
}

impl Cli {
    /// Version flags win over the config file
    pub fn standard(&self, config: &CalculatorConfig) -> Standard {
        if self.v2 {
            Standard::V2
        } else if self.v3 {
            Standard::V3(MinorVersion::Zero)
        } else if self.v4 {
            Standard::V4
        } else {
            config.standard()
        }
    }

    pub fn formatting(&self, config: &CalculatorConfig) -> FormattingConfig {
        let mut formatting = FormattingConfig::from_env_with(config.color_mode());
        if self.no_colors {
            formatting.color = ColorMode::Never;
        }
        formatting
    }
}

pub fn run(cli: Cli) -> Result<()> {
    let config = load_config();
    let standard = cli.standard(&config);
    let formatting = cli.formatting(&config);
    let format = cli.format.unwrap_or_else(|| config.format());
    log::debug!("Using {} with {:?} output", standard, format);

    let mut writer = create_writer(format, formatting);

    if let Some(path) = &cli.scan {
        let found = parse_cvss_from_text(&read_scan_input(path)?);
        log::info!("Found {} distinct vectors", found.len());
        return writer.write_reports(&found);
    }

    let cvss = if let Some(rh) = &cli.rh {
        Cvss::from_rh_vector(standard.family(), rh)?
    } else {
        let vector = match &cli.vector {
            Some(vector) => vector.clone(),
            None => {
                let all_metrics = cli.all || config.all_metrics();
                match prompt(standard, all_metrics, formatting)? {
                    Some(vector) => vector,
                    None => return Ok(()),
                }
            }
        };
        Cvss::parse(standard.family(), &vector)?
    };

    writer.write_report(&cvss)
}

fn prompt(
    standard: Standard,
    all_metrics: bool,
    formatting: FormattingConfig,
) -> Result<Option<String>> {
    let formatter = formatting.formatter();
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let vector = ask_interactively(
        standard,
        all_metrics,
        formatter.as_ref(),
        &mut stdin.lock(),
        &mut stdout,
    )?;
    if vector.is_none() {
        log::debug!("Input closed before the vector was complete");
    }
    Ok(vector)
}

fn read_scan_input(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        return io::read_to_string(io::stdin()).context("Failed to read stdin");
    }
    fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}
