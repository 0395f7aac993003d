//! Report writers for scored vectors

pub mod json;
pub mod terminal;

use crate::cvss::Cvss;
use crate::formatting::FormattingConfig;
use serde::Deserialize;
use std::io::Write;

pub use json::{to_json, JsonWriter};
pub use terminal::TerminalWriter;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

pub trait OutputWriter {
    fn write_report(&mut self, cvss: &Cvss) -> anyhow::Result<()>;

    fn write_reports(&mut self, reports: &[Cvss]) -> anyhow::Result<()> {
        for cvss in reports {
            self.write_report(cvss)?;
        }
        Ok(())
    }
}

pub fn create_writer(
    format: OutputFormat,
    formatting: FormattingConfig,
) -> Box<dyn OutputWriter> {
    create_writer_to(format, formatting, std::io::stdout())
}

pub fn create_writer_to<W: Write + 'static>(
    format: OutputFormat,
    formatting: FormattingConfig,
    writer: W,
) -> Box<dyn OutputWriter> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(writer)),
        OutputFormat::Text => Box::new(TerminalWriter::new(writer, formatting)),
    }
}
