use super::OutputWriter;
use crate::cvss::Cvss;
use crate::formatting::{FormattingConfig, OutputFormatter};
use crate::standard::Standard;
use std::io::Write;

/// Width of the label column, colon included
const LABEL_WIDTH: usize = 22;

pub struct TerminalWriter<W: Write> {
    writer: W,
    formatter: Box<dyn OutputFormatter>,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W, formatting: FormattingConfig) -> Self {
        Self {
            writer,
            formatter: formatting.formatter(),
        }
    }

    fn write_line(&mut self, label: &str, value: &str) -> anyhow::Result<()> {
        let label = format!("{}:", label);
        writeln!(self.writer, "{:<width$} {}", label, value, width = LABEL_WIDTH)?;
        Ok(())
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_report(&mut self, cvss: &Cvss) -> anyhow::Result<()> {
        let standard = cvss.standard();
        let header = self.formatter.header(&cvss.version().to_string());
        writeln!(self.writer, "{}", header)?;

        for (stage, score, severity) in cvss.stage_scores() {
            let score = score.map_or_else(|| "None".to_string(), |score| format!("{:.1}", score));
            let value = match standard {
                Standard::V2 => score,
                Standard::V3(_) | Standard::V4 => self
                    .formatter
                    .severity(&format!("{} ({})", score, severity), severity),
            };
            self.write_line(stage.label(), &value)?;
        }

        self.write_line("Cleaned vector", &cvss.clean_vector())?;
        self.write_line("Red Hat vector", &cvss.rh_vector())?;
        Ok(())
    }

    fn write_reports(&mut self, reports: &[Cvss]) -> anyhow::Result<()> {
        for (index, cvss) in reports.iter().enumerate() {
            if index > 0 {
                writeln!(self.writer)?;
            }
            self.write_report(cvss)?;
        }
        Ok(())
    }
}
