use super::OutputWriter;
use crate::cvss::Cvss;
use crate::standard::{Stage, Standard};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde_json::{Map, Value};
use std::io::Write;

/// Schema field name to value mapping for one vector.
///
/// Keys come out sorted since `serde_json::Map` is ordered by key.
pub fn to_json(cvss: &Cvss) -> Value {
    let standard = cvss.standard();
    let mut data = Map::new();

    data.insert("version".into(), standard.json_version().into());
    data.insert("vectorString".into(), cvss.vector().raw().into());

    for metric in standard.table().iter() {
        if let Some(description) = cvss.value_description(metric.code) {
            data.insert(metric.json_name.into(), schema_value(description).into());
        }
    }

    for stage in standard.stages() {
        let stage_key = stage.json_key();
        if let Some(score) = cvss
            .scores()
            .stage(*stage)
            .filter(|score| keeps_score(standard, *stage, *score))
        {
            data.insert(
                format!("{}Score", stage_key),
                score.to_f64().unwrap_or_default().into(),
            );
        }
        if has_severities(standard) {
            data.insert(
                format!("{}Severity", stage_key),
                cvss.severity(*stage).as_str().to_uppercase().into(),
            );
        }
    }

    Value::Object(data)
}

/// v2 documents leave out a zero temporal or environmental score
fn keeps_score(standard: Standard, stage: Stage, score: Decimal) -> bool {
    !(matches!(standard, Standard::V2) && stage != Stage::Base && score.is_zero())
}

/// v2 documents carry no severity fields
fn has_severities(standard: Standard) -> bool {
    !matches!(standard, Standard::V2)
}

/// "Adjacent Network" -> "ADJACENT_NETWORK"
fn schema_value(description: &str) -> String {
    if description == "Adjacent" {
        return "ADJACENT_NETWORK".to_string();
    }
    description.to_uppercase().replace(['-', ' '], "_")
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_report(&mut self, cvss: &Cvss) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(&to_json(cvss))?;
        writeln!(self.writer, "{}", json)?;
        Ok(())
    }

    /// Several reports become one JSON array
    fn write_reports(&mut self, reports: &[Cvss]) -> anyhow::Result<()> {
        let documents: Vec<Value> = reports.iter().map(to_json).collect();
        let json = serde_json::to_string_pretty(&documents)?;
        writeln!(self.writer, "{}", json)?;
        Ok(())
    }
}
