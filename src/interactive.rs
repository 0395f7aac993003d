//! Prompt-driven vector builder
//!
//! Each metric is shown with its value names, the letters to type marked in
//! parentheses, then read until a known value code is entered. Empty input
//! stands for "not defined", which mandatory metrics do not accept.

use crate::formatting::OutputFormatter;
use crate::metrics::{MetricDef, MetricValue};
use crate::standard::Standard;
use std::io::{self, BufRead, Write};

/// Build a vector string for `standard` from answers read off `input`.
///
/// Returns `Ok(None)` when input ends before every metric is answered.
pub fn ask_interactively<R: BufRead, W: Write>(
    standard: Standard,
    all_metrics: bool,
    formatter: &dyn OutputFormatter,
    input: &mut R,
    output: &mut W,
) -> io::Result<Option<String>> {
    writeln!(output, "Interactive {} calculator", standard.family())?;
    writeln!(output)?;

    let table = standard.table();
    let metrics: Vec<&MetricDef> = if all_metrics {
        table.iter().collect()
    } else {
        table.mandatory().collect()
    };

    let mut fields = Vec::with_capacity(metrics.len());
    for metric in metrics {
        writeln!(output, "{}: {}", metric.name, value_menu(standard, metric, formatter))?;

        let Some(value) = ask_value(standard, metric, input, output)? else {
            writeln!(output)?;
            return Ok(None);
        };
        if value != standard.not_defined() {
            fields.push(format!("{}:{}", metric.code, value));
        }
        writeln!(output)?;
    }

    let prefix = standard.prefix().unwrap_or_default();
    Ok(Some(format!("{}{}", prefix, fields.join("/"))))
}

fn ask_value<R: BufRead, W: Write>(
    standard: Standard,
    metric: &MetricDef,
    input: &mut R,
    output: &mut W,
) -> io::Result<Option<&'static str>> {
    let codes: Vec<&str> = metric.value_codes().collect();
    loop {
        write!(output, "{}: {} ", metric.name, codes.join("/"))?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let answer = match line.trim() {
            "" => standard.not_defined(),
            answer => answer,
        };

        if let Some(code) = metric
            .value_codes()
            .find(|code| code.eq_ignore_ascii_case(answer))
        {
            return Ok(Some(code));
        }
    }
}

fn value_menu(standard: Standard, metric: &MetricDef, formatter: &dyn OutputFormatter) -> String {
    let separator = formatter.separator("|");
    metric
        .values
        .iter()
        .map(|value| colorize_hints(&value_hint(standard, value), formatter))
        .collect::<Vec<_>>()
        .join(&format!(" {} ", separator))
}

/// Value name with the letters of its code wrapped in parentheses
pub fn value_hint(standard: Standard, value: &MetricValue) -> String {
    if value.code.len() > 1 && value.code == value.name {
        return format!("({})", value.name);
    }

    let mut hinted = value.name.to_string();
    for letter in value.code.chars() {
        hinted = hinted.replace(letter, &format!("({})", letter));
    }

    match standard {
        Standard::V2 => match hinted.as_str() {
            "(P)roof-of-(C)oncept" => "(P)roof-(O)f-(C)oncept".to_string(),
            "(U)nconfirmed" => "(U)n(C)onfirmed".to_string(),
            "(U)ncorroborated" => "(U)nco(R)roborated".to_string(),
            _ => hinted,
        },
        Standard::V3(_) | Standard::V4 if hinted == "Not Defined" => "(X)Not Defined".to_string(),
        Standard::V3(_) | Standard::V4 => hinted,
    }
}

fn colorize_hints(hinted: &str, formatter: &dyn OutputFormatter) -> String {
    let mut colored = String::with_capacity(hinted.len());
    let mut rest = hinted;
    while let Some(open) = rest.find('(') {
        let Some(close) = rest[open..].find(')').map(|close| open + close) else {
            break;
        };
        colored.push_str(&rest[..open]);
        colored.push_str(&formatter.hint(&rest[open..=close]));
        rest = &rest[close + 1..];
    }
    colored.push_str(rest);
    colored
}
