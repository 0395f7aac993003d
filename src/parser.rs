//! Vector tokenizer and validator
//!
//! Checks run in a fixed order so a given input always fails the same way:
//! empty input, trailing separator, prefix, then each field left to right
//! (empty, syntax, unknown metric, unknown value, duplicate), and finally
//! mandatory metrics.

use crate::errors::{CvssError, MalformedReason, Result};
use crate::standard::{CvssVersion, Standard};
use crate::vector::ParsedVector;
use std::collections::BTreeMap;

const SEPARATOR: char = '/';

/// Parse `raw` as a vector of the given version family.
pub fn parse_vector(family: CvssVersion, raw: &str) -> Result<ParsedVector> {
    let malformed = |reason| CvssError::malformed(family, reason);

    if raw.is_empty() {
        return Err(malformed(MalformedReason::Empty));
    }
    if raw.ends_with(SEPARATOR) {
        return Err(malformed(MalformedReason::TrailingSeparator));
    }

    let standard = Standard::resolve(family, raw)
        .ok_or_else(|| malformed(MalformedReason::MissingPrefix(raw.to_string())))?;
    let body = match standard.prefix() {
        Some(prefix) => &raw[prefix.len()..],
        None => raw,
    };

    let declared = parse_fields(standard, raw, body)?;
    check_mandatory(standard, &declared)?;

    Ok(ParsedVector::new(raw.to_string(), standard, declared))
}

fn parse_fields(
    standard: Standard,
    raw: &str,
    body: &str,
) -> Result<BTreeMap<&'static str, &'static str>> {
    let family = standard.family();
    let table = standard.table();
    let mut declared = BTreeMap::new();

    for field in body.split(SEPARATOR) {
        if field.is_empty() {
            return Err(CvssError::malformed(
                family,
                MalformedReason::EmptyField(raw.to_string()),
            ));
        }

        let (metric, value) = split_field(field).ok_or_else(|| {
            CvssError::malformed(family, MalformedReason::MalformedField(field.to_string()))
        })?;

        let definition = table.get(metric).ok_or_else(|| {
            CvssError::malformed(
                family,
                MalformedReason::UnknownMetric {
                    metric: metric.to_string(),
                    field: field.to_string(),
                },
            )
        })?;

        let allowed = definition.value(value).ok_or_else(|| {
            CvssError::malformed(
                family,
                MalformedReason::UnknownValue {
                    value: value.to_string(),
                    field: field.to_string(),
                },
            )
        })?;

        // Repeats are caught only once the value is known to be valid, for
        // every version. `AV:N/AV:Q` reports the unknown `Q`, not the repeat.
        if declared.insert(definition.code, allowed.code).is_some() {
            return Err(CvssError::malformed(
                family,
                MalformedReason::DuplicateMetric(definition.code.to_string()),
            ));
        }
    }

    Ok(declared)
}

/// Split `METRIC:VALUE`, rejecting anything without exactly one colon
fn split_field(field: &str) -> Option<(&str, &str)> {
    let mut parts = field.split(':');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(metric), Some(value), None) => Some((metric, value)),
        _ => None,
    }
}

fn check_mandatory(standard: Standard, declared: &BTreeMap<&'static str, &'static str>) -> Result<()> {
    let missing: Vec<&'static str> = standard
        .table()
        .mandatory()
        .map(|metric| metric.code)
        .filter(|code| !declared.contains_key(code))
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(CvssError::mandatory(standard.family(), missing))
    }
}
