//! Validated vector with declared and effective views
//!
//! `declared` holds exactly what the input said and drives canonical
//! serialization. `effective` is `declared` plus the table's fallbacks
//! (modified metrics copied from base, v4 optional groups set to `X`) and is
//! what the score engines read. Both are built once in [`ParsedVector::new`].

use crate::metrics::{Fallback, MetricGroup, MetricTable, Weight};
use crate::standard::{CvssVersion, Standard};
use rust_decimal::Decimal;
use std::collections::BTreeMap;
use std::hash::{Hash, Hasher};

#[derive(Debug, Clone)]
pub struct ParsedVector {
    raw: String,
    standard: Standard,
    declared: BTreeMap<&'static str, &'static str>,
    effective: BTreeMap<&'static str, &'static str>,
}

impl ParsedVector {
    pub(crate) fn new(
        raw: String,
        standard: Standard,
        declared: BTreeMap<&'static str, &'static str>,
    ) -> Self {
        let effective = apply_fallbacks(standard, &declared);
        Self {
            raw,
            standard,
            declared,
            effective,
        }
    }

    /// The input string exactly as given
    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn standard(&self) -> Standard {
        self.standard
    }

    pub fn version(&self) -> CvssVersion {
        self.standard.family()
    }

    pub fn table(&self) -> &'static MetricTable {
        self.standard.table()
    }

    pub fn declared(&self, code: &str) -> Option<&'static str> {
        self.declared.get(code).copied()
    }

    /// Value used for scoring, after fallbacks
    pub fn get(&self, code: &str) -> Option<&'static str> {
        self.effective.get(code).copied()
    }

    /// Effective value, or the "not defined" sentinel when nothing applies
    pub fn value_or_not_defined(&self, code: &str) -> &'static str {
        self.get(code).unwrap_or(self.standard.not_defined())
    }

    /// Weight of the effective value; `None` for unweighted values
    pub fn weight(&self, code: &str) -> Option<Decimal> {
        match self.table().weight(code, self.value_or_not_defined(code))? {
            Weight::Fixed(weight) => Some(weight),
            Weight::Unweighted => None,
        }
    }

    pub fn value_description(&self, code: &str) -> Option<&'static str> {
        self.table()
            .value_description(code, self.value_or_not_defined(code))
    }

    /// Minimal vector: declared metrics in table order, sentinels dropped
    pub fn clean_vector(&self) -> String {
        let not_defined = self.standard.not_defined();
        let fields: Vec<String> = self
            .table()
            .iter()
            .filter_map(|metric| {
                self.declared
                    .get(metric.code)
                    .filter(|value| **value != not_defined)
                    .map(|value| format!("{}:{}", metric.code, value))
            })
            .collect();

        format!(
            "{}{}",
            self.standard.prefix().unwrap_or_default(),
            fields.join("/")
        )
    }

    /// Every metric of `group` in table order, undeclared ones shown as the sentinel
    pub fn group_vector(&self, group: MetricGroup) -> String {
        let not_defined = self.standard.not_defined();
        self.table()
            .group(group)
            .map(|metric| {
                let value = self.declared(metric.code).unwrap_or(not_defined);
                format!("{}:{}", metric.code, value)
            })
            .collect::<Vec<_>>()
            .join("/")
    }
}

fn apply_fallbacks(
    standard: Standard,
    declared: &BTreeMap<&'static str, &'static str>,
) -> BTreeMap<&'static str, &'static str> {
    let not_defined = standard.not_defined();
    let mut effective = declared.clone();

    for metric in standard.table().iter() {
        let current = declared.get(metric.code).copied();
        match metric.fallback {
            Fallback::None => {}
            Fallback::FromBase(base) => {
                if current.is_none_or(|value| value == not_defined) {
                    if let Some(base_value) = declared.get(base).copied() {
                        effective.insert(metric.code, base_value);
                    }
                }
            }
            Fallback::Value(value) => {
                if current.is_none() {
                    effective.insert(metric.code, value);
                }
            }
        }
    }

    effective
}

/// Equality follows the canonical serialization, not the raw input
impl PartialEq for ParsedVector {
    fn eq(&self, other: &Self) -> bool {
        self.clean_vector() == other.clean_vector()
    }
}

impl Eq for ParsedVector {}

impl Hash for ParsedVector {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.clean_vector().hash(state);
    }
}
