//! Static metric tables, one per version
//!
//! A table lists every metric in canonical serialization order together with
//! its display name, JSON schema field name, group, mandatory flag, the rule
//! used to fill it in when a vector leaves it out, and its allowed values.
//! Tables are built once behind `once_cell::sync::Lazy` and only read after.

use rust_decimal::Decimal;

pub mod v2;
pub mod v3;
pub mod v4;

/// Numeric weight attached to a metric value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Weight {
    Fixed(Decimal),
    /// Scope-like values that select a formula instead of scaling one
    Unweighted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetricGroup {
    Base,
    Temporal,
    Environmental,
    Threat,
    Supplemental,
}

/// How a metric left out of a vector is filled in for scoring
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fallback {
    /// Nothing is filled in
    None,
    /// Copy the named base metric when absent or "not defined"
    FromBase(&'static str),
    /// Use a fixed value when absent
    Value(&'static str),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricValue {
    pub code: &'static str,
    pub name: &'static str,
    pub weight: Weight,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricDef {
    pub code: &'static str,
    pub name: &'static str,
    pub json_name: &'static str,
    pub group: MetricGroup,
    pub mandatory: bool,
    pub fallback: Fallback,
    pub values: Vec<MetricValue>,
}

impl MetricDef {
    pub(crate) fn new(
        code: &'static str,
        name: &'static str,
        json_name: &'static str,
        group: MetricGroup,
    ) -> Self {
        Self {
            code,
            name,
            json_name,
            group,
            mandatory: false,
            fallback: Fallback::None,
            values: Vec::new(),
        }
    }

    pub(crate) fn mandatory(mut self) -> Self {
        self.mandatory = true;
        self
    }

    pub(crate) fn fallback(mut self, fallback: Fallback) -> Self {
        self.fallback = fallback;
        self
    }

    pub(crate) fn weighted(mut self, code: &'static str, name: &'static str, weight: Decimal) -> Self {
        self.values.push(MetricValue {
            code,
            name,
            weight: Weight::Fixed(weight),
        });
        self
    }

    pub(crate) fn unweighted(mut self, code: &'static str, name: &'static str) -> Self {
        self.values.push(MetricValue {
            code,
            name,
            weight: Weight::Unweighted,
        });
        self
    }

    /// Copy the value list of another metric, used for modified metrics
    pub(crate) fn values_of(mut self, other: &MetricDef) -> Self {
        self.values.extend(other.values.iter().cloned());
        self
    }

    pub fn value(&self, code: &str) -> Option<&MetricValue> {
        self.values.iter().find(|value| value.code == code)
    }

    pub fn value_codes(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.values.iter().map(|value| value.code)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricTable {
    metrics: Vec<MetricDef>,
}

impl MetricTable {
    pub(crate) fn new(metrics: Vec<MetricDef>) -> Self {
        Self { metrics }
    }

    pub fn get(&self, code: &str) -> Option<&MetricDef> {
        self.metrics.iter().find(|metric| metric.code == code)
    }

    /// Metrics in canonical order
    pub fn iter(&self) -> impl Iterator<Item = &MetricDef> {
        self.metrics.iter()
    }

    pub fn len(&self) -> usize {
        self.metrics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.metrics.is_empty()
    }

    pub fn mandatory(&self) -> impl Iterator<Item = &MetricDef> {
        self.metrics.iter().filter(|metric| metric.mandatory)
    }

    pub fn group(&self, group: MetricGroup) -> impl Iterator<Item = &MetricDef> {
        self.metrics.iter().filter(move |metric| metric.group == group)
    }

    /// The modified counterpart of a base metric, e.g. `MAV` for `AV`
    pub fn modified_of(&self, base: &str) -> Option<&MetricDef> {
        self.metrics
            .iter()
            .find(|metric| {
                matches!(metric.fallback, Fallback::FromBase(from) if from == base)
                    && metric.code != base
            })
    }

    pub fn weight(&self, code: &str, value: &str) -> Option<Weight> {
        self.get(code)?.value(value).map(|value| value.weight)
    }

    pub fn value_description(&self, code: &str, value: &str) -> Option<&'static str> {
        self.get(code)?.value(value).map(|value| value.name)
    }
}
