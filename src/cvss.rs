//! Scored vector facade
//!
//! [`Cvss`] ties a validated [`ParsedVector`] to the scores its version's
//! engine produces. Everything is computed once at construction; the value is
//! immutable afterwards.

use crate::errors::{CvssError, Result};
use crate::metrics::MetricGroup;
use crate::parser::parse_vector;
use crate::scoring::{self, ScoreResult};
use crate::severity::Severity;
use crate::standard::{CvssVersion, Stage, Standard};
use crate::vector::ParsedVector;
use rust_decimal::Decimal;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

#[derive(Debug, Clone)]
pub struct Cvss {
    vector: ParsedVector,
    scores: ScoreResult,
}

impl Cvss {
    /// Parse and score `raw` as a vector of the given family.
    pub fn parse(version: CvssVersion, raw: &str) -> Result<Self> {
        let vector = parse_vector(version, raw)?;
        let scores = scoring::compute(&vector);
        Ok(Self { vector, scores })
    }

    pub fn v2(raw: &str) -> Result<Self> {
        Self::parse(CvssVersion::V2, raw)
    }

    pub fn v3(raw: &str) -> Result<Self> {
        Self::parse(CvssVersion::V3, raw)
    }

    pub fn v4(raw: &str) -> Result<Self> {
        Self::parse(CvssVersion::V4, raw)
    }

    /// Parse with the family picked from the vector prefix
    pub fn detect(raw: &str) -> Result<Self> {
        Self::parse(CvssVersion::detect(raw), raw)
    }

    /// Parse Red Hat notation (`<score>/<vector>`) and check the supplied
    /// score against the computed base score.
    pub fn from_rh_vector(version: CvssVersion, raw: &str) -> Result<Self> {
        let (score, vector) = raw
            .split_once('/')
            .ok_or_else(|| CvssError::rh_malformed(version, raw))?;
        let supplied: f64 = score
            .trim()
            .parse()
            .map_err(|_| CvssError::rh_malformed(version, raw))?;

        let cvss = Self::parse(version, vector)?;
        let computed = cvss.base_score();
        if computed.to_string().parse::<f64>().ok() != Some(supplied) {
            return Err(CvssError::rh_score_mismatch(version, raw, computed, score));
        }
        Ok(cvss)
    }

    pub fn vector(&self) -> &ParsedVector {
        &self.vector
    }

    pub fn standard(&self) -> Standard {
        self.vector.standard()
    }

    pub fn version(&self) -> CvssVersion {
        self.vector.version()
    }

    pub fn scores(&self) -> ScoreResult {
        self.scores
    }

    pub fn base_score(&self) -> Decimal {
        self.scores.base
    }

    pub fn temporal_score(&self) -> Option<Decimal> {
        self.scores.temporal
    }

    pub fn environmental_score(&self) -> Option<Decimal> {
        self.scores.environmental
    }

    pub fn severity(&self, stage: Stage) -> Severity {
        self.standard()
            .severity_scale()
            .classify(self.scores.stage(stage))
    }

    /// One severity per stage the version defines
    pub fn severities(&self) -> Vec<Severity> {
        self.standard()
            .stages()
            .iter()
            .map(|stage| self.severity(*stage))
            .collect()
    }

    /// `(stage, score, severity)` for every stage the version defines
    pub fn stage_scores(&self) -> Vec<(Stage, Option<Decimal>, Severity)> {
        self.standard()
            .stages()
            .iter()
            .map(|stage| (*stage, self.scores.stage(*stage), self.severity(*stage)))
            .collect()
    }

    pub fn clean_vector(&self) -> String {
        self.vector.clean_vector()
    }

    /// Base score and clean vector in Red Hat notation
    pub fn rh_vector(&self) -> String {
        format!("{:.1}/{}", self.base_score(), self.clean_vector())
    }

    pub fn temporal_vector(&self) -> String {
        self.vector.group_vector(MetricGroup::Temporal)
    }

    pub fn environmental_vector(&self) -> String {
        self.vector.group_vector(MetricGroup::Environmental)
    }

    pub fn value_description(&self, code: &str) -> Option<&'static str> {
        self.vector.value_description(code)
    }
}

impl FromStr for Cvss {
    type Err = CvssError;

    fn from_str(s: &str) -> Result<Self> {
        Self::detect(s)
    }
}

impl fmt::Display for Cvss {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.clean_vector())
    }
}

impl PartialEq for Cvss {
    fn eq(&self, other: &Self) -> bool {
        self.vector == other.vector
    }
}

impl Eq for Cvss {}

impl Hash for Cvss {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.vector.hash(state);
    }
}
