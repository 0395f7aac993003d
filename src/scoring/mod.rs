//! Score engines
//!
//! Each engine is a pure function from a validated [`ParsedVector`] to a
//! [`ScoreResult`]. Dispatch happens on the vector's [`Standard`].

use crate::standard::{Stage, Standard};
use crate::vector::ParsedVector;
use rust_decimal::Decimal;

pub mod rounding;
pub mod v2;
pub mod v3;
pub mod v4;

/// Scores of one vector
///
/// `temporal` and `environmental` are `None` when the version does not
/// define them (v4) or when the vector supplies none of their metrics (v2).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScoreResult {
    pub base: Decimal,
    pub temporal: Option<Decimal>,
    pub environmental: Option<Decimal>,
}

impl ScoreResult {
    pub fn base_only(base: Decimal) -> Self {
        Self {
            base,
            temporal: None,
            environmental: None,
        }
    }

    pub fn stage(&self, stage: Stage) -> Option<Decimal> {
        match stage {
            Stage::Base => Some(self.base),
            Stage::Temporal => self.temporal,
            Stage::Environmental => self.environmental,
        }
    }
}

pub fn compute(vector: &ParsedVector) -> ScoreResult {
    match vector.standard() {
        Standard::V2 => v2::score(vector),
        Standard::V3(minor) => v3::score(vector, minor),
        Standard::V4 => ScoreResult::base_only(v4::base_score(vector)),
    }
}

/// Weight of a weighted metric; validated vectors always resolve one
pub(crate) fn weight(vector: &ParsedVector, code: &str) -> Decimal {
    vector.weight(code).unwrap_or(Decimal::ONE)
}
