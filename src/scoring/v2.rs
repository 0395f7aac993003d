//! CVSS v2 score engine

use super::rounding::round_half_up;
use super::{weight, ScoreResult};
use crate::vector::ParsedVector;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

const TEMPORAL_METRICS: [&str; 3] = ["E", "RL", "RC"];
const ENVIRONMENTAL_METRICS: [&str; 5] = ["CDP", "TD", "CR", "IR", "AR"];

pub fn score(vector: &ParsedVector) -> ScoreResult {
    let base = base_equation(vector, impact(vector)).max(Decimal::ZERO);

    let temporal = any_defined(vector, &TEMPORAL_METRICS)
        .then(|| temporal_equation(vector, base).max(Decimal::ZERO));

    let environmental = any_defined(vector, &ENVIRONMENTAL_METRICS).then(|| {
        let adjusted_base = base_equation(vector, adjusted_impact(vector));
        let adjusted_temporal = temporal_equation(vector, adjusted_base);
        round_half_up(
            (adjusted_temporal + (dec!(10) - adjusted_temporal) * weight(vector, "CDP"))
                * weight(vector, "TD"),
        )
        .max(Decimal::ZERO)
    });

    ScoreResult {
        base,
        temporal,
        environmental,
    }
}

fn any_defined(vector: &ParsedVector, codes: &[&str]) -> bool {
    codes
        .iter()
        .any(|code| vector.declared(code).is_some_and(|value| value != "ND"))
}

/// 10.41 * (1 - (1 - C) * (1 - I) * (1 - A))
fn impact(vector: &ParsedVector) -> Decimal {
    dec!(10.41)
        * (Decimal::ONE
            - (Decimal::ONE - weight(vector, "C"))
                * (Decimal::ONE - weight(vector, "I"))
                * (Decimal::ONE - weight(vector, "A")))
}

/// Impact with each component scaled by its security requirement, capped at 10
fn adjusted_impact(vector: &ParsedVector) -> Decimal {
    let scaled = |impact: &str, requirement: &str| {
        Decimal::ONE - weight(vector, impact) * weight(vector, requirement)
    };
    (dec!(10.41) * (Decimal::ONE - scaled("C", "CR") * scaled("I", "IR") * scaled("A", "AR")))
        .min(dec!(10))
}

fn exploitability(vector: &ParsedVector) -> Decimal {
    dec!(20) * weight(vector, "AV") * weight(vector, "AC") * weight(vector, "Au")
}

fn base_equation(vector: &ParsedVector, impact: Decimal) -> Decimal {
    let f_impact = if impact.is_zero() {
        Decimal::ZERO
    } else {
        dec!(1.176)
    };
    round_half_up(
        (dec!(0.6) * impact + dec!(0.4) * exploitability(vector) - dec!(1.5)) * f_impact,
    )
}

fn temporal_equation(vector: &ParsedVector, base: Decimal) -> Decimal {
    round_half_up(base * weight(vector, "E") * weight(vector, "RL") * weight(vector, "RC"))
}
