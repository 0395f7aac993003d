//! CVSS v3.0 / v3.1 score engine

use super::rounding::round_up;
use super::{weight, ScoreResult};
use crate::standard::MinorVersion;
use crate::vector::ParsedVector;
use rust_decimal::{Decimal, MathematicalOps};
use rust_decimal_macros::dec;

const SCOPE_CHANGED: &str = "C";

pub fn score(vector: &ParsedVector, minor: MinorVersion) -> ScoreResult {
    let scope = Scope::resolve(vector);
    let base = base_score(vector, scope);
    let temporal = round_up(base * threat_multiplier(vector));
    let environmental = environmental_score(vector, scope, minor);

    ScoreResult {
        base,
        temporal: Some(temporal),
        environmental: Some(environmental),
    }
}

#[derive(Debug, Clone, Copy)]
struct Scope {
    changed: bool,
    modified_changed: bool,
}

impl Scope {
    fn resolve(vector: &ParsedVector) -> Self {
        let scope = vector.get("S").unwrap_or("U");
        let modified = match vector.get("MS") {
            Some(value) if value != "X" => value,
            _ => scope,
        };
        Self {
            changed: scope == SCOPE_CHANGED,
            modified_changed: modified == SCOPE_CHANGED,
        }
    }
}

/// PR and MPR weigh more when the relevant scope is changed
fn privileges(vector: &ParsedVector, code: &str, changed: bool) -> Decimal {
    if !changed {
        return weight(vector, code);
    }
    match vector.get(code) {
        Some("L") => dec!(0.68),
        Some("H") => dec!(0.50),
        _ => dec!(0.85),
    }
}

fn threat_multiplier(vector: &ParsedVector) -> Decimal {
    weight(vector, "E") * weight(vector, "RL") * weight(vector, "RC")
}

/// 6.42 * x when unchanged, otherwise the scope-changed polynomial
fn impact_subscore(isc_base: Decimal, changed: bool) -> Decimal {
    if changed {
        dec!(7.52) * (isc_base - dec!(0.029)) - dec!(3.25) * (isc_base - dec!(0.02)).powu(15)
    } else {
        dec!(6.42) * isc_base
    }
}

fn combine(impact: Decimal, exploitability: Decimal, changed: bool) -> Decimal {
    let sum = impact + exploitability;
    let scaled = if changed { dec!(1.08) * sum } else { sum };
    round_up(scaled.min(dec!(10)))
}

fn base_score(vector: &ParsedVector, scope: Scope) -> Decimal {
    let isc_base = Decimal::ONE
        - (Decimal::ONE - weight(vector, "C"))
            * (Decimal::ONE - weight(vector, "I"))
            * (Decimal::ONE - weight(vector, "A"));
    let isc = impact_subscore(isc_base, scope.changed);
    let esc = dec!(8.22)
        * weight(vector, "AV")
        * weight(vector, "AC")
        * privileges(vector, "PR", scope.changed)
        * weight(vector, "UI");

    if isc <= Decimal::ZERO {
        Decimal::ZERO
    } else {
        combine(isc, esc, scope.changed)
    }
}

fn modified_impact_subscore(isc_base: Decimal, changed: bool, minor: MinorVersion) -> Decimal {
    match (changed, minor) {
        (false, _) => dec!(6.42) * isc_base,
        (true, MinorVersion::Zero) => impact_subscore(isc_base, true),
        (true, MinorVersion::One) => {
            dec!(7.52) * (isc_base - dec!(0.029))
                - dec!(3.25) * (isc_base * dec!(0.9731) - dec!(0.02)).powu(13)
        }
    }
}

fn environmental_score(vector: &ParsedVector, scope: Scope, minor: MinorVersion) -> Decimal {
    let scaled = |impact: &str, requirement: &str| {
        Decimal::ONE - weight(vector, impact) * weight(vector, requirement)
    };
    let isc_base = (Decimal::ONE - scaled("MC", "CR") * scaled("MI", "IR") * scaled("MA", "AR"))
        .min(dec!(0.915));
    let isc = modified_impact_subscore(isc_base, scope.modified_changed, minor);
    let esc = dec!(8.22)
        * weight(vector, "MAV")
        * weight(vector, "MAC")
        * privileges(vector, "MPR", scope.modified_changed)
        * weight(vector, "MUI");

    if isc <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    let modified = combine(isc, esc, scope.modified_changed);
    round_up(modified * threat_multiplier(vector))
}
