//! CVSS v4.0 score engine
//!
//! The vector is bucketed into a six-digit MacroVector (one level per
//! equivalence set EQ1..EQ6) whose published score is then lowered by the
//! mean severity distance between the vector and the highest-severity
//! vectors of its bucket. Arithmetic is carried out in `f64` in the same
//! order as the FIRST reference calculator so results round identically.

mod lookup;

use super::rounding::round_float_half_up;
use crate::vector::ParsedVector;
use rust_decimal::Decimal;

const STEP: f64 = 0.1;

const IMPACT_METRICS: [&str; 6] = ["VC", "VI", "VA", "SC", "SI", "SA"];

/// Metrics compared against maximal vectors, in accumulation order
const DISTANCE_METRICS: [&str; 14] = [
    "AV", "PR", "UI", "AC", "AT", "VC", "VI", "VA", "SC", "SI", "SA", "CR", "IR", "AR",
];

pub fn base_score(vector: &ParsedVector) -> Decimal {
    let metrics = Effective(vector);

    if IMPACT_METRICS.iter().all(|code| metrics.m(code) == "N") {
        return Decimal::ZERO;
    }

    let macro_vector = macro_vector(&metrics);
    let Some(value) = lookup::score(&macro_vector) else {
        return Decimal::ZERO;
    };

    round_float_half_up(interpolate(&metrics, macro_vector, value))
}

/// Effective values as the scoring rules read them
struct Effective<'a>(&'a ParsedVector);

impl Effective<'_> {
    /// Modified value when one is set, otherwise the base value, with
    /// undefined exploit maturity read as Attacked and undefined
    /// requirements read as High
    fn m(&self, code: &str) -> &'static str {
        let selected = self.0.value_or_not_defined(code);
        match (code, selected) {
            ("E", "X") => return "A",
            ("CR" | "IR" | "AR", "X") => return "H",
            _ => {}
        }
        self.0
            .table()
            .modified_of(code)
            .and_then(|modified| self.0.get(modified.code))
            .filter(|value| *value != "X")
            .unwrap_or(selected)
    }

    fn is(&self, code: &str, value: &str) -> bool {
        self.m(code) == value
    }
}

fn macro_vector(m: &Effective<'_>) -> [u8; 6] {
    let av_n = m.is("AV", "N");
    let pr_n = m.is("PR", "N");
    let ui_n = m.is("UI", "N");
    let eq1 = if av_n && pr_n && ui_n {
        0
    } else if (av_n || pr_n || ui_n) && !m.is("AV", "P") {
        1
    } else {
        2
    };

    let eq2 = if m.is("AC", "L") && m.is("AT", "N") { 0 } else { 1 };

    let vc_h = m.is("VC", "H");
    let vi_h = m.is("VI", "H");
    let va_h = m.is("VA", "H");
    let eq3 = if vc_h && vi_h {
        0
    } else if vc_h || vi_h || va_h {
        1
    } else {
        2
    };

    let eq4 = if m.is("MSI", "S") || m.is("MSA", "S") {
        0
    } else if m.is("SC", "H") || m.is("SI", "H") || m.is("SA", "H") {
        1
    } else {
        2
    };

    let eq5 = match m.m("E") {
        "P" => 1,
        "U" => 2,
        _ => 0,
    };

    let eq6 = if (m.is("CR", "H") && vc_h)
        || (m.is("IR", "H") && vi_h)
        || (m.is("AR", "H") && va_h)
    {
        0
    } else {
        1
    };

    [eq1, eq2, eq3, eq4, eq5, eq6]
}

fn level(code: &str, value: &str) -> f64 {
    match (code, value) {
        ("AV", "N") | ("PR", "N") | ("UI", "N") => 0.0,
        ("AV", "A") | ("PR", "L") | ("UI", "P") => 0.1,
        ("AV", "L") | ("PR", "H") | ("UI", "A") => 0.2,
        ("AV", "P") => 0.3,
        ("AC", "L") | ("AT", "N") => 0.0,
        ("AC", "H") | ("AT", "P") => 0.1,
        ("VC" | "VI" | "VA", "H") => 0.0,
        ("VC" | "VI" | "VA", "L") => 0.1,
        ("VC" | "VI" | "VA", "N") => 0.2,
        ("SI" | "SA", "S") => 0.0,
        ("SC" | "SI" | "SA", "H") => 0.1,
        ("SC" | "SI" | "SA", "L") => 0.2,
        ("SC" | "SI" | "SA", "N") => 0.3,
        ("CR" | "IR" | "AR", "H") => 0.0,
        ("CR" | "IR" | "AR", "M") => 0.1,
        ("CR" | "IR" | "AR", "L") => 0.2,
        _ => 0.0,
    }
}

/// Value of `code` within a maximal vector made of several fragments
fn fragment_value<'f>(fragments: &[&'f str], code: &str) -> Option<&'f str> {
    fragments
        .iter()
        .copied()
        .flat_map(|fragment| fragment.split('/'))
        .find_map(|field| {
            let (metric, value) = field.split_once(':')?;
            (metric == code).then_some(value)
        })
}

/// Per-metric distances to the first maximal vector that dominates the
/// current one; falls back to the last candidate when none dominates
fn severity_distances(m: &Effective<'_>, mv: [u8; 6]) -> [f64; 14] {
    let [eq1, eq2, eq3, eq4, eq5, eq6] = mv;
    let mut distances = [0.0; 14];

    for eq1_max in lookup::eq1_maxes(eq1) {
        for eq2_max in lookup::eq2_maxes(eq2) {
            for eq3_eq6_max in lookup::eq3_eq6_maxes(eq3, eq6) {
                for eq4_max in lookup::eq4_maxes(eq4) {
                    for eq5_max in lookup::eq5_maxes(eq5) {
                        let fragments = [*eq1_max, *eq2_max, *eq3_eq6_max, *eq4_max, *eq5_max];
                        for (slot, code) in distances.iter_mut().zip(DISTANCE_METRICS) {
                            let max_value = fragment_value(&fragments, code).unwrap_or_default();
                            *slot = level(code, m.m(code)) - level(code, max_value);
                        }
                        if distances.iter().all(|distance| *distance >= 0.0) {
                            return distances;
                        }
                    }
                }
            }
        }
    }

    distances
}

/// Score of the next lower macrovector along the EQ3+EQ6 pair
fn eq3_eq6_lower_score(mv: [u8; 6]) -> Option<f64> {
    let [eq1, eq2, eq3, eq4, eq5, eq6] = mv;
    match (eq3, eq6) {
        (1, 1) | (0, 1) => lookup::score(&[eq1, eq2, eq3 + 1, eq4, eq5, eq6]),
        (1, 0) => lookup::score(&[eq1, eq2, eq3, eq4, eq5, eq6 + 1]),
        (0, 0) => {
            let left = lookup::score(&[eq1, eq2, eq3, eq4, eq5, eq6 + 1]);
            let right = lookup::score(&[eq1, eq2, eq3 + 1, eq4, eq5, eq6]);
            // A missing left neighbour wins the comparison, as NaN would
            match (left, right) {
                (Some(l), Some(r)) if r > l => Some(r),
                (left, _) => left,
            }
        }
        _ => lookup::score(&[eq1, eq2, eq3 + 1, eq4, eq5, eq6 + 1]),
    }
}

fn lower_score(mv: [u8; 6], index: usize) -> Option<f64> {
    let mut lower = mv;
    lower[index] += 1;
    lookup::score(&lower)
}

fn interpolate(m: &Effective<'_>, mv: [u8; 6], value: f64) -> f64 {
    let [eq1, eq2, eq3, eq4, _, eq6] = mv;
    let d = severity_distances(m, mv);

    let current_eq1 = d[0] + d[1] + d[2];
    let current_eq2 = d[3] + d[4];
    let current_eq3_eq6 = d[5] + d[6] + d[7] + d[11] + d[12] + d[13];
    let current_eq4 = d[8] + d[9] + d[10];

    let dimensions = [
        (
            lower_score(mv, 0),
            Some(current_eq1 / (lookup::eq1_depth(eq1) * STEP)),
        ),
        (
            lower_score(mv, 1),
            Some(current_eq2 / (lookup::eq2_depth(eq2) * STEP)),
        ),
        (
            eq3_eq6_lower_score(mv),
            Some(current_eq3_eq6 / (lookup::eq3_eq6_depth(eq3, eq6) * STEP)),
        ),
        (
            lower_score(mv, 3),
            Some(current_eq4 / (lookup::eq4_depth(eq4) * STEP)),
        ),
        // EQ5 has no interpolation step: it still counts towards the mean
        // when a lower neighbour exists but always contributes zero
        (lower_score(mv, 4), None),
    ];

    let mut existing_lower = 0u32;
    let mut total = 0.0;
    for (lower, percent) in dimensions {
        let Some(available) = lower.map(|lower| value - lower) else {
            continue;
        };
        if available < 0.0 {
            continue;
        }
        existing_lower += 1;
        total += percent.map_or(0.0, |percent| available * percent);
    }

    let mean_distance = if existing_lower == 0 {
        0.0
    } else {
        total / f64::from(existing_lower)
    };

    (value - mean_distance).clamp(0.0, 10.0)
}
