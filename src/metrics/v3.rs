//! CVSS v3.0 / v3.1 metric table
//!
//! Both minor versions share one table; only the environmental formula
//! differs between them.

use super::{Fallback, MetricDef, MetricGroup, MetricTable};
use once_cell::sync::Lazy;
use rust_decimal_macros::dec;

fn impact(code: &'static str, name: &'static str, json_name: &'static str) -> MetricDef {
    MetricDef::new(code, name, json_name, MetricGroup::Base)
        .mandatory()
        .weighted("H", "High", dec!(0.56))
        .weighted("L", "Low", dec!(0.22))
        .weighted("N", "None", dec!(0))
}

fn requirement(code: &'static str, name: &'static str, json_name: &'static str) -> MetricDef {
    MetricDef::new(code, name, json_name, MetricGroup::Environmental)
        .weighted("X", "Not Defined", dec!(1))
        .weighted("H", "High", dec!(1.5))
        .weighted("M", "Medium", dec!(1))
        .weighted("L", "Low", dec!(0.5))
}

/// Environmental copy of a base metric, filled from it when not defined
fn modified(base: &MetricDef, code: &'static str, name: &'static str, json_name: &'static str) -> MetricDef {
    MetricDef::new(code, name, json_name, MetricGroup::Environmental)
        .fallback(Fallback::FromBase(base.code))
        .unweighted("X", "Not Defined")
        .values_of(base)
}

pub static TABLE: Lazy<MetricTable> = Lazy::new(|| {
    let av = MetricDef::new("AV", "Attack Vector", "attackVector", MetricGroup::Base)
        .mandatory()
        .weighted("N", "Network", dec!(0.85))
        .weighted("A", "Adjacent", dec!(0.62))
        .weighted("L", "Local", dec!(0.55))
        .weighted("P", "Physical", dec!(0.2));
    let ac = MetricDef::new("AC", "Attack Complexity", "attackComplexity", MetricGroup::Base)
        .mandatory()
        .weighted("L", "Low", dec!(0.77))
        .weighted("H", "High", dec!(0.44));
    // Scope-changed weights for PR live in the score engine
    let pr = MetricDef::new("PR", "Privileges Required", "privilegesRequired", MetricGroup::Base)
        .mandatory()
        .weighted("N", "None", dec!(0.85))
        .weighted("L", "Low", dec!(0.62))
        .weighted("H", "High", dec!(0.27));
    let ui = MetricDef::new("UI", "User Interaction", "userInteraction", MetricGroup::Base)
        .mandatory()
        .weighted("N", "None", dec!(0.85))
        .weighted("R", "Required", dec!(0.62));
    let s = MetricDef::new("S", "Scope", "scope", MetricGroup::Base)
        .mandatory()
        .unweighted("C", "Changed")
        .unweighted("U", "Unchanged");
    let c = impact("C", "Confidentiality", "confidentialityImpact");
    let i = impact("I", "Integrity", "integrityImpact");
    let a = impact("A", "Availability", "availabilityImpact");

    let mav = modified(&av, "MAV", "Modified Attack Vector", "modifiedAttackVector");
    let mac = modified(&ac, "MAC", "Modified Attack Complexity", "modifiedAttackComplexity");
    let mpr = modified(&pr, "MPR", "Modified Privileges Required", "modifiedPrivilegesRequired");
    let mui = modified(&ui, "MUI", "Modified User Interaction", "modifiedUserInteraction");
    // Modified scope is resolved by the score engine, not filled in
    let ms = MetricDef::new("MS", "Modified Scope", "modifiedScope", MetricGroup::Environmental)
        .unweighted("X", "Not Defined")
        .values_of(&s);
    let mc = modified(&c, "MC", "Modified Confidentiality", "modifiedConfidentialityImpact");
    let mi = modified(&i, "MI", "Modified Integrity", "modifiedIntegrityImpact");
    let ma = modified(&a, "MA", "Modified Availability", "modifiedAvailabilityImpact");

    MetricTable::new(vec![
        av,
        ac,
        pr,
        ui,
        s,
        c,
        i,
        a,
        MetricDef::new("E", "Exploit Code Maturity", "exploitCodeMaturity", MetricGroup::Temporal)
            .weighted("X", "Not Defined", dec!(1))
            .weighted("H", "High", dec!(1))
            .weighted("F", "Functional", dec!(0.97))
            .weighted("P", "Proof-of-Concept", dec!(0.94))
            .weighted("U", "Unproven", dec!(0.91)),
        MetricDef::new("RL", "Remediation Level", "remediationLevel", MetricGroup::Temporal)
            .weighted("X", "Not Defined", dec!(1))
            .weighted("U", "Unavailable", dec!(1))
            .weighted("W", "Workaround", dec!(0.97))
            .weighted("T", "Temporary Fix", dec!(0.96))
            .weighted("O", "Official Fix", dec!(0.95)),
        MetricDef::new("RC", "Report Confidence", "reportConfidence", MetricGroup::Temporal)
            .weighted("X", "Not Defined", dec!(1))
            .weighted("C", "Confirmed", dec!(1))
            .weighted("R", "Reasonable", dec!(0.96))
            .weighted("U", "Unknown", dec!(0.92)),
        requirement("CR", "Confidentiality Req.", "confidentialityRequirement"),
        requirement("IR", "Integrity Req.", "integrityRequirement"),
        requirement("AR", "Availability Req.", "availabilityRequirement"),
        mav,
        mac,
        mpr,
        mui,
        ms,
        mc,
        mi,
        ma,
    ])
});
