//! CVSS v4.0 metric table
//!
//! v4 scores through the MacroVector lookup rather than per-value weights,
//! so every value here is unweighted.

use super::{Fallback, MetricDef, MetricGroup, MetricTable};
use once_cell::sync::Lazy;

fn impact(code: &'static str, name: &'static str, json_name: &'static str) -> MetricDef {
    MetricDef::new(code, name, json_name, MetricGroup::Base)
        .mandatory()
        .unweighted("H", "High")
        .unweighted("L", "Low")
        .unweighted("N", "None")
}

fn requirement(code: &'static str, name: &'static str, json_name: &'static str) -> MetricDef {
    MetricDef::new(code, name, json_name, MetricGroup::Environmental)
        .fallback(Fallback::Value("X"))
        .unweighted("X", "Not Defined")
        .unweighted("H", "High")
        .unweighted("M", "Medium")
        .unweighted("L", "Low")
}

fn modified(base: &MetricDef, code: &'static str, name: &'static str, json_name: &'static str) -> MetricDef {
    MetricDef::new(code, name, json_name, MetricGroup::Environmental)
        .fallback(Fallback::FromBase(base.code))
        .unweighted("X", "Not Defined")
        .values_of(base)
}

fn supplemental(code: &'static str, name: &'static str, json_name: &'static str) -> MetricDef {
    MetricDef::new(code, name, json_name, MetricGroup::Supplemental)
        .fallback(Fallback::Value("X"))
        .unweighted("X", "Not Defined")
}

pub static TABLE: Lazy<MetricTable> = Lazy::new(|| {
    let av = MetricDef::new("AV", "Attack Vector", "attackVector", MetricGroup::Base)
        .mandatory()
        .unweighted("N", "Network")
        .unweighted("A", "Adjacent")
        .unweighted("L", "Local")
        .unweighted("P", "Physical");
    let ac = MetricDef::new("AC", "Attack Complexity", "attackComplexity", MetricGroup::Base)
        .mandatory()
        .unweighted("L", "Low")
        .unweighted("H", "High");
    let at = MetricDef::new("AT", "Attack Requirements", "attackRequirements", MetricGroup::Base)
        .mandatory()
        .unweighted("N", "None")
        .unweighted("P", "Present");
    let pr = MetricDef::new("PR", "Privileges Required", "privilegesRequired", MetricGroup::Base)
        .mandatory()
        .unweighted("N", "None")
        .unweighted("L", "Low")
        .unweighted("H", "High");
    let ui = MetricDef::new("UI", "User Interaction", "userInteraction", MetricGroup::Base)
        .mandatory()
        .unweighted("N", "None")
        .unweighted("P", "Passive")
        .unweighted("A", "Active");
    let vc = impact(
        "VC",
        "Vulnerable System Confidentiality Impact",
        "vulnerableSystemImpactConfidentiality",
    );
    let vi = impact(
        "VI",
        "Vulnerable System Integrity Impact",
        "vulnerableSystemImpactIntegrity",
    );
    let va = impact(
        "VA",
        "Vulnerable System Availability Impact",
        "vulnerableSystemImpactAvailability",
    );
    let sc = impact(
        "SC",
        "Subsequent System Confidentiality Impact",
        "subsequentSystemImpactConfidentiality",
    );
    let si = impact(
        "SI",
        "Subsequent System Integrity Impact",
        "subsequentSystemImpactIntegrity",
    );
    let sa = impact(
        "SA",
        "Subsequent System Availability Impact",
        "subsequentSystemImpactAvailability",
    );

    let mav = modified(&av, "MAV", "Modified Attack Vector", "modifiedAttackVector");
    let mac = modified(&ac, "MAC", "Modified Attack Complexity", "modifiedAttackComplexity");
    let mat = modified(&at, "MAT", "Modified Attack Requirements", "modifiedAttackRequirements");
    let mpr = modified(&pr, "MPR", "Modified Privileges Required", "modifiedPrivilegesRequired");
    let mui = modified(&ui, "MUI", "Modified User Interaction", "modifiedUserInteraction");
    let mvc = modified(
        &vc,
        "MVC",
        "Modified Vulnerable System Confidentiality Impact",
        "modifiedVulnerableSystemImpactConfidentiality",
    );
    let mvi = modified(
        &vi,
        "MVI",
        "Modified Vulnerable System Integrity Impact",
        "modifiedVulnerableSystemImpactIntegrity",
    );
    let mva = modified(
        &va,
        "MVA",
        "Modified Vulnerable System Availability Impact",
        "modifiedVulnerableSystemImpactAvailability",
    );
    let msc = modified(
        &sc,
        "MSC",
        "Modified Subsequent System Confidentiality Impact",
        "modifiedSubsequentSystemImpactConfidentiality",
    );
    // Subsequent integrity and availability may additionally be raised to Safety
    let msi = modified(
        &si,
        "MSI",
        "Modified Subsequent System Integrity Impact",
        "modifiedSubsequentSystemImpactIntegrity",
    )
    .unweighted("S", "Safety");
    let msa = modified(
        &sa,
        "MSA",
        "Modified Subsequent System Availability Impact",
        "modifiedSubsequentSystemImpactAvailability",
    )
    .unweighted("S", "Safety");

    MetricTable::new(vec![
        av,
        ac,
        at,
        pr,
        ui,
        vc,
        vi,
        va,
        sc,
        si,
        sa,
        MetricDef::new("E", "Exploit Maturity", "exploitMaturity", MetricGroup::Threat)
            .fallback(Fallback::Value("X"))
            .unweighted("X", "Not Defined")
            .unweighted("A", "Attacked")
            .unweighted("P", "Proof-of-Concept")
            .unweighted("U", "Unreported"),
        requirement("CR", "Confidentiality Requirements", "confidentialityRequirements"),
        requirement("IR", "Integrity Requirements", "integrityRequirements"),
        requirement("AR", "Availability Requirements", "availabilityRequirements"),
        mav,
        mac,
        mat,
        mpr,
        mui,
        mvc,
        mvi,
        mva,
        msc,
        msi,
        msa,
        supplemental("S", "Safety", "safety")
            .unweighted("N", "Negligible")
            .unweighted("P", "Present"),
        supplemental("AU", "Automatable", "automatable")
            .unweighted("N", "No")
            .unweighted("Y", "Yes"),
        supplemental("R", "Recovery", "recovery")
            .unweighted("A", "Automatic")
            .unweighted("U", "User")
            .unweighted("I", "Irrecoverable"),
        supplemental("V", "Value Density", "valueDensity")
            .unweighted("D", "Diffuse")
            .unweighted("C", "Concentrated"),
        supplemental(
            "RE",
            "Vulnerability Response Effort",
            "vulnerabilityResponseEffort",
        )
        .unweighted("L", "Low")
        .unweighted("M", "Moderate")
        .unweighted("H", "High"),
        supplemental("U", "Provider Urgency", "providerUrgency")
            .unweighted("Clear", "Clear")
            .unweighted("Green", "Green")
            .unweighted("Amber", "Amber")
            .unweighted("Red", "Red"),
    ])
});
