//! CVSS v2 metric table

use super::{MetricDef, MetricGroup, MetricTable};
use once_cell::sync::Lazy;
use rust_decimal_macros::dec;

fn impact(code: &'static str, name: &'static str, json_name: &'static str) -> MetricDef {
    MetricDef::new(code, name, json_name, MetricGroup::Base)
        .mandatory()
        .weighted("N", "None", dec!(0))
        .weighted("P", "Partial", dec!(0.275))
        .weighted("C", "Complete", dec!(0.660))
}

fn requirement(code: &'static str, name: &'static str, json_name: &'static str) -> MetricDef {
    MetricDef::new(code, name, json_name, MetricGroup::Environmental)
        .weighted("L", "Low", dec!(0.5))
        .weighted("M", "Medium", dec!(1))
        .weighted("H", "High", dec!(1.51))
        .weighted("ND", "Not Defined", dec!(1))
}

pub static TABLE: Lazy<MetricTable> = Lazy::new(|| {
    MetricTable::new(vec![
        MetricDef::new("AV", "Access Vector", "accessVector", MetricGroup::Base)
            .mandatory()
            .weighted("L", "Local", dec!(0.395))
            .weighted("A", "Adjacent Network", dec!(0.646))
            .weighted("N", "Network", dec!(1)),
        MetricDef::new("AC", "Access Complexity", "accessComplexity", MetricGroup::Base)
            .mandatory()
            .weighted("H", "High", dec!(0.35))
            .weighted("M", "Medium", dec!(0.61))
            .weighted("L", "Low", dec!(0.71)),
        MetricDef::new("Au", "Authentication", "authentication", MetricGroup::Base)
            .mandatory()
            .weighted("M", "Multiple", dec!(0.45))
            .weighted("S", "Single", dec!(0.56))
            .weighted("N", "None", dec!(0.704)),
        impact("C", "Confidentiality Impact", "confidentialityImpact"),
        impact("I", "Integrity Impact", "integrityImpact"),
        impact("A", "Availability Impact", "availabilityImpact"),
        MetricDef::new("E", "Exploitability", "exploitability", MetricGroup::Temporal)
            .weighted("U", "Unproven", dec!(0.85))
            .weighted("POC", "Proof-of-Concept", dec!(0.9))
            .weighted("F", "Functional", dec!(0.95))
            .weighted("H", "High", dec!(1))
            .weighted("ND", "Not Defined", dec!(1)),
        MetricDef::new("RL", "Remediation Level", "remediationLevel", MetricGroup::Temporal)
            .weighted("OF", "Official Fix", dec!(0.87))
            .weighted("TF", "Temporary Fix", dec!(0.90))
            .weighted("W", "Workaround", dec!(0.95))
            .weighted("U", "Unavailable", dec!(1))
            .weighted("ND", "Not Defined", dec!(1)),
        MetricDef::new("RC", "Report Confidence", "reportConfidence", MetricGroup::Temporal)
            .weighted("UC", "Unconfirmed", dec!(0.9))
            .weighted("UR", "Uncorroborated", dec!(0.95))
            .weighted("C", "Confirmed", dec!(1))
            .weighted("ND", "Not Defined", dec!(1)),
        MetricDef::new(
            "CDP",
            "Collateral Damage Potential",
            "collateralDamagePotential",
            MetricGroup::Environmental,
        )
        .weighted("N", "None", dec!(0))
        .weighted("L", "Low", dec!(0.1))
        .weighted("LM", "Low-Medium", dec!(0.3))
        .weighted("MH", "Medium-High", dec!(0.4))
        .weighted("H", "High", dec!(0.5))
        .weighted("ND", "Not Defined", dec!(0)),
        MetricDef::new(
            "TD",
            "Target Distribution",
            "targetDistribution",
            MetricGroup::Environmental,
        )
        .weighted("N", "None", dec!(0))
        .weighted("L", "Low", dec!(0.25))
        .weighted("M", "Medium", dec!(0.75))
        .weighted("H", "High", dec!(1))
        .weighted("ND", "Not Defined", dec!(1)),
        requirement("CR", "Confidentiality Requirement", "confidentialityRequirement"),
        requirement("IR", "Integrity Requirement", "integrityRequirement"),
        requirement("AR", "Availability Requirement", "availabilityRequirement"),
    ])
});

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::Weight;

    #[test]
    fn test_canonical_order() {
        let codes: Vec<_> = TABLE.iter().map(|m| m.code).collect();
        assert_eq!(
            codes,
            vec!["AV", "AC", "Au", "C", "I", "A", "E", "RL", "RC", "CDP", "TD", "CR", "IR", "AR"]
        );
    }

    #[test]
    fn test_mandatory_metrics() {
        let mandatory: Vec<_> = TABLE.mandatory().map(|m| m.code).collect();
        assert_eq!(mandatory, vec!["AV", "AC", "Au", "C", "I", "A"]);
    }

    #[test]
    fn test_every_value_is_weighted() {
        for metric in TABLE.iter() {
            for value in &metric.values {
                assert!(matches!(value.weight, Weight::Fixed(_)), "{}:{}", metric.code, value.code);
            }
        }
    }

    #[test]
    fn test_optional_metrics_accept_not_defined() {
        for metric in TABLE.iter().filter(|m| !m.mandatory) {
            assert!(metric.value("ND").is_some(), "{}", metric.code);
        }
    }
}
