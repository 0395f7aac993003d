//! Property tests over generated vectors
//!
//! Vectors are assembled from valid codes only, so every generated string
//! must parse. Optional metrics are either left out or given any of their
//! values, "not defined" included. The properties check canonicalization
//! and score bounds rather than specific values.

use cvss::{parse_cvss_from_text, Cvss};
use proptest::prelude::*;
use proptest::sample::select;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// (code, values, optional)
type FieldSpec = (&'static str, &'static [&'static str], bool);

const V3_PREFIXES: &[&str] = &["CVSS:3.0/", "CVSS:3.1/"];
const IMPACT3: &[&str] = &["H", "L", "N"];
const MODIFIED_IMPACT: &[&str] = &["X", "H", "L", "N"];

const V2_FIELDS: &[FieldSpec] = &[
    ("AV", &["L", "A", "N"], false),
    ("AC", &["H", "M", "L"], false),
    ("Au", &["M", "S", "N"], false),
    ("C", &["N", "P", "C"], false),
    ("I", &["N", "P", "C"], false),
    ("A", &["N", "P", "C"], false),
    ("E", &["U", "POC", "F", "H", "ND"], true),
    ("RL", &["OF", "TF", "W", "U", "ND"], true),
    ("RC", &["UC", "UR", "C", "ND"], true),
    ("CDP", &["N", "L", "LM", "MH", "H", "ND"], true),
    ("TD", &["N", "L", "M", "H", "ND"], true),
    ("CR", &["L", "M", "H", "ND"], true),
    ("IR", &["L", "M", "H", "ND"], true),
    ("AR", &["L", "M", "H", "ND"], true),
];

const V3_FIELDS: &[FieldSpec] = &[
    ("AV", &["N", "A", "L", "P"], false),
    ("AC", &["L", "H"], false),
    ("PR", &["N", "L", "H"], false),
    ("UI", &["N", "R"], false),
    ("S", &["U", "C"], false),
    ("C", IMPACT3, false),
    ("I", IMPACT3, false),
    ("A", IMPACT3, false),
    ("E", &["X", "U", "P", "F", "H"], true),
    ("RL", &["X", "O", "T", "W", "U"], true),
    ("RC", &["X", "U", "R", "C"], true),
    ("CR", &["X", "L", "M", "H"], true),
    ("IR", &["X", "L", "M", "H"], true),
    ("AR", &["X", "L", "M", "H"], true),
    ("MAV", &["X", "N", "A", "L", "P"], true),
    ("MAC", &["X", "L", "H"], true),
    ("MPR", &["X", "N", "L", "H"], true),
    ("MUI", &["X", "N", "R"], true),
    ("MS", &["X", "U", "C"], true),
    ("MC", MODIFIED_IMPACT, true),
    ("MI", MODIFIED_IMPACT, true),
    ("MA", MODIFIED_IMPACT, true),
];

const V4_FIELDS: &[FieldSpec] = &[
    ("AV", &["N", "A", "L", "P"], false),
    ("AC", &["L", "H"], false),
    ("AT", &["N", "P"], false),
    ("PR", &["N", "L", "H"], false),
    ("UI", &["N", "P", "A"], false),
    ("VC", IMPACT3, false),
    ("VI", IMPACT3, false),
    ("VA", IMPACT3, false),
    ("SC", IMPACT3, false),
    ("SI", IMPACT3, false),
    ("SA", IMPACT3, false),
    ("E", &["X", "A", "P", "U"], true),
    ("CR", &["X", "H", "M", "L"], true),
    ("IR", &["X", "H", "M", "L"], true),
    ("AR", &["X", "H", "M", "L"], true),
    ("MAV", &["X", "N", "A", "L", "P"], true),
    ("MAC", &["X", "L", "H"], true),
    ("MAT", &["X", "N", "P"], true),
    ("MPR", &["X", "N", "L", "H"], true),
    ("MUI", &["X", "N", "P", "A"], true),
    ("MVC", MODIFIED_IMPACT, true),
    ("MVI", MODIFIED_IMPACT, true),
    ("MVA", MODIFIED_IMPACT, true),
    ("MSC", MODIFIED_IMPACT, true),
    ("MSI", &["X", "S", "H", "L", "N"], true),
    ("MSA", &["X", "S", "H", "L", "N"], true),
    ("S", &["X", "N", "P"], true),
    ("AU", &["X", "N", "Y"], true),
    ("R", &["X", "A", "U", "I"], true),
    ("V", &["X", "D", "C"], true),
    ("RE", &["X", "L", "M", "H"], true),
    ("U", &["X", "Clear", "Green", "Amber", "Red"], true),
];

/// One `CODE:VALUE` per spec entry, optional ones sometimes left out
fn fields(specs: &'static [FieldSpec]) -> impl Strategy<Value = Vec<String>> {
    let parts: Vec<BoxedStrategy<Option<String>>> = specs
        .iter()
        .map(|&(code, values, optional)| {
            let field = select(values).prop_map(move |value| Some(format!("{}:{}", code, value)));
            if optional {
                prop_oneof![Just(None), field].boxed()
            } else {
                field.boxed()
            }
        })
        .collect();
    parts.prop_map(|parts| parts.into_iter().flatten().collect())
}

/// Fields in table order plus a shuffled copy of the same fields
fn shuffled(specs: &'static [FieldSpec]) -> impl Strategy<Value = (Vec<String>, Vec<String>)> {
    fields(specs).prop_flat_map(|fields| (Just(fields.clone()), Just(fields).prop_shuffle()))
}

fn v3_prefix() -> impl Strategy<Value = &'static str> {
    select(V3_PREFIXES)
}

fn is_one_decimal_in_range(score: Decimal) -> bool {
    let tenths = score * dec!(10);
    tenths == tenths.trunc() && score >= Decimal::ZERO && score <= dec!(10)
}

fn assert_clean_is_fixed_point(cvss: &Cvss) -> Result<(), TestCaseError> {
    let clean = cvss.clean_vector();
    let reparsed = Cvss::parse(cvss.version(), &clean).unwrap();

    prop_assert_eq!(reparsed.clean_vector(), clean);
    prop_assert_eq!(reparsed.scores(), cvss.scores());
    prop_assert_eq!(&reparsed, cvss);
    Ok(())
}

proptest! {
    #[test]
    fn v2_clean_vector_is_a_fixed_point((ordered, shuffled) in shuffled(V2_FIELDS)) {
        let cvss = Cvss::v2(&shuffled.join("/")).unwrap();
        assert_clean_is_fixed_point(&cvss)?;
        prop_assert_eq!(cvss, Cvss::v2(&ordered.join("/")).unwrap());
    }

    #[test]
    fn v3_clean_vector_is_a_fixed_point(prefix in v3_prefix(), fields in fields(V3_FIELDS)) {
        let cvss = Cvss::v3(&format!("{}{}", prefix, fields.join("/"))).unwrap();
        assert_clean_is_fixed_point(&cvss)?;
        prop_assert!(cvss.clean_vector().starts_with(prefix));
    }

    #[test]
    fn v4_clean_vector_is_a_fixed_point(fields in fields(V4_FIELDS)) {
        let cvss = Cvss::v4(&format!("CVSS:4.0/{}", fields.join("/"))).unwrap();
        assert_clean_is_fixed_point(&cvss)?;
    }

    #[test]
    fn field_order_does_not_matter(prefix in v3_prefix(), (fields, shuffled) in shuffled(V3_FIELDS)) {
        let ordered = Cvss::v3(&format!("{}{}", prefix, fields.join("/"))).unwrap();
        let shuffled = Cvss::v3(&format!("{}{}", prefix, shuffled.join("/"))).unwrap();

        prop_assert_eq!(ordered.clean_vector(), shuffled.clean_vector());
        prop_assert_eq!(ordered.scores(), shuffled.scores());
        prop_assert_eq!(ordered, shuffled);
    }

    #[test]
    fn v2_scores_are_bounded(fields in fields(V2_FIELDS)) {
        let cvss = Cvss::v2(&fields.join("/")).unwrap();
        prop_assert!(is_one_decimal_in_range(cvss.base_score()));
        for score in [cvss.temporal_score(), cvss.environmental_score()].into_iter().flatten() {
            prop_assert!(is_one_decimal_in_range(score));
        }
    }

    #[test]
    fn v3_scores_are_bounded(prefix in v3_prefix(), fields in fields(V3_FIELDS)) {
        let cvss = Cvss::v3(&format!("{}{}", prefix, fields.join("/"))).unwrap();
        let base = cvss.base_score();
        let temporal = cvss.temporal_score().unwrap_or(base);
        let environmental = cvss.environmental_score().unwrap_or(base);

        prop_assert!(is_one_decimal_in_range(base));
        prop_assert!(is_one_decimal_in_range(temporal));
        prop_assert!(is_one_decimal_in_range(environmental));
        prop_assert!(temporal <= base);
    }

    #[test]
    fn v4_scores_are_bounded_and_stable(fields in fields(V4_FIELDS)) {
        let raw = format!("CVSS:4.0/{}", fields.join("/"));
        let first = Cvss::v4(&raw).unwrap();
        let second = Cvss::v4(&raw).unwrap();

        prop_assert!(is_one_decimal_in_range(first.base_score()));
        prop_assert_eq!(first.base_score(), second.base_score());
    }

    #[test]
    fn scanner_finds_embedded_vector(prefix in v3_prefix(), fields in fields(V3_FIELDS)) {
        let cvss = Cvss::v3(&format!("{}{}", prefix, fields.join("/"))).unwrap();
        let text = format!("Rated {} by the vendor.", cvss.clean_vector());
        let found = parse_cvss_from_text(&text);

        prop_assert_eq!(found.len(), 1);
        prop_assert_eq!(found[0].clean_vector(), cvss.clean_vector());
    }
}
