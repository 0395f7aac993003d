use cvss::{Cvss, CvssError, CvssVersion, MalformedReason, MinorVersion, Severity, Standard};
use pretty_assertions::assert_eq;
use rust_decimal_macros::dec;

use Severity::{Critical, High, Low, Medium, None as NoSeverity};

#[test]
fn test_severities() {
    let cases = [
        ("AV:N/AC:H/PR:L/UI:N/S:C/C:N/I:N/A:N", [NoSeverity, NoSeverity, NoSeverity]),
        ("AV:P/AC:H/PR:L/UI:R/S:U/C:N/I:L/A:N", [Low, Low, Low]),
        ("AV:N/AC:H/PR:L/UI:R/S:U/C:N/I:L/A:N", [Low, Low, Low]),
        ("AV:N/AC:H/PR:L/UI:N/S:U/C:N/I:N/A:L", [Low, Low, Low]),
        ("AV:N/AC:L/PR:N/UI:R/S:U/C:N/I:N/A:L", [Medium, Medium, Medium]),
        ("AV:N/AC:L/PR:N/UI:R/S:U/C:N/I:L/A:L", [Medium, Medium, Medium]),
        ("AV:N/AC:L/PR:N/UI:R/S:U/C:N/I:H/A:N", [Medium, Medium, Medium]),
        ("AV:N/AC:L/PR:N/UI:N/S:U/C:L/I:L/A:L", [High, High, High]),
        ("AV:N/AC:L/PR:N/UI:N/S:U/C:N/I:L/A:H", [High, High, High]),
        ("AV:N/AC:L/PR:N/UI:N/S:C/C:H/I:L/A:N", [Critical, Critical, Critical]),
        ("AV:N/AC:L/PR:N/UI:N/S:C/C:H/I:N/A:H", [Critical, Critical, Critical]),
        (
            "AV:L/AC:L/PR:N/UI:N/S:U/C:H/I:H/A:H/E:P/RL:W/IR:M/AR:H/MAV:N/MAC:H/MPR:L/MUI:N/MC:N/MI:N",
            [High, High, Medium],
        ),
        (
            "AV:P/AC:H/PR:N/UI:N/S:U/C:N/I:H/A:N/E:H/RC:U/CR:M/MAV:P/MAC:L/MUI:R/MC:N/MI:N",
            [Medium, Low, NoSeverity],
        ),
    ];

    for prefix in ["CVSS:3.0/", "CVSS:3.1/"] {
        for (body, expected) in &cases {
            let raw = format!("{}{}", prefix, body);
            assert_eq!(Cvss::v3(&raw).unwrap().severities(), expected.to_vec(), "{}", raw);
        }
    }
}

#[test]
fn test_scores() {
    let cvss = Cvss::v3(
        "CVSS:3.1/AV:L/AC:L/PR:N/UI:N/S:U/C:H/I:H/A:H/E:P/RL:W/IR:M/AR:H/MAV:N/MAC:H/MPR:L/MUI:N/MC:N/MI:N",
    )
    .unwrap();
    assert_eq!(cvss.base_score(), dec!(8.4));
    assert_eq!(cvss.temporal_score(), Some(dec!(7.7)));
    assert_eq!(cvss.environmental_score(), Some(dec!(6.5)));

    let cvss = Cvss::v3("CVSS:3.1/AV:N/AC:L/PR:L/UI:N/S:C/C:L/I:L/A:N/MS:U/MPR:H").unwrap();
    assert_eq!(cvss.base_score(), dec!(6.4));
    assert_eq!(cvss.environmental_score(), Some(dec!(3.8)));
}

#[test]
fn test_modified_scope_changed() {
    for prefix in ["CVSS:3.0/", "CVSS:3.1/"] {
        let raw = format!(
            "{}AV:L/AC:L/PR:L/UI:N/S:U/C:H/I:H/A:H/MS:C/MC:H/MI:H/MA:H/CR:H/IR:H/AR:H",
            prefix
        );
        let cvss = Cvss::v3(&raw).unwrap();
        assert_eq!(cvss.base_score(), dec!(7.8));
        assert_eq!(cvss.environmental_score(), Some(dec!(8.8)));
    }
}

#[test]
fn test_boundary_severities() {
    let cvss =
        Cvss::v3("CVSS:3.1/AV:N/AC:L/PR:N/UI:N/S:U/C:L/I:L/A:L/E:P/CR:L/IR:L/AR:L/MAV:P").unwrap();
    assert_eq!(cvss.severities(), vec![High, Medium, Low]);
}

#[test]
fn test_clean_vector() {
    let cases = [
        (
            "S:C/C:H/I:H/A:N/AV:P/AC:H/PR:H/UI:R/E:H/RL:O/RC:R/CR:H/IR:X/AR:X/MAC:H/MPR:X/MUI:X/MC:L/MA:X",
            "AV:P/AC:H/PR:H/UI:R/S:C/C:H/I:H/A:N/E:H/RL:O/RC:R/CR:H/MAC:H/MC:L",
        ),
        (
            "AV:A/AC:H/PR:H/UI:R/S:U/C:N/I:L/A:N/E:P/RC:C/MAV:N/MPR:H/MUI:X/MS:U/MI:X",
            "AV:A/AC:H/PR:H/UI:R/S:U/C:N/I:L/A:N/E:P/RC:C/MAV:N/MPR:H/MS:U",
        ),
        (
            "A:N/E:P/RC:C/MAV:N/AV:A/AC:H/S:U/C:N/I:L/MPR:H/MUI:X/MS:U/MI:X/PR:H/UI:R",
            "AV:A/AC:H/PR:H/UI:R/S:U/C:N/I:L/A:N/E:P/RC:C/MAV:N/MPR:H/MS:U",
        ),
    ];

    for prefix in ["CVSS:3.0/", "CVSS:3.1/"] {
        for (body, clean) in cases {
            let cvss = Cvss::v3(&format!("{}{}", prefix, body)).unwrap();
            assert_eq!(cvss.clean_vector(), format!("{}{}", prefix, clean));
        }
    }
}

#[test]
fn test_minor_version_from_prefix() {
    let v30 = Cvss::v3("CVSS:3.0/AV:N/AC:L/PR:N/UI:N/S:U/C:H/I:H/A:H").unwrap();
    let v31 = Cvss::v3("CVSS:3.1/AV:N/AC:L/PR:N/UI:N/S:U/C:H/I:H/A:H").unwrap();
    assert_eq!(v30.standard(), Standard::V3(MinorVersion::Zero));
    assert_eq!(v31.standard(), Standard::V3(MinorVersion::One));
    assert_ne!(v30, v31);
}

#[test]
fn test_exceptions() {
    let prefix = "CVSS:3.1/";
    let malformed = [
        String::new(),
        "/".to_string(),
        "AV:N/AC:L/PR:N/UI:N/S:U/C:H/I:H/A:H".to_string(),
        "CVSS:3.2/AV:N/AC:L/PR:N/UI:N/S:U/C:H/I:H/A:H".to_string(),
        format!("{}AV:P/AC:H/PR:H/UI:R/S:C/C:H/I:H/A:N/E:H/RL:O/RC:R/CR:H/MAC:H/MCL", prefix),
        format!("{}AX:P/AC:H/PR:H/UI:R/S:C/C:H/I:H/A:N/E:H/RL:O/RC:R/CR:H/MAC:H/MC:L", prefix),
        format!("{}AV:W/AC:H/PR:H/UI:R/S:C/C:H/I:H/A:N/E:H/RL:O/RC:R/CR:H/MAC:H/MC:L", prefix),
        format!("{}AV:P/AV:P/AC:H/PR:H/UI:R/S:C/C:H/I:H/A:N/E:H/RL:O/RC:R/CR:H/MAC:H/MC:L", prefix),
        format!("{}AV:P/AV:L/AC:H/PR:H/UI:R/S:C/C:H/I:H/A:N/E:H/RL:O/RC:R/CR:H/MAC:H/MC:L", prefix),
        format!("{}AV:N/AC:L/PR:N/UI:N/S:U/C:H/I:H/A:H/", prefix),
    ];
    for raw in &malformed {
        let err = Cvss::v3(raw).unwrap_err();
        assert!(err.is_malformed(), "{:?} gave {:?}", raw, err);
        assert_eq!(err.version(), CvssVersion::V3);
    }

    let err = Cvss::v3(&format!(
        "{}AV:P/AC:H/UI:R/S:C/C:H/I:H/A:N/E:H/RL:O/RC:R/CR:H/MAC:H/MC:L",
        prefix
    ))
    .unwrap_err();
    assert_eq!(err, CvssError::mandatory(CvssVersion::V3, vec!["PR"]));
}

#[test]
fn test_missing_prefix_message() {
    let err = Cvss::v3("AV:N/AC:L/PR:N/UI:N/S:U/C:H/I:H/A:H").unwrap_err();
    assert_eq!(
        err.malformed_reason(),
        Some(&MalformedReason::MissingPrefix(
            "AV:N/AC:L/PR:N/UI:N/S:U/C:H/I:H/A:H".to_string()
        ))
    );
}

#[test]
fn test_rh_vector() {
    let cvss = Cvss::v3("CVSS:3.1/AV:N/AC:L/PR:N/UI:N/S:C/C:H/I:L/A:N/MS:X").unwrap();
    assert_eq!(
        cvss.rh_vector(),
        "9.3/CVSS:3.1/AV:N/AC:L/PR:N/UI:N/S:C/C:H/I:L/A:N"
    );
    assert_eq!(
        Cvss::from_rh_vector(CvssVersion::V3, &cvss.rh_vector()).unwrap(),
        cvss
    );

    let err = Cvss::from_rh_vector(
        CvssVersion::V3,
        "9.0/CVSS:3.1/AV:N/AC:L/PR:N/UI:N/S:C/C:H/I:L/A:N",
    )
    .unwrap_err();
    assert_eq!(
        err.to_string(),
        "CVSS3 vector in Red Hat notation \"9.0/CVSS:3.1/AV:N/AC:L/PR:N/UI:N/S:C/C:H/I:L/A:N\" has score of \"9.3\" which does not match specified score of \"9.0\""
    );
}
