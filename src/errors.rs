//! Error types shared by every CVSS version
//!
//! All failures surface as one [`CvssError`]. Each variant records the
//! version family it was raised for, so callers can match narrowly on the
//! kind, filter by [`CvssError::version`], or simply propagate the root type.

use crate::standard::CvssVersion;
use rust_decimal::Decimal;
use thiserror::Error;

/// Structural problem found while tokenizing a vector string
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MalformedReason {
    #[error("vector is empty")]
    Empty,

    #[error("trailing \"/\"")]
    TrailingSeparator,

    #[error("vector \"{0}\" is missing mandatory prefix or uses unsupported CVSS version")]
    MissingPrefix(String),

    #[error("empty field in vector \"{0}\"")]
    EmptyField(String),

    #[error("malformed field \"{0}\"")]
    MalformedField(String),

    #[error("unknown metric \"{metric}\" in field \"{field}\"")]
    UnknownMetric { metric: String, field: String },

    #[error("unknown value \"{value}\" in field \"{field}\"")]
    UnknownValue { value: String, field: String },

    #[error("duplicate metric \"{0}\"")]
    DuplicateMetric(String),
}

/// Root error type for parsing and scoring
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CvssError {
    /// Vector syntax is broken or references unknown codes
    #[error("Malformed {version} vector: {reason}")]
    Malformed {
        version: CvssVersion,
        reason: MalformedReason,
    },

    /// One or more mandatory metrics are absent
    #[error("Missing mandatory {version} metrics \"{}\"", .missing.join(", "))]
    Mandatory {
        version: CvssVersion,
        missing: Vec<&'static str>,
    },

    /// Red Hat notation without a score token or with a non-numeric one
    #[error("Malformed {version} vector in Red Hat notation \"{vector}\"")]
    RhMalformed { version: CvssVersion, vector: String },

    /// Red Hat notation whose supplied score disagrees with the computed one
    #[error(
        "{version} vector in Red Hat notation \"{vector}\" has score of \"{computed:.1}\" which does not match specified score of \"{supplied}\""
    )]
    RhScoreDoesNotMatch {
        version: CvssVersion,
        vector: String,
        computed: Decimal,
        supplied: String,
    },
}

impl CvssError {
    pub fn malformed(version: CvssVersion, reason: MalformedReason) -> Self {
        Self::Malformed { version, reason }
    }

    pub fn mandatory(version: CvssVersion, missing: Vec<&'static str>) -> Self {
        Self::Mandatory { version, missing }
    }

    pub fn rh_malformed(version: CvssVersion, vector: impl Into<String>) -> Self {
        Self::RhMalformed {
            version,
            vector: vector.into(),
        }
    }

    pub fn rh_score_mismatch(
        version: CvssVersion,
        vector: impl Into<String>,
        computed: Decimal,
        supplied: impl Into<String>,
    ) -> Self {
        Self::RhScoreDoesNotMatch {
            version,
            vector: vector.into(),
            computed,
            supplied: supplied.into(),
        }
    }

    /// Version family the failing vector was parsed as
    pub fn version(&self) -> CvssVersion {
        match self {
            Self::Malformed { version, .. }
            | Self::Mandatory { version, .. }
            | Self::RhMalformed { version, .. }
            | Self::RhScoreDoesNotMatch { version, .. } => *version,
        }
    }

    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::Malformed { .. })
    }

    pub fn is_mandatory(&self) -> bool {
        matches!(self, Self::Mandatory { .. })
    }

    /// Reason behind a malformed vector, if that is the failure kind
    pub fn malformed_reason(&self) -> Option<&MalformedReason> {
        match self {
            Self::Malformed { reason, .. } => Some(reason),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, CvssError>;
