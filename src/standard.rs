//! Version descriptors
//!
//! [`CvssVersion`] names a version family as a caller selects it, while
//! [`Standard`] is the resolved descriptor that drives parsing and scoring:
//! it knows the metric table, the vector prefix, the "not defined" sentinel,
//! the score stages and the severity scale of one concrete version.

use crate::metrics::{self, MetricTable};
use crate::severity::SeverityScale;
use std::fmt;
use std::str::FromStr;

/// Version family chosen by the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CvssVersion {
    V2,
    V3,
    V4,
}

impl CvssVersion {
    /// Family implied by the prefix of a raw vector
    pub fn detect(raw: &str) -> Self {
        if raw.starts_with("CVSS:4.") {
            Self::V4
        } else if raw.starts_with("CVSS:3.") {
            Self::V3
        } else {
            Self::V2
        }
    }
}

impl fmt::Display for CvssVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::V2 => write!(f, "CVSS2"),
            Self::V3 => write!(f, "CVSS3"),
            Self::V4 => write!(f, "CVSS4"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MinorVersion {
    Zero,
    One,
}

/// Score stages in reporting order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    Base,
    Temporal,
    Environmental,
}

impl Stage {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Base => "Base Score",
            Self::Temporal => "Temporal Score",
            Self::Environmental => "Environmental Score",
        }
    }

    pub(crate) fn json_key(&self) -> &'static str {
        match self {
            Self::Base => "base",
            Self::Temporal => "temporal",
            Self::Environmental => "environmental",
        }
    }
}

const THREE_STAGES: &[Stage] = &[Stage::Base, Stage::Temporal, Stage::Environmental];
const BASE_ONLY: &[Stage] = &[Stage::Base];

/// Resolved version descriptor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Standard {
    V2,
    V3(MinorVersion),
    V4,
}

impl Standard {
    /// Pick the concrete version for `family` from the prefix of `raw`.
    ///
    /// Returns `None` when the prefix required by the family is missing or
    /// names an unsupported minor version.
    pub fn resolve(family: CvssVersion, raw: &str) -> Option<Self> {
        match family {
            CvssVersion::V2 => Some(Self::V2),
            CvssVersion::V3 => {
                if raw.starts_with("CVSS:3.0/") {
                    Some(Self::V3(MinorVersion::Zero))
                } else if raw.starts_with("CVSS:3.1/") {
                    Some(Self::V3(MinorVersion::One))
                } else {
                    None
                }
            }
            CvssVersion::V4 => raw.starts_with("CVSS:4.0/").then_some(Self::V4),
        }
    }

    pub fn family(&self) -> CvssVersion {
        match self {
            Self::V2 => CvssVersion::V2,
            Self::V3(_) => CvssVersion::V3,
            Self::V4 => CvssVersion::V4,
        }
    }

    pub fn table(&self) -> &'static MetricTable {
        match self {
            Self::V2 => &metrics::v2::TABLE,
            Self::V3(_) => &metrics::v3::TABLE,
            Self::V4 => &metrics::v4::TABLE,
        }
    }

    /// Prefix token every vector of this version starts with
    pub fn prefix(&self) -> Option<&'static str> {
        match self {
            Self::V2 => None,
            Self::V3(MinorVersion::Zero) => Some("CVSS:3.0/"),
            Self::V3(MinorVersion::One) => Some("CVSS:3.1/"),
            Self::V4 => Some("CVSS:4.0/"),
        }
    }

    /// Value code meaning "not defined"
    pub fn not_defined(&self) -> &'static str {
        match self {
            Self::V2 => "ND",
            Self::V3(_) | Self::V4 => "X",
        }
    }

    pub fn stages(&self) -> &'static [Stage] {
        match self {
            Self::V2 | Self::V3(_) => THREE_STAGES,
            Self::V4 => BASE_ONLY,
        }
    }

    pub fn severity_scale(&self) -> SeverityScale {
        match self {
            Self::V2 => SeverityScale::ThreeBand,
            Self::V3(_) | Self::V4 => SeverityScale::FourBand,
        }
    }

    /// Version string used in structured output
    pub fn json_version(&self) -> &'static str {
        match self {
            Self::V2 => "2.0",
            Self::V3(MinorVersion::Zero) => "3.0",
            Self::V3(MinorVersion::One) => "3.1",
            Self::V4 => "4.0",
        }
    }
}

impl fmt::Display for Standard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CVSS{}", self.json_version())
    }
}

impl FromStr for Standard {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "2" | "2.0" => Ok(Self::V2),
            "3.0" => Ok(Self::V3(MinorVersion::Zero)),
            "3" | "3.1" => Ok(Self::V3(MinorVersion::One)),
            "4" | "4.0" => Ok(Self::V4),
            other => Err(format!("unsupported CVSS version \"{}\"", other)),
        }
    }
}

impl Default for Standard {
    fn default() -> Self {
        Self::V3(MinorVersion::One)
    }
}
