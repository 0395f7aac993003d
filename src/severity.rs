use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::fmt;

/// Qualitative severity band
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    None,
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
            Self::Critical => "Critical",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeverityScale {
    /// v2: Low, Medium, High; an undefined score is `None`
    ThreeBand,
    /// v3 and v4: exactly zero is `None`, then Low up to Critical
    FourBand,
}

impl SeverityScale {
    pub fn classify(&self, score: Option<Decimal>) -> Severity {
        let Some(score) = score else {
            return Severity::None;
        };
        match self {
            Self::ThreeBand => {
                if score <= dec!(3.9) {
                    Severity::Low
                } else if score <= dec!(6.9) {
                    Severity::Medium
                } else {
                    Severity::High
                }
            }
            Self::FourBand => {
                if score.is_zero() {
                    Severity::None
                } else if score <= dec!(3.9) {
                    Severity::Low
                } else if score <= dec!(6.9) {
                    Severity::Medium
                } else if score <= dec!(8.9) {
                    Severity::High
                } else {
                    Severity::Critical
                }
            }
        }
    }
}
