// Export modules for library usage
pub mod cli;
pub mod config;
pub mod cvss;
pub mod errors;
pub mod formatting;
pub mod interactive;
pub mod metrics;
pub mod output;
pub mod parser;
pub mod scanner;
pub mod scoring;
pub mod severity;
pub mod standard;
pub mod vector;

// Re-export commonly used types
pub use crate::cvss::Cvss;
pub use crate::errors::{CvssError, MalformedReason, Result};
pub use crate::metrics::{MetricDef, MetricGroup, MetricTable, MetricValue, Weight};
pub use crate::output::{create_writer, to_json, OutputFormat, OutputWriter};
pub use crate::scanner::parse_cvss_from_text;
pub use crate::scoring::ScoreResult;
pub use crate::severity::Severity;
pub use crate::standard::{CvssVersion, MinorVersion, Stage, Standard};
pub use crate::vector::ParsedVector;
