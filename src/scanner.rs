//! Vector extraction from free text
//!
//! Candidates are substrings that look like vectors: an optional
//! `CVSS:x.y/` prefix followed by at least 26 letters, colons or slashes.
//! Each candidate goes to the constructor matching its prefix; candidates
//! that fail validation are dropped.

use crate::cvss::Cvss;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

static CANDIDATE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:CVSS:[3-4]\.\d/)?[A-Za-z:/]{26,}").unwrap());

/// Every distinct valid vector in `text`, in order of first appearance.
///
/// Vectors that clean to the same canonical form count as one.
pub fn parse_cvss_from_text(text: &str) -> Vec<Cvss> {
    let mut seen = HashSet::new();
    let mut found = Vec::new();

    for candidate in CANDIDATE.find_iter(text).map(|m| m.as_str()) {
        match Cvss::detect(candidate) {
            Ok(cvss) => {
                if seen.insert(cvss.clean_vector()) {
                    found.push(cvss);
                } else {
                    log::trace!("Duplicate vector {}", candidate);
                }
            }
            Err(e) => log::debug!("Discarding candidate {:?}: {}", candidate, e),
        }
    }

    found
}
