use crate::structs::PrerequisiteTerm;

use regex::Regex;
use std::sync::LazyLock;

static OR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bor\b").expect("or pattern"));
static AND_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\band\b").expect("and pattern"));
static COURSE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([A-Z]{2,4})\s*(\d{3})").expect("course pattern"));

/// Turn a prerequisite clause into its course references.
///
/// The clause is split on the whole word "or" and then each group on "and";
/// no nesting is recognised. A term is flagged `is_and` only when its group
/// holds more than one non-empty part. Parts without a course code are
/// dropped.
pub fn parse(text: &str) -> Vec<PrerequisiteTerm> {
    let trimmed = text.trim();
    if trimmed.is_empty() || trimmed == "_" {
        return Vec::new();
    }

    let mut terms = Vec::new();
    for group in OR_RE.split(text) {
        let parts: Vec<&str> = AND_RE
            .split(group)
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .collect();
        let is_and = parts.len() > 1;

        for part in parts {
            if let Some(caps) = COURSE_RE.captures(part) {
                terms.push(PrerequisiteTerm {
                    subject: caps[1].into(),
                    course_code: caps[2].into(),
                    is_and,
                });
            }
        }
    }

    terms
}
