//! Position extraction: pulls the job title and the requirements list out of a raw description.
//!
//! Extraction is pattern matching against free text and will miss titles written in
//! unusual ways. It sits behind `PositionExtractor` so another strategy can replace
//! the regex one without touching composition.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Title used when no title can be extracted.
pub const FALLBACK_JOB_TITLE: &str = "this position";

// Trigger word (any case), optional "of"/"as", optional article, then capitalized words.
static TITLE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\b(?i:position|role|job|opportunity|seeking)\s+(?:(?i:of|as)\s+)?(?:(?i:an|a|the)\s+)?([A-Z][A-Za-z]*(?:[ \t]+[A-Z][A-Za-z]*)*)",
    )
    .expect("valid title regex")
});

static REQUIREMENTS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\brequirements?[:\s]+([^.!?]*)").expect("valid requirements regex")
});

/// What the description says about the role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionInfo {
    pub job_title: String,
    pub requirements: Vec<String>,
}

/// Strategy for reading the role out of a job description.
///
/// Implementations must not fail: when nothing is found they return
/// `FALLBACK_JOB_TITLE` and an empty requirements list.
pub trait PositionExtractor: Send + Sync {
    fn extract(&self, job_description: &str) -> PositionInfo;
}

/// Default extractor: one regex search for the title, one for the requirements.
#[derive(Debug, Clone, Copy, Default)]
pub struct RegexPositionExtractor;

impl PositionExtractor for RegexPositionExtractor {
    fn extract(&self, job_description: &str) -> PositionInfo {
        PositionInfo {
            job_title: extract_job_title(job_description),
            requirements: extract_requirements(job_description),
        }
    }
}

/// First "seeking a Senior Engineer"-style title, or `FALLBACK_JOB_TITLE`.
pub fn extract_job_title(job_description: &str) -> String {
    TITLE_RE
        .captures(job_description)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
        .filter(|title| !title.is_empty())
        .unwrap_or_else(|| FALLBACK_JOB_TITLE.to_string())
}

/// Items following a "Requirements:" label, up to the end of that sentence.
pub fn extract_requirements(job_description: &str) -> Vec<String> {
    let Some(caps) = REQUIREMENTS_RE.captures(job_description) else {
        return vec![];
    };
    caps.get(1)
        .map(|m| m.as_str())
        .unwrap_or_default()
        .split([',', '\n'])
        .map(str::trim)
        .filter(|r| !r.is_empty())
        .map(str::to_string)
        .collect()
}
