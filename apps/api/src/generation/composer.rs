//! Letter composition: turns a profile and a job description into cover-letter text.
//!
//! Flow: extract keywords → extract skills → match → extract position →
//!       pick paragraph variants → join sections with blank lines.
//!
//! Composition never fails. Missing input yields an empty string and sparse input
//! falls back to generic paragraphs. The date and the years-of-experience figure
//! come from the injected `Clock` and random generator.

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::generation::clock::{format_letter_date, Clock};
use crate::generation::keywords::{extract_keywords, extract_skills, match_skills};
use crate::generation::position::{PositionExtractor, PositionInfo};
use crate::generation::templates::{
    CLOSING, EXPERIENCE_GENERIC, EXPERIENCE_RELEVANT_TEMPLATE, EXPERIENCE_SUMMARY_TEMPLATE,
    GREETING, OPENING_GENERIC_TEMPLATE, OPENING_MODERATE_TEMPLATE, OPENING_STRONG_TEMPLATE,
    SIGN_OFF, SKILLS_GENERIC, SKILLS_MATCHED_TEMPLATE,
};
use crate::generation::vocabulary::Vocabulary;
use crate::models::profile::Profile;

const STRONG_MATCH_THRESHOLD: usize = 5;
const MODERATE_MATCH_THRESHOLD: usize = 3;
const OPENING_CITED_SKILLS: usize = 3;
const SKILLS_PARAGRAPH_LIMIT: usize = 5;

const MIN_EXPERIENCE_CHARS: usize = 10;
const MIN_RELEVANT_SENTENCE_CHARS: usize = 20;
const RELEVANT_SENTENCE_LIMIT: usize = 2;
const SUMMARY_MAX_CHARS: usize = 300;
const MIN_SUMMARY_CHARS: usize = 50;

/// Inclusive range of the years-of-experience figure in the strong opening.
pub const EXPERIENCE_YEARS_RANGE: std::ops::RangeInclusive<u8> = 3..=5;

// ────────────────────────────────────────────────────────────────────────────
// Data models
// ────────────────────────────────────────────────────────────────────────────

/// Which opening paragraph a match count selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OpeningVariant {
    /// Five or more matching skills: cites a years figure and three skills.
    Strong,
    /// Three or four: cites every matching skill.
    Moderate,
    /// Fewer than three: adaptability framing.
    Generic,
}

impl OpeningVariant {
    pub fn for_match_count(matching: usize) -> Self {
        if matching >= STRONG_MATCH_THRESHOLD {
            OpeningVariant::Strong
        } else if matching >= MODERATE_MATCH_THRESHOLD {
            OpeningVariant::Moderate
        } else {
            OpeningVariant::Generic
        }
    }
}

/// Everything composition derives from the inputs before writing prose.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LetterAnalysis {
    pub keywords: Vec<String>,
    pub skills: Vec<String>,
    pub matching_skills: Vec<String>,
    pub position: PositionInfo,
    pub opening: OpeningVariant,
}

// ────────────────────────────────────────────────────────────────────────────
// Composer
// ────────────────────────────────────────────────────────────────────────────

/// Composes letters against a vocabulary, a position-extraction strategy and a clock.
#[derive(Clone, Copy)]
pub struct LetterComposer<'a> {
    vocabulary: &'a Vocabulary,
    extractor: &'a dyn PositionExtractor,
    clock: &'a dyn Clock,
}

impl<'a> LetterComposer<'a> {
    pub fn new(
        vocabulary: &'a Vocabulary,
        extractor: &'a dyn PositionExtractor,
        clock: &'a dyn Clock,
    ) -> Self {
        Self {
            vocabulary,
            extractor,
            clock,
        }
    }

    /// Keyword, skill and position extraction without writing the letter.
    pub fn analyze(&self, profile: &Profile, job_description: &str) -> LetterAnalysis {
        let keywords = extract_keywords(job_description, self.vocabulary);
        let skills = extract_skills(&profile.skills);
        let matching_skills = match_skills(&skills, &keywords);
        let position = self.extractor.extract(job_description);
        let opening = OpeningVariant::for_match_count(matching_skills.len());

        LetterAnalysis {
            keywords,
            skills,
            matching_skills,
            position,
            opening,
        }
    }

    /// Writes the full letter. Returns `""` when the profile is absent or blank,
    /// or the job description is blank.
    pub fn compose<R: Rng + ?Sized>(
        &self,
        profile: Option<&Profile>,
        job_description: &str,
        rng: &mut R,
    ) -> String {
        let Some(profile) = profile.filter(|p| !p.is_empty()) else {
            return String::new();
        };
        if job_description.trim().is_empty() {
            return String::new();
        }

        let analysis = self.analyze(profile, job_description);
        self.write(profile, &analysis, rng)
    }

    /// Writes the letter from an analysis already made for `profile`.
    ///
    /// Does no input checks. A blank full name leaves the name line out of the
    /// header and the signature.
    pub fn write<R: Rng + ?Sized>(
        &self,
        profile: &Profile,
        analysis: &LetterAnalysis,
        rng: &mut R,
    ) -> String {
        debug!(
            "Composing letter: {} keywords, {} matching skills, {:?} opening, title '{}'",
            analysis.keywords.len(),
            analysis.matching_skills.len(),
            analysis.opening,
            analysis.position.job_title
        );

        let sections = [
            header(profile, &format_letter_date(self.clock.today())),
            GREETING.to_string(),
            opening_paragraph(analysis, rng),
            experience_paragraph(&profile.experience, &analysis.matching_skills),
            skills_paragraph(&analysis.matching_skills),
            CLOSING.to_string(),
            signature(profile),
        ];

        sections.join("\n\n")
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Sections
// ────────────────────────────────────────────────────────────────────────────

/// Name and contacts, a blank line, the date, then a trailing blank line.
fn header(profile: &Profile, date: &str) -> String {
    let name = profile.full_name.trim();
    let mut lines: Vec<&str> = Vec::new();
    if !name.is_empty() {
        lines.push(name);
    }
    lines.extend(profile.contact_lines());

    if lines.is_empty() {
        format!("{date}\n")
    } else {
        format!("{}\n\n{date}\n", lines.join("\n"))
    }
}

fn signature(profile: &Profile) -> String {
    match profile.full_name.trim() {
        "" => SIGN_OFF.to_string(),
        name => format!("{SIGN_OFF}\n\n{name}"),
    }
}

fn opening_paragraph<R: Rng + ?Sized>(analysis: &LetterAnalysis, rng: &mut R) -> String {
    let job_title = analysis.position.job_title.as_str();
    let matching = &analysis.matching_skills;

    match analysis.opening {
        OpeningVariant::Strong => {
            let years: u8 = rng.gen_range(EXPERIENCE_YEARS_RANGE);
            let cited = matching[..OPENING_CITED_SKILLS].join(", ");
            OPENING_STRONG_TEMPLATE
                .replace("{job_title}", job_title)
                .replace("{years}", &years.to_string())
                .replace("{skills}", &cited)
        }
        OpeningVariant::Moderate => OPENING_MODERATE_TEMPLATE
            .replace("{job_title}", job_title)
            .replace("{skills}", &matching.join(", ")),
        OpeningVariant::Generic => OPENING_GENERIC_TEMPLATE.replace("{job_title}", job_title),
    }
}

fn experience_paragraph(experience: &str, matching: &[String]) -> String {
    if experience.trim().chars().count() < MIN_EXPERIENCE_CHARS {
        return EXPERIENCE_GENERIC.to_string();
    }

    let relevant: Vec<&str> = experience
        .split(['.', '!', '?'])
        .map(str::trim)
        .filter(|sentence| sentence.chars().count() > MIN_RELEVANT_SENTENCE_CHARS)
        .filter(|sentence| {
            let lower = sentence.to_lowercase();
            matching.iter().any(|skill| lower.contains(skill.as_str()))
        })
        .take(RELEVANT_SENTENCE_LIMIT)
        .collect();

    if !relevant.is_empty() {
        let relevant_experience = format!("{}.", relevant.join(". "));
        return EXPERIENCE_RELEVANT_TEMPLATE.replace("{relevant_experience}", &relevant_experience);
    }

    let truncated: String = experience.chars().take(SUMMARY_MAX_CHARS).collect();
    let summary = truncated.trim();
    if summary.chars().count() > MIN_SUMMARY_CHARS {
        return EXPERIENCE_SUMMARY_TEMPLATE.replace("{summary}", summary);
    }

    EXPERIENCE_GENERIC.to_string()
}

fn skills_paragraph(matching: &[String]) -> String {
    if matching.is_empty() {
        return SKILLS_GENERIC.to_string();
    }
    let listed = matching
        .iter()
        .take(SKILLS_PARAGRAPH_LIMIT)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ");
    SKILLS_MATCHED_TEMPLATE.replace("{skills}", &listed)
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
