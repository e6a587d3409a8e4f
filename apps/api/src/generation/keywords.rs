//! Keyword and skill matching between a job description and the profile.
//!
//! Both directions use plain substring containment: a word matches a term when
//! either contains the other. Short terms ("go", "ai") therefore match many
//! unrelated words. That is the observed behavior and is kept as-is.

use crate::generation::vocabulary::Vocabulary;

fn overlaps(a: &str, b: &str) -> bool {
    a.contains(b) || b.contains(a)
}

/// Lowercased whitespace-delimited words of `text` that overlap a vocabulary term.
/// Duplicates are kept, in order of occurrence.
pub fn extract_keywords(text: &str, vocabulary: &Vocabulary) -> Vec<String> {
    text.to_lowercase()
        .split_whitespace()
        .filter(|word| vocabulary.terms().any(|term| overlaps(word, term)))
        .map(str::to_string)
        .collect()
}

/// Splits the free-text skills field on commas and newlines.
/// Pieces are trimmed and lowercased; empty pieces are dropped.
pub fn extract_skills(skills: &str) -> Vec<String> {
    skills
        .to_lowercase()
        .split([',', '\n'])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Skills overlapping at least one keyword, in skills-list order.
pub fn match_skills(skills: &[String], keywords: &[String]) -> Vec<String> {
    skills
        .iter()
        .filter(|skill| keywords.iter().any(|kw| overlaps(skill, kw)))
        .cloned()
        .collect()
}
