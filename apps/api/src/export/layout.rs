//! Letter layout: strips the letter's own header and signature and places every line on pages.
//!
//! The exporter draws the header (name, contacts, date), greeting and signature itself,
//! so those lines are removed from the letter text first. What remains is laid out as
//! body paragraphs: blank lines in the text separate paragraphs, every other line
//! starts a new printed line and is word-wrapped to the content width.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::export::font_metrics::{get_metrics, PageConfig, PdfFont};
use crate::generation::templates::{GREETING, SIGN_OFF};
use crate::models::profile::Profile;

const NAME_SIZE_PT: f32 = 16.0;
const CONTACT_SIZE_PT: f32 = 10.0;
const HEADING_SIZE_PT: f32 = 12.0;

static NUMERIC_DATE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{1,2}/\d{1,2}/\d{4}$").expect("valid date regex"));
static LONG_DATE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z]+ \d{1,2}, \d{4}$").expect("valid date regex"));

// ────────────────────────────────────────────────────────────────────────────
// Types
// ────────────────────────────────────────────────────────────────────────────

/// One line of text at a fixed position. `baseline_pt` is measured from the top of the page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedLine {
    pub text: String,
    pub x_pt: f32,
    pub baseline_pt: f32,
    pub size_pt: f32,
    pub bold: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PageLayout {
    pub lines: Vec<PlacedLine>,
}

/// Header block drawn above the greeting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterHeader {
    pub name: String,
    pub contacts: Vec<String>,
    pub date: String,
}

impl LetterHeader {
    pub fn from_profile(profile: &Profile, date: String) -> Self {
        Self {
            name: profile.full_name.trim().to_string(),
            contacts: profile
                .contact_lines()
                .into_iter()
                .map(str::to_string)
                .collect(),
            date,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Body extraction
// ────────────────────────────────────────────────────────────────────────────

fn is_letter_chrome(line: &str, profile: &Profile) -> bool {
    let name = profile.full_name.trim();
    (!name.is_empty() && line == name)
        || profile.contact_lines().contains(&line)
        || NUMERIC_DATE_RE.is_match(line)
        || LONG_DATE_RE.is_match(line)
        || line.starts_with("Dear")
        || line == SIGN_OFF
}

/// Body paragraphs of `letter`, each a list of source lines.
///
/// Drops the name, contact lines, date lines, the greeting and the sign-off.
pub fn extract_body(letter: &str, profile: &Profile) -> Vec<Vec<String>> {
    let mut paragraphs = Vec::new();
    let mut current: Vec<String> = Vec::new();

    for raw in letter.lines() {
        let line = raw.trim();
        if line.is_empty() {
            if !current.is_empty() {
                paragraphs.push(std::mem::take(&mut current));
            }
            continue;
        }
        if is_letter_chrome(line, profile) {
            continue;
        }
        current.push(line.to_string());
    }

    if !current.is_empty() {
        paragraphs.push(current);
    }
    paragraphs
}

// ────────────────────────────────────────────────────────────────────────────
// Pagination
// ────────────────────────────────────────────────────────────────────────────

struct Cursor<'a> {
    config: &'a PageConfig,
    pages: Vec<PageLayout>,
    y: f32,
}

impl<'a> Cursor<'a> {
    fn new(config: &'a PageConfig) -> Self {
        Self {
            config,
            pages: vec![PageLayout::default()],
            y: config.margin_pt,
        }
    }

    fn page_is_empty(&self) -> bool {
        self.pages.last().map_or(true, |p| p.lines.is_empty())
    }

    /// Starts a new page unless `height` more points fit on the current one.
    fn ensure_room(&mut self, height: f32) {
        if !self.page_is_empty() && self.y + height > self.config.bottom_limit_pt() {
            self.pages.push(PageLayout::default());
            self.y = self.config.margin_pt;
        }
    }

    fn gap(&mut self, height: f32) {
        if !self.page_is_empty() {
            self.y += height;
        }
    }

    fn place(&mut self, text: &str, size_pt: f32, bold: bool, advance_pt: f32) {
        self.ensure_room(advance_pt);
        self.y += advance_pt;
        let line = PlacedLine {
            text: text.to_string(),
            x_pt: self.config.margin_pt,
            baseline_pt: self.y,
            size_pt,
            bold,
        };
        if let Some(page) = self.pages.last_mut() {
            page.lines.push(line);
        }
    }
}

/// Places header, greeting, body and signature on as many pages as needed.
///
/// The sign-off and the name under it always land on the same page.
pub fn layout_letter(
    header: &LetterHeader,
    body: &[Vec<String>],
    font: PdfFont,
    config: &PageConfig,
) -> Vec<PageLayout> {
    let metrics = get_metrics(&font);
    let body_size = config.body_font_size_pt;
    let line_height = config.body_line_height_pt;
    let mut cursor = Cursor::new(config);

    if !header.name.is_empty() {
        cursor.place(&header.name, NAME_SIZE_PT, true, 20.0);
    }
    for contact in &header.contacts {
        cursor.place(contact, CONTACT_SIZE_PT, false, 12.0);
    }
    cursor.gap(12.0);
    cursor.place(&header.date, HEADING_SIZE_PT, false, 16.0);
    cursor.gap(16.0);
    cursor.place(GREETING, HEADING_SIZE_PT, false, 16.0);
    cursor.gap(8.0);

    for (i, paragraph) in body.iter().enumerate() {
        if i > 0 {
            cursor.gap(config.paragraph_gap_pt);
        }
        for source_line in paragraph {
            for wrapped in metrics.wrap(source_line, body_size, config.content_width_pt()) {
                cursor.place(&wrapped, body_size, false, line_height);
            }
        }
    }

    cursor.gap(12.0);
    cursor.ensure_room(16.0 + 28.0);
    cursor.place(SIGN_OFF, HEADING_SIZE_PT, false, 16.0);
    if !header.name.is_empty() {
        cursor.place(&header.name, HEADING_SIZE_PT, true, 28.0);
    }

    cursor.pages
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::font_metrics::default_page_config;

    fn profile() -> Profile {
        Profile {
            full_name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            location: "London".to_string(),
            ..Default::default()
        }
    }

    fn header() -> LetterHeader {
        LetterHeader::from_profile(&profile(), "March 7, 2025".to_string())
    }

    const LETTER: &str = "Ada Lovelace
ada@example.com
London

March 7, 2025

Dear Hiring Manager,

First paragraph.

Second paragraph
continues on a second source line.

Sincerely,

Ada Lovelace";

    #[test]
    fn test_extract_body_strips_header_greeting_and_signature() {
        let body = extract_body(LETTER, &profile());
        assert_eq!(
            body,
            vec![
                vec!["First paragraph.".to_string()],
                vec![
                    "Second paragraph".to_string(),
                    "continues on a second source line.".to_string()
                ],
            ]
        );
    }

    #[test]
    fn test_extract_body_drops_numeric_dates() {
        let body = extract_body("3/7/2025\n\nBody text.", &profile());
        assert_eq!(body, vec![vec!["Body text.".to_string()]]);
    }

    #[test]
    fn test_extract_body_keeps_edited_text() {
        let edited = LETTER.replace("First paragraph.", "I rewrote this part myself.");
        let body = extract_body(&edited, &profile());
        assert_eq!(body[0], vec!["I rewrote this part myself.".to_string()]);
    }

    #[test]
    fn test_extract_body_of_only_chrome_is_empty() {
        let body = extract_body("Ada Lovelace\n\nDear Hiring Manager,\n\nSincerely,", &profile());
        assert!(body.is_empty());
    }

    #[test]
    fn test_header_from_profile_skips_blank_contacts() {
        let h = header();
        assert_eq!(h.name, "Ada Lovelace");
        assert_eq!(h.contacts, vec!["ada@example.com", "London"]);
    }

    #[test]
    fn test_layout_single_page_order() {
        let config = default_page_config();
        let body = extract_body(LETTER, &profile());
        let pages = layout_letter(&header(), &body, PdfFont::Times, &config);

        assert_eq!(pages.len(), 1);
        let texts: Vec<&str> = pages[0].lines.iter().map(|l| l.text.as_str()).collect();
        assert_eq!(
            texts,
            vec![
                "Ada Lovelace",
                "ada@example.com",
                "London",
                "March 7, 2025",
                "Dear Hiring Manager,",
                "First paragraph.",
                "Second paragraph",
                "continues on a second source line.",
                "Sincerely,",
                "Ada Lovelace",
            ]
        );
        assert!(pages[0].lines[0].bold);
        assert!((pages[0].lines[0].size_pt - NAME_SIZE_PT).abs() < 1e-4);
        assert!(pages[0].lines.last().unwrap().bold);
    }

    #[test]
    fn test_layout_baselines_increase_down_the_page() {
        let config = default_page_config();
        let body = extract_body(LETTER, &profile());
        let pages = layout_letter(&header(), &body, PdfFont::Helvetica, &config);
        let baselines: Vec<f32> = pages[0].lines.iter().map(|l| l.baseline_pt).collect();
        assert!(baselines.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_long_letter_paginates_within_margins() {
        let config = default_page_config();
        let paragraph = "This sentence is repeated to fill the page with body text. ".repeat(30);
        let body: Vec<Vec<String>> = (0..6).map(|_| vec![paragraph.clone()]).collect();
        let pages = layout_letter(&header(), &body, PdfFont::Courier, &config);

        assert!(pages.len() > 1, "expected several pages, got {}", pages.len());
        for page in &pages {
            assert!(!page.lines.is_empty());
            for line in &page.lines {
                assert!(line.baseline_pt <= config.bottom_limit_pt() + 1e-3);
                assert!(line.baseline_pt > config.margin_pt);
            }
        }
    }

    #[test]
    fn test_signature_block_stays_together() {
        let config = default_page_config();
        // Enough single lines to land the sign-off near the bottom of a page.
        for count in 30..45 {
            let body: Vec<Vec<String>> = vec![(0..count).map(|i| format!("Line {i}")).collect()];
            let pages = layout_letter(&header(), &body, PdfFont::Times, &config);
            let last = pages.last().unwrap();
            let n = last.lines.len();
            assert!(n >= 2);
            assert_eq!(last.lines[n - 2].text, "Sincerely,");
            assert_eq!(last.lines[n - 1].text, "Ada Lovelace");
        }
    }
}
