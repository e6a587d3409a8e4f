//! PDF rendering of laid-out letter pages with `lopdf`.
//!
//! Only base-14 Type1 fonts are used, so the output needs no embedded font files.
//! Text is written as WinAnsi-encoded literal strings.

use chrono::NaiveDate;
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, ObjectId, Stream};
use tracing::info;

use crate::export::font_metrics::{default_page_config, PageConfig, PdfFont};
use crate::export::layout::{extract_body, layout_letter, LetterHeader, PageLayout};
use crate::export::ExportError;
use crate::generation::clock::format_letter_date;
use crate::models::profile::Profile;

const REGULAR_FONT_KEY: &str = "F1";
const BOLD_FONT_KEY: &str = "F2";

/// Everything needed to print one letter.
#[derive(Debug, Clone)]
pub struct ExportRequest<'a> {
    /// Letter text, possibly edited by the user.
    pub letter: &'a str,
    pub profile: &'a Profile,
    pub font: PdfFont,
    /// Printed under the contact block.
    pub date: NaiveDate,
}

/// Turns letter text into a printable document.
pub trait DocumentExporter: Send + Sync {
    fn export(&self, request: &ExportRequest<'_>) -> Result<Vec<u8>, ExportError>;
}

/// Renders US-letter PDFs with the standard Times, Helvetica or Courier fonts.
#[derive(Debug, Clone)]
pub struct PdfExporter {
    page_config: PageConfig,
}

impl Default for PdfExporter {
    fn default() -> Self {
        Self::new(default_page_config())
    }
}

impl PdfExporter {
    pub fn new(page_config: PageConfig) -> Self {
        Self { page_config }
    }
}

impl DocumentExporter for PdfExporter {
    fn export(&self, request: &ExportRequest<'_>) -> Result<Vec<u8>, ExportError> {
        if request.letter.trim().is_empty() {
            return Err(ExportError::EmptyLetter);
        }

        let header = LetterHeader::from_profile(request.profile, format_letter_date(request.date));
        let body = extract_body(request.letter, request.profile);
        let pages = layout_letter(&header, &body, request.font, &self.page_config);

        let bytes = render_pdf(&pages, request.font, &self.page_config, &header.name)?;
        info!(
            "Rendered cover letter PDF: {} page(s), {} bytes, font {:?}",
            pages.len(),
            bytes.len(),
            request.font
        );
        Ok(bytes)
    }
}

fn render_pdf(
    pages: &[PageLayout],
    font: PdfFont,
    config: &PageConfig,
    author: &str,
) -> Result<Vec<u8>, ExportError> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let regular_id = add_font(&mut doc, font.base_font(false));
    let bold_id = add_font(&mut doc, font.base_font(true));
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            REGULAR_FONT_KEY => regular_id,
            BOLD_FONT_KEY => bold_id,
        },
    });

    let page_height = config.page_height_pt;
    let mut kids: Vec<Object> = Vec::with_capacity(pages.len());
    for page in pages {
        let content = page_content(page, page_height);
        let encoded = content
            .encode()
            .map_err(|e| ExportError::Render(format!("content stream: {e}")))?;
        let content_id = doc.add_object(Stream::new(dictionary! {}, encoded));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        });
        kids.push(page_id.into());
    }

    let page_count = kids.len() as i64;
    let media_box: Vec<Object> = vec![
        0.into(),
        0.into(),
        (config.page_width_pt.round() as i64).into(),
        (page_height.round() as i64).into(),
    ];
    let pages_dict = dictionary! {
        "Type" => "Pages",
        "Kids" => kids,
        "Count" => page_count,
        "Resources" => resources_id,
        "MediaBox" => media_box,
    };
    doc.objects.insert(pages_id, Object::Dictionary(pages_dict));

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let info_id = doc.add_object(dictionary! {
        "Title" => Object::string_literal(to_win_ansi(&format!("Cover Letter - {author}"))),
        "Author" => Object::string_literal(to_win_ansi(author)),
    });
    doc.trailer.set("Info", info_id);

    doc.compress();

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes)
        .map_err(|e| ExportError::Render(format!("writing document: {e}")))?;
    Ok(bytes)
}

fn add_font(doc: &mut Document, base_font: &str) -> ObjectId {
    doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => base_font,
        "Encoding" => "WinAnsiEncoding",
    })
}

fn page_content(page: &PageLayout, page_height: f32) -> Content {
    let mut operations = Vec::with_capacity(page.lines.len() * 5);
    for line in &page.lines {
        let font_key = if line.bold {
            BOLD_FONT_KEY
        } else {
            REGULAR_FONT_KEY
        };
        let x = line.x_pt.round() as i64;
        let y = (page_height - line.baseline_pt).round() as i64;
        let size = line.size_pt.round() as i64;

        operations.push(Operation::new("BT", vec![]));
        operations.push(Operation::new("Tf", vec![font_key.into(), size.into()]));
        operations.push(Operation::new("Td", vec![x.into(), y.into()]));
        operations.push(Operation::new(
            "Tj",
            vec![Object::string_literal(to_win_ansi(&line.text))],
        ));
        operations.push(Operation::new("ET", vec![]));
    }
    Content { operations }
}

/// Encodes text for a WinAnsiEncoding font.
///
/// Latin-1 passes through, common typographic punctuation is mapped to its
/// WinAnsi slot, anything else becomes `?`.
pub fn to_win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| match c {
            '\u{20}'..='\u{7E}' | '\u{A0}'..='\u{FF}' => c as u8,
            '\u{20AC}' => 0x80,
            '\u{2026}' => 0x85,
            '\u{2018}' => 0x91,
            '\u{2019}' => 0x92,
            '\u{201C}' => 0x93,
            '\u{201D}' => 0x94,
            '\u{2022}' => 0x95,
            '\u{2013}' => 0x96,
            '\u{2014}' => 0x97,
            '\t' => b' ',
            _ => b'?',
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> Profile {
        Profile {
            full_name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            phone: "555-0100".to_string(),
            ..Default::default()
        }
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 7).unwrap()
    }

    const LETTER: &str = "Ada Lovelace\nada@example.com\n555-0100\n\nMarch 7, 2025\n\n\
                          Dear Hiring Manager,\n\nI would enjoy building engines with your team.\n\n\
                          Sincerely,\n\nAda Lovelace";

    fn export(letter: &str, font: PdfFont) -> Result<Vec<u8>, ExportError> {
        let profile = profile();
        PdfExporter::default().export(&ExportRequest {
            letter,
            profile: &profile,
            font,
            date: date(),
        })
    }

    #[test]
    fn test_export_produces_pdf_bytes() {
        let bytes = export(LETTER, PdfFont::Times).unwrap();
        assert!(bytes.starts_with(b"%PDF-1.5"));
        assert!(bytes.len() > 200);
    }

    #[test]
    fn test_export_empty_letter_is_an_error() {
        let err = export("  \n ", PdfFont::Times).unwrap_err();
        assert!(matches!(err, ExportError::EmptyLetter));
    }

    #[test]
    fn test_exported_pdf_loads_with_expected_page_count() {
        let bytes = export(LETTER, PdfFont::Helvetica).unwrap();
        let doc = Document::load_mem(&bytes).unwrap();
        assert_eq!(doc.get_pages().len(), 1);
    }

    #[test]
    fn test_long_letter_exports_several_pages() {
        let long_body = "Every paragraph here is long enough to wrap across many lines. ".repeat(40);
        let letter = format!("{LETTER}\n\n{long_body}\n\n{long_body}");
        let bytes = export(&letter, PdfFont::Courier).unwrap();
        let doc = Document::load_mem(&bytes).unwrap();
        assert!(doc.get_pages().len() >= 2);
    }

    #[test]
    fn test_exported_text_is_extractable() {
        let bytes = export(LETTER, PdfFont::Times).unwrap();
        let text = pdf_extract::extract_text_from_mem(&bytes).unwrap();
        assert!(text.contains("Sincerely"), "extracted: {text}");
        assert!(text.contains("engines"), "extracted: {text}");
    }

    #[test]
    fn test_page_content_flips_y_axis() {
        let page = PageLayout {
            lines: vec![crate::export::layout::PlacedLine {
                text: "Hi".to_string(),
                x_pt: 72.0,
                baseline_pt: 92.0,
                size_pt: 16.0,
                bold: true,
            }],
        };
        let content = page_content(&page, 792.0);
        let ops: Vec<&str> = content.operations.iter().map(|o| o.operator.as_str()).collect();
        assert_eq!(ops, vec!["BT", "Tf", "Td", "Tj", "ET"]);
        assert_eq!(content.operations[2].operands[1].as_i64().unwrap(), 700);
        assert_eq!(
            content.operations[1].operands[0].as_name().unwrap(),
            BOLD_FONT_KEY.as_bytes()
        );
    }

    #[test]
    fn test_win_ansi_encoding() {
        assert_eq!(to_win_ansi("Hello"), b"Hello".to_vec());
        assert_eq!(to_win_ansi("café"), vec![b'c', b'a', b'f', 0xE9]);
        assert_eq!(to_win_ansi("\u{201C}hi\u{201D} \u{2014}"), vec![0x93, b'h', b'i', 0x94, b' ', 0x97]);
        assert_eq!(to_win_ansi("日本"), b"??".to_vec());
    }
}
