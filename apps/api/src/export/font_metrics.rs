//! Static font-metric tables for the three standard PDF font families.
//!
//! Widths are in em units (glyph width / 1000 from the standard Type1 metrics),
//! regular weight only. Bold text is only used for single-line name blocks that are
//! never wrapped, so the regular table is close enough there.
//! All tables cover ASCII 0x20..=0x7E (95 printable characters).
//! Index = (char as usize) - 32.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::export::ExportError;

// ────────────────────────────────────────────────────────────────────────────
// Font family enum
// ────────────────────────────────────────────────────────────────────────────

/// Fonts offered for PDF export. All are PDF base-14 fonts, so nothing is embedded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PdfFont {
    /// Shown to users as "Times New Roman".
    #[default]
    #[serde(alias = "times new roman")]
    Times,
    /// Shown to users as "Arial".
    #[serde(alias = "arial")]
    Helvetica,
    /// Shown to users as "Courier New".
    #[serde(alias = "courier new")]
    Courier,
}

impl PdfFont {
    /// PostScript name of the regular or bold face.
    pub fn base_font(&self, bold: bool) -> &'static str {
        match (self, bold) {
            (PdfFont::Times, false) => "Times-Roman",
            (PdfFont::Times, true) => "Times-Bold",
            (PdfFont::Helvetica, false) => "Helvetica",
            (PdfFont::Helvetica, true) => "Helvetica-Bold",
            (PdfFont::Courier, false) => "Courier",
            (PdfFont::Courier, true) => "Courier-Bold",
        }
    }
}

impl FromStr for PdfFont {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "times" | "times new roman" => Ok(PdfFont::Times),
            "helvetica" | "arial" => Ok(PdfFont::Helvetica),
            "courier" | "courier new" => Ok(PdfFont::Courier),
            _ => Err(ExportError::UnknownFont(s.to_string())),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Page configuration
// ────────────────────────────────────────────────────────────────────────────

/// Page geometry in PDF points (1/72 inch).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageConfig {
    pub page_width_pt: f32,
    pub page_height_pt: f32,
    pub margin_pt: f32,
    pub body_font_size_pt: f32,
    pub body_line_height_pt: f32,
    pub paragraph_gap_pt: f32,
}

impl PageConfig {
    pub fn content_width_pt(&self) -> f32 {
        self.page_width_pt - 2.0 * self.margin_pt
    }

    /// Lowest baseline (measured from the top) a line may sit on.
    pub fn bottom_limit_pt(&self) -> f32 {
        self.page_height_pt - self.margin_pt
    }
}

/// US letter (8.5" × 11"), 1" margins, 12pt body.
pub fn default_page_config() -> PageConfig {
    PageConfig {
        page_width_pt: 612.0,
        page_height_pt: 792.0,
        margin_pt: 72.0,
        body_font_size_pt: 12.0,
        body_line_height_pt: 16.0,
        paragraph_gap_pt: 10.0,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Font metric table
// ────────────────────────────────────────────────────────────────────────────

/// Static character-width table for a font family.
///
/// `widths[i]` = width of ASCII character `(i + 32)` in em.
/// Slot layout matches the comment rows in each table below.
pub struct FontMetricTable {
    widths: [f32; 95],
    /// Fallback width for non-ASCII characters.
    pub average_char_width: f32,
    pub space_width: f32,
}

impl FontMetricTable {
    /// Rendered width of a string in em units. Non-ASCII falls back to `average_char_width`.
    pub fn measure_str(&self, s: &str) -> f32 {
        s.chars()
            .map(|c| {
                let code = c as usize;
                if (32..=126).contains(&code) {
                    self.widths[code - 32]
                } else {
                    self.average_char_width
                }
            })
            .sum()
    }

    /// Width of `s` in points at `font_size_pt`.
    pub fn width_pt(&self, s: &str, font_size_pt: f32) -> f32 {
        self.measure_str(s) * font_size_pt
    }

    /// Greedy word wrap into lines no wider than `max_width_pt`.
    ///
    /// A single word wider than the line is placed on its own line rather than split.
    /// Whitespace-only input yields no lines.
    pub fn wrap(&self, text: &str, font_size_pt: f32, max_width_pt: f32) -> Vec<String> {
        let space_pt = self.space_width * font_size_pt;
        let mut lines = Vec::new();
        let mut current = String::new();
        let mut current_width = 0.0_f32;

        for word in text.split_whitespace() {
            let word_w = self.width_pt(word, font_size_pt);
            if current.is_empty() {
                current.push_str(word);
                current_width = word_w;
            } else if current_width + space_pt + word_w > max_width_pt {
                lines.push(std::mem::take(&mut current));
                current.push_str(word);
                current_width = word_w;
            } else {
                current.push(' ');
                current.push_str(word);
                current_width += space_pt + word_w;
            }
        }

        if !current.is_empty() {
            lines.push(current);
        }
        lines
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Static width tables  (95 ASCII printable characters each)
// ────────────────────────────────────────────────────────────────────────────

static TIMES_TABLE: FontMetricTable = FontMetricTable {
    #[rustfmt::skip]
    widths: [
        // sp    !      "      #      $      %      &      '      (      )      *      +      ,      -      .      /
        0.250, 0.333, 0.408, 0.500, 0.500, 0.833, 0.778, 0.333, 0.333, 0.333, 0.500, 0.564, 0.250, 0.333, 0.250, 0.278,
        // 0      1      2      3      4      5      6      7      8      9
        0.500, 0.500, 0.500, 0.500, 0.500, 0.500, 0.500, 0.500, 0.500, 0.500,
        // :      ;      <      =      >      ?      @
        0.278, 0.278, 0.564, 0.564, 0.564, 0.444, 0.921,
        // A      B      C      D      E      F      G      H      I      J      K      L      M
        0.722, 0.667, 0.667, 0.722, 0.611, 0.556, 0.722, 0.722, 0.333, 0.389, 0.722, 0.611, 0.889,
        // N      O      P      Q      R      S      T      U      V      W      X      Y      Z
        0.722, 0.722, 0.556, 0.722, 0.667, 0.556, 0.611, 0.722, 0.722, 0.944, 0.722, 0.722, 0.611,
        // [      \      ]      ^      _      `
        0.333, 0.278, 0.333, 0.469, 0.500, 0.333,
        // a      b      c      d      e      f      g      h      i      j      k      l      m
        0.444, 0.500, 0.444, 0.500, 0.444, 0.333, 0.500, 0.500, 0.278, 0.278, 0.500, 0.278, 0.778,
        // n      o      p      q      r      s      t      u      v      w      x      y      z
        0.500, 0.500, 0.500, 0.500, 0.333, 0.389, 0.278, 0.500, 0.500, 0.722, 0.500, 0.500, 0.444,
        // {      |      }      ~
        0.480, 0.200, 0.480, 0.541,
    ],
    average_char_width: 0.47,
    space_width: 0.250,
};

static HELVETICA_TABLE: FontMetricTable = FontMetricTable {
    #[rustfmt::skip]
    widths: [
        // sp    !      "      #      $      %      &      '      (      )      *      +      ,      -      .      /
        0.278, 0.278, 0.355, 0.556, 0.556, 0.889, 0.667, 0.222, 0.333, 0.333, 0.389, 0.584, 0.278, 0.333, 0.278, 0.278,
        // 0      1      2      3      4      5      6      7      8      9
        0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556,
        // :      ;      <      =      >      ?      @
        0.278, 0.278, 0.584, 0.584, 0.584, 0.556, 1.015,
        // A      B      C      D      E      F      G      H      I      J      K      L      M
        0.667, 0.667, 0.722, 0.722, 0.667, 0.611, 0.778, 0.722, 0.278, 0.500, 0.667, 0.556, 0.833,
        // N      O      P      Q      R      S      T      U      V      W      X      Y      Z
        0.722, 0.778, 0.667, 0.778, 0.722, 0.667, 0.611, 0.722, 0.667, 0.944, 0.667, 0.667, 0.611,
        // [      \      ]      ^      _      `
        0.278, 0.278, 0.278, 0.469, 0.556, 0.222,
        // a      b      c      d      e      f      g      h      i      j      k      l      m
        0.556, 0.556, 0.500, 0.556, 0.556, 0.278, 0.556, 0.556, 0.222, 0.222, 0.500, 0.222, 0.833,
        // n      o      p      q      r      s      t      u      v      w      x      y      z
        0.556, 0.556, 0.556, 0.556, 0.333, 0.500, 0.278, 0.556, 0.500, 0.722, 0.500, 0.500, 0.500,
        // {      |      }      ~
        0.334, 0.260, 0.334, 0.584,
    ],
    average_char_width: 0.52,
    space_width: 0.278,
};

/// Courier is monospaced: every glyph is 0.6 em.
static COURIER_TABLE: FontMetricTable = FontMetricTable {
    widths: [0.600; 95],
    average_char_width: 0.600,
    space_width: 0.600,
};

/// Returns the static metric table for a font family.
pub fn get_metrics(font: &PdfFont) -> &'static FontMetricTable {
    match font {
        PdfFont::Times => &TIMES_TABLE,
        PdfFont::Helvetica => &HELVETICA_TABLE,
        PdfFont::Courier => &COURIER_TABLE,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_measure_str_empty_returns_zero() {
        assert_eq!(get_metrics(&PdfFont::Times).measure_str(""), 0.0);
    }

    #[test]
    fn test_measure_str_ascii_characters() {
        let metrics = get_metrics(&PdfFont::Helvetica);
        // "Rust" = R(0.722) + u(0.556) + s(0.500) + t(0.278) = 2.056
        let width = metrics.measure_str("Rust");
        assert!((width - 2.056).abs() < 1e-3, "got {width}");
    }

    #[test]
    fn test_measure_str_non_ascii_falls_back() {
        let metrics = get_metrics(&PdfFont::Times);
        let width = metrics.measure_str("é");
        assert!((width - metrics.average_char_width).abs() < 1e-4);
    }

    #[test]
    fn test_courier_is_monospaced() {
        let metrics = get_metrics(&PdfFont::Courier);
        assert!((metrics.measure_str("iiii") - metrics.measure_str("WWWW")).abs() < 1e-6);
        assert!((metrics.width_pt("abcde", 10.0) - 30.0).abs() < 1e-4);
    }

    #[test]
    fn test_times_narrower_than_courier() {
        let text = "Delivered reliable software";
        assert!(
            get_metrics(&PdfFont::Times).measure_str(text)
                < get_metrics(&PdfFont::Courier).measure_str(text)
        );
    }

    #[test]
    fn test_wrap_short_text_is_one_line() {
        let lines = get_metrics(&PdfFont::Times).wrap("Dear reader", 12.0, 468.0);
        assert_eq!(lines, vec!["Dear reader"]);
    }

    #[test]
    fn test_wrap_respects_width() {
        let config = default_page_config();
        let metrics = get_metrics(&PdfFont::Helvetica);
        let text = "word ".repeat(200);
        let lines = metrics.wrap(&text, 12.0, config.content_width_pt());

        assert!(lines.len() > 1);
        for line in &lines {
            assert!(
                metrics.width_pt(line, 12.0) <= config.content_width_pt() + 1e-3,
                "line too wide: {line}"
            );
        }
        let rejoined: Vec<&str> = lines.iter().flat_map(|l| l.split(' ')).collect();
        assert_eq!(rejoined.len(), 200, "no word may be lost");
    }

    #[test]
    fn test_wrap_overlong_word_gets_own_line() {
        let long = "x".repeat(300);
        let text = format!("a {long} b");
        let lines = get_metrics(&PdfFont::Courier).wrap(&text, 12.0, 100.0);
        assert_eq!(lines, vec!["a".to_string(), long, "b".to_string()]);
    }

    #[test]
    fn test_wrap_blank_text_is_empty() {
        assert!(get_metrics(&PdfFont::Times).wrap("  \t ", 12.0, 468.0).is_empty());
    }

    #[test]
    fn test_font_parse_accepts_names_and_labels() {
        assert_eq!("times".parse::<PdfFont>().unwrap(), PdfFont::Times);
        assert_eq!("Arial".parse::<PdfFont>().unwrap(), PdfFont::Helvetica);
        assert_eq!(" Courier New ".parse::<PdfFont>().unwrap(), PdfFont::Courier);
        assert!("comic sans".parse::<PdfFont>().is_err());
    }

    #[test]
    fn test_font_serde_lowercase() {
        let font: PdfFont = serde_json::from_str(r#""helvetica""#).unwrap();
        assert_eq!(font, PdfFont::Helvetica);
        assert_eq!(serde_json::to_string(&PdfFont::Courier).unwrap(), r#""courier""#);
    }

    #[test]
    fn test_each_font_has_its_own_table() {
        let times = get_metrics(&PdfFont::Times).measure_str("iW");
        let helvetica = get_metrics(&PdfFont::Helvetica).measure_str("iW");
        let courier = get_metrics(&PdfFont::Courier).measure_str("iW");
        assert!((courier - 1.2).abs() < 1e-4);
        assert!((times - courier).abs() > 1e-3);
        assert!((helvetica - courier).abs() > 1e-3);
    }

    #[test]
    fn test_base_font_names() {
        assert_eq!(PdfFont::Times.base_font(false), "Times-Roman");
        assert_eq!(PdfFont::Helvetica.base_font(true), "Helvetica-Bold");
        assert_eq!(PdfFont::Courier.base_font(true), "Courier-Bold");
    }

    #[test]
    fn test_default_page_config_sanity() {
        let config = default_page_config();
        assert!((config.content_width_pt() - 468.0).abs() < 1e-4);
        assert!((config.bottom_limit_pt() - 720.0).abs() < 1e-4);
    }
}
