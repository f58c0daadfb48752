//! Static font-metric table for the body font and the page geometry it is
//! laid out on.
//!
//! Widths are the Adobe core-font AFM widths for Helvetica, stored in em
//! units (AFM value / 1000). The table covers ASCII 0x20..=0x7E; other
//! characters in the WinAnsi range use a small lookup of common
//! typographic glyphs and fall back to `average_char_width`.
//! Index = (char as usize) - 32.

#![allow(dead_code)]

// ────────────────────────────────────────────────────────────────────────────
// Page configuration
// ────────────────────────────────────────────────────────────────────────────

/// Millimetres to PDF points.
pub const PT_PER_MM: f32 = 72.0 / 25.4;

/// Layout parameters for every page of a rendered document. Lengths in mm.
#[derive(Debug, Clone)]
pub struct PageConfig {
    pub font: &'static FontMetricTable,
    pub font_size_pt: f32,
    pub page_width_mm: f32,
    pub page_height_mm: f32,
    pub margin_left_mm: f32,
    pub margin_top_mm: f32,
    pub margin_right_mm: f32,
    /// Auto page break: a line may not extend into this band.
    pub margin_bottom_mm: f32,
    /// Horizontal padding inside the text block on each side.
    pub cell_padding_mm: f32,
    /// Fixed advance per visual line.
    pub line_height_mm: f32,
}

impl PageConfig {
    pub fn font_size_mm(&self) -> f32 {
        self.font_size_pt / PT_PER_MM
    }

    /// Usable text width in em units at the configured font size.
    ///
    /// A4, 10mm side margins, 1mm padding, 12pt → 188mm / 4.233mm ≈ 44.4em.
    pub fn text_width_em(&self) -> f32 {
        let width_mm = self.page_width_mm
            - self.margin_left_mm
            - self.margin_right_mm
            - 2.0 * self.cell_padding_mm;
        width_mm / self.font_size_mm()
    }

    /// Lowest y (from the top edge) a line's bottom may reach before the
    /// line is moved to a fresh page.
    pub fn page_break_trigger_mm(&self) -> f32 {
        self.page_height_mm - self.margin_bottom_mm
    }

    /// How many visual lines fit on one page.
    pub fn lines_per_page(&self) -> usize {
        let usable = self.page_break_trigger_mm() - self.margin_top_mm;
        (usable / self.line_height_mm).floor().max(1.0) as usize
    }
}

/// A4 portrait, 10mm margins, 15mm bottom break margin, 10mm lines,
/// Helvetica 12pt.
pub fn default_page_config() -> PageConfig {
    PageConfig {
        font: &HELVETICA,
        font_size_pt: 12.0,
        page_width_mm: 210.0,
        page_height_mm: 297.0,
        margin_left_mm: 10.0,
        margin_top_mm: 10.0,
        margin_right_mm: 10.0,
        margin_bottom_mm: 15.0,
        cell_padding_mm: 1.0,
        line_height_mm: 10.0,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Font metric table
// ────────────────────────────────────────────────────────────────────────────

/// Static character-width table for one of the PDF core fonts.
///
/// `widths[i]` = width of ASCII character `(i + 32)` in em, covering 0x20
/// (space) through 0x7E (~).
#[derive(Debug)]
pub struct FontMetricTable {
    /// PostScript name written into the PDF font dictionary.
    pub base_font: &'static str,
    widths: [f32; 95],
    /// Fallback width for characters outside the table.
    pub average_char_width: f32,
}

impl FontMetricTable {
    pub fn char_width(&self, c: char) -> f32 {
        let code = c as usize;
        if (32..=126).contains(&code) {
            return self.widths[code - 32];
        }
        match c {
            '\u{2022}' => 0.350,                         // •
            '\u{2013}' => 0.556,                         // –
            '\u{2014}' | '\u{2026}' | '\u{2030}' => 1.0, // — … ‰
            '\u{2018}' | '\u{2019}' | '\u{201A}' => 0.222,
            '\u{201C}' | '\u{201D}' | '\u{201E}' => 0.333,
            '\u{20AC}' => 0.556, // €
            '\u{2122}' => 1.0,   // ™
            '\u{00A0}' => 0.278, // nbsp
            _ => self.average_char_width,
        }
    }

    /// Rendered width of a string in em units.
    pub fn measure_str(&self, s: &str) -> f32 {
        s.chars().map(|c| self.char_width(c)).sum()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Static width tables
// ────────────────────────────────────────────────────────────────────────────

pub static HELVETICA: FontMetricTable = FontMetricTable {
    base_font: "Helvetica",
    #[rustfmt::skip]
    widths: [
        // sp     !      "      #      $      %      &      '      (      )      *      +      ,      -      .      /
        0.278, 0.278, 0.355, 0.556, 0.556, 0.889, 0.667, 0.191, 0.333, 0.333, 0.389, 0.584, 0.278, 0.333, 0.278, 0.278,
        // 0      1      2      3      4      5      6      7      8      9
        0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556,
        // :      ;      <      =      >      ?      @
        0.278, 0.278, 0.584, 0.584, 0.584, 0.556, 1.015,
        // A      B      C      D      E      F      G      H      I      J      K      L      M
        0.667, 0.667, 0.722, 0.722, 0.667, 0.611, 0.778, 0.722, 0.278, 0.500, 0.667, 0.556, 0.833,
        // N      O      P      Q      R      S      T      U      V      W      X      Y      Z
        0.722, 0.778, 0.667, 0.778, 0.722, 0.667, 0.611, 0.722, 0.667, 0.944, 0.667, 0.667, 0.611,
        // [      \      ]      ^      _      `
        0.278, 0.278, 0.278, 0.469, 0.556, 0.333,
        // a      b      c      d      e      f      g      h      i      j      k      l      m
        0.556, 0.556, 0.500, 0.556, 0.556, 0.278, 0.556, 0.556, 0.222, 0.222, 0.500, 0.222, 0.833,
        // n      o      p      q      r      s      t      u      v      w      x      y      z
        0.556, 0.556, 0.556, 0.556, 0.333, 0.500, 0.278, 0.556, 0.500, 0.722, 0.500, 0.500, 0.500,
        // {      |      }      ~
        0.334, 0.260, 0.334, 0.584,
    ],
    average_char_width: 0.556,
};

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
