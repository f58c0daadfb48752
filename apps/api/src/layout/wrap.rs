//! Line wrapping and pagination.
//!
//! Each source line becomes one left-aligned block: greedy word-wrap at the
//! usable width, breaking at the last space seen (the space itself is
//! dropped) or, for a single word wider than the line, between characters.
//! Visual lines advance by a fixed height; a line that would reach into the
//! bottom margin moves to a new page.

use crate::layout::font_metrics::{FontMetricTable, PageConfig};

/// One visual line at its final position.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedLine {
    pub text: String,
    /// Distance from the top page edge to the top of the line box, in mm.
    pub top_mm: f32,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageLayout {
    pub lines: Vec<PlacedLine>,
}

/// Wraps one source line (no `\n`) into visual lines.
///
/// An empty line yields a single empty visual line so blank lines keep
/// their vertical space.
pub fn wrap_line(line: &str, metrics: &FontMetricTable, config: &PageConfig) -> Vec<String> {
    let max_width = config.text_width_em();
    let chars: Vec<char> = line.chars().collect();

    let mut out = Vec::new();
    let mut start = 0;
    let mut i = 0;
    let mut last_space: Option<usize> = None;
    let mut width = 0.0_f32;

    while i < chars.len() {
        let c = chars[i];
        if c == ' ' {
            last_space = Some(i);
        }
        width += metrics.char_width(c);

        if width > max_width {
            match last_space {
                Some(sep) => {
                    out.push(chars[start..sep].iter().collect());
                    i = sep + 1;
                }
                None => {
                    // always make progress, even if one glyph is wider than the line
                    if i == start {
                        i += 1;
                    }
                    out.push(chars[start..i].iter().collect());
                }
            }
            last_space = None;
            start = i;
            width = 0.0;
        } else {
            i += 1;
        }
    }
    out.push(chars[start..i].iter().collect());
    out
}

/// Lays a whole document out onto pages.
///
/// The text is trimmed, split on `\n` (a trailing `\r` is dropped), tabs are
/// drawn as spaces. Always returns at least one page.
pub fn paginate(text: &str, metrics: &FontMetricTable, config: &PageConfig) -> Vec<PageLayout> {
    let trigger = config.page_break_trigger_mm();
    let mut pages = Vec::new();
    let mut current = PageLayout::default();
    let mut y = config.margin_top_mm;

    for source_line in text.trim().split('\n') {
        let source_line = source_line.strip_suffix('\r').unwrap_or(source_line);
        let source_line = source_line.replace('\t', " ");

        for visual in wrap_line(&source_line, metrics, config) {
            if y + config.line_height_mm > trigger && !current.lines.is_empty() {
                pages.push(std::mem::take(&mut current));
                y = config.margin_top_mm;
            }
            current.lines.push(PlacedLine {
                text: visual,
                top_mm: y,
            });
            y += config.line_height_mm;
        }
    }

    pages.push(current);
    pages
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::font_metrics::{default_page_config, HELVETICA};

    fn wrap(line: &str) -> Vec<String> {
        wrap_line(line, &HELVETICA, &default_page_config())
    }

    #[test]
    fn test_short_line_is_single_visual_line() {
        assert_eq!(wrap("Jane Doe"), vec!["Jane Doe"]);
    }

    #[test]
    fn test_empty_line_keeps_its_space() {
        assert_eq!(wrap(""), vec![""]);
    }

    #[test]
    fn test_long_line_wraps_at_spaces() {
        let line = "Built automated reporting pipelines in Python and SQL that replaced manual \
                    spreadsheet work for the finance team and cut monthly close time";
        let lines = wrap(line);
        assert!(lines.len() >= 2, "expected a wrap, got {lines:?}");
        // no words lost or split, spaces at break points dropped
        assert_eq!(lines.join(" "), line);
        for l in &lines {
            assert!(!l.starts_with(' '));
        }
    }

    #[test]
    fn test_wrapped_lines_fit_width() {
        let config = default_page_config();
        let line = "word ".repeat(60);
        for l in wrap_line(line.trim_end(), &HELVETICA, &config) {
            assert!(HELVETICA.measure_str(&l) <= config.text_width_em());
        }
    }

    #[test]
    fn test_overlong_word_breaks_between_characters() {
        let config = default_page_config();
        let word = "x".repeat(200);
        let lines = wrap_line(&word, &HELVETICA, &config);
        assert!(lines.len() > 1);
        assert_eq!(lines.concat(), word);
        for l in &lines {
            assert!(HELVETICA.measure_str(l) <= config.text_width_em());
        }
    }

    #[test]
    fn test_paginate_empty_text_has_one_page() {
        let pages = paginate("", &HELVETICA, &default_page_config());
        assert_eq!(pages.len(), 1);
        assert_eq!(pages[0].lines.len(), 1);
        assert_eq!(pages[0].lines[0].text, "");
    }

    #[test]
    fn test_paginate_places_lines_at_fixed_height() {
        let pages = paginate("a\nb\n\nc", &HELVETICA, &default_page_config());
        let tops: Vec<f32> = pages[0].lines.iter().map(|l| l.top_mm).collect();
        assert_eq!(tops, vec![10.0, 20.0, 30.0, 40.0]);
        assert_eq!(pages[0].lines[2].text, "");
    }

    #[test]
    fn test_paginate_breaks_after_27_lines() {
        let text: Vec<String> = (1..=60).map(|n| format!("line {n}")).collect();
        let pages = paginate(&text.join("\n"), &HELVETICA, &default_page_config());
        let counts: Vec<usize> = pages.iter().map(|p| p.lines.len()).collect();
        assert_eq!(counts, vec![27, 27, 6]);
        assert_eq!(pages[1].lines[0].text, "line 28");
        assert_eq!(pages[1].lines[0].top_mm, 10.0);
    }

    #[test]
    fn test_paginate_trims_and_handles_crlf_and_tabs() {
        let pages = paginate("\n\n  first\r\n\tsecond\r\n\n", &HELVETICA, &default_page_config());
        let texts: Vec<&str> = pages[0].lines.iter().map(|l| l.text.as_str()).collect();
        assert_eq!(texts, vec!["first", " second"]);
    }
}
