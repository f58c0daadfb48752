//! WinAnsi (Windows-1252) text encoding for the PDF core fonts.
//!
//! Latin-1 printable characters map to themselves; 0x80..=0x9F carry the
//! Windows-1252 typographic extras (curly quotes, dashes, bullet, euro...).
//! Anything else has no glyph in a core font and cannot be rendered.

/// Windows-1252 assignments for 0x80..=0x9F. Unassigned slots are absent.
const CP1252_EXTRAS: &[(char, u8)] = &[
    ('\u{20AC}', 0x80),
    ('\u{201A}', 0x82),
    ('\u{0192}', 0x83),
    ('\u{201E}', 0x84),
    ('\u{2026}', 0x85),
    ('\u{2020}', 0x86),
    ('\u{2021}', 0x87),
    ('\u{02C6}', 0x88),
    ('\u{2030}', 0x89),
    ('\u{0160}', 0x8A),
    ('\u{2039}', 0x8B),
    ('\u{0152}', 0x8C),
    ('\u{017D}', 0x8E),
    ('\u{2018}', 0x91),
    ('\u{2019}', 0x92),
    ('\u{201C}', 0x93),
    ('\u{201D}', 0x94),
    ('\u{2022}', 0x95),
    ('\u{2013}', 0x96),
    ('\u{2014}', 0x97),
    ('\u{02DC}', 0x98),
    ('\u{2122}', 0x99),
    ('\u{0161}', 0x9A),
    ('\u{203A}', 0x9B),
    ('\u{0153}', 0x9C),
    ('\u{017E}', 0x9E),
    ('\u{0178}', 0x9F),
];

/// Single-byte WinAnsi code for `c`, if it has one.
///
/// Tab is accepted (the layout draws it as a space); other control
/// characters are not.
pub fn win_ansi_byte(c: char) -> Option<u8> {
    match c as u32 {
        0x09 | 0x20..=0x7E | 0xA0..=0xFF => Some(c as u32 as u8),
        _ => CP1252_EXTRAS
            .iter()
            .find(|(ch, _)| *ch == c)
            .map(|(_, byte)| *byte),
    }
}

/// Encodes `text`, or returns the first character that has no WinAnsi code
/// together with its char index.
pub fn encode_win_ansi(text: &str) -> Result<Vec<u8>, (usize, char)> {
    text.chars()
        .enumerate()
        .map(|(idx, c)| win_ansi_byte(c).ok_or((idx, c)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_maps_to_itself() {
        assert_eq!(encode_win_ansi("Jane Doe, 42").unwrap(), b"Jane Doe, 42".to_vec());
    }

    #[test]
    fn test_latin1_maps_to_itself() {
        assert_eq!(encode_win_ansi("café").unwrap(), vec![b'c', b'a', b'f', 0xE9]);
        assert_eq!(win_ansi_byte('ÿ'), Some(0xFF));
    }

    #[test]
    fn test_typographic_extras() {
        assert_eq!(win_ansi_byte('—'), Some(0x97));
        assert_eq!(win_ansi_byte('•'), Some(0x95));
        assert_eq!(win_ansi_byte('€'), Some(0x80));
        assert_eq!(win_ansi_byte('\u{2019}'), Some(0x92));
    }

    #[test]
    fn test_unrepresentable_characters_rejected() {
        assert_eq!(encode_win_ansi("ok ❌ no"), Err((3, '❌')));
        assert_eq!(win_ansi_byte('日'), None);
        assert_eq!(win_ansi_byte('\u{1F680}'), None);
        // C1 controls are not text
        assert_eq!(win_ansi_byte('\u{0081}'), None);
        assert_eq!(win_ansi_byte('\u{0007}'), None);
    }

    #[test]
    fn test_tab_is_accepted() {
        assert_eq!(win_ansi_byte('\t'), Some(0x09));
    }
}
