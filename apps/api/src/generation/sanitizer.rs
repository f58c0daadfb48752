//! Response sanitizer: strips chatty lead-ins and sign-offs from model output.
//!
//! The rules are data, not control flow: a leading opener phrase (matched
//! case-insensitively, removes the whole first line) and an ordered list of
//! trailer phrases (matched case-sensitively, cut the text at their first
//! occurrence). Both are tuned to one model's habits, so they live in
//! `SanitizeRules` where they can be swapped or extended.

/// Heuristics applied by [`sanitize_with`].
#[derive(Debug, Clone, Copy)]
pub struct SanitizeRules {
    /// Lowercase, ASCII. A text starting with it loses its first line.
    pub opener: &'static str,
    /// Checked in order; each one truncates the text before its first occurrence.
    pub trailers: &'static [&'static str],
}

pub const DEFAULT_TRAILERS: &[&str] = &[
    "I hope this helps",
    "Let me know if you need anything else",
    "Note:",
    "This resume was generated",
    "Hope this helps",
    "Best regards",
];

pub const DEFAULT_RULES: SanitizeRules = SanitizeRules {
    opener: "here is a professional",
    trailers: DEFAULT_TRAILERS,
};

/// Cleans raw model output with [`DEFAULT_RULES`].
pub fn sanitize(text: &str) -> String {
    sanitize_with(text, &DEFAULT_RULES)
}

/// Cleans raw model output.
///
/// 1. trim surrounding whitespace;
/// 2. while the text starts with `rules.opener` (ASCII case-insensitive), drop
///    its first line; a single-line text becomes empty;
/// 3. for each trailer in order, keep only what precedes its first
///    occurrence, then trim.
///
/// Markdown markers and blank lines inside the kept text are untouched.
/// Re-running on the output is a no-op.
pub fn sanitize_with(text: &str, rules: &SanitizeRules) -> String {
    let mut content = text.trim();

    while starts_with_ignore_ascii_case(content, rules.opener) {
        content = match content.split_once('\n') {
            Some((_, rest)) => rest.trim(),
            None => "",
        };
    }

    for phrase in rules.trailers {
        if let Some(idx) = content.find(phrase) {
            content = content[..idx].trim();
        }
    }

    content.to_string()
}

fn starts_with_ignore_ascii_case(text: &str, prefix: &str) -> bool {
    !prefix.is_empty()
        && text
            .get(..prefix.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drops_boilerplate_first_line() {
        let raw = "Here is a professional resume.\nJohn Doe\n...";
        assert_eq!(sanitize(raw), "John Doe\n...");
    }

    #[test]
    fn test_opener_match_is_case_insensitive() {
        let raw = "HERE IS A PROFESSIONAL cover letter for you:\n\nDear Hiring Manager,";
        assert_eq!(sanitize(raw), "Dear Hiring Manager,");
    }

    #[test]
    fn test_opener_only_matches_at_start() {
        let raw = "John Doe\nHere is a professional summary of my work.";
        assert_eq!(sanitize(raw), raw);
    }

    #[test]
    fn test_single_line_opener_becomes_empty() {
        assert_eq!(sanitize("Here is a professional resume for Jane."), "");
        assert_eq!(sanitize("  here is a professional  "), "");
    }

    #[test]
    fn test_truncates_before_trailer_and_trims() {
        assert_eq!(sanitize("Some text. Best regards, Team"), "Some text.");
    }

    #[test]
    fn test_trailers_apply_in_sequence() {
        let raw = "# Jane Doe\n\n## Skills\n- SQL\n\nNote: tailor this.\nI hope this helps!";
        assert_eq!(sanitize(raw), "# Jane Doe\n\n## Skills\n- SQL");
    }

    #[test]
    fn test_trailer_match_is_case_sensitive() {
        let raw = "Body of the letter.\nbest regards,\nJane";
        assert_eq!(sanitize(raw), raw);
    }

    #[test]
    fn test_cuts_at_first_occurrence_only() {
        let raw = "Intro Note: first\nmiddle Note: second";
        assert_eq!(sanitize(raw), "Intro");
    }

    #[test]
    fn test_trailer_at_start_empties_text() {
        assert_eq!(sanitize("Note: nothing useful here"), "");
    }

    #[test]
    fn test_preserves_internal_markdown() {
        let raw = "# Jane Doe\n\n**Email:** jane@example.com\n\n\n- item one\n  - nested";
        assert_eq!(sanitize(raw), raw);
    }

    #[test]
    fn test_non_ascii_prefix_does_not_panic() {
        let raw = "Ünïcödé header — with a dash\nbody";
        assert_eq!(sanitize(raw), raw);
    }

    #[test]
    fn test_custom_rules() {
        let rules = SanitizeRules {
            opener: "sure!",
            trailers: &["Cheers"],
        };
        assert_eq!(
            sanitize_with("Sure! Here you go:\nThe body.\nCheers, bot", &rules),
            "The body."
        );
    }

    #[test]
    fn test_sanitize_is_idempotent() {
        let samples = [
            "",
            "   ",
            "Plain text with nothing to strip",
            "Here is a professional resume.\nJohn Doe\n...",
            "Here is a professional resume:\n\n\n# John Doe\n",
            "Here is a professional resume:\nHere is a professional cover letter:\nBody",
            "Here is a professional resume.",
            "Some text. Best regards, Team",
            "Body\n\nLet me know if you need anything else!\n\nBest regards",
            "  Note: leading note\nbody",
            "Text Hope this helps I hope this helps",
            "HERE IS A PROFESSIONAL\n  \n\tDear team,\nThis resume was generated by a bot.",
        ];
        for sample in samples {
            let once = sanitize(sample);
            assert_eq!(sanitize(&once), once, "not idempotent for {sample:?}");
        }
    }
}
