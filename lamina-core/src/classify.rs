//! Content-type classification and confidence scoring
//!
//! The heuristics here mirror what a layout-aware extractor reports for
//! born-digital documents: short unterminated lines are titles, enumerator
//! prefixes mark lists, and page furniture matches a small set of patterns.

use crate::types::SegmentKind;
use regex::Regex;
use std::sync::OnceLock;

/// Maximum character length for title candidates
const TITLE_MAX_CHARS: usize = 150;
/// Maximum character length for footer candidates
const FOOTER_MAX_CHARS: usize = 100;

fn enumerator_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(\d+\.|[-*\u{2022}\u{25AA}\u{25E6}]|\([A-Za-z0-9]+\))\s+").unwrap())
}

fn page_number_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)^(page\s+\d+(\s+of\s+\d+)?|\d+\s*/\s*\d+)\.?$").unwrap())
}

fn copyright_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)(\u{00A9}|\(c\)\s*\d{4}|copyright)").unwrap())
}

/// True when the line starts with a list enumerator (digit+period, bullet
/// glyph, or parenthesized letter/number) followed by whitespace
pub fn starts_with_enumerator(line: &str) -> bool {
    enumerator_pattern().is_match(line)
}

/// True when the line looks like page furniture: short and purely numeric,
/// or matching a page-number/copyright pattern
pub fn is_footer_line(line: &str) -> bool {
    if line.chars().count() >= FOOTER_MAX_CHARS {
        return false;
    }
    if !line.is_empty() && line.chars().all(|c| c.is_ascii_digit()) {
        return true;
    }
    page_number_pattern().is_match(line) || copyright_pattern().is_match(line)
}

/// True when the line looks like a heading: short, starting with an
/// uppercase letter or digit, not ending with a period, and not an
/// enumerated item
pub fn looks_like_title(line: &str) -> bool {
    if line.chars().count() >= TITLE_MAX_CHARS || line.ends_with('.') {
        return false;
    }
    if starts_with_enumerator(line) {
        return false;
    }
    line.chars()
        .next()
        .map(|c| c.is_uppercase() || c.is_ascii_digit())
        .unwrap_or(false)
}

/// Number of sentence terminators (`.`, `!`, `?`) in the text
pub fn terminator_count(text: &str) -> usize {
    text.chars().filter(|c| matches!(c, '.' | '!' | '?')).count()
}

/// Classify a chunk of text into a [`SegmentKind`].
///
/// Priority: title, list, footer, then paragraph.
pub fn classify(content: &str) -> SegmentKind {
    let trimmed = content.trim();
    if looks_like_title(trimmed) {
        SegmentKind::Title
    } else if starts_with_enumerator(trimmed) {
        SegmentKind::List
    } else if is_footer_line(trimmed) {
        SegmentKind::Footer
    } else {
        SegmentKind::Paragraph
    }
}

/// Heuristic well-formedness score in `[0, 1]`.
///
/// Starts at 0.5, rewards mid-range lengths, then adds a kind-specific
/// bonus, capped at 1.0.
pub fn confidence(content: &str, kind: SegmentKind) -> f64 {
    let trimmed = content.trim();
    let len = trimmed.chars().count();

    let mut score: f64 = 0.5;
    if (50..=2000).contains(&len) {
        score += 0.2;
    }
    match kind {
        SegmentKind::Title => {
            let starts_upper = trimmed
                .chars()
                .next()
                .map(char::is_uppercase)
                .unwrap_or(false);
            if len < 100 && starts_upper {
                score += 0.2;
            }
        }
        SegmentKind::Paragraph => {
            if terminator_count(trimmed) > 2 {
                score += 0.2;
            }
        }
        SegmentKind::List => {
            if starts_with_enumerator(trimmed) {
                score += 0.3;
            }
        }
        _ => {}
    }
    score.min(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_unterminated_lines_are_titles() {
        assert_eq!(classify("Chapter One"), SegmentKind::Title);
        assert_eq!(classify("2024 Annual Report"), SegmentKind::Title);
    }

    #[test]
    fn trailing_period_excludes_title() {
        assert_eq!(classify("This is a sentence."), SegmentKind::Paragraph);
    }

    #[test]
    fn enumerators_win_over_titles() {
        assert_eq!(classify("1. First item of the agenda"), SegmentKind::List);
        assert_eq!(classify("- bulleted entry"), SegmentKind::List);
        assert_eq!(classify("(a) lettered clause"), SegmentKind::List);
        assert_eq!(classify("\u{2022} glyph bullet"), SegmentKind::List);
    }

    #[test]
    fn page_furniture_is_footer() {
        assert_eq!(classify("page 3 of 12."), SegmentKind::Footer);
        assert_eq!(classify("\u{00A9} 2024 Acme Corp."), SegmentKind::Footer);
        // A bare number is short and unterminated, so the title rule wins;
        // the line-level layout pass tags it header/footer instead.
        assert!(is_footer_line("42"));
    }

    #[test]
    fn long_text_is_paragraph() {
        let text = "a".repeat(200);
        assert_eq!(classify(&text), SegmentKind::Paragraph);
    }

    #[test]
    fn confidence_rewards_mid_range_lengths() {
        let short = confidence("hi there everyone", SegmentKind::Paragraph);
        let mid = confidence(&"word ".repeat(20), SegmentKind::Paragraph);
        assert!(mid > short);
    }

    #[test]
    fn confidence_paragraph_bonus_needs_three_terminators() {
        let two = "One sentence here. Another one follows.";
        let three = "One here. Another here. A third one too.";
        assert!(
            confidence(three, SegmentKind::Paragraph) > confidence(two, SegmentKind::Paragraph)
        );
    }

    #[test]
    fn confidence_is_capped_at_one() {
        let list = format!("1. {}", "item ".repeat(20));
        let score = confidence(&list, SegmentKind::List);
        assert!(score <= 1.0);
        assert_eq!(score, 1.0);
    }

    #[test]
    fn confidence_stays_in_range() {
        for content in ["", "x", "Title Line", "1. item text that goes on"] {
            let kind = classify(content);
            let score = confidence(content, kind);
            assert!((0.0..=1.0).contains(&score), "{content:?} -> {score}");
        }
    }
}
