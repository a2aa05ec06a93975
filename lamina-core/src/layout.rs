//! Per-line layout classification
//!
//! A lightweight pass over the raw text that tags each line with a layout
//! role. The result is informational: the engine logs the distribution and
//! the coverage guard consults it when choosing a fallback splitter.

use crate::classify;

/// Layout role of a single line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineClass {
    /// Heading-like line
    Title,
    /// Enumerated or bulleted line
    List,
    /// Page number, copyright, or similar furniture
    HeaderFooter,
    /// Body text
    Paragraph,
    /// Empty or whitespace-only line
    Blank,
}

/// Per-class line counts for a document
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LayoutSummary {
    /// Lines tagged [`LineClass::Title`]
    pub title_lines: usize,
    /// Lines tagged [`LineClass::List`]
    pub list_lines: usize,
    /// Lines tagged [`LineClass::HeaderFooter`]
    pub header_footer_lines: usize,
    /// Lines tagged [`LineClass::Paragraph`]
    pub paragraph_lines: usize,
    /// Blank lines
    pub blank_lines: usize,
}

impl LayoutSummary {
    /// Total number of lines seen
    pub fn total_lines(&self) -> usize {
        self.title_lines
            + self.list_lines
            + self.header_footer_lines
            + self.paragraph_lines
            + self.blank_lines
    }

    /// True when list items dominate the body text
    pub fn list_heavy(&self) -> bool {
        self.list_lines >= 2 && self.list_lines > self.paragraph_lines
    }
}

/// Tag a single line with its layout role
pub fn classify_line(line: &str) -> LineClass {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        LineClass::Blank
    } else if classify::starts_with_enumerator(trimmed) {
        LineClass::List
    } else if classify::is_footer_line(trimmed) {
        LineClass::HeaderFooter
    } else if classify::looks_like_title(trimmed) {
        LineClass::Title
    } else {
        LineClass::Paragraph
    }
}

/// Tag every line of the text and summarize the distribution
pub fn analyze(text: &str) -> LayoutSummary {
    let mut summary = LayoutSummary::default();
    for line in text.lines() {
        match classify_line(line) {
            LineClass::Title => summary.title_lines += 1,
            LineClass::List => summary.list_lines += 1,
            LineClass::HeaderFooter => summary.header_footer_lines += 1,
            LineClass::Paragraph => summary.paragraph_lines += 1,
            LineClass::Blank => summary.blank_lines += 1,
        }
    }
    summary
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_each_line_role() {
        assert_eq!(classify_line("Introduction"), LineClass::Title);
        assert_eq!(classify_line("1. first item"), LineClass::List);
        assert_eq!(classify_line("42"), LineClass::HeaderFooter);
        assert_eq!(
            classify_line("A full sentence that ends with a period."),
            LineClass::Paragraph
        );
        assert_eq!(classify_line("   "), LineClass::Blank);
    }

    #[test]
    fn summary_counts_all_lines() {
        let text = "Heading\n\n1. one\n2. two\nBody text that ends here.\n7";
        let summary = analyze(text);
        assert_eq!(summary.title_lines, 1);
        assert_eq!(summary.blank_lines, 1);
        assert_eq!(summary.list_lines, 2);
        assert_eq!(summary.paragraph_lines, 1);
        assert_eq!(summary.header_footer_lines, 1);
        assert_eq!(summary.total_lines(), 6);
    }

    #[test]
    fn list_heavy_requires_list_majority() {
        let list_doc = analyze("1. a\n2. b\n3. c\nOne closing sentence here.");
        assert!(list_doc.list_heavy());

        let prose_doc = analyze("First sentence of prose.\nSecond sentence of prose.\n1. a");
        assert!(!prose_doc.list_heavy());
    }
}
