//! Keyword extraction with a fixed stop-word list

/// Maximum number of keywords reported per segment
pub const MAX_KEYWORDS: usize = 8;

/// Words shorter than this are never keywords
const MIN_WORD_CHARS: usize = 3;
/// Words longer than this are never keywords
const MAX_WORD_CHARS: usize = 19;

// Kept sorted for binary search.
const STOP_WORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "all", "also", "an", "and", "any", "are", "as", "at",
    "be", "because", "been", "before", "being", "between", "both", "but", "by", "can", "could",
    "did", "do", "does", "down", "during", "each", "few", "for", "from", "further", "had", "has",
    "have", "having", "he", "her", "here", "hers", "him", "his", "how", "i", "if", "in", "into",
    "is", "it", "its", "just", "more", "most", "my", "no", "nor", "not", "now", "of", "off", "on",
    "once", "only", "or", "other", "our", "out", "over", "own", "same", "she", "should", "so",
    "some", "such", "than", "that", "the", "their", "them", "then", "there", "these", "they",
    "this", "those", "through", "to", "too", "under", "until", "up", "very", "was", "we", "were",
    "what", "when", "where", "which", "while", "who", "whom", "why", "will", "with", "would",
    "you", "your",
];

fn is_stop_word(word: &str) -> bool {
    STOP_WORDS.binary_search(&word).is_ok()
}

/// Extract up to [`MAX_KEYWORDS`] keywords from a segment.
///
/// Tokens are lowercase alphabetic words; stop words and words outside the
/// 3..=19 character range are dropped. Keywords are ordered by descending
/// frequency, ties broken by first occurrence.
pub fn extract(content: &str) -> Vec<String> {
    // First-occurrence order, so the stable sort below breaks ties by it.
    let mut counts: Vec<(String, usize)> = Vec::new();

    for raw in content.split(|c: char| !c.is_alphabetic()) {
        if raw.is_empty() {
            continue;
        }
        let word = raw.to_lowercase();
        let chars = word.chars().count();
        if !(MIN_WORD_CHARS..=MAX_WORD_CHARS).contains(&chars) || is_stop_word(&word) {
            continue;
        }
        match counts.iter_mut().find(|(seen, _)| *seen == word) {
            Some((_, count)) => *count += 1,
            None => counts.push((word, 1)),
        }
    }

    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts.truncate(MAX_KEYWORDS);
    counts.into_iter().map(|(word, _)| word).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stop_word_table_is_sorted() {
        for pair in STOP_WORDS.windows(2) {
            assert!(pair[0] < pair[1], "{:?} out of order", pair);
        }
    }

    #[test]
    fn most_frequent_words_come_first() {
        let keywords = extract("engine engine engine chunk chunk segment");
        assert_eq!(keywords, vec!["engine", "chunk", "segment"]);
    }

    #[test]
    fn ties_break_by_first_occurrence() {
        let keywords = extract("zebra apple zebra apple mango");
        assert_eq!(keywords, vec!["zebra", "apple", "mango"]);
    }

    #[test]
    fn stop_words_and_short_words_are_dropped() {
        let keywords = extract("the quick ox and its very own pen");
        assert_eq!(keywords, vec!["quick", "pen"]);
    }

    #[test]
    fn words_are_lowercased_and_split_on_non_alphabetic() {
        let keywords = extract("Coverage-Guard coverage GUARD, coverage!");
        assert_eq!(keywords, vec!["coverage", "guard"]);
    }

    #[test]
    fn at_most_eight_keywords() {
        let text = "alpha bravo charlie delta echo foxtrot golf hotel india juliett";
        assert_eq!(extract(text).len(), MAX_KEYWORDS);
    }

    #[test]
    fn overlong_words_are_dropped() {
        let keywords = extract("pneumonoultramicroscopicsilicovolcanoconiosis dust");
        assert_eq!(keywords, vec!["dust"]);
    }

    #[test]
    fn empty_and_numeric_content_yield_nothing() {
        assert!(extract("").is_empty());
        assert!(extract("123 456 --- 789").is_empty());
    }
}
