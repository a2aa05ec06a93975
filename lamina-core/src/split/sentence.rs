//! Sentence-boundary splitting with greedy packing

use super::{char_len, pack_to_max};

/// Split text at sentence boundaries: terminal punctuation followed by
/// whitespace and an uppercase letter. Returns trimmed sentences.
pub fn sentence_boundaries(text: &str) -> Vec<String> {
    let chars: Vec<(usize, char)> = text.char_indices().collect();
    let mut sentences = Vec::new();
    let mut start = 0;
    let mut i = 0;

    while i < chars.len() {
        let (pos, ch) = chars[i];
        if matches!(ch, '.' | '!' | '?') {
            let mut j = i + 1;
            while j < chars.len() && chars[j].1.is_whitespace() {
                j += 1;
            }
            let followed_by_capital = j > i + 1 && j < chars.len() && chars[j].1.is_uppercase();
            if followed_by_capital {
                let end = pos + ch.len_utf8();
                let sentence = text[start..end].trim();
                if !sentence.is_empty() {
                    sentences.push(sentence.to_string());
                }
                start = chars[j].0;
                i = j;
                continue;
            }
        }
        i += 1;
    }

    let tail = text[start..].trim();
    if !tail.is_empty() {
        sentences.push(tail.to_string());
    }
    sentences
}

/// Split text into chunks of at most `max_len` characters by greedily
/// packing sentences. A single oversized sentence is split word by word,
/// never inside a word.
pub fn split_sentences(text: &str, max_len: usize) -> Vec<String> {
    let mut units = Vec::new();
    for sentence in sentence_boundaries(text) {
        if char_len(&sentence) > max_len {
            units.extend(split_words(&sentence, max_len));
        } else {
            units.push(sentence);
        }
    }
    pack_to_max(units, max_len)
}

/// Pack whitespace-delimited words into chunks of at most `max_len`
/// characters. A word longer than `max_len` is emitted whole.
pub(crate) fn split_words(text: &str, max_len: usize) -> Vec<String> {
    let words: Vec<String> = text.split_whitespace().map(str::to_string).collect();
    pack_to_max(words, max_len)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_terminator_whitespace_capital() {
        let sentences = sentence_boundaries("First sentence. Second one! Third?");
        assert_eq!(sentences, vec!["First sentence.", "Second one!", "Third?"]);
    }

    #[test]
    fn lowercase_continuation_is_not_a_boundary() {
        let sentences = sentence_boundaries("Version 2.1 shipped today. see notes");
        // "2.1" and ". see" both lack a following capital.
        assert_eq!(sentences, vec!["Version 2.1 shipped today. see notes"]);
    }

    #[test]
    fn terminator_requires_following_whitespace() {
        let sentences = sentence_boundaries("Read a.Book now");
        assert_eq!(sentences.len(), 1);
    }

    #[test]
    fn packs_sentences_up_to_max() {
        let text = "One two three. Four five six. Seven eight nine.";
        let chunks = split_sentences(text, 32);
        assert_eq!(chunks, vec!["One two three. Four five six.", "Seven eight nine."]);
    }

    #[test]
    fn oversized_sentence_splits_between_words() {
        let long = format!("{} end", "word ".repeat(40).trim());
        let chunks = split_sentences(&long, 30);
        assert!(chunks.len() >= 3);
        for chunk in &chunks {
            for word in chunk.split_whitespace() {
                assert!(word == "word" || word == "end");
            }
        }
    }

    #[test]
    fn giant_word_is_emitted_whole() {
        let giant = "x".repeat(50);
        let chunks = split_sentences(&giant, 10);
        assert_eq!(chunks, vec![giant]);
    }
}
