//! End-to-end tests for the document chunker

use lamina_engine::{
    DocumentChunker, EmbeddingConfig, ExtractedDocument, SegmentKind, SegmentationOptions,
    SegmentationStrategy, TextSplitterKind,
};

fn chunker(options: SegmentationOptions) -> DocumentChunker {
    DocumentChunker::with_options(options)
}

#[test]
fn two_paragraphs_become_two_segments() {
    let p1 = "The first paragraph talks about document chunking engines and how they \
              slice raw text into retrievable units.";
    let p2 = "The second paragraph covers confidence scoring and keyword extraction \
              for every produced text segment.";
    let options = SegmentationOptions {
        max_segment_length: 500,
        min_segment_length: 10,
        overlap_ratio: 0.0,
        ..Default::default()
    };
    let result = chunker(options).process_text(&format!("{p1}\n\n{p2}"));

    assert!(result.success);
    assert_eq!(result.segments.len(), 2);
    for segment in &result.segments {
        assert_eq!(segment.kind, SegmentKind::Paragraph);
    }
    assert_eq!(result.segments[0].content, p1.split_whitespace().collect::<Vec<_>>().join(" "));
    assert!(!result.segments[1].content.contains("chunking engines"));
}

#[test]
fn short_list_yields_one_list_segment() {
    let result = DocumentChunker::new().process_text("1. First\n2. Second\n3. Third");

    assert!(result.success);
    assert_eq!(result.segments.len(), 1);
    let segment = &result.segments[0];
    assert_eq!(segment.kind, SegmentKind::List);
    for word in ["first", "second", "third"] {
        assert!(segment.keywords.contains(&word.to_string()), "{word}");
    }
}

#[test]
fn unbroken_block_still_produces_coverage() {
    let text = "lorem ipsum dolor sit amet consectetur ".repeat(77);
    assert!(text.len() > 3000);
    let options = SegmentationOptions {
        max_segment_length: 500,
        min_segment_length: 10,
        overlap_ratio: 0.0,
        ..Default::default()
    };
    let result = chunker(options).process_text(&text);

    assert!(result.success);
    assert!(result.segments.len() >= 3);
    let vocabulary = ["lorem", "ipsum", "dolor", "sit", "amet", "consectetur"];
    for segment in &result.segments {
        for word in segment.content.split_whitespace() {
            assert!(vocabulary.contains(&word), "split inside a word: {word:?}");
        }
    }
}

#[test]
fn tab_rows_are_extracted_as_a_table() {
    let result = DocumentChunker::new().process_text("A\tB\tC\nD\tE\tF\n");

    assert!(result.success);
    assert_eq!(result.tables.len(), 1);
    let table = &result.tables[0];
    assert_eq!(table.rows, 2);
    assert_eq!(table.columns, 3);
    assert!(table.html_content.contains("<th>A</th>"));
    assert!(table.html_content.contains("<td>D</td>"));
}

#[test]
fn table_extraction_can_be_disabled() {
    let options = SegmentationOptions {
        enable_table_extraction: false,
        ..Default::default()
    };
    let result = chunker(options).process_text("A\tB\tC\nD\tE\tF\n");
    assert!(result.success);
    assert!(result.tables.is_empty());
}

#[test]
fn embedding_config_drives_segmentation() {
    let text = "Chunk budgets come from the embedding model when one is configured. \
                The engine derives its own limits from the chunk size. "
        .repeat(20);
    let options = SegmentationOptions {
        confidence_threshold: 0.0,
        embedding: Some(EmbeddingConfig {
            text_splitter: TextSplitterKind::RecursiveCharacter,
            chunk_size: 800,
            chunk_overlap: 80,
            ..Default::default()
        }),
        ..Default::default()
    };
    let result = chunker(options).process_text(&text);

    assert!(result.success);
    assert!(result.segments.len() >= 2);
    for segment in &result.segments {
        // 800 from the chunk size, plus the injected 10% overlap and its
        // joining space; the overlap compounds, converging below 900.
        assert!(segment.content.chars().count() <= 900, "{}", segment.content.len());
    }
}

#[test]
fn embedding_path_applies_the_confidence_gate() {
    let strong = "Scores rise with punctuation. Multiple sentences add confidence. \
                  Three terminators earn the paragraph bonus. Indeed.";
    let weak = "a plain run of lowercase words without any terminal punctuation at all \
                stretched out long enough to survive the minimum length gate";
    let text = format!("{strong}\n\n{weak}");

    let options = SegmentationOptions {
        confidence_threshold: 0.8,
        embedding: Some(EmbeddingConfig {
            text_splitter: TextSplitterKind::RecursiveCharacter,
            chunk_size: 150,
            chunk_overlap: 0,
            ..Default::default()
        }),
        ..Default::default()
    };
    let result = chunker(options).process_text(&text);

    assert!(result.success);
    assert_eq!(result.segments.len(), 1);
    assert!(result.segments[0].content.starts_with("Scores rise"));
    // Positions stay contiguous after the gate drops a segment.
    assert_eq!(result.segments[0].position, 0);
}

#[test]
fn confidence_gate_can_drop_every_segment() {
    let text = "plain lowercase words with no terminal punctuation anywhere in this run\n\n\
                another flat stretch of words that never earns a confidence bonus at all";

    let options = SegmentationOptions {
        confidence_threshold: 0.95,
        embedding: Some(EmbeddingConfig {
            text_splitter: TextSplitterKind::RecursiveCharacter,
            chunk_size: 200,
            chunk_overlap: 0,
            ..Default::default()
        }),
        ..Default::default()
    };
    let result = chunker(options).process_text(text);

    assert!(result.success);
    assert!(result.segments.is_empty());
    assert_eq!(result.metadata.total_words, 0);
}

#[test]
fn gate_also_covers_the_short_document_fallback() {
    // Short enough that the minimum-length filter empties the drafts; the
    // single fallback segment must still face the confidence gate.
    let options = SegmentationOptions {
        confidence_threshold: 0.95,
        embedding: Some(EmbeddingConfig {
            text_splitter: TextSplitterKind::RecursiveCharacter,
            chunk_size: 600,
            chunk_overlap: 0,
            ..Default::default()
        }),
        ..Default::default()
    };
    let result = chunker(options).process_text("short lowercase note");

    assert!(result.success);
    assert!(result.segments.is_empty());
}

#[test]
fn positions_are_contiguous_and_increasing() {
    let text = "One paragraph about splitting.\n\nAnother paragraph about scoring.\n\n\
                A third paragraph about tables.\n\nA fourth paragraph about overlap."
        .repeat(3);
    let options = SegmentationOptions {
        max_segment_length: 200,
        min_segment_length: 10,
        ..Default::default()
    };
    let result = chunker(options).process_text(&text);

    assert!(result.success);
    for (index, segment) in result.segments.iter().enumerate() {
        assert_eq!(segment.position, index);
        assert!(segment.page_number >= 1);
        assert!((0.0..=1.0).contains(&segment.confidence));
    }
}

#[test]
fn identical_inputs_give_identical_outputs() {
    let text = "Determinism matters for caching. The same text must give the same \
                segments. Ids are content hashes, not timestamps.\n\nSecond paragraph \
                to make the document multi-segment for the comparison.";
    let options = SegmentationOptions {
        max_segment_length: 120,
        min_segment_length: 10,
        ..Default::default()
    };
    let first = chunker(options.clone()).process_text(text);
    let second = chunker(options).process_text(text);

    assert_eq!(first.segments, second.segments);
    assert_eq!(first.tables, second.tables);
}

#[test]
fn overlap_injects_trailing_context() {
    let p1 = "Alpha paragraph ends with the words carried over boundary.";
    let p2 = "Beta paragraph begins after the injected context window.";
    let options = SegmentationOptions {
        max_segment_length: 500,
        min_segment_length: 10,
        overlap_ratio: 0.2,
        ..Default::default()
    };
    let result = chunker(options).process_text(&format!("{p1}\n\n{p2}"));

    assert_eq!(result.segments.len(), 2);
    assert!(result.segments[1].content.ends_with(p2));
    assert!(result.segments[1].content.chars().count() > p2.chars().count());
    assert!(result.segments[1].content.contains("boundary."));
}

#[test]
fn invalid_options_fail_without_processing() {
    let options = SegmentationOptions {
        max_segment_length: 100,
        min_segment_length: 200,
        ..Default::default()
    };
    let result = chunker(options).process_text("Some perfectly fine text.");

    assert!(!result.success);
    assert!(result.segments.is_empty());
    assert!(result.tables.is_empty());
    let errors = result.errors.expect("errors must be reported");
    assert!(errors[0].contains("minSegmentLength"));
}

#[test]
fn empty_text_is_an_extraction_failure() {
    let doc = ExtractedDocument::new("   \n\t  ", 4, 1234);
    let result = DocumentChunker::new().process(&doc);

    assert!(!result.success);
    assert!(result.segments.is_empty());
    assert_eq!(result.metadata.total_pages, 0);
    assert_eq!(result.metadata.total_words, 0);
    assert_eq!(result.metadata.file_size, 1234);
    let errors = result.errors.expect("errors must be reported");
    assert!(errors[0].contains("empty"));
}

#[test]
fn metadata_totals_match_segment_sums() {
    let text = "The totals in the metadata must equal the sums over segments. \
                This holds after overlap injection as well.\n\n\
                Another paragraph keeps the document from collapsing to one segment.";
    let options = SegmentationOptions {
        max_segment_length: 120,
        min_segment_length: 10,
        ..Default::default()
    };
    let result = chunker(options).process_text(text);

    let words: usize = result.segments.iter().map(|s| s.word_count).sum();
    let tokens: usize = result.segments.iter().map(|s| s.token_count).sum();
    assert_eq!(result.metadata.total_words, words);
    assert_eq!(result.metadata.total_tokens, tokens);
    assert_eq!(result.metadata.language, Some("en".to_string()));
    assert_eq!(result.content, text);
}

#[test]
fn builder_rejects_bad_configurations() {
    let err = DocumentChunker::builder()
        .max_segment_length(10)
        .min_segment_length(50)
        .build()
        .unwrap_err();
    assert!(err.to_string().contains("minSegmentLength"));

    let chunker = DocumentChunker::builder()
        .strategy(SegmentationStrategy::Sentence)
        .max_segment_length(300)
        .min_segment_length(20)
        .overlap_ratio(0.1)
        .build()
        .unwrap();
    assert_eq!(chunker.options().max_segment_length, 300);
}

#[test]
fn serialized_output_uses_contract_key_names() {
    let result = DocumentChunker::new().process_text(
        "A serialization check paragraph with a table below to cover both shapes.\n\n\
         k1\tk2\nv1\tv2\n",
    );
    let json = serde_json::to_value(&result).unwrap();

    assert_eq!(json["success"], true);
    assert!(json["segments"][0]["pageNumber"].is_number());
    assert!(json["segments"][0]["type"].is_string());
    assert!(json["segments"][0]["wordCount"].is_number());
    assert!(json["metadata"]["totalPages"].is_number());
    assert!(json["metadata"]["processingTimeMs"].is_number());
    assert_eq!(json["metadata"]["extractionMethod"], "hybrid");
    assert!(json["tables"][0]["htmlContent"].is_string());
    assert!(json.get("errors").is_none());
}

#[test]
fn character_strategy_produces_sliding_windows() {
    let text = "abcdefghij".repeat(30);
    let options = SegmentationOptions {
        strategy: SegmentationStrategy::Character,
        max_segment_length: 100,
        min_segment_length: 10,
        overlap_ratio: 0.0,
        ..Default::default()
    };
    let result = chunker(options).process_text(&text);

    assert!(result.success);
    assert_eq!(result.segments.len(), 3);
    for segment in &result.segments {
        assert_eq!(segment.content.chars().count(), 100);
    }
}
