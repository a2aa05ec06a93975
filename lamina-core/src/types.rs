//! Output data types shared across the engine

use serde::{Deserialize, Serialize};

/// Classified role of a segment within the source document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SegmentKind {
    /// Short heading-like text
    Title,
    /// Running body text
    Paragraph,
    /// Enumerated or bulleted item run
    List,
    /// Page number, copyright line, or similar page furniture
    Footer,
    /// Repeated page-top furniture (layout-aware sources only)
    Header,
    /// Unclassified text
    Text,
}

impl SegmentKind {
    /// Lowercase wire name, matching the serialized form
    pub fn as_str(&self) -> &'static str {
        match self {
            SegmentKind::Title => "title",
            SegmentKind::Paragraph => "paragraph",
            SegmentKind::List => "list",
            SegmentKind::Footer => "footer",
            SegmentKind::Header => "header",
            SegmentKind::Text => "text",
        }
    }
}

impl std::fmt::Display for SegmentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Axis-aligned rectangle in page coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    /// Left edge
    pub x0: f64,
    /// Top edge
    pub y0: f64,
    /// Right edge
    pub x1: f64,
    /// Bottom edge
    pub y1: f64,
    /// Width (`x1 - x0`)
    pub width: f64,
    /// Height (`y1 - y0`)
    pub height: f64,
}

impl BoundingBox {
    /// Unit box used when no geometry is known
    pub fn unit() -> Self {
        Self {
            x0: 0.0,
            y0: 0.0,
            x1: 1.0,
            y1: 1.0,
            width: 1.0,
            height: 1.0,
        }
    }
}

/// One classified, scored unit of document text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Segment {
    /// Deterministic identifier (see [`Segment::deterministic_id`])
    pub id: String,
    /// Segment text, possibly grown by overlap injection
    pub content: String,
    /// Classified content type
    #[serde(rename = "type")]
    pub kind: SegmentKind,
    /// 0-based ordinal, unique and strictly increasing per document
    pub position: usize,
    /// Estimated 1-based page number
    pub page_number: u32,
    /// Geometry, only when a layout-aware source provides coordinates
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bounding_box: Option<BoundingBox>,
    /// Heuristic well-formedness score in `[0, 1]`
    pub confidence: f64,
    /// Up to eight lowercase tokens, most frequent first
    pub keywords: Vec<String>,
    /// Whitespace-delimited token count of `content`
    pub word_count: usize,
    /// Estimated token count (`ceil(word_count * 0.75)`)
    pub token_count: usize,
}

impl Segment {
    /// Build a stable identifier from the segment position and content.
    ///
    /// Identical `(position, content)` pairs always yield identical ids, so
    /// repeated runs over the same input are byte-identical.
    pub fn deterministic_id(position: usize, content: &str) -> String {
        format!(
            "segment-{position}-{:08x}",
            fnv1a64(content.as_bytes()) as u32
        )
    }
}

/// A detected table, normalized to a rectangular cell matrix
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Table {
    /// Deterministic identifier
    pub id: String,
    /// Estimated 1-based page number
    pub page_number: u32,
    /// Geometry; a unit box when none is known
    pub bounding_box: BoundingBox,
    /// Row count (`content.len()`)
    pub rows: usize,
    /// Column count; every row has exactly this many cells
    pub columns: usize,
    /// Rectangular matrix of cell strings, ragged rows right-padded
    pub content: Vec<Vec<String>>,
    /// `<table>` rendering with the first row as header
    pub html_content: String,
    /// Heuristic constant when no vision system is used
    pub confidence: f64,
}

impl Table {
    /// Build a stable identifier from the table index and its cells
    pub fn deterministic_id(index: usize, cells: &[Vec<String>]) -> String {
        let mut hash = FNV_OFFSET;
        for row in cells {
            for cell in row {
                hash = fnv1a64_step(hash, cell.as_bytes());
                hash = fnv1a64_step(hash, b"\x1f");
            }
            hash = fnv1a64_step(hash, b"\x1e");
        }
        format!("table-{index}-{:08x}", hash as u32)
    }
}

/// Maps character offsets to 1-based page numbers.
///
/// The source only reports a total page count, so pages are estimated by
/// dividing the text into equal character spans.
#[derive(Debug, Clone, Copy)]
pub struct PageEstimator {
    chars_per_page: usize,
    total_pages: u32,
}

impl PageEstimator {
    /// Create an estimator for a document of `total_chars` characters
    pub fn new(total_chars: usize, total_pages: u32) -> Self {
        let total_pages = total_pages.max(1);
        Self {
            chars_per_page: (total_chars / total_pages as usize).max(1),
            total_pages,
        }
    }

    /// Page containing the given character offset
    pub fn page_at(&self, char_offset: usize) -> u32 {
        let page = (char_offset / self.chars_per_page) as u32 + 1;
        page.min(self.total_pages)
    }
}

/// Whitespace-delimited token count
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Token estimate from a word count (`ceil(words * 0.75)`)
pub fn token_estimate(words: usize) -> usize {
    (words * 3).div_ceil(4)
}

const FNV_OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

fn fnv1a64_step(mut hash: u64, bytes: &[u8]) -> u64 {
    for &b in bytes {
        hash ^= u64::from(b);
        hash = hash.wrapping_mul(FNV_PRIME);
    }
    hash
}

fn fnv1a64(bytes: &[u8]) -> u64 {
    fnv1a64_step(FNV_OFFSET, bytes)
}
