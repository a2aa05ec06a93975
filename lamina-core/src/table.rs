//! Table detection, normalization, and HTML rendering
//!
//! Works on plain text only: a line is a candidate row when a tab, pipe,
//! or run of two-plus spaces splits it into at least two non-empty cells.
//! No visual structure analysis is available, so confidence is a fixed
//! constant and geometry defaults to the unit box.

use crate::types::{BoundingBox, PageEstimator, Table};
use regex::Regex;
use smallvec::SmallVec;
use std::sync::OnceLock;

/// Fixed confidence for text-detected tables
pub const TABLE_CONFIDENCE: f64 = 0.6;

/// Minimum contiguous candidate rows that form a table
const MIN_TABLE_ROWS: usize = 2;

type CellRow = SmallVec<[String; 6]>;

fn multi_space_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r" {2,}").unwrap())
}

/// Parse a line into cells using the first applicable separator:
/// tab, pipe, then multi-space.
fn parse_cells(line: &str) -> CellRow {
    let trimmed = line.trim();
    let raw: Vec<&str> = if trimmed.contains('\t') {
        trimmed.split('\t').collect()
    } else if trimmed.contains('|') {
        trimmed.split('|').collect()
    } else {
        multi_space_pattern().split(trimmed).collect()
    };
    raw.into_iter()
        .map(str::trim)
        .filter(|cell| !cell.is_empty())
        .map(str::to_string)
        .collect()
}

fn is_candidate_row(line: &str) -> bool {
    parse_cells(line).len() >= 2
}

/// Scan the text for tables.
///
/// Contiguous runs of at least two candidate rows become one table each;
/// a non-candidate line closes the current run, and a trailing run at
/// end-of-text is flushed.
pub fn extract_tables(text: &str, pages: &PageEstimator) -> Vec<Table> {
    let mut tables = Vec::new();
    let mut run: Vec<CellRow> = Vec::new();
    let mut run_offset = 0;
    let mut offset = 0;

    for line in text.lines() {
        let line_chars = line.chars().count();
        if is_candidate_row(line) {
            if run.is_empty() {
                run_offset = offset;
            }
            run.push(parse_cells(line));
        } else if !run.is_empty() {
            close_run(&mut run, run_offset, pages, &mut tables);
        }
        offset += line_chars + 1;
    }
    close_run(&mut run, run_offset, pages, &mut tables);
    tables
}

fn close_run(
    run: &mut Vec<CellRow>,
    run_offset: usize,
    pages: &PageEstimator,
    tables: &mut Vec<Table>,
) {
    if run.len() >= MIN_TABLE_ROWS {
        tables.push(build_table(run, tables.len(), run_offset, pages));
    }
    run.clear();
}

fn build_table(
    rows: &[CellRow],
    index: usize,
    char_offset: usize,
    pages: &PageEstimator,
) -> Table {
    let columns = rows.iter().map(|row| row.len()).max().unwrap_or(0);
    let content: Vec<Vec<String>> = rows
        .iter()
        .map(|row| {
            let mut cells: Vec<String> = row.iter().cloned().collect();
            cells.resize(columns, String::new());
            cells
        })
        .collect();

    Table {
        id: Table::deterministic_id(index, &content),
        page_number: pages.page_at(char_offset),
        bounding_box: BoundingBox::unit(),
        rows: content.len(),
        columns,
        html_content: render_html(&content),
        content,
        confidence: TABLE_CONFIDENCE,
    }
}

/// Render the normalized matrix as an HTML table, first row as header
fn render_html(content: &[Vec<String>]) -> String {
    let mut html = String::from("<table>");
    let mut rows = content.iter();

    if let Some(header) = rows.next() {
        html.push_str("<thead><tr>");
        for cell in header {
            html.push_str("<th>");
            html.push_str(&escape_html(cell));
            html.push_str("</th>");
        }
        html.push_str("</tr></thead>");
    }

    html.push_str("<tbody>");
    for row in rows {
        html.push_str("<tr>");
        for cell in row {
            html.push_str("<td>");
            html.push_str(&escape_html(cell));
            html.push_str("</td>");
        }
        html.push_str("</tr>");
    }
    html.push_str("</tbody></table>");
    html
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
