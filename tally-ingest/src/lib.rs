//! tally-ingest: turn pasted statement text (CSV exports, freeform SMS lines)
//! into typed entries.
//!
//! The pipeline never fails. Rows that cannot be classified are dropped and
//! an empty result means nothing importable was found.

pub mod amount;
pub mod date;
pub mod header;
pub mod parsers;
pub mod tokenizer;
pub mod types;

use chrono::{Local, NaiveDate};
use tally_core::{ParsedEntry, Taxonomy};
use tracing::{debug, info};

pub use types::ImportContext;

/// Parse statement text, using the local date for rows with no usable date.
pub fn parse_statement_text(text: &str, taxonomy: &Taxonomy) -> Vec<ParsedEntry> {
    parse_statement_text_on(text, taxonomy, Local::now().date_naive())
}

/// Parse statement text with an explicit fallback date.
pub fn parse_statement_text_on(text: &str, taxonomy: &Taxonomy, today: NaiveDate) -> Vec<ParsedEntry> {
    parse_with_context(text, &ImportContext::new(taxonomy, today))
}

pub fn parse_with_context(text: &str, ctx: &ImportContext<'_>) -> Vec<ParsedEntry> {
    let delimiter = tokenizer::sniff_delimiter(text);
    let rows = tokenizer::tokenize_with(text, delimiter);
    debug!(?delimiter, rows = rows.len(), "tokenized statement text");
    if rows.is_empty() {
        return Vec::new();
    }

    let entries = match header::find_header_row(&rows) {
        Some(idx) => {
            debug!(header_row = idx, "structured import");
            parsers::structured::parse_structured(&rows[idx], &rows[idx + 1..], ctx)
        }
        None => {
            debug!("no header row found, generic import");
            parsers::generic::parse_generic(&rows, ctx)
        }
    };

    info!(
        rows = rows.len(),
        entries = entries.len(),
        "parsed statement text"
    );
    entries
}
