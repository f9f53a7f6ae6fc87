// src/extract/mod.rs
//
// Table-to-record extraction: locate a header row per table, map the three
// required columns, normalize dates, aggregate validated records.

use tracing::{debug, info};

use crate::error::RosterError;
use crate::types::{Record, Table};

pub mod date;
pub mod header;
pub mod rows;

pub use date::normalize_date;
pub use header::{match_header_row, resolve_table, ColumnMapping, KeywordTable, RosterField};
pub use rows::extract_records;

/// Why a data row was dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropReason {
    /// Zero cells.
    EmptyRow,
    /// Too few cells to cover the mapping's highest column index.
    ShortRow,
    /// Empty surname or given name, or a date no format accepted.
    InvalidFields,
}

/// Receives skip and drop notifications from the pipeline.
///
/// Side-effect-only: the extraction logic never changes behavior based on
/// the observer, so the pure paths stay testable without log capture.
pub trait SkipObserver {
    /// A table yielded no recognizable header row and was skipped whole.
    fn table_skipped(&self, _table_index: usize) {}
    /// A data row failed validation and was dropped.
    fn row_dropped(&self, _table_index: usize, _row_index: usize, _reason: DropReason) {}
}

/// Discards all notifications.
pub struct NullObserver;

impl SkipObserver for NullObserver {}

/// Routes skip and drop events to `tracing`.
pub struct TracingObserver;

impl SkipObserver for TracingObserver {
    fn table_skipped(&self, table_index: usize) {
        info!(table_index, "table skipped: no header row found");
    }

    fn row_dropped(&self, table_index: usize, row_index: usize, reason: DropReason) {
        debug!(table_index, row_index, ?reason, "row dropped");
    }
}

/// Run the full pipeline over the ingested tables.
///
/// Each table is processed independently: a table without a header row is
/// skipped and never aborts the others. Output order is table order, then
/// row order. An empty aggregate is the one hard failure here, because a
/// zero-record CSV is never useful to the caller.
pub fn tables_to_records(tables: &[Table]) -> Result<Vec<Record>, RosterError> {
    tables_to_records_with(tables, &KeywordTable::default(), &TracingObserver)
}

/// [`tables_to_records`] with an explicit vocabulary and observer.
pub fn tables_to_records_with(
    tables: &[Table],
    keywords: &KeywordTable,
    observer: &dyn SkipObserver,
) -> Result<Vec<Record>, RosterError> {
    let mut records = Vec::new();
    for (table_index, table) in tables.iter().enumerate() {
        let Some((mapping, header_row_index)) = resolve_table(table, keywords) else {
            observer.table_skipped(table_index);
            continue;
        };
        records.extend(extract_records(
            table,
            &mapping,
            header_row_index,
            table_index,
            observer,
        ));
    }
    if records.is_empty() {
        return Err(RosterError::NoRecords);
    }
    Ok(records)
}
