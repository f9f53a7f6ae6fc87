use std::fs;
use std::path::Path;

use tracing::debug;

use crate::constants::SEPARATOR_CANDIDATES;
use crate::error::RosterError;
use crate::ingest::{clean_row, TableSource};
use crate::types::{Extraction, Table};

/// Naive splitter for rosters saved as plain text.
///
/// Blank lines separate tables; each table's cell separator is the first
/// candidate found anywhere in its lines, with whitespace splitting as the
/// fallback. Free-text fields containing the chosen separator will missplit;
/// that imprecision is accepted here rather than compensated downstream.
pub struct DelimitedTextSource;

impl TableSource for DelimitedTextSource {
    fn read_tables(&self, path: &Path) -> Result<Extraction, RosterError> {
        if !path.is_file() {
            return Err(RosterError::InvalidInput(format!(
                "input file not found: {}",
                path.display()
            )));
        }
        let text = fs::read_to_string(path).map_err(|err| RosterError::ingestion(path, err))?;
        let tables = tables_from_text(&text);
        if tables.is_empty() {
            return Err(RosterError::InvalidInput(format!(
                "no tables detected in {}",
                path.display()
            )));
        }
        Ok(Extraction {
            source: path.to_path_buf(),
            tables,
        })
    }
}

/// Split raw document text into cell-grid tables.
pub(crate) fn tables_from_text(text: &str) -> Vec<Table> {
    let mut tables = Vec::new();
    let mut block: Vec<&str> = Vec::new();
    for line in text.lines() {
        if line.trim().is_empty() {
            flush_block(&mut block, &mut tables);
        } else {
            block.push(line);
        }
    }
    flush_block(&mut block, &mut tables);
    tables
}

fn flush_block(block: &mut Vec<&str>, tables: &mut Vec<Table>) {
    if block.is_empty() {
        return;
    }
    let separator = guess_separator(block);
    debug!(rows = block.len(), ?separator, "table block split");
    let rows = block.iter().map(|line| split_line(line, separator)).collect();
    tables.push(rows);
    block.clear();
}

/// First candidate occurring anywhere in the block wins; `None` means
/// whitespace splitting.
fn guess_separator(lines: &[&str]) -> Option<char> {
    SEPARATOR_CANDIDATES
        .iter()
        .copied()
        .find(|sep| lines.iter().any(|line| line.contains(*sep)))
}

fn split_line(line: &str, separator: Option<char>) -> Vec<String> {
    match separator {
        Some(sep) => clean_row(line.split(sep)),
        None => clean_row(line.split_whitespace()),
    }
}
