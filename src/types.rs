// src/types.rs

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// One detected or inferred table: ordered rows of string cells.
/// No rectangularity guarantee; rows may be empty or ragged.
pub type Table = Vec<Vec<String>>;

/// One validated roster entry, ready for CSV serialization.
/// Field order here is the CSV column order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub surname: String,
    pub given_name: String,
    /// Canonical ISO 8601 calendar date, `YYYY-MM-DD`.
    pub birth_date: String,
}

/// Tables read from one source document, with provenance.
#[derive(Debug)]
pub struct Extraction {
    pub source: PathBuf,
    pub tables: Vec<Table>,
}
