// src/workflow.rs

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::RosterError;
use crate::extract::tables_to_records;
use crate::ingest::source_for_path;
use crate::output::write_records;

/// Convert one roster document into a CSV of validated records.
///
/// Validates both paths, picks the ingestion strategy from the input
/// extension, runs the extraction pipeline and writes the CSV. Single
/// attempt, fail fast: nothing here retries.
pub fn convert(input: &Path, output: &Path) -> Result<PathBuf, RosterError> {
    validate_output_path(output)?;
    ensure_parent_dir(output)?;

    let extraction = source_for_path(input).read_tables(input)?;
    info!(
        source = %extraction.source.display(),
        tables = extraction.tables.len(),
        "tables ingested"
    );

    let records = tables_to_records(&extraction.tables)?;
    info!(records = records.len(), "records extracted");

    write_records(output, &records)?;
    Ok(output.to_path_buf())
}

fn validate_output_path(output: &Path) -> Result<(), RosterError> {
    let is_csv = output
        .extension()
        .map_or(false, |ext| ext.eq_ignore_ascii_case("csv"));
    if !is_csv {
        return Err(RosterError::InvalidInput(format!(
            "output must have a .csv extension: {}",
            output.display()
        )));
    }
    if output.is_dir() {
        return Err(RosterError::InvalidInput(format!(
            "output path is a directory: {}",
            output.display()
        )));
    }
    Ok(())
}

fn ensure_parent_dir(output: &Path) -> Result<(), RosterError> {
    let Some(parent) = output.parent() else {
        return Ok(());
    };
    if parent.as_os_str().is_empty() {
        return Ok(());
    }
    if parent.exists() && !parent.is_dir() {
        return Err(RosterError::InvalidInput(format!(
            "output parent is not a directory: {}",
            parent.display()
        )));
    }
    fs::create_dir_all(parent).map_err(|err| RosterError::serialization(output, err))
}
