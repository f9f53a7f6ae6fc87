use std::path::Path;

use tracing::{debug, info};

use crate::error::RosterError;
use crate::ingest::{is_pdf_path, text::tables_from_text, TableSource};
use crate::types::Extraction;

/// Reads a roster PDF by flattening each page to text and re-splitting the
/// lines into tables.
///
/// Layout-aware table detection is out of scope: typed rosters come out of
/// `pdf_extract` one line per row, which the shared splitter handles. Each
/// page break in the extracted text shows up as a blank line, so per-page
/// tables stay independent.
pub struct PdfSource;

impl TableSource for PdfSource {
    fn read_tables(&self, path: &Path) -> Result<Extraction, RosterError> {
        validate_pdf_path(path)?;
        let text =
            pdf_extract::extract_text(path).map_err(|err| RosterError::ingestion(path, err))?;
        debug!(chars = text.len(), "pdf text extracted");
        let tables = tables_from_text(&text);
        if tables.is_empty() {
            return Err(RosterError::InvalidInput(format!(
                "no tables detected in {}",
                path.display()
            )));
        }
        info!(tables = tables.len(), "pdf tables detected");
        Ok(Extraction {
            source: path.to_path_buf(),
            tables,
        })
    }
}

fn validate_pdf_path(path: &Path) -> Result<(), RosterError> {
    if !is_pdf_path(path) {
        return Err(RosterError::InvalidInput(format!(
            "expected a .pdf input, got {}",
            path.display()
        )));
    }
    if !path.is_file() {
        return Err(RosterError::InvalidInput(format!(
            "input file not found: {}",
            path.display()
        )));
    }
    Ok(())
}
