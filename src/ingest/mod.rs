// src/ingest/mod.rs
//
// Turns a source document into cell-grid tables. Two strategies exist and
// the extraction core never learns which one supplied its input.

use std::path::Path;

use crate::constants::MAX_ROW_FIELDS;
use crate::error::RosterError;
use crate::types::Extraction;

pub mod pdf;
pub mod text;

pub use pdf::PdfSource;
pub use text::DelimitedTextSource;

/// Produces cell-grid tables from one source document.
pub trait TableSource {
    fn read_tables(&self, path: &Path) -> Result<Extraction, RosterError>;
}

/// Pick an ingestion strategy from the input extension: `.pdf` gets the PDF
/// text extractor, everything else the delimited-text splitter.
pub fn source_for_path(path: &Path) -> Box<dyn TableSource> {
    if is_pdf_path(path) {
        Box::new(PdfSource)
    } else {
        Box::new(DelimitedTextSource)
    }
}

pub(crate) fn is_pdf_path(path: &Path) -> bool {
    path.extension()
        .map_or(false, |ext| ext.eq_ignore_ascii_case("pdf"))
}

/// Trim each cell and cap row width at [`MAX_ROW_FIELDS`].
pub(crate) fn clean_row<'a, I>(cells: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    cells
        .into_iter()
        .take(MAX_ROW_FIELDS)
        .map(|cell| cell.trim().to_string())
        .collect()
}
