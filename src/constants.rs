// src/constants.rs

/// Accepted birth-date input formats, tried in order. Day-month-year forms
/// take precedence over ISO; two-digit years follow chrono's century pivot.
pub const DATE_FORMATS: &[&str] = &["%d/%m/%Y", "%d-%m-%Y", "%Y-%m-%d", "%d/%m/%y"];

/// Case-insensitive substrings that identify each field's header cell.
pub const SURNAME_KEYWORDS: &[&str] = &["nom"];
pub const GIVEN_NAME_KEYWORDS: &[&str] = &["prénom", "prenom"];
pub const BIRTH_DATE_KEYWORDS: &[&str] = &["naissance", "date de naissance", "date"];

/// Upper bound on cells kept per row by the ingestion layer.
pub const MAX_ROW_FIELDS: usize = 30;

/// Candidate cell separators for the text splitter, in precedence order.
/// Whitespace splitting is the fallback when none of these occurs.
pub const SEPARATOR_CANDIDATES: &[char] = &[';', ',', '\t', '|'];
