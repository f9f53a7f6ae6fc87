use crate::constants::{BIRTH_DATE_KEYWORDS, GIVEN_NAME_KEYWORDS, SURNAME_KEYWORDS};

/// The three semantic fields a roster table must expose.
/// Declared in resolution order: a header cell whose text matches several
/// keyword sets binds only the earliest unresolved field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RosterField {
    Surname,
    GivenName,
    BirthDate,
}

impl RosterField {
    pub const ALL: [RosterField; 3] = [
        RosterField::Surname,
        RosterField::GivenName,
        RosterField::BirthDate,
    ];
}

/// Keyword sets recognizing each field's header cell.
#[derive(Debug, Clone, Copy)]
pub struct KeywordTable {
    pub surname: &'static [&'static str],
    pub given_name: &'static [&'static str],
    pub birth_date: &'static [&'static str],
}

impl KeywordTable {
    fn keywords(&self, field: RosterField) -> &'static [&'static str] {
        match field {
            RosterField::Surname => self.surname,
            RosterField::GivenName => self.given_name,
            RosterField::BirthDate => self.birth_date,
        }
    }
}

/// Roster vocabulary as found in the source documents.
impl Default for KeywordTable {
    fn default() -> Self {
        KeywordTable {
            surname: SURNAME_KEYWORDS,
            given_name: GIVEN_NAME_KEYWORDS,
            birth_date: BIRTH_DATE_KEYWORDS,
        }
    }
}

/// Column indices for the three required fields within one table.
///
/// Derived once from the header row, then reused for every following data
/// row. All three fields are present by construction, and the indices are
/// distinct because a header cell binds at most one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnMapping {
    pub surname: usize,
    pub given_name: usize,
    pub birth_date: usize,
}

impl ColumnMapping {
    /// Highest column index a data row must cover.
    pub fn max_index(&self) -> usize {
        self.surname.max(self.given_name).max(self.birth_date)
    }
}

/// Decide whether `row` is a header row for all three fields.
///
/// Cells are scanned in order and lower-cased; the first cell containing a
/// keyword of a still-unresolved field binds that field to its index. First
/// occurrence wins per field, and each cell binds at most one field.
pub fn match_header_row(row: &[String], keywords: &KeywordTable) -> Option<ColumnMapping> {
    let mut bound: [Option<usize>; 3] = [None; 3];
    for (cell_index, cell) in row.iter().enumerate() {
        let lowered = cell.to_lowercase();
        for (slot, field) in RosterField::ALL.iter().enumerate() {
            if bound[slot].is_some() {
                continue;
            }
            if keywords.keywords(*field).iter().any(|kw| lowered.contains(kw)) {
                bound[slot] = Some(cell_index);
                break;
            }
        }
    }
    match bound {
        [Some(surname), Some(given_name), Some(birth_date)] => Some(ColumnMapping {
            surname,
            given_name,
            birth_date,
        }),
        _ => None,
    }
}

/// Locate the first header row in `table`, scanning from row 0 downward.
///
/// Roster documents often carry decorative or blank leading rows, so the
/// scan runs the full table depth. Returns the mapping plus the header row
/// index, or `None` when no row qualifies (empty tables included).
pub fn resolve_table(
    table: &[Vec<String>],
    keywords: &KeywordTable,
) -> Option<(ColumnMapping, usize)> {
    table
        .iter()
        .enumerate()
        .find_map(|(index, row)| match_header_row(row, keywords).map(|mapping| (mapping, index)))
}
