use crate::extract::date::normalize_date;
use crate::extract::header::ColumnMapping;
use crate::extract::{DropReason, SkipObserver};
use crate::types::Record;

/// Convert the data rows of one table into records.
///
/// Rows strictly after `header_row_index` are considered. A row either
/// yields a complete record or is dropped whole: empty rows, rows too short
/// to cover the mapping, and rows with an empty name or unparsable date all
/// fall away without aborting the table.
pub fn extract_records(
    table: &[Vec<String>],
    mapping: &ColumnMapping,
    header_row_index: usize,
    table_index: usize,
    observer: &dyn SkipObserver,
) -> Vec<Record> {
    let mut records = Vec::new();
    for (row_index, row) in table.iter().enumerate().skip(header_row_index + 1) {
        if row.is_empty() {
            observer.row_dropped(table_index, row_index, DropReason::EmptyRow);
            continue;
        }
        if row.len() <= mapping.max_index() {
            observer.row_dropped(table_index, row_index, DropReason::ShortRow);
            continue;
        }
        let surname = row[mapping.surname].trim();
        let given_name = row[mapping.given_name].trim();
        let birth_date = normalize_date(row[mapping.birth_date].trim());
        match birth_date {
            Some(birth_date) if !surname.is_empty() && !given_name.is_empty() => {
                records.push(Record {
                    surname: surname.to_string(),
                    given_name: given_name.to_string(),
                    birth_date,
                });
            }
            _ => observer.row_dropped(table_index, row_index, DropReason::InvalidFields),
        }
    }
    records
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::NullObserver;

    fn table(rows: &[&[&str]]) -> Vec<Vec<String>> {
        rows.iter()
            .map(|r| r.iter().map(|c| c.to_string()).collect())
            .collect()
    }

    const MAPPING: ColumnMapping = ColumnMapping {
        surname: 0,
        given_name: 1,
        birth_date: 2,
    };

    #[test]
    fn test_valid_rows_become_records() {
        let table = table(&[
            &["NOM", "Prénom", "Date naissance"],
            &["ABERKANE", "Yassine", "10/02/1987"],
            &["  DUPONT ", " Marie", "05.09.1981"],
        ]);
        let records = extract_records(&table, &MAPPING, 0, 0, &NullObserver);
        assert_eq!(
            records,
            vec![
                Record {
                    surname: "ABERKANE".into(),
                    given_name: "Yassine".into(),
                    birth_date: "1987-02-10".into(),
                },
                Record {
                    surname: "DUPONT".into(),
                    given_name: "Marie".into(),
                    birth_date: "1981-09-05".into(),
                },
            ]
        );
    }

    #[test]
    fn test_rows_before_header_are_ignored() {
        let table = table(&[
            &["MARTIN", "Paul", "01/01/1990"],
            &["NOM", "Prénom", "Date naissance"],
            &["ABERKANE", "Yassine", "10/02/1987"],
        ]);
        let records = extract_records(&table, &MAPPING, 1, 0, &NullObserver);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].surname, "ABERKANE");
    }

    #[test]
    fn test_empty_and_short_rows_are_dropped() {
        let table = table(&[
            &["NOM", "Prénom", "Date naissance"],
            &[],
            &["ABERKANE", "Yassine"],
            &["ABERKANE", "Yassine", "10/02/1987"],
        ]);
        let records = extract_records(&table, &MAPPING, 0, 0, &NullObserver);
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn test_empty_fields_and_bad_dates_are_dropped() {
        let table = table(&[
            &["NOM", "Prénom", "Date naissance"],
            &["", "", ""],
            &["ABERKANE", "", "10/02/1987"],
            &["ABERKANE", "Yassine", "not-a-date"],
        ]);
        let records = extract_records(&table, &MAPPING, 0, 0, &NullObserver);
        assert!(records.is_empty());
    }
}
