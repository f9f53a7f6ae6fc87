// src/output/mod.rs

use std::path::Path;

use tracing::info;

use crate::error::RosterError;
use crate::types::Record;

/// Write `records` to `path` as CSV.
///
/// The header line is `surname,given_name,birth_date` (the `Record` field
/// order), followed by one line per record. Quoting is the csv crate's
/// standard behavior; the file is created or overwritten.
pub fn write_records(path: &Path, records: &[Record]) -> Result<(), RosterError> {
    let mut writer =
        csv::Writer::from_path(path).map_err(|err| RosterError::serialization(path, err))?;
    for record in records {
        writer
            .serialize(record)
            .map_err(|err| RosterError::serialization(path, err))?;
    }
    writer
        .flush()
        .map_err(|err| RosterError::serialization(path, err))?;
    info!(records = records.len(), path = %path.display(), "csv written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn sample_records() -> Vec<Record> {
        vec![
            Record {
                surname: "ABERKANE".into(),
                given_name: "Yassine".into(),
                birth_date: "1987-02-10".into(),
            },
            Record {
                surname: "DE LA FONTAINE, JEAN".into(),
                given_name: "Marie".into(),
                birth_date: "1981-09-05".into(),
            },
        ]
    }

    #[test]
    fn test_header_and_row_layout() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("out.csv");
        write_records(&path, &sample_records())?;

        let contents = fs::read_to_string(&path)?;
        let mut lines = contents.lines();
        assert_eq!(lines.next(), Some("surname,given_name,birth_date"));
        assert_eq!(lines.next(), Some("ABERKANE,Yassine,1987-02-10"));
        // Embedded comma gets quoted by the csv layer.
        assert_eq!(
            lines.next(),
            Some("\"DE LA FONTAINE, JEAN\",Marie,1981-09-05")
        );
        Ok(())
    }

    #[test]
    fn test_round_trip_preserves_records() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("out.csv");
        let records = sample_records();
        write_records(&path, &records)?;

        let mut reader = csv::Reader::from_path(&path)?;
        let read_back: Vec<Record> = reader.deserialize().collect::<Result<_, _>>()?;
        assert_eq!(read_back, records);
        Ok(())
    }

    #[test]
    fn test_unwritable_destination_is_a_serialization_failure() {
        let err = write_records(Path::new("/nonexistent/dir/out.csv"), &sample_records())
            .unwrap_err();
        assert!(matches!(err, RosterError::Serialization { .. }));
    }
}
