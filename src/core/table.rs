//! CSV output for flat records.
//!
//! `csv::Writer` only emits a header when it serializes the first record,
//! so an empty collection would produce an empty file. Headers are written
//! explicitly instead, which keeps zero-row output a valid table.

use serde::Serialize;
use std::{fs, path::Path};

use crate::Result;

/// A flat record that can be written as one CSV row.
pub trait CsvRecord: Serialize {
    /// Column names, in the same order as the serialized fields.
    const HEADERS: &'static [&'static str];
}

/// Write `records` to `path`, replacing whatever was there.
///
/// `None` fields become empty cells. There is no index column.
pub fn write_records<R: CsvRecord>(path: &Path, records: &[R]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)?;

    writer.write_record(R::HEADERS)?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use tempfile::TempDir;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Row {
        name: String,
        rank: Option<u32>,
        pct: Option<f64>,
    }

    impl CsvRecord for Row {
        const HEADERS: &'static [&'static str] = &["name", "rank", "pct"];
    }

    #[test]
    fn test_empty_collection_writes_header_only() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("empty.csv");

        write_records::<Row>(&path, &[]).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "name,rank,pct\n");
    }

    #[test]
    fn test_none_fields_become_empty_cells() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("rows.csv");
        let rows = vec![
            Row {
                name: "KC".to_string(),
                rank: Some(2),
                pct: None,
            },
            Row {
                name: "BUF".to_string(),
                rank: None,
                pct: Some(0.625),
            },
        ];

        write_records(&path, &rows).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "name,rank,pct\nKC,2,\nBUF,,0.625\n");
    }

    #[test]
    fn test_write_replaces_existing_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("rows.csv");
        fs::write(&path, "stale contents that are much longer than the new table\n").unwrap();

        write_records::<Row>(&path, &[]).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "name,rank,pct\n");
    }

    #[test]
    fn test_write_creates_missing_parent() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nested").join("rows.csv");

        write_records::<Row>(&path, &[]).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_round_trip_preserves_values() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("rows.csv");
        let rows = vec![
            Row {
                name: "DET".to_string(),
                rank: Some(1),
                pct: Some(71.4),
            },
            Row {
                name: "CAR".to_string(),
                rank: None,
                pct: None,
            },
        ];

        write_records(&path, &rows).unwrap();

        let mut reader = csv::Reader::from_path(&path).unwrap();
        let headers: Vec<String> = reader
            .headers()
            .unwrap()
            .iter()
            .map(str::to_string)
            .collect();
        assert_eq!(headers, Row::HEADERS);

        let back: Vec<Row> = reader.deserialize().collect::<std::result::Result<_, _>>().unwrap();
        assert_eq!(back, rows);
    }
}
