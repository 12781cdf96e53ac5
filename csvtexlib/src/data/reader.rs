//! Loading record sets from CSV text.
//!
//! The header row names the columns. Every following row must carry the same
//! number of fields as the header; the first row that doesn't aborts the load
//! with [`CsvtexError::MalformedInput`].

use std::io::ErrorKind;
use std::path::Path;

use csv::ReaderBuilder;
use log::debug;

use crate::data::records::{Record, RecordSet};
use crate::error::CsvtexError;
use crate::Result;

/// Parse CSV text into a record set.
pub fn parse_records(text: &str) -> Result<RecordSet> {
    parse_bytes(text.as_bytes())
}

/// Read and parse a CSV file.
///
/// A missing file maps to [`CsvtexError::NotFound`]; any other I/O failure
/// maps to [`CsvtexError::FileRead`].
pub fn read_records(path: impl AsRef<Path>) -> Result<RecordSet> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => CsvtexError::NotFound(path.to_path_buf()),
        _ => CsvtexError::FileRead {
            path: path.to_path_buf(),
            source,
        },
    })?;

    let records = parse_bytes(&bytes)?;
    debug!(
        "read {} rows x {} columns from {}",
        records.len(),
        records.column_count(),
        path.display()
    );
    Ok(records)
}

fn parse_bytes(bytes: &[u8]) -> Result<RecordSet> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(false)
        .from_reader(bytes);

    let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
    if headers.is_empty() {
        return Err(CsvtexError::MissingHeader);
    }

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row?;
        records.push(Record::new(row.iter()));
    }

    Ok(RecordSet::new(headers, records))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    const FUNCTIONS: &str = "function,priority,status\nfoo,1,done\nbar,2,pending\n";

    #[test]
    fn test_parse_preserves_header_order() {
        let set = parse_records(FUNCTIONS).unwrap();
        assert_eq!(set.headers, vec!["function", "priority", "status"]);
    }

    #[test]
    fn test_parse_preserves_row_order() {
        let set = parse_records(FUNCTIONS).unwrap();
        assert_eq!(set.len(), 2);
        assert_eq!(set.records[0], Record::new(["foo", "1", "done"]));
        assert_eq!(set.records[1], Record::new(["bar", "2", "pending"]));
    }

    #[test]
    fn test_parse_keeps_duplicates() {
        let set = parse_records("a,b\nx,1\nx,1\n").unwrap();
        assert_eq!(set.len(), 2);
        assert_eq!(set.records[0], set.records[1]);
    }

    #[test]
    fn test_parse_quoted_fields() {
        let set = parse_records("name,note\n\"a, b\",\"say \"\"hi\"\"\"\n").unwrap();
        assert_eq!(set.records[0].get(0), Some("a, b"));
        assert_eq!(set.records[0].get(1), Some("say \"hi\""));
    }

    #[test]
    fn test_parse_header_only() {
        let set = parse_records("function,priority,status\n").unwrap();
        assert_eq!(set.column_count(), 3);
        assert!(set.is_empty());
    }

    #[test]
    fn test_parse_empty_fields() {
        let set = parse_records("a,b,c\n1,,3\n").unwrap();
        assert_eq!(set.records[0], Record::new(["1", "", "3"]));
    }

    #[test]
    fn test_parse_short_row_is_malformed() {
        let err = parse_records("a,b,c\n1,2,3\n4,5\n").unwrap_err();
        match err {
            CsvtexError::MalformedInput {
                line,
                expected,
                found,
            } => {
                assert_eq!(line, 3);
                assert_eq!(expected, 3);
                assert_eq!(found, 2);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_parse_long_row_is_malformed() {
        let err = parse_records("a,b\n1,2,3\n").unwrap_err();
        assert!(matches!(err, CsvtexError::MalformedInput { .. }));
    }

    #[test]
    fn test_parse_empty_input() {
        let err = parse_records("").unwrap_err();
        assert!(matches!(err, CsvtexError::MissingHeader));
    }

    #[test]
    fn test_read_records_from_file() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("functions.csv");
        fs::write(&path, FUNCTIONS).unwrap();

        let set = read_records(&path).unwrap();
        assert_eq!(set.len(), 2);
        assert_eq!(set.column_count(), 3);
    }

    #[test]
    fn test_read_records_missing_file() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("nope.csv");

        let err = read_records(&path).unwrap_err();
        match err {
            CsvtexError::NotFound(p) => assert_eq!(p, path),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_read_records_invalid_utf8() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("bad.csv");
        fs::write(&path, b"a,b\n\xff\xfe,1\n").unwrap();

        let err = read_records(&path).unwrap_err();
        assert!(matches!(err, CsvtexError::Csv(_)));
    }
}
