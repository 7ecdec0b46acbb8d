//! Raw CSV row reading.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use ::csv::{ReaderBuilder, Trim};

use crate::error::{IngestError, Result};

/// Columns of the exchange table: name, email, secretChildName, secretChildEmail.
pub const COLUMN_COUNT: usize = 4;

/// One non-blank CSV record, cut to the exchange columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRow {
    /// 1-based line number in the source file.
    pub line: u64,
    cells: [Option<String>; COLUMN_COUNT],
}

impl RawRow {
    pub fn from_cells(line: u64, cells: [Option<String>; COLUMN_COUNT]) -> Self {
        Self { line, cells }
    }

    /// Trimmed cell value; empty cells read as `None`.
    pub fn cell(&self, index: usize) -> Option<&str> {
        self.cells.get(index).and_then(Option::as_deref)
    }

    pub fn is_blank(&self) -> bool {
        self.cells.iter().all(Option::is_none)
    }
}

fn normalize_cell(raw: &str) -> Option<String> {
    let value = raw.trim().trim_matches('\u{feff}').trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Open a file, mapping a missing path to [`IngestError::FileNotFound`].
pub fn open_file(path: &Path) -> Result<File> {
    File::open(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IngestError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IngestError::FileRead {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })
}

/// 1-based line of the first non-blank byte at or after `offset`.
///
/// Record positions may point at blank lines the reader skipped, so the
/// line is counted from the raw input instead.
fn line_at(input: &[u8], offset: usize) -> u64 {
    let mut start = offset.min(input.len());
    while input.get(start).is_some_and(|byte| matches!(*byte, b'\n' | b'\r')) {
        start += 1;
    }
    let newlines = input[..start].iter().filter(|byte| **byte == b'\n').count();
    newlines as u64 + 1
}

/// Read every non-blank record from `reader`.
///
/// `path` is only used in error messages. Rows may have any number of
/// columns; extra columns are dropped and missing ones read as empty.
pub fn read_rows<R: Read>(mut reader: R, path: &Path) -> Result<Vec<RawRow>> {
    let mut input = Vec::new();
    reader
        .read_to_end(&mut input)
        .map_err(|source| IngestError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;

    let mut csv_reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(input.as_slice());

    let mut rows = Vec::new();
    for record in csv_reader.records() {
        let record = record.map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let offset = record
            .position()
            .map_or(0, |position| usize::try_from(position.byte()).unwrap_or(usize::MAX));
        let line = line_at(&input, offset);
        let cells = std::array::from_fn(|index| record.get(index).and_then(normalize_cell));
        let row = RawRow::from_cells(line, cells);
        if !row.is_blank() {
            rows.push(row);
        }
    }
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_cells_and_skips_blank_rows() {
        let input = "\u{feff}name , email\n Alice ,a@x\n,,,\n\nBob,b@x,extra,x@y,ignored\n";
        let rows = read_rows(input.as_bytes(), Path::new("roster.csv")).expect("read rows");
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].cell(0), Some("name"));
        assert_eq!(rows[1].cell(0), Some("Alice"));
        assert_eq!(rows[1].cell(2), None);
        assert_eq!(rows[1].line, 2);
        assert_eq!(rows[2].cell(3), Some("x@y"));
        assert_eq!(rows[2].line, 5);
    }

    #[test]
    fn line_numbers_count_skipped_blank_lines() {
        let rows = read_rows("h\n\nBob\n".as_bytes(), Path::new("roster.csv")).expect("read rows");
        let lines: Vec<u64> = rows.iter().map(|row| row.line).collect();
        assert_eq!(lines, vec![1, 3]);

        let rows = read_rows("h\r\n\r\n\r\nBob\r\nCara\r\n".as_bytes(), Path::new("roster.csv"))
            .expect("read rows");
        let lines: Vec<u64> = rows.iter().map(|row| row.line).collect();
        assert_eq!(lines, vec![1, 4, 5]);
    }

    #[test]
    fn missing_file() {
        let err = open_file(Path::new("/definitely/not/here.csv")).expect_err("missing");
        assert!(matches!(err, IngestError::FileNotFound { .. }));
    }
}
