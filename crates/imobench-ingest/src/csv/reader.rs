//! Streaming row reader.
//!
//! Reads one record at a time from an open file, so both the eager and the
//! lazy load paths hold at most the csv crate's buffer plus one row.

use std::fs::File;
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, StringRecord};
use imobench_model::Row;

use crate::error::{IngestError, Result};

use super::header::normalize_headers;

/// A parsed row plus the line it started on.
#[derive(Debug, Clone)]
pub(crate) struct SourceRow {
    pub line: u64,
    pub row: Row,
}

/// Forward-only reader yielding header-keyed rows.
///
/// The file handle lives as long as the reader and is closed on drop.
pub(crate) struct RowReader {
    path: PathBuf,
    reader: csv::Reader<File>,
    headers: Vec<String>,
    record: StringRecord,
}

impl RowReader {
    /// Opens `path` and reads its header line.
    ///
    /// Rows may have more or fewer cells than the header: missing cells are
    /// absent keys, surplus cells are dropped.
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|e| IngestError::not_found_or_read(path, e))?;
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(file);
        let headers = normalize_headers(reader.headers().map_err(|e| IngestError::CsvRead {
            path: path.to_path_buf(),
            source: e,
        })?);

        Ok(Self {
            path: path.to_path_buf(),
            reader,
            headers,
            record: StringRecord::new(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    fn current_row(&self) -> Row {
        self.headers
            .iter()
            .zip(self.record.iter())
            .map(|(header, value)| (header.clone(), value.to_string()))
            .collect()
    }
}

impl Iterator for RowReader {
    type Item = Result<SourceRow>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.reader.read_record(&mut self.record) {
            Ok(true) => {
                let line = self.record.position().map_or(0, csv::Position::line);
                Some(Ok(SourceRow {
                    line,
                    row: self.current_row(),
                }))
            }
            Ok(false) => None,
            Err(e) => Some(Err(IngestError::CsvRead {
                path: self.path.clone(),
                source: e,
            })),
        }
    }
}
