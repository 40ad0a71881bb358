//! Row loading for ranging log files
//!
//! Reads the whole file into memory as CSV records. The header locators need
//! random access and lookahead, so rows are fully materialized rather than
//! streamed. Rows with no non-whitespace field are dropped here, and every row
//! index used later refers to this filtered sequence.

use csv::StringRecord;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::debug;

use crate::{Error, Result};

/// Load all non-blank rows of a CSV file
pub fn load_rows(path: &Path) -> Result<Vec<StringRecord>> {
    let file = File::open(path).map_err(|e| Error::file_access(path, e))?;

    let rows = read_rows(BufReader::new(file)).map_err(|e| Error::csv_read(path, e))?;
    debug!("Loaded {} non-blank rows from {}", rows.len(), path.display());

    Ok(rows)
}

/// Read all non-blank rows from any reader
///
/// Records may have differing field counts. Fields are returned untrimmed.
pub fn read_rows<R: Read>(reader: R) -> std::result::Result<Vec<StringRecord>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut rows = Vec::new();
    for result in csv_reader.records() {
        let record = result?;
        if is_blank_row(&record) {
            continue;
        }
        rows.push(record);
    }

    Ok(rows)
}

/// Whether every field of a row is empty or whitespace
pub fn is_blank_row(record: &StringRecord) -> bool {
    record.iter().all(|field| field.trim().is_empty())
}
