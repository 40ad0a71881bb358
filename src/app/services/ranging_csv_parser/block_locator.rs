//! Header row location within bounded search windows
//!
//! Neither header block sits at a fixed line. Each locator scans a limited
//! number of rows from a start cursor and takes the first row whose normalized
//! field set contains every required column name. The positions block seeds the
//! cursor for the data block search.

use csv::StringRecord;
use tracing::debug;

use super::column_mapping::ColumnMapping;
use crate::constants::{data_columns, position_columns};
use crate::{FormatError, Result};

/// A located header row and its column mapping
#[derive(Debug, Clone)]
pub struct HeaderBlock {
    /// Index of the header row in the filtered row sequence
    pub row_index: usize,

    pub mapping: ColumnMapping,
}

/// The positions header and the index of its value row
#[derive(Debug, Clone)]
pub struct PositionsBlock {
    pub header: HeaderBlock,
    pub value_row: usize,
}

/// Find the first row in `start..start + window` containing all `required` names
///
/// The window is clipped to the number of rows. Returns `None` when no row in
/// the window qualifies.
pub fn find_header_row(
    rows: &[StringRecord],
    start: usize,
    window: usize,
    required: &[&str],
) -> Option<HeaderBlock> {
    let end = start.saturating_add(window).min(rows.len());

    (start..end).find_map(|row_index| {
        let mapping = ColumnMapping::from_header(&rows[row_index]);
        mapping
            .contains_all(required)
            .then_some(HeaderBlock { row_index, mapping })
    })
}

/// Locate the positions header in the leading rows
///
/// The row right after the header is the value row; a header on the last row
/// is a format error.
pub fn locate_positions_block(rows: &[StringRecord], window: usize) -> Result<PositionsBlock> {
    let header = find_header_row(rows, 0, window, position_columns::REQUIRED).ok_or(
        FormatError::PositionsHeaderNotFound {
            searched: window.min(rows.len()),
        },
    )?;

    let value_row = header.row_index + 1;
    if value_row >= rows.len() {
        return Err(FormatError::PositionsValueRowMissing {
            header_row: header.row_index,
        }
        .into());
    }

    debug!(
        "Positions header at row {}, values at row {}",
        header.row_index, value_row
    );

    Ok(PositionsBlock { header, value_row })
}

/// Locate the data header within `window` rows after the positions value row
pub fn locate_data_header(
    rows: &[StringRecord],
    positions_value_row: usize,
    window: usize,
) -> Result<HeaderBlock> {
    let start = positions_value_row + 1;

    let header = find_header_row(rows, start, window, data_columns::REQUIRED).ok_or_else(|| {
        FormatError::DataHeaderNotFound {
            start,
            end: start.saturating_add(window).min(rows.len()).max(start),
        }
    })?;

    debug!(
        "Data header at row {} with {} columns",
        header.row_index, header.mapping.width
    );

    Ok(header)
}
