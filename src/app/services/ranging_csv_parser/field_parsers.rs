//! Field parsing utilities for ranging log records
//!
//! Fields are resolved by column name through a [`ColumnMapping`] and trimmed
//! before conversion. A missing or unparsable value comes back as `None`, never
//! as zero, and callers choose their own default.

use csv::StringRecord;

use super::column_mapping::ColumnMapping;

/// Get a trimmed field value by column name
///
/// Returns `None` when the column is not in the mapping or the record is too
/// short to hold it.
pub fn get_field<'a>(
    record: &'a StringRecord,
    mapping: &ColumnMapping,
    field_name: &str,
) -> Option<&'a str> {
    mapping
        .get_index(field_name)
        .and_then(|index| record.get(index))
        .map(str::trim)
}

/// Parse an optional f64 field
pub fn parse_optional_f64(
    record: &StringRecord,
    mapping: &ColumnMapping,
    field_name: &str,
) -> Option<f64> {
    get_field(record, mapping, field_name).and_then(parse_f64)
}

/// Parse text as an f64
pub fn parse_f64(value: &str) -> Option<f64> {
    value.trim().parse::<f64>().ok()
}

/// Parse text as an i64
pub fn parse_i64(value: &str) -> Option<i64> {
    value.trim().parse::<i64>().ok()
}
