//! Column mapping for header rows located by name
//!
//! Header names are normalized once (trimmed, lower-cased) and every later
//! field lookup goes through the resulting name-to-index map, so column order
//! and extra columns do not matter.

use csv::StringRecord;
use std::collections::HashMap;

/// Column mapping built from one header row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnMapping {
    /// Normalized column name to index mapping (first occurrence wins)
    pub name_to_index: HashMap<String, usize>,

    /// Number of fields in the header row
    pub width: usize,
}

impl ColumnMapping {
    /// Build a mapping from a header row
    pub fn from_header(header: &StringRecord) -> Self {
        let mut name_to_index = HashMap::new();

        for (index, field) in header.iter().enumerate() {
            name_to_index
                .entry(normalize_column_name(field))
                .or_insert(index);
        }

        ColumnMapping {
            name_to_index,
            width: header.len(),
        }
    }

    /// Get the index for a given column name
    pub fn get_index(&self, column_name: &str) -> Option<usize> {
        self.name_to_index.get(column_name).copied()
    }

    /// Check if a column exists in the mapping
    pub fn has_column(&self, column_name: &str) -> bool {
        self.name_to_index.contains_key(column_name)
    }

    /// Check that every name in `required` is present
    pub fn contains_all(&self, required: &[&str]) -> bool {
        required.iter().all(|name| self.has_column(name))
    }
}

/// Normalize a header field for name matching
pub fn normalize_column_name(field: &str) -> String {
    field.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_are_trimmed_and_lowercased() {
        let header = StringRecord::from(vec![" GW0_X ", "gw0_y", "Extra"]);
        let mapping = ColumnMapping::from_header(&header);

        assert_eq!(mapping.get_index("gw0_x"), Some(0));
        assert_eq!(mapping.get_index("gw0_y"), Some(1));
        assert_eq!(mapping.get_index("extra"), Some(2));
        assert_eq!(mapping.get_index("GW0_X"), None);
        assert_eq!(mapping.width, 3);
    }

    #[test]
    fn test_first_occurrence_wins() {
        let header = StringRecord::from(vec!["rssi", "snr", "RSSI"]);
        let mapping = ColumnMapping::from_header(&header);

        assert_eq!(mapping.get_index("rssi"), Some(0));
    }

    #[test]
    fn test_contains_all() {
        let header = StringRecord::from(vec!["node_id", "packet_id", "rssi"]);
        let mapping = ColumnMapping::from_header(&header);

        assert!(mapping.contains_all(&["rssi", "node_id"]));
        assert!(!mapping.contains_all(&["rssi", "snr"]));
    }
}
