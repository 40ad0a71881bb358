//! Anchor and ground-truth extraction from the positions value row
//!
//! Anchor coordinates fall back to a caller-supplied default when a column is
//! missing or not numeric. The ground truth is all-or-nothing: both `en0_x` and
//! `en0_y` must parse, otherwise no position is produced.

use csv::StringRecord;
use std::collections::BTreeMap;
use tracing::warn;

use super::column_mapping::ColumnMapping;
use super::field_parsers::parse_optional_f64;
use crate::app::models::{Anchor, AnchorId, Position};
use crate::constants::position_columns;

/// Values extracted from the positions block
#[derive(Debug, Clone, PartialEq)]
pub struct PositionValues {
    pub anchors: BTreeMap<AnchorId, Anchor>,
    pub ground_truth: Option<Position>,

    /// Anchor columns that fell back to the default value
    pub defaulted_columns: Vec<&'static str>,
}

/// Extract all anchor coordinates and the optional ground truth
pub fn extract_positions(
    header: &ColumnMapping,
    values: &StringRecord,
    anchor_default: f64,
) -> PositionValues {
    let mut anchors = BTreeMap::new();
    let mut defaulted_columns = Vec::new();

    for id in AnchorId::ALL {
        let (x_column, y_column) = id.column_names();

        let mut coordinate = |column: &'static str| {
            parse_optional_f64(values, header, column).unwrap_or_else(|| {
                warn!(
                    "Position column '{}' missing or not numeric, using {}",
                    column, anchor_default
                );
                defaulted_columns.push(column);
                anchor_default
            })
        };

        let x = coordinate(x_column);
        let y = coordinate(y_column);
        anchors.insert(id, Anchor::new(x, y));
    }

    PositionValues {
        anchors,
        ground_truth: extract_ground_truth(header, values),
        defaulted_columns,
    }
}

/// Extract the ground-truth transmitter position, if both coordinates parse
pub fn extract_ground_truth(header: &ColumnMapping, values: &StringRecord) -> Option<Position> {
    let x = parse_optional_f64(values, header, position_columns::EN0_X)?;
    let y = parse_optional_f64(values, header, position_columns::EN0_Y)?;
    Some(Position::new(x, y))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(header: &[&str], values: &[&str]) -> PositionValues {
        let mapping = ColumnMapping::from_header(&StringRecord::from(header.to_vec()));
        extract_positions(&mapping, &StringRecord::from(values.to_vec()), 0.0)
    }

    #[test]
    fn test_reordered_columns() {
        let positions = extract(
            &["an1_y", "an1_x", "gw0_x", "an0_y", "gw0_y", "an0_x"],
            &["10", "0", "0", "0", "0", "10"],
        );

        assert_eq!(positions.anchors[&AnchorId::Gw0], Anchor::new(0.0, 0.0));
        assert_eq!(positions.anchors[&AnchorId::An0], Anchor::new(10.0, 0.0));
        assert_eq!(positions.anchors[&AnchorId::An1], Anchor::new(0.0, 10.0));
        assert!(positions.defaulted_columns.is_empty());
        assert_eq!(positions.ground_truth, None);
    }

    #[test]
    fn test_unparsable_and_short_values_default() {
        let mapping = ColumnMapping::from_header(&StringRecord::from(vec![
            "gw0_x", "gw0_y", "an0_x", "an0_y", "an1_x", "an1_y",
        ]));
        let values = StringRecord::from(vec!["1", "?", "3"]);
        let positions = extract_positions(&mapping, &values, -1.0);

        assert_eq!(positions.anchors[&AnchorId::Gw0], Anchor::new(1.0, -1.0));
        assert_eq!(positions.anchors[&AnchorId::An0], Anchor::new(3.0, -1.0));
        assert_eq!(positions.anchors[&AnchorId::An1], Anchor::new(-1.0, -1.0));
        assert_eq!(
            positions.defaulted_columns,
            vec!["gw0_y", "an0_y", "an1_x", "an1_y"]
        );
    }

    #[test]
    fn test_ground_truth_requires_both_coordinates() {
        let base = ["gw0_x", "gw0_y", "an0_x", "an0_y", "an1_x", "an1_y"];

        let mut header = base.to_vec();
        header.extend(["en0_x", "en0_y"]);
        let positions = extract(&header, &["0", "0", "0", "0", "0", "0", "2.5", "-4"]);
        assert_eq!(positions.ground_truth, Some(Position::new(2.5, -4.0)));

        let positions = extract(&header, &["0", "0", "0", "0", "0", "0", "2.5", "x"]);
        assert_eq!(positions.ground_truth, None);

        let mut header = base.to_vec();
        header.push("en0_x");
        let positions = extract(&header, &["0", "0", "0", "0", "0", "0", "2.5"]);
        assert_eq!(positions.ground_truth, None);
    }

    #[test]
    fn test_zero_ground_truth_is_present() {
        let header = [
            "gw0_x", "gw0_y", "an0_x", "an0_y", "an1_x", "an1_y", "en0_x", "en0_y",
        ];
        let positions = extract(&header, &["0", "0", "0", "0", "0", "0", "0", "0"]);
        assert_eq!(positions.ground_truth, Some(Position::new(0.0, 0.0)));
    }
}
