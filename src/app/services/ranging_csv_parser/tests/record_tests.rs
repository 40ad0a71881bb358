//! Tests for individual observation record parsing

use csv::StringRecord;

use super::super::column_mapping::ColumnMapping;
use super::super::record_parser::{DataColumns, RowRejection, parse_observation_record};

fn columns(header: &[&str]) -> DataColumns {
    DataColumns::resolve(&ColumnMapping::from_header(&StringRecord::from(
        header.to_vec(),
    )))
    .unwrap()
}

fn standard_columns() -> DataColumns {
    columns(&["node_id", "packet_id", "rssi", "snr", "timestamp", "ticks"])
}

#[test]
fn test_parse_valid_record() {
    let record = StringRecord::from(vec![" an0 ", " Pkt-1 ", "-70.5", "12.3", "1000", "5"]);
    let parsed = parse_observation_record(&record, &standard_columns()).unwrap();

    assert_eq!(parsed.node_id, "AN0");
    assert_eq!(parsed.packet_id, "Pkt-1");
    assert_eq!(parsed.observation.rssi, -70.5);
    assert_eq!(parsed.observation.snr, 12.3);
    assert_eq!(parsed.observation.timestamp, 1000);
    assert_eq!(parsed.observation.ticks, 5);
}

#[test]
fn test_parse_reordered_columns_with_extras() {
    let columns = columns(&[
        "ticks", "extra", "RSSI", "Packet_ID", "snr", "Node_ID", "timestamp",
    ]);
    let record = StringRecord::from(vec!["6", "x", "-71", "p9", "12", "gw0", "1001"]);
    let parsed = parse_observation_record(&record, &columns).unwrap();

    assert_eq!(parsed.node_id, "GW0");
    assert_eq!(parsed.packet_id, "p9");
    assert_eq!(parsed.observation.rssi, -71.0);
    assert_eq!(parsed.observation.ticks, 6);
}

#[test]
fn test_short_row_rejected() {
    let record = StringRecord::from(vec!["AN0", "p1", "-70.5", "12.3", "1000"]);
    let rejection = parse_observation_record(&record, &standard_columns()).unwrap_err();

    assert_eq!(
        rejection,
        RowRejection::ShortRow {
            found: 5,
            expected: 6
        }
    );
}

#[test]
fn test_longer_row_accepted() {
    let record = StringRecord::from(vec!["AN0", "p1", "-70.5", "12.3", "1000", "5", "note"]);
    assert!(parse_observation_record(&record, &standard_columns()).is_ok());
}

#[test]
fn test_non_numeric_fields_rejected() {
    let cases = [
        (vec!["AN0", "p1", "strong", "12.3", "1000", "5"], "rssi"),
        (vec!["AN0", "p1", "-70", "", "1000", "5"], "snr"),
        (vec!["AN0", "p1", "-70", "12", "1000.5", "5"], "timestamp"),
        (vec!["AN0", "p1", "-70", "12", "1000", "five"], "ticks"),
    ];

    for (fields, bad_column) in cases {
        let record = StringRecord::from(fields);
        match parse_observation_record(&record, &standard_columns()) {
            Err(RowRejection::InvalidNumber { column, .. }) => assert_eq!(column, bad_column),
            other => panic!("expected rejection on {}, got {:?}", bad_column, other),
        }
    }
}

#[test]
fn test_whitespace_around_numbers_accepted() {
    let record = StringRecord::from(vec!["AN1", "p1", " -80 ", " 3.5", "42 ", " 7 "]);
    let parsed = parse_observation_record(&record, &standard_columns()).unwrap();

    assert_eq!(parsed.observation.rssi, -80.0);
    assert_eq!(parsed.observation.timestamp, 42);
    assert_eq!(parsed.observation.ticks, 7);
}

#[test]
fn test_rejection_messages() {
    let short = RowRejection::ShortRow {
        found: 2,
        expected: 6,
    };
    assert_eq!(
        short.to_string(),
        "row has 2 fields but the data header has 6"
    );

    let invalid = RowRejection::InvalidNumber {
        column: "rssi",
        value: "n/a".to_string(),
        expected: "number",
    };
    assert_eq!(
        invalid.to_string(),
        "column 'rssi' value 'n/a' is not a valid number"
    );
}

#[test]
fn test_tick_counter_beyond_i64_rejected() {
    let record = StringRecord::from(vec![
        "AN0",
        "p1",
        "-70",
        "12",
        "1000",
        "18446744073709551615",
    ]);

    match parse_observation_record(&record, &standard_columns()) {
        Err(RowRejection::InvalidNumber {
            column, expected, ..
        }) => {
            assert_eq!(column, "ticks");
            assert_eq!(expected, "integer");
        }
        other => panic!("expected ticks rejection, got {:?}", other),
    }

    let record = StringRecord::from(vec![
        "AN0",
        "p1",
        "-70",
        "12",
        "1000",
        "9223372036854775807",
    ]);
    let parsed = parse_observation_record(&record, &standard_columns()).unwrap();
    assert_eq!(parsed.observation.ticks, i64::MAX);
}
