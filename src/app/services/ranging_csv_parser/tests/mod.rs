//! Test utilities for ranging log parser testing
//!
//! This module provides fixture content and helper functions used across the
//! parser test modules.

use std::io::Write;
use tempfile::NamedTempFile;

mod record_tests;

/// Complete ranging log with title rows, blank separators and ground truth
pub fn create_test_ranging_csv() -> String {
    r#"Ranging experiment,run 7
,,,,,,,

gw0_x,gw0_y,an0_x,an0_y,an1_x,an1_y,en0_x,en0_y
0,0,10,0,0,10,4.5,3.25

,,,
node_id,packet_id,rssi,snr,timestamp,ticks,channel
GW0,p1,-65.0,9.5,1000,4,868.1
AN0,p1,-70.5,12.3,1000,5,868.1
an1,p1,-80.25,3.0,1002,7,868.1
GW0,p2,-66.0,9.0,2000,8,868.3
AN0,p2,-71.0,11.0,2001,9,868.3"#
        .to_string()
}

/// Minimal ranging log without ground-truth columns
pub fn create_minimal_ranging_csv() -> String {
    r#"gw0_x,gw0_y,an0_x,an0_y,an1_x,an1_y
0,0,10,0,0,10
node_id,packet_id,rssi,snr,timestamp,ticks
AN0,p1,-70.5,12.3,1000,5"#
        .to_string()
}

/// Helper to create a temporary file with given content
pub fn create_temp_file(content: &str) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    writeln!(temp_file, "{}", content).unwrap();
    temp_file
}
