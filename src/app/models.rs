//! Data models for ranging log parsing
//!
//! This module contains the core data structures produced by the parser: fixed
//! anchor coordinates, the optional ground-truth transmitter position, and the
//! per-packet radio observations reported by each node.

use crate::constants::position_columns;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::str::FromStr;

// =============================================================================
// Anchor Identity
// =============================================================================

/// The three fixed anchor nodes present in every ranging log
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AnchorId {
    /// Gateway node
    #[serde(rename = "GW0")]
    Gw0,

    #[serde(rename = "AN0")]
    An0,

    #[serde(rename = "AN1")]
    An1,
}

impl AnchorId {
    /// All anchors in their canonical order
    pub const ALL: [AnchorId; 3] = [AnchorId::Gw0, AnchorId::An0, AnchorId::An1];

    /// Upper-case name used as the storage key
    pub fn as_str(self) -> &'static str {
        match self {
            AnchorId::Gw0 => "GW0",
            AnchorId::An0 => "AN0",
            AnchorId::An1 => "AN1",
        }
    }

    /// Header names of this anchor's `(x, y)` columns in the positions block
    pub fn column_names(self) -> (&'static str, &'static str) {
        match self {
            AnchorId::Gw0 => (position_columns::GW0_X, position_columns::GW0_Y),
            AnchorId::An0 => (position_columns::AN0_X, position_columns::AN0_Y),
            AnchorId::An1 => (position_columns::AN1_X, position_columns::AN1_Y),
        }
    }
}

impl FromStr for AnchorId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_uppercase().as_str() {
            "GW0" => Ok(AnchorId::Gw0),
            "AN0" => Ok(AnchorId::An0),
            "AN1" => Ok(AnchorId::An1),
            _ => Err(Error::UnknownAnchor {
                name: s.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for AnchorId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

// =============================================================================
// Coordinates
// =============================================================================

/// Fixed 2D position of an anchor node
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Anchor {
    pub x: f64,
    pub y: f64,
}

impl Anchor {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Known 2D position of the transmitting node
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

// =============================================================================
// Observations
// =============================================================================

/// One node's radio measurement of one packet
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    /// Received signal strength indicator (dBm)
    pub rssi: f64,

    /// Signal-to-noise ratio (dB)
    pub snr: f64,

    /// Receive timestamp as reported by the node
    pub timestamp: i64,

    /// Node tick counter at reception
    pub ticks: i64,
}

/// Observations of one packet keyed by upper-cased node id
pub type NodeObservations = BTreeMap<String, Observation>;

/// Packet groups keyed by trimmed, case-preserved packet id
pub type PacketGroups = BTreeMap<String, NodeObservations>;

// =============================================================================
// Parsed Log
// =============================================================================

/// Everything extracted from one ranging log file
///
/// The anchor map always holds exactly the three [`AnchorId`] entries. The
/// ground truth is `None` unless both of its coordinates were present and
/// numeric in the positions block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RangingLog {
    pub anchors: BTreeMap<AnchorId, Anchor>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ground_truth: Option<Position>,

    pub packets: PacketGroups,
}

impl RangingLog {
    /// Coordinates of a fixed anchor
    pub fn anchor(&self, id: AnchorId) -> Anchor {
        // The parser inserts every AnchorId; a hand-built log may not.
        self.anchors
            .get(&id)
            .copied()
            .unwrap_or(Anchor::new(0.0, 0.0))
    }

    /// Observations recorded for a packet
    pub fn packet(&self, packet_id: &str) -> Option<&NodeObservations> {
        self.packets.get(packet_id.trim())
    }

    /// Observation of a packet by a node; the node id is matched case-insensitively
    pub fn observation(&self, packet_id: &str, node_id: &str) -> Option<&Observation> {
        self.packet(packet_id)?
            .get(&node_id.trim().to_uppercase())
    }

    /// Number of distinct packets
    pub fn packet_count(&self) -> usize {
        self.packets.len()
    }

    /// Total number of stored observations across all packets
    pub fn observation_count(&self) -> usize {
        self.packets.values().map(|nodes| nodes.len()).sum()
    }

    /// Distinct node ids that reported at least one packet
    pub fn node_ids(&self) -> BTreeSet<&str> {
        self.packets
            .values()
            .flat_map(|nodes| nodes.keys().map(String::as_str))
            .collect()
    }

    /// Split into `(anchors, ground_truth, packets)`
    pub fn into_parts(self) -> (BTreeMap<AnchorId, Anchor>, Option<Position>, PacketGroups) {
        (self.anchors, self.ground_truth, self.packets)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn obs(rssi: f64, timestamp: i64) -> Observation {
        Observation {
            rssi,
            snr: 10.0,
            timestamp,
            ticks: 1,
        }
    }

    fn create_test_log() -> RangingLog {
        let anchors = AnchorId::ALL
            .iter()
            .enumerate()
            .map(|(i, id)| (*id, Anchor::new(i as f64, 0.0)))
            .collect();

        let mut packets = PacketGroups::new();
        packets
            .entry("p1".to_string())
            .or_default()
            .insert("AN0".to_string(), obs(-70.0, 1000));
        packets
            .entry("p1".to_string())
            .or_default()
            .insert("GW0".to_string(), obs(-65.0, 1000));
        packets
            .entry("p2".to_string())
            .or_default()
            .insert("AN1".to_string(), obs(-80.0, 2000));

        RangingLog {
            anchors,
            ground_truth: Some(Position::new(3.0, 4.0)),
            packets,
        }
    }

    mod anchor_id_tests {
        use super::*;

        #[test]
        fn test_anchor_id_from_str_case_insensitive() {
            assert_eq!("gw0".parse::<AnchorId>().unwrap(), AnchorId::Gw0);
            assert_eq!(" An0 ".parse::<AnchorId>().unwrap(), AnchorId::An0);
            assert_eq!("AN1".parse::<AnchorId>().unwrap(), AnchorId::An1);
            assert!("EN0".parse::<AnchorId>().is_err());
        }

        #[test]
        fn test_anchor_id_display_and_columns() {
            assert_eq!(AnchorId::Gw0.to_string(), "GW0");
            assert_eq!(AnchorId::An1.column_names(), ("an1_x", "an1_y"));
        }

        #[test]
        fn test_anchor_id_serializes_as_name() {
            let json = serde_json::to_string(&AnchorId::An0).unwrap();
            assert_eq!(json, "\"AN0\"");
        }
    }

    mod ranging_log_tests {
        use super::*;

        #[test]
        fn test_observation_lookup_normalizes_node_id() {
            let log = create_test_log();
            assert_eq!(log.observation("p1", "an0").unwrap().rssi, -70.0);
            assert_eq!(log.observation(" p1 ", "AN0").unwrap().rssi, -70.0);
            assert!(log.observation("P1", "AN0").is_none());
            assert!(log.observation("p1", "AN1").is_none());
        }

        #[test]
        fn test_counts_and_node_ids() {
            let log = create_test_log();
            assert_eq!(log.packet_count(), 2);
            assert_eq!(log.observation_count(), 3);

            let nodes: Vec<&str> = log.node_ids().into_iter().collect();
            assert_eq!(nodes, vec!["AN0", "AN1", "GW0"]);
        }

        #[test]
        fn test_into_parts() {
            let log = create_test_log();
            let (anchors, truth, packets) = log.into_parts();
            assert_eq!(anchors.len(), 3);
            assert_eq!(anchors[&AnchorId::An0], Anchor::new(1.0, 0.0));
            assert_eq!(truth, Some(Position::new(3.0, 4.0)));
            assert_eq!(packets.len(), 2);
        }

        #[test]
        fn test_json_omits_absent_ground_truth() {
            let mut log = create_test_log();
            log.ground_truth = None;
            let json = serde_json::to_value(&log).unwrap();
            assert!(json.get("ground_truth").is_none());
            assert_eq!(json["anchors"]["GW0"]["x"], 0.0);
            assert_eq!(json["packets"]["p2"]["AN1"]["timestamp"], 2000);
        }
    }
}
