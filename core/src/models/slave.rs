//! Device ("slave" node) position records

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Where a device sits in the building
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SlavePosition {
    pub floor: i32,
    pub x: f64,
    pub y: f64,
}

/// A device identified by its hardware address
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlaveType {
    pub mac_address: String,
    pub position: SlavePosition,
}

/// Device listing returned by the backend
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SlaveResponse {
    pub slaves: Vec<SlaveType>,
}

impl SlaveResponse {
    /// Devices placed on the given floor
    pub fn on_floor(&self, floor: i32) -> impl Iterator<Item = &SlaveType> {
        self.slaves.iter().filter(move |s| s.position.floor == floor)
    }

    /// Hardware addresses that appear more than once, compared
    /// case-insensitively. Uniqueness is not enforced; this only reports.
    pub fn duplicate_mac_addresses(&self) -> Vec<String> {
        let mut counts: BTreeMap<String, usize> = BTreeMap::new();
        for slave in &self.slaves {
            *counts.entry(slave.mac_address.to_ascii_uppercase()).or_default() += 1;
        }
        counts
            .into_iter()
            .filter(|(_, count)| *count > 1)
            .map(|(mac, _)| mac)
            .collect()
    }

    /// Distinct floors, ascending
    pub fn floors(&self) -> Vec<i32> {
        let mut floors: Vec<i32> = self.slaves.iter().map(|s| s.position.floor).collect();
        floors.sort_unstable();
        floors.dedup();
        floors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> SlaveResponse {
        serde_json::from_str(
            r#"{
                "slaves": [
                    { "macAddress": "aa:bb:cc:00:00:01", "position": { "floor": 1, "x": 10.5, "y": 3 } },
                    { "macAddress": "AA:BB:CC:00:00:02", "position": { "floor": 2, "x": 0, "y": 0 } },
                    { "macAddress": "AA:BB:CC:00:00:01", "position": { "floor": 1, "x": 4, "y": 7.25 } }
                ]
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_deserialize_slave_response() {
        let response = sample();
        assert_eq!(response.slaves.len(), 3);
        assert_eq!(response.slaves[0].position.x, 10.5);
        assert_eq!(response.slaves[2].position.y, 7.25);
    }

    #[test]
    fn test_filter_by_floor() {
        let response = sample();
        let first: Vec<_> = response.on_floor(1).map(|s| s.mac_address.as_str()).collect();
        assert_eq!(first, vec!["aa:bb:cc:00:00:01", "AA:BB:CC:00:00:01"]);
        assert_eq!(response.on_floor(9).count(), 0);
        assert_eq!(response.floors(), vec![1, 2]);
    }

    #[test]
    fn test_duplicates_are_reported() {
        assert_eq!(
            sample().duplicate_mac_addresses(),
            vec!["AA:BB:CC:00:00:01".to_string()]
        );
        assert!(SlaveResponse::default().duplicate_mac_addresses().is_empty());
    }
}
