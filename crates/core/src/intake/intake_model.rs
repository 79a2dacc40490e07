//! Water intake domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single logged drink.
///
/// Timestamps are stored in UTC and serialized as epoch milliseconds, the
/// format of the persisted log record. Calendar-day bucketing happens in the
/// metrics engine against a caller-supplied reference instant.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WaterLog {
    pub id: String,
    /// Amount drunk in milliliters, strictly positive.
    pub amount: i64,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub timestamp: DateTime<Utc>,
}

impl WaterLog {
    /// Creates an entry with a fresh unique id.
    pub fn new(amount: i64, timestamp: DateTime<Utc>) -> Self {
        WaterLog {
            id: Uuid::new_v4().to_string(),
            amount,
            timestamp,
        }
    }
}

/// Quick-add preset rendered by the shell.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WaterPreset {
    pub label: &'static str,
    pub amount: i64,
    pub icon: &'static str,
}

/// The quick-add catalog.
pub const WATER_PRESETS: [WaterPreset; 4] = [
    WaterPreset {
        label: "Sip",
        amount: 150,
        icon: "fa-glass-water-droplet",
    },
    WaterPreset {
        label: "Glass",
        amount: 250,
        icon: "fa-glass-water",
    },
    WaterPreset {
        label: "Bottle",
        amount: 500,
        icon: "fa-bottle-water",
    },
    WaterPreset {
        label: "Big",
        amount: 1000,
        icon: "fa-bucket",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_new_assigns_unique_ids() {
        let now = Utc::now();
        let a = WaterLog::new(250, now);
        let b = WaterLog::new(250, now);
        assert_ne!(a.id, b.id);
        assert_eq!(a.amount, 250);
        assert_eq!(a.timestamp, now);
    }

    #[test]
    fn test_log_record_serializes_timestamp_as_epoch_millis() {
        let entry = WaterLog {
            id: "log-1".to_string(),
            amount: 500,
            timestamp: Utc.timestamp_millis_opt(1_716_822_000_000).unwrap(),
        };

        let json = serde_json::to_string(&entry).unwrap();
        assert_eq!(
            json,
            r#"{"id":"log-1","amount":500,"timestamp":1716822000000}"#
        );

        let back: WaterLog = serde_json::from_str(&json).unwrap();
        assert_eq!(back, entry);
    }

    #[test]
    fn test_presets_cover_the_four_quick_adds() {
        let amounts: Vec<i64> = WATER_PRESETS.iter().map(|p| p.amount).collect();
        assert_eq!(amounts, vec![150, 250, 500, 1000]);
        assert_eq!(WATER_PRESETS[0].label, "Sip");
        assert_eq!(WATER_PRESETS[3].icon, "fa-bucket");
    }
}
