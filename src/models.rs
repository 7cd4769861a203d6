use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One heart-rate reading of an activity.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct HeartRateSample {
    pub time: DateTime<Utc>,
    pub value: i32,
}

/// Per-user heart-rate zone model, as returned by `GET /HeartRate/zones`.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct HeartRateZones {
    pub resting_heart_rate: i32,
    pub max_heart_rate: i32,
    pub zone1_lower_limit: i32,
    pub zone2_lower_limit: i32,
    pub zone3_lower_limit: i32,
    pub zone4_lower_limit: i32,
    pub zone5_lower_limit: i32,
}

impl HeartRateZones {
    /// Zone 1..5 lower limits followed by the max heart rate.
    pub fn boundaries(&self) -> [i32; 6] {
        [
            self.zone1_lower_limit,
            self.zone2_lower_limit,
            self.zone3_lower_limit,
            self.zone4_lower_limit,
            self.zone5_lower_limit,
            self.max_heart_rate,
        ]
    }

    /// True when `0 <= z1 < z2 < z3 < z4 < z5 < max`.
    pub fn is_ordered(&self) -> bool {
        let b = self.boundaries();
        b[0] >= 0 && b.windows(2).all(|w| w[0] < w[1])
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ZoneTimeSpent {
    pub max_heart_rate: i32,
    pub zones: Vec<ZoneTimeSpentItem>,
}

impl ZoneTimeSpent {
    pub fn total_seconds(&self) -> i64 {
        self.zones.iter().map(|z| z.seconds.max(0)).sum()
    }

    /// Share of the total time spent in `item`, in percent.
    pub fn share_percent(&self, item: &ZoneTimeSpentItem) -> f64 {
        let total = self.total_seconds();
        if total == 0 {
            return 0.0;
        }
        item.seconds.max(0) as f64 * 100.0 / total as f64
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ZoneTimeSpentItem {
    pub zone: String, // e.g. "Z1"
    pub seconds: i64,
    #[serde(default)]
    pub duration: String, // e.g. "00:20:00"
}

/// Everything the activity detail screen needs, already joined.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct ActivityDetail {
    pub samples: Vec<HeartRateSample>,
    pub zones: HeartRateZones,
    pub time_spent: ZoneTimeSpent,
}

/// Sorts by time ascending. Stable, so duplicate timestamps keep arrival order.
pub fn sort_samples(samples: &mut [HeartRateSample]) {
    samples.sort_by_key(|s| s.time);
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use chrono::TimeZone;

    pub(crate) fn sample(secs: i64, value: i32) -> HeartRateSample {
        HeartRateSample {
            time: Utc.timestamp_opt(1_763_380_800 + secs, 0).unwrap(),
            value,
        }
    }

    pub(crate) fn zones() -> HeartRateZones {
        HeartRateZones {
            resting_heart_rate: 50,
            max_heart_rate: 190,
            zone1_lower_limit: 95,
            zone2_lower_limit: 114,
            zone3_lower_limit: 133,
            zone4_lower_limit: 152,
            zone5_lower_limit: 171,
        }
    }

    #[test]
    fn decodes_zones_from_camel_case() {
        let json = r#"{
            "restingHeartRate": 50, "maxHeartRate": 190,
            "zone1LowerLimit": 95, "zone2LowerLimit": 114, "zone3LowerLimit": 133,
            "zone4LowerLimit": 152, "zone5LowerLimit": 171
        }"#;
        let parsed: HeartRateZones = serde_json::from_str(json).unwrap();
        assert_eq!(parsed, zones());
        assert!(parsed.is_ordered());
    }

    #[test]
    fn decodes_samples_with_iso8601_time() {
        let json = r#"[{"time":"2025-11-17T12:00:00Z","value":90},{"time":"2025-11-17T12:00:05+00:00","value":92}]"#;
        let parsed: Vec<HeartRateSample> = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[1].value, 92);
        assert!(parsed[0].time < parsed[1].time);
    }

    #[test]
    fn unordered_zones_are_detected() {
        let mut z = zones();
        z.zone3_lower_limit = z.zone2_lower_limit;
        assert!(!z.is_ordered());
    }

    #[test]
    fn sort_is_idempotent_and_keeps_duplicates() {
        let mut s = vec![sample(10, 1), sample(0, 2), sample(10, 3), sample(5, 4)];
        sort_samples(&mut s);
        let once = s.clone();
        sort_samples(&mut s);
        assert_eq!(s, once);
        let values: Vec<i32> = s.iter().map(|p| p.value).collect();
        assert_eq!(values, vec![2, 4, 1, 3]);
    }

    #[test]
    fn share_of_empty_aggregate_is_zero() {
        let spent = ZoneTimeSpent {
            max_heart_rate: 190,
            zones: vec![ZoneTimeSpentItem {
                zone: "Z1".to_string(),
                seconds: 0,
                duration: String::new(),
            }],
        };
        assert_eq!(spent.share_percent(&spent.zones[0]), 0.0);
    }

    #[test]
    fn share_is_relative_to_total() {
        let spent: ZoneTimeSpent = serde_json::from_str(
            r#"{"maxHeartRate":190,"zones":[
                {"zone":"Z1","seconds":300,"duration":"00:05:00"},
                {"zone":"Z2","seconds":900,"duration":"00:15:00"}]}"#,
        )
        .unwrap();
        assert_eq!(spent.total_seconds(), 1200);
        assert_eq!(spent.share_percent(&spent.zones[1]), 75.0);
    }
}
