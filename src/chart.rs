//! Y-axis range and zone overlays for the heart-rate line chart.
//!
//! The lower bound snaps down to the nearest zone boundary at or below the
//! lowest sample, so the band the data starts in is drawn in full. Bands are
//! clipped to the visible range and dropped when nothing of them is left.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::{HeartRateSample, HeartRateZones};
use crate::zone_label::{zone_color, ZoneColor};

/// Used for the axis when there are no samples.
pub const DEFAULT_DATA_MIN: i32 = 60;
pub const DEFAULT_DATA_MAX: i32 = 180;

const LOWER_MARGIN: i32 = 3;
const UPPER_MARGIN: i32 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VisibleRange {
    pub lower: i32,
    pub upper: i32,
}

impl VisibleRange {
    pub fn contains(&self, value: i32) -> bool {
        self.lower <= value && value <= self.upper
    }
}

/// Colored horizontal band, already clipped to the visible range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ZoneBand {
    /// 1-5, or 0 for the band below zone 1.
    pub zone: u8,
    pub lower: i32,
    pub upper: i32,
    pub color: ZoneColor,
}

/// Labeled horizontal rule at a zone boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoundaryRule {
    pub label: String,
    pub value: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartLayout {
    pub range: VisibleRange,
    pub bands: Vec<ZoneBand>,
    pub rules: Vec<BoundaryRule>,
    /// First and last sample time; bands and rules span this.
    pub time_span: Option<(DateTime<Utc>, DateTime<Utc>)>,
}

/// `samples` must already be sorted by time.
pub fn derive_chart(samples: &[HeartRateSample], zones: Option<&HeartRateZones>) -> ChartLayout {
    let range = visible_range(samples, zones);

    let (bands, rules) = match zones {
        Some(z) => (zone_bands(z, range), boundary_rules(z, range)),
        None => (Vec::new(), Vec::new()),
    };

    let time_span = match (samples.first(), samples.last()) {
        (Some(first), Some(last)) => Some((first.time, last.time)),
        _ => None,
    };

    ChartLayout {
        range,
        bands,
        rules,
        time_span,
    }
}

/// Heart rates are expected to be non-negative. Negative readings are
/// treated as 0, so the range never starts below 0.
pub fn visible_range(samples: &[HeartRateSample], zones: Option<&HeartRateZones>) -> VisibleRange {
    let data_min = samples
        .iter()
        .map(|s| s.value.max(0))
        .min()
        .unwrap_or(DEFAULT_DATA_MIN);
    let data_max = samples
        .iter()
        .map(|s| s.value.max(0))
        .max()
        .unwrap_or(DEFAULT_DATA_MAX);

    let mut candidates = vec![0];
    if let Some(z) = zones {
        candidates.extend_from_slice(&z.boundaries());
    }

    let snapped_lower = candidates
        .iter()
        .copied()
        .filter(|&b| b <= data_min)
        .max()
        .unwrap_or(data_min);
    let largest_boundary = candidates.iter().copied().max().unwrap_or(0);

    VisibleRange {
        lower: (snapped_lower - LOWER_MARGIN).max(0),
        upper: data_max.max(largest_boundary) + UPPER_MARGIN,
    }
}

fn zone_bands(zones: &HeartRateZones, range: VisibleRange) -> Vec<ZoneBand> {
    let b = zones.boundaries();
    let edges = [0, b[0], b[1], b[2], b[3], b[4], b[5]];

    edges
        .windows(2)
        .enumerate()
        .filter_map(|(i, w)| {
            let lower = w[0].max(range.lower);
            let upper = w[1].min(range.upper);
            (upper > lower).then(|| ZoneBand {
                zone: i as u8,
                lower,
                upper,
                color: zone_color(i as u8),
            })
        })
        .collect()
}

fn boundary_rules(zones: &HeartRateZones, range: VisibleRange) -> Vec<BoundaryRule> {
    const LABELS: [&str; 6] = ["Z1", "Z2", "Z3", "Z4", "Z5", "Max"];

    LABELS
        .iter()
        .zip(zones.boundaries())
        .filter(|(_, value)| range.contains(*value))
        .map(|(label, value)| BoundaryRule {
            label: label.to_string(),
            value,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::tests::{sample, zones};

    #[test]
    fn empty_series_without_zones_uses_defaults() {
        let layout = derive_chart(&[], None);
        assert_eq!(layout.range, VisibleRange { lower: 0, upper: 185 });
        assert!(layout.bands.is_empty());
        assert!(layout.rules.is_empty());
        assert_eq!(layout.time_span, None);
    }

    #[test]
    fn empty_series_with_zones_snaps_default_min() {
        // default min 60 snaps to 0, upper is max(180, 190) + 5
        let range = visible_range(&[], Some(&zones()));
        assert_eq!(range, VisibleRange { lower: 0, upper: 195 });
    }

    #[test]
    fn lower_bound_snaps_to_zone_boundary_below_data() {
        let samples = [sample(0, 120), sample(5, 160)];
        let range = visible_range(&samples, Some(&zones()));
        // 114 is the zone 2 lower limit
        assert_eq!(range, VisibleRange { lower: 111, upper: 195 });
    }

    #[test]
    fn data_above_max_extends_upper_bound() {
        let samples = [sample(0, 100), sample(5, 200)];
        let range = visible_range(&samples, Some(&zones()));
        assert_eq!(range.upper, 205);
    }

    #[test]
    fn bands_below_visible_range_are_dropped_and_first_is_clipped() {
        let samples = [sample(0, 120), sample(5, 160)];
        let layout = derive_chart(&samples, Some(&zones()));
        let drawn: Vec<(u8, i32, i32)> = layout
            .bands
            .iter()
            .map(|b| (b.zone, b.lower, b.upper))
            .collect();
        assert_eq!(
            drawn,
            vec![
                (1, 111, 114),
                (2, 114, 133),
                (3, 133, 152),
                (4, 152, 171),
                (5, 171, 190),
            ]
        );
        assert_eq!(layout.bands[0].color, ZoneColor::Green);
        assert_eq!(layout.bands[4].color, ZoneColor::Purple);
    }

    #[test]
    fn low_data_shows_all_six_bands() {
        let samples = [sample(0, 40), sample(5, 150)];
        let layout = derive_chart(&samples, Some(&zones()));
        assert_eq!(layout.range.lower, 0);
        assert_eq!(layout.bands.len(), 6);
        assert_eq!(layout.bands[0].zone, 0);
        assert_eq!(layout.bands[0].color, ZoneColor::Gray);
    }

    #[test]
    fn rules_only_for_visible_boundaries() {
        let samples = [sample(0, 140), sample(5, 160)];
        let layout = derive_chart(&samples, Some(&zones()));
        // lower = 133 - 3 = 130: Z1 (95) and Z2 (114) are hidden
        let labels: Vec<&str> = layout.rules.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(labels, vec!["Z3", "Z4", "Z5", "Max"]);
        assert_eq!(layout.rules.last().unwrap().value, 190);
    }

    #[test]
    fn degenerate_zones_produce_no_zero_height_band() {
        let mut z = zones();
        z.zone3_lower_limit = z.zone2_lower_limit;
        let samples = [sample(0, 60), sample(5, 180)];
        let layout = derive_chart(&samples, Some(&z));
        assert!(layout.bands.iter().all(|b| b.upper > b.lower));
        assert!(layout.bands.iter().all(|b| b.zone != 2));
    }

    #[test]
    fn bands_stay_inside_range_and_samples_are_visible() {
        let z = zones();
        for (lo, hi) in [(40, 60), (95, 96), (113, 190), (170, 230), (0, 0)] {
            let samples = [sample(0, lo), sample(1, hi)];
            let layout = derive_chart(&samples, Some(&z));
            assert!(layout.range.lower <= lo && hi <= layout.range.upper);
            for band in &layout.bands {
                assert!(band.upper > band.lower);
                assert!(layout.range.contains(band.lower) && layout.range.contains(band.upper));
            }
        }
    }

    #[test]
    fn negative_readings_are_treated_as_zero() {
        let samples = [sample(0, -10), sample(5, 120)];
        let range = visible_range(&samples, Some(&zones()));
        assert_eq!(range, VisibleRange { lower: 0, upper: 195 });

        let range = visible_range(&[sample(0, -20), sample(1, -5)], None);
        assert_eq!(range, VisibleRange { lower: 0, upper: 5 });
    }

    #[test]
    fn time_span_covers_first_and_last_sample() {
        let samples = [sample(0, 90), sample(30, 100), sample(60, 95)];
        let layout = derive_chart(&samples, None);
        assert_eq!(layout.time_span, Some((samples[0].time, samples[2].time)));
    }
}
