//! Zone labels and colors for the time-in-zone table and chart bands.

use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;

lazy_static! {
    static ref ZONE_LABEL_RE: Regex = Regex::new(r"(?i)^\s*(?:zone|z)?\s*(\d+)\s*$").unwrap();
}

/// Display color of a zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ZoneColor {
    Green,
    Yellow,
    Orange,
    Red,
    Purple,
    Gray,
}

impl ZoneColor {
    pub fn name(&self) -> &'static str {
        match self {
            ZoneColor::Green => "green",
            ZoneColor::Yellow => "yellow",
            ZoneColor::Orange => "orange",
            ZoneColor::Red => "red",
            ZoneColor::Purple => "purple",
            ZoneColor::Gray => "gray",
        }
    }

    pub fn rgb(&self) -> [u8; 3] {
        match self {
            ZoneColor::Green => [52, 199, 89],
            ZoneColor::Yellow => [255, 204, 0],
            ZoneColor::Orange => [255, 149, 0],
            ZoneColor::Red => [255, 59, 48],
            ZoneColor::Purple => [175, 82, 222],
            ZoneColor::Gray => [142, 142, 147],
        }
    }
}

/// Parses `"Z3"`, `"z3"`, `"Zone 3"` or `"3"` into 3. Anything that is not
/// zone 1-5 maps to 0.
pub fn zone_number(label: &str) -> u8 {
    ZONE_LABEL_RE
        .captures(label)
        .and_then(|caps| caps[1].parse::<u8>().ok())
        .filter(|n| (1..=5).contains(n))
        .unwrap_or(0)
}

pub fn zone_color(zone: u8) -> ZoneColor {
    match zone {
        1 => ZoneColor::Green,
        2 => ZoneColor::Yellow,
        3 => ZoneColor::Orange,
        4 => ZoneColor::Red,
        5 => ZoneColor::Purple,
        _ => ZoneColor::Gray,
    }
}

pub fn label_color(label: &str) -> ZoneColor {
    zone_color(zone_number(label))
}

/// Formats a duration as `HH:MM:SS`. Hours are not wrapped at 24.
pub fn format_duration(seconds: i64) -> String {
    let seconds = seconds.max(0);
    format!(
        "{:02}:{:02}:{:02}",
        seconds / 3600,
        (seconds % 3600) / 60,
        seconds % 60
    )
}
