//! Zone: a colored band of standings positions (promotion, relegation, ...).

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A labeled range of table positions, 1-based and inclusive.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Zone {
    pub start_position: u32,
    pub end_position: u32,
    /// CSS color, e.g. `#2E7D32`.
    pub color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl Zone {
    pub fn new(start_position: u32, end_position: u32, color: impl Into<String>) -> Self {
        Self {
            start_position,
            end_position,
            color: color.into(),
            label: None,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Whether the 1-based `rank` falls inside this zone.
    pub fn contains(&self, rank: u32) -> bool {
        (self.start_position..=self.end_position).contains(&rank)
    }
}

/// A preset color with its usual meaning.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub struct ZonePreset {
    pub name: &'static str,
    pub color: &'static str,
    pub label: &'static str,
}

/// Palette offered when configuring zones.
pub const ZONE_PRESETS: [ZonePreset; 8] = [
    ZonePreset { name: "Blue", color: "#1565C0", label: "Cup / Qualification" },
    ZonePreset { name: "Light blue", color: "#0288D1", label: "Playoff" },
    ZonePreset { name: "Orange", color: "#EF6C00", label: "Promotion playoff" },
    ZonePreset { name: "Green", color: "#2E7D32", label: "Promotion" },
    ZonePreset { name: "Red", color: "#C62828", label: "Relegation" },
    ZonePreset { name: "Violet", color: "#6A1B9A", label: "Special zone" },
    ZonePreset { name: "Gold", color: "#F9A825", label: "Champion" },
    ZonePreset { name: "Grey", color: "#546E7A", label: "Neutral" },
];

/// Why a set of zones was rejected.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum ZoneError {
    #[error("Zone start position must be at least 1")]
    StartBelowOne,
    #[error("Zone end position {end} exceeds the number of teams ({team_count})")]
    EndBeyondTeamCount { end: u32, team_count: u32 },
    #[error("Zone end position {end} is before its start position {start}")]
    EndBeforeStart { start: u32, end: u32 },
    #[error("Zones overlap: {first_start}-{first_end} and {second_start}-{second_end}")]
    Overlap {
        first_start: u32,
        first_end: u32,
        second_start: u32,
        second_end: u32,
    },
}
