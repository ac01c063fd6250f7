//! Distance-based regime selection.

use std::fmt;

use serde::Serialize;

use super::config::PlannerConfig;

/// Which formula set synthesizes the routes for a trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DistanceRegime {
    /// City transit: local bus and subway.
    Short,
    /// Regional transit: subway and express bus with transfers.
    Medium,
    /// Intercity rail.
    Long,
}

impl DistanceRegime {
    /// Classify a great-circle distance in kilometres.
    ///
    /// Boundaries belong to the lower regime: a trip of exactly
    /// `short_max_km` is short, exactly `medium_max_km` is medium.
    /// NaN compares false everywhere and lands in `Short`.
    pub fn classify(distance_km: f64, config: &PlannerConfig) -> Self {
        if distance_km > config.medium_max_km {
            DistanceRegime::Long
        } else if distance_km > config.short_max_km {
            DistanceRegime::Medium
        } else {
            DistanceRegime::Short
        }
    }
}

impl fmt::Display for DistanceRegime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DistanceRegime::Short => f.write_str("short"),
            DistanceRegime::Medium => f.write_str("medium"),
            DistanceRegime::Long => f.write_str("long"),
        }
    }
}
