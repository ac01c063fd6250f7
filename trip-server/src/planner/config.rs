//! Configuration for the route planner.

/// Distance thresholds that select the synthesis regime.
#[derive(Debug, Clone, PartialEq)]
pub struct PlannerConfig {
    /// Trips up to and including this distance use city transit (km).
    pub short_max_km: f64,

    /// Trips up to and including this distance use regional transit (km).
    /// Anything longer goes by intercity rail.
    pub medium_max_km: f64,
}

impl PlannerConfig {
    /// Create a new configuration with the given thresholds.
    pub fn new(short_max_km: f64, medium_max_km: f64) -> Self {
        Self {
            short_max_km,
            medium_max_km,
        }
    }
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            short_max_km: 10.0,
            medium_max_km: 100.0,
        }
    }
}
