//! Per-person and per-night rates, in won.

/// Rates used by the cost estimator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CostRates {
    /// Per person per day
    pub breakfast: u32,
    pub lunch: u32,
    pub dinner: u32,
    pub snacks: u32,

    /// Per person per trip
    pub admission: u32,
    pub experiences: u32,
    pub souvenirs: u32,

    /// Per night, for the whole party
    pub accommodation_per_night: u32,
}

impl CostRates {
    /// Food cost for one person for one day.
    pub fn food_per_person_day(&self) -> u64 {
        [self.breakfast, self.lunch, self.dinner, self.snacks]
            .into_iter()
            .map(u64::from)
            .sum()
    }

    /// Activity cost for one person over the trip.
    pub fn activities_per_person(&self) -> u64 {
        [self.admission, self.experiences, self.souvenirs]
            .into_iter()
            .map(u64::from)
            .sum()
    }
}

impl Default for CostRates {
    fn default() -> Self {
        Self {
            breakfast: 8_000,
            lunch: 12_000,
            dinner: 15_000,
            snacks: 5_000,
            admission: 10_000,
            experiences: 5_000,
            souvenirs: 20_000,
            accommodation_per_night: 80_000,
        }
    }
}
