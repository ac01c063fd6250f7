//! Trip cost breakdown.

use serde::Serialize;

use crate::domain::{RouteOption, StepDetails};

use super::error::CostError;
use super::rates::CostRates;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TransportationCost {
    pub bus: u64,
    pub subway: u64,
    pub train: u64,
    pub taxi: u64,
    pub total: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FoodCost {
    pub breakfast: u64,
    pub lunch: u64,
    pub dinner: u64,
    pub snacks: u64,
    pub total: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActivitiesCost {
    pub admission: u64,
    pub experiences: u64,
    pub souvenirs: u64,
    pub total: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccommodationCost {
    pub nights: u32,
    pub price_per_night: u32,
    pub total: u64,
}

/// Estimated cost of a whole trip, in won.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CostBreakdown {
    pub transportation: TransportationCost,
    pub food: FoodCost,
    pub activities: ActivitiesCost,
    /// Absent for day trips
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accommodation: Option<AccommodationCost>,
    pub total: u64,
}

/// Sum of the fares of every transit step for one traveller.
pub fn route_fare(option: &RouteOption) -> u64 {
    option
        .steps
        .iter()
        .filter_map(|step| step.details.fare())
        .map(u64::from)
        .sum()
}

/// Estimate the cost of taking `option` with `participants` people for `days` days.
pub fn estimate_cost(
    option: &RouteOption,
    participants: u32,
    days: u32,
    rates: &CostRates,
) -> Result<CostBreakdown, CostError> {
    if participants == 0 {
        return Err(CostError::InvalidParty);
    }
    if days == 0 {
        return Err(CostError::InvalidDuration);
    }

    let people = u64::from(participants);
    let person_days = people * u64::from(days);

    let transportation = transportation(option, people);

    let per_day = |rate: u32| u64::from(rate) * person_days;
    let food = FoodCost {
        breakfast: per_day(rates.breakfast),
        lunch: per_day(rates.lunch),
        dinner: per_day(rates.dinner),
        snacks: per_day(rates.snacks),
        total: rates.food_per_person_day() * person_days,
    };

    let per_person = |rate: u32| u64::from(rate) * people;
    let activities = ActivitiesCost {
        admission: per_person(rates.admission),
        experiences: per_person(rates.experiences),
        souvenirs: per_person(rates.souvenirs),
        total: rates.activities_per_person() * people,
    };

    let accommodation = (days > 1).then(|| {
        let nights = days - 1;
        AccommodationCost {
            nights,
            price_per_night: rates.accommodation_per_night,
            total: u64::from(rates.accommodation_per_night) * u64::from(nights),
        }
    });

    let total = transportation.total
        + food.total
        + activities.total
        + accommodation.as_ref().map_or(0, |a| a.total);

    Ok(CostBreakdown {
        transportation,
        food,
        activities,
        accommodation,
        total,
    })
}

fn transportation(option: &RouteOption, people: u64) -> TransportationCost {
    let mut cost = TransportationCost::default();
    for step in &option.steps {
        let fare = u64::from(step.details.fare().unwrap_or(0)) * people;
        match step.details {
            StepDetails::Bus { .. } => cost.bus += fare,
            StepDetails::Subway { .. } => cost.subway += fare,
            StepDetails::Train { .. } => cost.train += fare,
            StepDetails::Walk { .. } => {}
        }
    }
    cost.total = route_fare(option) * people;
    cost
}
