//! Building blocks shared by the regime synthesizers.

use crate::domain::{Coordinate, RouteLeg, TravelMode};

/// A named transit line with its display colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct Line {
    pub name: &'static str,
    pub color: &'static str,
}

pub(super) const SUBWAY_LINE_1: Line = Line {
    name: "1호선",
    color: "#0052A4",
};
pub(super) const SUBWAY_LINE_2: Line = Line {
    name: "2호선",
    color: "#00A84D",
};
pub(super) const SHINBUNDANG_LINE: Line = Line {
    name: "신분당선",
    color: "#D4003B",
};
pub(super) const EXPRESS_BUS: Line = Line {
    name: "9401",
    color: "#FF6B6B",
};
pub(super) const TRUNK_BUS: Line = Line {
    name: "146",
    color: "#33CC99",
};
pub(super) const BRANCH_BUS: Line = Line {
    name: "7016",
    color: "#5BB025",
};
pub(super) const KTX: Line = Line {
    name: "KTX",
    color: "#0052A4",
};
pub(super) const ITX: Line = Line {
    name: "ITX",
    color: "#0052A4",
};

/// Split `total` into `shares.len() + 1` parts.
///
/// Part `i` is `round(total * shares[i])`, capped so the running sum never
/// exceeds `total`; the last part takes whatever remains. The parts always
/// sum to exactly `total`.
pub(super) fn apportion(total: u32, shares: &[f64]) -> Vec<u32> {
    let mut remaining = total;
    let mut parts = Vec::with_capacity(shares.len() + 1);

    for share in shares {
        let part = ((total as f64 * share).round() as u32).min(remaining);
        remaining -= part;
        parts.push(part);
    }
    parts.push(remaining);

    parts
}

/// Round a non-negative quantity to whole units.
///
/// `as` saturates, so huge or NaN inputs cannot wrap.
pub(super) fn whole(value: f64) -> u32 {
    value.round() as u32
}

/// Chains legs from an origin to a destination.
///
/// Each intermediate stop is placed along the straight line between the
/// endpoints in proportion to the distance covered so far, and the next leg
/// starts exactly where the previous one ended.
pub(super) struct LegChain<'a> {
    origin: &'a Coordinate,
    destination: &'a Coordinate,
    total_m: u32,
    covered_m: u32,
    cursor: Coordinate,
    legs: Vec<RouteLeg>,
}

impl<'a> LegChain<'a> {
    pub fn new(origin: &'a Coordinate, destination: &'a Coordinate, total_m: u32) -> Self {
        Self {
            origin,
            destination,
            total_m,
            covered_m: 0,
            cursor: origin.clone(),
            legs: Vec::new(),
        }
    }

    /// Walk to an intermediate stop.
    pub fn walk(self, minutes: u32, meters: u32, instruction: &str, stop: &str) -> Self {
        self.push(TravelMode::Walk, None, minutes, meters, instruction, stop)
    }

    /// Ride a line to an intermediate stop.
    pub fn ride(
        self,
        mode: TravelMode,
        line: Line,
        minutes: u32,
        meters: u32,
        instruction: &str,
        stop: &str,
    ) -> Self {
        self.push(mode, Some(line), minutes, meters, instruction, stop)
    }

    /// Walk the last stretch to the destination and return the legs.
    pub fn walk_to_destination(
        mut self,
        minutes: u32,
        meters: u32,
        instruction: &str,
    ) -> Vec<RouteLeg> {
        let from = std::mem::replace(&mut self.cursor, self.destination.clone());
        self.legs.push(RouteLeg {
            mode: TravelMode::Walk,
            from,
            to: self.destination.clone(),
            duration: minutes,
            distance: meters,
            instruction: instruction.to_string(),
            line: None,
            line_color: None,
        });
        self.legs
    }

    fn push(
        mut self,
        mode: TravelMode,
        line: Option<Line>,
        minutes: u32,
        meters: u32,
        instruction: &str,
        stop: &str,
    ) -> Self {
        self.covered_m = self.covered_m.saturating_add(meters);
        let fraction = if self.total_m == 0 {
            0.0
        } else {
            (self.covered_m as f64 / self.total_m as f64).min(1.0)
        };
        let to = self.origin.towards(self.destination, fraction, stop);
        let from = std::mem::replace(&mut self.cursor, to.clone());

        self.legs.push(RouteLeg {
            mode,
            from,
            to,
            duration: minutes,
            distance: meters,
            instruction: instruction.to_string(),
            line: line.map(|l| l.name.to_string()),
            line_color: line.map(|l| l.color.to_string()),
        });
        self
    }
}
