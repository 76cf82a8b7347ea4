// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

use crate::geo::distance_km;
use crate::model::{Aircraft, Airport, Leg};

/// A scored candidate ordering of the destinations.
#[derive(Debug, Clone, PartialEq)]
pub struct Itinerary {
    pub ordering: Vec<Airport>,
    pub legs: Vec<Leg>,
    /// Euro, rounded to cents once over the whole cycle.
    pub total_cost: f64,
    /// False when any leg is longer than the aircraft's range.
    pub feasible: bool,
}

/// Scores the closed cycle `home -> ordering... -> home`.
///
/// Each leg costs its distance times the departure airport's Euro rate.
/// Out-of-range legs clear `feasible` but are still summed into the cost.
/// A leg whose distance is not a finite number is treated as out of range.
pub fn evaluate(home: &Airport, ordering: &[Airport], aircraft: &Aircraft) -> Itinerary {
    let stops: Vec<&Airport> = std::iter::once(home)
        .chain(ordering.iter())
        .chain(std::iter::once(home))
        .collect();

    let mut legs = Vec::with_capacity(stops.len() - 1);
    let mut total = 0.0;
    let mut feasible = true;

    for pair in stops.windows(2) {
        let (from, to) = (pair[0], pair[1]);
        let distance = distance_km(from, to);
        let cost = distance * from.to_euro_rate;
        if !distance.is_finite() || distance > aircraft.range_km {
            feasible = false;
        }
        total += cost;
        legs.push(Leg {
            from: from.code.clone(),
            to: to.code.clone(),
            distance_km: distance,
            cost_eur: cost,
        });
    }

    Itinerary {
        ordering: ordering.to_vec(),
        legs,
        total_cost: round_cents(total),
        feasible,
    }
}

/// Rounds to two decimals, with exact halves going away from zero.
pub fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
