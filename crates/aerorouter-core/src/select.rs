// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

use crate::evaluate::Itinerary;

/// Index of the cheapest feasible itinerary.
///
/// Ties keep the earliest one, so the result follows enumeration order.
/// Itineraries with a non-finite total are never chosen.
/// Returns `None` when nothing qualifies.
pub fn select_cheapest(itineraries: &[Itinerary]) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (i, it) in itineraries.iter().enumerate() {
        if !it.feasible || !it.total_cost.is_finite() {
            continue;
        }
        match best {
            Some((_, cost)) if it.total_cost >= cost => {}
            _ => best = Some((i, it.total_cost)),
        }
    }
    best.map(|(i, _)| i)
}
