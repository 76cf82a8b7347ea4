// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

use serde::Serialize;
use std::fmt;

use crate::DESTINATION_COUNT;

/// Kilometres per statute mile, applied to ranges tagged "imperial".
pub const KM_PER_MILE: f64 = 1.60934;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Aircraft {
    pub code: String,
    /// Always kilometres, whatever unit the source row used.
    pub range_km: f64,
}

impl Aircraft {
    /// Builds an aircraft from a raw range and its unit tag.
    pub fn from_raw(code: &str, range_raw: f64, units: &str) -> Self {
        let range_km = if units.trim().eq_ignore_ascii_case("imperial") {
            range_raw * KM_PER_MILE
        } else {
            range_raw
        };
        Self {
            code: code.to_string(),
            range_km,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Airport {
    pub code: String,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub country: String,
    pub currency_code: String,
    /// Multiplier from `currency_code` to Euro.
    pub to_euro_rate: f64,
}

/// One routing request: a fixed home, four stops and the aircraft flying them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    pub home: String,
    pub destinations: [String; DESTINATION_COUNT],
    pub aircraft: String,
}

impl Query {
    pub fn new(home: &str, destinations: [&str; DESTINATION_COUNT], aircraft: &str) -> Self {
        Self {
            home: home.to_string(),
            destinations: destinations.map(|d| d.to_string()),
            aircraft: aircraft.to_string(),
        }
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} [{}] ({})",
            self.home,
            self.destinations.join(", "),
            self.aircraft
        )
    }
}

/// A single directed segment of an itinerary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Leg {
    pub from: String,
    pub to: String,
    pub distance_km: f64,
    /// Priced at the departure airport's Euro rate.
    pub cost_eur: f64,
}

/// The winning itinerary for a query.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteReport {
    pub home: Airport,
    pub ordering: Vec<Airport>,
    pub aircraft: Aircraft,
    pub total_cost_eur: f64,
    pub legs: Vec<Leg>,
    pub evaluated: usize,
    pub feasible: usize,
}

impl RouteReport {
    /// Codes of the closed cycle, home first and last.
    pub fn route_codes(&self) -> Vec<&str> {
        let mut codes = Vec::with_capacity(self.ordering.len() + 2);
        codes.push(self.home.code.as_str());
        codes.extend(self.ordering.iter().map(|a| a.code.as_str()));
        codes.push(self.home.code.as_str());
        codes
    }
}

impl fmt::Display for RouteReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} : EUR {:.2}",
            self.route_codes().join(" -> "),
            self.total_cost_eur
        )
    }
}
