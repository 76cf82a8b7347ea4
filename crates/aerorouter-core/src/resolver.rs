// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

use log::debug;
use std::collections::HashMap;

use crate::model::{Aircraft, Airport};
use crate::reference::ReferenceData;
use crate::{EntityKind, RouteError};

/// Resolved entities for the lifetime of a routing session.
///
/// Entries are only ever added, and only once fully built.
#[derive(Debug, Default, Clone)]
pub struct EntityCache {
    aircraft: HashMap<String, Aircraft>,
    airports: HashMap<String, Airport>,
}

impl EntityCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn aircraft(&self, code: &str) -> Option<&Aircraft> {
        self.aircraft.get(code)
    }

    pub fn airport(&self, code: &str) -> Option<&Airport> {
        self.airports.get(code)
    }

    pub fn aircraft_len(&self) -> usize {
        self.aircraft.len()
    }

    pub fn airport_len(&self) -> usize {
        self.airports.len()
    }

    fn insert_aircraft(&mut self, aircraft: Aircraft) {
        self.aircraft
            .entry(aircraft.code.clone())
            .or_insert(aircraft);
    }

    fn insert_airport(&mut self, airport: Airport) {
        self.airports.entry(airport.code.clone()).or_insert(airport);
    }
}

/// Builds `Aircraft` and `Airport` values from reference lookups, caching each one.
pub struct EntityResolver<R> {
    data: R,
    cache: EntityCache,
}

impl<R: ReferenceData> EntityResolver<R> {
    pub fn new(data: R) -> Self {
        Self {
            data,
            cache: EntityCache::new(),
        }
    }

    pub fn cache(&self) -> &EntityCache {
        &self.cache
    }

    pub fn resolve_aircraft(&mut self, code: &str) -> Result<Aircraft, RouteError> {
        if let Some(hit) = self.cache.aircraft(code) {
            debug!("Aircraft cache hit — code={}", code);
            return Ok(hit.clone());
        }

        let record = self
            .data
            .lookup_aircraft(code)
            .ok_or_else(|| RouteError::NotFound {
                kind: EntityKind::Aircraft,
                code: code.to_string(),
            })?;
        let aircraft = Aircraft::from_raw(&record.code, record.range_raw, &record.units);

        debug!(
            "Aircraft resolved — code={} range_km={}",
            aircraft.code, aircraft.range_km
        );
        self.cache.insert_aircraft(aircraft.clone());
        Ok(aircraft)
    }

    /// Airport record, then the country's currency, then that currency's Euro rate.
    ///
    /// A missing airport row is `NotFound`; a missing currency or rate is
    /// `IncompleteAirport`. Nothing is cached on failure.
    pub fn resolve_airport(&mut self, code: &str) -> Result<Airport, RouteError> {
        if let Some(hit) = self.cache.airport(code) {
            debug!("Airport cache hit — code={}", code);
            return Ok(hit.clone());
        }

        let record = self
            .data
            .lookup_airport(code)
            .ok_or_else(|| RouteError::NotFound {
                kind: EntityKind::Airport,
                code: code.to_string(),
            })?;

        let currency_code = self
            .data
            .lookup_currency_for_country(&record.country)
            .ok_or_else(|| RouteError::IncompleteAirport {
                code: code.to_string(),
                reason: format!("no currency for country '{}'", record.country),
            })?;

        let to_euro_rate = self.data.lookup_euro_rate(currency_code).ok_or_else(|| {
            RouteError::IncompleteAirport {
                code: code.to_string(),
                reason: format!("no Euro rate for currency '{}'", currency_code),
            }
        })?;

        let airport = Airport {
            code: record.code.clone(),
            name: record.name.clone(),
            latitude: record.latitude,
            longitude: record.longitude,
            country: record.country.clone(),
            currency_code: currency_code.to_string(),
            to_euro_rate,
        };

        debug!(
            "Airport resolved — code={} currency={} to_euro={}",
            airport.code, airport.currency_code, airport.to_euro_rate
        );
        self.cache.insert_airport(airport.clone());
        Ok(airport)
    }
}
