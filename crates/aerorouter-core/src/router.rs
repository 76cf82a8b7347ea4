// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

use log::{debug, info, warn};
use std::collections::HashSet;

use crate::evaluate::{evaluate, Itinerary};
use crate::geo::distance_km;
use crate::model::{Query, RouteReport};
use crate::permute::permutations;
use crate::reference::ReferenceData;
use crate::resolver::{EntityCache, EntityResolver};
use crate::select::select_cheapest;
use crate::RouteError;

/// Result of one query in a batch.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryOutcome {
    pub query: Option<Query>,
    pub result: Result<RouteReport, RouteError>,
}

/// Answers routing queries against one set of reference tables.
///
/// Resolved aircraft and airports are shared by every query the router runs.
pub struct Router<R> {
    resolver: EntityResolver<R>,
}

impl<R: ReferenceData> Router<R> {
    pub fn new(data: R) -> Self {
        Self {
            resolver: EntityResolver::new(data),
        }
    }

    pub fn cache(&self) -> &EntityCache {
        self.resolver.cache()
    }

    /// Cheapest feasible round trip for `query`.
    pub fn plan(&mut self, query: &Query) -> Result<RouteReport, RouteError> {
        let mut seen = HashSet::new();
        for code in std::iter::once(&query.home).chain(query.destinations.iter()) {
            if !seen.insert(code.as_str()) {
                return Err(RouteError::DuplicateAirport(code.clone()));
            }
        }

        let aircraft = self.resolver.resolve_aircraft(&query.aircraft)?;
        let home = self.resolver.resolve_airport(&query.home)?;
        let destinations = query
            .destinations
            .iter()
            .map(|code| self.resolver.resolve_airport(code))
            .collect::<Result<Vec<_>, _>>()?;

        let mut itineraries: Vec<Itinerary> = permutations(&destinations)
            .iter()
            .map(|ordering| evaluate(&home, ordering, &aircraft))
            .collect();

        for it in &itineraries {
            debug!(
                "Scored {} -> {} — cost={:.2} feasible={}",
                home.code,
                it.ordering
                    .iter()
                    .map(|a| a.code.as_str())
                    .collect::<Vec<_>>()
                    .join(" -> "),
                it.total_cost,
                it.feasible
            );
        }

        let feasible = itineraries.iter().filter(|it| it.feasible).count();
        let best = select_cheapest(&itineraries).ok_or_else(|| RouteError::NoFeasibleRoute {
            home: home.code.clone(),
            aircraft: aircraft.code.clone(),
        })?;
        let evaluated = itineraries.len();
        let winner = itineraries.swap_remove(best);

        Ok(RouteReport {
            home,
            ordering: winner.ordering,
            aircraft,
            total_cost_eur: winner.total_cost,
            legs: winner.legs,
            evaluated,
            feasible,
        })
    }

    /// Plans every query in order. A failing query is recorded and skipped.
    pub fn run_batch<I>(&mut self, queries: I) -> Vec<QueryOutcome>
    where
        I: IntoIterator<Item = Result<Query, RouteError>>,
    {
        let mut outcomes = Vec::new();
        for (i, query) in queries.into_iter().enumerate() {
            let outcome = match query {
                Ok(q) => {
                    let result = self.plan(&q);
                    QueryOutcome {
                        query: Some(q),
                        result,
                    }
                }
                Err(e) => QueryOutcome {
                    query: None,
                    result: Err(e),
                },
            };
            if let Err(e) = &outcome.result {
                warn!("Query {} failed: {}", i + 1, e);
            }
            outcomes.push(outcome);
        }

        let succeeded = outcomes.iter().filter(|o| o.result.is_ok()).count();
        info!(
            "Batch complete — queries={} succeeded={} cached_airports={} cached_aircraft={}",
            outcomes.len(),
            succeeded,
            self.cache().airport_len(),
            self.cache().aircraft_len()
        );
        outcomes
    }

    /// Great-circle kilometres between two airports.
    pub fn distance_between(&mut self, from: &str, to: &str) -> Result<f64, RouteError> {
        let a = self.resolver.resolve_airport(from)?;
        let b = self.resolver.resolve_airport(to)?;
        Ok(distance_km(&a, &b))
    }
}
