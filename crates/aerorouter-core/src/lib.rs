// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

pub mod config;
pub mod evaluate;
pub mod geo;
pub mod model;
pub mod permute;
pub mod query;
pub mod reference;
pub mod resolver;
pub mod router;
pub mod select;

pub use config::RouterConfig;
pub use model::{Aircraft, Airport, Query, RouteReport};
pub use reference::{ReferenceData, ReferenceTables};
pub use resolver::{EntityCache, EntityResolver};
pub use router::{QueryOutcome, Router};

use std::path::PathBuf;
use thiserror::Error;

/// Number of destinations visited by every query (home excluded).
pub const DESTINATION_COUNT: usize = 4;

/// Errors raised while loading reference tables or configuration.
#[derive(Error, Debug)]
pub enum DataError {
    #[error("Reference file not found: {0}")]
    MissingFile(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV error in {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("Invalid config {path}: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// What kind of code failed to resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Aircraft,
    Airport,
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntityKind::Aircraft => write!(f, "aircraft"),
            EntityKind::Airport => write!(f, "airport"),
        }
    }
}

/// Per-query failures. None of these abort a batch.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RouteError {
    #[error("{kind} code not found: {code}")]
    NotFound { kind: EntityKind, code: String },
    #[error("Airport {code} is incomplete: {reason}")]
    IncompleteAirport { code: String, reason: String },
    #[error("No feasible route from {home} with aircraft {aircraft}")]
    NoFeasibleRoute { home: String, aircraft: String },
    #[error("Airport {0} appears more than once in the query")]
    DuplicateAirport(String),
    #[error("Malformed query at row {row}: {reason}")]
    MalformedQuery { row: usize, reason: String },
}

/// Platform data directory used when neither a flag nor the environment names one.
pub fn default_data_dir() -> PathBuf {
    directories::ProjectDirs::from("org", "aerorouter", "AeroRouter")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}
