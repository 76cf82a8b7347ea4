// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

use log::warn;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::model::Query;
use crate::{DataError, RouteError, DESTINATION_COUNT};

/// Fields per query row: home, the destinations, then the aircraft.
pub const QUERY_FIELDS: usize = DESTINATION_COUNT + 2;

pub struct QueryParser;

impl QueryParser {
    pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Vec<Result<Query, RouteError>>, DataError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(DataError::MissingFile(path.to_path_buf()));
        }
        let file = File::open(path)?;
        Self::parse(file).map_err(|source| DataError::Csv {
            path: path.to_path_buf(),
            source,
        })
    }

    /// One entry per non-empty row, in file order. Rows are numbered by file line.
    ///
    /// Rows with the wrong number of fields become `MalformedQuery` so that the
    /// caller can report them in place without dropping the rest of the batch.
    pub fn parse<R: Read>(reader: R) -> Result<Vec<Result<Query, RouteError>>, csv::Error> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut queries = Vec::new();
        for (i, record) in rdr.records().enumerate() {
            let record = record?;
            let row = record
                .position()
                .map(|p| p.line() as usize)
                .unwrap_or(i + 1);

            if record.iter().all(|f| f.is_empty()) {
                continue;
            }

            if record.len() != QUERY_FIELDS {
                warn!(
                    "Malformed query row — row={} fields={} expected={}",
                    row,
                    record.len(),
                    QUERY_FIELDS
                );
                queries.push(Err(RouteError::MalformedQuery {
                    row,
                    reason: format!("expected {} fields, found {}", QUERY_FIELDS, record.len()),
                }));
                continue;
            }

            if let Some(col) = record.iter().position(|f| f.is_empty()) {
                queries.push(Err(RouteError::MalformedQuery {
                    row,
                    reason: format!("empty code in column {}", col + 1),
                }));
                continue;
            }

            let destinations: [&str; DESTINATION_COUNT] =
                std::array::from_fn(|d| &record[d + 1]);
            queries.push(Ok(Query::new(
                &record[0],
                destinations,
                &record[QUERY_FIELDS - 1],
            )));
        }
        Ok(queries)
    }
}
