// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

//! Reference tables: aircraft, airports, country currencies and Euro rates.
//!
//! Each table is read once from CSV and indexed by its key. When a key
//! repeats, the first row wins.

use log::{debug, info, warn};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::config::RouterConfig;
use crate::DataError;

/// Lookups the resolver needs. Every method answers `None` for a miss.
pub trait ReferenceData {
    fn lookup_aircraft(&self, code: &str) -> Option<&AircraftRecord>;
    fn lookup_airport(&self, code: &str) -> Option<&AirportRecord>;
    /// Case-insensitive on the country name.
    fn lookup_currency_for_country(&self, country: &str) -> Option<&str>;
    fn lookup_euro_rate(&self, currency_code: &str) -> Option<f64>;
}

impl<T: ReferenceData + ?Sized> ReferenceData for &T {
    fn lookup_aircraft(&self, code: &str) -> Option<&AircraftRecord> {
        (**self).lookup_aircraft(code)
    }

    fn lookup_airport(&self, code: &str) -> Option<&AirportRecord> {
        (**self).lookup_airport(code)
    }

    fn lookup_currency_for_country(&self, country: &str) -> Option<&str> {
        (**self).lookup_currency_for_country(country)
    }

    fn lookup_euro_rate(&self, currency_code: &str) -> Option<f64> {
        (**self).lookup_euro_rate(currency_code)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AircraftRecord {
    pub code: String,
    pub range_raw: f64,
    pub units: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AirportRecord {
    pub code: String,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub country: String,
}

/// A CSV row whose numeric columns must all be finite.
trait TableRow: DeserializeOwned {
    /// Name of the first column holding NaN or an infinity.
    fn non_finite_column(&self) -> Option<&'static str>;
}

fn first_non_finite(columns: &[(&'static str, f64)]) -> Option<&'static str> {
    columns
        .iter()
        .find(|(_, value)| !value.is_finite())
        .map(|(name, _)| *name)
}

#[derive(Debug, Deserialize)]
struct AircraftRow {
    code: String,
    units: String,
    range: f64,
}

#[derive(Debug, Deserialize)]
struct AirportRow {
    name: String,
    country: String,
    iata: String,
    latitude: f64,
    longitude: f64,
}

#[derive(Debug, Deserialize)]
struct CountryCurrencyRow {
    name: String,
    currency_alphabetic_code: String,
}

#[derive(Debug, Deserialize)]
struct RateRow {
    code: String,
    #[serde(rename = "toEuro")]
    to_euro: f64,
}

impl TableRow for AircraftRow {
    fn non_finite_column(&self) -> Option<&'static str> {
        first_non_finite(&[("range", self.range)])
    }
}

impl TableRow for AirportRow {
    fn non_finite_column(&self) -> Option<&'static str> {
        first_non_finite(&[("latitude", self.latitude), ("longitude", self.longitude)])
    }
}

impl TableRow for CountryCurrencyRow {
    fn non_finite_column(&self) -> Option<&'static str> {
        None
    }
}

impl TableRow for RateRow {
    fn non_finite_column(&self) -> Option<&'static str> {
        first_non_finite(&[("toEuro", self.to_euro)])
    }
}

#[derive(Debug, Default, Clone)]
pub struct ReferenceTables {
    aircraft: HashMap<String, AircraftRecord>,
    airports: HashMap<String, AirportRecord>,
    currencies: HashMap<String, String>,
    rates: HashMap<String, f64>,
}

impl ReferenceTables {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads all four tables from the directory named by `config`.
    pub fn load(config: &RouterConfig) -> Result<Self, DataError> {
        let mut tables = Self::new();

        for row in read_table::<AircraftRow>(&config.aircraft_path())? {
            tables.insert_aircraft(AircraftRecord {
                code: row.code,
                range_raw: row.range,
                units: row.units,
            });
        }
        for row in read_table::<AirportRow>(&config.airport_path())? {
            tables.insert_airport(AirportRecord {
                code: row.iata,
                name: row.name,
                latitude: row.latitude,
                longitude: row.longitude,
                country: row.country,
            });
        }
        for row in read_table::<CountryCurrencyRow>(&config.currency_path())? {
            tables.insert_currency(&row.name, &row.currency_alphabetic_code);
        }
        for row in read_table::<RateRow>(&config.rates_path())? {
            tables.insert_rate(&row.code, row.to_euro);
        }

        info!(
            "Reference tables loaded — aircraft={} airports={} countries={} rates={} data_dir={}",
            tables.aircraft.len(),
            tables.airports.len(),
            tables.currencies.len(),
            tables.rates.len(),
            config.data_dir.display()
        );
        Ok(tables)
    }

    /// Returns false if the code was already present; the earlier row is kept.
    pub fn insert_aircraft(&mut self, record: AircraftRecord) -> bool {
        insert_first(&mut self.aircraft, record.code.clone(), record)
    }

    pub fn insert_airport(&mut self, record: AirportRecord) -> bool {
        insert_first(&mut self.airports, record.code.clone(), record)
    }

    pub fn insert_currency(&mut self, country: &str, currency_code: &str) -> bool {
        insert_first(
            &mut self.currencies,
            country_key(country),
            currency_code.trim().to_string(),
        )
    }

    pub fn insert_rate(&mut self, currency_code: &str, to_euro: f64) -> bool {
        insert_first(&mut self.rates, currency_code.trim().to_string(), to_euro)
    }

    pub fn aircraft_count(&self) -> usize {
        self.aircraft.len()
    }

    pub fn airport_count(&self) -> usize {
        self.airports.len()
    }
}

impl ReferenceData for ReferenceTables {
    fn lookup_aircraft(&self, code: &str) -> Option<&AircraftRecord> {
        self.aircraft.get(code)
    }

    fn lookup_airport(&self, code: &str) -> Option<&AirportRecord> {
        self.airports.get(code)
    }

    fn lookup_currency_for_country(&self, country: &str) -> Option<&str> {
        self.currencies
            .get(&country_key(country))
            .map(|c| c.as_str())
            .filter(|c| !c.is_empty())
    }

    fn lookup_euro_rate(&self, currency_code: &str) -> Option<f64> {
        self.rates.get(currency_code).copied()
    }
}

fn country_key(country: &str) -> String {
    country.trim().to_uppercase()
}

fn insert_first<V>(map: &mut HashMap<String, V>, key: String, value: V) -> bool {
    if map.contains_key(&key) {
        debug!("Duplicate reference key ignored — key={}", key);
        return false;
    }
    map.insert(key, value);
    true
}

fn read_table<T: TableRow>(path: &Path) -> Result<Vec<T>, DataError> {
    if !path.exists() {
        return Err(DataError::MissingFile(path.to_path_buf()));
    }
    let file = File::open(path)?;
    read_rows(file, path)
}

/// Deserializes every row, skipping (and logging) the ones that do not fit `T`
/// or carry a non-finite number.
fn read_rows<T: TableRow, R: Read>(reader: R, path: &Path) -> Result<Vec<T>, DataError> {
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut rows = Vec::new();
    for (i, result) in rdr.deserialize::<T>().enumerate() {
        // +2: one for the header, one for 1-based numbering
        let row_number = i + 2;
        match result {
            Ok(row) => match row.non_finite_column() {
                Some(column) => warn!(
                    "Skipping row with non-finite value — file={} row={} column={}",
                    path.display(),
                    row_number,
                    column
                ),
                None => rows.push(row),
            },
            Err(e) if e.is_io_error() => {
                return Err(DataError::Csv {
                    path: path.to_path_buf(),
                    source: e,
                });
            }
            Err(e) => {
                warn!(
                    "Skipping unreadable row — file={} row={} error={}",
                    path.display(),
                    row_number,
                    e
                );
            }
        }
    }
    debug!("Read table — file={} rows={}", path.display(), rows.len());
    Ok(rows)
}
