// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::DataError;

/// Optional overrides file looked up inside the data directory.
pub const CONFIG_FILE_NAME: &str = "aerorouter.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RouterConfig {
    pub data_dir: PathBuf,
    pub aircraft_file: String,
    pub airport_file: String,
    pub currency_file: String,
    pub rates_file: String,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("."),
            aircraft_file: "aircraft.csv".to_string(),
            airport_file: "airport.csv".to_string(),
            currency_file: "countrycurrency.csv".to_string(),
            rates_file: "currencyrates.csv".to_string(),
        }
    }
}

impl RouterConfig {
    /// Defaults for `data_dir`, overlaid with `aerorouter.json` if it exists there.
    ///
    /// The data directory itself always comes from the argument, never the file.
    pub fn load<P: AsRef<Path>>(data_dir: P) -> Result<Self, DataError> {
        let data_dir = data_dir.as_ref().to_path_buf();
        let path = data_dir.join(CONFIG_FILE_NAME);

        let mut config = if path.exists() {
            let content = fs::read_to_string(&path)?;
            serde_json::from_str::<RouterConfig>(&content)
                .map_err(|source| DataError::Config { path, source })?
        } else {
            Self::default()
        };
        config.data_dir = data_dir;
        Ok(config)
    }

    pub fn aircraft_path(&self) -> PathBuf {
        self.data_dir.join(&self.aircraft_file)
    }

    pub fn airport_path(&self) -> PathBuf {
        self.data_dir.join(&self.airport_file)
    }

    pub fn currency_path(&self) -> PathBuf {
        self.data_dir.join(&self.currency_file)
    }

    pub fn rates_path(&self) -> PathBuf {
        self.data_dir.join(&self.rates_file)
    }
}
