//! # Config Module
//!
//! Settings for one generator run: which dialect to emit, the storage engine
//! and character set written into every table, and where the file goes.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Top-level settings for a [`DdlMaker`](crate::DdlMaker).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Path of the `.sql` file written by `generate`.
    pub out_file_path: PathBuf,
    /// Target database settings.
    pub db: DbConfig,
}

/// Target database settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DbConfig {
    /// Dialect identifier, e.g. `mysql`.
    pub driver: String,
    /// Storage engine, e.g. `InnoDB`.
    pub engine: String,
    /// Default character set, e.g. `utf8mb4`.
    pub charset: String,
}

impl Config {
    /// Builds a config from its four values.
    pub fn new(
        out_file_path: impl Into<PathBuf>,
        driver: impl Into<String>,
        engine: impl Into<String>,
        charset: impl Into<String>,
    ) -> Self {
        Self {
            out_file_path: out_file_path.into(),
            db: DbConfig {
                driver: driver.into(),
                engine: engine.into(),
                charset: charset.into(),
            },
        }
    }

    /// Rejects empty values.
    ///
    /// `DdlMaker::new` only needs a known driver; command-line entry points
    /// call this first so a missing flag is reported by name.
    pub fn validate(&self) -> Result<()> {
        let required = [
            ("driver", self.db.driver.as_str()),
            ("engine", self.db.engine.as_str()),
            ("charset", self.db.charset.as_str()),
        ];

        for (name, value) in required {
            if value.trim().is_empty() {
                return Err(Error::Config(format!("{name} must not be empty")));
            }
        }

        if self.out_file_path.as_os_str().is_empty() {
            return Err(Error::Config("out_file_path must not be empty".to_string()));
        }

        Ok(())
    }
}
