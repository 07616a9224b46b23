//! # Error Module
//!
//! Every failure the generator can report. Registration, extraction and
//! rendering all return [`Result`], and nothing in the library aborts the
//! process: the binary decides what to do with a failed run.

use std::{io, num::ParseIntError, path::PathBuf};

use thiserror::Error;

/// Errors produced while registering records, extracting tables or writing DDL.
#[derive(Debug, Error)]
pub enum Error {
    /// The driver identifier does not name a known dialect.
    #[error("no such driver: {0:?}")]
    UnknownDriver(String),

    /// The configuration is missing a required value.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// The same record type was registered twice.
    #[error("{0} is already added")]
    DuplicateRecord(String),

    /// Two indexes or two foreign keys of one record render to the same SQL.
    #[error("{record} declares the same {kind} twice: {sql}")]
    DuplicateKey {
        record: String,
        kind: &'static str,
        sql: String,
    },

    /// A record has no primary key.
    #[error("{0} does not declare a primary key")]
    MissingPrimaryKey(String),

    /// A field's type token has no entry in the dialect's type table.
    #[error("column {column}: type {type_name:?} is not mapped by the {dialect} dialect")]
    UnknownType {
        column: String,
        type_name: String,
        dialect: &'static str,
    },

    /// The `size` tag option is not an unsigned integer.
    ///
    /// `source` is `None` when the value is rejected for holding something
    /// other than ASCII digits, such as a sign.
    #[error("column {column}: invalid size {value:?}")]
    InvalidSize {
        column: String,
        value: String,
        #[source]
        source: Option<ParseIntError>,
    },

    /// The output file could not be created.
    #[error("error create ddl file {}", path.display())]
    CreateFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Writing a section of the output failed.
    #[error("error render {section}")]
    Render {
        section: &'static str,
        #[source]
        source: io::Error,
    },
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;
