//! # Dialect Module
//!
//! A dialect is the policy for one target database: how field types map to
//! column types, how identifiers are quoted, and what the output file looks
//! like around and inside each `CREATE TABLE`.
//!
//! Dialects are resolved by driver identifier through [`new`].

pub mod mysql;

use std::{fmt, io};

use crate::{
    error::{Error, Result},
    key::{ForeignKey, Index, PrimaryKey},
    table::Table,
};

pub use mysql::MySql;

// ============================================================================
// Dialect Trait
// ============================================================================

/// The policy for one target database.
///
/// Implementations hold only immutable configuration (engine, character set),
/// so the same input always renders to the same bytes.
pub trait Dialect: fmt::Debug {
    /// Driver identifier, e.g. `mysql`.
    fn name(&self) -> &'static str;

    /// Storage engine written into every table.
    fn engine(&self) -> &str;

    /// Default character set written into every table.
    fn charset(&self) -> &str;

    /// Maps a semantic type token and size to a column type.
    ///
    /// `size` is 0 when the tag does not set one. Returns `None` for a token
    /// the dialect does not know.
    fn column_type(&self, type_name: &str, size: u64) -> Option<String>;

    /// Quotes an identifier.
    fn quote(&self, ident: &str) -> String;

    /// The keyword appended to auto-increment columns.
    fn auto_increment(&self) -> &'static str;

    fn primary_key_sql(&self, primary_key: &PrimaryKey) -> String;

    fn index_sql(&self, index: &Index) -> String;

    fn foreign_key_sql(&self, foreign_key: &ForeignKey) -> String;

    /// Text written once before the first table.
    fn header_template(&self) -> &'static str;

    /// Text written once after the last table.
    fn footer_template(&self) -> &'static str;

    /// Writes the `DROP TABLE` / `CREATE TABLE` block of one table.
    fn write_table(&self, w: &mut dyn io::Write, table: &Table) -> io::Result<()>;
}

// ============================================================================
// Registry
// ============================================================================

/// Driver identifiers accepted by [`new`].
pub const DRIVERS: &[&str] = &[mysql::DRIVER];

/// Resolves a driver identifier to a dialect.
///
/// # Errors
///
/// [`Error::UnknownDriver`] for anything other than a supported identifier.
///
/// # Example
///
/// ```rust
/// let dialect = ddl_maker::dialect::new("mysql", "InnoDB", "utf8mb4").unwrap();
/// assert_eq!(dialect.quote("id"), "`id`");
///
/// assert!(ddl_maker::dialect::new("oracle", "", "").is_err());
/// ```
pub fn new(driver: &str, engine: &str, charset: &str) -> Result<Box<dyn Dialect>> {
    match driver {
        mysql::DRIVER => Ok(Box::new(MySql::new(engine, charset))),
        _ => Err(Error::UnknownDriver(driver.to_string())),
    }
}
