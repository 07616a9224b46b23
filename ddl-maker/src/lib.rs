//! # ddl-maker
//!
//! Generates `CREATE TABLE` DDL from Rust record declarations.
//!
//! Records describe their fields through `#[derive(Record)]`; per-field
//! `#[ddl("...")]` tags control size, nullability, defaults, auto-increment,
//! type overrides and exclusion, and struct-level `#[ddl(...)]` attributes
//! declare the table name, primary key, indexes and foreign keys.
//!
//! ```rust
//! use ddl_maker::{Config, DdlMaker, Record};
//!
//! #[derive(Record)]
//! #[ddl(primary_key("id"))]
//! struct Bookmark {
//!     #[ddl("auto")]
//!     id: u64,
//!     #[ddl("size=255")]
//!     url: String,
//! }
//!
//! let mut maker = DdlMaker::new(Config::new("", "mysql", "InnoDB", "utf8mb4")).unwrap();
//! maker.add::<Bookmark>().unwrap();
//!
//! let mut out = Vec::new();
//! maker.generate_to(&mut out).unwrap();
//! let sql = String::from_utf8(out).unwrap();
//! assert!(sql.contains("`url` VARCHAR(255) NOT NULL,"));
//! ```

extern crate self as ddl_maker;

pub mod column;
pub mod config;
pub mod dialect;
pub mod error;
pub mod extract;
pub mod key;
pub mod maker;
pub mod record;
pub mod render;
pub mod table;
pub mod tag;

pub use column::Column;
pub use config::{Config, DbConfig};
pub use dialect::Dialect;
pub use error::{Error, Result};
pub use key::{ForeignKey, Index, IndexKind, PrimaryKey, ReferentialAction};
pub use maker::DdlMaker;
pub use record::{FieldDescriptor, Record, RecordSchema};
pub use table::Table;
pub use tag::TagOptions;

pub use ddl_maker_macro::Record;
