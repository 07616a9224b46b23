//! # Column Module
//!
//! Turns one field (name, type token, tag) into a column definition.

use crate::{
    dialect::Dialect,
    error::{Error, Result},
    tag::{self, TagOptions},
};

/// A column definition, ready to render.
///
/// The SQL type is resolved when the column is built, so an unmapped type
/// token fails early instead of at render time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    name: String,
    sql_type: String,
    nullable: bool,
    default: Option<String>,
    auto_increment: bool,
}

impl Column {
    /// Builds a column from a field.
    ///
    /// `tag` must already be whitespace free. Returns `Ok(None)` when the tag
    /// excludes the field with `-`; that is a normal skip, not an error.
    ///
    /// # Errors
    ///
    /// * [`Error::InvalidSize`] when `size` is not an unsigned integer.
    /// * [`Error::UnknownType`] when the dialect has no mapping for the type.
    pub fn build(name: &str, type_name: &str, tag: &str, dialect: &dyn Dialect) -> Result<Option<Self>> {
        if tag::is_ignored(tag) {
            return Ok(None);
        }

        let specs = TagOptions::parse(tag);

        let size = match specs.get(tag::SIZE) {
            None | Some("") => 0,
            Some(value) => parse_size(name, value)?,
        };

        let type_name = specs.get(tag::TYPE).unwrap_or(type_name);
        let sql_type = dialect.column_type(type_name, size).ok_or_else(|| Error::UnknownType {
            column: name.to_string(),
            type_name: type_name.to_string(),
            dialect: dialect.name(),
        })?;

        Ok(Some(Self {
            name: name.to_string(),
            sql_type,
            nullable: specs.contains(tag::NULL),
            default: specs.get(tag::DEFAULT).map(str::to_string),
            auto_increment: specs.contains(tag::AUTO),
        }))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The rendered SQL type, e.g. `VARCHAR(191)`.
    pub fn sql_type(&self) -> &str {
        &self.sql_type
    }

    pub fn is_nullable(&self) -> bool {
        self.nullable
    }

    pub fn default_value(&self) -> Option<&str> {
        self.default.as_deref()
    }

    pub fn is_auto_increment(&self) -> bool {
        self.auto_increment
    }

    /// The attribute clause, e.g. `NOT NULL DEFAULT 0`.
    pub fn attribute(&self, dialect: &dyn Dialect) -> String {
        let mut attributes = vec![if self.nullable { "NULL" } else { "NOT NULL" }];

        if let Some(default) = &self.default {
            attributes.push("DEFAULT");
            attributes.push(default);
        }

        if self.auto_increment {
            attributes.push(dialect.auto_increment());
        }

        attributes.join(" ")
    }

    /// Renders the column definition without trailing punctuation,
    /// e.g. `` `id` BIGINT unsigned NOT NULL AUTO_INCREMENT``.
    pub fn to_sql(&self, dialect: &dyn Dialect) -> String {
        format!("{} {} {}", dialect.quote(&self.name), self.sql_type, self.attribute(dialect))
    }
}

/// Digits only: `u64::from_str` would also take a leading `+`.
fn parse_size(column: &str, value: &str) -> Result<u64> {
    let invalid = |source| Error::InvalidSize {
        column: column.to_string(),
        value: value.to_string(),
        source,
    };

    if !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid(None));
    }
    value.parse::<u64>().map_err(|e| invalid(Some(e)))
}
