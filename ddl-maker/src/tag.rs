//! # Tag Module
//!
//! Parser for the per-field tag micro-language carried by `#[ddl("...")]`.
//!
//! A tag is a comma separated list of `key` or `key=value` tokens:
//!
//! | Token              | Effect                                    |
//! |--------------------|-------------------------------------------|
//! | `size=<uint>`      | column length or fractional precision     |
//! | `null`             | column is `NULL` instead of `NOT NULL`    |
//! | `default=<literal>`| appends `DEFAULT <literal>`               |
//! | `auto`             | appends the dialect's auto-increment word |
//! | `type=<token>`     | replaces the field's inferred type token  |
//! | `-`                | excludes the field from the table         |
//!
//! Unknown keys are kept in the map and ignored by the column builder.

use std::collections::HashMap;

/// Tag token that excludes a field entirely.
pub const IGNORE_TAG: &str = "-";

/// Option keys understood by the column builder.
pub const SIZE: &str = "size";
pub const NULL: &str = "null";
pub const DEFAULT: &str = "default";
pub const AUTO: &str = "auto";
pub const TYPE: &str = "type";

/// Parsed tag options, option name to option value.
///
/// Flags such as `null` map to an empty value. When a key repeats, the last
/// occurrence wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagOptions {
    specs: HashMap<String, String>,
}

impl TagOptions {
    /// Parses a whitespace-free tag string.
    ///
    /// Elements with more than one `=` cannot be represented and are dropped;
    /// empty elements are skipped, so `""` parses to an empty map.
    pub fn parse(tag: &str) -> Self {
        let mut specs = HashMap::new();

        for elem in tag.split(',').filter(|elem| !elem.is_empty()) {
            let parts: Vec<&str> = elem.split('=').collect();
            match parts.as_slice() {
                [key] => {
                    specs.insert((*key).to_string(), String::new());
                }
                [key, value] => {
                    specs.insert((*key).to_string(), (*value).to_string());
                }
                _ => {}
            }
        }

        Self { specs }
    }

    /// Returns the value of `key`, `Some("")` for flags.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.specs.get(key).map(String::as_str)
    }

    /// Returns true when `key` is present, with or without a value.
    pub fn contains(&self, key: &str) -> bool {
        self.specs.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }

    /// The underlying map.
    pub fn as_map(&self) -> &HashMap<String, String> {
        &self.specs
    }
}

/// Removes every whitespace character from a raw tag.
pub fn normalize(tag: &str) -> String {
    tag.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Returns true when the exclusion token is one of the tag's top-level tokens.
pub fn is_ignored(tag: &str) -> bool {
    tag.split(',').any(|token| token == IGNORE_TAG)
}
