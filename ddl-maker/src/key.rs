//! # Key Module
//!
//! Primary keys, secondary indexes and foreign keys. These are plain values:
//! column lists keep the order the caller gave, which is the SQL column
//! order. Rendering goes through a [`Dialect`].

use std::fmt;

use crate::dialect::Dialect;

// ============================================================================
// Primary Key
// ============================================================================

/// The primary key of a table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrimaryKey {
    columns: Vec<String>,
}

impl PrimaryKey {
    pub fn new<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { columns: columns.into_iter().map(Into::into).collect() }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Renders e.g. ``PRIMARY KEY (`id`, `created_at`)``.
    pub fn to_sql(&self, dialect: &dyn Dialect) -> String {
        dialect.primary_key_sql(self)
    }
}

// ============================================================================
// Indexes
// ============================================================================

/// The kind of a secondary index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IndexKind {
    /// `INDEX`
    Plain,
    /// `UNIQUE`
    Unique,
    /// `FULLTEXT`, optionally `WITH PARSER`
    FullText,
    /// `SPATIAL KEY`
    Spatial,
}

impl IndexKind {
    /// Name used in error messages.
    pub fn label(self) -> &'static str {
        match self {
            IndexKind::Plain => "index",
            IndexKind::Unique => "unique index",
            IndexKind::FullText => "fulltext index",
            IndexKind::Spatial => "spatial index",
        }
    }
}

/// A named secondary index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Index {
    kind: IndexKind,
    name: String,
    columns: Vec<String>,
    parser: Option<String>,
}

impl Index {
    fn with_kind<I, S>(kind: IndexKind, name: impl Into<String>, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            kind,
            name: name.into(),
            columns: columns.into_iter().map(Into::into).collect(),
            parser: None,
        }
    }

    /// A plain `INDEX`.
    pub fn plain<I, S>(name: impl Into<String>, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_kind(IndexKind::Plain, name, columns)
    }

    pub fn unique<I, S>(name: impl Into<String>, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_kind(IndexKind::Unique, name, columns)
    }

    pub fn full_text<I, S>(name: impl Into<String>, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_kind(IndexKind::FullText, name, columns)
    }

    pub fn spatial<I, S>(name: impl Into<String>, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_kind(IndexKind::Spatial, name, columns)
    }

    /// Sets the full-text parser. Only rendered for full-text indexes.
    pub fn with_parser(mut self, parser: impl Into<String>) -> Self {
        self.parser = Some(parser.into());
        self
    }

    pub fn kind(&self) -> IndexKind {
        self.kind
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn parser(&self) -> Option<&str> {
        self.parser.as_deref()
    }

    /// Renders e.g. ``UNIQUE `token_idx` (`token`)``.
    pub fn to_sql(&self, dialect: &dyn Dialect) -> String {
        dialect.index_sql(self)
    }
}

// ============================================================================
// Foreign Keys
// ============================================================================

/// Referential action of an `ON DELETE` / `ON UPDATE` clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReferentialAction {
    Cascade,
    SetNull,
    Restrict,
    NoAction,
    SetDefault,
}

impl ReferentialAction {
    pub fn as_sql(self) -> &'static str {
        match self {
            ReferentialAction::Cascade => "CASCADE",
            ReferentialAction::SetNull => "SET NULL",
            ReferentialAction::Restrict => "RESTRICT",
            ReferentialAction::NoAction => "NO ACTION",
            ReferentialAction::SetDefault => "SET DEFAULT",
        }
    }

    /// Parses a case-insensitive SQL spelling such as `set null`.
    pub fn parse(action: &str) -> Option<Self> {
        match action.trim().to_uppercase().as_str() {
            "CASCADE" => Some(ReferentialAction::Cascade),
            "SET NULL" => Some(ReferentialAction::SetNull),
            "RESTRICT" => Some(ReferentialAction::Restrict),
            "NO ACTION" => Some(ReferentialAction::NoAction),
            "SET DEFAULT" => Some(ReferentialAction::SetDefault),
            _ => None,
        }
    }

    /// `RESTRICT` and `NO ACTION` are what the server does without a clause.
    fn is_default(self) -> bool {
        matches!(self, ReferentialAction::Restrict | ReferentialAction::NoAction)
    }
}

impl fmt::Display for ReferentialAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_sql())
    }
}

/// A foreign key constraint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForeignKey {
    foreign_columns: Vec<String>,
    reference_table: String,
    reference_columns: Vec<String>,
    on_update: Option<ReferentialAction>,
    on_delete: Option<ReferentialAction>,
}

impl ForeignKey {
    /// `foreign_columns` of this table reference `reference_columns` of `reference_table`.
    pub fn new<F, R, S, T>(foreign_columns: F, reference_table: impl Into<String>, reference_columns: R) -> Self
    where
        F: IntoIterator<Item = S>,
        S: Into<String>,
        R: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self {
            foreign_columns: foreign_columns.into_iter().map(Into::into).collect(),
            reference_table: reference_table.into(),
            reference_columns: reference_columns.into_iter().map(Into::into).collect(),
            on_update: None,
            on_delete: None,
        }
    }

    /// Sets the `ON UPDATE` action. `RESTRICT` and `NO ACTION` clear it.
    pub fn on_update(mut self, action: ReferentialAction) -> Self {
        self.on_update = Some(action).filter(|a| !a.is_default());
        self
    }

    /// Sets the `ON DELETE` action. `RESTRICT` and `NO ACTION` clear it.
    pub fn on_delete(mut self, action: ReferentialAction) -> Self {
        self.on_delete = Some(action).filter(|a| !a.is_default());
        self
    }

    pub fn foreign_columns(&self) -> &[String] {
        &self.foreign_columns
    }

    pub fn reference_table(&self) -> &str {
        &self.reference_table
    }

    pub fn reference_columns(&self) -> &[String] {
        &self.reference_columns
    }

    pub fn update_action(&self) -> Option<ReferentialAction> {
        self.on_update
    }

    pub fn delete_action(&self) -> Option<ReferentialAction> {
        self.on_delete
    }

    /// Renders e.g. ``FOREIGN KEY (`player_id`) REFERENCES `player` (`id`) ON DELETE CASCADE``.
    pub fn to_sql(&self, dialect: &dyn Dialect) -> String {
        dialect.foreign_key_sql(self)
    }
}
