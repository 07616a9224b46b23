use crate::{
    column::Column,
    dialect::Dialect,
    key::{ForeignKey, Index, PrimaryKey},
};

/// One table, ready to render.
///
/// Columns keep field declaration order. Indexes and foreign keys keep
/// registration order here; [`Table::sorted_indexes`] and
/// [`Table::sorted_foreign_keys`] give the order they are emitted in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    name: String,
    primary_key: PrimaryKey,
    indexes: Vec<Index>,
    foreign_keys: Vec<ForeignKey>,
    columns: Vec<Column>,
}

impl Table {
    pub fn new(
        name: impl Into<String>,
        primary_key: PrimaryKey,
        indexes: Vec<Index>,
        foreign_keys: Vec<ForeignKey>,
        columns: Vec<Column>,
    ) -> Self {
        Self {
            name: name.into(),
            primary_key,
            indexes,
            foreign_keys,
            columns,
        }
    }

    /// The unquoted table name.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn primary_key(&self) -> &PrimaryKey {
        &self.primary_key
    }

    pub fn indexes(&self) -> &[Index] {
        &self.indexes
    }

    pub fn foreign_keys(&self) -> &[ForeignKey] {
        &self.foreign_keys
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Indexes ordered by their rendered SQL, byte-wise ascending.
    pub fn sorted_indexes(&self, dialect: &dyn Dialect) -> Vec<&Index> {
        sort_by_sql(&self.indexes, |index| index.to_sql(dialect))
    }

    /// Foreign keys ordered by their rendered SQL, byte-wise ascending.
    pub fn sorted_foreign_keys(&self, dialect: &dyn Dialect) -> Vec<&ForeignKey> {
        sort_by_sql(&self.foreign_keys, |fk| fk.to_sql(dialect))
    }
}

fn sort_by_sql<T>(items: &[T], to_sql: impl Fn(&T) -> String) -> Vec<&T> {
    let mut sorted: Vec<&T> = items.iter().collect();
    sorted.sort_by_cached_key(|item| to_sql(item));
    sorted
}
