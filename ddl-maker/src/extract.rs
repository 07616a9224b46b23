//! # Extract Module
//!
//! The extraction pass: registered [`RecordSchema`]s in, [`Table`]s out.

use heck::ToSnakeCase;
use log::debug;

use crate::{
    column::Column,
    dialect::Dialect,
    error::{Error, Result},
    record::{FieldDescriptor, RecordSchema},
    table::Table,
    tag,
};

/// Extracts every schema, keeping input order.
///
/// Stops at the first failing record.
pub fn extract_tables(schemas: &[RecordSchema], dialect: &dyn Dialect) -> Result<Vec<Table>> {
    schemas.iter().map(|schema| extract_table(schema, dialect)).collect()
}

/// Extracts one table.
///
/// Columns follow field order; fields tagged `-` are dropped. The table name
/// is the snake-cased override, or the snake-cased type name.
///
/// # Errors
///
/// [`Error::MissingPrimaryKey`] when the schema has no primary key, plus any
/// column error from [`Column::build`].
pub fn extract_table(schema: &RecordSchema, dialect: &dyn Dialect) -> Result<Table> {
    let mut columns = Vec::with_capacity(schema.fields.len());
    for field in &schema.fields {
        match extract_column(field, dialect)? {
            Some(column) => columns.push(column),
            None => debug!("{}: skip ignored field {}", schema.type_path, field.name),
        }
    }

    let primary_key = schema
        .primary_key
        .clone()
        .ok_or_else(|| Error::MissingPrimaryKey(schema.type_path.clone()))?;

    let name = table_name(schema);
    debug!("{} -> table {} ({} columns)", schema.type_path, name, columns.len());

    Ok(Table::new(
        name,
        primary_key,
        schema.indexes.clone(),
        schema.foreign_keys.clone(),
        columns,
    ))
}

/// Builds the column of one field, `None` when the field is excluded.
pub fn extract_column(field: &FieldDescriptor, dialect: &dyn Dialect) -> Result<Option<Column>> {
    let tag = tag::normalize(&field.tag);
    Column::build(&column_name(&field.name), &field.type_name, &tag, dialect)
}

/// The table name of a schema.
pub fn table_name(schema: &RecordSchema) -> String {
    schema.table_name.as_deref().unwrap_or(&schema.type_name).to_snake_case()
}

/// Column name of a field: raw-identifier prefix removed, snake-cased.
///
/// Leading and trailing underscores are kept, so `_id` stays `_id` and keys
/// naming it still match.
pub fn column_name(field_name: &str) -> String {
    let name = field_name.strip_prefix("r#").unwrap_or(field_name);
    let core = name.trim_matches('_');
    if core.is_empty() {
        return name.to_string();
    }

    let start = name.len() - name.trim_start_matches('_').len();
    let end = start + core.len();
    format!("{}{}{}", &name[..start], core.to_snake_case(), &name[end..])
}
