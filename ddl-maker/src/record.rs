use crate::key::{ForeignKey, Index, PrimaryKey};

/// One struct field as seen by the generator.
///
/// Populated by `#[derive(Record)]`, or by hand through
/// [`RecordSchema::field`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescriptor {
    /// The field name as declared (`r#type` keeps its raw prefix).
    pub name: String,
    /// The semantic type token, e.g. `u64`, `Option<String>`, `chrono.NaiveDateTime`.
    pub type_name: String,
    /// The raw `#[ddl("...")]` tag, empty when absent.
    pub tag: String,
}

impl FieldDescriptor {
    pub fn new(name: impl Into<String>, type_name: impl Into<String>, tag: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
            tag: tag.into(),
        }
    }
}

/// Everything the generator needs to know about one record type.
///
/// This is an explicit configuration value: table-name override, primary
/// key, indexes and foreign keys are plain fields, set while building the
/// schema. The primary key is optional here only so that a missing one can be
/// reported as [`Error::MissingPrimaryKey`](crate::Error::MissingPrimaryKey)
/// during extraction.
///
/// # Example
///
/// ```rust
/// use ddl_maker::{Index, PrimaryKey, RecordSchema};
///
/// let schema = RecordSchema::new("app::Entry", "Entry")
///     .field("id", "i32", "auto")
///     .field("title", "String", "size=100")
///     .primary_key(PrimaryKey::new(["id"]))
///     .index(Index::plain("title_idx", ["title"]));
///
/// assert_eq!(schema.fields.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordSchema {
    /// Fully qualified type path, used to detect duplicate registration.
    pub type_path: String,
    /// The bare type name, snake-cased into the default table name.
    pub type_name: String,
    /// Fields in declaration order.
    pub fields: Vec<FieldDescriptor>,
    /// Table name override.
    pub table_name: Option<String>,
    pub primary_key: Option<PrimaryKey>,
    pub indexes: Vec<Index>,
    pub foreign_keys: Vec<ForeignKey>,
}

impl RecordSchema {
    /// Starts an empty schema for a type.
    pub fn new(type_path: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            type_path: type_path.into(),
            type_name: type_name.into(),
            fields: Vec::new(),
            table_name: None,
            primary_key: None,
            indexes: Vec::new(),
            foreign_keys: Vec::new(),
        }
    }

    /// Appends a field. Call order is column order.
    pub fn field(mut self, name: impl Into<String>, type_name: impl Into<String>, tag: impl Into<String>) -> Self {
        self.fields.push(FieldDescriptor::new(name, type_name, tag));
        self
    }

    /// Overrides the table name.
    pub fn table_name(mut self, name: impl Into<String>) -> Self {
        self.table_name = Some(name.into());
        self
    }

    pub fn primary_key(mut self, primary_key: PrimaryKey) -> Self {
        self.primary_key = Some(primary_key);
        self
    }

    pub fn index(mut self, index: Index) -> Self {
        self.indexes.push(index);
        self
    }

    pub fn foreign_key(mut self, foreign_key: ForeignKey) -> Self {
        self.foreign_keys.push(foreign_key);
        self
    }
}

/// A type that describes a table.
///
/// Usually implemented with `#[derive(Record)]`:
///
/// ```rust
/// use ddl_maker::Record;
///
/// #[derive(Record)]
/// #[ddl(table = "player", primary_key("id"))]
/// struct User {
///     #[ddl("auto")]
///     id: u64,
///     #[ddl("size=50")]
///     name: String,
/// }
///
/// let schema = User::schema();
/// assert_eq!(schema.table_name.as_deref(), Some("player"));
/// assert_eq!(schema.fields[0].type_name, "u64");
/// ```
pub trait Record {
    /// Returns the schema of this type.
    fn schema() -> RecordSchema;
}
