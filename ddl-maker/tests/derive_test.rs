use std::{borrow::Cow, rc::Rc, sync::Arc};

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use ddl_maker::{ForeignKey, Index, PrimaryKey, Record, ReferentialAction};

#[allow(dead_code)]
#[derive(Record)]
#[ddl(table = "test1", primary_key("id", "created_at"))]
#[ddl(unique(name = "token_idx", columns("token")))]
#[ddl(foreign_key(
    columns("player_id"),
    references = "player",
    reference_columns("id"),
    on_update = "no action",
    on_delete = "no action"
))]
struct T1 {
    #[ddl("auto")]
    id: u64,
    name: String,
    #[ddl("null, type=text")]
    description: Option<String>,
    created_at: NaiveDateTime,
    binary: Vec<u8>,
    #[ddl("-")]
    ignore: String,
}

#[allow(dead_code)]
#[derive(Record)]
#[ddl(primary_key("id"))]
struct Spellings<'a> {
    id: u64,
    boxed: Box<u64>,
    optional: Option<i32>,
    nested: Option<Box<i64>>,
    rc: Rc<String>,
    arc: Arc<str>,
    borrowed: &'a str,
    cow: Cow<'a, str>,
    bytes: &'a [u8],
    boxed_bytes: Box<[u8]>,
    array: [u8; 16],
    utc: DateTime<Utc>,
    qualified: chrono::NaiveDateTime,
    date: NaiveDate,
    json: serde_json::Value,
    full: std::string::String,
    r#type: String,
}

#[test]
fn test_fields_in_declaration_order() {
    let schema = T1::schema();

    let fields: Vec<(&str, &str, &str)> = schema
        .fields
        .iter()
        .map(|f| (f.name.as_str(), f.type_name.as_str(), f.tag.as_str()))
        .collect();

    assert_eq!(
        fields,
        vec![
            ("id", "u64", "auto"),
            ("name", "String", ""),
            ("description", "Option<String>", "null, type=text"),
            ("created_at", "NaiveDateTime", ""),
            ("binary", "[]u8", ""),
            ("ignore", "String", "-"),
        ]
    );
}

#[test]
fn test_table_attributes() {
    let schema = T1::schema();

    assert_eq!(schema.type_name, "T1");
    assert!(schema.type_path.ends_with("::T1"));
    assert_eq!(schema.table_name.as_deref(), Some("test1"));
    assert_eq!(schema.primary_key, Some(PrimaryKey::new(["id", "created_at"])));
    assert_eq!(schema.indexes, vec![Index::unique("token_idx", ["token"])]);
    assert_eq!(
        schema.foreign_keys,
        vec![ForeignKey::new(["player_id"], "player", ["id"])
            .on_update(ReferentialAction::NoAction)
            .on_delete(ReferentialAction::NoAction)]
    );
}

#[test]
fn test_type_tokens() {
    let schema = Spellings::schema();
    let tokens: Vec<&str> = schema.fields.iter().map(|f| f.type_name.as_str()).collect();

    assert_eq!(
        tokens,
        vec![
            "u64",
            "*u64",
            "Option<i32>",
            "Option<*i64>",
            "*String",
            "*str",
            "*str",
            "*str",
            "[]u8",
            "[]u8",
            "[]u8",
            "DateTime",
            "chrono.NaiveDateTime",
            "NaiveDate",
            "serde_json.Value",
            "std.String",
            "String",
        ]
    );
    assert_eq!(schema.fields.last().map(|f| f.name.as_str()), Some("r#type"));
}

#[allow(dead_code)]
#[derive(Record)]
#[ddl(primary_key("id"))]
#[ddl(index(name = "title_idx", columns("title")))]
#[ddl(fulltext(name = "body_idx", columns("title", "body"), parser = "ngram"))]
#[ddl(spatial(name = "location_idx", columns("location")))]
#[ddl(foreign_key(columns("author_id"), references = "author", reference_columns("id"), on_delete = "cascade"))]
struct Article {
    id: u32,
    author_id: u64,
    title: String,
    #[ddl("type=longtext")]
    body: String,
    #[ddl("type=geometry")]
    location: Vec<u8>,
}

#[test]
fn test_index_kinds() {
    let schema = Article::schema();

    assert_eq!(schema.table_name, None);
    assert_eq!(
        schema.indexes,
        vec![
            Index::plain("title_idx", ["title"]),
            Index::full_text("body_idx", ["title", "body"]).with_parser("ngram"),
            Index::spatial("location_idx", ["location"]),
        ]
    );
    assert_eq!(schema.foreign_keys[0].delete_action(), Some(ReferentialAction::Cascade));
    assert_eq!(schema.foreign_keys[0].update_action(), None);
}

#[allow(dead_code)]
#[derive(Record)]
struct NoKey {
    id: u64,
}

#[test]
fn test_missing_primary_key_attribute() {
    assert_eq!(NoKey::schema().primary_key, None);
}

#[allow(dead_code)]
#[derive(Record)]
#[ddl(primary_key("id"))]
struct Primitives {
    id: std::primitive::u64,
    flag: core::primitive::bool,
    score: Option<std::primitive::f64>,
}

#[test]
fn test_primitive_paths() {
    let tokens: Vec<String> = Primitives::schema().fields.into_iter().map(|f| f.type_name).collect();
    assert_eq!(tokens, vec!["u64", "bool", "Option<f64>"]);
}
