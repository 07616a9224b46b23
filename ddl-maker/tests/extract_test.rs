use chrono::NaiveDateTime;
use ddl_maker::{
    dialect::MySql,
    extract::{self, extract_table},
    Error, Index, PrimaryKey, Record, RecordSchema,
};

#[allow(dead_code)]
#[derive(Record)]
#[ddl(table = "test1", primary_key("id", "created_at"))]
#[ddl(unique(name = "token_idx", columns("token")))]
#[ddl(foreign_key(columns("player_id"), references = "player", reference_columns("id")))]
struct T1 {
    #[ddl("auto")]
    id: u64,
    name: String,
    #[ddl("null,type=text")]
    description: Option<String>,
    created_at: NaiveDateTime,
    binary: Vec<u8>,
    #[ddl("-")]
    ignore: String,
}

#[test]
fn test_parse_table() -> Result<(), Box<dyn std::error::Error>> {
    let m = MySql::new("InnoDB", "utf8mb4");
    let table = extract_table(&T1::schema(), &m)?;

    assert_eq!(table.name(), "test1");
    assert_eq!(table.indexes().len(), 1);
    assert_eq!(table.primary_key().to_sql(&m), "PRIMARY KEY (`id`, `created_at`)");
    assert_eq!(
        table.foreign_keys()[0].to_sql(&m),
        "FOREIGN KEY (`player_id`) REFERENCES `player` (`id`)"
    );

    let columns: Vec<String> = table.columns().iter().map(|c| c.to_sql(&m)).collect();
    assert_eq!(
        columns,
        vec![
            "`id` BIGINT unsigned NOT NULL AUTO_INCREMENT",
            "`name` VARCHAR(191) NOT NULL",
            "`description` TEXT NULL",
            "`created_at` DATETIME NOT NULL",
            "`binary` VARBINARY(767) NOT NULL",
        ]
    );
    Ok(())
}

#[test]
fn test_table_name_defaults_to_snake_case() {
    let schema = RecordSchema::new("app::PlayerComment", "PlayerComment")
        .field("id", "i32", "")
        .primary_key(PrimaryKey::new(["id"]));
    assert_eq!(extract::table_name(&schema), "player_comment");

    let schema = schema.table_name("PlayerComments");
    assert_eq!(extract::table_name(&schema), "player_comments");
}

#[test]
fn test_column_names() {
    assert_eq!(extract::column_name("created_at"), "created_at");
    assert_eq!(extract::column_name("r#type"), "type");
    assert_eq!(extract::column_name("CreatedAt"), "created_at");
    assert_eq!(extract::column_name("_id"), "_id");
    assert_eq!(extract::column_name("__version"), "__version");
    assert_eq!(extract::column_name("type_"), "type_");
    assert_eq!(extract::column_name("r#_type"), "_type");
}

#[allow(dead_code)]
#[derive(Record)]
#[ddl(primary_key("_id"))]
#[ddl(index(name = "_ref_idx", columns("_ref")))]
struct Underscored {
    _id: u64,
    _ref: u64,
    r#type: String,
}

#[test]
fn test_underscored_columns_match_keys() -> Result<(), Box<dyn std::error::Error>> {
    let m = MySql::default();
    let table = extract_table(&Underscored::schema(), &m)?;

    let names: Vec<&str> = table.columns().iter().map(|c| c.name()).collect();
    assert_eq!(names, vec!["_id", "_ref", "type"]);
    assert_eq!(table.primary_key().to_sql(&m), "PRIMARY KEY (`_id`)");
    assert_eq!(table.indexes()[0].to_sql(&m), "INDEX `_ref_idx` (`_ref`)");
    Ok(())
}

#[test]
fn test_missing_primary_key() {
    let schema = RecordSchema::new("app::Orphan", "Orphan").field("id", "u64", "");
    let err = extract_table(&schema, &MySql::default()).unwrap_err();

    assert!(matches!(err, Error::MissingPrimaryKey(ref record) if record == "app::Orphan"));
}

#[test]
fn test_unknown_field_type() {
    let schema = RecordSchema::new("app::Session", "Session")
        .field("id", "u64", "")
        .field("token", "Uuid", "")
        .primary_key(PrimaryKey::new(["id"]));
    let err = extract_table(&schema, &MySql::default()).unwrap_err();

    assert!(matches!(err, Error::UnknownType { ref column, .. } if column == "token"));
}

#[test]
fn test_ignored_unknown_type_is_fine() -> Result<(), Box<dyn std::error::Error>> {
    let schema = RecordSchema::new("app::Session", "Session")
        .field("id", "u64", "")
        .field("token", "Uuid", " - ")
        .primary_key(PrimaryKey::new(["id"]));
    let table = extract_table(&schema, &MySql::default())?;

    assert_eq!(table.columns().len(), 1);
    Ok(())
}

#[test]
fn test_sorted_indexes() -> Result<(), Box<dyn std::error::Error>> {
    let m = MySql::default();
    let schema = RecordSchema::new("app::Entry", "Entry")
        .field("id", "u64", "")
        .primary_key(PrimaryKey::new(["id"]))
        .index(Index::unique("fuga_idx", ["fuga"]))
        .index(Index::plain("hoge_idx", ["hoge"]));
    let table = extract_table(&schema, &m)?;

    let sorted: Vec<String> = table.sorted_indexes(&m).iter().map(|i| i.to_sql(&m)).collect();
    assert_eq!(sorted, vec!["INDEX `hoge_idx` (`hoge`)", "UNIQUE `fuga_idx` (`fuga`)"]);

    // registration order is untouched
    assert_eq!(table.indexes()[0].name(), "fuga_idx");
    Ok(())
}
