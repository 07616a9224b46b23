//! Records written to the generated DDL file. They are only ever described,
//! never constructed.

#![allow(dead_code)]

use chrono::{DateTime, NaiveDateTime, Utc};
use ddl_maker::Record;

#[derive(Record, Debug, Clone)]
#[ddl(table = "player", primary_key("id"))]
pub struct User {
    pub id: u64,
    pub name: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Record, Debug, Clone)]
#[ddl(primary_key("id", "created_at"))]
#[ddl(unique(name = "created_at_uniq_idx", columns("created_at")))]
#[ddl(index(name = "title_idx", columns("title")))]
#[ddl(index(name = "created_at_idx", columns("created_at")))]
pub struct Entry {
    #[ddl("auto")]
    pub id: i32,
    #[ddl("size=100")]
    pub title: String,
    #[ddl("default=0")]
    pub public: bool,
    #[ddl("null,type=text")]
    pub content: Option<String>,
    #[ddl("null")]
    pub metadata: Option<serde_json::Value>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Record, Debug, Clone)]
#[ddl(primary_key("id"))]
#[ddl(index(name = "player_id_entry_id_idx", columns("player_id", "entry_id")))]
#[ddl(foreign_key(columns("player_id"), references = "player", reference_columns("id"), on_delete = "CASCADE"))]
pub struct PlayerComment {
    #[ddl("auto,size=100")]
    pub id: i32,
    pub player_id: u64,
    pub entry_id: i32,
    #[ddl("null,size=99")]
    pub comment: Option<String>,
    #[ddl("-")]
    pub created_at: DateTime<Utc>,
    #[ddl("size=6")]
    pub updated_at: DateTime<Utc>,
}

#[derive(Record, Debug, Clone)]
#[ddl(primary_key("id"))]
#[ddl(unique(name = "user_id_entry_id", columns("user_id", "entry_id")))]
pub struct Bookmark {
    #[ddl("size=100")]
    pub id: i32,
    pub user_id: i32,
    pub entry_id: i32,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}
