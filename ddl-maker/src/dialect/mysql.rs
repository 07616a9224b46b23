//! # MySQL Dialect
//!
//! Type table, backtick quoting and templates for MySQL / MariaDB.

use std::io;

use crate::{
    dialect::Dialect,
    key::{ForeignKey, Index, IndexKind, PrimaryKey},
    table::Table,
};

/// Driver identifier of this dialect.
pub const DRIVER: &str = "mysql";

/// `VARCHAR` width when the tag does not set a size.
pub const DEFAULT_VARCHAR_SIZE: u64 = 191;

/// `VARBINARY` width when the tag does not set a size.
pub const DEFAULT_VARBINARY_SIZE: u64 = 767;

const AUTO_INCREMENT: &str = "AUTO_INCREMENT";

const HEADER: &str = "SET foreign_key_checks=0;\n";

const FOOTER: &str = "SET foreign_key_checks=1;\n";

const INDENT: &str = "    ";

/// The MySQL dialect.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MySql {
    engine: String,
    charset: String,
}

impl MySql {
    pub fn new(engine: impl Into<String>, charset: impl Into<String>) -> Self {
        Self {
            engine: engine.into(),
            charset: charset.into(),
        }
    }
}

impl Dialect for MySql {
    fn name(&self) -> &'static str {
        DRIVER
    }

    fn engine(&self) -> &str {
        &self.engine
    }

    fn charset(&self) -> &str {
        &self.charset
    }

    fn column_type(&self, type_name: &str, size: u64) -> Option<String> {
        let sql = match underlying(type_name) {
            "i8" => "TINYINT",
            "i16" => "SMALLINT",
            "i32" => "INTEGER",
            "i64" => "BIGINT",
            "u8" => "TINYINT unsigned",
            "u16" => "SMALLINT unsigned",
            "u32" => "INTEGER unsigned",
            "u64" => "BIGINT unsigned",
            "f32" => "FLOAT",
            "f64" => "DOUBLE",
            "bool" => "TINYINT(1)",
            "String" | "str" | "std.String" => return Some(varchar(size)),
            "[]u8" => return Some(varbinary(size)),
            "tinytext" => "TINYTEXT",
            "text" => "TEXT",
            "mediumtext" => "MEDIUMTEXT",
            "longtext" => "LONGTEXT",
            "tinyblob" => "TINYBLOB",
            "blob" => "BLOB",
            "mediumblob" => "MEDIUMBLOB",
            "longblob" => "LONGBLOB",
            "time" | "NaiveTime" | "chrono.NaiveTime" | "time.Time" => "TIME",
            "date" | "NaiveDate" | "chrono.NaiveDate" | "time.Date" => "DATE",
            "datetime"
            | "NaiveDateTime"
            | "chrono.NaiveDateTime"
            | "DateTime"
            | "chrono.DateTime"
            | "PrimitiveDateTime"
            | "time.PrimitiveDateTime"
            | "OffsetDateTime"
            | "time.OffsetDateTime"
            | "SystemTime"
            | "std.SystemTime" => return Some(datetime(size)),
            "json" | "serde_json.Value" | "serde_json.RawValue" | "RawValue" => "JSON",
            "geometry" => "GEOMETRY",
            _ => return None,
        };

        Some(sql.to_string())
    }

    fn quote(&self, ident: &str) -> String {
        quote(ident)
    }

    fn auto_increment(&self) -> &'static str {
        AUTO_INCREMENT
    }

    fn primary_key_sql(&self, primary_key: &PrimaryKey) -> String {
        format!("PRIMARY KEY ({})", quote_all(primary_key.columns()))
    }

    fn index_sql(&self, index: &Index) -> String {
        let keyword = match index.kind() {
            IndexKind::Plain => "INDEX",
            IndexKind::Unique => "UNIQUE",
            IndexKind::FullText => "FULLTEXT",
            IndexKind::Spatial => "SPATIAL KEY",
        };

        let mut sql = format!("{} {} ({})", keyword, quote(index.name()), quote_all(index.columns()));

        if index.kind() == IndexKind::FullText
            && let Some(parser) = index.parser().filter(|p| !p.is_empty())
        {
            sql.push_str(&format!(" WITH PARSER {}", quote(parser)));
        }

        sql
    }

    fn foreign_key_sql(&self, foreign_key: &ForeignKey) -> String {
        let mut sql = format!(
            "FOREIGN KEY ({}) REFERENCES {} ({})",
            quote_all(foreign_key.foreign_columns()),
            quote(foreign_key.reference_table()),
            quote_all(foreign_key.reference_columns()),
        );

        if let Some(action) = foreign_key.delete_action() {
            sql.push_str(&format!(" ON DELETE {action}"));
        }
        if let Some(action) = foreign_key.update_action() {
            sql.push_str(&format!(" ON UPDATE {action}"));
        }

        sql
    }

    fn header_template(&self) -> &'static str {
        HEADER
    }

    fn footer_template(&self) -> &'static str {
        FOOTER
    }

    fn write_table(&self, w: &mut dyn io::Write, table: &Table) -> io::Result<()> {
        let name = quote(table.name());

        write!(w, "\nDROP TABLE IF EXISTS {name};\n\n")?;
        writeln!(w, "CREATE TABLE {name} (")?;

        for column in table.columns() {
            writeln!(w, "{INDENT}{},", column.to_sql(self))?;
        }
        for index in table.sorted_indexes(self) {
            writeln!(w, "{INDENT}{},", index.to_sql(self))?;
        }
        for foreign_key in table.sorted_foreign_keys(self) {
            writeln!(w, "{INDENT}{},", foreign_key.to_sql(self))?;
        }
        writeln!(w, "{INDENT}{}", table.primary_key().to_sql(self))?;

        write!(w, ") ENGINE={} DEFAULT CHARACTER SET {};\n\n", self.engine, self.charset)
    }
}

/// Strips pointer (`*T`) and nullable (`Option<T>`) spellings down to the
/// underlying token.
fn underlying(mut token: &str) -> &str {
    loop {
        if let Some(inner) = token.strip_prefix('*') {
            token = inner;
        } else if let Some(inner) = token.strip_prefix("Option<").and_then(|t| t.strip_suffix('>')) {
            token = inner;
        } else {
            return token;
        }
    }
}

fn varchar(size: u64) -> String {
    format!("VARCHAR({})", if size == 0 { DEFAULT_VARCHAR_SIZE } else { size })
}

fn varbinary(size: u64) -> String {
    format!("VARBINARY({})", if size == 0 { DEFAULT_VARBINARY_SIZE } else { size })
}

fn datetime(size: u64) -> String {
    if size == 0 {
        "DATETIME".to_string()
    } else {
        format!("DATETIME({size})")
    }
}

fn quote(ident: &str) -> String {
    format!("`{ident}`")
}

fn quote_all(idents: &[String]) -> String {
    idents.iter().map(|ident| quote(ident)).collect::<Vec<_>>().join(", ")
}
