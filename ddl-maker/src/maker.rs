//! # Maker Module
//!
//! [`DdlMaker`] is the entry point: it resolves the dialect, collects record
//! registrations and writes the DDL file.

use std::{
    collections::HashSet,
    fs::{self, File},
    io::{BufWriter, Write},
};

use log::{debug, info};

use crate::{
    config::Config,
    dialect::{self, Dialect},
    error::{Error, Result},
    extract,
    record::{Record, RecordSchema},
    render,
    table::Table,
};

/// Collects records and generates their DDL.
///
/// Records are emitted in the order they were added.
///
/// # Example
///
/// ```rust,ignore
/// let mut maker = DdlMaker::new(Config::new("./sql/master.sql", "mysql", "InnoDB", "utf8mb4"))?;
/// maker.add::<User>()?.add::<Entry>()?;
/// maker.generate()?;
/// ```
#[derive(Debug)]
pub struct DdlMaker {
    config: Config,
    dialect: Box<dyn Dialect>,
    records: Vec<RecordSchema>,
    type_paths: HashSet<String>,
}

impl DdlMaker {
    /// Creates a maker for the configured driver.
    ///
    /// # Errors
    ///
    /// [`Error::UnknownDriver`] when `config.db.driver` names no dialect.
    pub fn new(config: Config) -> Result<Self> {
        let dialect = dialect::new(&config.db.driver, &config.db.engine, &config.db.charset)?;

        Ok(Self {
            config,
            dialect,
            records: Vec::new(),
            type_paths: HashSet::new(),
        })
    }

    /// Registers a record type.
    ///
    /// # Errors
    ///
    /// See [`DdlMaker::add_schema`].
    pub fn add<T: Record>(&mut self) -> Result<&mut Self> {
        self.add_schema(T::schema())
    }

    /// Registers a record schema.
    ///
    /// # Errors
    ///
    /// * [`Error::DuplicateRecord`] when the same type path was added before.
    /// * [`Error::DuplicateKey`] when two indexes, or two foreign keys, render
    ///   to the same SQL.
    pub fn add_schema(&mut self, schema: RecordSchema) -> Result<&mut Self> {
        if self.type_paths.contains(&schema.type_path) {
            return Err(Error::DuplicateRecord(schema.type_path));
        }
        self.check_keys(&schema)?;

        debug!("add record {}", schema.type_path);
        self.type_paths.insert(schema.type_path.clone());
        self.records.push(schema);
        Ok(self)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn dialect(&self) -> &dyn Dialect {
        self.dialect.as_ref()
    }

    /// Registered schemas in registration order.
    pub fn records(&self) -> &[RecordSchema] {
        &self.records
    }

    /// Runs the extraction pass over every registered record.
    pub fn parse(&self) -> Result<Vec<Table>> {
        extract::extract_tables(&self.records, self.dialect())
    }

    /// Writes the DDL file to `config.out_file_path`.
    ///
    /// Every table is extracted before the file is created, so a bad record
    /// leaves no file behind. Missing parent directories are created.
    pub fn generate(&self) -> Result<()> {
        let path = &self.config.out_file_path;
        info!("start generate {}", path.display());

        let tables = self.parse()?;

        let create_error = |source| Error::CreateFile { path: path.clone(), source };
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(create_error)?;
        }
        let file = File::create(path).map_err(create_error)?;

        let mut w = BufWriter::new(file);
        render::render(&mut w, self.dialect(), &tables)?;

        info!("done generate {}", path.display());
        Ok(())
    }

    /// Writes the DDL to any sink instead of the configured file.
    pub fn generate_to<W: Write>(&self, w: &mut W) -> Result<()> {
        let tables = self.parse()?;
        render::render(w, self.dialect(), &tables)
    }

    fn check_keys(&self, schema: &RecordSchema) -> Result<()> {
        let duplicate = |kind, sql| Error::DuplicateKey {
            record: schema.type_path.clone(),
            kind,
            sql,
        };

        let mut seen = HashSet::new();
        for index in &schema.indexes {
            let sql = index.to_sql(self.dialect());
            if !seen.insert(sql.clone()) {
                return Err(duplicate(index.kind().label(), sql));
            }
        }

        seen.clear();
        for foreign_key in &schema.foreign_keys {
            let sql = foreign_key.to_sql(self.dialect());
            if !seen.insert(sql.clone()) {
                return Err(duplicate("foreign key", sql));
            }
        }

        Ok(())
    }
}
