use std::io::Write;

use crate::{
    dialect::Dialect,
    error::{Error, Result},
    table::Table,
};

/// Writes header, every table in order, then footer.
///
/// Nothing is rolled back on failure: whatever reached `w` before the error
/// stays there.
pub fn render<W: Write>(w: &mut W, dialect: &dyn Dialect, tables: &[Table]) -> Result<()> {
    w.write_all(dialect.header_template().as_bytes())
        .map_err(|source| Error::Render { section: "header", source })?;

    for table in tables {
        dialect
            .write_table(w, table)
            .map_err(|source| Error::Render { section: "table", source })?;
    }

    w.write_all(dialect.footer_template().as_bytes())
        .map_err(|source| Error::Render { section: "footer", source })?;

    w.flush().map_err(|source| Error::Render { section: "flush", source })
}
