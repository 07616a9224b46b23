//! # ddl-maker-macro
//!
//! `#[derive(Record)]` for ddl-maker. The derive reads the struct's fields in
//! declaration order, turns each field type into a semantic type token, and
//! collects the `#[ddl(...)]` attributes into a `ddl_maker::RecordSchema`.

use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

mod derive_record;
mod table_attrs;
mod types;

/// Implements `ddl_maker::Record` for a struct with named fields.
///
/// Field attribute: `#[ddl("size=100,null")]`, the tag micro-language.
///
/// Struct attributes, any number of `#[ddl(...)]` lists:
///
/// * `table = "name"`
/// * `primary_key("col", ...)`
/// * `index(name = "n", columns("col", ...))`, likewise `unique`, `spatial`
/// * `fulltext(name = "n", columns(...), parser = "ngram")`
/// * `foreign_key(columns(...), references = "table", reference_columns(...),
///   on_delete = "CASCADE", on_update = "SET NULL")`
#[proc_macro_derive(Record, attributes(ddl))]
pub fn record_derive(input: TokenStream) -> TokenStream {
    let ast = parse_macro_input!(input as DeriveInput);
    derive_record::expand(ast).unwrap_or_else(syn::Error::into_compile_error).into()
}
