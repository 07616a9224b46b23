//! # Table Attributes
//!
//! Parsing of struct-level `#[ddl(...)]` attributes into the builder calls
//! that fill a `RecordSchema`.

use proc_macro2::TokenStream;
use quote::quote;
use syn::{meta::ParseNestedMeta, punctuated::Punctuated, Attribute, LitStr, Token};

/// Struct-level metadata, already lowered to builder-call tokens.
#[derive(Default)]
pub struct TableAttrs {
    pub table_name: Option<LitStr>,
    pub primary_key: Option<Vec<LitStr>>,
    pub indexes: Vec<TokenStream>,
    pub foreign_keys: Vec<TokenStream>,
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum IndexKind {
    Plain,
    Unique,
    FullText,
    Spatial,
}

impl IndexKind {
    fn from_meta(meta: &ParseNestedMeta) -> Option<Self> {
        if meta.path.is_ident("index") {
            Some(IndexKind::Plain)
        } else if meta.path.is_ident("unique") {
            Some(IndexKind::Unique)
        } else if meta.path.is_ident("fulltext") {
            Some(IndexKind::FullText)
        } else if meta.path.is_ident("spatial") {
            Some(IndexKind::Spatial)
        } else {
            None
        }
    }

    fn constructor(self) -> TokenStream {
        match self {
            IndexKind::Plain => quote! { ::ddl_maker::Index::plain },
            IndexKind::Unique => quote! { ::ddl_maker::Index::unique },
            IndexKind::FullText => quote! { ::ddl_maker::Index::full_text },
            IndexKind::Spatial => quote! { ::ddl_maker::Index::spatial },
        }
    }
}

impl TableAttrs {
    /// Collects every `#[ddl(...)]` attribute on the struct.
    pub fn parse(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut table = TableAttrs::default();

        for attr in attrs.iter().filter(|attr| attr.path().is_ident("ddl")) {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("table") {
                    if table.table_name.is_some() {
                        return Err(meta.error("table is declared twice"));
                    }
                    table.table_name = Some(meta.value()?.parse()?);
                    return Ok(());
                }

                if meta.path.is_ident("primary_key") {
                    if table.primary_key.is_some() {
                        return Err(meta.error("primary_key is declared twice"));
                    }
                    let columns = parse_string_list(&meta)?;
                    if columns.is_empty() {
                        return Err(meta.error("primary_key needs at least one column"));
                    }
                    table.primary_key = Some(columns);
                    return Ok(());
                }

                if let Some(kind) = IndexKind::from_meta(&meta) {
                    table.indexes.push(parse_index(&meta, kind)?);
                    return Ok(());
                }

                if meta.path.is_ident("foreign_key") {
                    table.foreign_keys.push(parse_foreign_key(&meta)?);
                    return Ok(());
                }

                Err(meta.error("unsupported ddl attribute"))
            })?;
        }

        Ok(table)
    }
}

/// Parses `("a", "b", ...)`.
fn parse_string_list(meta: &ParseNestedMeta) -> syn::Result<Vec<LitStr>> {
    let content;
    syn::parenthesized!(content in meta.input);
    let list = Punctuated::<LitStr, Token![,]>::parse_terminated(&content)?;
    Ok(list.into_iter().collect())
}

fn parse_index(meta: &ParseNestedMeta, kind: IndexKind) -> syn::Result<TokenStream> {
    let mut name: Option<LitStr> = None;
    let mut columns: Vec<LitStr> = Vec::new();
    let mut parser: Option<LitStr> = None;

    meta.parse_nested_meta(|nested| {
        if nested.path.is_ident("name") {
            name = Some(nested.value()?.parse()?);
        } else if nested.path.is_ident("columns") {
            columns = parse_string_list(&nested)?;
        } else if nested.path.is_ident("parser") && kind == IndexKind::FullText {
            parser = Some(nested.value()?.parse()?);
        } else {
            return Err(nested.error("expected `name`, `columns` or, for fulltext, `parser`"));
        }
        Ok(())
    })?;

    let Some(name) = name else {
        return Err(meta.error("index needs `name = \"...\"`"));
    };
    if columns.is_empty() {
        return Err(meta.error("index needs `columns(\"...\")`"));
    }

    let constructor = kind.constructor();
    let with_parser = parser.map(|parser| quote! { .with_parser(#parser) });

    Ok(quote! {
        #constructor(#name, [#(#columns),*]) #with_parser
    })
}

fn parse_foreign_key(meta: &ParseNestedMeta) -> syn::Result<TokenStream> {
    let mut columns: Vec<LitStr> = Vec::new();
    let mut references: Option<LitStr> = None;
    let mut reference_columns: Vec<LitStr> = Vec::new();
    let mut on_delete: Option<TokenStream> = None;
    let mut on_update: Option<TokenStream> = None;

    meta.parse_nested_meta(|nested| {
        if nested.path.is_ident("columns") {
            columns = parse_string_list(&nested)?;
        } else if nested.path.is_ident("references") {
            references = Some(nested.value()?.parse()?);
        } else if nested.path.is_ident("reference_columns") {
            reference_columns = parse_string_list(&nested)?;
        } else if nested.path.is_ident("on_delete") {
            let action = referential_action(&nested.value()?.parse()?)?;
            on_delete = Some(quote! { .on_delete(#action) });
        } else if nested.path.is_ident("on_update") {
            let action = referential_action(&nested.value()?.parse()?)?;
            on_update = Some(quote! { .on_update(#action) });
        } else {
            return Err(nested.error(
                "expected `columns`, `references`, `reference_columns`, `on_delete` or `on_update`",
            ));
        }
        Ok(())
    })?;

    let Some(references) = references else {
        return Err(meta.error("foreign_key needs `references = \"table\"`"));
    };
    if columns.is_empty() || reference_columns.is_empty() {
        return Err(meta.error("foreign_key needs `columns(...)` and `reference_columns(...)`"));
    }

    Ok(quote! {
        ::ddl_maker::ForeignKey::new([#(#columns),*], #references, [#(#reference_columns),*])
            #on_delete
            #on_update
    })
}

fn referential_action(lit: &LitStr) -> syn::Result<TokenStream> {
    let action = match lit.value().trim().to_uppercase().as_str() {
        "CASCADE" => quote! { Cascade },
        "SET NULL" => quote! { SetNull },
        "RESTRICT" => quote! { Restrict },
        "NO ACTION" => quote! { NoAction },
        "SET DEFAULT" => quote! { SetDefault },
        _ => {
            return Err(syn::Error::new(
                lit.span(),
                "expected CASCADE, SET NULL, RESTRICT, NO ACTION or SET DEFAULT",
            ));
        }
    };

    Ok(quote! { ::ddl_maker::ReferentialAction::#action })
}
