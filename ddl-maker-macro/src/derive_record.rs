use proc_macro2::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, Field, Fields, LitStr};

use crate::{table_attrs::TableAttrs, types::semantic_type_token};

/// Expands the `#[derive(Record)]` macro.
///
/// Generates `impl ddl_maker::Record` whose `schema()` builds a
/// `RecordSchema` with one `.field(name, type token, tag)` call per field,
/// in declaration order, followed by the struct-level table metadata.
pub fn expand(ast: DeriveInput) -> syn::Result<TokenStream> {
    let struct_name = &ast.ident;

    let fields = match &ast.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            _ => return Err(syn::Error::new_spanned(struct_name, "Record must have named fields")),
        },
        _ => return Err(syn::Error::new_spanned(struct_name, "Record must be a struct")),
    };

    let table = TableAttrs::parse(&ast.attrs)?;

    let field_calls = fields
        .iter()
        .map(|field| -> syn::Result<TokenStream> {
            let name = field.ident.as_ref().map(ToString::to_string).unwrap_or_default();
            let type_name = semantic_type_token(&field.ty);
            let tag = field_tag(field)?;

            Ok(quote! {
                .field(#name, #type_name, #tag)
            })
        })
        .collect::<syn::Result<Vec<_>>>()?;

    let table_name_call = table.table_name.map(|name| quote! { .table_name(#name) });
    let primary_key_call = table
        .primary_key
        .map(|columns| quote! { .primary_key(::ddl_maker::PrimaryKey::new([#(#columns),*])) });
    let indexes = &table.indexes;
    let foreign_keys = &table.foreign_keys;

    let type_name = struct_name.to_string();
    let (impl_generics, ty_generics, where_clause) = ast.generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics ::ddl_maker::Record for #struct_name #ty_generics #where_clause {
            fn schema() -> ::ddl_maker::RecordSchema {
                ::ddl_maker::RecordSchema::new(concat!(module_path!(), "::", #type_name), #type_name)
                    #(#field_calls)*
                    #table_name_call
                    #primary_key_call
                    #(.index(#indexes))*
                    #(.foreign_key(#foreign_keys))*
            }
        }
    })
}

/// Reads the `#[ddl("...")]` tag of a field.
///
/// Several tag attributes on one field are joined with commas.
fn field_tag(field: &Field) -> syn::Result<String> {
    let mut parts = Vec::new();

    for attr in field.attrs.iter().filter(|attr| attr.path().is_ident("ddl")) {
        let tag: LitStr = attr
            .parse_args()
            .map_err(|e| syn::Error::new(e.span(), "expected a tag string, e.g. #[ddl(\"size=100,null\")]"))?;
        parts.push(tag.value());
    }

    Ok(parts.join(","))
}
