use quote::ToTokens;
use syn::{GenericArgument, Path, PathArguments, PathSegment, Type};

/// Maps a Rust field type to its semantic type token.
///
/// The token is what the dialect type tables match on:
///
/// * `Option<T>` → `Option<token(T)>` (nullable spelling)
/// * `Box<T>`, `Rc<T>`, `Arc<T>`, `Cow<T>`, `&T` → `*token(T)` (pointer spelling)
/// * `Vec<u8>`, `[u8]`, `[u8; N]` → `[]u8`
/// * multi-segment paths → `crate.Name`, e.g. `chrono.NaiveDateTime`
/// * anything else → the bare type name, generics dropped
pub fn semantic_type_token(ty: &Type) -> String {
    match ty {
        Type::Path(type_path) if type_path.qself.is_none() => path_token(&type_path.path),
        Type::Reference(reference) => pointer_token(&reference.elem),
        Type::Slice(slice) => slice_token(&slice.elem),
        Type::Array(array) => slice_token(&array.elem),
        Type::Group(group) => semantic_type_token(&group.elem),
        Type::Paren(paren) => semantic_type_token(&paren.elem),
        other => other.to_token_stream().to_string().replace(' ', ""),
    }
}

fn path_token(path: &Path) -> String {
    let Some(last) = path.segments.last() else {
        return String::new();
    };
    let ident = last.ident.to_string();

    if let Some(inner) = first_type_argument(last) {
        match ident.as_str() {
            "Option" => return format!("Option<{}>", semantic_type_token(inner)),
            "Box" | "Rc" | "Arc" | "Cow" => return pointer_token(inner),
            "Vec" => return slice_token(inner),
            _ => {}
        }
    }

    if is_primitive_path(path) {
        return ident;
    }

    match path.segments.first() {
        Some(first) if path.segments.len() > 1 => format!("{}.{}", first.ident, ident),
        _ => ident,
    }
}

/// `std::primitive::u64` and `core::primitive::u64` name the bare primitive.
fn is_primitive_path(path: &Path) -> bool {
    let idents: Vec<String> = path.segments.iter().map(|s| s.ident.to_string()).collect();
    idents.len() == 3 && (idents[0] == "std" || idents[0] == "core") && idents[1] == "primitive"
}

/// Pointer spelling, except that byte slices stay `[]u8`.
fn pointer_token(elem: &Type) -> String {
    let inner = semantic_type_token(elem);
    if inner.starts_with("[]") { inner } else { format!("*{inner}") }
}

fn slice_token(elem: &Type) -> String {
    format!("[]{}", semantic_type_token(elem))
}

fn first_type_argument(segment: &PathSegment) -> Option<&Type> {
    let PathArguments::AngleBracketed(args) = &segment.arguments else {
        return None;
    };

    args.args.iter().find_map(|arg| match arg {
        GenericArgument::Type(ty) => Some(ty),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use syn::{parse_quote, Type};

    use super::semantic_type_token;

    fn token(ty: Type) -> String {
        semantic_type_token(&ty)
    }

    #[test]
    fn primitive_paths() {
        assert_eq!(token(parse_quote!(std::primitive::u64)), "u64");
        assert_eq!(token(parse_quote!(::core::primitive::bool)), "bool");
        assert_eq!(token(parse_quote!(Option<std::primitive::i32>)), "Option<i32>");
        assert_eq!(token(parse_quote!(Box<core::primitive::str>)), "*str");
    }

    #[test]
    fn qualified_paths() {
        assert_eq!(token(parse_quote!(chrono::NaiveDateTime)), "chrono.NaiveDateTime");
        assert_eq!(token(parse_quote!(std::string::String)), "std.String");
        assert_eq!(token(parse_quote!(my::primitive::Thing)), "my.Thing");
    }
}
