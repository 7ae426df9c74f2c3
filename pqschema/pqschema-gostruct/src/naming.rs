const NON_LETTER_PREFIX: &str = "PARGO_PREFIX_";

/// Turns a Parquet field name into an exported Go identifier.
///
/// Bytes outside `[A-Za-z0-9_]` are replaced by their decimal value, a
/// leading lowercase letter is upper-cased, and a name that does not start
/// with a letter gets a fixed prefix.
pub fn sanitize_identifier(name: &str) -> String {
    let mut ident = String::with_capacity(name.len());
    for b in name.bytes() {
        if b.is_ascii_alphanumeric() || b == b'_' {
            ident.push(char::from(b));
        } else {
            ident.push_str(&b.to_string());
        }
    }

    match ident.bytes().next() {
        None => ident,
        Some(first) if first.is_ascii_lowercase() => {
            ident[..1].make_ascii_uppercase();
            ident
        }
        Some(first) if first.is_ascii_uppercase() => ident,
        Some(_) => format!("{NON_LETTER_PREFIX}{ident}"),
    }
}
