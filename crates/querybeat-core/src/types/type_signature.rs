/// A raw type reference such as `[Country!]!` decomposed into the bare
/// referenced type name plus a single list flag and a single non-null flag.
///
/// Only one level of wrapping is tracked, so `[T!]!`, `[T]!`, and `[[T]]!`
/// all decompose to the same signature.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TypeSignature {
    pub type_name: String,
    pub is_list: bool,
    pub is_non_null: bool,
}
impl TypeSignature {
    pub fn new(type_name: impl Into<String>, is_list: bool, is_non_null: bool) -> Self {
        Self {
            type_name: type_name.into(),
            is_list,
            is_non_null,
        }
    }

    /// Decompose a raw type reference.
    ///
    /// * `is_non_null` is set when the reference ends with `!`.
    /// * `is_list` is set when, ignoring that trailing `!`, the reference is
    ///   wrapped in `[...]`.
    /// * The bare name drops the surrounding `[`, `]`, and `!` characters.
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        let is_non_null = raw.ends_with('!');
        let unbanged = raw.strip_suffix('!').unwrap_or(raw);
        let is_list = unbanged.starts_with('[') && unbanged.ends_with(']');

        Self {
            type_name: bare_type_name(raw).to_string(),
            is_list,
            is_non_null,
        }
    }
}
impl std::fmt::Display for TypeSignature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&format_type_ref(&self.type_name, self.is_list, self.is_non_null))
    }
}

/// Strip all list and non-null wrapper syntax from a type reference, leaving
/// the referenced type's name.
pub fn bare_type_name(raw: &str) -> &str {
    raw.trim()
        .trim_matches(|c| matches!(c, '[' | ']' | '!'))
}

/// Rebuild surface syntax for a type reference: brackets first, then the
/// trailing bang.
pub fn format_type_ref(type_name: &str, is_list: bool, is_non_null: bool) -> String {
    let mut formatted =
        if is_list {
            format!("[{type_name}]")
        } else {
            type_name.to_string()
        };
    if is_non_null {
        formatted.push('!');
    }
    formatted
}
