use regex::Regex;
use std::sync::LazyLock;

const NAME: &str = r"[a-zA-Z_][a-zA-Z0-9_]*";
const TYPE_REF: &str = r"\[*[a-zA-Z_][a-zA-Z0-9_!\[\]]*";

/// `(type|input|scalar|enum|interface|union) <Name>`, found anywhere in a line.
///
/// Captures: `1` keyword, `2` type name.
pub(super) static TYPE_INTRO: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"(type|input|scalar|enum|interface|union)\s+({NAME})"))
        .expect("type introduction pattern must compile")
});

/// `name(args): Type = default`, where the argument list and default are
/// optional.
///
/// Captures: `1` name, `2` raw argument list, `3` raw type reference,
/// `4` default value.
pub(super) static FIELD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"({NAME})\s*(?:\(([^)]*)\))?\s*:\s*({TYPE_REF})(?:\s*=\s*(.+))?"
    ))
    .expect("field pattern must compile")
});

/// `name: Type = default` for one comma-separated piece of an argument list.
///
/// Captures: `1` name, `2` raw type reference, `3` default value.
pub(super) static ARGUMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"({NAME})\s*:\s*({TYPE_REF})(?:\s*=\s*([^,)]*))?"))
        .expect("argument pattern must compile")
});

/// A line consisting of a single-line string description: `"..."`.
///
/// Captures: `1` description text.
pub(super) static DESCRIPTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^"([^"]*)"$"#)
        .expect("description pattern must compile")
});
