use crate::query_gen::QueryGeneratorConfig;
use crate::types::Argument;
use crate::types::type_signature;

/// Render user-entered text as a GraphQL literal for an argument of the given
/// type.
///
/// `ID` and `String` values are quoted, `Boolean` values are lower-cased, and
/// everything else (numbers, enums, input objects, lists) is passed through
/// as written.
pub(super) fn format_provided_value(type_name: &str, value: &str) -> String {
    match type_signature::bare_type_name(type_name) {
        "ID" | "String" => format!("\"{value}\""),
        "Boolean" => value.to_lowercase(),
        _ => value.to_string(),
    }
}

/// Literal to use for `arg` on `field_name` when the user supplied nothing.
pub(super) fn placeholder_value(
    config: &QueryGeneratorConfig,
    field_name: &str,
    arg: &Argument,
) -> String {
    match arg.name.as_str() {
        "code" => config.code_placeholder_for(field_name)
            .unwrap_or("\"\"")
            .to_string(),
        "filter" => "{}".to_string(),
        _ => match type_signature::bare_type_name(&arg.type_name) {
            "ID" | "String" => "\"\"",
            "Boolean" => "false",
            "Int" | "Float" => "0",
            _ => "null",
        }.to_string(),
    }
}
