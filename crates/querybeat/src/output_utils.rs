use querybeat_core::types::Field;
use querybeat_core::types::TypeDefinition;

pub(crate) const GREEN_CHECK: &str = "\u{2705}";
pub(crate) const RED_X: &str = "\u{274C}";

/// `name(arg: Type, ...): ReturnType`
pub(crate) fn format_field_signature(field: &Field) -> String {
    if field.args.is_empty() {
        return format!("{}: {}", field.name, field.formatted_type());
    }
    let args =
        field.args
            .iter()
            .map(|arg| format!("{}: {}", arg.name, arg.formatted_type()))
            .collect::<Vec<_>>()
            .join(", ");
    format!("{}({args}): {}", field.name, field.formatted_type())
}

/// A short, indented listing of a type and its members.
pub(crate) fn format_type_definition(type_def: &TypeDefinition) -> String {
    let mut out = format!("{} ({})", type_def.name(), type_def.kind());
    if let Some(description) = type_def.description() {
        out.push_str(&format!("\n  \"{description}\""));
    }

    for field in type_def.fields() {
        out.push_str(&format!("\n  {}", format_field_signature(field)));
        if let Some(description) = &field.description {
            out.push_str(&format!("  # {description}"));
        }
    }
    for input_field in type_def.input_fields() {
        out.push_str(&format!("\n  {}: {}", input_field.name, input_field.formatted_type()));
    }
    if !type_def.possible_types().is_empty() {
        out.push_str(&format!("\n  = {}", type_def.possible_types().join(" | ")));
    }
    out
}
