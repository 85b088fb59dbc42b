use crate::query_gen::QueryGeneratorConfig;
use crate::query_gen::argument_literal;
use crate::types::Field;
use crate::types::type_signature;
use std::collections::HashMap;

/// Build a runnable query document for `field` using the default
/// [`QueryGeneratorConfig`].
///
/// See [`QueryGenerator::generate`].
pub fn generate_query(field: &Field, provided_args: &HashMap<String, String>) -> String {
    QueryGenerator::default().generate(field, provided_args)
}

/// Synthesizes a query document that selects a single root field.
#[derive(Clone, Debug, Default)]
pub struct QueryGenerator {
    config: QueryGeneratorConfig,
}

impl QueryGenerator {
    pub fn new(config: QueryGeneratorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &QueryGeneratorConfig {
        &self.config
    }

    /// Generate a query for `field`, filling its arguments from
    /// `provided_args` (keyed by argument name).
    ///
    /// Arguments with no value, or only whitespace, get a placeholder
    /// literal instead. The operation keyword is always `query`, even for
    /// fields taken from a `Mutation` or `Subscription` type.
    ///
    /// Return types without a configured selection set get no selection set
    /// at all. That is only valid GraphQL for scalar- and enum-typed fields.
    pub fn generate(
        &self,
        field: &Field,
        provided_args: &HashMap<String, String>,
    ) -> String {
        let args = self.format_arguments(field, provided_args);
        let selection_set =
            self.config
                .selection_set_for(type_signature::bare_type_name(&field.type_name))
                .unwrap_or_default();

        let mut selection_line = field.name.clone();
        if !args.is_empty() {
            selection_line.push_str(&format!("({args})"));
        }
        if !selection_set.is_empty() {
            selection_line.push(' ');
            selection_line.push_str(selection_set);
        }

        let operation_name = operation_name_for(&field.name);
        log::debug!("Generated operation `{operation_name}` for field `{}`.", field.name);

        format!("query {operation_name} {{\n  {selection_line}\n}}")
    }

    fn format_arguments(
        &self,
        field: &Field,
        provided_args: &HashMap<String, String>,
    ) -> String {
        field.args
            .iter()
            .map(|arg| {
                let provided =
                    provided_args.get(&arg.name)
                        .map(|value| value.trim())
                        .filter(|value| !value.is_empty());
                let literal = match provided {
                    Some(value) => argument_literal::format_provided_value(
                        &arg.type_name,
                        value,
                    ),
                    None => argument_literal::placeholder_value(
                        &self.config,
                        &field.name,
                        arg,
                    ),
                };
                format!("{}: {literal}", arg.name)
            })
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// `continent` becomes `ContinentGenerated`.
fn operation_name_for(field_name: &str) -> String {
    let mut chars = field_name.chars();
    let title_cased = match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
        None => String::new(),
    };
    format!("{title_cased}Generated")
}
