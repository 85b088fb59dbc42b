use crate::commands;
use crate::output_utils;
use crate::schema_source::SchemaArgs;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use querybeat_core::types::TypeDefinition;

#[derive(Debug, clap::Args)]
pub(crate) struct TypesCmd {
    #[arg(
        help="Also list introspection types such as `__Schema` and `__Type`.",
        long,
    )]
    include_introspection: bool,

    #[arg(
        help="Print the parsed type definitions as JSON.",
        long,
    )]
    json: bool,

    #[command(flatten)]
    schema: SchemaArgs,
}

#[inherent::inherent]
impl RunnableCommand for TypesCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let catalog = match commands::loaded_catalog(
            commands::load_catalog(&self.schema).await,
        ) {
            Ok(catalog) => catalog,
            Err(result) => return result,
        };

        let type_defs: Vec<&TypeDefinition> =
            if self.include_introspection {
                catalog.types().collect()
            } else {
                catalog.user_defined_types().collect()
            };
        log::debug!("Listing {} of {} types.", type_defs.len(), catalog.len());

        if self.json {
            return match serde_json::to_string_pretty(&type_defs) {
                Ok(json) => CommandResult::stdout(format_args!("{json}")),
                Err(e) => CommandResult::stderr(format_args!(
                    "{} Failed to serialize types: {e}",
                    output_utils::RED_X,
                )),
            };
        }

        if type_defs.is_empty() {
            return CommandResult::stderr(format_args!(
                "{} No type definitions found in the schema.",
                output_utils::RED_X,
            ));
        }

        let listing =
            type_defs.iter()
                .map(|type_def| {
                    format!(
                        "{} ({}, {} members)",
                        type_def.name(),
                        type_def.kind(),
                        member_count(type_def),
                    )
                })
                .collect::<Vec<_>>()
                .join("\n");
        CommandResult::stdout(format_args!(
            "{listing}\n{} Found {} types.",
            output_utils::GREEN_CHECK,
            type_defs.len(),
        ))
    }
}

fn member_count(type_def: &TypeDefinition) -> usize {
    type_def.fields().len()
        + type_def.input_fields().len()
        + type_def.possible_types().len()
        + type_def.enum_values().len()
}
