use crate::arg_pair::parse_arg_pair;
use crate::arg_pair::ArgPair;
use crate::commands;
use crate::generator_config::load_generator_config;
use crate::output_utils;
use crate::schema_source::SchemaArgs;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use querybeat_core::query_gen::QueryGenerator;
use std::collections::HashMap;

#[derive(Debug, clap::Args)]
pub(crate) struct GenerateCmd {
    #[arg(
        action=clap::ArgAction::Append,
        help="Value for one of the field's arguments, as `name=value`. \
             `ID` and `String` values are quoted for you, so pass them \
             without quotes. `Boolean` values are lower-cased. Any other \
             value (numbers, enums, input objects, lists) is used verbatim \
             as a GraphQL literal. May be repeated.",
        long="arg",
        value_name="NAME=VALUE",
        value_parser=parse_arg_pair,
    )]
    args: Vec<ArgPair>,

    #[arg(
        help="The field to build a query for, as `Type.field` (e.g. \
             `Query.country`).",
        long,
        value_name="TYPE.FIELD",
    )]
    field: String,

    #[command(flatten)]
    schema: SchemaArgs,
}

#[inherent::inherent]
impl RunnableCommand for GenerateCmd {
    pub async fn run(self, cli: Cli) -> CommandResult {
        let config = match load_generator_config(cli.config.as_deref()).await {
            Ok(config) => config,
            Err(e) => return CommandResult::stderr(format_args!(
                "{} {e}",
                output_utils::RED_X,
            )),
        };

        let catalog = match commands::loaded_catalog(
            commands::load_catalog(&self.schema).await,
        ) {
            Ok(catalog) => catalog,
            Err(result) => return result,
        };

        let field = match catalog.find_field(&self.field) {
            Ok(field) => field,
            Err(e) => return CommandResult::stderr(format_args!(
                "{} {e}",
                output_utils::RED_X,
            )),
        };

        let mut provided_args = HashMap::new();
        for ArgPair { name, value } in self.args {
            if field.args.iter().all(|arg| arg.name != name) {
                log::warn!(
                    "`{}` takes no argument named `{name}`; ignoring it.",
                    self.field,
                );
                continue;
            }
            provided_args.insert(name, value);
        }

        let query = QueryGenerator::new(config).generate(field, &provided_args);
        CommandResult::stdout(format_args!("{query}"))
    }
}
