use crate::commands;
use crate::output_utils;
use crate::schema_source::SchemaArgs;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;

#[derive(Debug, clap::Args)]
pub(crate) struct ShowCmd {
    #[arg(
        help="Name of the type to show, e.g. `Query` or `Country`.",
        long="type",
        value_name="TYPE_NAME",
    )]
    type_name: String,

    #[command(flatten)]
    schema: SchemaArgs,
}

#[inherent::inherent]
impl RunnableCommand for ShowCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let catalog = match commands::loaded_catalog(
            commands::load_catalog(&self.schema).await,
        ) {
            Ok(catalog) => catalog,
            Err(result) => return result,
        };

        match catalog.get(&self.type_name) {
            Some(type_def) => CommandResult::stdout(format_args!(
                "{}",
                output_utils::format_type_definition(type_def),
            )),

            None => CommandResult::stderr(format_args!(
                "{} No type named `{}` in the schema.",
                output_utils::RED_X,
                self.type_name,
            )),
        }
    }
}
