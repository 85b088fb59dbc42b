mod generate;
mod show;
mod types;

use crate::output_utils;
use crate::schema_source::SchemaArgs;
use crate::Cli;
use crate::CommandResult;
use generate::GenerateCmd;
use querybeat_core::LoadState;
use querybeat_core::SchemaCatalog;
use show::ShowCmd;
use types::TypesCmd;

#[derive(Debug, clap::Parser)]
#[command(name = "querybeat")]
pub(crate) enum CommandEnum {
    /// Generate a ready-to-send query for one field of the schema.
    Generate(Box<GenerateCmd>),

    /// Show the fields, arguments, or members of a single type.
    Show(Box<ShowCmd>),

    /// List every type defined by the schema.
    Types(Box<TypesCmd>),
}
impl CommandEnum {
    pub(crate) async fn run(self, cli: Cli) -> CommandResult {
        match self {
            Self::Generate(cmd) => cmd.run(cli).await,
            Self::Show(cmd) => cmd.run(cli).await,
            Self::Types(cmd) => cmd.run(cli).await,
        }
    }
}

/// Read and parse the schema named on the command line.
async fn load_catalog(schema_args: &SchemaArgs) -> LoadState<SchemaCatalog> {
    log::debug!(
        "Loading schema from {} input paths...",
        schema_args.schema_paths.len(),
    );
    LoadState::from_result(schema_args.load().await)
        .map(|schema| {
            log::debug!("Parsing {} schema files.", schema.file_paths.len());
            SchemaCatalog::from_sdl(&schema.text)
        })
}

/// Unwrap a loaded catalog, or turn the load failure into a failed
/// [`CommandResult`].
fn loaded_catalog(
    state: LoadState<SchemaCatalog>,
) -> Result<SchemaCatalog, CommandResult> {
    match state {
        LoadState::Loaded(catalog) => Ok(catalog),
        LoadState::Failed(message) => Err(CommandResult::stderr(format_args!(
            "{} Failed to load schema: {message}",
            output_utils::RED_X,
        ))),
        LoadState::Loading => Err(CommandResult::stderr(format_args!(
            "{} Schema is still loading.",
            output_utils::RED_X,
        ))),
    }
}
