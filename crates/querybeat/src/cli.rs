use clap::CommandFactory;
use crate::commands;
use std::path::PathBuf;

#[derive(clap::Parser, Debug)]
#[command(name = "querybeat", version)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) cmd: Option<commands::CommandEnum>,

    #[arg(
        global=true,
        help="Path to a TOML or JSON file with extra selection sets and \
             `code` placeholders for generated queries.",
        long,
    )]
    pub config: Option<PathBuf>,

    #[arg(
        global=true,
        help="Enable verbose output.",
        long,
        short='v',
    )]
    pub verbose: bool,
}
impl Cli {
    pub(crate) async fn run_default(self) -> anyhow::Result<()> {
        Self::command().print_help()?;
        Ok(())
    }
}
