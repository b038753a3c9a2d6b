use std::path::PathBuf;

use clap::{Args, Subcommand};

mod create;
mod list;

#[derive(Debug, Args)]
pub(crate) struct ItemCommand {
    #[command(subcommand)]
    command: ItemSubcommand,
}

#[derive(Debug, Subcommand)]
enum ItemSubcommand {
    /// Add an item to the catalog
    Create(create::CreateItemArgs),
    /// Print one page of the catalog
    List(list::ListItemsArgs),
}

/// Connection settings shared by the item commands.
#[derive(Debug, Args)]
struct StoreArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,

    /// Directory item images are stored under
    #[arg(long, env = "IMAGES_DIR", default_value = "images")]
    images_dir: PathBuf,
}

pub(crate) async fn run(command: ItemCommand) -> Result<(), String> {
    match command.command {
        ItemSubcommand::Create(args) => create::run(args).await,
        ItemSubcommand::List(args) => list::run(args).await,
    }
}
