mod commands;
mod env;
mod link;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use chortle_template::StaticCatalog;

#[derive(Parser)]
#[command(name = "chortle", about = "Fill-in-the-blank stories you can share and read aloud")]
struct Cli {
    /// JSON catalog to use instead of the built-in templates
    #[arg(long, global = true, env = "CHORTLE_CATALOG")]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List available templates
    Templates,
    /// Fill a template and print the story with its share fragment
    Fill(commands::fill::Args),
    /// Encode a JSON record into a share token
    Encode(commands::encode::Args),
    /// Decode a token, fragment or URL back into its record
    Decode(commands::decode::Args),
    /// Print the caption chunks for a shared story
    Captions(commands::captions::Args),
    /// Reveal a shared story line by line on a timer
    Prompt(commands::prompt::Args),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let env = env::load()?;

    let catalog = match &cli.catalog {
        Some(path) => StaticCatalog::from_path(path)?,
        None => StaticCatalog::builtin(),
    };
    tracing::debug!(templates = catalog.len(), "catalog_loaded");

    match cli.command {
        Command::Templates => commands::templates::run(&catalog),
        Command::Fill(args) => commands::fill::run(&catalog, args),
        Command::Encode(args) => commands::encode::run(args),
        Command::Decode(args) => commands::decode::run(args),
        Command::Captions(args) => commands::captions::run(&catalog, &env, args),
        Command::Prompt(args) => commands::prompt::run(&catalog, &env, args).await,
    }
}
