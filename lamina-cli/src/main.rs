//! Command-line entry point for the Lamina document chunking engine

use clap::Parser;
use lamina_cli::commands::Commands;

/// Document chunking for retrieval pipelines
#[derive(Debug, Parser)]
#[command(name = "lamina", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Process(args) => args.execute(),
        Commands::GenerateConfig(args) => args.execute(),
        Commands::List { subcommand } => {
            subcommand.execute();
            Ok(())
        }
    }
}
