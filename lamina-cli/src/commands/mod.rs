//! CLI command implementations

use clap::Subcommand;

pub mod generate_config;
pub mod process;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Chunk a document into classified, scored segments
    Process(process::ProcessArgs),

    /// Generate a configuration file template
    GenerateConfig(generate_config::GenerateConfigArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List available splitting strategies
    Strategies,

    /// List available output formats
    Formats,
}

impl ListCommands {
    /// Execute the list command
    pub fn execute(&self) {
        match self {
            ListCommands::Strategies => {
                println!("character  - fixed-size sliding character window");
                println!("sentence   - sentence-boundary packing");
                println!("paragraph  - blank-line paragraph splitting");
                println!("semantic   - paragraph splitting (similarity scoring planned)");
                println!("hybrid     - paragraphs with sentence re-splitting (default)");
            }
            ListCommands::Formats => {
                println!("text       - human-readable segment listing (default)");
                println!("json       - full result as pretty-printed JSON");
                println!("markdown   - segments and tables as a Markdown report");
            }
        }
    }
}
