//! Generate-config command implementation

use crate::config::CliConfig;
use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        std::fs::write(&self.output, CliConfig::default_toml())
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("Configuration template written to {}", self.output.display());
        println!();
        println!("Next steps:");
        println!("1. Edit the file to adjust segmentation parameters");
        println!(
            "2. Use it for processing: lamina process -i input.txt -c {}",
            self.output.display()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn writes_a_parseable_template() {
        let temp_dir = TempDir::new().unwrap();
        let output_path = temp_dir.path().join("lamina.toml");

        let args = GenerateConfigArgs {
            output: output_path.clone(),
        };
        assert!(args.execute().is_ok());

        let content = std::fs::read_to_string(&output_path).unwrap();
        let parsed: CliConfig = toml::from_str(&content).unwrap();
        assert!(parsed.into_options().validate().is_ok());
    }
}
