//! Process command implementation

use crate::config::CliConfig;
use crate::error::CliError;
use crate::output::{JsonFormatter, MarkdownFormatter, OutputFormatter, TextFormatter};
use anyhow::{Context, Result};
use clap::Args;
use lamina_core::{SegmentationOptions, SegmentationStrategy};
use lamina_engine::{DocumentChunker, ExtractedDocument};
use std::io::Read;
use std::path::PathBuf;

/// Arguments for the process command
#[derive(Debug, Args)]
pub struct ProcessArgs {
    /// Input file ("-" or omitted reads stdin)
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Splitting strategy (overrides the config file)
    #[arg(short, long, value_enum)]
    pub strategy: Option<Strategy>,

    /// Maximum chunk length in characters (overrides the config file)
    #[arg(long, value_name = "CHARS")]
    pub max_length: Option<usize>,

    /// Minimum segment length in characters (overrides the config file)
    #[arg(long, value_name = "CHARS")]
    pub min_length: Option<usize>,

    /// Overlap ratio between adjacent segments (overrides the config file)
    #[arg(long, value_name = "RATIO")]
    pub overlap: Option<f64>,

    /// Total page count of the source document (default: estimated)
    #[arg(long, value_name = "N")]
    pub pages: Option<u32>,

    /// Disable table extraction
    #[arg(long)]
    pub no_tables: bool,

    /// Suppress log output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable segment listing
    Text,
    /// Full result as pretty-printed JSON
    Json,
    /// Segments and tables as a Markdown report
    Markdown,
}

/// Splitting strategies exposed on the command line
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum Strategy {
    /// Fixed-size sliding character window
    Character,
    /// Sentence-boundary packing
    Sentence,
    /// Blank-line paragraph splitting
    Paragraph,
    /// Paragraph splitting (similarity scoring planned)
    Semantic,
    /// Paragraphs with sentence re-splitting of oversized chunks
    Hybrid,
}

impl From<Strategy> for SegmentationStrategy {
    fn from(strategy: Strategy) -> Self {
        match strategy {
            Strategy::Character => SegmentationStrategy::Character,
            Strategy::Sentence => SegmentationStrategy::Sentence,
            Strategy::Paragraph => SegmentationStrategy::Paragraph,
            Strategy::Semantic => SegmentationStrategy::Semantic,
            Strategy::Hybrid => SegmentationStrategy::Hybrid,
        }
    }
}

impl ProcessArgs {
    /// Execute the process command
    pub fn execute(&self) -> Result<()> {
        self.init_logging();

        let options = self.resolve_options()?;
        options
            .validate()
            .map_err(|err| CliError::ConfigError(err.to_string()))?;
        log::debug!("resolved options: {options:?}");

        let text = self.read_input()?;
        let document = match self.pages {
            Some(pages) => ExtractedDocument::new(&text, pages, text.len() as u64),
            None => ExtractedDocument::from_text(&text),
        };

        let result = DocumentChunker::with_options(options).process(&document);
        log::info!(
            "produced {} segments and {} tables",
            result.segments.len(),
            result.tables.len()
        );

        let formatter: Box<dyn OutputFormatter> = match self.format {
            OutputFormat::Text => Box::new(TextFormatter),
            OutputFormat::Json => Box::new(JsonFormatter),
            OutputFormat::Markdown => Box::new(MarkdownFormatter),
        };
        match &self.output {
            Some(path) => {
                let mut file = std::fs::File::create(path)
                    .with_context(|| format!("failed to create {}", path.display()))?;
                formatter.write_output(&result, &mut file)?;
            }
            None => {
                let stdout = std::io::stdout();
                formatter.write_output(&result, &mut stdout.lock())?;
            }
        }

        if !result.success {
            let reasons = result.errors.unwrap_or_default().join("; ");
            return Err(CliError::ProcessingError(reasons).into());
        }
        Ok(())
    }

    /// Merge the config file (or defaults) with command-line overrides
    fn resolve_options(&self) -> Result<SegmentationOptions> {
        let mut options = match &self.config {
            Some(path) => CliConfig::load(path)?.into_options(),
            None => SegmentationOptions::default(),
        };
        if let Some(strategy) = self.strategy {
            options.strategy = strategy.into();
        }
        if let Some(max) = self.max_length {
            options.max_segment_length = max;
        }
        if let Some(min) = self.min_length {
            options.min_segment_length = min;
        }
        if let Some(ratio) = self.overlap {
            options.overlap_ratio = ratio;
        }
        if self.no_tables {
            options.enable_table_extraction = false;
        }
        Ok(options)
    }

    /// Read the input file, or stdin when none is given
    fn read_input(&self) -> Result<String> {
        match &self.input {
            Some(path) if path.as_os_str() != "-" => std::fs::read_to_string(path)
                .map_err(|_| CliError::FileNotFound(path.display().to_string()).into()),
            _ => {
                let mut text = String::new();
                std::io::stdin()
                    .read_to_string(&mut text)
                    .context("failed to read stdin")?;
                Ok(text)
            }
        }
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };
        if !self.quiet {
            let _ = env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or(log_level),
            )
            .try_init();
        }
    }
}
