// file: src/main.rs
// description: commandline application entry point with command handling
// reference: application bootstrap and orchestration

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use corpus_loader::{Config, CorpusLoader, LoadOptions};
use corpus_loader::utils::logging::{format_error, format_info, format_success};
use std::path::PathBuf;
use std::time::Instant;
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "corpus_loader")]
#[command(version = "0.1.0")]
#[command(about = "Load a directory of text files into an in-memory corpus", long_about = None)]
struct Cli {
    #[arg(
        short,
        long,
        value_name = "FILE",
        default_value = "config/default.toml"
    )]
    config: PathBuf,

    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    color: bool,

    #[arg(short, long, action = ArgAction::SetTrue)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Eagerly load every matching file and print a corpus summary
    Load {
        /// Corpus directory (overrides the configured directory)
        directory: Option<PathBuf>,

        #[arg(long, value_name = "SUFFIX")]
        suffix: Option<String>,

        /// Keep original casing instead of lowercasing
        #[arg(long)]
        keep_case: bool,
    },

    /// Stream matching files one at a time, reading each on demand
    Stream {
        /// Corpus directory (overrides the configured directory)
        directory: Option<PathBuf>,

        #[arg(long, value_name = "SUFFIX")]
        suffix: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    corpus_loader::utils::logging::init_logger(cli.color, cli.verbose);

    let config = if cli.config.exists() {
        Config::load(Some(cli.config.as_path())).context("Failed to load configuration")?
    } else {
        warn!(
            "Config file {} not found, using default configuration",
            cli.config.display()
        );
        Config::default_config()
    };

    match cli.command {
        Commands::Load {
            directory,
            suffix,
            keep_case,
        } => {
            cmd_load(&config, directory, suffix, keep_case)?;
        }
        Commands::Stream { directory, suffix } => {
            cmd_stream(&config, directory, suffix)?;
        }
    }

    Ok(())
}

fn cmd_load(
    config: &Config,
    directory: Option<PathBuf>,
    suffix: Option<String>,
    keep_case: bool,
) -> Result<()> {
    let dir = directory.unwrap_or_else(|| config.corpus.directory.clone());
    let mut options = LoadOptions::from(&config.corpus);
    if let Some(suffix) = suffix {
        options = options.with_suffix(suffix);
    }
    if keep_case {
        options = options.with_lowercase(false);
    }

    let start_time = Instant::now();
    let loader = CorpusLoader::new(options);
    let corpus = loader
        .load(&dir)
        .with_context(|| format!("Failed to load corpus from {}", dir.display()))?;

    if corpus.is_empty() {
        println!("{}", format_info(&format!("No documents in {}", dir.display())));
        return Ok(());
    }

    let total_chars: usize = corpus.iter().map(|doc| doc.chars().count()).sum();
    info!("Load completed in {:.2?}", start_time.elapsed());

    println!(
        "{}",
        format_success(&format!(
            "Loaded {} documents ({} characters) from {}",
            corpus.len(),
            total_chars,
            dir.display()
        ))
    );

    Ok(())
}

fn cmd_stream(config: &Config, directory: Option<PathBuf>, suffix: Option<String>) -> Result<()> {
    let dir = directory.unwrap_or_else(|| config.corpus.directory.clone());
    let mut options = LoadOptions::from(&config.corpus);
    if let Some(suffix) = suffix {
        options = options.with_suffix(suffix);
    }

    let loader = CorpusLoader::new(options);
    let mut count = 0usize;

    for document in loader.stream(&dir) {
        match document {
            Ok(text) => {
                count += 1;
                println!(
                    "{}",
                    format_info(&format!("Document {}: {} characters", count, text.chars().count()))
                );
            }
            Err(err) => {
                println!("{}", format_error(&format!("Stream aborted: {}", err)));
                return Err(err.into());
            }
        }
    }

    println!(
        "{}",
        format_success(&format!("Streamed {} documents from {}", count, dir.display()))
    );

    Ok(())
}
