//! tabgrid CLI - drive an editable grid from command scripts

mod render;
mod script;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::PathBuf;
use tabgrid::prelude::*;
use tabgrid::{column_index, DEFAULT_COLUMNS, DEFAULT_ROWS};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "tabgrid")]
#[command(author, version, about = "Editable grid driven by command scripts")]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a command script against a fresh grid and print the result
    Run {
        /// Script file (default: stdin)
        script: Option<PathBuf>,

        /// Initial row count
        #[arg(long, default_value_t = DEFAULT_ROWS)]
        rows: usize,

        /// Initial column count
        #[arg(long, default_value_t = DEFAULT_COLUMNS)]
        cols: usize,

        /// Print the grid after every command
        #[arg(short, long)]
        each: bool,
    },

    /// Print the header label for 0-based column indices
    Label {
        #[arg(required = true)]
        indices: Vec<usize>,
    },

    /// Print the 0-based column index for header labels
    Index {
        #[arg(required = true)]
        labels: Vec<String>,
    },
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    // Ignore the error when a subscriber is already installed
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .try_init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Run {
            script,
            rows,
            cols,
            each,
        } => run_script(script, rows, cols, each),
        Commands::Label { indices } => {
            for index in indices {
                println!("{}\t{}", index, column_label(index));
            }
            Ok(())
        }
        Commands::Index { labels } => {
            for label in labels {
                let index = column_index(&label)
                    .with_context(|| format!("'{}' is not a column label", label))?;
                println!("{}\t{}", label, index);
            }
            Ok(())
        }
    }
}

fn run_script(script: Option<PathBuf>, rows: usize, cols: usize, each: bool) -> Result<()> {
    let mut session = GridSession::new(&GridOptions::new(rows, cols));
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let executed = match &script {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("Failed to open '{}'", path.display()))?;
            script::run(&mut session, BufReader::new(file), &mut out, each)?
        }
        None => script::run(&mut session, io::stdin().lock(), &mut out, each)?,
    };
    tracing::info!(executed, "script finished");

    if !each {
        write!(out, "{}", render::render(&session)).context("Failed to write to stdout")?;
    }
    Ok(())
}
