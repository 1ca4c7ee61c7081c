//! graphrep — convert a weighted edge list into adjacency list, adjacency
//! matrix, and array-of-lists representations.

mod commands;
mod config;

use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use config::{GraphrepConfig, Overrides, Settings};

#[derive(Parser)]
#[command(
    name = "graphrep",
    version,
    about = "Convert a weighted edge list into three graph representations"
)]
struct Cli {
    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Defaults to `convert` with no arguments
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert an edge list and write all representations to a file
    Convert {
        /// Edge-list file (default: testFileGraph.txt)
        input: Option<String>,
        /// Output file (default: graphRepresentations.txt)
        #[arg(short, long)]
        output: Option<String>,
        /// Output format (text, json)
        #[arg(long)]
        format: Option<String>,
        /// Vertex order (first-seen, sorted)
        #[arg(long)]
        order: Option<String>,
    },
    /// Print a summary of an edge list without writing output
    Inspect {
        /// Edge-list file (default: testFileGraph.txt)
        input: Option<String>,
        /// Vertex order (first-seen, sorted)
        #[arg(long)]
        order: Option<String>,
    },
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = run(cli);
    if let Err(e) = result {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}

/// Install the stderr log subscriber. `--verbose` forces `debug`; otherwise
/// `RUST_LOG` applies, falling back to `warn`.
fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let cwd = std::env::current_dir()?;
    let loaded = GraphrepConfig::find_and_load(&cwd)?;
    if let Some((_, dir)) = &loaded {
        tracing::debug!(dir = %dir.display(), "loaded graphrep.toml");
    }
    let config = loaded.as_ref().map(|(c, dir)| (c, dir.as_path()));

    match cli.command {
        None => {
            let settings = Settings::resolve(&cwd, &Overrides::default(), config)?;
            commands::convert::run(&settings)
        }

        Some(Commands::Convert {
            input,
            output,
            format,
            order,
        }) => {
            let overrides = Overrides {
                input: input.as_deref(),
                output: output.as_deref(),
                format: format.as_deref(),
                order: order.as_deref(),
            };
            let settings = Settings::resolve(&cwd, &overrides, config)?;
            commands::convert::run(&settings)
        }

        Some(Commands::Inspect { input, order }) => {
            let overrides = Overrides {
                input: input.as_deref(),
                order: order.as_deref(),
                ..Overrides::default()
            };
            let settings = Settings::resolve(&cwd, &overrides, config)?;
            commands::inspect::run(&settings.input, settings.order)
        }
    }
}
