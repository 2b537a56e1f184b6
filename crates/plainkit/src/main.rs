//! Plainkit CLI - convert HTML into Plain Go components.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

mod commands;

#[derive(Parser)]
#[command(name = "plainkit")]
#[command(about = "Convert HTML into Go code using the Plain HTML library")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to plainkit.toml config file
    #[arg(short, long, default_value = "plainkit.toml", global = true)]
    config: PathBuf,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a default plainkit.toml
    Init {
        /// Overwrite an existing config file
        #[arg(short, long)]
        yes: bool,
    },

    /// Convert HTML files (or stdin) to Go code
    Convert {
        /// HTML files or directories; reads stdin when omitted
        inputs: Vec<PathBuf>,

        /// Output file for a single input (defaults to stdout)
        #[arg(short, long, conflicts_with = "out_dir")]
        output: Option<PathBuf>,

        /// Output directory when converting several files
        #[arg(long)]
        out_dir: Option<PathBuf>,

        /// Enable htmx attribute conversion
        #[arg(long)]
        htmx: bool,

        /// Enable Alpine.js attribute conversion
        #[arg(long)]
        alpine: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging; stdout is reserved for generated code
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    // Execute command
    match cli.command {
        Commands::Init { yes } => {
            commands::init::run(&cli.config, yes)?;
        }
        Commands::Convert {
            inputs,
            output,
            out_dir,
            htmx,
            alpine,
        } => {
            let args = commands::convert::ConvertArgs {
                inputs,
                output,
                out_dir,
                htmx,
                alpine,
            };
            commands::convert::run(&cli.config, args)?;
        }
    }

    Ok(())
}
