//! CLI entry point and command dispatch for gear.

mod cmd;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use gear::render::OutputFormat;

#[derive(Parser)]
#[command(name = "gear")]
#[command(version)]
#[command(about = "Go module inspection and vendoring bootstrap", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Inspect a project and print its derived facts
    Inspect {
        /// Project directory to inspect
        #[arg(long, default_value = ".")]
        dir: PathBuf,
        /// Output format
        #[arg(long, value_enum, default_value = "json")]
        format: OutputFormat,
        /// Write output to a file instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Validate a project's readiness for packaging
    Validate {
        /// Validation stage to run (only "pre" exists)
        #[arg(long)]
        stage: String,
        /// Project directory to validate
        #[arg(long, default_value = ".")]
        dir: PathBuf,
        /// Output format
        #[arg(long, value_enum, default_value = "json")]
        format: OutputFormat,
        /// Write output to a file instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Vendor dependencies and print the resulting project facts
    Bootstrap {
        /// Project directory to bootstrap
        #[arg(long, default_value = ".")]
        dir: PathBuf,
        /// Skip running `go mod vendor`
        #[arg(long)]
        no_vendor: bool,
        /// Output format
        #[arg(long, value_enum, default_value = "json")]
        format: OutputFormat,
        /// Write output to a file instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Inspect {
            dir,
            format,
            output,
        } => cmd::inspect::run(&dir, format, output.as_deref()),
        Commands::Validate {
            stage,
            dir,
            format,
            output,
        } => cmd::validate::run(&stage, &dir, format, output.as_deref()),
        Commands::Bootstrap {
            dir,
            no_vendor,
            format,
            output,
        } => cmd::bootstrap::run(&dir, no_vendor, format, output.as_deref()),
    }
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
