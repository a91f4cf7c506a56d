use std::path::PathBuf;

use clap::{Parser, Subcommand};
use env_logger::Env;

mod commands;

#[derive(Parser)]
#[command(name = "sigfile")]
#[command(about = "Signature file parser and inspection tool", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Schema namespace to resolve element and attribute names against
    #[arg(long, global = true)]
    namespace: Option<String>,

    /// Reject elements and attributes that are in no namespace
    #[arg(long, global = true)]
    no_global: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Show a high-level summary of a signature file
    Info {
        /// Signature XML file to inspect
        #[arg(value_hint = clap::ValueHint::FilePath)]
        file: PathBuf,
    },

    /// List the file formats a signature file describes
    Formats {
        /// Signature XML file to inspect
        #[arg(value_hint = clap::ValueHint::FilePath)]
        file: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logger with default level (overridden by RUST_LOG), so
    // the builder's unknown-property diagnostics reach stderr.
    let env = Env::default().default_filter_or("warn");
    env_logger::Builder::from_env(env).init();

    let options = sigfile::ParseOptions {
        target_namespace: cli.namespace,
        allow_global_namespace: !cli.no_global,
        schema: None,
    };

    match cli.command {
        Commands::Info { file } => commands::info::execute(&file, &options),
        Commands::Formats { file } => commands::formats::execute(&file, &options),
    }
}
