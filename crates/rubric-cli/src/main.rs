//! rubric CLI — the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "rubric", version, about = "Answer classification for educational interactions")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Grade a submitted answer against an authored interaction
    Grade {
        /// Path to a .toml interaction file
        #[arg(long)]
        interaction: PathBuf,

        /// Submitted answer as JSON (e.g. '{"non_negative_int": 2}')
        #[arg(long)]
        answer: String,

        /// Write a JSON classification report to this path
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Validate authored interaction TOML files
    Validate {
        /// Path to an interaction file or directory
        #[arg(long)]
        interaction: PathBuf,
    },

    /// List registered interactions and their rules
    ListRules {
        /// Filter to a single interaction id
        #[arg(long)]
        interaction: Option<String>,
    },

    /// Create a starter interaction file
    Init,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("rubric=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Grade {
            interaction,
            answer,
            output,
        } => commands::grade::execute(interaction, answer, output),
        Commands::Validate { interaction } => commands::validate::execute(interaction),
        Commands::ListRules { interaction } => commands::list_rules::execute(interaction),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
