//! wellcheck CLI — the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "wellcheck", version, about = "Self-assessment and knowledge-quiz engine")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run one assessment or quiz from start to finish
    Run {
        /// Path to the catalog .toml file
        #[arg(long)]
        catalog: PathBuf,

        /// Category id (see `wellcheck list`)
        #[arg(long)]
        category: String,

        /// Entry id within the category
        #[arg(long)]
        entry: String,

        /// Scripted answers as comma-separated 1-based option numbers
        /// (e.g. "2,3,2,4,3"); prompts interactively when omitted
        #[arg(long)]
        answers: Option<String>,

        /// Directory holding the progress files
        #[arg(long, default_value = "./wellcheck-data")]
        data_dir: PathBuf,
    },

    /// Validate catalog TOML files
    Validate {
        /// Path to a catalog file or directory
        #[arg(long)]
        catalog: PathBuf,
    },

    /// List the categories and entries of a catalog
    List {
        /// Path to the catalog .toml file
        #[arg(long)]
        catalog: PathBuf,
    },

    /// Show completions and unlocked badges
    Progress {
        /// Path to the catalog .toml file
        #[arg(long)]
        catalog: PathBuf,

        /// Directory holding the progress files
        #[arg(long, default_value = "./wellcheck-data")]
        data_dir: PathBuf,
    },

    /// Create starter catalog files
    Init,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("wellcheck=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Run {
            catalog,
            category,
            entry,
            answers,
            data_dir,
        } => commands::run::execute(catalog, category, entry, answers, data_dir),
        Commands::Validate { catalog } => commands::validate::execute(catalog),
        Commands::List { catalog } => commands::list::execute(catalog),
        Commands::Progress { catalog, data_dir } => commands::progress::execute(catalog, data_dir),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
