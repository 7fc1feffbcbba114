//! conjuga CLI: the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod console;

#[derive(Parser)]
#[command(
    name = "conjuga",
    version,
    about = "Cloze drills for verb conjugations"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a sentence corpus and start a fill-in-the-blank quiz
    Quiz {
        /// Difficulty from 1 (easy) to 10 (hard); asked interactively if omitted
        #[arg(long)]
        difficulty: Option<i64>,

        /// Number of verbs to sample; asked interactively if omitted
        #[arg(long)]
        count: Option<usize>,

        /// Space-separated tense-group indices (e.g. "0 3"); asked if omitted
        #[arg(long)]
        tenses: Option<String>,

        /// Ranked vocabulary file (overrides config)
        #[arg(long)]
        vocabulary: Option<PathBuf>,

        /// RNG seed for a reproducible drill (overrides config)
        #[arg(long)]
        seed: Option<u64>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Print the conjugation table of a verb
    Conjugate {
        /// Verb infinitive
        verb: String,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Print the definitions of a word
    Define {
        /// Word or conjugated form
        word: String,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Create a starter config and vocabulary list
    Init,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Quiz {
            difficulty,
            count,
            tenses,
            vocabulary,
            seed,
            config,
        } => {
            commands::quiz::execute(commands::quiz::QuizArgs {
                difficulty,
                count,
                tenses,
                vocabulary,
                seed,
                config,
            })
            .await
        }
        Commands::Conjugate { verb, config } => commands::conjugate::execute(verb, config).await,
        Commands::Define { word, config } => commands::define::execute(word, config).await,
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
