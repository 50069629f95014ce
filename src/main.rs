//! Guessmate - CLI
//!
//! Interactive word-guessing assistant using letter-frequency scoring.

use anyhow::Result;
use clap::{Parser, Subcommand};
use guessmate::{
    commands::{rank_words, run_assist},
    core::Word,
    output::print_rank_report,
    solver::PolicyType,
    wordlists::{WORDS, loader::words_from_slice},
};

#[derive(Parser)]
#[command(
    name = "guessmate",
    about = "Interactive word-guessing assistant using letter-frequency scoring",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Suggestion policy: score (default), order, random
    #[arg(short, long, global = true, default_value = "score")]
    policy: String,

    /// Wordlist: 'embedded' (default) or path to a file
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive assistant (default)
    Assist,

    /// Rank a word list by letter coverage
    Rank {
        /// Number of top words to show
        #[arg(short, long, default_value = "20")]
        top: usize,
    },
}

/// Load the word list based on the -w flag
///
/// - "embedded": the bundled list, most common words first
/// - "<path>": load a custom list from a file
fn load_wordlist(wordlist_mode: &str) -> Result<Vec<Word>> {
    use guessmate::wordlists::loader::load_from_file;

    match wordlist_mode {
        "embedded" => Ok(words_from_slice(WORDS)),
        path => Ok(load_from_file(path)?),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let words = load_wordlist(&cli.wordlist)?;

    // Default to the assistant if no command given
    let command = cli.command.unwrap_or(Commands::Assist);

    match command {
        Commands::Assist => {
            let policy = PolicyType::from_name(&cli.policy);
            run_assist(words, &policy).map_err(|e| anyhow::anyhow!(e))
        }
        Commands::Rank { top } => {
            let report = rank_words(&words, top).map_err(|e| anyhow::anyhow!(e))?;
            print_rank_report(&report);
            Ok(())
        }
    }
}
