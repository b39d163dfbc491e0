//! Termo - CLI
//!
//! Portuguese five-letter word game with TUI and line modes.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use env_logger::{Env, Target, WriteStyle};
use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use termo::{
    commands::{check_word_list, run_simple, score_words},
    output::{print_check_report, print_score_result},
    wordlists::{PALAVRAS, WordList, loader::load_from_file},
};

#[derive(Parser)]
#[command(
    name = "termo",
    about = "Guess the five-letter Portuguese word in six tries (accents optional)",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word list file, one word per line (default: built-in list)
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<PathBuf>,

    /// Seed for picking targets, for reproducible games
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    /// Write log output to this file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (one guess per line, no TUI)
    Simple,

    /// Score a guess against a target and print the row
    Score {
        /// The guessed word
        guess: String,

        /// The hidden word
        target: String,

        /// Require both words to be in the word list
        #[arg(short, long)]
        listed: bool,
    },

    /// Load the word list and report what a game would use
    Check,
}

/// Route log records to stderr, or to `log_file` when given
fn init_logging(log_file: Option<&Path>) -> Result<()> {
    let mut builder = env_logger::Builder::from_env(Env::default().default_filter_or("warn"));

    if let Some(path) = log_file {
        let file = File::create(path)
            .with_context(|| format!("Failed to create log file {}", path.display()))?;
        builder
            .target(Target::Pipe(Box::new(file)))
            .write_style(WriteStyle::Never);
    }

    builder.init();
    Ok(())
}

/// Load the word list selected by the -w flag
fn load_words(wordlist: Option<&Path>) -> Result<WordList> {
    let words = match wordlist {
        Some(path) => load_from_file(path)?,
        None => WordList::embedded()?,
    };
    info!("Loaded {} playable words", words.len());
    Ok(words)
}

fn make_rng(seed: Option<u64>) -> StdRng {
    seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_file.as_deref())?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(cli.wordlist.as_deref(), cli.seed),
        Commands::Simple => run_simple_command(cli.wordlist.as_deref(), cli.seed),
        Commands::Score {
            guess,
            target,
            listed,
        } => run_score_command(&guess, &target, listed, cli.wordlist.as_deref()),
        Commands::Check => run_check_command(cli.wordlist.as_deref()),
    }
}

fn run_play_command(wordlist: Option<&Path>, seed: Option<u64>) -> Result<()> {
    use termo::interactive::{App, run_tui};

    let words = load_words(wordlist)?;
    let app = App::new(&words, make_rng(seed))?;
    run_tui(app)
}

fn run_simple_command(wordlist: Option<&Path>, seed: Option<u64>) -> Result<()> {
    let words = load_words(wordlist)?;
    let mut rng = make_rng(seed);
    run_simple(&words, &mut rng).map_err(|e| anyhow::anyhow!(e))
}

fn run_score_command(
    guess: &str,
    target: &str,
    listed: bool,
    wordlist: Option<&Path>,
) -> Result<()> {
    let words = if listed {
        Some(load_words(wordlist)?)
    } else {
        None
    };

    let result = score_words(guess, target, words.as_ref()).map_err(|e| anyhow::anyhow!(e))?;
    print_score_result(&result);
    Ok(())
}

fn run_check_command(wordlist: Option<&Path>) -> Result<()> {
    let (raw, source) = match wordlist {
        Some(path) => (
            fs::read_to_string(path)
                .with_context(|| format!("Failed to read word list {}", path.display()))?,
            path.display().to_string(),
        ),
        None => (PALAVRAS.join("\n"), "built-in list".to_string()),
    };

    let report = check_word_list(&raw, &source);
    print_check_report(&report);

    if !report.is_playable() {
        bail!("{source} has no playable words");
    }
    Ok(())
}
