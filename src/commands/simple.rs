//! Simple interactive CLI mode
//!
//! Text-based game without TUI: one guess per line.

use crate::game::{
    GameError, GameSession, MAX_ATTEMPTS, Statistics, SubmitOutcome, events_from_line,
};
use crate::output::formatters::colored_row;
use crate::output::{print_board, print_distribution};
use crate::wordlists::WordList;
use colored::Colorize;
use rand::Rng;
use std::io::{self, Write};

/// Player request that abandons the current game
enum Next {
    NewGame,
    Quit,
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input or if no target
/// can be picked from `words`.
pub fn run_simple<R: Rng + ?Sized>(words: &WordList, rng: &mut R) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                    Termo - Line Mode                         ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Guess the five-letter word in {MAX_ATTEMPTS} tries.");
    println!("Accents are optional: MACAS counts as MAÇÃS.\n");
    println!("  {} right letter, right spot", " A ".black().on_green().bold());
    println!("  {} right letter, wrong spot", " A ".black().on_yellow().bold());
    println!("  {} letter not in the word\n", " A ".white().on_bright_black());
    println!("Commands: 'quit' to exit, 'new' for new game\n");

    let mut stats = Statistics::default();

    loop {
        let mut session = GameSession::start(words, rng).map_err(|e| e.to_string())?;

        match play_game(&mut session, words)? {
            Some(Next::Quit) => break,
            Some(Next::NewGame) => println!("\n🔄 New game started!\n"),
            None => {
                stats.record(&session);
                print_summary(&session);

                match get_user_input("Play again? (yes/no)")?
                    .to_lowercase()
                    .as_str()
                {
                    "yes" | "y" | "sim" | "s" => println!("\n🔄 New game started!\n"),
                    _ => break,
                }
            }
        }
    }

    if stats.total_games > 0 {
        println!(
            "\nGames: {} | Win Rate: {:.0}%",
            stats.total_games,
            stats.win_rate()
        );
        print_distribution(&stats.guess_distribution, stats.total_games);
    }
    println!("\n👋 Thanks for playing!\n");
    Ok(())
}

/// Drive one session until it ends or the player leaves it
///
/// Returns `None` when the game reached a terminal state.
fn play_game(session: &mut GameSession, words: &WordList) -> Result<Option<Next>, String> {
    while !session.is_over() {
        let turn = session.current_row() + 1;
        let input = get_user_input(&format!("Guess {turn}/{MAX_ATTEMPTS}"))?;

        match input.to_lowercase().as_str() {
            "quit" | "q" | "exit" => return Ok(Some(Next::Quit)),
            "new" | "n" => return Ok(Some(Next::NewGame)),
            _ => {}
        }

        let events = match events_from_line(&input) {
            Ok(events) => events,
            Err(e) => {
                println!("❌ {e}\n");
                continue;
            }
        };

        // Each line is a fresh attempt at the row
        session.clear_guess().map_err(|e| e.to_string())?;

        for event in events {
            match session.apply(event, words) {
                Ok(Some(outcome)) => report_outcome(&outcome),
                Ok(None) => {}
                Err(GameError::SessionTerminated) => break,
                Err(e) => println!("❌ {e}\n"),
            }
        }
    }

    Ok(None)
}

fn report_outcome(outcome: &SubmitOutcome) {
    println!("   {}  {}", colored_row(outcome.feedback()), outcome.feedback().to_emoji());

    match outcome {
        SubmitOutcome::Continue { .. } => println!(),
        SubmitOutcome::Won { attempts, .. } => {
            println!("\n{}", "═".repeat(70).bright_cyan());
            println!(
                "{}",
                "    🎉 🎊 ✨  P A R A B É N S !  ✨ 🎊 🎉    "
                    .bright_green()
                    .bold()
            );
            println!("{}", "═".repeat(70).bright_cyan());

            let performance = match attempts {
                1 => ("🏆 Perfect!", "Incredible hole-in-one!"),
                2 => ("⭐ Excellent!", "Outstanding performance!"),
                3 => ("💫 Great!", "Very well played!"),
                4 => ("✨ Good!", "Nice work!"),
                5 => ("👍 Solved!", "Got it!"),
                _ => ("😅 Phew!", "Just in time!"),
            };
            println!("\n  {}", performance.0.bright_yellow().bold());
            println!("  {}", performance.1.bright_white());
        }
        SubmitOutcome::Lost { target, .. } => {
            println!(
                "\n{} The word was {}.",
                "❌ Out of guesses!".red().bold(),
                target.text().bright_yellow().bold()
            );
        }
    }
}

fn print_summary(session: &GameSession) {
    println!("\n  Guess history:");
    print_board(session);
    println!();
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    // EOF behaves like quit
    if read == 0 {
        return Ok("quit".to_string());
    }

    Ok(input.trim().to_string())
}
