//! Display functions for command results

use super::formatters::{colored_row, create_progress_bar};
use crate::commands::{CheckReport, ScoreResult};
use crate::game::{GameSession, MAX_ATTEMPTS};
use colored::Colorize;

/// Print the result of scoring one guess
pub fn print_score_result(result: &ScoreResult) {
    println!("\n{}", "─".repeat(40).cyan());
    println!(
        "{} → {}",
        result.guess.text().bright_white().bold(),
        result.target.text().bright_yellow().bold()
    );
    println!("{}", "─".repeat(40).cyan());

    println!("\n  {}", colored_row(&result.feedback));
    println!("  {}", result.feedback.to_emoji());
    println!(
        "\n  Correct: {}  Present: {}",
        result.feedback.count_correct().to_string().green(),
        result.feedback.count_present().to_string().yellow()
    );
}

/// Print every evaluated row of a session
pub fn print_board(session: &GameSession) {
    for (i, row) in session.history().iter().enumerate() {
        println!(
            "  {} {}",
            format!("{}.", i + 1).bright_black(),
            colored_row(&row.feedback)
        );
    }
}

/// Print the summary of a word list check
pub fn print_check_report(report: &CheckReport) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} {}", "WORD LIST:".bright_cyan().bold(), report.source);
    println!("{}", "═".repeat(60).cyan());

    println!("\n   Lines accepted:   {}", report.accepted);
    println!(
        "   Playable words:   {}",
        report.playable.to_string().bright_yellow().bold()
    );
    println!("   Accented words:   {}", report.accented);
    println!("   Duplicates:       {}", report.duplicates);
    println!("   Other lengths:    {}", report.rejected.len());

    if !report.rejected.is_empty() {
        println!("\n📋 {}", "Skipped entries:".bright_cyan().bold());
        for (entry, letters) in report.rejected.iter().take(10) {
            println!("   {entry} ({letters} letters)");
        }
        if report.rejected.len() > 10 {
            println!("   … and {} more", report.rejected.len() - 10);
        }
    }
}

/// Print the attempt distribution of finished games
pub fn print_distribution(distribution: &[usize; MAX_ATTEMPTS + 1], games: usize) {
    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for (attempts, &count) in distribution.iter().enumerate().skip(1) {
        let bar = create_progress_bar(count, games, 30);
        println!("   {attempts}: {} {count:3}", bar.green());
    }
}
