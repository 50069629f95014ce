//! Display functions for command results

use super::formatters::create_progress_bar;
use crate::commands::RankReport;
use colored::Colorize;

/// Number of letters shown in the frequency table
const LETTER_ROWS: usize = 10;

/// Print the result of ranking a word list
pub fn print_rank_report(report: &RankReport) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "WORD LIST RANKING".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {} words in the list", report.total_words);

    let max_score = report
        .top_words
        .first()
        .map_or(0.0, |(_, score)| *score);

    println!("\n{}", "Best letter coverage:".bright_cyan().bold());
    for (i, (word, score)) in report.top_words.iter().enumerate() {
        let bar = create_progress_bar(*score, max_score, 30);
        println!(
            "  {:>3}. {} [{}] {}",
            (i + 1).to_string().bright_black(),
            word.to_uppercase().bright_white().bold(),
            bar.green(),
            format!("{score:.4}").bright_yellow()
        );
    }

    let max_prob = report.letters.first().map_or(0.0, |(_, p)| *p);

    println!("\n{}", "Most frequent letters:".bright_cyan().bold());
    for (letter, probability) in report.letters.iter().take(LETTER_ROWS) {
        let bar = create_progress_bar(*probability, max_prob, 30);
        println!(
            "    {}  [{}] {}",
            letter.to_uppercase().to_string().bright_white().bold(),
            bar.green(),
            format!("{probability:.4}").bright_yellow()
        );
    }
    println!();
}
