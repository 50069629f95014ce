//! Interactive assistant mode
//!
//! Line-based interactive loop: suggests a guess each round, reads the
//! feedback marks, and narrows the candidate pool.

use crate::core::{LetterMark, WORD_LEN, Word};
use crate::output::formatters::marks_to_squares;
use crate::solver::{GuessSession, PolicyType, SessionState, rank_by_score};
use colored::Colorize;
use std::io::{self, Write};

/// Show the full candidate list when at most this many words remain
const LIST_DISPLAY_LIMIT: usize = 50;

/// Run the interactive assistant
///
/// # Errors
///
/// Returns an error if the word list is empty or reading user input fails.
#[allow(clippy::too_many_lines)] // Interactive game loop requires detailed handling
pub fn run_assist(words: Vec<Word>, policy: &PolicyType) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║               Guessmate - Interactive Assistant              ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("I'll suggest guesses that cover the most frequent letters.");
    println!("After each guess, enter the feedback marks:\n");
    println!("  - Use G/g/🟩 for green (correct position)");
    println!("  - Use Y/y/🟨 for yellow (in the word, wrong position)");
    println!("  - Use -/_/⬜ for gray (not in the word)");
    println!("  - Or type 'win' if you got it right!\n");
    println!("Commands: 'quit' to exit, 'new' for a new session\n");

    // Sort once at startup so pool order is score rank
    let ranked = rank_by_score(&words).map_err(|e| e.to_string())?;

    let mut session = GuessSession::new(ranked.clone());
    let mut history: Vec<(Word, [LetterMark; WORD_LEN])> = Vec::new();

    loop {
        let state = session.advance().clone();

        match state {
            SessionState::Unsolvable => {
                println!(
                    "\n{} No candidates remain! The feedback so far is contradictory,",
                    "❌".red()
                );
                println!("or the answer is not in the word list.\n");

                match get_user_input("Start over? (yes/no)")?.to_lowercase().as_str() {
                    "yes" | "y" | "new" => {
                        session = GuessSession::new(ranked.clone());
                        history.clear();
                        println!("\n🔄 New session started!\n");
                    }
                    _ => {
                        println!("\n👋 Thanks for playing!\n");
                        return Ok(());
                    }
                }
                continue;
            }
            SessionState::Solved(word) => {
                print_victory(&word, &history);

                match get_user_input("Play again? (yes/no)")?.to_lowercase().as_str() {
                    "yes" | "y" => {
                        session = GuessSession::new(ranked.clone());
                        history.clear();
                        println!("\n🔄 New session started!\n");
                        continue;
                    }
                    _ => {
                        println!("\n👋 Thanks for playing!\n");
                        return Ok(());
                    }
                }
            }
            SessionState::Active => {}
        }

        let pool_len = session.pool().len();

        println!("────────────────────────────────────────────────────────────");
        println!("Round {}: {pool_len} candidates remaining", session.round());
        println!("────────────────────────────────────────────────────────────");

        if pool_len <= LIST_DISPLAY_LIMIT {
            println!("\nRemaining candidates:");
            for word in session.pool() {
                println!("  • {}", word.text().to_uppercase());
            }
        }

        let (top_score, pool_order) = {
            let suggestions = session
                .suggestions()
                .ok_or("No candidates available")?;
            (
                suggestions.top_score.clone(),
                suggestions.pool_order.clone(),
            )
        };

        println!(
            "\n📊 Best letter coverage: {}",
            top_score.text().to_uppercase().bright_white().bold()
        );
        if pool_order != top_score {
            println!(
                "   Most common word:     {}",
                pool_order.text().to_uppercase().bright_white()
            );
        }

        let default_guess = session
            .recommend(policy)
            .cloned()
            .unwrap_or_else(|| top_score.clone());

        // Read the word that was actually played
        let guess = loop {
            let prompt = format!("Your guess (Enter = {})", default_guess.text().to_uppercase());
            let input = get_user_input(&prompt)?;

            match input.to_lowercase().as_str() {
                "" => break Some(default_guess.clone()),
                "quit" | "q" | "exit" => {
                    println!("\n👋 Thanks for playing!\n");
                    return Ok(());
                }
                "new" | "n" => {
                    session = GuessSession::new(ranked.clone());
                    history.clear();
                    println!("\n🔄 New session started!\n");
                    break None;
                }
                word => match Word::new(word) {
                    Ok(word) => break Some(word),
                    Err(e) => println!("❌ {e}\n"),
                },
            }
        };

        let Some(guess) = guess else { continue };

        // Read the feedback marks for that guess
        let marks = loop {
            let input = get_user_input("Feedback (G/Y/-, 'win', or command)")?.to_lowercase();

            match input.as_str() {
                "quit" | "q" | "exit" => {
                    println!("\n👋 Thanks for playing!\n");
                    return Ok(());
                }
                "new" | "n" => {
                    session = GuessSession::new(ranked.clone());
                    history.clear();
                    println!("\n🔄 New session started!\n");
                    break None;
                }
                "win" | "correct" | "yes" | "solved" => {
                    // All greens: the played guess is the answer
                    break Some([LetterMark::Exact; WORD_LEN]);
                }
                _ => {
                    if let Some(marks) = LetterMark::parse_line(&input) {
                        break Some(marks);
                    }
                    println!("❌ Invalid marks! Use G/Y/-, 'win', or '🟩🟨⬜🟩🟨'\n");
                }
            }
        };

        if let Some(marks) = marks {
            history.push((guess.clone(), marks));
            session.record(&guess, &marks);
        }
    }
}

/// Print the victory banner with the session's guess history
fn print_victory(word: &Word, history: &[(Word, [LetterMark; WORD_LEN])]) {
    println!("\n{}", "═".repeat(70).bright_cyan());
    println!(
        "{}",
        "    🎉 🎊 ✨  W O R D   F O U N D !  ✨ 🎊 🎉    "
            .bright_green()
            .bold()
    );
    println!("{}", "═".repeat(70).bright_cyan());

    println!(
        "\n  The word is {}",
        word.text().to_uppercase().bright_yellow().bold()
    );

    if !history.is_empty() {
        let rounds = history.len();
        println!(
            "  Found in {} {}",
            rounds.to_string().bright_cyan().bold(),
            if rounds == 1 { "guess" } else { "guesses" }
        );

        println!("\n  Guess history:");
        for (i, (guess, marks)) in history.iter().enumerate() {
            println!(
                "    {}. {} {}",
                (i + 1).to_string().bright_black(),
                guess.text().to_uppercase().bright_white().bold(),
                marks_to_squares(marks)
            );
        }
    }

    println!("\n{}", "═".repeat(70).bright_cyan());
    println!();
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok(input.trim().to_string())
}
