//! Build script to generate the embedded word list
//!
//! Reads the bundled word list and generates Rust source with a const array.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

const WORDS_FILE: &str = "data/words.txt";

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    let content = fs::read_to_string(WORDS_FILE)
        .unwrap_or_else(|e| panic!("Failed to read {WORDS_FILE}: {e}"));

    let words: Vec<&str> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    let count = words.len();

    let output_path = Path::new(&out_dir).join("words.rs");
    let mut output = fs::File::create(&output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated word list").unwrap();
    writeln!(output, "//").unwrap();
    writeln!(
        output,
        "// Five-letter English words, most common first ({count} words)"
    )
    .unwrap();
    writeln!(output).unwrap();
    writeln!(
        output,
        "/// Bundled five-letter words, ordered most common first"
    )
    .unwrap();
    writeln!(output, "pub const WORDS: &[&str] = &[").unwrap();

    for word in words {
        writeln!(output, "    \"{word}\",").unwrap();
    }

    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of words in WORDS").unwrap();
    writeln!(output, "pub const WORDS_COUNT: usize = {count};").unwrap();

    // Rebuild if the word list changes
    println!("cargo:rerun-if-changed={WORDS_FILE}");
}
