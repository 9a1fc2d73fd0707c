use clap::Parser;

/// Bee Solver CLI options
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// All letters allowed in the puzzle
    pub letters: String,

    /// The central letter that must appear in every word
    pub central_letter: char,

    /// Minimum word length
    #[arg(short = 'm', long = "min-length", default_value_t = 4)]
    pub min_length: usize,

    /// Path to a newline-delimited word bank file
    #[arg(short = 'i', long = "input")]
    pub wordbank_path: Option<String>,
}

#[must_use]
pub fn parse_cli() -> Cli {
    Cli::parse()
}

// UI output functions

/// Lexicographically sorted copy of the results, compared case-insensitively.
#[must_use]
pub fn sort_results(words: &[String]) -> Vec<String> {
    let mut sorted = words.to_vec();
    sorted.sort_by_key(|word| word.to_lowercase());
    sorted
}

/// Print the solution: a header restating the puzzle, one word per line in
/// sorted order, then the total count. Echoes the letters and central letter
/// exactly as the user typed them.
pub fn display_results(words: &[String], letters: &str, central_letter: char, min_length: usize) {
    println!(
        "Valid words (at least {min_length} letters long, including '{central_letter}', using only letters from '{letters}'):"
    );
    for word in sort_results(words) {
        println!("{word}");
    }
    println!("\nTotal words found: {}", words.len());
}
