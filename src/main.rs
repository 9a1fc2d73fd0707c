use bee_solver::cli::{display_results, parse_cli};
use bee_solver::info_log;
use bee_solver::solver::{Puzzle, solve_puzzle};
use bee_solver::wordbank::resolve_wordbank;

fn main() {
    env_logger::init();
    let cli = parse_cli();

    let wordbank = match resolve_wordbank(cli.wordbank_path.as_deref()) {
        Ok(words) => words,
        Err(e) => {
            eprintln!("Failed to load word bank: {e}");
            std::process::exit(1);
        }
    };
    info_log!("Loaded {} words", wordbank.len());

    let central = cli.central_letter.to_ascii_lowercase();
    if !cli.letters.to_lowercase().contains(central) {
        // Caller contract, not validated by the filter: this combination can
        // never produce a match.
        log::warn!(
            "Central letter '{}' is not among the puzzle letters '{}'",
            cli.central_letter,
            cli.letters
        );
    }

    let puzzle = Puzzle::new(&cli.letters, cli.central_letter, cli.min_length);
    let matches = solve_puzzle(&wordbank, &puzzle);
    display_results(&matches, &cli.letters, cli.central_letter, cli.min_length);
}
