// Library interface for bee-solver
// This allows integration tests to access internal modules

pub mod cli;
pub mod logging;
pub mod solver;
pub mod wordbank;

// Re-export commonly used items for easier testing
pub use cli::{display_results, sort_results};
pub use solver::{Puzzle, solve_puzzle};
pub use wordbank::{load_wordbank_from_file, load_wordbank_from_str, resolve_wordbank};
