use crate::{debug_log, info_log};
use std::fs::{self, File};
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

pub const EMBEDDED_WORDBANK: &str = include_str!("resources/wordbank.txt");

/// Parse a newline-delimited word list, keeping only plain alphabetic tokens.
///
/// Words are lowercased here once so every later comparison is
/// case-insensitive without re-normalizing per query.
pub fn load_wordbank_from_str(data: &str) -> Vec<String> {
    data.lines()
        .map(|line| line.trim().to_lowercase())
        .filter(|word| !word.is_empty() && word.chars().all(|c| c.is_ascii_alphabetic()))
        .collect()
}

pub fn load_wordbank_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let mut words = Vec::new();
    for line in reader.lines() {
        let word = line?.trim().to_lowercase();
        if !word.is_empty() && word.chars().all(|c| c.is_ascii_alphabetic()) {
            words.push(word);
        }
    }
    Ok(words)
}

/// Per-user location of the cached word bank, or None when the platform has
/// no cache directory.
pub fn wordbank_cache_path() -> Option<PathBuf> {
    dirs::cache_dir().map(|dir| dir.join("bee-solver").join("wordbank.txt"))
}

pub fn read_cached_wordbank(path: &Path) -> Option<Vec<String>> {
    match load_wordbank_from_file(path) {
        Ok(words) if !words.is_empty() => Some(words),
        Ok(_) => None,
        Err(e) => {
            debug_log!("No usable word bank cache at {}: {}", path.display(), e);
            None
        }
    }
}

/// Best-effort cache write; a failure is logged and otherwise ignored.
pub fn write_wordbank_cache(path: &Path, words: &[String]) {
    let result = (|| -> io::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut file = File::create(path)?;
        for word in words {
            writeln!(file, "{word}")?;
        }
        Ok(())
    })();
    match result {
        Ok(()) => info_log!("Cached {} words to {}", words.len(), path.display()),
        Err(e) => debug_log!("Failed to cache word bank to {}: {}", path.display(), e),
    }
}

/// Resolve the word bank once, before any solving happens: an explicit file
/// wins, then the per-user cache, then the embedded list (which seeds the
/// cache on first use).
pub fn resolve_wordbank(path: Option<&str>) -> io::Result<Vec<String>> {
    if let Some(path) = path {
        return load_wordbank_from_file(path);
    }

    let cache_path = wordbank_cache_path();
    if let Some(path) = cache_path.as_ref()
        && let Some(words) = read_cached_wordbank(path)
    {
        info_log!("Loaded {} words from cache {}", words.len(), path.display());
        return Ok(words);
    }

    let words = load_wordbank_from_str(EMBEDDED_WORDBANK);
    if let Some(path) = cache_path.as_ref() {
        write_wordbank_cache(path, &words);
    }
    Ok(words)
}
