use std::fs;
use std::process;

use syl_core::sounds::{parse_sounds_toml, SoundTable, DEFAULT_TOML};
use syl_core::syllabify::syllabify_with;

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

pub fn sounds_export() {
    print!("{DEFAULT_TOML}");
}

pub fn sounds_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let config = die!(parse_sounds_toml(&content), "Error: {}");
    println!(
        "OK: {} vowel letters, {} consonant letters, {} digraphs, {} trigraphs",
        config.vowel_letters.len(),
        config.consonant_letters.len(),
        config.vowel_digraphs.len() + config.consonant_digraphs.len(),
        config.vowel_trigraphs.len()
    );
}

/// Syllabify one word with a candidate table, without installing it as
/// the process-wide default.
pub fn check_word(file: &str, word: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let config = die!(parse_sounds_toml(&content), "Error: {}");
    let table = SoundTable::from_config(config);
    println!("{}", syllabify_with(&table, word).join("."));
}
