use std::collections::BTreeSet;

use serde::Deserialize;

#[derive(Deserialize)]
struct SoundsFile {
    vowels: VowelsSection,
    consonants: ConsonantsSection,
}

#[derive(Deserialize)]
struct VowelsSection {
    letters: String,
    #[serde(default)]
    digraphs: Vec<String>,
    #[serde(default)]
    trigraphs: Vec<String>,
}

#[derive(Deserialize)]
struct ConsonantsSection {
    letters: String,
    #[serde(default)]
    digraphs: Vec<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum SoundConfigError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("{0} is empty")]
    EmptyLetters(&'static str),
    #[error("{table} entry {entry:?} is not {expected} characters")]
    WrongLength {
        table: &'static str,
        entry: String,
        expected: usize,
    },
    #[error("entry is not lowercase: {0:?}")]
    NotLowercase(String),
    #[error("entry is in both vowel and consonant digraphs: {0:?}")]
    AmbiguousDigraph(String),
    #[error("sound table already initialized")]
    AlreadyInitialized,
}

/// Validated sound tables: character classes plus multi-letter groups.
#[derive(Debug, Clone)]
pub struct SoundConfig {
    pub vowel_letters: BTreeSet<char>,
    pub consonant_letters: BTreeSet<char>,
    pub vowel_digraphs: BTreeSet<String>,
    pub vowel_trigraphs: BTreeSet<String>,
    pub consonant_digraphs: BTreeSet<String>,
}

/// Parse TOML text into validated sound tables.
pub fn parse_sounds_toml(toml_str: &str) -> Result<SoundConfig, SoundConfigError> {
    let file: SoundsFile =
        toml::from_str(toml_str).map_err(|e| SoundConfigError::Parse(e.to_string()))?;

    let vowel_letters = parse_letters("vowels.letters", &file.vowels.letters)?;
    let consonant_letters = parse_letters("consonants.letters", &file.consonants.letters)?;
    let vowel_digraphs = parse_groups("vowels.digraphs", file.vowels.digraphs, 2)?;
    let vowel_trigraphs = parse_groups("vowels.trigraphs", file.vowels.trigraphs, 3)?;
    let consonant_digraphs = parse_groups("consonants.digraphs", file.consonants.digraphs, 2)?;

    // A digraph present in both tables would make classification order-dependent.
    if let Some(entry) = vowel_digraphs.intersection(&consonant_digraphs).next() {
        return Err(SoundConfigError::AmbiguousDigraph(entry.clone()));
    }

    Ok(SoundConfig {
        vowel_letters,
        consonant_letters,
        vowel_digraphs,
        vowel_trigraphs,
        consonant_digraphs,
    })
}

fn parse_letters(
    table: &'static str,
    letters: &str,
) -> Result<BTreeSet<char>, SoundConfigError> {
    if letters.is_empty() {
        return Err(SoundConfigError::EmptyLetters(table));
    }
    if letters != letters.to_lowercase() {
        return Err(SoundConfigError::NotLowercase(letters.to_string()));
    }
    Ok(letters.chars().collect())
}

fn parse_groups(
    table: &'static str,
    entries: Vec<String>,
    expected: usize,
) -> Result<BTreeSet<String>, SoundConfigError> {
    let mut set = BTreeSet::new();
    for entry in entries {
        if entry.chars().count() != expected {
            return Err(SoundConfigError::WrongLength {
                table,
                entry,
                expected,
            });
        }
        if entry != entry.to_lowercase() {
            return Err(SoundConfigError::NotLowercase(entry));
        }
        set.insert(entry);
    }
    Ok(set)
}
