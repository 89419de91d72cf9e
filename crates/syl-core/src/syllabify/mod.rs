//! French word syllabification.
//!
//! Splits a word into phonetic groups, walks them with a three-group
//! lookahead to place syllable cuts, then applies the trailing merges
//! (lone consonant, silent e/es) and verifies that the result still
//! spells the cleaned word. Any mismatch falls back to the whole word
//! unsplit: the output is a reading aid, never an error.

mod postprocess;
mod rules;

#[cfg(test)]
mod tests;

use tracing::debug_span;

use crate::sounds::{split_sounds, SoundTable};

use postprocess::merge_trailing;
use rules::scan_groups;

/// Characters stripped from a word before syllabification. Apostrophes
/// are kept: they sit inside elided forms ("l'ami") and must survive
/// reconstruction.
pub const PUNCTUATION: &[char] = &[
    '.', ',', '/', '#', '!', '$', '%', '^', '&', '*', ';', ':', '{', '}', '=', '-', '_', '`',
    '~', '(', ')', '?',
];

/// Remove the punctuation exclusion set, keeping everything else as is.
pub fn clean_word(word: &str) -> String {
    word.chars().filter(|c| !PUNCTUATION.contains(c)).collect()
}

/// Syllabify one word with the global sound table.
pub fn syllabify(word: &str) -> Vec<String> {
    syllabify_with(SoundTable::global(), word)
}

/// Syllabify one word with an explicit sound table.
///
/// Never fails: separator-only tokens come back whole, cleaned words of
/// three characters or fewer come back as a single syllable, and any
/// internal inconsistency resolves to the unsplit cleaned word.
pub fn syllabify_with(table: &SoundTable, word: &str) -> Vec<String> {
    let cleaned = clean_word(word);
    if cleaned.is_empty() {
        if word.is_empty() {
            return Vec::new();
        }
        // The token was pure punctuation ("-", "...") — pass it through.
        return vec![word.to_string()];
    }
    // Short-word policy: raw character count of the cleaned word.
    if cleaned.chars().count() <= 3 {
        return vec![cleaned];
    }

    let _span = debug_span!("syllabify", word = %cleaned).entered();

    let groups = split_sounds(table, &cleaned);
    let mut syllables = scan_groups(table, &groups);
    merge_trailing(table, &mut syllables);

    // The cuts only ever move whole groups, so the syllables must spell
    // the cleaned word; if a rule interaction ever breaks that, an
    // unsplit word beats a corrupted one.
    if syllables.concat() != cleaned {
        return vec![cleaned];
    }
    syllables
}
