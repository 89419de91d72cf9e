//! Property-based tests for the syllabifier.
//!
//! Generates random French-looking tokens via proptest and verifies the
//! structural invariants after every call.

use proptest::prelude::*;

use crate::sounds::SoundTable;
use crate::syllabify::{clean_word, syllabify, syllabify_with};

// ---------------------------------------------------------------------------
// Strategy: weighted random French-looking tokens
// ---------------------------------------------------------------------------

fn arb_french_char() -> impl Strategy<Value = char> {
    prop_oneof![
        6 => prop::sample::select("aeiouy".chars().collect::<Vec<_>>()),
        2 => prop::sample::select("àâéèêëîïôöùûüœç".chars().collect::<Vec<_>>()),
        8 => prop::sample::select("bcdfghjklmnpqrstvwxz".chars().collect::<Vec<_>>()),
        1 => prop::sample::select(vec!['\'', '-', '.', '!', '?', '3']),
        1 => prop::sample::select("AEOSTublr".chars().collect::<Vec<_>>()),
    ]
}

fn arb_token() -> impl Strategy<Value = String> {
    prop::collection::vec(arb_french_char(), 0..14)
        .prop_map(|chars| chars.into_iter().collect())
}

// ---------------------------------------------------------------------------
// Invariant checks — run on every generated token
// ---------------------------------------------------------------------------

fn assert_invariants(word: &str, syllables: &[String]) {
    let cleaned = clean_word(word);

    if word.is_empty() {
        assert!(syllables.is_empty(), "empty input must yield no syllables");
        return;
    }
    if cleaned.is_empty() {
        // Separator-only tokens pass through whole.
        assert_eq!(
            syllables,
            &[word.to_string()],
            "separator-only token must pass through: word={word:?}"
        );
        return;
    }

    assert!(
        syllables.iter().all(|s| !s.is_empty()),
        "no syllable may be empty: word={word:?}, got={syllables:?}"
    );
    assert_eq!(
        syllables.concat(),
        cleaned,
        "syllables must spell the cleaned word: word={word:?}, got={syllables:?}"
    );
    if cleaned.chars().count() <= 3 {
        assert_eq!(
            syllables,
            &[cleaned.clone()],
            "short words must stay whole: word={word:?}"
        );
    }
}

// ---------------------------------------------------------------------------
// proptest entry point
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(512))]

    #[test]
    fn syllables_spell_the_cleaned_word(word in arb_token()) {
        let syllables = syllabify(&word);
        assert_invariants(&word, &syllables);
    }

    #[test]
    fn boundaries_ignore_case(word in arb_token()) {
        let lower = word.to_lowercase();
        let from_original: Vec<usize> = syllabify(&word)
            .iter()
            .map(|s| s.chars().count())
            .collect();
        let from_lower: Vec<usize> = syllabify(&lower)
            .iter()
            .map(|s| s.chars().count())
            .collect();
        prop_assert_eq!(
            from_original,
            from_lower,
            "case must not move boundaries: word={:?}",
            word
        );
    }

    #[test]
    fn letters_only_table_still_reconstructs(word in arb_token()) {
        // A table without any multi-letter groups degrades to per-letter
        // groups; the structural invariants must survive that.
        let config = crate::sounds::parse_sounds_toml(
            "[vowels]\nletters = \"aeiouyàâéèêëîïôöùûüœ\"\n\n[consonants]\nletters = \"bcdfghjklmnpqrstvwxzç\"\n",
        ).expect("minimal table must parse");
        let table = SoundTable::from_config(config);
        let syllables = syllabify_with(&table, &word);
        assert_invariants(&word, &syllables);
    }
}
