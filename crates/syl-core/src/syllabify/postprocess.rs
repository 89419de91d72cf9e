use tracing::debug;

use crate::sounds::{split_sounds, SoundClass, SoundTable};

/// Trailing merges, in fixed order, each applied only while more than one
/// syllable remains. They run unconditionally after the scan and do not
/// re-check the boundary rules.
pub(super) fn merge_trailing(table: &SoundTable, syllables: &mut Vec<String>) {
    merge_lone_consonant(table, syllables);
    merge_silent_e(table, syllables);
}

/// A final syllable that is a single consonant-bearing group folds into
/// its predecessor.
fn merge_lone_consonant(table: &SoundTable, syllables: &mut Vec<String>) {
    if syllables.len() <= 1 {
        return;
    }
    let last = &syllables[syllables.len() - 1];
    let groups = split_sounds(table, last);
    if groups.len() == 1 && table.class(groups[0]) == SoundClass::Consonant {
        debug!(last = %last, "folding trailing consonant");
        fold_last(syllables);
    }
}

/// A final "e" or "es" after a consonant is unpronounced; keep it attached
/// to the syllable it follows ("fon·taine", not "fon·tain·e").
fn merge_silent_e(table: &SoundTable, syllables: &mut Vec<String>) {
    if syllables.len() <= 1 {
        return;
    }
    let last = &syllables[syllables.len() - 1];
    if !(last.eq_ignore_ascii_case("e") || last.eq_ignore_ascii_case("es")) {
        return;
    }
    let previous_ends_in_consonant = syllables[syllables.len() - 2]
        .chars()
        .last()
        .is_some_and(|c| table.is_consonant_letter(c));
    if previous_ends_in_consonant {
        debug!(last = %last, "folding silent e");
        fold_last(syllables);
    }
}

fn fold_last(syllables: &mut Vec<String>) {
    if let Some(last) = syllables.pop() {
        if let Some(previous) = syllables.last_mut() {
            previous.push_str(&last);
        }
    }
}
