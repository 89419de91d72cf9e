use std::mem;

use crate::sounds::{SoundClass, SoundTable};

/// Walk the phonetic groups and close a syllable wherever a boundary rule
/// fires. Rules are tried in priority order at each step, with the current
/// group already appended:
///
/// 1. no next group — the leftover closes after the loop;
/// 2. vowel · vowel — cut (hiatus, "a·érien");
/// 3. vowel · consonant · vowel — cut, the consonant opens the next
///    syllable ("a·mour");
/// 4. vowel · consonant · consonant · vowel — the first consonant closes
///    this syllable, the second opens the next ("par·tir");
/// 5. anything else — keep accumulating.
pub(super) fn scan_groups(table: &SoundTable, groups: &[&str]) -> Vec<String> {
    use SoundClass::{Consonant, Vowel};

    let n = groups.len();
    let mut syllables = Vec::new();
    let mut current = String::new();

    let mut i = 0;
    while i < n {
        current.push_str(groups[i]);
        if i + 1 >= n {
            break;
        }
        let here = table.class(groups[i]);
        let next = table.class(groups[i + 1]);
        let after = groups.get(i + 2).map(|g| table.class(g));
        let after2 = groups.get(i + 3).map(|g| table.class(g));

        if here == Vowel && next == Vowel {
            syllables.push(mem::take(&mut current));
        } else if here == Vowel && next == Consonant && after == Some(Vowel) {
            syllables.push(mem::take(&mut current));
        } else if here == Vowel
            && next == Consonant
            && after == Some(Consonant)
            && after2 == Some(Vowel)
        {
            current.push_str(groups[i + 1]);
            syllables.push(mem::take(&mut current));
            // The consumed consonant must not be appended again.
            i += 1;
        }
        i += 1;
    }
    if !current.is_empty() {
        syllables.push(current);
    }
    syllables
}
