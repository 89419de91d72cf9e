use super::table::SoundTable;

/// Split a word into phonetic groups, longest table match first.
///
/// At each position the 3-character substring is tried against the vowel
/// trigraphs, then the 2-character substring against both digraph tables,
/// else a single character is taken. Matching is case-insensitive; the
/// returned groups are slices of `word`, so concatenating them restores
/// the input exactly.
pub fn split_sounds<'a>(table: &SoundTable, word: &'a str) -> Vec<&'a str> {
    let config = table.config();

    // Byte offset of each character, plus an end sentinel, so candidate
    // substrings can be sliced without walking the string repeatedly.
    let mut offsets: Vec<usize> = word.char_indices().map(|(i, _)| i).collect();
    offsets.push(word.len());
    let n = offsets.len() - 1;

    let mut groups = Vec::new();
    let mut pos = 0;
    while pos < n {
        if pos + 3 <= n {
            let candidate = &word[offsets[pos]..offsets[pos + 3]];
            if config.vowel_trigraphs.contains(&candidate.to_lowercase()) {
                groups.push(candidate);
                pos += 3;
                continue;
            }
        }
        if pos + 2 <= n {
            let candidate = &word[offsets[pos]..offsets[pos + 2]];
            let lower = candidate.to_lowercase();
            if config.vowel_digraphs.contains(&lower)
                || config.consonant_digraphs.contains(&lower)
            {
                groups.push(candidate);
                pos += 2;
                continue;
            }
        }
        groups.push(&word[offsets[pos]..offsets[pos + 1]]);
        pos += 1;
    }
    groups
}
