//! Detection of conventionally silent letters, for reading support.
//!
//! The rules are orthographic, not lexical: a leading `h`, a final verb
//! ending `ent`, a final mute `e`, or a final `s x z t p d`. They look at
//! the word as given; callers strip punctuation first.

use serde::Serialize;

/// One run of unpronounced letters, as byte offsets into the word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SilentSpan {
    pub start: usize,
    pub end: usize,
}

/// Final consonants that are usually mute (plural and verb markers).
const SILENT_FINAL_CONSONANTS: &[char] = &['s', 'x', 'z', 't', 'p', 'd'];

/// Find the silent letters of a word.
///
/// The leading-`h` rule combines with one trailing rule; the trailing
/// rules (`ent`, `e`, final consonant) are mutually exclusive, first
/// match wins. Accented finals (`é è ê ë`) are pronounced and never
/// marked. Spans never overlap and come back in word order.
pub fn silent_spans(word: &str) -> Vec<SilentSpan> {
    let chars: Vec<(usize, char)> = word.char_indices().collect();
    let n = chars.len();
    let mut spans = Vec::new();
    if n == 0 {
        return spans;
    }

    if fold(chars[0].1) == 'h' {
        let end = chars.get(1).map_or(word.len(), |&(offset, _)| offset);
        spans.push(SilentSpan { start: 0, end });
    }

    let last = fold(chars[n - 1].1);
    let tail3: String = chars[n.saturating_sub(3)..]
        .iter()
        .map(|&(_, c)| fold(c))
        .collect();

    if n > 4 && tail3 == "ent" {
        spans.push(SilentSpan {
            start: chars[n - 3].0,
            end: word.len(),
        });
    } else if n > 2 && last == 'e' {
        spans.push(SilentSpan {
            start: chars[n - 1].0,
            end: word.len(),
        });
    } else if n > 2 && SILENT_FINAL_CONSONANTS.contains(&last) {
        spans.push(SilentSpan {
            start: chars[n - 1].0,
            end: word.len(),
        });
    }

    spans
}

/// Render a word with its silent letters parenthesized: `tabl(e)`,
/// `(h)ibou`. The notation matches the annotation format used in
/// classroom word lists.
pub fn mark_silent(word: &str) -> String {
    let spans = silent_spans(word);
    if spans.is_empty() {
        return word.to_string();
    }
    let mut out = String::with_capacity(word.len() + spans.len() * 2);
    let mut pos = 0;
    for span in &spans {
        out.push_str(&word[pos..span.start]);
        out.push('(');
        out.push_str(&word[span.start..span.end]);
        out.push(')');
        pos = span.end;
    }
    out.push_str(&word[pos..]);
    out
}

fn fold(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leading_h_is_silent() {
        assert_eq!(mark_silent("hibou"), "(h)ibou");
        assert_eq!(mark_silent("Hôtel"), "(H)ôtel");
    }

    #[test]
    fn final_e_is_silent() {
        assert_eq!(mark_silent("table"), "tabl(e)");
        assert_eq!(mark_silent("porte"), "port(e)");
    }

    #[test]
    fn accented_finals_are_pronounced() {
        assert_eq!(mark_silent("été"), "été");
        assert_eq!(mark_silent("marché"), "marché");
    }

    #[test]
    fn final_consonants_are_silent() {
        assert_eq!(mark_silent("chat"), "cha(t)");
        assert_eq!(mark_silent("renard"), "renar(d)");
        assert_eq!(mark_silent("loup"), "lou(p)");
        assert_eq!(mark_silent("nez"), "ne(z)");
        assert_eq!(mark_silent("deux"), "deu(x)");
        assert_eq!(mark_silent("tables"), "table(s)");
    }

    #[test]
    fn verb_ending_ent_wins_over_final_t() {
        assert_eq!(mark_silent("chantent"), "chant(ent)");
        assert_eq!(mark_silent("jouent"), "jou(ent)");
    }

    #[test]
    fn short_words_keep_their_letters() {
        // Two-letter words would disappear entirely otherwise.
        assert_eq!(mark_silent("le"), "le");
        assert_eq!(mark_silent("de"), "de");
        assert_eq!(mark_silent("vent"), "ven(t)");
    }

    #[test]
    fn leading_and_trailing_rules_combine() {
        assert_eq!(mark_silent("herbe"), "(h)erb(e)");
        assert_eq!(mark_silent("haricots"), "(h)aricot(s)");
    }

    #[test]
    fn spans_carry_byte_offsets() {
        let spans = silent_spans("herbe");
        assert_eq!(
            spans,
            vec![
                SilentSpan { start: 0, end: 1 },
                SilentSpan { start: 4, end: 5 },
            ]
        );
    }

    #[test]
    fn empty_and_unmarked_words() {
        assert!(silent_spans("").is_empty());
        assert_eq!(mark_silent("ami"), "ami");
        assert_eq!(mark_silent("maison"), "maison");
    }
}
