//! Annotation markup for word lists.
//!
//! Classroom word lists mark syllables with a bar and silent letters with
//! parentheses: `ta|ble`, `por|t(e)`, `(h)i|bou`. This module converts
//! between that notation and structured data, in both directions.

use serde::Serialize;

use crate::silent::SilentSpan;

/// Separator between syllables in annotated notation.
pub const SYLLABLE_BAR: char = '|';

/// A word decomposed the way an annotated list entry writes it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Annotation {
    /// Syllable texts with markup stripped; their concatenation is the
    /// bare word.
    pub syllables: Vec<String>,
    /// Silent-letter runs, as byte offsets into the bare word.
    pub silent: Vec<SilentSpan>,
}

impl Annotation {
    /// The bare word, markup removed.
    pub fn word(&self) -> String {
        self.syllables.concat()
    }
}

/// Parse annotated notation.
///
/// Bars split syllables; parentheses mark silent letters. Both are
/// stripped from the text, but the letters the parens wrap stay in it. A
/// dangling `(` marks through to the end of the word; a stray `)` is
/// ignored.
pub fn parse(annotated: &str) -> Annotation {
    let mut syllables = Vec::new();
    let mut silent = Vec::new();
    let mut current = String::new();
    let mut word_len = 0usize;
    let mut open: Option<usize> = None;

    for c in annotated.chars() {
        match c {
            SYLLABLE_BAR => syllables.push(std::mem::take(&mut current)),
            '(' => open = Some(word_len),
            ')' => {
                if let Some(start) = open.take() {
                    silent.push(SilentSpan {
                        start,
                        end: word_len,
                    });
                }
            }
            _ => {
                current.push(c);
                word_len += c.len_utf8();
            }
        }
    }
    if let Some(start) = open {
        silent.push(SilentSpan {
            start,
            end: word_len,
        });
    }
    syllables.push(current);

    Annotation { syllables, silent }
}

/// Render syllables and silent spans back to annotated notation.
///
/// Spans must be sorted, non-overlapping byte offsets into the
/// concatenation of the syllables; zero-length spans are skipped.
pub fn render(syllables: &[String], silent: &[SilentSpan]) -> String {
    let mut out = String::new();
    let mut offset = 0usize;
    let mut spans = silent.iter().filter(|s| s.end > s.start).peekable();
    let mut open = false;

    for (i, syllable) in syllables.iter().enumerate() {
        if i > 0 {
            out.push(SYLLABLE_BAR);
        }
        for c in syllable.chars() {
            if !open {
                if let Some(span) = spans.peek() {
                    if span.start == offset {
                        out.push('(');
                        open = true;
                    }
                }
            }
            out.push(c);
            offset += c.len_utf8();
            if open {
                if let Some(span) = spans.peek() {
                    if span.end <= offset {
                        out.push(')');
                        open = false;
                        spans.next();
                    }
                }
            }
        }
    }
    if open {
        out.push(')');
    }
    out
}
