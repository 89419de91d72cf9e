use serde::Serialize;
use thiserror::Error;
use tracing::debug_span;

use crate::syllabify::syllabify;

use super::tokenize::{tokenize, TokenKind};

/// Knobs for whole-text segmentation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SegmentOptions {
    /// Inserted between the syllables of each word.
    pub separator: String,
    /// Upper bound on the trimmed input length, in characters.
    pub max_chars: usize,
}

impl Default for SegmentOptions {
    fn default() -> Self {
        SegmentOptions {
            separator: ".".to_string(),
            max_chars: 10_000,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SegmentError {
    #[error("text is empty")]
    Empty,
    #[error("text is {len} characters long, the limit is {max}")]
    TooLong { len: usize, max: usize },
}

/// A segmented text: the trimmed input, the rebuilt text with syllable
/// separators, and each separated word on its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Segmented {
    pub original: String,
    pub text: String,
    pub words: Vec<String>,
}

/// Segment a whole text into syllable-separated words.
///
/// Word tokens are syllabified and re-joined with `opts.separator`;
/// whitespace, punctuation and pure digit runs pass through untouched.
/// The input is trimmed first; an empty or over-long text is an error,
/// everything else succeeds (degenerate words resolve through the
/// word-level fallback).
pub fn segment_text(text: &str, opts: &SegmentOptions) -> Result<Segmented, SegmentError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(SegmentError::Empty);
    }
    let len = trimmed.chars().count();
    if len > opts.max_chars {
        return Err(SegmentError::TooLong {
            len,
            max: opts.max_chars,
        });
    }

    let _span = debug_span!("segment", chars = len).entered();

    let mut rebuilt = String::with_capacity(trimmed.len());
    let mut words = Vec::new();
    for token in tokenize(trimmed) {
        let is_digits = token.text.chars().all(|c| c.is_ascii_digit());
        if token.kind == TokenKind::Word && !is_digits {
            let joined = syllabify(token.text).join(&opts.separator);
            rebuilt.push_str(&joined);
            words.push(joined);
        } else {
            rebuilt.push_str(token.text);
        }
    }

    Ok(Segmented {
        original: trimmed.to_string(),
        text: rebuilt,
        words,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn segments_a_sentence() {
        let out = segment_text("Le chat mange.", &SegmentOptions::default()).unwrap();
        assert_eq!(out.original, "Le chat mange.");
        assert_eq!(out.text, "Le chat man.ge.");
        assert_eq!(out.words, vec!["Le", "chat", "man.ge"]);
    }

    #[test]
    fn keeps_apostrophes_and_punctuation() {
        let out = segment_text("l'école est belle !", &SegmentOptions::default()).unwrap();
        assert_eq!(out.text, "l'é.co.le est bel.le !");
        assert_eq!(out.words, vec!["l'é.co.le", "est", "bel.le"]);
    }

    #[test]
    fn digit_runs_pass_through() {
        let out = segment_text("page 12", &SegmentOptions::default()).unwrap();
        assert_eq!(out.text, "pa.ge 12");
        assert_eq!(out.words, vec!["pa.ge"]);
    }

    #[test]
    fn input_is_trimmed() {
        let out = segment_text("  partir  ", &SegmentOptions::default()).unwrap();
        assert_eq!(out.original, "partir");
        assert_eq!(out.text, "par.tir");
    }

    #[test]
    fn custom_separator() {
        let opts = SegmentOptions {
            separator: "-".to_string(),
            ..SegmentOptions::default()
        };
        let out = segment_text("bonjour", &opts).unwrap();
        assert_eq!(out.text, "bon-jour");
    }

    #[test]
    fn empty_text_is_an_error() {
        let opts = SegmentOptions::default();
        assert_eq!(segment_text("", &opts), Err(SegmentError::Empty));
        assert_eq!(segment_text("   \n\t ", &opts), Err(SegmentError::Empty));
    }

    #[test]
    fn over_long_text_is_an_error() {
        let opts = SegmentOptions {
            max_chars: 5,
            ..SegmentOptions::default()
        };
        assert_eq!(
            segment_text("bonjour", &opts),
            Err(SegmentError::TooLong { len: 7, max: 5 })
        );
    }

    #[test]
    fn error_messages_read_well() {
        assert_eq!(SegmentError::Empty.to_string(), "text is empty");
        assert_eq!(
            SegmentError::TooLong { len: 9, max: 5 }.to_string(),
            "text is 9 characters long, the limit is 5"
        );
    }
}
