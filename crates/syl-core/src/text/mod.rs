//! Whole-text segmentation.
//!
//! Splits a text into tokens, syllabifies each word token, and rebuilds
//! the text with separator-joined syllables. Everything that is not a
//! word (whitespace, punctuation, digit runs) passes through untouched.

mod segment;
mod tokenize;

pub use segment::{segment_text, SegmentError, SegmentOptions, Segmented};
pub use tokenize::{tokenize, Token, TokenKind};
