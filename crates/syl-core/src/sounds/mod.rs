//! Sound tables and phonetic grouping.
//!
//! A [`SoundTable`] holds the letter, digraph and trigraph inventories of
//! French, loaded from an embedded TOML document (replaceable at startup
//! via [`SoundTable::init_custom`]). [`split_sounds`] cuts a word into
//! greedy longest-match phonetic groups; the table classifies each group
//! as vowel, consonant or other.

mod config;
mod scan;
mod table;

pub use config::{parse_sounds_toml, SoundConfig, SoundConfigError};
pub use scan::split_sounds;
pub use table::{SoundClass, SoundTable, DEFAULT_TOML};
