use std::fmt;
use std::sync::OnceLock;

use super::config::{parse_sounds_toml, SoundConfig, SoundConfigError};

/// Default tables, embedded at compile time (validated by build.rs).
pub const DEFAULT_TOML: &str = include_str!("default_sounds.toml");

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

/// Classification of one phonetic group.
///
/// The two predicates below are not complements: digits, apostrophes and
/// similar residue are `Other`, and the boundary rules must treat them as
/// "keep accumulating".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundClass {
    Vowel,
    Consonant,
    Other,
}

impl fmt::Display for SoundClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SoundClass::Vowel => "vowel",
            SoundClass::Consonant => "consonant",
            SoundClass::Other => "other",
        };
        f.write_str(s)
    }
}

pub struct SoundTable {
    config: SoundConfig,
}

impl SoundTable {
    /// Set custom TOML before first `global()` call.
    pub fn init_custom(toml_content: String) -> Result<(), SoundConfigError> {
        // Validate eagerly
        parse_sounds_toml(&toml_content)?;
        CUSTOM_TOML
            .set(toml_content)
            .map_err(|_| SoundConfigError::AlreadyInitialized)
    }

    /// Get or initialize the global singleton.
    pub fn global() -> &'static SoundTable {
        static INSTANCE: OnceLock<SoundTable> = OnceLock::new();
        INSTANCE.get_or_init(|| {
            let toml_str = CUSTOM_TOML
                .get()
                .map(|s| s.as_str())
                .unwrap_or(DEFAULT_TOML);
            let config = parse_sounds_toml(toml_str).expect("sound TOML must be valid");
            SoundTable { config }
        })
    }

    /// Build a standalone table, bypassing the singleton.
    pub fn from_config(config: SoundConfig) -> Self {
        SoundTable { config }
    }

    pub fn config(&self) -> &SoundConfig {
        &self.config
    }

    /// Whether a phonetic group carries a vowel sound.
    ///
    /// True for the multi-letter vowel groups and for any group whose first
    /// character is a vowel letter, except a leading `y` directly followed
    /// by another vowel letter ("yeux"): that `y` is a yod and the group
    /// behaves as a consonant.
    pub fn is_vowel_sound(&self, group: &str) -> bool {
        let lower = group.to_lowercase();
        if self.config.vowel_trigraphs.contains(&lower)
            || self.config.vowel_digraphs.contains(&lower)
        {
            return true;
        }
        let mut chars = lower.chars();
        let Some(first) = chars.next() else {
            return false;
        };
        if first == 'y' {
            if let Some(second) = chars.next() {
                if self.config.vowel_letters.contains(&second) {
                    return false;
                }
            }
        }
        self.config.vowel_letters.contains(&first)
    }

    /// Whether a phonetic group carries a consonant sound.
    pub fn is_consonant_sound(&self, group: &str) -> bool {
        let lower = group.to_lowercase();
        if self.config.consonant_digraphs.contains(&lower) {
            return true;
        }
        if self.config.vowel_trigraphs.contains(&lower)
            || self.config.vowel_digraphs.contains(&lower)
        {
            return false;
        }
        let mut chars = lower.chars();
        let Some(first) = chars.next() else {
            return false;
        };
        if first == 'y' {
            if let Some(second) = chars.next() {
                if self.config.vowel_letters.contains(&second) {
                    return true;
                }
            }
        }
        self.config.consonant_letters.contains(&first)
    }

    pub fn class(&self, group: &str) -> SoundClass {
        if self.is_vowel_sound(group) {
            SoundClass::Vowel
        } else if self.is_consonant_sound(group) {
            SoundClass::Consonant
        } else {
            SoundClass::Other
        }
    }

    pub fn is_vowel_letter(&self, c: char) -> bool {
        let c = c.to_lowercase().next().unwrap_or(c);
        self.config.vowel_letters.contains(&c)
    }

    pub fn is_consonant_letter(&self, c: char) -> bool {
        let c = c.to_lowercase().next().unwrap_or(c);
        self.config.consonant_letters.contains(&c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_letters() {
        let table = SoundTable::global();
        assert_eq!(table.class("a"), SoundClass::Vowel);
        assert_eq!(table.class("é"), SoundClass::Vowel);
        assert_eq!(table.class("b"), SoundClass::Consonant);
        assert_eq!(table.class("ç"), SoundClass::Consonant);
    }

    #[test]
    fn vowel_groups() {
        let table = SoundTable::global();
        assert!(table.is_vowel_sound("ou"));
        assert!(table.is_vowel_sound("eau"));
        assert!(table.is_vowel_sound("oin"));
        assert!(!table.is_consonant_sound("ou"));
        assert!(!table.is_consonant_sound("eau"));
    }

    #[test]
    fn consonant_groups() {
        let table = SoundTable::global();
        assert!(table.is_consonant_sound("ch"));
        assert!(table.is_consonant_sound("br"));
        assert!(table.is_consonant_sound("gn"));
        assert!(!table.is_vowel_sound("ch"));
    }

    #[test]
    fn matching_ignores_case() {
        let table = SoundTable::global();
        assert_eq!(table.class("OU"), SoundClass::Vowel);
        assert_eq!(table.class("Ch"), SoundClass::Consonant);
        assert_eq!(table.class("A"), SoundClass::Vowel);
    }

    #[test]
    fn lone_y_is_a_vowel() {
        let table = SoundTable::global();
        assert!(table.is_vowel_sound("y"));
        assert_eq!(table.class("y"), SoundClass::Vowel);
    }

    #[test]
    fn yod_before_vowel_is_a_consonant() {
        let table = SoundTable::global();
        assert!(!table.is_vowel_sound("ya"));
        assert!(table.is_consonant_sound("ya"));
        assert_eq!(table.class("Yo"), SoundClass::Consonant);
    }

    #[test]
    fn residue_is_other() {
        let table = SoundTable::global();
        assert_eq!(table.class("4"), SoundClass::Other);
        assert_eq!(table.class("'"), SoundClass::Other);
        assert_eq!(table.class(""), SoundClass::Other);
    }

    #[test]
    fn letter_helpers() {
        let table = SoundTable::global();
        assert!(table.is_vowel_letter('a'));
        assert!(table.is_vowel_letter('É'));
        assert!(table.is_consonant_letter('R'));
        assert!(!table.is_consonant_letter('!'));
    }
}
