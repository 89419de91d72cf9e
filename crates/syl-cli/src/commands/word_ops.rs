use serde::Serialize;
use unicode_width::UnicodeWidthStr;

use syl_core::markup;
use syl_core::silent::{mark_silent, silent_spans, SilentSpan};
use syl_core::sounds::{split_sounds, SoundTable};
use syl_core::syllabify::{clean_word, syllabify};

#[derive(Debug, Serialize)]
struct WordRecord {
    word: String,
    syllables: Vec<String>,
    annotated: String,
    silent: Vec<SilentSpan>,
}

pub fn word_cmd(words: &[String], sep: &str, json: bool, annotate: bool, silent: bool) {
    let mut records = Vec::new();
    for word in words {
        let cleaned = clean_word(word);
        let syllables = syllabify(word);
        let spans = silent_spans(&cleaned);

        if json {
            records.push(WordRecord {
                word: word.clone(),
                annotated: markup::render(&syllables, &spans),
                syllables,
                silent: spans,
            });
        } else if annotate {
            println!("{}", markup::render(&syllables, &spans));
        } else if silent {
            println!("{}", mark_silent(&cleaned));
        } else {
            println!("{}", syllables.join(sep));
        }
    }

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&records).expect("JSON serialization failed")
        );
    }
}

#[derive(Debug, Serialize)]
struct SoundsRecord {
    word: String,
    groups: Vec<GroupRecord>,
}

#[derive(Debug, Serialize)]
struct GroupRecord {
    text: String,
    class: String,
}

pub fn sounds_cmd(words: &[String], json: bool) {
    let table = SoundTable::global();
    let mut records = Vec::new();

    for word in words {
        let cleaned = clean_word(word);
        let groups = split_sounds(table, &cleaned);

        if json {
            records.push(SoundsRecord {
                word: word.clone(),
                groups: groups
                    .iter()
                    .map(|g| GroupRecord {
                        text: (*g).to_string(),
                        class: table.class(g).to_string(),
                    })
                    .collect(),
            });
        } else {
            println!("{word}:");
            for g in &groups {
                let pad_width: usize = 5;
                let width = UnicodeWidthStr::width(*g);
                let pad = " ".repeat(pad_width.saturating_sub(width));
                println!("  {g}{pad}{}", table.class(g));
            }
        }
    }

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&records).expect("JSON serialization failed")
        );
    }
}
