use std::fs;
use std::io::Read;
use std::process;

use syl_core::text::{segment_text, SegmentOptions};

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

pub fn text_cmd(input: Option<&str>, file: Option<&str>, sep: &str, max_chars: usize, json: bool) {
    let text = match (input, file) {
        (Some(_), Some(_)) => {
            eprintln!("Error: give either an input argument or --file, not both");
            process::exit(1);
        }
        (Some(text), None) => text.to_string(),
        (None, Some(path)) => die!(fs::read_to_string(path), "Error reading {path}: {}"),
        (None, None) => {
            let mut buf = String::new();
            die!(
                std::io::stdin().read_to_string(&mut buf),
                "Error reading stdin: {}"
            );
            buf
        }
    };

    let opts = SegmentOptions {
        separator: sep.to_string(),
        max_chars,
    };
    let segmented = die!(segment_text(&text, &opts), "Error: {}");

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&segmented).expect("JSON serialization failed")
        );
    } else {
        println!("{}", segmented.text);
    }
}
