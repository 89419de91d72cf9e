use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::Path;
use std::process;

use serde::{Deserialize, Serialize};
use unicode_width::UnicodeWidthStr;

use syl_core::syllabify::syllabify;

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

#[derive(Debug, thiserror::Error)]
pub enum CorpusError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("parse error: {0}")]
    Parse(String),
}

#[derive(Debug, Deserialize)]
pub struct AccuracyCorpus {
    pub cases: Vec<AccuracyCase>,
}

#[derive(Debug, Deserialize)]
pub struct AccuracyCase {
    pub word: String,
    pub expected: Vec<String>,
    #[serde(default = "default_category")]
    pub category: String,
    #[serde(default)]
    pub skip: bool,
    #[serde(default)]
    pub note: Option<String>,
}

fn default_category() -> String {
    "general".to_string()
}

#[derive(Debug, Serialize)]
pub struct AccuracyResult {
    pub word: String,
    pub expected: Vec<String>,
    pub actual: Vec<String>,
    pub status: AccuracyStatus,
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AccuracyStatus {
    Pass,
    Fail,
    Skip,
}

#[derive(Debug, Serialize)]
pub struct AccuracySummary {
    pub total: usize,
    pub pass: usize,
    pub fail: usize,
    pub skip: usize,
    pub pass_rate: String,
}

#[derive(Debug, Serialize)]
pub struct AccuracyReport {
    pub results: Vec<AccuracyResult>,
    pub summary: AccuracySummary,
}

pub fn load_corpus(path: &Path) -> Result<AccuracyCorpus, CorpusError> {
    let content = fs::read_to_string(path)?;
    toml::from_str(&content).map_err(|e| CorpusError::Parse(e.to_string()))
}

/// Run every case of a corpus against the current syllabifier.
pub fn run_corpus(corpus: &AccuracyCorpus) -> AccuracyReport {
    let mut results = Vec::new();
    for case in &corpus.cases {
        if case.skip {
            results.push(AccuracyResult {
                word: case.word.clone(),
                expected: case.expected.clone(),
                actual: Vec::new(),
                status: AccuracyStatus::Skip,
                category: case.category.clone(),
                note: case.note.clone(),
            });
            continue;
        }

        let actual = syllabify(&case.word);
        let status = if actual == case.expected {
            AccuracyStatus::Pass
        } else {
            AccuracyStatus::Fail
        };
        results.push(AccuracyResult {
            word: case.word.clone(),
            expected: case.expected.clone(),
            actual,
            status,
            category: case.category.clone(),
            note: case.note.clone(),
        });
    }

    let total = results.len();
    let pass = results
        .iter()
        .filter(|r| r.status == AccuracyStatus::Pass)
        .count();
    let fail = results
        .iter()
        .filter(|r| r.status == AccuracyStatus::Fail)
        .count();
    let skip = results
        .iter()
        .filter(|r| r.status == AccuracyStatus::Skip)
        .count();
    let tested = total - skip;
    let rate = if tested > 0 {
        pass as f64 / tested as f64 * 100.0
    } else {
        0.0
    };

    AccuracyReport {
        results,
        summary: AccuracySummary {
            total,
            pass,
            fail,
            skip,
            pass_rate: format!("{rate:.1}%"),
        },
    }
}

pub fn accuracy_cmd(corpus_file: &str, category: Option<&str>, verbose: bool, json: bool) {
    let mut corpus = die!(
        load_corpus(Path::new(corpus_file)),
        "Error loading corpus {corpus_file}: {}"
    );

    if let Some(cat) = category {
        corpus.cases.retain(|c| c.category == cat);
        if corpus.cases.is_empty() {
            eprintln!("No cases in category {cat}");
            process::exit(1);
        }
    }

    let report = run_corpus(&corpus);

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&report).expect("JSON serialization failed")
        );
    } else {
        let mut grouped: BTreeMap<&str, Vec<&AccuracyResult>> = BTreeMap::new();
        for r in &report.results {
            grouped.entry(&r.category).or_default().push(r);
        }

        for (cat, group) in &grouped {
            println!("\n=== {} ({} cases) ===", cat, group.len());
            for r in group {
                let pad_width: usize = 16;
                let width = UnicodeWidthStr::width(r.word.as_str());
                let pad = " ".repeat(pad_width.saturating_sub(width));
                match r.status {
                    AccuracyStatus::Pass => {
                        if verbose {
                            println!("  \u{2713} {}{pad}{}", r.word, r.expected.join("\u{b7}"));
                        }
                    }
                    AccuracyStatus::Fail => {
                        println!(
                            "  \u{2717} {}{pad}{} (got: {})",
                            r.word,
                            r.expected.join("\u{b7}"),
                            r.actual.join("\u{b7}")
                        );
                    }
                    AccuracyStatus::Skip => {
                        let reason = r.note.as_deref().unwrap_or("known failure");
                        println!("  - {} [skip: {reason}]", r.word);
                    }
                }
            }
        }

        let tested = report.summary.total - report.summary.skip;
        println!();
        println!("=== Summary ===");
        println!("  Total:     {}", report.summary.total);
        println!("  Pass:      {:>3}", report.summary.pass);
        println!("  Fail:      {:>3}", report.summary.fail);
        println!("  Skip:      {:>3}", report.summary.skip);
        println!(
            "  Pass rate: {} ({}/{})",
            report.summary.pass_rate, report.summary.pass, tested
        );
    }

    if report.summary.fail > 0 {
        process::exit(1);
    }
}
