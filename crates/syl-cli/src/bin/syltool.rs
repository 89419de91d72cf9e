use clap::{Parser, Subcommand};

use syl_cli::commands::{accuracy, config_ops, text_ops, word_ops};

#[derive(Parser)]
#[command(name = "syltool", about = "Syllabe syllabification tools")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Syllabify words
    Word {
        /// Words to syllabify
        #[arg(required = true)]
        words: Vec<String>,
        /// Separator printed between syllables
        #[arg(long, default_value = ".")]
        sep: String,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
        /// Print annotated notation (syllable bars, silent-letter parens)
        #[arg(long)]
        annotate: bool,
        /// Print the silent-letter form only
        #[arg(long)]
        silent: bool,
    },

    /// Show the phonetic-group split of words
    Sounds {
        /// Words to split
        #[arg(required = true)]
        words: Vec<String>,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Segment a whole text into syllable-separated words
    Text {
        /// Text to segment (omit to read stdin)
        input: Option<String>,
        /// Read the text from a file instead
        #[arg(long)]
        file: Option<String>,
        /// Separator printed between syllables
        #[arg(long, default_value = ".")]
        sep: String,
        /// Maximum input length in characters
        #[arg(long, default_value = "10000")]
        max_chars: usize,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Run syllabification accuracy tests from a structured TOML corpus
    Accuracy {
        /// Path to the accuracy corpus TOML file
        corpus_file: String,
        /// Filter by category (only run cases in this category)
        #[arg(long)]
        category: Option<String>,
        /// Show passing cases too (default: only failures and skips)
        #[arg(long)]
        verbose: bool,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Inspect and validate sound tables
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Export the default sound tables as TOML
    Export,
    /// Validate a custom sound-table TOML file
    Validate {
        /// Path to the TOML file
        file: String,
    },
    /// Syllabify a word with a candidate table without installing it
    CheckWord {
        /// Path to the TOML file
        file: String,
        /// Word to syllabify
        word: String,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Command::Word {
            words,
            sep,
            json,
            annotate,
            silent,
        } => word_ops::word_cmd(&words, &sep, json, annotate, silent),
        Command::Sounds { words, json } => word_ops::sounds_cmd(&words, json),
        Command::Text {
            input,
            file,
            sep,
            max_chars,
            json,
        } => text_ops::text_cmd(input.as_deref(), file.as_deref(), &sep, max_chars, json),
        Command::Accuracy {
            corpus_file,
            category,
            verbose,
            json,
        } => accuracy::accuracy_cmd(&corpus_file, category.as_deref(), verbose, json),
        Command::Config { action } => match action {
            ConfigAction::Export => config_ops::sounds_export(),
            ConfigAction::Validate { file } => config_ops::sounds_validate(&file),
            ConfigAction::CheckWord { file, word } => config_ops::check_word(&file, &word),
        },
    }
}
