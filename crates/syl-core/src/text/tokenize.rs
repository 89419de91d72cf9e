use serde::Serialize;

/// Lexical category of a [`Token`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TokenKind {
    /// A run of letters, digits, underscores, apostrophes or hyphens.
    Word,
    /// A run of whitespace.
    Whitespace,
    /// A single character of anything else.
    Punct,
}

/// One token of the input text; `text` borrows from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '\'' || c == '-'
}

/// Split a text into word, whitespace and punctuation tokens.
///
/// Word and whitespace runs are maximal; punctuation comes out one
/// character at a time. Concatenating the token texts reproduces the
/// input exactly.
pub fn tokenize(text: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut iter = text.char_indices().peekable();

    while let Some(&(start, c)) = iter.peek() {
        iter.next();
        let kind = if is_word_char(c) {
            TokenKind::Word
        } else if c.is_whitespace() {
            TokenKind::Whitespace
        } else {
            TokenKind::Punct
        };
        let mut end = start + c.len_utf8();
        if kind != TokenKind::Punct {
            while let Some(&(next_start, next)) = iter.peek() {
                let continues = match kind {
                    TokenKind::Word => is_word_char(next),
                    TokenKind::Whitespace => next.is_whitespace(),
                    TokenKind::Punct => false,
                };
                if !continues {
                    break;
                }
                end = next_start + next.len_utf8();
                iter.next();
            }
        }
        tokens.push(Token {
            kind,
            text: &text[start..end],
        });
    }

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts<'a>(tokens: &[Token<'a>]) -> Vec<&'a str> {
        tokens.iter().map(|t| t.text).collect()
    }

    #[test]
    fn splits_a_sentence() {
        let tokens = tokenize("Le chat dort.");
        assert_eq!(texts(&tokens), vec!["Le", " ", "chat", " ", "dort", "."]);
        assert_eq!(tokens[0].kind, TokenKind::Word);
        assert_eq!(tokens[1].kind, TokenKind::Whitespace);
        assert_eq!(tokens[5].kind, TokenKind::Punct);
    }

    #[test]
    fn apostrophes_and_hyphens_stay_in_words() {
        let tokens = tokenize("l'arc-en-ciel");
        assert_eq!(texts(&tokens), vec!["l'arc-en-ciel"]);
        assert_eq!(tokens[0].kind, TokenKind::Word);
    }

    #[test]
    fn punctuation_does_not_coalesce() {
        let tokens = tokenize("quoi?!");
        assert_eq!(texts(&tokens), vec!["quoi", "?", "!"]);
    }

    #[test]
    fn whitespace_runs_are_single_tokens() {
        let tokens = tokenize("un  \t deux");
        assert_eq!(texts(&tokens), vec!["un", "  \t ", "deux"]);
        assert_eq!(tokens[1].kind, TokenKind::Whitespace);
    }

    #[test]
    fn concatenation_reproduces_input() {
        let inputs = [
            "Les élèves jouent, puis rentrent.",
            "« Où est-il ? »  demanda-t-elle…",
            "page 12, exercice 3 : l'école",
            "",
        ];
        for input in inputs {
            let rebuilt: String = tokenize(input).iter().map(|t| t.text).collect();
            assert_eq!(rebuilt, input, "for {input:?}");
        }
    }

    #[test]
    fn empty_input_has_no_tokens() {
        assert!(tokenize("").is_empty());
    }
}
