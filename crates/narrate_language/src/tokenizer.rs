//! Transcript tokenization.
//!
//! Converts a spoken-style transcript into a flat stream of tokens:
//!
//! ```text
//! "Twenty-five times four, plus ten percent."
//!          │  normalize
//!          ▼
//! [twenty, five, times, four, plus, ten, percent]
//!          │  scan
//!          ▼
//! [Number(25), Multiply, Number(4), Plus, Number(10), Percent]
//! ```
//!
//! Tokenization never fails. Words that are neither numbers nor operator
//! words are filler ("please", "calculate", "what's") and are dropped.

use crate::numbers::{CONNECTOR, NumberWordResolver, POINT};
use crate::token::{Token, TokenKind};

/// Words that may follow `open`/`close` and are absorbed into the paren token.
const PAREN_NOUNS: [&str; 4] = ["paren", "parenthesis", "parentheses", "bracket"];

/// Every word that forms or belongs to an operator phrase, except the
/// generic `to`, `the`, and `of`.
pub const OPERATOR_WORDS: [&str; 31] = [
    "plus", "add", "and", "minus", "subtract", "less", "negative", "times", "by", "multiplied",
    "divided", "over", "squared", "cubed", "power", "percent", "per", "cent", "square", "root",
    "sqrt", "open", "left", "close", "right", "equals", "is", "paren", "parenthesis",
    "parentheses", "bracket",
];

/// Tokenizes transcripts.
pub struct Tokenizer;

impl Tokenizer {
    /// Tokenizes a transcript.
    ///
    /// Worst case the result is empty.
    #[must_use]
    pub fn tokenize(transcript: &str) -> Vec<Token> {
        let words = Self::normalize(transcript);
        Scanner::new(&words).run()
    }

    /// Returns true if the word is part of the operator vocabulary.
    #[must_use]
    pub fn is_operator_word(word: &str) -> bool {
        OPERATOR_WORDS.contains(&word)
    }

    /// Normalizes a transcript into lowercase words.
    ///
    /// - lowercases
    /// - splits on whitespace and hyphens (`"twenty-five"` is two words)
    /// - keeps a period only between digits (`"3.5"`), drops digit-grouping
    ///   commas (`"1,000"`), and turns other punctuation into word breaks
    /// - spells out arithmetic symbols: `%`, `+`, `*`, `×`, `/`, `÷`, `^`, `√`,
    ///   and a `-` directly in front of a digit
    #[must_use]
    pub fn normalize(transcript: &str) -> Vec<String> {
        let chars: Vec<char> = transcript.to_lowercase().chars().collect();
        let mut cleaned = String::with_capacity(chars.len());

        let is_digit_at = |i: Option<usize>| {
            i.and_then(|i| chars.get(i))
                .is_some_and(char::is_ascii_digit)
        };

        for (i, &c) in chars.iter().enumerate() {
            let between_digits = is_digit_at(i.checked_sub(1)) && is_digit_at(Some(i + 1));
            match c {
                '.' if between_digits => cleaned.push('.'),
                ',' if between_digits => {}
                '\'' | '’' => {}
                '-' if is_digit_at(Some(i + 1)) => cleaned.push_str(" minus "),
                '%' => cleaned.push_str(" percent "),
                '+' => cleaned.push_str(" plus "),
                '*' | '×' => cleaned.push_str(" times "),
                '/' | '÷' => cleaned.push_str(" over "),
                '^' => cleaned.push_str(" power "),
                '√' => cleaned.push_str(" root "),
                c if c.is_alphanumeric() => cleaned.push(c),
                _ => cleaned.push(' '),
            }
        }

        cleaned.split_whitespace().map(String::from).collect()
    }
}

/// Single-pass scanner over normalized words.
struct Scanner<'w> {
    words: &'w [String],
    pos: usize,
    tokens: Vec<Token>,
}

impl<'w> Scanner<'w> {
    fn new(words: &'w [String]) -> Self {
        Self {
            words,
            pos: 0,
            tokens: Vec::new(),
        }
    }

    fn run(mut self) -> Vec<Token> {
        while self.pos < self.words.len() {
            if self.scan_operator() || self.scan_number() {
                continue;
            }
            // Filler
            self.pos += 1;
        }
        self.tokens
    }

    /// The word `offset` positions past the cursor.
    fn peek(&self, offset: usize) -> Option<&'w str> {
        self.words.get(self.pos + offset).map(String::as_str)
    }

    /// 1 if the word at `offset` is one of `options`, else 0.
    fn optional(&self, offset: usize, options: &[&str]) -> usize {
        usize::from(self.peek(offset).is_some_and(|w| options.contains(&w)))
    }

    /// Pushes a token spanning `len` words and advances past them.
    fn emit(&mut self, mut token: Token, len: usize) {
        let end = (self.pos + len).min(self.words.len());
        token.text = self.words[self.pos..end].join(" ");
        self.tokens.push(token);
        self.pos = end;
    }

    fn emit_kind(&mut self, kind: TokenKind, len: usize) {
        self.emit(Token::new(kind, ""), len);
    }

    /// Recognizes an operator word or phrase at the cursor.
    fn scan_operator(&mut self) -> bool {
        let Some(word) = self.peek(0) else {
            return false;
        };

        match word {
            "plus" | "add" | "and" => self.emit_kind(TokenKind::Plus, 1),
            "minus" | "subtract" | "less" | "negative" => self.emit_kind(TokenKind::Minus, 1),
            "times" | "by" => self.emit_kind(TokenKind::Multiply, 1),
            "multiplied" => self.emit_kind(TokenKind::Multiply, 1 + self.optional(1, &["by"])),
            "divided" => self.emit_kind(TokenKind::Divide, 1 + self.optional(1, &["by"])),
            "over" => self.emit_kind(TokenKind::Divide, 1),
            "squared" => self.emit(Token::power_of(2.0, ""), 1),
            "cubed" => self.emit(Token::power_of(3.0, ""), 1),
            "to" if self.peek(1) == Some("the") && self.peek(2) == Some("power") => {
                self.emit_kind(TokenKind::Power, 3 + self.optional(3, &["of"]));
            }
            "power" => self.emit_kind(TokenKind::Power, 1 + self.optional(1, &["of"])),
            "percent" => self.emit_kind(TokenKind::Percent, 1),
            "per" if self.peek(1) == Some("cent") => self.emit_kind(TokenKind::Percent, 2),
            "square" if self.peek(1) == Some("root") => {
                self.emit_kind(TokenKind::Sqrt, 2 + self.optional(2, &["of"]));
            }
            "square" if self.peek(2) == Some("root") => {
                self.emit_kind(TokenKind::Sqrt, 3 + self.optional(3, &["of"]));
            }
            "root" | "sqrt" => self.emit_kind(TokenKind::Sqrt, 1 + self.optional(1, &["of"])),
            "open" | "left" => {
                self.emit_kind(TokenKind::LeftParen, 1 + self.optional(1, &PAREN_NOUNS));
            }
            "close" | "right" => {
                self.emit_kind(TokenKind::RightParen, 1 + self.optional(1, &PAREN_NOUNS));
            }
            "equals" | "is" => self.emit_kind(TokenKind::Equals, 1),
            _ => return false,
        }
        true
    }

    /// Collects the longest number run at the cursor and resolves it.
    fn scan_number(&mut self) -> bool {
        let end = self.number_run_end();
        if end == self.pos {
            return false;
        }

        let run = &self.words[self.pos..end];
        match NumberWordResolver::resolve(run) {
            Some(value) => {
                self.emit(Token::number(value, ""), end - self.pos);
                true
            }
            None => false,
        }
    }

    /// Index one past the last word of the number run starting at the cursor.
    ///
    /// `point` joins a run only when a digit word follows, and from then on
    /// only digit words continue the run. `and` joins only between a scale
    /// word and another number word; anywhere else it is addition.
    fn number_run_end(&self) -> usize {
        let words = self.words;
        let is_number_at =
            |i: usize| words.get(i).is_some_and(|w| NumberWordResolver::is_number_word(w));
        let is_digit_at =
            |i: usize| words.get(i).is_some_and(|w| NumberWordResolver::is_digit_word(w));

        let mut end = self.pos;
        let mut after_point = false;

        while let Some(word) = words.get(end) {
            let word = word.as_str();
            let accepted = if after_point {
                NumberWordResolver::is_digit_word(word)
            } else if word == POINT {
                is_digit_at(end + 1)
            } else if word == CONNECTOR {
                end > self.pos
                    && NumberWordResolver::is_scale_word(&words[end - 1])
                    && is_number_at(end + 1)
            } else {
                NumberWordResolver::is_number_word(word)
            };

            if !accepted {
                break;
            }
            after_point |= word == POINT;
            end += 1;
        }

        end
    }
}
