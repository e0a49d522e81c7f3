//! Highlighting for spoken arithmetic in the REPL.

use std::borrow::Cow;

use narrate_language::{NumberWordResolver, Tokenizer, numbers};

const NUMBER: &str = "\x1b[35m"; // magenta
const OPERATOR: &str = "\x1b[36m"; // cyan
const FILLER: &str = "\x1b[2m"; // dim
const RESET: &str = "\x1b[0m";

/// Colors number words, operator words, and filler.
#[derive(Clone, Copy, Debug, Default)]
pub struct NarrateHighlighter;

impl NarrateHighlighter {
    /// Creates a new highlighter.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Highlights a line of input.
    ///
    /// Only escape codes are inserted; the visible text is unchanged.
    #[allow(clippy::unused_self)]
    pub fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        if line.is_empty() || line.starts_with(':') {
            return Cow::Borrowed(line);
        }

        let mut result = String::with_capacity(line.len() * 2);
        let mut chars = line.char_indices().peekable();

        while let Some((start, c)) = chars.next() {
            if c.is_alphanumeric() {
                let mut end = start + c.len_utf8();
                while let Some(&(i, next)) = chars.peek() {
                    let decimal_point = next == '.'
                        && line[..i].ends_with(|p: char| p.is_ascii_digit())
                        && line[i + 1..].starts_with(|n: char| n.is_ascii_digit());
                    if next.is_alphanumeric() || next == '\'' || decimal_point {
                        end = i + next.len_utf8();
                        chars.next();
                    } else {
                        break;
                    }
                }
                let word = &line[start..end];
                paint(&mut result, color_of(word), word);
            } else if "+*/^%×÷√()".contains(c) {
                paint(&mut result, OPERATOR, &line[start..start + c.len_utf8()]);
            } else {
                result.push(c);
            }
        }

        Cow::Owned(result)
    }
}

fn color_of(word: &str) -> &'static str {
    let word = word.to_lowercase();
    let literal = word.bytes().all(|b| b.is_ascii_digit() || b == b'.');
    if literal || word == numbers::POINT || NumberWordResolver::is_number_word(&word) {
        NUMBER
    } else if Tokenizer::is_operator_word(&word) {
        OPERATOR
    } else {
        FILLER
    }
}

fn paint(out: &mut String, color: &str, text: &str) {
    out.push_str(color);
    out.push_str(text);
    out.push_str(RESET);
}
