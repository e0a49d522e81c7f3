//! Number word resolution.
//!
//! Converts a run of spoken number words into a value:
//!
//! - cardinals, teens, and tens: `"seven"`, `"thirteen"`, `"forty two"`
//! - scale words: `"two hundred thirty"`, `"three million four thousand"`
//! - decimals: `"three point one four"`
//! - fractions: `"half"`, `"quarter"`, `"third"`
//! - literal digits emitted by a recognizer: `"25"`, `"3.5"`
//!
//! The lookup tables are immutable statics shared by every caller.

/// `zero`..`nine`, indexed by value.
static ONES: [(&str, f64); 10] = [
    ("zero", 0.0),
    ("one", 1.0),
    ("two", 2.0),
    ("three", 3.0),
    ("four", 4.0),
    ("five", 5.0),
    ("six", 6.0),
    ("seven", 7.0),
    ("eight", 8.0),
    ("nine", 9.0),
];

static TEENS: [(&str, f64); 10] = [
    ("ten", 10.0),
    ("eleven", 11.0),
    ("twelve", 12.0),
    ("thirteen", 13.0),
    ("fourteen", 14.0),
    ("fifteen", 15.0),
    ("sixteen", 16.0),
    ("seventeen", 17.0),
    ("eighteen", 18.0),
    ("nineteen", 19.0),
];

static TENS: [(&str, f64); 8] = [
    ("twenty", 20.0),
    ("thirty", 30.0),
    ("forty", 40.0),
    ("fifty", 50.0),
    ("sixty", 60.0),
    ("seventy", 70.0),
    ("eighty", 80.0),
    ("ninety", 90.0),
];

static SCALES: [(&str, f64); 4] = [
    ("hundred", 100.0),
    ("thousand", 1e3),
    ("million", 1e6),
    ("billion", 1e9),
];

static FRACTIONS: [(&str, f64); 7] = [
    ("half", 0.5),
    ("quarter", 0.25),
    ("fourth", 0.25),
    ("third", 1.0 / 3.0),
    ("fifth", 0.2),
    ("eighth", 0.125),
    ("tenth", 0.1),
];

/// Splits a number run into its integer and fractional parts.
pub const POINT: &str = "point";

/// Joins scale groups: "one hundred and five".
pub const CONNECTOR: &str = "and";

fn lookup(table: &[(&str, f64)], word: &str) -> Option<f64> {
    table
        .iter()
        .find(|(name, _)| *name == word)
        .map(|(_, value)| *value)
}

/// Resolves spoken number words into values.
pub struct NumberWordResolver;

impl NumberWordResolver {
    /// Resolves a run of lowercase words into a single value.
    ///
    /// Returns `None` for an empty run and for a run in which no word is
    /// numeric, so callers can tell "no number here" apart from zero.
    ///
    /// A fraction word anywhere in the run wins outright: `"one third"` is
    /// `1/3` and `"two third"` is also `1/3`. Fractions do not compose with
    /// the surrounding words.
    #[must_use]
    pub fn resolve<S: AsRef<str>>(words: &[S]) -> Option<f64> {
        if words.is_empty() {
            return None;
        }

        if let Some(fraction) = words
            .iter()
            .find_map(|word| lookup(&FRACTIONS, word.as_ref()))
        {
            return Some(fraction);
        }

        match words.iter().position(|word| word.as_ref() == POINT) {
            Some(split) => Self::resolve_decimal(&words[..split], &words[split + 1..]),
            None => Self::resolve_integer(words),
        }
    }

    /// Resolves a single word, or `None` if it is not a number word.
    ///
    /// The structural words [`POINT`] and [`CONNECTOR`] are not numbers on
    /// their own.
    #[must_use]
    pub fn resolve_word(word: &str) -> Option<f64> {
        Self::resolve(&[word])
    }

    /// Every word in the lookup tables, for completion and highlighting.
    pub fn vocabulary() -> impl Iterator<Item = &'static str> {
        ONES.iter()
            .chain(&TEENS)
            .chain(&TENS)
            .chain(&SCALES)
            .chain(&FRACTIONS)
            .map(|(word, _)| *word)
            .chain([POINT, CONNECTOR])
    }

    /// Returns true if the word is numeric on its own.
    #[must_use]
    pub fn is_number_word(word: &str) -> bool {
        Self::resolve_word(word).is_some()
    }

    /// Returns true for `hundred`, `thousand`, `million`, and `billion`.
    #[must_use]
    pub fn is_scale_word(word: &str) -> bool {
        lookup(&SCALES, word).is_some()
    }

    /// Returns true if the word may only appear after [`POINT`]: a digit
    /// word (`zero`..`nine`) or a literal run of ASCII digits.
    #[must_use]
    pub fn is_digit_word(word: &str) -> bool {
        Self::digits_of(word).is_some()
    }

    /// The digits a word contributes to a fractional part.
    fn digits_of(word: &str) -> Option<String> {
        if let Some(index) = ONES.iter().position(|(name, _)| *name == word) {
            return Some(index.to_string());
        }
        if !word.is_empty() && word.bytes().all(|b| b.is_ascii_digit()) {
            return Some(word.to_string());
        }
        None
    }

    /// Integer accumulation over scale groups.
    ///
    /// `current` holds the value of the group being built; `total` holds the
    /// groups already committed by `thousand`, `million`, or `billion`.
    /// `hundred` scales `current` in place so "two hundred thirty" keeps
    /// adding into the same group.
    fn resolve_integer<S: AsRef<str>>(words: &[S]) -> Option<f64> {
        let mut total = 0.0;
        let mut current = 0.0;
        let mut recognized = false;

        for word in words {
            let word = word.as_ref();
            if word == CONNECTOR {
                continue;
            }

            if let Some(value) = lookup(&ONES, word)
                .or_else(|| lookup(&TEENS, word))
                .or_else(|| lookup(&TENS, word))
            {
                current += value;
            } else if word == "hundred" {
                current = or_one(current) * 100.0;
            } else if let Some(scale) = lookup(&SCALES, word) {
                total += or_one(current) * scale;
                current = 0.0;
            } else if let Some(literal) = parse_literal(word) {
                current = current * place_shift(word) + literal;
            } else {
                continue;
            }
            recognized = true;
        }

        recognized.then_some(total + current)
    }

    /// Resolves `<integer words> point <digit words>`.
    ///
    /// Fractional digits are concatenated and parsed as one decimal. The
    /// first non-digit word ends the fractional part.
    fn resolve_decimal<S: AsRef<str>>(integer: &[S], fraction: &[S]) -> Option<f64> {
        let whole = Self::resolve_integer(integer);

        let mut digits = String::new();
        for word in fraction {
            match Self::digits_of(word.as_ref()) {
                Some(d) => digits.push_str(&d),
                None => break,
            }
        }

        if digits.is_empty() {
            return whole;
        }

        let whole = whole.unwrap_or(0.0);
        if whole.fract() == 0.0 {
            // Parsing "3.14" as one literal keeps the value exact.
            format!("{whole}.{digits}").parse().ok()
        } else {
            let fractional: f64 = format!("0.{digits}").parse().ok()?;
            Some(whole + fractional)
        }
    }
}

fn or_one(value: f64) -> f64 {
    if value == 0.0 { 1.0 } else { value }
}

/// Parses a literal such as `"25"` or `"3.5"`.
fn parse_literal(word: &str) -> Option<f64> {
    let mut parts = word.splitn(2, '.');
    let int_part = parts.next()?;
    let frac_part = parts.next();

    let all_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    if !all_digits(int_part) || frac_part.is_some_and(|f| !all_digits(f)) {
        return None;
    }
    word.parse().ok()
}

/// Place value for folding a literal after earlier digits: `"2" "5"` is 25.
fn place_shift(word: &str) -> f64 {
    let int_digits = word.split('.').next().map_or(0, str::len);
    10f64.powi(i32::try_from(int_digits).unwrap_or(i32::MAX))
}
