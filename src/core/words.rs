//! Word tokenizer
//!
//! Splits free-form text into the words an identifier is built from.

use std::ops::Range;

/// One token of the input text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word<'a> {
    /// Text of the word, borrowed from the input
    pub text: &'a str,
    /// Byte range of the word within the input
    pub span: Range<usize>,
    /// Set when a Go-flavored rule recognises the word as an initialism
    pub initialism: bool,
}

impl<'a> Word<'a> {
    fn new(input: &'a str, span: Range<usize>) -> Self {
        Self {
            text: &input[span.clone()],
            span,
            initialism: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CharClass {
    Delimiter,
    Upper,
    Lower,
    Digit,
    Other,
}

impl CharClass {
    fn of(c: char) -> Self {
        if c.is_whitespace() || c == '-' || c == '_' {
            Self::Delimiter
        } else if c.is_uppercase() {
            Self::Upper
        } else if c.is_alphabetic() {
            // Caseless scripts count as lowercase
            Self::Lower
        } else if c.is_numeric() {
            Self::Digit
        } else {
            Self::Other
        }
    }

    fn is_letter(self) -> bool {
        matches!(self, Self::Upper | Self::Lower)
    }
}

/// Split `input` into words.
///
/// Boundaries fall on delimiters (whitespace, `-`, `_`), on lowercase to
/// uppercase changes, between letters and digits, and inside an uppercase run
/// just before the last capital when a lowercase letter follows it, so
/// `HTTPServer` becomes `HTTP` and `Server`.
pub fn tokenize(input: &str) -> Vec<Word<'_>> {
    let chars: Vec<(usize, CharClass)> = input
        .char_indices()
        .map(|(i, c)| (i, CharClass::of(c)))
        .collect();

    let mut words = Vec::new();
    let mut start: Option<usize> = None;

    for (n, &(offset, class)) in chars.iter().enumerate() {
        if class == CharClass::Delimiter {
            if let Some(s) = start.take() {
                words.push(Word::new(input, s..offset));
            }
            continue;
        }

        if let Some(s) = start {
            let prev = chars[n - 1].1;
            let next = chars.get(n + 1).map(|&(_, c)| c);
            if is_boundary(prev, class, next) {
                words.push(Word::new(input, s..offset));
                start = Some(offset);
            }
        } else {
            start = Some(offset);
        }
    }

    if let Some(s) = start {
        words.push(Word::new(input, s..input.len()));
    }

    words
}

fn is_boundary(prev: CharClass, cur: CharClass, next: Option<CharClass>) -> bool {
    use CharClass::*;

    match (prev, cur) {
        (Lower, Upper) => true,
        (Upper, Upper) => next == Some(Lower),
        (p, Digit) if p.is_letter() => true,
        (Digit, c) if c.is_letter() => true,
        _ => false,
    }
}
