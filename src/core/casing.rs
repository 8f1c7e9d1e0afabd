//! Casing rules and the case converter

use crate::core::{
    initialisms::{GO_INITIALISMS, Initialisms},
    words::{Word, tokenize},
};
use std::fmt;
use tracing::trace;

/// Target casing convention selected by a subcommand
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CasingRule {
    /// camelCase
    Camel,
    /// camelCase keeping Go initialisms upper-case
    GoCamel,
    /// PascalCase
    Pascal,
    /// PascalCase keeping Go initialisms upper-case
    GoPascal,
    /// snake_case
    Snake,
    /// UPPER_SNAKE_CASE
    UpperSnake,
    /// kebab-case
    Kebab,
    /// UPPER-KEBAB-CASE
    UpperKebab,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WordCase {
    Lower,
    Upper,
    Capitalized,
}

impl CasingRule {
    /// Every rule, in command order
    pub const ALL: [CasingRule; 8] = [
        Self::Camel,
        Self::GoCamel,
        Self::Pascal,
        Self::GoPascal,
        Self::Snake,
        Self::UpperSnake,
        Self::Kebab,
        Self::UpperKebab,
    ];

    /// Command name for this rule
    pub fn name(self) -> &'static str {
        match self {
            Self::Camel => "camel",
            Self::GoCamel => "gocamel",
            Self::Pascal => "pascal",
            Self::GoPascal => "gopascal",
            Self::Snake => "snake",
            Self::UpperSnake => "uppersnake",
            Self::Kebab => "kebab",
            Self::UpperKebab => "upperkebab",
        }
    }

    /// String placed between words
    pub fn separator(self) -> &'static str {
        match self {
            Self::Snake | Self::UpperSnake => "_",
            Self::Kebab | Self::UpperKebab => "-",
            _ => "",
        }
    }

    /// Initialisms kept upper-case by this rule, if any
    pub fn initialisms(self) -> Option<&'static Initialisms> {
        match self {
            Self::GoCamel | Self::GoPascal => Some(&GO_INITIALISMS),
            _ => None,
        }
    }

    fn word_case(self, index: usize) -> WordCase {
        match self {
            Self::Camel | Self::GoCamel if index == 0 => WordCase::Lower,
            Self::Camel | Self::GoCamel | Self::Pascal | Self::GoPascal => WordCase::Capitalized,
            Self::Snake | Self::Kebab => WordCase::Lower,
            Self::UpperSnake | Self::UpperKebab => WordCase::Upper,
        }
    }
}

impl fmt::Display for CasingRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Convert `text` to the casing described by `rule`.
///
/// Never fails: empty or delimiter-only input gives an empty string.
pub fn convert(text: &str, rule: CasingRule) -> String {
    let mut words = tokenize(text);
    if let Some(table) = rule.initialisms() {
        words = table.mark(words);
    }
    trace!("{} split into {} word(s): {:?}", rule, words.len(), words);

    let mut out = String::with_capacity(text.len());
    for (index, word) in words.iter().enumerate() {
        if index > 0 {
            out.push_str(rule.separator());
        }
        push_word(&mut out, word, rule.word_case(index));
    }
    out
}

fn push_word(out: &mut String, word: &Word<'_>, case: WordCase) {
    if word.initialism {
        out.push_str(&word.text.to_uppercase());
        return;
    }

    match case {
        WordCase::Lower => out.push_str(&word.text.to_lowercase()),
        WordCase::Upper => out.push_str(&word.text.to_uppercase()),
        WordCase::Capitalized => {
            let mut chars = word.text.chars();
            if let Some(first) = chars.next() {
                out.extend(first.to_uppercase());
                out.push_str(&chars.as_str().to_lowercase());
            }
        }
    }
}
