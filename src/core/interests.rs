//! Free-text interest parsing.
//!
//! Survey answers arrive as loose text such as `"coding, music; art"`. These
//! helpers turn that text into a set of tokens without touching any table.

use crate::domain::model::InterestSet;

const DELIMITERS: [char; 2] = [',', ';'];

/// Splits interest text into trimmed, de-duplicated tokens.
#[derive(Debug, Clone, Copy, Default)]
pub struct InterestParser {
    lowercase: bool,
}

impl InterestParser {
    pub fn new(lowercase: bool) -> Self {
        Self { lowercase }
    }

    pub fn parse(&self, text: &str) -> InterestSet {
        text.split(DELIMITERS)
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .map(|token| {
                if self.lowercase {
                    token.to_lowercase()
                } else {
                    token.to_string()
                }
            })
            .collect()
    }
}

/// Joins the non-empty answers of one row with `", "`.
pub fn join_answers<'a, I>(answers: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    answers
        .into_iter()
        .filter(|answer| !answer.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn parse_interests(text: &str) -> InterestSet {
    InterestParser::default().parse(text)
}
