//! Text analysis: tokenisation, stop word removal and n-gram expansion.

use std::sync::LazyLock;

use regex::Regex;

use crate::Language;

#[expect(
    clippy::expect_used,
    reason = "the token pattern is a literal and always compiles"
)]
static TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\w\w+\b").expect("token pattern compiles"));

/// Split `text` into index terms.
///
/// Text is lowercased and split into runs of at least two word characters.
/// Stop words are dropped, then every remaining token is emitted as a
/// unigram followed by bigrams of adjacent survivors joined by a space.
///
/// # Examples
/// ```
/// use careerfit_scorer::{Language, analyze};
///
/// assert_eq!(
///     analyze("The Rust developer", Language::English),
///     ["rust", "developer", "rust developer"]
/// );
/// ```
#[must_use]
pub fn analyze(text: &str, language: Language) -> Vec<String> {
    let lowered = text.to_lowercase();
    let tokens: Vec<&str> = TOKEN
        .find_iter(&lowered)
        .map(|found| found.as_str())
        .filter(|token| !language.is_stop_word(token))
        .collect();
    let bigrams = tokens
        .windows(2)
        .filter_map(|pair| match pair {
            [first, second] => Some(format!("{first} {second}")),
            _ => None,
        });
    tokens
        .iter()
        .map(|token| (*token).to_owned())
        .chain(bigrams)
        .collect()
}
