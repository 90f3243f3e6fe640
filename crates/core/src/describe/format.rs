//! Sentence clean-up applied after template substitution.

use std::sync::LazyLock;

use regex::{Captures, Regex};

static ARTICLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b([Aa])n?\s+(\w+)").expect("article pattern is valid"));
static SENTENCE_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([.!?])\s*([A-Za-z])").expect("sentence-break pattern is valid"));

fn starts_with_vowel(word: &str) -> bool {
    word.chars().next().is_some_and(|first| matches!(first.to_ascii_lowercase(), 'a' | 'e' | 'i' | 'o' | 'u'))
}

/// Fix indefinite articles, sentence spacing and capitalisation.
pub fn normalize_sentence(text: &str) -> String {
    let articled = ARTICLE.replace_all(text, |caps: &Captures<'_>| {
        let article = &caps[1];
        let word = &caps[2];
        let suffix = if starts_with_vowel(word) { "n" } else { "" };
        format!("{article}{suffix} {word}")
    });

    let spaced = SENTENCE_BREAK.replace_all(&articled, |caps: &Captures<'_>| {
        format!("{} {}", &caps[1], caps[2].to_uppercase())
    });

    capitalize_first(&spaced)
}

fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
