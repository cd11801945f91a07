//! Whole-token noise word removal

use super::normalize;

/// A prepared set of noise words (titles, connectors, filler).
///
/// Words are canonicalized with [`normalize`] when the filter is built, so
/// they only ever contain `a-z` and single spaces. That is the exact form in
/// which they can occur in normalized text. Words that normalize to nothing
/// are dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoiseFilter {
    words: Vec<String>,
}

impl NoiseFilter {
    /// Build a filter from raw noise words, keeping their order
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .filter_map(|raw| {
                let word = normalize(raw.as_ref());
                if word.is_empty() {
                    tracing::debug!(raw = raw.as_ref(), "ignoring noise word without letters");
                    None
                } else {
                    Some(word)
                }
            })
            .collect();

        Self { words }
    }

    /// A filter that removes nothing
    pub fn empty() -> Self {
        Self::default()
    }

    /// Prepared noise words, in application order
    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Remove every whole-token occurrence of each noise word, then trim.
    ///
    /// A word only matches when it is preceded and followed by a non-letter
    /// or a string boundary, so "an" never eats into "laden". Matching is
    /// ASCII case-insensitive. Words are applied in the order supplied.
    /// Interior whitespace left behind by a removal is kept as is.
    pub fn strip(&self, text: &str) -> String {
        let stripped = self
            .words
            .iter()
            .fold(text.to_string(), |acc, word| remove_token(&acc, word));
        stripped.trim().to_string()
    }
}

/// Remove non-overlapping whole-token occurrences of `word`, scanning left to right.
///
/// Boundaries are checked against the input text, not against the partially
/// rewritten output.
fn remove_token(text: &str, word: &str) -> String {
    let bytes = text.as_bytes();
    let needle = word.as_bytes();
    let mut out = String::with_capacity(text.len());
    let mut copied = 0;
    let mut i = 0;

    while i + needle.len() <= bytes.len() {
        let end = i + needle.len();
        // `word` is ASCII, so a hit starts and ends on char boundaries
        if bytes[i..end].eq_ignore_ascii_case(needle)
            && !ends_with_letter(&text[..i])
            && !starts_with_letter(&text[end..])
        {
            out.push_str(&text[copied..i]);
            copied = end;
            i = end;
        } else {
            i += 1;
        }
    }

    out.push_str(&text[copied..]);
    out
}

fn ends_with_letter(s: &str) -> bool {
    s.chars().next_back().is_some_and(char::is_alphabetic)
}

fn starts_with_letter(s: &str) -> bool {
    s.chars().next().is_some_and(char::is_alphabetic)
}
