//! The result of encoding one text.

use serde::Serialize;

/// Surface tokens of a text and the id chosen for each.
///
/// `tokens[i]` is always the token as it appeared in the input, even when `ids[i]` is the
/// unknown id; decoding such an id yields the unknown token, not the original text.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Encoding {
    /// Whitespace-delimited tokens in input order.
    pub tokens: Vec<String>,
    /// Id per token, positionally aligned with `tokens`.
    pub ids: Vec<usize>,
}

impl Encoding {
    /// Number of tokens.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Returns `true` if the text held no tokens.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Iterates over `(token, id)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.tokens
            .iter()
            .map(String::as_str)
            .zip(self.ids.iter().copied())
    }
}
