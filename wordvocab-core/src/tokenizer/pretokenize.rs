//! Whitespace pre-tokenization shared by training and encoding.

/// Splits `text` on runs of Unicode whitespace, dropping empty fragments.
///
/// Leading, trailing and repeated whitespace never yields an empty token, so `""` and `"  \n"`
/// both produce nothing.
pub fn split_tokens(text: &str) -> impl Iterator<Item = &str> {
    text.split_whitespace()
}
