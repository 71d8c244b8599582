//! Vocabulary training: discover whitespace-delimited tokens and append the new ones.

use std::collections::HashSet;

use super::pretokenize::split_tokens;
use super::Vocab;

/// Distinct tokens across `texts`, in order of first occurrence.
///
/// The texts are treated as one concatenated token stream, so a token first seen in the second
/// text comes after every new token of the first.
pub fn distinct_tokens<'a, I>(texts: I) -> Vec<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen = HashSet::new();
    texts
        .into_iter()
        .flat_map(split_tokens)
        .filter(|token| seen.insert(*token))
        .collect()
}

/// Inserts every distinct token of `texts` into `vocab`. Returns how many ids were assigned.
///
/// Tokens already present keep their id, so training on overlapping text is idempotent.
pub fn train_vocab<'a, I>(vocab: &mut Vocab, texts: I) -> usize
where
    I: IntoIterator<Item = &'a str>,
{
    let before = vocab.len();
    for token in distinct_tokens(texts) {
        vocab.insert(token);
    }
    vocab.len() - before
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distinct_tokens_keeps_first_occurrence_order() {
        let tokens = distinct_tokens(["the cat sat on the mat"]);
        assert_eq!(tokens, ["the", "cat", "sat", "on", "mat"]);
    }

    #[test]
    fn distinct_tokens_spans_texts() {
        let tokens = distinct_tokens(["b a", "c a b d"]);
        assert_eq!(tokens, ["b", "a", "c", "d"]);
    }

    #[test]
    fn train_vocab_appends_after_existing_ids() {
        let mut vocab = Vocab::new(["[PAD]", "[UNK]", "[BOS]", "[EOS]"]);
        let added = train_vocab(&mut vocab, ["the cat sat on the mat"]);
        assert_eq!(added, 5);
        assert_eq!(vocab.get_id("the"), Some(4));
        assert_eq!(vocab.get_id("cat"), Some(5));
        assert_eq!(vocab.get_id("sat"), Some(6));
        assert_eq!(vocab.get_id("on"), Some(7));
        assert_eq!(vocab.get_id("mat"), Some(8));
    }

    #[test]
    fn train_vocab_skips_known_tokens() {
        let mut vocab = Vocab::new(["x", "y"]);
        let added = train_vocab(&mut vocab, ["y z x w"]);
        assert_eq!(added, 2);
        assert_eq!(vocab.get_id("y"), Some(1));
        assert_eq!(vocab.get_id("z"), Some(2));
        assert_eq!(vocab.get_id("w"), Some(3));
    }

    #[test]
    fn train_vocab_on_empty_text_is_a_no_op() {
        let mut vocab = Vocab::new(["x"]);
        assert_eq!(train_vocab(&mut vocab, [""]), 0);
        assert_eq!(train_vocab(&mut vocab, std::iter::empty()), 0);
        assert_eq!(vocab.len(), 1);
    }
}
