//! Implementations of [`Tokenizer`](super::super::Tokenizer).
//!
//! One file per implementation: [`WordTokenizer`] splits on whitespace.

mod word_impl;

pub use word_impl::WordTokenizer;
