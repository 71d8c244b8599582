//! # wordvocab-core
//!
//! A growable whitespace-token vocabulary: special tokens at fixed low ids, training that
//! appends new tokens in first-seen order, lossy-by-design encode/decode with an unknown-token
//! fallback, and a pluggable store that persists the vocabulary after every change.
//!
//! ```
//! use wordvocab_core::config::TokenizerConfig;
//! use wordvocab_core::store::MemoryStore;
//! use wordvocab_core::tokenizer::{Tokenizer, WordTokenizer};
//!
//! let mut tokenizer = WordTokenizer::new(TokenizerConfig::default(), MemoryStore::new())?;
//! tokenizer.train(["the cat sat on the mat"])?;
//! let encoding = tokenizer.encode("the mat");
//! assert_eq!(encoding.ids, [4, 8]);
//! assert_eq!(tokenizer.decode(&encoding.ids), "the mat");
//! # Ok::<(), wordvocab_core::tokenizer::TokenizerError>(())
//! ```

pub mod config;
pub mod data;
pub mod store;
pub mod tokenizer;
