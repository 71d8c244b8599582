//! Word-level tokenizer: one token per whitespace-delimited word, vocabulary grown by training
//! and persisted through a [`VocabStore`].

use tracing::{debug, info, warn};

use super::super::pretokenize::split_tokens;
use super::super::trainer::train_vocab;
use super::super::{Encoding, Tokenizer, TokenizerError, Vocab, BOS_ID, UNK_ID};
use crate::config::TokenizerConfig;
use crate::store::VocabStore;

/// Word-level tokenizer with a growable vocabulary.
///
/// Construction loads the stored vocabulary or, when none is usable, starts from the special
/// tokens alone. [`train`](Self::train) is the only mutation and saves once per call.
/// Encoding and decoding never touch the store.
#[derive(Debug)]
pub struct WordTokenizer<S> {
    config: TokenizerConfig,
    vocab: Vocab,
    store: S,
}

impl<S: VocabStore> WordTokenizer<S> {
    /// Builds a tokenizer from `config`, restoring the vocabulary held by `store`.
    ///
    /// Stored data that cannot be read, is not a dense mapping, or does not hold the configured
    /// special tokens at ids `0..4` is logged and ignored. A fresh vocabulary is saved right away;
    /// if that save fails the tokenizer still starts and the next [`train`](Self::train) retries.
    ///
    /// # Errors
    ///
    /// [`TokenizerError::Config`] if `config` fails [`TokenizerConfig::validate`].
    pub fn new(config: TokenizerConfig, mut store: S) -> Result<Self, TokenizerError> {
        config.validate()?;
        let special = &config.special_tokens;

        let restored = match store.load() {
            Ok(Some(vocab)) if vocab.has_special_tokens(special) => Some(vocab),
            Ok(Some(vocab)) => {
                warn!(
                    tokens = vocab.len(),
                    "stored vocabulary does not hold the special tokens at their reserved ids, starting fresh"
                );
                None
            }
            Ok(None) => None,
            Err(e) => {
                warn!(error = %e, "could not load stored vocabulary, starting fresh");
                None
            }
        };

        let vocab = match restored {
            Some(vocab) => {
                info!(tokens = vocab.len(), "restored vocabulary");
                vocab
            }
            None => {
                let vocab = Vocab::with_special_tokens(special);
                info!(tokens = vocab.len(), "initialized vocabulary with special tokens");
                if let Err(e) = store.save(&vocab) {
                    warn!(error = %e, "could not save initial vocabulary");
                }
                vocab
            }
        };

        Ok(WordTokenizer {
            config,
            vocab,
            store,
        })
    }

    /// Adds every unseen token of `texts` to the vocabulary, then saves it once.
    ///
    /// New ids follow first occurrence across all texts. Returns how many tokens were added.
    ///
    /// # Errors
    ///
    /// [`TokenizerError::Persist`] if the save fails. The new tokens stay in memory either way.
    pub fn train<I, T>(&mut self, texts: I) -> Result<usize, TokenizerError>
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let texts: Vec<T> = texts.into_iter().collect();
        let added = train_vocab(&mut self.vocab, texts.iter().map(|text| text.as_ref()));
        debug!(texts = texts.len(), added, tokens = self.vocab.len(), "trained");

        if added > 0 && self.vocab.len() > self.config.vocab_size {
            warn!(
                tokens = self.vocab.len(),
                vocab_size = self.config.vocab_size,
                "vocabulary is larger than the configured size"
            );
        }

        self.store.save(&self.vocab)?;
        Ok(added)
    }

    /// Trains on `text` and then encodes it, so every token maps to its own id.
    ///
    /// # Errors
    ///
    /// Same as [`train`](Self::train).
    pub fn train_and_encode(&mut self, text: &str) -> Result<Encoding, TokenizerError> {
        self.train([text])?;
        Ok(self.encode(text))
    }

    /// Clears the store and builds a fresh tokenizer with the same configuration.
    ///
    /// # Errors
    ///
    /// [`TokenizerError::Persist`] if the store cannot be cleared.
    pub fn reset(mut self) -> Result<Self, TokenizerError> {
        self.store.clear()?;
        info!("cleared stored vocabulary");
        Self::new(self.config, self.store)
    }
}

impl<S> WordTokenizer<S> {
    /// The current vocabulary.
    #[must_use]
    pub fn vocab(&self) -> &Vocab {
        &self.vocab
    }

    /// The configuration this tokenizer was built with.
    #[must_use]
    pub fn config(&self) -> &TokenizerConfig {
        &self.config
    }

    /// The store the vocabulary is persisted to.
    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Gives the store back, e.g. to inspect what was persisted.
    #[must_use]
    pub fn into_store(self) -> S {
        self.store
    }

    /// Decodes ids of any integer type, such as signed ids parsed from user input.
    ///
    /// Ids that are negative, too large for `usize`, or not yet assigned become the unknown token.
    pub fn decode_lossy<I>(&self, ids: &[I]) -> String
    where
        I: Copy + TryInto<usize>,
    {
        ids.iter()
            .map(|&id| {
                id.try_into()
                    .ok()
                    .and_then(|id| self.vocab.get_token(id))
                    .unwrap_or(self.unk_token())
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn unk_token(&self) -> &str {
        &self.config.special_tokens.unk_token
    }
}

impl<S> Tokenizer for WordTokenizer<S> {
    fn encode(&self, text: &str) -> Encoding {
        let tokens: Vec<String> = split_tokens(text).map(String::from).collect();
        let ids = tokens
            .iter()
            .map(|token| self.vocab.get_id(token).unwrap_or(UNK_ID))
            .collect();
        Encoding { tokens, ids }
    }

    fn decode(&self, ids: &[usize]) -> String {
        self.decode_lossy(ids)
    }

    fn vocab_size(&self) -> usize {
        self.vocab.len()
    }

    fn unk_id(&self) -> usize {
        UNK_ID
    }

    fn bos_id(&self) -> usize {
        BOS_ID
    }
}
