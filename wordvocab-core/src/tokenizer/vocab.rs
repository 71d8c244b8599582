//! Vocabulary: mapping between tokens and ids, plus its inverse.
//!
//! Ids are dense and assigned in insertion order. Nothing is ever removed, so the inverse is
//! stored as a plain `Vec` indexed by id.

use std::collections::HashMap;

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

use super::{SpecialTokens, VocabError};

/// Maps tokens to ids and back. Ids are contiguous from `0` to `len - 1`.
///
/// Serializes as a flat `{ token: id }` object written in id order; deserializing rejects any
/// mapping that is not a dense bijection (see [`VocabError`]).
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(try_from = "HashMap<String, usize>")]
pub struct Vocab {
    id_to_token: Vec<String>,
    token_to_id: HashMap<String, usize>,
}

impl Vocab {
    /// Builds a new vocab with the given tokens in order. Duplicate tokens are skipped (first occurrence wins).
    #[must_use]
    pub fn new<T: AsRef<str>>(tokens: impl IntoIterator<Item = T>) -> Self {
        let mut vocab = Vocab {
            id_to_token: Vec::new(),
            token_to_id: HashMap::new(),
        };
        for token in tokens {
            vocab.insert(token.as_ref());
        }
        vocab
    }

    /// A fresh vocabulary holding only the special tokens, at ids `0..4`.
    #[must_use]
    pub fn with_special_tokens(special: &SpecialTokens) -> Self {
        Self::new(special.iter())
    }

    /// Returns the number of tokens (vocab size).
    #[must_use]
    pub fn len(&self) -> usize {
        self.id_to_token.len()
    }

    /// Returns `true` if the vocab is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.id_to_token.is_empty()
    }

    /// The id the next new token will receive.
    #[must_use]
    pub fn next_id(&self) -> usize {
        self.id_to_token.len()
    }

    /// Returns the token for `id`, or `None` if it has not been assigned.
    #[must_use]
    pub fn get_token(&self, id: usize) -> Option<&str> {
        self.id_to_token.get(id).map(String::as_str)
    }

    /// Returns the id for `token`, or `None` if not in vocab.
    #[must_use]
    pub fn get_id(&self, token: &str) -> Option<usize> {
        self.token_to_id.get(token).copied()
    }

    /// Returns `true` if `token` has an id.
    #[must_use]
    pub fn contains(&self, token: &str) -> bool {
        self.token_to_id.contains_key(token)
    }

    /// Adds a token and returns its id. If the token already exists, returns its existing id.
    pub fn insert(&mut self, token: &str) -> usize {
        if let Some(&id) = self.token_to_id.get(token) {
            return id;
        }
        let id = self.id_to_token.len();
        self.id_to_token.push(token.to_string());
        self.token_to_id.insert(token.to_string(), id);
        id
    }

    /// Iterates over `(id, token)` pairs in id order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &str)> {
        self.id_to_token
            .iter()
            .enumerate()
            .map(|(id, token)| (id, token.as_str()))
    }

    /// `true` when every special token sits at its reserved id.
    #[must_use]
    pub fn has_special_tokens(&self, special: &SpecialTokens) -> bool {
        special
            .iter()
            .enumerate()
            .all(|(id, token)| self.get_id(token) == Some(id))
    }
}

impl TryFrom<HashMap<String, usize>> for Vocab {
    type Error = VocabError;

    /// Rebuilds a vocab from a persisted forward mapping, deriving the inverse.
    fn try_from(forward: HashMap<String, usize>) -> Result<Self, Self::Error> {
        let len = forward.len();
        let mut slots: Vec<Option<String>> = vec![None; len];
        for (token, &id) in &forward {
            let slot = slots.get_mut(id).ok_or_else(|| VocabError::IdOutOfRange {
                token: token.clone(),
                id,
                len,
            })?;
            if slot.is_some() {
                return Err(VocabError::DuplicateId(id));
            }
            *slot = Some(token.clone());
        }
        // n distinct ids below n fill every slot.
        let id_to_token = slots.into_iter().flatten().collect();
        Ok(Vocab {
            id_to_token,
            token_to_id: forward,
        })
    }
}

impl Serialize for Vocab {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (id, token) in self.iter() {
            map.serialize_entry(token, &id)?;
        }
        map.end()
    }
}
