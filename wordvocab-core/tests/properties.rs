use std::collections::HashSet;

use proptest::prelude::*;
use wordvocab_core::config::TokenizerConfig;
use wordvocab_core::store::{MemoryStore, VocabStore};
use wordvocab_core::tokenizer::{distinct_tokens, Tokenizer, WordTokenizer, UNK_ID};

fn fresh() -> WordTokenizer<MemoryStore> {
    WordTokenizer::new(TokenizerConfig::default(), MemoryStore::new()).unwrap()
}

fn word() -> impl Strategy<Value = String> {
    "[a-z]{1,6}"
}

fn text() -> impl Strategy<Value = String> {
    prop::collection::vec((word(), prop::sample::select(vec![" ", "  ", "\t", "\n"])), 0..12)
        .prop_map(|parts| {
            parts
                .into_iter()
                .map(|(w, sep)| format!("{w}{sep}"))
                .collect::<String>()
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_ids_stay_dense_and_inverse_consistent(
        batches in prop::collection::vec(prop::collection::vec(text(), 0..4), 0..5)
    ) {
        let mut t = fresh();
        for batch in &batches {
            t.train(batch).unwrap();
        }
        let vocab = t.vocab();
        let ids: HashSet<usize> = vocab.iter().map(|(id, _)| id).collect();
        prop_assert_eq!(ids, (0..vocab.next_id()).collect::<HashSet<_>>());
        for (id, token) in vocab.iter() {
            prop_assert_eq!(vocab.get_id(token), Some(id));
        }
    }

    #[test]
    fn prop_training_twice_changes_nothing(texts in prop::collection::vec(text(), 0..4)) {
        let mut t = fresh();
        t.train(&texts).unwrap();
        let before = t.vocab().clone();
        prop_assert_eq!(t.train(&texts).unwrap(), 0);
        prop_assert_eq!(t.vocab(), &before);
    }

    #[test]
    fn prop_new_tokens_follow_first_occurrence(texts in prop::collection::vec(text(), 0..4)) {
        let mut t = fresh();
        t.train(&texts).unwrap();
        let order = distinct_tokens(texts.iter().map(String::as_str));
        for (offset, token) in order.iter().enumerate() {
            prop_assert_eq!(t.vocab().get_id(token), Some(4 + offset));
        }
    }

    #[test]
    fn prop_trained_text_round_trips(s in text()) {
        let mut t = fresh();
        t.train([&s]).unwrap();
        let enc = t.encode(&s);
        prop_assert!(enc.ids.iter().all(|&id| id != UNK_ID));
        let expected = s.split_whitespace().collect::<Vec<_>>().join(" ");
        prop_assert_eq!(t.decode(&enc.ids), expected);
    }

    #[test]
    fn prop_encode_is_aligned_and_pure(s in text(), other in text()) {
        let mut t = fresh();
        t.train([&s]).unwrap();
        let saved = t.store().raw().map(str::to_string);
        let enc = t.encode(&other);
        prop_assert_eq!(enc.tokens.len(), enc.ids.len());
        for (token, id) in enc.iter() {
            let expected = t.vocab().get_id(token).unwrap_or(UNK_ID);
            prop_assert_eq!(id, expected);
        }
        prop_assert_eq!(t.store().raw().map(str::to_string), saved);
    }

    #[test]
    fn prop_unassigned_ids_decode_to_unknown(id in 4usize..10_000) {
        let t = fresh();
        prop_assert_eq!(t.decode(&[id]), "[UNK]");
    }

    #[test]
    fn prop_reload_restores_same_vocabulary(texts in prop::collection::vec(text(), 0..4)) {
        let mut t = fresh();
        t.train(&texts).unwrap();
        let vocab = t.vocab().clone();
        let store = t.into_store();
        let loaded = store.load().unwrap();
        prop_assert_eq!(loaded.as_ref(), Some(&vocab));
        let reloaded = WordTokenizer::new(TokenizerConfig::default(), store).unwrap();
        prop_assert_eq!(reloaded.vocab(), &vocab);
    }
}
