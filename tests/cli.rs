use std::path::Path;
use std::process::{Command, Output};

fn run(store: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_wordvocab"))
        .arg("--store")
        .arg(store)
        .args(args)
        .env_remove("WORDVOCAB_VOCAB_SIZE")
        .env_remove("WORDVOCAB_PAD_TOKEN")
        .env_remove("WORDVOCAB_UNK_TOKEN")
        .env_remove("WORDVOCAB_BOS_TOKEN")
        .env_remove("WORDVOCAB_EOS_TOKEN")
        .output()
        .unwrap()
}

fn stdout(output: &Output) -> String {
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout.clone()).unwrap()
}

#[test]
fn train_encode_decode_across_invocations() {
    let dir = tempfile::tempdir().unwrap();
    let store = dir.path().join("vocab.json");

    let out = stdout(&run(&store, &["train", "the cat sat on the mat"]));
    assert_eq!(out.trim(), "added 5 new tokens (9 total)");

    let out = stdout(&run(&store, &["encode", "the dog sat"]));
    assert_eq!(out, "IDs: 4, 1, 6\nTokens: the, dog, sat\n");

    let out = stdout(&run(&store, &["decode", "4, 5, x, 9999, -1"]));
    assert_eq!(out.trim(), "the cat [UNK] [UNK]");
}

#[test]
fn encode_with_train_learns_first() {
    let dir = tempfile::tempdir().unwrap();
    let store = dir.path().join("vocab.json");

    let out = stdout(&run(&store, &["encode", "--train", "--json", "hello hello world"]));
    let json: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(json["ids"], serde_json::json!([4, 4, 5]));
    assert_eq!(json["tokens"], serde_json::json!(["hello", "hello", "world"]));
}

#[test]
fn train_from_corpus_file() {
    let dir = tempfile::tempdir().unwrap();
    let store = dir.path().join("vocab.json");
    let corpus = dir.path().join("corpus.txt");
    std::fs::write(&corpus, "one two\n\nthree one\n").unwrap();

    let out = stdout(&run(&store, &["train", "--file", corpus.to_str().unwrap()]));
    assert_eq!(out.trim(), "added 3 new tokens (7 total)");

    let out = stdout(&run(&store, &["vocab"]));
    assert!(out.starts_with("0\t[PAD]\n1\t[UNK]\n2\t[BOS]\n3\t[EOS]\n4\tone\n5\ttwo\n6\tthree\n"));
    assert!(out.ends_with("7 tokens\n"));
}

#[test]
fn reset_forgets_tokens() {
    let dir = tempfile::tempdir().unwrap();
    let store = dir.path().join("vocab.json");

    stdout(&run(&store, &["train", "remember this"]));
    let out = stdout(&run(&store, &["reset"]));
    assert_eq!(out.trim(), "vocabulary reset (4 special tokens)");

    let out = stdout(&run(&store, &["vocab", "--json"]));
    let json: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(json.as_object().unwrap().len(), 4);
}

#[test]
fn malformed_store_is_replaced() {
    let dir = tempfile::tempdir().unwrap();
    let store = dir.path().join("vocab.json");
    std::fs::write(&store, "this is not json").unwrap();

    let out = stdout(&run(&store, &["encode", "[EOS]"]));
    assert_eq!(out, "IDs: 3\nTokens: [EOS]\n");
}

#[test]
fn missing_corpus_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let store = dir.path().join("vocab.json");
    let output = run(&store, &["train", "--file", "/nonexistent/corpus.txt"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("reading corpus"));
}
