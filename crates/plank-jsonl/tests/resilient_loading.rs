//! Integration tests for resilient loading of damaged JSONL files.

use plank_jsonl::{Warning, append_jsonl, read_jsonl_resilient};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, PartialEq)]
struct Note {
    seq: u32,
    text: String,
}

#[tokio::test]
async fn corruption_in_the_middle_does_not_lose_the_tail() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("notes.jsonl");

    append_jsonl(
        &path,
        &Note {
            seq: 1,
            text: "before".to_string(),
        },
    )
    .await
    .unwrap();

    // Simulate a partial write landing between two valid records.
    {
        use std::io::Write as _;
        let mut file = std::fs::OpenOptions::new()
            .append(true)
            .open(&path)
            .unwrap();
        writeln!(file, "{{\"seq\":2,\"text\":\"trunc").unwrap();
    }

    append_jsonl(
        &path,
        &Note {
            seq: 3,
            text: "after".to_string(),
        },
    )
    .await
    .unwrap();

    let (notes, warnings) = read_jsonl_resilient::<Note, _>(&path).await.unwrap();

    assert_eq!(notes.iter().map(|n| n.seq).collect::<Vec<_>>(), vec![1, 3]);
    assert_eq!(warnings.len(), 1);
    assert!(matches!(
        warnings[0],
        Warning::MalformedJson { line_number: 2, .. }
    ));
}

#[tokio::test]
async fn wrong_shape_records_are_skipped_not_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("notes.jsonl");

    // Valid JSON, wrong shape: "seq" is a string.
    std::fs::write(
        &path,
        "{\"seq\":\"one\",\"text\":\"bad\"}\n{\"seq\":2,\"text\":\"good\"}\n",
    )
    .unwrap();

    let (notes, warnings) = read_jsonl_resilient::<Note, _>(&path).await.unwrap();
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0].seq, 2);
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].line_number(), 1);
}
