//! Lookup tests
//!
//! Point lookups, multi lookups, ordering and collection isolation.

use super::*;
use futures::StreamExt;
use reefdb::{DocumentId, Error};
use serde_json::json;

#[tokio::test]
async fn test_find_by_integer_and_string_id() {
    let docs = setup();
    docs.store(json!([{"id": 1, "kind": "int"}, {"id": "one", "kind": "string"}]))
        .try_collect()
        .await
        .unwrap();

    let by_int = docs.find(1).fetch().await.unwrap();
    assert_doc_eq(&by_int, json!({"id": 1, "kind": "int"}));

    let by_string = docs.find("one").fetch().await.unwrap();
    assert_doc_eq(&by_string, json!({"id": "one", "kind": "string"}));
}

#[tokio::test]
async fn test_find_missing_id_is_not_found() {
    let docs = setup();
    docs.store(json!({"id": 1})).try_collect().await.unwrap();

    let err = docs.find(2).fetch().await.expect_err("id 2 was never stored");
    assert_eq!(err, Error::NotFound(DocumentId::Int(2)));
    // "1" the string is distinct from 1 the integer
    let err = docs.find("1").fetch().await.expect_err("string id not stored");
    assert!(matches!(err, Error::NotFound(_)));
}

#[tokio::test]
async fn test_fetched_document_carries_id_and_version() {
    let docs = setup();
    docs.store(json!({"id": "x", "a": 1})).try_collect().await.unwrap();

    let fetched = docs.find("x").fetch().await.unwrap();
    assert_eq!(fetched.id(), Some(DocumentId::from("x")));
    assert!(fetched.version().is_some());
}

#[tokio::test]
async fn test_find_all_matches_requested_order() {
    let docs = setup();
    docs.store(json!([{"id": "a", "n": 1}, {"id": "b", "n": 2}, {"id": "c", "n": 3}]))
        .try_collect()
        .await
        .unwrap();

    let found = docs.find_all(["c", "a", "b"]).fetch().await.unwrap();
    let order: Vec<_> = found.iter().map(|doc| doc.id().unwrap()).collect();
    assert_eq!(
        order,
        vec![
            DocumentId::from("c"),
            DocumentId::from("a"),
            DocumentId::from("b"),
        ]
    );
}

#[tokio::test]
async fn test_find_all_resolves_duplicates_independently() {
    let docs = setup();
    docs.store(json!({"id": "dup", "n": 1})).try_collect().await.unwrap();

    let found = docs.find_all(["dup", "dup"]).fetch().await.unwrap();
    assert_eq!(found.len(), 2);
    assert_eq!(found[0], found[1]);
}

#[tokio::test]
async fn test_find_all_with_no_ids_is_empty() {
    let docs = setup();
    docs.store(json!({"id": 1})).try_collect().await.unwrap();

    let found = docs.find_all(Vec::<DocumentId>::new()).fetch().await.unwrap();
    assert!(found.is_empty());
}

#[tokio::test]
async fn test_find_all_stream_form() {
    let docs = setup();
    docs.store(json!([{"id": "a"}, {"id": "b"}])).try_collect().await.unwrap();

    let mut stream = docs.find_all(["a", "b"]).stream();
    let first = stream.next().await.unwrap().unwrap();
    assert_eq!(first.id(), Some(DocumentId::from("a")));
    let second = stream.next().await.unwrap().unwrap();
    assert_eq!(second.id(), Some(DocumentId::from("b")));
    assert!(stream.next().await.is_none());
}

#[tokio::test]
async fn test_same_id_in_two_collections_is_two_documents() {
    let store = Store::new();
    let left = store.collection("left");
    let right = store.collection("right");

    left.store(json!({"id": 1, "side": "left"})).try_collect().await.unwrap();
    right.store(json!({"id": 1, "side": "right"})).try_collect().await.unwrap();

    let from_left = left.find(1).fetch().await.unwrap();
    let from_right = right.find(1).fetch().await.unwrap();
    assert_doc_eq(&from_left, json!({"id": 1, "side": "left"}));
    assert_doc_eq(&from_right, json!({"id": 1, "side": "right"}));
}
