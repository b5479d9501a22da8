//! Record and error type tests — builders, header semantics, serialization.

use riffle_api::{ProcessError, Record};

// ─────────────────────────────────────────────────────────────────────────────
// Record builder
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn record_builder_defaults() {
    let r = Record::new(b"payload".to_vec());
    assert_eq!(r.value, b"payload");
    assert!(r.key.is_none());
    assert_eq!(r.timestamp_ms, 0);
    assert!(r.headers.is_empty());
}

#[test]
fn record_builder_sets_all_fields() {
    let r = Record::new(b"v".to_vec())
        .with_key(b"k".to_vec())
        .with_timestamp(1_700_000_000_000)
        .with_header("trace-id", b"abc".to_vec());

    assert_eq!(r.key.as_deref(), Some(b"k".as_slice()));
    assert_eq!(r.timestamp_ms, 1_700_000_000_000);
    assert_eq!(r.headers.get("trace-id"), Some(b"abc".as_slice()));
}

// ─────────────────────────────────────────────────────────────────────────────
// Header semantics
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn headers_last_value_wins() {
    let r = Record::new(vec![])
        .with_header("retry", b"1".to_vec())
        .with_header("retry", b"2".to_vec());

    assert_eq!(r.headers.get("retry"), Some(b"2".as_slice()));
    // Both entries are retained in order.
    assert_eq!(r.headers.len(), 2);
}

#[test]
fn headers_missing_key() {
    let r = Record::new(vec![]);
    assert_eq!(r.headers.get("absent"), None);
}

#[test]
fn headers_iterate_in_insertion_order() {
    let r = Record::new(vec![])
        .with_header("a", vec![1])
        .with_header("b", vec![2]);
    let keys: Vec<&str> = r.headers.iter().map(|h| h.key.as_str()).collect();
    assert_eq!(keys, ["a", "b"]);
}

// ─────────────────────────────────────────────────────────────────────────────
// Serialization
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn record_roundtrip() {
    let r = Record::new(b"v".to_vec())
        .with_key(b"k".to_vec())
        .with_timestamp(42)
        .with_header("h", b"x".to_vec());

    let json = serde_json::to_string(&r).unwrap();
    let parsed: Record = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, r);
}

// ─────────────────────────────────────────────────────────────────────────────
// Errors
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn handler_error_display() {
    let e = ProcessError::handler("boom");
    assert_eq!(e.to_string(), "handler failure: boom");
}

#[test]
fn io_error_converts() {
    let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe");
    let e: ProcessError = io.into();
    assert!(matches!(e, ProcessError::Io(_)));
}
