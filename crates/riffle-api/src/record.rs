//! Record types — one unit of streamed data.
//!
//! A record is opaque to the chain: key and value are raw bytes that
//! decorators forward untouched. Only the surrounding infrastructure
//! assigns meaning to them.

use serde::{Deserialize, Serialize};

/// One unit of streamed data passed through a processing chain.
///
/// Immutable from the chain's perspective: decorators receive records by
/// shared reference and never mutate or retain them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Partitioning key, if any. Opaque bytes.
    pub key: Option<Vec<u8>>,
    /// Payload. Opaque bytes — the chain never interprets them.
    pub value: Vec<u8>,
    /// Event timestamp in milliseconds since the epoch.
    pub timestamp_ms: i64,
    /// Transport-level metadata attached to the record.
    pub headers: Headers,
}

impl Record {
    pub fn new(value: impl Into<Vec<u8>>) -> Self {
        Self {
            key: None,
            value: value.into(),
            timestamp_ms: 0,
            headers: Headers::default(),
        }
    }

    pub fn with_key(mut self, key: impl Into<Vec<u8>>) -> Self {
        self.key = Some(key.into());
        self
    }

    pub fn with_timestamp(mut self, timestamp_ms: i64) -> Self {
        self.timestamp_ms = timestamp_ms;
        self
    }

    pub fn with_header(mut self, key: impl Into<String>, value: impl Into<Vec<u8>>) -> Self {
        self.headers.insert(key, value);
        self
    }
}

/// A single metadata header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Header {
    pub key: String,
    pub value: Vec<u8>,
}

/// Ordered header collection. Duplicate keys are allowed; lookup returns
/// the most recently added value for a key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Headers(Vec<Header>);

impl Headers {
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Vec<u8>>) {
        self.0.push(Header {
            key: key.into(),
            value: value.into(),
        });
    }

    /// Last value added under `key`, if any.
    pub fn get(&self, key: &str) -> Option<&[u8]> {
        self.0
            .iter()
            .rev()
            .find(|h| h.key == key)
            .map(|h| h.value.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Header> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
