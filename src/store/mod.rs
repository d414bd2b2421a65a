//! Document store boundary - abstraction over the remote database
//!
//! This trait allows swapping between document store backends:
//! - Firestore (REST API)
//! - Scripted in-memory stores (testing)

use std::collections::HashMap;

use anyhow::Result;
use async_trait::async_trait;
use serde_json::Value;

mod firestore;

pub use firestore::{FirestoreConfig, FirestoreStore};

/// One remote document: an identifier plus named fields.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub id: String,
    pub fields: HashMap<String, Value>,
}

impl Document {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            fields: HashMap::new(),
        }
    }

    /// Builder-style field insertion, mainly for store backends and tests
    pub fn with_field(mut self, key: impl Into<String>, value: Value) -> Self {
        self.fields.insert(key.into(), value);
        self
    }

    pub fn field(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }
}

/// One-shot read access to a remote document collection.
///
/// Implementations handle the transport specifics while presenting a single
/// asynchronous operation: read every document in a named collection from
/// the authoritative server, yielding the set or an error. No caching, no
/// retry - that is the caller's concern.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Read all documents in `collection` from the server.
    async fn fetch_all(&self, collection: &str) -> Result<Vec<Document>>;

    /// Store identifier for logging/debugging
    fn name(&self) -> &'static str;
}
