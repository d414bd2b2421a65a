//! Firestore REST backend for the document store
//!
//! Reads a collection with a single GET against the Firestore REST API.
//! Every read hits the server; no client-side SDK cache is involved.

use std::collections::HashMap;
use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use super::{Document, DocumentStore};

const FIRESTORE_BASE_URL: &str = "https://firestore.googleapis.com/v1";

/// Firestore connection configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FirestoreConfig {
    /// Google Cloud project id
    pub project_id: String,

    /// Database id; "(default)" unless the project uses named databases
    #[serde(default = "default_database")]
    pub database: String,

    /// Environment variable holding the API key
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
}

fn default_database() -> String {
    "(default)".to_string()
}

fn default_api_key_env() -> String {
    "FIRESTORE_API_KEY".to_string()
}

fn default_timeout() -> u64 {
    30
}

/// Firestore REST API backend
pub struct FirestoreStore {
    client: reqwest::Client,
    config: FirestoreConfig,
    api_key: String,
}

impl FirestoreStore {
    /// Create a new Firestore backend.
    ///
    /// Reads the API key from the environment variable named in the config.
    pub fn new(config: FirestoreConfig) -> Result<Self> {
        let api_key = std::env::var(&config.api_key_env).with_context(|| {
            format!(
                "Firestore store requires the {} environment variable to be set",
                config.api_key_env
            )
        })?;

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            config,
            api_key,
        })
    }

    fn collection_url(&self, collection: &str) -> String {
        format!(
            "{FIRESTORE_BASE_URL}/projects/{}/databases/{}/documents/{collection}",
            self.config.project_id, self.config.database
        )
    }
}

/// `documents.list` response structure
#[derive(Debug, Deserialize)]
struct ListDocumentsResponse {
    #[serde(default)]
    documents: Vec<FirestoreDocument>,
}

#[derive(Debug, Deserialize)]
struct FirestoreDocument {
    /// Full resource name; the document id is its last segment
    name: String,

    #[serde(default)]
    fields: HashMap<String, Value>,
}

#[async_trait]
impl DocumentStore for FirestoreStore {
    async fn fetch_all(&self, collection: &str) -> Result<Vec<Document>> {
        debug!(
            "Fetching collection '{}' from Firestore project {}",
            collection, self.config.project_id
        );

        let response = self
            .client
            .get(self.collection_url(collection))
            .query(&[("key", self.api_key.as_str())])
            .send()
            .await
            .with_context(|| format!("Failed to reach Firestore for collection '{collection}'"))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            warn!("Firestore API error: {} - {}", status, body);
            anyhow::bail!("Firestore API error: {status} - {body}");
        }

        let listing: ListDocumentsResponse = response
            .json()
            .await
            .context("Failed to parse Firestore list response")?;

        Ok(listing.documents.into_iter().map(into_document).collect())
    }

    fn name(&self) -> &'static str {
        "firestore"
    }
}

fn into_document(raw: FirestoreDocument) -> Document {
    let fields = raw
        .fields
        .iter()
        .map(|(key, value)| (key.clone(), flatten_value(value)))
        .collect();

    Document {
        id: document_id(&raw.name).to_string(),
        fields,
    }
}

/// The document id is the last segment of the full resource name,
/// e.g. `projects/p/databases/(default)/documents/levels/Desert` -> `Desert`.
fn document_id(resource_name: &str) -> &str {
    resource_name
        .rsplit('/')
        .next()
        .unwrap_or(resource_name)
}

/// Collapse Firestore's typed value encoding into plain JSON.
///
/// `{"stringValue": "a"}` becomes `"a"`, `{"doubleValue": 1.5}` becomes
/// `1.5`, and so on. `integerValue` arrives string-encoded per the REST
/// protocol. Arrays and maps are flattened recursively. Anything
/// unrecognized passes through unchanged.
fn flatten_value(value: &Value) -> Value {
    let Some(object) = value.as_object() else {
        return value.clone();
    };

    if let Some(inner) = object.get("stringValue") {
        return inner.clone();
    }
    if let Some(inner) = object.get("doubleValue") {
        return inner.clone();
    }
    if let Some(inner) = object.get("integerValue") {
        if let Some(parsed) = inner.as_str().and_then(|raw| raw.parse::<i64>().ok()) {
            return Value::from(parsed);
        }
        return inner.clone();
    }
    if let Some(inner) = object.get("booleanValue") {
        return inner.clone();
    }
    if object.contains_key("nullValue") {
        return Value::Null;
    }
    if let Some(inner) = object.get("timestampValue") {
        return inner.clone();
    }
    if let Some(array) = object.get("arrayValue") {
        let values = array
            .get("values")
            .and_then(Value::as_array)
            .map(|values| values.iter().map(flatten_value).collect())
            .unwrap_or_default();
        return Value::Array(values);
    }
    if let Some(map) = object.get("mapValue") {
        let fields = map
            .get("fields")
            .and_then(Value::as_object)
            .map(|fields| {
                fields
                    .iter()
                    .map(|(key, value)| (key.clone(), flatten_value(value)))
                    .collect()
            })
            .unwrap_or_default();
        return Value::Object(fields);
    }

    value.clone()
}
