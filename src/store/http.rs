//! HTTP-backed document store.
//!
//! Talks to the DocDeck document server over a small JSON REST surface,
//! authenticating with a Bearer API key. A non-success response carrying a
//! JSON `{"error": "..."}` body is an explicit rejection and its message is
//! preserved; everything else (transport failures, unparseable bodies) is a
//! fault.

use async_trait::async_trait;
use serde::Deserialize;

use super::{DocumentStore, StoreError};
use crate::config::Config;
use crate::document_id::DocumentId;

#[derive(Debug, Deserialize)]
struct CreatedResponse {
    #[serde(rename = "documentId")]
    document_id: String,
}

#[derive(Debug, Deserialize)]
struct ExportResponse {
    content: String,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// Document store client over HTTP.
#[derive(Debug, Clone)]
pub struct HttpDocumentStore {
    base_url: String,
    api_key: String,
    client: reqwest::Client,
}

impl HttpDocumentStore {
    /// Creates a store client with explicit parameters.
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            client: reqwest::Client::new(),
        }
    }

    /// Creates a store client from configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.server_url.clone(), config.api_key.clone())
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn send(&self, request: reqwest::RequestBuilder) -> Result<reqwest::Response, StoreError> {
        let response = request
            .header("Authorization", format!("Bearer {}", self.api_key))
            .send()
            .await
            .map_err(|e| StoreError::Fault(e.to_string()))?;

        if response.status().is_success() {
            return Ok(response);
        }

        let status = response.status();
        match response.json::<ErrorBody>().await {
            Ok(body) => Err(StoreError::Rejected(body.error)),
            Err(_) => Err(StoreError::Fault(format!("server returned status {}", status))),
        }
    }
}

#[async_trait]
impl DocumentStore for HttpDocumentStore {
    async fn create_document(&self, name: &str, pathname: &str) -> Result<DocumentId, StoreError> {
        let url = self.endpoint("/api/docs");
        let body = serde_json::json!({ "name": name, "pathname": pathname });

        let response = self.send(self.client.post(&url).json(&body)).await?;
        let created: CreatedResponse = response
            .json()
            .await
            .map_err(|e| StoreError::Fault(e.to_string()))?;

        DocumentId::new(created.document_id)
            .map_err(|_| StoreError::Fault("server returned an empty document id".to_string()))
    }

    async fn export_content(&self, id: &DocumentId) -> Result<String, StoreError> {
        let url = self.endpoint(&format!("/api/docs/{}/export", id));

        let response = self.send(self.client.get(&url)).await?;
        let export: ExportResponse = response
            .json()
            .await
            .map_err(|e| StoreError::Fault(e.to_string()))?;

        Ok(export.content)
    }

    async fn delete_document(&self, id: &DocumentId) -> Result<(), StoreError> {
        let url = self.endpoint(&format!("/api/docs/{}", id));

        self.send(self.client.delete(&url)).await?;
        Ok(())
    }
}
