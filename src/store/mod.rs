//! Document store collaborator.
//!
//! The store owns document persistence; this crate only consumes the three
//! operations the sidebar needs. Implementations live behind a trait object
//! so the flows can be exercised against recording doubles in tests.

pub mod http;

use async_trait::async_trait;
use thiserror::Error;

use crate::document_id::DocumentId;

pub use http::HttpDocumentStore;

/// Errors returned by document store operations.
///
/// `Rejected` carries a message meant for the user and is surfaced verbatim.
/// `Fault` is a transport or internal failure with no user-facing message;
/// flows log it and notify with a generic message instead.
#[derive(Error, Debug, Clone)]
pub enum StoreError {
    #[error("{0}")]
    Rejected(String),

    #[error("document store fault: {0}")]
    Fault(String),
}

/// Remote document persistence operations.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Create a document. `pathname` is the navigation context at submit
    /// time, required by the store as creation metadata.
    async fn create_document(&self, name: &str, pathname: &str) -> Result<DocumentId, StoreError>;

    /// Fetch a document's exportable markdown content.
    async fn export_content(&self, id: &DocumentId) -> Result<String, StoreError>;

    /// Delete a document.
    async fn delete_document(&self, id: &DocumentId) -> Result<(), StoreError>;
}
