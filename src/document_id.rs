//! Document identifiers.
//!
//! Identifiers are opaque strings minted by the document store. They are
//! unique and stable for the lifetime of a document; this crate never
//! inspects their contents beyond rejecting empty values.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Errors that can occur with document IDs
#[derive(Error, Debug)]
pub enum DocumentIdError {
    #[error("Document ID cannot be empty")]
    Empty,
}

/// An opaque document identifier.
///
/// Wraps the string handed out by the document store. Serializes as a plain
/// string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentId(String);

impl DocumentId {
    /// Create a document ID from an externally supplied string.
    ///
    /// Rejects empty and whitespace-only input; anything else is accepted
    /// verbatim.
    pub fn new(id: impl Into<String>) -> Result<Self, DocumentIdError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(DocumentIdError::Empty);
        }
        Ok(Self(id))
    }

    /// Generate a new random document ID.
    pub fn random() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Get the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for DocumentId {
    type Err = DocumentIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
