//! Document records.
//!
//! Documents are owned by the persistence layer; this crate only works with
//! read-only snapshots supplied by the caller on each render.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::document_id::DocumentId;

/// A document as listed in the sidebar.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    /// Identifier minted by the store
    pub id: DocumentId,

    /// Display name, mutable by the owner (not by this crate)
    pub name: String,

    /// Markdown body, present when the snapshot includes content
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,

    /// Creation timestamp, when known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    /// Owning user
    pub owner_id: String,
}

impl Document {
    /// Create a document snapshot with the required fields.
    pub fn new(id: DocumentId, name: impl Into<String>, owner_id: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            content: None,
            created_at: None,
            owner_id: owner_id.into(),
        }
    }

    /// Attach a content body.
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    /// Attach a creation timestamp.
    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self
    }
}
