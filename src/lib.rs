//! DocDeck Core Library
//!
//! Coordination logic for the document sidebar: a global operation lock, the
//! create/export/delete flows, and the [`DocumentActions`] façade the
//! presentation layer drives. Persistence, routing, notifications, and file
//! delivery are external collaborators consumed through traits.

pub mod actions;
pub mod config;
pub mod document_id;
pub mod lock;
pub mod models;
pub mod platform;
pub mod store;

pub use actions::{CreateFlow, CreationDraft, DeleteFlow, DocumentActions, DocumentStatus, ExportFlow};
pub use config::{Config, ConfigError};
pub use document_id::{DocumentId, DocumentIdError};
pub use lock::{OperationGuard, OperationKind, OperationLock, OperationTarget};
pub use models::Document;
pub use platform::{
    document_route, ConfirmPrompt, FileDelivery, NoticeKind, Notifier, Router, HOME_ROUTE,
};
pub use store::{DocumentStore, HttpDocumentStore, StoreError};

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
