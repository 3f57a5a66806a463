//! Export flow: fetch a document's markdown and hand it to file delivery.

use std::sync::Arc;

use crate::document_id::DocumentId;
use crate::lock::{OperationKind, OperationLock};
use crate::platform::{FileDelivery, NoticeKind, Notifier};
use crate::store::{DocumentStore, StoreError};

/// Exports a document's content as a markdown download.
pub struct ExportFlow {
    lock: Arc<OperationLock>,
    store: Arc<dyn DocumentStore>,
    files: Arc<dyn FileDelivery>,
    notifier: Arc<dyn Notifier>,
}

impl ExportFlow {
    pub fn new(
        lock: Arc<OperationLock>,
        store: Arc<dyn DocumentStore>,
        files: Arc<dyn FileDelivery>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            lock,
            store,
            files,
            notifier,
        }
    }

    /// Export a document.
    ///
    /// No-op if another operation is in flight. The lock guard is held for
    /// the whole flow and dropped on every exit path, so a failure can never
    /// leave the row permanently disabled.
    pub async fn export(&self, id: &DocumentId, name: &str) {
        let Some(_guard) = self.lock.try_acquire(id.clone(), OperationKind::Exporting) else {
            return;
        };

        match self.store.export_content(id).await {
            Ok(content) => {
                let filename = format!("{}.md", name);
                self.files.deliver(&filename, &content, "text/markdown");
                self.notifier
                    .notify(NoticeKind::Success, &format!("Exported \"{}\"", filename));
            }
            Err(StoreError::Rejected(message)) => {
                self.notifier.notify(NoticeKind::Error, &message);
            }
            Err(StoreError::Fault(detail)) => {
                tracing::error!("Export failed: {}", detail);
                self.notifier.notify(
                    NoticeKind::Error,
                    "An unexpected error occurred during export.",
                );
            }
        }
    }
}
