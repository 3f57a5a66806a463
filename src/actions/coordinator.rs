//! Coordinator: the façade the presentation layer calls.
//!
//! Composes the three flows over one shared operation lock and derives the
//! disabled/loading state for each document row. Export/delete exclusion per
//! document falls out of the lock; nothing is re-checked here.

use std::sync::Arc;

use crate::actions::create::{CreateFlow, CreationDraft};
use crate::actions::delete::DeleteFlow;
use crate::actions::export::ExportFlow;
use crate::document_id::DocumentId;
use crate::lock::{OperationKind, OperationLock};
use crate::models::Document;
use crate::platform::{ConfirmPrompt, FileDelivery, Notifier, Router};
use crate::store::DocumentStore;

/// Presentation-ready status of one document row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocumentStatus {
    /// True iff an operation on this document is in flight
    pub pending: bool,
    /// Which operation, when pending
    pub pending_kind: Option<OperationKind>,
}

/// Per-document action handlers and row status for the document sidebar.
pub struct DocumentActions {
    pub(crate) lock: Arc<OperationLock>,
    create: CreateFlow,
    export: ExportFlow,
    delete: DeleteFlow,
}

impl DocumentActions {
    pub fn new(
        store: Arc<dyn DocumentStore>,
        router: Arc<dyn Router>,
        files: Arc<dyn FileDelivery>,
        notifier: Arc<dyn Notifier>,
        prompt: Arc<dyn ConfirmPrompt>,
    ) -> Self {
        let lock = Arc::new(OperationLock::new());
        Self {
            create: CreateFlow::new(store.clone(), router.clone(), notifier.clone()),
            export: ExportFlow::new(lock.clone(), store.clone(), files, notifier.clone()),
            delete: DeleteFlow::new(lock.clone(), store, router, notifier, prompt),
            lock,
        }
    }

    /// Row status for a single document.
    pub fn status(&self, id: &DocumentId) -> DocumentStatus {
        DocumentStatus {
            pending: self.lock.is_locked(id),
            pending_kind: self.lock.locked_kind(id),
        }
    }

    /// Row statuses for a document list snapshot, in input order.
    pub fn statuses(&self, documents: &[Document]) -> Vec<DocumentStatus> {
        documents.iter().map(|doc| self.status(&doc.id)).collect()
    }

    /// Export handler, bound per document row.
    pub async fn export(&self, id: &DocumentId, name: &str) {
        self.export.export(id, name).await;
    }

    /// Delete handler, bound per document row.
    pub async fn delete(&self, id: &DocumentId, name: &str) {
        self.delete.delete(id, name).await;
    }

    /// Begin composing a new document name.
    pub fn open_draft(&self) {
        self.create.open();
    }

    /// Update the draft name as the user types.
    pub fn set_draft_name(&self, name: impl Into<String>) {
        self.create.set_name(name);
    }

    /// Discard the draft.
    pub fn cancel_draft(&self) {
        self.create.cancel();
    }

    /// Submit the draft for creation.
    pub async fn submit_draft(&self) {
        self.create.submit().await;
    }

    /// Current draft snapshot.
    pub fn draft(&self) -> CreationDraft {
        self.create.draft()
    }

    /// True while a creation is in flight.
    pub fn is_submitting(&self) -> bool {
        self.create.is_submitting()
    }
}
