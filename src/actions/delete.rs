//! Delete flow: confirm, delete, then navigate away or refresh.

use std::sync::Arc;

use crate::document_id::DocumentId;
use crate::lock::{OperationKind, OperationLock};
use crate::platform::{document_route, ConfirmPrompt, NoticeKind, Notifier, Router, HOME_ROUTE};
use crate::store::{DocumentStore, StoreError};

/// Deletes a document after explicit confirmation.
pub struct DeleteFlow {
    lock: Arc<OperationLock>,
    store: Arc<dyn DocumentStore>,
    router: Arc<dyn Router>,
    notifier: Arc<dyn Notifier>,
    prompt: Arc<dyn ConfirmPrompt>,
}

impl DeleteFlow {
    pub fn new(
        lock: Arc<OperationLock>,
        store: Arc<dyn DocumentStore>,
        router: Arc<dyn Router>,
        notifier: Arc<dyn Notifier>,
        prompt: Arc<dyn ConfirmPrompt>,
    ) -> Self {
        Self {
            lock,
            store,
            router,
            notifier,
            prompt,
        }
    }

    /// Delete a document.
    ///
    /// An unconfirmed request is a full no-op with no lock acquisition. On
    /// success, deleting the document currently being viewed navigates to
    /// the landing view; deleting any other document refreshes the list in
    /// place. The path check also covers a user who navigated away while the
    /// deletion was in flight. Lock guard dropped on every exit path.
    pub async fn delete(&self, id: &DocumentId, name: &str) {
        let message = format!(
            "Are you sure you want to delete \"{}\"? This action cannot be undone.",
            name
        );
        if !self.prompt.confirm(&message) {
            return;
        }

        let Some(_guard) = self.lock.try_acquire(id.clone(), OperationKind::Deleting) else {
            return;
        };

        match self.store.delete_document(id).await {
            Ok(()) => {
                self.notifier.notify(
                    NoticeKind::Success,
                    &format!("Document \"{}\" deleted successfully", name),
                );
                if self.router.current_path() == document_route(id) {
                    self.router.navigate(HOME_ROUTE);
                } else {
                    self.router.refresh();
                }
            }
            Err(StoreError::Rejected(message)) => {
                self.notifier.notify(NoticeKind::Error, &message);
            }
            Err(StoreError::Fault(detail)) => {
                tracing::error!("Delete failed: {}", detail);
                self.notifier.notify(
                    NoticeKind::Error,
                    "An unexpected error occurred during deletion.",
                );
            }
        }
    }
}
