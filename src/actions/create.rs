//! Create flow: the "name a new document" state machine.
//!
//! `Idle -> Composing -> Submitting -> (Idle on success | Composing on
//! failure)`. The draft is private to this flow; creation is not subject to
//! the operation lock, only to its own submitting state.

use std::sync::{Arc, Mutex};

use crate::platform::{document_route, NoticeKind, Notifier, Router};
use crate::store::{DocumentStore, StoreError};

/// Snapshot of the draft for the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreationDraft {
    pub is_active: bool,
    pub name: String,
}

#[derive(Debug, Clone)]
enum CreateState {
    Idle,
    Composing { name: String },
    Submitting { name: String },
}

/// Manages the transient document-creation UI mode and its submission.
pub struct CreateFlow {
    state: Mutex<CreateState>,
    store: Arc<dyn DocumentStore>,
    router: Arc<dyn Router>,
    notifier: Arc<dyn Notifier>,
}

impl CreateFlow {
    pub fn new(
        store: Arc<dyn DocumentStore>,
        router: Arc<dyn Router>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            state: Mutex::new(CreateState::Idle),
            store,
            router,
            notifier,
        }
    }

    /// Start composing a new document name.
    ///
    /// Only valid from `Idle`; while a draft exists or a submission is in
    /// flight this is a no-op, so a duplicate "new document" request cannot
    /// clobber typed input.
    pub fn open(&self) {
        let mut state = self.state.lock().unwrap();
        if matches!(*state, CreateState::Idle) {
            *state = CreateState::Composing {
                name: String::new(),
            };
        }
    }

    /// Replace the draft name. No-op unless composing.
    pub fn set_name(&self, name: impl Into<String>) {
        let mut state = self.state.lock().unwrap();
        if matches!(*state, CreateState::Composing { .. }) {
            *state = CreateState::Composing { name: name.into() };
        }
    }

    /// Discard the draft (explicit cancel or the Escape key).
    ///
    /// No-op while submitting; the in-flight request decides the next state.
    pub fn cancel(&self) {
        let mut state = self.state.lock().unwrap();
        if matches!(*state, CreateState::Composing { .. }) {
            *state = CreateState::Idle;
        }
    }

    /// Current draft snapshot.
    pub fn draft(&self) -> CreationDraft {
        match &*self.state.lock().unwrap() {
            CreateState::Idle => CreationDraft {
                is_active: false,
                name: String::new(),
            },
            CreateState::Composing { name } | CreateState::Submitting { name } => CreationDraft {
                is_active: true,
                name: name.clone(),
            },
        }
    }

    /// True while a submission is in flight; drives the submit control's
    /// disabled state.
    pub fn is_submitting(&self) -> bool {
        matches!(*self.state.lock().unwrap(), CreateState::Submitting { .. })
    }

    /// Submit the draft.
    ///
    /// Requires a composing draft whose name, trimmed, is non-empty;
    /// anything else is a no-op, so an empty name is never sent and a
    /// duplicate submission cannot reach the store even if the UI re-enables
    /// early. The current path is captured as creation metadata before the
    /// call suspends.
    pub async fn submit(&self) {
        let name = {
            let mut state = self.state.lock().unwrap();
            let CreateState::Composing { name } = &*state else {
                return;
            };
            if name.trim().is_empty() {
                return;
            }
            let name = name.clone();
            *state = CreateState::Submitting { name: name.clone() };
            name
        };

        let pathname = self.router.current_path();
        match self.store.create_document(&name, &pathname).await {
            Ok(id) => {
                self.notifier
                    .notify(NoticeKind::Success, "Document created successfully");
                self.router.navigate(&document_route(&id));
                *self.state.lock().unwrap() = CreateState::Idle;
            }
            Err(StoreError::Rejected(message)) => {
                self.notifier.notify(NoticeKind::Error, &message);
                *self.state.lock().unwrap() = CreateState::Composing { name };
            }
            Err(StoreError::Fault(detail)) => {
                tracing::error!("Create failed: {}", detail);
                self.notifier.notify(
                    NoticeKind::Error,
                    "An unexpected error occurred during creation.",
                );
                *self.state.lock().unwrap() = CreateState::Composing { name };
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::mocks::{MockRouter, MockStore, RecordingNotifier};
    use crate::document_id::DocumentId;

    fn flow() -> (CreateFlow, Arc<MockStore>, Arc<MockRouter>, Arc<RecordingNotifier>) {
        let store = Arc::new(MockStore::new());
        let router = Arc::new(MockRouter::new("/home"));
        let notifier = Arc::new(RecordingNotifier::new());
        let flow = CreateFlow::new(store.clone(), router.clone(), notifier.clone());
        (flow, store, router, notifier)
    }

    #[test]
    fn test_open_and_cancel_draft() {
        let (flow, _, _, _) = flow();

        assert!(!flow.draft().is_active);
        flow.open();
        assert!(flow.draft().is_active);
        assert_eq!(flow.draft().name, "");

        flow.set_name("Meeting notes");
        assert_eq!(flow.draft().name, "Meeting notes");

        flow.cancel();
        assert!(!flow.draft().is_active);
        assert_eq!(flow.draft().name, "");
    }

    #[test]
    fn test_open_preserves_existing_draft() {
        let (flow, _, _, _) = flow();

        flow.open();
        flow.set_name("Typed so far");
        flow.open();
        assert_eq!(flow.draft().name, "Typed so far");
    }

    #[test]
    fn test_set_name_without_draft_is_noop() {
        let (flow, _, _, _) = flow();

        flow.set_name("orphan");
        assert!(!flow.draft().is_active);
    }

    #[tokio::test]
    async fn test_submit_without_draft_is_noop() {
        let (flow, store, _, notifier) = flow();

        flow.submit().await;
        assert!(store.created.lock().unwrap().is_empty());
        assert!(notifier.notices.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_submit_rejects_whitespace_name() {
        let (flow, store, _, _) = flow();

        flow.open();
        flow.set_name("   ");
        flow.submit().await;

        assert!(store.created.lock().unwrap().is_empty());
        assert!(flow.draft().is_active);
    }

    #[tokio::test]
    async fn test_submit_success_navigates_and_clears_draft() {
        let (flow, store, router, notifier) = flow();
        store.set_create_result(Ok(DocumentId::new("doc_1").unwrap()));
        router.set_current("/integrations/github");

        flow.open();
        flow.set_name("Notes");
        flow.submit().await;

        let created = store.created.lock().unwrap();
        assert_eq!(created.as_slice(), &[("Notes".to_string(), "/integrations/github".to_string())]);
        assert_eq!(router.navigations.lock().unwrap().as_slice(), &["/docs/doc_1".to_string()]);

        let draft = flow.draft();
        assert!(!draft.is_active);
        assert_eq!(draft.name, "");
        assert!(!flow.is_submitting());

        let notices = notifier.notices.lock().unwrap();
        assert_eq!(
            notices.as_slice(),
            &[(NoticeKind::Success, "Document created successfully".to_string())]
        );
    }

    #[tokio::test]
    async fn test_submit_rejection_preserves_draft_and_surfaces_message() {
        let (flow, store, router, notifier) = flow();
        store.set_create_result(Err(StoreError::Rejected("name taken".to_string())));

        flow.open();
        flow.set_name("Notes");
        flow.submit().await;

        let draft = flow.draft();
        assert!(draft.is_active);
        assert_eq!(draft.name, "Notes");
        assert!(!flow.is_submitting());
        assert!(router.navigations.lock().unwrap().is_empty());

        let notices = notifier.notices.lock().unwrap();
        assert_eq!(
            notices.as_slice(),
            &[(NoticeKind::Error, "name taken".to_string())]
        );
    }

    #[tokio::test]
    async fn test_submit_fault_uses_generic_message() {
        let (flow, store, _, notifier) = flow();
        store.set_create_result(Err(StoreError::Fault("connection reset".to_string())));

        flow.open();
        flow.set_name("Notes");
        flow.submit().await;

        let draft = flow.draft();
        assert!(draft.is_active);
        assert_eq!(draft.name, "Notes");

        let notices = notifier.notices.lock().unwrap();
        assert_eq!(
            notices.as_slice(),
            &[(
                NoticeKind::Error,
                "An unexpected error occurred during creation.".to_string()
            )]
        );
    }
}
