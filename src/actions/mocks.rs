//! Recording collaborator doubles for flow tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::document_id::DocumentId;
use crate::platform::{ConfirmPrompt, FileDelivery, NoticeKind, Notifier, Router};
use crate::store::{DocumentStore, StoreError};

/// Document store double with programmable results and recorded calls.
pub(crate) struct MockStore {
    create_result: Mutex<Result<DocumentId, StoreError>>,
    export_result: Mutex<Result<String, StoreError>>,
    delete_result: Mutex<Result<(), StoreError>>,
    pub created: Mutex<Vec<(String, String)>>,
    pub exported: Mutex<Vec<DocumentId>>,
    pub deleted: Mutex<Vec<DocumentId>>,
}

impl MockStore {
    pub fn new() -> Self {
        Self {
            create_result: Mutex::new(Ok(DocumentId::new("doc_1").unwrap())),
            export_result: Mutex::new(Ok(String::new())),
            delete_result: Mutex::new(Ok(())),
            created: Mutex::new(Vec::new()),
            exported: Mutex::new(Vec::new()),
            deleted: Mutex::new(Vec::new()),
        }
    }

    pub fn set_create_result(&self, result: Result<DocumentId, StoreError>) {
        *self.create_result.lock().unwrap() = result;
    }

    pub fn set_export_result(&self, result: Result<String, StoreError>) {
        *self.export_result.lock().unwrap() = result;
    }

    pub fn set_delete_result(&self, result: Result<(), StoreError>) {
        *self.delete_result.lock().unwrap() = result;
    }
}

#[async_trait]
impl DocumentStore for MockStore {
    async fn create_document(&self, name: &str, pathname: &str) -> Result<DocumentId, StoreError> {
        self.created
            .lock()
            .unwrap()
            .push((name.to_string(), pathname.to_string()));
        self.create_result.lock().unwrap().clone()
    }

    async fn export_content(&self, id: &DocumentId) -> Result<String, StoreError> {
        self.exported.lock().unwrap().push(id.clone());
        self.export_result.lock().unwrap().clone()
    }

    async fn delete_document(&self, id: &DocumentId) -> Result<(), StoreError> {
        self.deleted.lock().unwrap().push(id.clone());
        self.delete_result.lock().unwrap().clone()
    }
}

/// Router double recording navigations and refreshes.
pub(crate) struct MockRouter {
    current: Mutex<String>,
    pub navigations: Mutex<Vec<String>>,
    refreshes: AtomicUsize,
}

impl MockRouter {
    pub fn new(current: &str) -> Self {
        Self {
            current: Mutex::new(current.to_string()),
            navigations: Mutex::new(Vec::new()),
            refreshes: AtomicUsize::new(0),
        }
    }

    pub fn set_current(&self, path: &str) {
        *self.current.lock().unwrap() = path.to_string();
    }

    pub fn refresh_count(&self) -> usize {
        self.refreshes.load(Ordering::SeqCst)
    }
}

impl Router for MockRouter {
    fn navigate(&self, path: &str) {
        self.navigations.lock().unwrap().push(path.to_string());
    }

    fn current_path(&self) -> String {
        self.current.lock().unwrap().clone()
    }

    fn refresh(&self) {
        self.refreshes.fetch_add(1, Ordering::SeqCst);
    }
}

/// File delivery double recording (filename, content, mime) triples.
pub(crate) struct MockFiles {
    pub delivered: Mutex<Vec<(String, String, String)>>,
}

impl MockFiles {
    pub fn new() -> Self {
        Self {
            delivered: Mutex::new(Vec::new()),
        }
    }
}

impl FileDelivery for MockFiles {
    fn deliver(&self, filename: &str, content: &str, mime_type: &str) {
        self.delivered.lock().unwrap().push((
            filename.to_string(),
            content.to_string(),
            mime_type.to_string(),
        ));
    }
}

/// Notifier double recording every notice.
pub(crate) struct RecordingNotifier {
    pub notices: Mutex<Vec<(NoticeKind, String)>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self {
            notices: Mutex::new(Vec::new()),
        }
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, kind: NoticeKind, message: &str) {
        self.notices.lock().unwrap().push((kind, message.to_string()));
    }
}

/// Confirmation prompt double with a fixed answer.
pub(crate) struct MockPrompt {
    answer: bool,
    pub asked: Mutex<Vec<String>>,
}

impl MockPrompt {
    pub fn new(answer: bool) -> Self {
        Self {
            answer,
            asked: Mutex::new(Vec::new()),
        }
    }
}

impl ConfirmPrompt for MockPrompt {
    fn confirm(&self, message: &str) -> bool {
        self.asked.lock().unwrap().push(message.to_string());
        self.answer
    }
}
