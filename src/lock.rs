//! Global operation lock.
//!
//! At most one exclusive document operation (delete or export) may be in
//! flight at a time, across all documents. The lock is a single nullable
//! target rather than a per-document map: the sidebar shows one spinner at a
//! time, and these are low-frequency user actions, not a throughput path.
//!
//! `try_acquire` checks and sets the target synchronously, before any
//! suspension point, so two operations started from the same tick can never
//! both acquire it. The returned guard releases on drop, on every exit path.

use std::sync::Mutex;

use crate::document_id::DocumentId;

/// The kind of exclusive operation in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationKind {
    Deleting,
    Exporting,
}

/// The single document currently undergoing an exclusive operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationTarget {
    pub document_id: DocumentId,
    pub kind: OperationKind,
}

/// Tracks which document, if any, has an operation outstanding.
#[derive(Debug, Default)]
pub struct OperationLock {
    current: Mutex<Option<OperationTarget>>,
}

impl OperationLock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attempt to acquire the lock for a document.
    ///
    /// Succeeds iff no operation is in flight for any document. Never
    /// blocks; a caller that fails to acquire must treat the whole action as
    /// a no-op. On contention the existing target is left untouched.
    pub fn try_acquire(&self, document_id: DocumentId, kind: OperationKind) -> Option<OperationGuard<'_>> {
        let mut current = self.current.lock().unwrap();
        if current.is_some() {
            return None;
        }
        *current = Some(OperationTarget { document_id, kind });
        Some(OperationGuard { lock: self })
    }

    /// True iff the outstanding operation targets this document.
    pub fn is_locked(&self, document_id: &DocumentId) -> bool {
        self.current
            .lock()
            .unwrap()
            .as_ref()
            .is_some_and(|target| &target.document_id == document_id)
    }

    /// Kind of the outstanding operation on this document, if any.
    pub fn locked_kind(&self, document_id: &DocumentId) -> Option<OperationKind> {
        self.current
            .lock()
            .unwrap()
            .as_ref()
            .filter(|target| &target.document_id == document_id)
            .map(|target| target.kind)
    }

    fn release(&self) {
        *self.current.lock().unwrap() = None;
    }
}

/// Scoped acquisition of the operation lock.
///
/// Dropping the guard clears the target unconditionally, so a flow that
/// acquires the lock cannot leave the UI permanently disabled no matter how
/// it exits.
#[derive(Debug)]
pub struct OperationGuard<'a> {
    lock: &'a OperationLock,
}

impl Drop for OperationGuard<'_> {
    fn drop(&mut self) {
        self.lock.release();
    }
}
