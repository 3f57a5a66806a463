//! UI-side collaborators.
//!
//! Routing, file delivery, notifications, and confirmation prompts are
//! capabilities of the host application. The flows consume them through
//! these traits; the host wires up real implementations, tests use
//! recording doubles.

use crate::document_id::DocumentId;

/// Route of the default landing view.
pub const HOME_ROUTE: &str = "/home";

/// Route of a document's view.
pub fn document_route(id: &DocumentId) -> String {
    format!("/docs/{}", id)
}

/// Client-side routing.
pub trait Router: Send + Sync {
    /// Navigate to a path.
    fn navigate(&self, path: &str);

    /// Path currently displayed.
    fn current_path(&self) -> String;

    /// Re-render the current view in place (document list refresh).
    fn refresh(&self);
}

/// Hands exported content to the user as a file download. Fire-and-forget.
pub trait FileDelivery: Send + Sync {
    fn deliver(&self, filename: &str, content: &str, mime_type: &str);
}

/// Severity of a user notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// Toast-style status reporting.
pub trait Notifier: Send + Sync {
    fn notify(&self, kind: NoticeKind, message: &str);
}

/// Synchronous user confirmation for destructive actions.
pub trait ConfirmPrompt: Send + Sync {
    fn confirm(&self, message: &str) -> bool;
}
