//! Document action flows.
//!
//! Each flow orchestrates one user-initiated operation against the
//! collaborators: create runs its own draft state machine, export and delete
//! serialize through the global [`OperationLock`](crate::lock::OperationLock).
//! The presentation layer talks only to [`DocumentActions`].

pub mod coordinator;
pub mod create;
pub mod delete;
pub mod export;

#[cfg(test)]
pub(crate) mod mocks;

pub use coordinator::{DocumentActions, DocumentStatus};
pub use create::{CreateFlow, CreationDraft};
pub use delete::DeleteFlow;
pub use export::ExportFlow;
