//! Data models shared with the presentation layer.

pub mod document;

pub use document::Document;
