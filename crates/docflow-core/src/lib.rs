//! Docflow Core Library
//!
//! This crate provides the document model, the notice vocabulary, error types and
//! configuration shared across all docflow components.

pub mod config;
pub mod document;
pub mod error;
pub mod notice;

// Re-export commonly used types
pub use config::{Config, LogFormat};
pub use document::{Document, DocumentKind};
pub use error::{AppError, AppResult};
pub use notice::{ConsoleSink, Notice, NoticeSink, RecordingSink};
