//! Docflow Processing Library
//!
//! Document processors. Each processor declares which [`DocumentKind`] it accepts
//! and rewrites the content of documents of that kind. There is deliberately no
//! processor for images.
//!
//! [`DocumentKind`]: docflow_core::DocumentKind

pub mod document;
pub mod traits;

#[cfg(feature = "pdf")]
pub use document::pdf::PdfProcessor;
#[cfg(feature = "word")]
pub use document::word::WordProcessor;
pub use traits::DocumentProcessor;
