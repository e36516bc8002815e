pub mod document;

pub use document::DocumentService;
