//! Docflow Services Layer
//!
//! This crate is the orchestration layer: it binds a processor to a storage
//! capability and runs documents through them. It also re-exports the processing
//! and storage APIs so the driver depends on a single facade.

pub mod services;

pub use docflow_processing::DocumentProcessor;
#[cfg(feature = "pdf")]
pub use docflow_processing::PdfProcessor;
#[cfg(feature = "word")]
pub use docflow_processing::WordProcessor;
#[cfg(feature = "storage-cloud")]
pub use docflow_storage::AwsStorage;
#[cfg(feature = "storage-local")]
pub use docflow_storage::LocalDiskStorage;
pub use docflow_storage::{CloudStorage, LocalStorage};
pub use services::document::DocumentService;

#[cfg(all(
    test,
    feature = "pdf",
    feature = "word",
    feature = "storage-cloud",
    feature = "storage-local"
))]
mod tests {
    use super::*;
    use docflow_core::{Document, DocumentKind, Notice, RecordingSink};
    use std::sync::Arc;

    #[test]
    fn test_facade_exposes_every_backend() {
        let sink = Arc::new(RecordingSink::new());
        let pdf = PdfProcessor::new(sink.clone());
        let word = WordProcessor::new(sink.clone());
        let cloud = AwsStorage::new(sink.clone());
        let local = LocalDiskStorage::new(sink.clone());

        let mut doc = Document::new("Annual Report", DocumentKind::Pdf, "Financial data...");
        DocumentService::new(&pdf, &cloud, sink.clone()).handle_document(&mut doc);
        local.save_to_disk(&doc);

        assert!(word.can_process(DocumentKind::Word));
        assert_eq!(sink.notices().len(), 3);
        assert!(matches!(sink.notices()[2], Notice::SavedToDisk { .. }));
    }
}
