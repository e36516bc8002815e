//! Document service: process, then store.

use std::sync::Arc;

use docflow_core::{Document, Notice, NoticeSink};
use docflow_processing::DocumentProcessor;
use docflow_storage::CloudStorage;

/// Binds one processor and one cloud storage backend.
///
/// Both dependencies are borrowed, so several services can share the same
/// backend. The service keeps no state between calls.
pub struct DocumentService<'a> {
    processor: &'a dyn DocumentProcessor,
    storage: &'a dyn CloudStorage,
    sink: Arc<dyn NoticeSink>,
}

impl<'a> DocumentService<'a> {
    pub fn new(
        processor: &'a dyn DocumentProcessor,
        storage: &'a dyn CloudStorage,
        sink: Arc<dyn NoticeSink>,
    ) -> Self {
        Self {
            processor,
            storage,
            sink,
        }
    }

    /// Process the document and upload the result.
    ///
    /// Documents the bound processor cannot handle are announced and left
    /// untouched. Nothing is returned either way; the notices are the only record
    /// of which path was taken.
    #[tracing::instrument(skip_all, fields(kind = %document.kind, title = %document.title))]
    pub fn handle_document(&self, document: &mut Document) {
        if self.processor.can_process(document.kind) {
            self.processor.process(document);
            self.storage.upload(document);
            tracing::debug!(provider = self.storage.provider(), "Document handled");
        } else {
            self.sink.emit(Notice::NoProcessor {
                kind: document.kind,
            });
            tracing::debug!("No processor bound for document kind");
        }
    }
}
