use std::sync::Arc;

use docflow_core::{ConsoleSink, Document, Notice, NoticeSink};

use crate::traits::LocalStorage;

/// Simulated local disk backend
#[derive(Clone)]
pub struct LocalDiskStorage {
    sink: Arc<dyn NoticeSink>,
}

impl Default for LocalDiskStorage {
    fn default() -> Self {
        Self::new(Arc::new(ConsoleSink))
    }
}

impl LocalDiskStorage {
    pub fn new(sink: Arc<dyn NoticeSink>) -> Self {
        Self { sink }
    }
}

impl LocalStorage for LocalDiskStorage {
    fn save_to_disk(&self, document: &Document) {
        self.sink.emit(Notice::SavedToDisk {
            kind: document.kind,
            title: document.title.clone(),
        });

        tracing::debug!(
            kind = %document.kind,
            title = %document.title,
            size_bytes = document.content.len(),
            "Local save simulated"
        );
    }
}
