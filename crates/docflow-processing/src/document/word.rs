//! Word processor

use std::sync::Arc;

use docflow_core::{ConsoleSink, Document, DocumentKind, Notice, NoticeSink};

use crate::traits::DocumentProcessor;

const CONTENT_TAG: &str = "WORD Processed: ";
const LABEL: &str = "Word";

/// Processor for [`DocumentKind::Word`] documents.
pub struct WordProcessor {
    sink: Arc<dyn NoticeSink>,
}

impl Default for WordProcessor {
    fn default() -> Self {
        Self::new(Arc::new(ConsoleSink))
    }
}

impl WordProcessor {
    pub fn new(sink: Arc<dyn NoticeSink>) -> Self {
        Self { sink }
    }
}

impl DocumentProcessor for WordProcessor {
    fn can_process(&self, kind: DocumentKind) -> bool {
        kind == DocumentKind::Word
    }

    fn process(&self, document: &mut Document) {
        self.sink.emit(Notice::Processed {
            processor: LABEL,
            title: document.title.clone(),
        });
        document.prepend_content(CONTENT_TAG);

        tracing::debug!(
            title = %document.title,
            content_len = document.content.len(),
            "Word content rewritten"
        );
    }
}
