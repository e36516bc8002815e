//! PDF processor

use std::sync::Arc;

use docflow_core::{ConsoleSink, Document, DocumentKind, Notice, NoticeSink};

use crate::traits::DocumentProcessor;

const CONTENT_TAG: &str = "PDF Processed: ";
const LABEL: &str = "PDF";

/// Processor for [`DocumentKind::Pdf`] documents.
pub struct PdfProcessor {
    sink: Arc<dyn NoticeSink>,
}

impl Default for PdfProcessor {
    fn default() -> Self {
        Self::new(Arc::new(ConsoleSink))
    }
}

impl PdfProcessor {
    pub fn new(sink: Arc<dyn NoticeSink>) -> Self {
        Self { sink }
    }
}

impl DocumentProcessor for PdfProcessor {
    fn can_process(&self, kind: DocumentKind) -> bool {
        kind == DocumentKind::Pdf
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
            "PDF content rewritten"
        );
    }
}
