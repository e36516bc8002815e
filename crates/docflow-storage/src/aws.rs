use std::sync::Arc;

use docflow_core::{ConsoleSink, Document, Notice, NoticeSink};

use crate::traits::CloudStorage;

const PROVIDER: &str = "AWS";

/// Simulated AWS upload backend
#[derive(Clone)]
pub struct AwsStorage {
    sink: Arc<dyn NoticeSink>,
}

impl Default for AwsStorage {
    fn default() -> Self {
        Self::new(Arc::new(ConsoleSink))
    }
}

impl AwsStorage {
    pub fn new(sink: Arc<dyn NoticeSink>) -> Self {
        Self { sink }
    }
}

impl CloudStorage for AwsStorage {
    fn upload(&self, document: &Document) {
        self.sink.emit(Notice::Uploaded {
            kind: document.kind,
            title: document.title.clone(),
            provider: PROVIDER,
        });

        tracing::debug!(
            provider = PROVIDER,
            kind = %document.kind,
            title = %document.title,
            size_bytes = document.content.len(),
            "Cloud upload simulated"
        );
    }

    fn provider(&self) -> &'static str {
        PROVIDER
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use docflow_core::{DocumentKind, RecordingSink};

    #[test]
    fn test_upload_announces_kind_and_title() {
        let sink = Arc::new(RecordingSink::new());
        let storage = AwsStorage::new(sink.clone());
        let doc = Document::new("Project Proposal", DocumentKind::Word, "Project details...");

        storage.upload(&doc);

        assert_eq!(
            sink.lines(),
            vec!["Uploading Word document 'Project Proposal' to AWS".to_string()]
        );
    }

    #[test]
    fn test_upload_leaves_document_untouched() {
        let sink = Arc::new(RecordingSink::new());
        let storage = AwsStorage::new(sink.clone());
        let doc = Document::new("Annual Report", DocumentKind::Pdf, "Financial data...");
        let before = doc.clone();

        storage.upload(&doc);
        storage.upload(&doc);

        assert_eq!(doc, before);
        assert_eq!(sink.notices().len(), 2);
    }

    #[test]
    fn test_provider_name() {
        let storage = AwsStorage::new(Arc::new(RecordingSink::new()));
        assert_eq!(storage.provider(), "AWS");
    }
}
