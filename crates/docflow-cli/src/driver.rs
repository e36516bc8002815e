//! The sample run.
//!
//! Wiring: PDF and Word documents go through their own [`DocumentService`], both
//! bound to the same AWS backend. PDF documents are additionally saved to local
//! disk outside of any service. Images have no service at all; the driver
//! announces that itself.

use std::sync::Arc;

use docflow_core::{Document, DocumentKind, Notice, NoticeSink};
use docflow_services::{
    AwsStorage, DocumentService, LocalDiskStorage, LocalStorage, PdfProcessor, WordProcessor,
};

/// The fixed documents used by a run, in processing order.
pub fn sample_documents() -> Vec<Document> {
    vec![
        Document::new("Annual Report", DocumentKind::Pdf, "Financial data..."),
        Document::new("Project Proposal", DocumentKind::Word, "Project details..."),
        Document::new("Profile Picture", DocumentKind::Image, "Image data..."),
    ]
}

/// Run the sample documents through the pipeline, emitting the transcript to `sink`.
///
/// Returns the documents in their final state.
pub fn run(sink: Arc<dyn NoticeSink>) -> Vec<Document> {
    sink.emit(Notice::Banner);

    let mut documents = sample_documents();

    let pdf_processor = PdfProcessor::new(sink.clone());
    let word_processor = WordProcessor::new(sink.clone());

    let aws_storage = AwsStorage::new(sink.clone());
    let local_storage = LocalDiskStorage::new(sink.clone());

    let pdf_service = DocumentService::new(&pdf_processor, &aws_storage, sink.clone());
    let word_service = DocumentService::new(&word_processor, &aws_storage, sink.clone());

    for document in documents.iter_mut() {
        sink.emit(Notice::received(document));

        match document.kind {
            DocumentKind::Pdf => {
                pdf_service.handle_document(document);
                local_storage.save_to_disk(document);
            }
            DocumentKind::Word => word_service.handle_document(document),
            DocumentKind::Image => sink.emit(Notice::NoProcessor {
                kind: document.kind,
            }),
        }
    }

    sink.emit(Notice::Complete);
    documents
}
