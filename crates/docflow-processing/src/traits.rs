//! Processor abstraction trait

use docflow_core::{Document, DocumentKind};

/// A component that can rewrite documents of some kinds.
///
/// Callers must check [`can_process`](DocumentProcessor::can_process) before calling
/// [`process`](DocumentProcessor::process). Processing a document of an unsupported
/// kind is a precondition violation; implementations do not guard against it.
pub trait DocumentProcessor: Send + Sync {
    /// Whether documents of `kind` may be handed to [`process`](DocumentProcessor::process).
    fn can_process(&self, kind: DocumentKind) -> bool;

    /// Rewrite the document content in place.
    ///
    /// Not idempotent: every call adds the processor's tag again.
    fn process(&self, document: &mut Document);
}
