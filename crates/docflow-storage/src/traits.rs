//! Storage capability traits

use docflow_core::Document;

/// Capability to upload a document to a remote provider.
pub trait CloudStorage: Send + Sync {
    /// Upload the document. Fire-and-forget: there is no result to inspect.
    fn upload(&self, document: &Document);

    /// Name of the remote provider, as shown to the user
    fn provider(&self) -> &'static str;
}

/// Capability to persist a document on the local machine.
pub trait LocalStorage: Send + Sync {
    /// Save the document to disk. Fire-and-forget: there is no result to inspect.
    fn save_to_disk(&self, document: &Document);
}
