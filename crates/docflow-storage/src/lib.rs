//! Docflow Storage Library
//!
//! This crate provides the storage capabilities and their backends. Cloud upload and
//! local save are separate traits so that a caller depending on one never sees the
//! other:
//!
//! - [`CloudStorage`], implemented by [`AwsStorage`]
//! - [`LocalStorage`], implemented by [`LocalDiskStorage`]
//!
//! Backends only announce what they would have done; nothing leaves the process.
//!
//! A local-only backend cannot be asked to upload:
//!
//! ```compile_fail
//! use docflow_core::{Document, DocumentKind};
//! use docflow_storage::{CloudStorage, LocalDiskStorage};
//!
//! let storage = LocalDiskStorage::default();
//! let doc = Document::new("Annual Report", DocumentKind::Pdf, "Financial data...");
//! storage.upload(&doc);
//! ```
//!
//! and a cloud backend cannot save to disk:
//!
//! ```compile_fail
//! use docflow_core::{Document, DocumentKind};
//! use docflow_storage::{AwsStorage, LocalStorage};
//!
//! let storage = AwsStorage::default();
//! let doc = Document::new("Annual Report", DocumentKind::Pdf, "Financial data...");
//! storage.save_to_disk(&doc);
//! ```

#[cfg(feature = "storage-cloud")]
pub mod aws;
#[cfg(feature = "storage-local")]
pub mod local;
pub mod traits;

// Re-export commonly used types
#[cfg(feature = "storage-cloud")]
pub use aws::AwsStorage;
#[cfg(feature = "storage-local")]
pub use local::LocalDiskStorage;
pub use traits::{CloudStorage, LocalStorage};
