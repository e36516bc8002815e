//! Processors for the supported document kinds.

#[cfg(feature = "pdf")]
pub mod pdf;
#[cfg(feature = "word")]
pub mod word;
