//! Notices
//!
//! Every observable step of a run is a [`Notice`]. Components never print directly;
//! they hand notices to an injected [`NoticeSink`], which decides where the text goes.
//! The `Display` impl of a notice is exactly the text written to the console.

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::io::Write;
use std::sync::Mutex;

use crate::document::{Document, DocumentKind};

const BANNER_TITLE: &str = "SOLID Document Management System";
const BANNER_RULE: &str = "===============================";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// Opening banner of a run
    Banner,
    /// The driver picked up a document
    Received { kind: DocumentKind, title: String },
    /// A processor rewrote the document content
    Processed {
        processor: &'static str,
        title: String,
    },
    /// A cloud backend accepted the document
    Uploaded {
        kind: DocumentKind,
        title: String,
        provider: &'static str,
    },
    /// A local backend accepted the document
    SavedToDisk { kind: DocumentKind, title: String },
    /// Nothing is wired to handle this kind
    NoProcessor { kind: DocumentKind },
    /// Closing line of a run
    Complete,
}

impl Notice {
    pub fn received(document: &Document) -> Self {
        Notice::Received {
            kind: document.kind,
            title: document.title.clone(),
        }
    }

    /// Title of the document the notice is about, if any.
    pub fn title(&self) -> Option<&str> {
        match self {
            Notice::Received { title, .. }
            | Notice::Processed { title, .. }
            | Notice::Uploaded { title, .. }
            | Notice::SavedToDisk { title, .. } => Some(title),
            Notice::Banner | Notice::NoProcessor { .. } | Notice::Complete => None,
        }
    }
}

impl Display for Notice {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Notice::Banner => write!(f, "{}\n{}\n", BANNER_TITLE, BANNER_RULE),
            Notice::Received { kind, title } => {
                write!(f, "\nProcessing {} document: {}", kind, title)
            }
            Notice::Processed { processor, title } => {
                write!(f, "Processing {} document: {}", processor, title)
            }
            Notice::Uploaded {
                kind,
                title,
                provider,
            } => write!(f, "Uploading {} document '{}' to {}", kind, title, provider),
            Notice::SavedToDisk { kind, title } => {
                write!(f, "Saving {} document '{}' to local disk", kind, title)
            }
            Notice::NoProcessor { kind } => write!(f, "No processor available for {}", kind),
            Notice::Complete => write!(f, "\nProcessing complete!"),
        }
    }
}

/// Destination for notices
pub trait NoticeSink: Send + Sync {
    fn emit(&self, notice: Notice);
}

/// Writes each notice as a line on stdout.
///
/// A closed stdout (e.g. the reader of a pipe exited) is logged and otherwise
/// ignored; emitting never fails.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleSink;

impl NoticeSink for ConsoleSink {
    fn emit(&self, notice: Notice) {
        if let Err(e) = writeln!(std::io::stdout().lock(), "{}", notice) {
            tracing::warn!(error = %e, "Failed to write notice to stdout");
        }
    }
}

/// Keeps notices in memory, in emission order.
#[derive(Debug, Default)]
pub struct RecordingSink {
    notices: Mutex<Vec<Notice>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notices(&self) -> Vec<Notice> {
        self.notices
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// The console text the recorded notices would have produced, one entry per notice.
    pub fn lines(&self) -> Vec<String> {
        self.notices().iter().map(ToString::to_string).collect()
    }
}

impl NoticeSink for RecordingSink {
    fn emit(&self, notice: Notice) {
        self.notices
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(notice);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notice_text() {
        let title = "Annual Report".to_string();

        assert_eq!(
            Notice::Processed {
                processor: "PDF",
                title: title.clone()
            }
            .to_string(),
            "Processing PDF document: Annual Report"
        );
        assert_eq!(
            Notice::Uploaded {
                kind: DocumentKind::Pdf,
                title: title.clone(),
                provider: "AWS"
            }
            .to_string(),
            "Uploading Pdf document 'Annual Report' to AWS"
        );
        assert_eq!(
            Notice::SavedToDisk {
                kind: DocumentKind::Pdf,
                title
            }
            .to_string(),
            "Saving Pdf document 'Annual Report' to local disk"
        );
        assert_eq!(
            Notice::NoProcessor {
                kind: DocumentKind::Image
            }
            .to_string(),
            "No processor available for Image"
        );
    }

    #[test]
    fn test_framing_notices_carry_blank_lines() {
        assert_eq!(
            Notice::Banner.to_string(),
            "SOLID Document Management System\n===============================\n"
        );
        assert_eq!(Notice::Complete.to_string(), "\nProcessing complete!");

        let doc = Document::new("Profile Picture", DocumentKind::Image, "Image data...");
        assert_eq!(
            Notice::received(&doc).to_string(),
            "\nProcessing Image document: Profile Picture"
        );
    }

    #[test]
    fn test_notice_title() {
        let doc = Document::new("Project Proposal", DocumentKind::Word, "Project details...");
        assert_eq!(Notice::received(&doc).title(), Some("Project Proposal"));
        assert_eq!(
            Notice::NoProcessor {
                kind: DocumentKind::Word
            }
            .title(),
            None
        );
        assert_eq!(Notice::Banner.title(), None);
    }

    #[test]
    fn test_recording_sink_keeps_order() {
        let sink = RecordingSink::new();
        sink.emit(Notice::Banner);
        sink.emit(Notice::NoProcessor {
            kind: DocumentKind::Image,
        });
        sink.emit(Notice::Complete);

        assert_eq!(
            sink.notices(),
            vec![
                Notice::Banner,
                Notice::NoProcessor {
                    kind: DocumentKind::Image
                },
                Notice::Complete,
            ]
        );
        assert_eq!(sink.lines()[1], "No processor available for Image");
    }
}
