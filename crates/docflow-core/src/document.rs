use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Document kinds
///
/// The set is closed: every kind a document can have is listed here, and the kind
/// decides which processor (if any) may act on the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    Pdf,
    Word,
    Image,
}

impl FromStr for DocumentKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pdf" => Ok(DocumentKind::Pdf),
            "word" => Ok(DocumentKind::Word),
            "image" => Ok(DocumentKind::Image),
            _ => Err(AppError::InvalidDocumentKind(s.to_string())),
        }
    }
}

impl Display for DocumentKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            DocumentKind::Pdf => write!(f, "Pdf"),
            DocumentKind::Word => write!(f, "Word"),
            DocumentKind::Image => write!(f, "Image"),
        }
    }
}

/// A document moving through the pipeline.
///
/// `title` and `kind` are fixed at creation. `content` is rewritten in place by
/// whichever processor handles the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub title: String,
    pub content: String,
    pub kind: DocumentKind,
}

impl Document {
    pub fn new(title: impl Into<String>, kind: DocumentKind, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            kind,
        }
    }

    /// Prepend `tag` to the current content.
    pub fn prepend_content(&mut self, tag: &str) {
        self.content.insert_str(0, tag);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_kind_display() {
        assert_eq!(DocumentKind::Pdf.to_string(), "Pdf");
        assert_eq!(DocumentKind::Word.to_string(), "Word");
        assert_eq!(DocumentKind::Image.to_string(), "Image");
    }

    #[test]
    fn test_document_kind_from_str_is_case_insensitive() {
        assert_eq!("pdf".parse::<DocumentKind>(), Ok(DocumentKind::Pdf));
        assert_eq!("WORD".parse::<DocumentKind>(), Ok(DocumentKind::Word));
        assert_eq!("Image".parse::<DocumentKind>(), Ok(DocumentKind::Image));
    }

    #[test]
    fn test_document_kind_from_str_rejects_unknown() {
        let result = "spreadsheet".parse::<DocumentKind>();
        assert_eq!(
            result,
            Err(AppError::InvalidDocumentKind("spreadsheet".to_string()))
        );
    }

    #[test]
    fn test_document_kind_serializes_lowercase() {
        let json = serde_json::to_string(&DocumentKind::Pdf).unwrap();
        assert_eq!(json, "\"pdf\"");

        let kind: DocumentKind = serde_json::from_str("\"image\"").unwrap();
        assert_eq!(kind, DocumentKind::Image);
    }

    #[test]
    fn test_document_new() {
        let doc = Document::new("Annual Report", DocumentKind::Pdf, "Financial data...");

        assert_eq!(doc.title, "Annual Report");
        assert_eq!(doc.kind, DocumentKind::Pdf);
        assert_eq!(doc.content, "Financial data...");
    }

    #[test]
    fn test_prepend_content() {
        let mut doc = Document::new("Notes", DocumentKind::Word, "body");
        doc.prepend_content("TAG: ");
        assert_eq!(doc.content, "TAG: body");

        doc.prepend_content("TAG: ");
        assert_eq!(doc.content, "TAG: TAG: body");
    }
}
