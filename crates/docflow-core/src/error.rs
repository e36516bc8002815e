//! Error types module
//!
//! The document simulation itself never fails. These errors cover the edges around
//! it: parsing configuration values and document kind names.

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AppError {
    #[error("Invalid log format: {0} (expected 'text' or 'json')")]
    InvalidLogFormat(String),

    #[error("Invalid document kind: {0}")]
    InvalidDocumentKind(String),
}

/// Result type for fallible core operations
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            AppError::InvalidLogFormat("yaml".to_string()).to_string(),
            "Invalid log format: yaml (expected 'text' or 'json')"
        );
        assert_eq!(
            AppError::InvalidDocumentKind("spreadsheet".to_string()).to_string(),
            "Invalid document kind: spreadsheet"
        );
    }

    #[test]
    fn test_error_is_exported_from_crate_root() {
        let result: crate::AppResult<()> =
            Err(crate::AppError::InvalidLogFormat("xml".to_string()));
        assert!(matches!(result, Err(AppError::InvalidLogFormat(ref v)) if v == "xml"));
    }
}
