//! Error types for the splitter.
//!
//! A single `SplitterError` covers the whole library. The batch driver turns
//! every per-source and per-review error into a logged outcome, so only CLI
//! set-up errors ever reach `main`.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the splitter library.
#[derive(Debug, Error)]
pub enum SplitterError {
    /// Source document does not exist.
    #[error("Input file '{}' not found", .0.display())]
    SourceNotFound(PathBuf),

    /// Source document exists but could not be read or parsed.
    #[error("Failed to read {}: {message}", .path.display())]
    SourceRead { path: PathBuf, message: String },

    /// File extension does not map to a known document format.
    #[error("Unsupported document format: {}", .0.display())]
    UnsupportedFormat(PathBuf),

    /// A single review could not be extracted from its source.
    #[error("Failed to extract Review {label}: {message}")]
    Extraction { label: String, message: String },

    /// A single review could not be written to disk.
    #[error("Failed to write {}: {message}", .path.display())]
    Persist { path: PathBuf, message: String },

    /// Source manifest could not be parsed.
    #[error("Invalid source manifest {}: {source}", .path.display())]
    Manifest {
        path: PathBuf,
        #[source]
        source: serde_yaml_ng::Error,
    },

    /// Neither an input file nor `--all` was given.
    #[error("No input file given. Pass an INPUT path or --all")]
    MissingArguments,

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for splitter operations.
pub type Result<T> = std::result::Result<T, SplitterError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SplitterError::SourceNotFound(PathBuf::from("Reviews_1-30.docx"));
        assert_eq!(err.to_string(), "Input file 'Reviews_1-30.docx' not found");
    }

    #[test]
    fn test_extraction_error_display() {
        let err = SplitterError::Extraction {
            label: "117a".to_string(),
            message: "start index 40 is past the end of the document".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Failed to extract Review 117a: start index 40 is past the end of the document"
        );
    }

    #[test]
    fn test_persist_error_display() {
        let err = SplitterError::Persist {
            path: PathBuf::from("out/Review_001.docx"),
            message: "permission denied".to_string(),
        };
        assert!(err.to_string().contains("out/Review_001.docx"));
        assert!(err.to_string().contains("permission denied"));
    }
}
