//! Document reading and writing.
//!
//! The segmenter only sees ordered [`Paragraph`]s; these backends turn files
//! into paragraphs and review documents back into files.

mod docx;
mod text;

use std::fs::{self, File};
use std::path::Path;

pub use docx::DocxFormat;
pub use text::TextFormat;

use crate::error::{Result, SplitterError};
use crate::types::{Paragraph, ReviewDocument, StyleSet};

/// Reads a document as an ordered list of paragraphs.
pub trait DocumentReader {
    /// Read all body paragraphs in document order.
    ///
    /// # Errors
    /// [`SplitterError::SourceNotFound`] when `path` does not exist,
    /// [`SplitterError::SourceRead`] when it cannot be parsed.
    fn read(&self, path: &Path) -> Result<Vec<Paragraph>>;
}

/// Writes review documents.
pub trait DocumentWriter {
    /// File extension of written documents, without the dot.
    fn extension(&self) -> &'static str;

    /// Paragraph styles this writer can render.
    fn styles(&self) -> &StyleSet;

    /// Write a review document to `path`, replacing any existing file.
    ///
    /// # Errors
    /// [`SplitterError::Persist`] when the file cannot be written.
    fn write(&self, document: &ReviewDocument, path: &Path) -> Result<()>;
}

/// Supported document formats, selected by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    /// Office Open XML word-processing documents.
    Docx,

    /// Plain text, one paragraph per line.
    Text,
}

impl DocumentFormat {
    /// Pick the format for a path from its extension (case-insensitive).
    ///
    /// # Examples
    /// ```
    /// use std::path::Path;
    /// use review_splitter::format::DocumentFormat;
    ///
    /// let docx = DocumentFormat::from_path(Path::new("Reviews_1-30.docx"));
    /// assert_eq!(docx.ok(), Some(DocumentFormat::Docx));
    /// let text = DocumentFormat::from_path(Path::new("notes.TXT"));
    /// assert_eq!(text.ok(), Some(DocumentFormat::Text));
    /// assert!(DocumentFormat::from_path(Path::new("scan.pdf")).is_err());
    /// ```
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);

        match extension.as_deref() {
            Some("docx") => Ok(Self::Docx),
            Some("txt" | "text" | "md") => Ok(Self::Text),
            _ => Err(SplitterError::UnsupportedFormat(path.to_path_buf())),
        }
    }
}

impl DocumentReader for DocumentFormat {
    fn read(&self, path: &Path) -> Result<Vec<Paragraph>> {
        match self {
            Self::Docx => DocxFormat.read(path),
            Self::Text => TextFormat.read(path),
        }
    }
}

impl DocumentWriter for DocumentFormat {
    fn extension(&self) -> &'static str {
        match self {
            Self::Docx => DocxFormat.extension(),
            Self::Text => TextFormat.extension(),
        }
    }

    fn styles(&self) -> &StyleSet {
        match self {
            Self::Docx => docx::builtin_styles(),
            Self::Text => text::no_styles(),
        }
    }

    fn write(&self, document: &ReviewDocument, path: &Path) -> Result<()> {
        match self {
            Self::Docx => DocxFormat.write(document, path),
            Self::Text => TextFormat.write(document, path),
        }
    }
}

/// Read a source file, mapping a missing file to `SourceNotFound`.
fn read_source(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => SplitterError::SourceNotFound(path.to_path_buf()),
        _ => SplitterError::SourceRead {
            path: path.to_path_buf(),
            message: e.to_string(),
        },
    })
}

/// Write through a temp file in the same directory, then rename into place.
fn write_atomically<F>(path: &Path, fill: F) -> Result<()>
where
    F: FnOnce(&mut File) -> std::result::Result<(), String>,
{
    let persist_error = |message: String| SplitterError::Persist {
        path: path.to_path_buf(),
        message,
    };

    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| persist_error("output path has no file name".to_string()))?;
    let temp_path = path.with_file_name(format!(".{file_name}.tmp"));

    {
        let mut file = File::create(&temp_path).map_err(|e| persist_error(e.to_string()))?;
        if let Err(message) = fill(&mut file) {
            drop(file);
            let _ = fs::remove_file(&temp_path);
            return Err(persist_error(message));
        }
        file.sync_all().map_err(|e| persist_error(e.to_string()))?;
    }

    // On Windows, rename fails if the destination already exists
    #[cfg(target_os = "windows")]
    if path.exists() {
        fs::remove_file(path).map_err(|e| persist_error(e.to_string()))?;
    }

    fs::rename(&temp_path, path).map_err(|e| persist_error(e.to_string()))
}
