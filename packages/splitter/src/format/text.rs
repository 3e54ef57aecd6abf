//! Plain-text backend: one paragraph per line, no styles.

use std::io::Write;
use std::path::Path;
use std::sync::LazyLock;

use super::{read_source, write_atomically, DocumentReader, DocumentWriter};
use crate::error::{Result, SplitterError};
use crate::types::{Paragraph, ReviewDocument, StyleSet};

static NO_STYLES: LazyLock<StyleSet> = LazyLock::new(StyleSet::new);

pub(super) fn no_styles() -> &'static StyleSet {
    &NO_STYLES
}

/// Reader and writer for plain-text documents.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextFormat;

impl DocumentReader for TextFormat {
    fn read(&self, path: &Path) -> Result<Vec<Paragraph>> {
        let bytes = read_source(path)?;
        let text = String::from_utf8(bytes).map_err(|e| SplitterError::SourceRead {
            path: path.to_path_buf(),
            message: format!("not valid UTF-8: {e}"),
        })?;

        Ok(text.lines().map(Paragraph::new).collect())
    }
}

impl DocumentWriter for TextFormat {
    fn extension(&self) -> &'static str {
        "txt"
    }

    fn styles(&self) -> &StyleSet {
        no_styles()
    }

    fn write(&self, document: &ReviewDocument, path: &Path) -> Result<()> {
        let mut content = String::with_capacity(document.heading.len() + 1);
        content.push_str(&document.heading);
        content.push('\n');
        for paragraph in &document.paragraphs {
            content.push_str(&paragraph.text);
            content.push('\n');
        }

        write_atomically(path, |file| {
            file.write_all(content.as_bytes()).map_err(|e| e.to_string())
        })
    }
}
