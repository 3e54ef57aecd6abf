//! `.docx` backend built on docx-rs.
//!
//! A `.docx` file is a ZIP archive of XML parts. docx-rs exposes the body as
//! `Document -> Paragraph -> Run -> Text`; paragraph text is the
//! concatenation of its runs, tabs and line breaks included.

use std::io::Write;
use std::path::Path;
use std::sync::LazyLock;

use docx_rs::{
    read_docx, DocumentChild, Docx, Paragraph as DocxParagraph, ParagraphChild, Run, RunChild,
    Style, StyleType,
};

use super::{read_source, write_atomically, DocumentReader, DocumentWriter};
use crate::config::HEADING_STYLE;
use crate::error::{Result, SplitterError};
use crate::types::{Paragraph, ReviewDocument, StyleSet};

/// Paragraph styles registered in every written document: (id, display name).
///
/// `Normal` is the document default and is not registered again.
const BUILTIN_STYLES: &[(&str, &str)] = &[
    ("Title", "Title"),
    ("Subtitle", "Subtitle"),
    ("Heading1", "Heading 1"),
    ("Heading2", "Heading 2"),
    ("Heading3", "Heading 3"),
    ("Heading4", "Heading 4"),
    ("ListParagraph", "List Paragraph"),
    ("ListBullet", "List Bullet"),
    ("ListNumber", "List Number"),
    ("Quote", "Quote"),
    ("IntenseQuote", "Intense Quote"),
    ("Caption", "Caption"),
    ("NoSpacing", "No Spacing"),
];

static BUILTIN_STYLE_SET: LazyLock<StyleSet> = LazyLock::new(|| {
    std::iter::once("Normal")
        .chain(BUILTIN_STYLES.iter().map(|(id, _)| *id))
        .collect()
});

/// Style identifiers available in written `.docx` documents.
pub(super) fn builtin_styles() -> &'static StyleSet {
    &BUILTIN_STYLE_SET
}

/// Reader and writer for `.docx` documents.
#[derive(Debug, Clone, Copy, Default)]
pub struct DocxFormat;

impl DocumentReader for DocxFormat {
    fn read(&self, path: &Path) -> Result<Vec<Paragraph>> {
        let bytes = read_source(path)?;
        let docx = read_docx(&bytes).map_err(|e| SplitterError::SourceRead {
            path: path.to_path_buf(),
            message: format!("docx parse error: {e:?}"),
        })?;

        // Body paragraphs only; tables, images and section properties are skipped
        let paragraphs: Vec<Paragraph> = docx
            .document
            .children
            .iter()
            .filter_map(|child| match child {
                DocumentChild::Paragraph(para) => Some(convert_paragraph(para)),
                _ => None,
            })
            .collect();

        tracing::debug!(path = %path.display(), paragraphs = paragraphs.len(), "Read docx source");
        Ok(paragraphs)
    }
}

impl DocumentWriter for DocxFormat {
    fn extension(&self) -> &'static str {
        "docx"
    }

    fn styles(&self) -> &StyleSet {
        builtin_styles()
    }

    fn write(&self, document: &ReviewDocument, path: &Path) -> Result<()> {
        let docx = build_docx(document);
        write_atomically(path, |file| {
            docx.build().pack(&mut *file).map_err(|e| e.to_string())?;
            file.flush().map_err(|e| e.to_string())
        })
    }
}

/// Build the output document: heading first, then the copied paragraphs.
fn build_docx(document: &ReviewDocument) -> Docx {
    let mut docx = BUILTIN_STYLES.iter().fold(Docx::new(), |docx, (id, name)| {
        docx.add_style(Style::new(*id, StyleType::Paragraph).name(*name))
    });

    docx = docx.add_paragraph(
        DocxParagraph::new()
            .add_run(Run::new().add_text(&document.heading))
            .style(HEADING_STYLE),
    );

    for paragraph in &document.paragraphs {
        let mut para = DocxParagraph::new().add_run(Run::new().add_text(&paragraph.text));
        if let Some(style) = paragraph.style.applied_style() {
            para = para.style(style);
        }
        docx = docx.add_paragraph(para);
    }

    docx
}

fn convert_paragraph(para: &DocxParagraph) -> Paragraph {
    let mut text = String::new();
    collect_text(&para.children, &mut text);

    Paragraph {
        text,
        style: para.property.style.as_ref().map(|s| s.val.clone()),
    }
}

/// Append the text of runs, descending into hyperlinks.
fn collect_text(children: &[ParagraphChild], out: &mut String) {
    for child in children {
        match child {
            ParagraphChild::Run(run) => {
                for rc in &run.children {
                    match rc {
                        RunChild::Text(t) => out.push_str(&t.text),
                        RunChild::Tab(_) => out.push('\t'),
                        RunChild::Break(_) => out.push('\n'),
                        _ => {}
                    }
                }
            }
            ParagraphChild::Hyperlink(link) => collect_text(&link.children, out),
            _ => {}
        }
    }
}
