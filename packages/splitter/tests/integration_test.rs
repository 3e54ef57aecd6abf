//! End-to-end tests for splitting `.docx` review collections.
//!
//! Source documents are generated with docx-rs in a temp directory, split,
//! and the written reviews are read back through the public reader.

use std::fs::{self, File};
use std::path::{Path, PathBuf};

use docx_rs::{Docx, Paragraph as DocxParagraph, Run, Style, StyleType};
use pretty_assertions::assert_eq;
use tempfile::tempdir;

use review_splitter::format::{DocumentReader, DocxFormat};
use review_splitter::segment::find_boundaries;
use review_splitter::splitter::{split_batch, split_source, SourceStatus};
use review_splitter::{split_many, split_one, Paragraph};

/// Paragraphs of a small review collection: (text, style).
const COLLECTION: &[(&str, Option<&str>)] = &[
    ("Paper reviews, batch one", Some("Title")),
    ("Review 1: Attention is all you need", None),
    ("https://arxiv.org/abs/1706.03762", None),
    ("Summary", Some("Heading2")),
    ("Replaces recurrence with attention.", None),
    ("Review 2:", None),
    ("Neural rendering survey", None),
    ("Broad but shallow.", Some("CustomBody")),
    ("Review 3, Short: Fast attention", None),
    ("IO-aware kernels.", None),
    ("Review 2: Scaling laws", None),
    ("Power laws everywhere.", None),
];

fn write_docx(path: &Path, paragraphs: &[(&str, Option<&str>)]) {
    let mut docx = Docx::new()
        .add_style(Style::new("Title", StyleType::Paragraph).name("Title"))
        .add_style(Style::new("Heading2", StyleType::Paragraph).name("Heading 2"))
        .add_style(Style::new("CustomBody", StyleType::Paragraph).name("Custom Body"));

    for (text, style) in paragraphs {
        let mut para = DocxParagraph::new().add_run(Run::new().add_text(*text));
        if let Some(style) = style {
            para = para.style(style);
        }
        docx = docx.add_paragraph(para);
    }

    let file = File::create(path).unwrap();
    docx.build().pack(file).unwrap();
}

fn texts(paragraphs: &[Paragraph]) -> Vec<String> {
    paragraphs.iter().map(|p| p.text.clone()).collect()
}

fn setup() -> (tempfile::TempDir, PathBuf) {
    let dir = tempdir().unwrap();
    let input = dir.path().join("Reviews_1-30.docx");
    write_docx(&input, COLLECTION);
    (dir, input)
}

#[test]
fn test_reader_preserves_paragraphs_and_styles() {
    let (_dir, input) = setup();
    let paragraphs = DocxFormat.read(&input).unwrap();

    assert_eq!(paragraphs.len(), COLLECTION.len());
    for (read, (text, style)) in paragraphs.iter().zip(COLLECTION) {
        assert_eq!(read.text, *text);
        assert_eq!(read.style.as_deref(), *style);
    }
}

#[test]
fn test_split_docx_collection() {
    let (dir, input) = setup();
    let out = dir.path().join("split-reviews");

    assert_eq!(split_one(&input, &out), 4);

    let mut names: Vec<String> = fs::read_dir(&out)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    assert_eq!(
        names,
        vec![
            "Review_001.docx",
            "Review_002.docx",
            "Review_002a.docx",
            "Review_003.docx",
        ]
    );

    let first = DocxFormat.read(&out.join("Review_001.docx")).unwrap();
    assert_eq!(
        texts(&first),
        vec![
            "Review 1: Attention is all you need",
            "https://arxiv.org/abs/1706.03762",
            "Summary",
            "Replaces recurrence with attention.",
        ]
    );
    assert_eq!(first[0].style.as_deref(), Some("Heading1"));
    assert_eq!(first[2].style.as_deref(), Some("Heading2"));

    let fallback = DocxFormat.read(&out.join("Review_002.docx")).unwrap();
    assert_eq!(
        texts(&fallback),
        vec![
            "Review 2: Neural rendering survey",
            "Neural rendering survey",
            "Broad but shallow.",
        ]
    );

    let short = DocxFormat.read(&out.join("Review_003.docx")).unwrap();
    assert_eq!(short[0].text, "Review 3: [Short] Fast attention");

    let duplicate = DocxFormat.read(&out.join("Review_002a.docx")).unwrap();
    assert_eq!(
        texts(&duplicate),
        vec!["Review 2a: Scaling laws", "Power laws everywhere."]
    );
}

#[test]
fn test_unknown_style_is_reported() {
    let (dir, input) = setup();
    let report = split_source(&input, &dir.path().join("out")).unwrap();

    let fallbacks: Vec<(&str, usize)> = report
        .entries
        .iter()
        .map(|e| (e.label.as_str(), e.fallback_styles))
        .collect();
    assert_eq!(fallbacks, vec![("1", 0), ("2", 1), ("3", 0), ("2a", 0)]);
}

#[test]
fn test_bodies_reproduce_source() {
    let (dir, input) = setup();
    let out = dir.path().join("out");
    let source = DocxFormat.read(&input).unwrap();
    let boundaries = find_boundaries(&source);

    let report = split_source(&input, &out).unwrap();

    let mut bodies: Vec<String> = Vec::new();
    for path in report.written_paths() {
        let review = DocxFormat.read(path).unwrap();
        bodies.extend(texts(&review[1..]));
    }

    let markers: Vec<usize> = boundaries.iter().map(|b| b.start).collect();
    let expected: Vec<String> = (boundaries[0].start..source.len())
        .filter(|i| !markers.contains(i))
        .map(|i| source[i].text.clone())
        .collect();
    assert_eq!(bodies, expected);
}

#[test]
fn test_split_is_repeatable() {
    let (dir, input) = setup();
    let out = dir.path().join("out");

    let first = split_source(&input, &out).unwrap();
    let first_docs: Vec<Vec<String>> = first
        .written_paths()
        .map(|p| texts(&DocxFormat.read(p).unwrap()))
        .collect();

    let second = split_source(&input, &out).unwrap();
    let second_docs: Vec<Vec<String>> = second
        .written_paths()
        .map(|p| texts(&DocxFormat.read(p).unwrap()))
        .collect();

    assert_eq!(first_docs, second_docs);
}

#[test]
fn test_document_without_reviews() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("empty.docx");
    write_docx(&input, &[("Nothing to see", None), ("Still nothing", None)]);
    let out = dir.path().join("out");

    assert_eq!(split_one(&input, &out), 0);
    assert!(!out.exists());
}

#[test]
fn test_corrupt_source_in_batch() {
    let dir = tempdir().unwrap();
    write_docx(&dir.path().join("good.docx"), COLLECTION);
    fs::write(dir.path().join("bad.docx"), b"definitely not a zip").unwrap();
    let out = dir.path().join("out");

    let report = split_batch(dir.path(), &["bad.docx", "gone.docx", "good.docx"], &out).unwrap();

    assert!(matches!(report.sources[0].1, SourceStatus::Failed(_)));
    assert_eq!(report.sources[1].1, SourceStatus::Skipped);
    assert!(matches!(report.sources[2].1, SourceStatus::Split(_)));
    assert_eq!(report.total_written(), 4);
    assert_eq!(split_many(dir.path(), &["bad.docx", "good.docx"], &out), 4);
}
