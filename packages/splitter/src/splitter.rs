//! Batch driver that ties reading, segmentation and writing together.
//!
//! Every failure below the batch level ends up as a logged message plus a
//! count: a missing source or a source without markers yields zero reviews,
//! and a review that fails to extract or write is skipped while the rest of
//! the source continues.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, SplitterError};
use crate::format::{DocumentFormat, DocumentReader, DocumentWriter};
use crate::segment::{extract, find_boundaries_with, Boundary, DuplicateCounter};
use crate::types::Paragraph;

/// Result of processing one boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReviewOutcome {
    /// Review was written to this path.
    Written(PathBuf),

    /// Extraction or writing failed with this message.
    Failed(String),
}

/// One review found in a source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewEntry {
    /// Number plus suffix, e.g. `117a`.
    pub label: String,

    /// Resolved title.
    pub title: String,

    /// Paragraphs whose style fell back to the default.
    pub fallback_styles: usize,

    pub outcome: ReviewOutcome,
}

/// Outcome of splitting one source document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceReport {
    /// Source document path.
    pub source: PathBuf,

    /// One entry per boundary, in document order.
    pub entries: Vec<ReviewEntry>,
}

impl SourceReport {
    fn new(source: &Path) -> Self {
        Self {
            source: source.to_path_buf(),
            entries: Vec::new(),
        }
    }

    /// Number of reviews found in the source.
    #[must_use]
    pub fn found(&self) -> usize {
        self.entries.len()
    }

    /// Number of reviews successfully written.
    #[must_use]
    pub fn written_count(&self) -> usize {
        self.written_paths().count()
    }

    /// Paths of the written reviews.
    pub fn written_paths(&self) -> impl Iterator<Item = &Path> {
        self.entries.iter().filter_map(|e| match &e.outcome {
            ReviewOutcome::Written(path) => Some(path.as_path()),
            ReviewOutcome::Failed(_) => None,
        })
    }
}

/// What happened to one named source in a batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceStatus {
    /// Source was split (possibly with zero reviews).
    Split(SourceReport),

    /// Source file does not exist.
    Skipped,

    /// Source could not be read.
    Failed(String),
}

/// Outcome of a batch run over several sources.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchReport {
    /// Per-source status, in processing order.
    pub sources: Vec<(String, SourceStatus)>,

    /// Output files written by more than one source in this batch.
    pub overwritten: Vec<PathBuf>,
}

impl BatchReport {
    /// Total number of reviews written across all sources.
    #[must_use]
    pub fn total_written(&self) -> usize {
        self.sources
            .iter()
            .map(|(_, status)| match status {
                SourceStatus::Split(report) => report.written_count(),
                SourceStatus::Skipped | SourceStatus::Failed(_) => 0,
            })
            .sum()
    }
}

/// Split one source, choosing the document format from its extension.
///
/// Output documents use the same format as the source.
///
/// # Errors
/// Returns an error when the source is missing, has an unsupported format,
/// cannot be read, or the output directory cannot be created. Per-review
/// failures are recorded in the report instead.
pub fn split_source(input: &Path, output_dir: &Path) -> Result<SourceReport> {
    let format = DocumentFormat::from_path(input)?;
    split_source_with(&format, &format, input, output_dir)
}

/// Split one source with an explicit reader and writer.
pub fn split_source_with<R, W>(
    reader: &R,
    writer: &W,
    input: &Path,
    output_dir: &Path,
) -> Result<SourceReport>
where
    R: DocumentReader + ?Sized,
    W: DocumentWriter + ?Sized,
{
    if !input.exists() {
        return Err(SplitterError::SourceNotFound(input.to_path_buf()));
    }

    let paragraphs = reader.read(input)?;

    // Duplicate numbering is scoped to this one source
    let mut counter = DuplicateCounter::new();
    let boundaries = find_boundaries_with(&paragraphs, &mut counter);

    tracing::info!(
        source = %input.display(),
        paragraphs = paragraphs.len(),
        reviews = boundaries.len(),
        "Found reviews to extract"
    );

    let mut report = SourceReport::new(input);
    if boundaries.is_empty() {
        tracing::info!(source = %input.display(), "No reviews found");
        return Ok(report);
    }

    fs::create_dir_all(output_dir)?;

    for boundary in &boundaries {
        let entry = process_boundary(writer, &paragraphs, boundary, output_dir);
        report.entries.push(entry);
    }

    tracing::info!(
        source = %input.display(),
        written = report.written_count(),
        found = report.found(),
        "Splitting complete"
    );

    Ok(report)
}

/// Extract and persist one review, converting any failure into the entry.
fn process_boundary<W: DocumentWriter + ?Sized>(
    writer: &W,
    paragraphs: &[Paragraph],
    boundary: &Boundary,
    output_dir: &Path,
) -> ReviewEntry {
    let label = boundary.label();

    let result = extract(paragraphs, boundary, writer.styles()).and_then(|document| {
        let path = output_dir.join(document.file_name(writer.extension()));
        writer.write(&document, &path)?;
        Ok((path, document.fallback_count()))
    });

    let (outcome, fallback_styles) = match result {
        Ok((path, fallbacks)) => {
            tracing::debug!(review = %label, path = %path.display(), "Saved review");
            (ReviewOutcome::Written(path), fallbacks)
        }
        Err(e) => {
            tracing::warn!(review = %label, error = %e, "Failed to extract review");
            (ReviewOutcome::Failed(e.to_string()), 0)
        }
    };

    ReviewEntry {
        label,
        title: boundary.title.clone(),
        fallback_styles,
        outcome,
    }
}

/// Split one source and return the number of reviews written.
///
/// Never fails: a missing or unreadable source is logged and counts as zero.
pub fn split_one(input: &Path, output_dir: &Path) -> usize {
    match split_source(input, output_dir) {
        Ok(report) => report.written_count(),
        Err(e) => {
            tracing::warn!(source = %input.display(), error = %e, "Skipping source");
            0
        }
    }
}

/// Progress notification emitted by [`split_batch_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceEvent<'a> {
    /// An existing source is about to be split.
    Started(&'a str),

    /// A source was split, skipped or failed.
    Finished(&'a str, &'a SourceStatus),
}

/// Split the named sources under `source_dir`, in order.
///
/// Missing sources are skipped and reported. Each source is segmented
/// independently; when two sources produce the same output file name the
/// later one wins and the path is listed in [`BatchReport::overwritten`].
///
/// # Errors
/// Returns [`SplitterError::SourceNotFound`] when `source_dir` does not exist.
pub fn split_batch<S: AsRef<str>>(
    source_dir: &Path,
    names: &[S],
    output_dir: &Path,
) -> Result<BatchReport> {
    split_batch_with(source_dir, names, output_dir, |_| {})
}

/// Like [`split_batch`], calling `on_event` as each source starts and finishes.
///
/// # Errors
/// Returns [`SplitterError::SourceNotFound`] when `source_dir` does not exist.
pub fn split_batch_with<S, F>(
    source_dir: &Path,
    names: &[S],
    output_dir: &Path,
    mut on_event: F,
) -> Result<BatchReport>
where
    S: AsRef<str>,
    F: FnMut(SourceEvent<'_>),
{
    if !source_dir.exists() {
        return Err(SplitterError::SourceNotFound(source_dir.to_path_buf()));
    }

    let mut report = BatchReport::default();
    let mut seen: HashSet<PathBuf> = HashSet::new();

    for name in names {
        let name = name.as_ref();
        let path = source_dir.join(name);

        if !path.exists() {
            tracing::info!(source = %name, "Source not found, skipping");
            on_event(SourceEvent::Finished(name, &SourceStatus::Skipped));
            report.sources.push((name.to_string(), SourceStatus::Skipped));
            continue;
        }

        on_event(SourceEvent::Started(name));
        let status = match split_source(&path, output_dir) {
            Ok(source_report) => {
                for written in source_report.written_paths() {
                    if !seen.insert(written.to_path_buf()) {
                        tracing::warn!(
                            path = %written.display(),
                            source = %name,
                            "Review number repeats across sources, output overwritten"
                        );
                        report.overwritten.push(written.to_path_buf());
                    }
                }
                SourceStatus::Split(source_report)
            }
            Err(e) => {
                tracing::warn!(source = %name, error = %e, "Failed to split source");
                SourceStatus::Failed(e.to_string())
            }
        };
        on_event(SourceEvent::Finished(name, &status));
        report.sources.push((name.to_string(), status));
    }

    tracing::info!(total = report.total_written(), "All sources processed");
    Ok(report)
}

/// Split the named sources and return the total number of reviews written.
pub fn split_many<S: AsRef<str>>(source_dir: &Path, names: &[S], output_dir: &Path) -> usize {
    match split_batch(source_dir, names, output_dir) {
        Ok(report) => report.total_written(),
        Err(e) => {
            tracing::warn!(error = %e, "Batch aborted");
            0
        }
    }
}
