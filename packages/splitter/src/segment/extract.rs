//! Materialize a boundary into a standalone review document.

use super::types::Boundary;
use crate::error::{Result, SplitterError};
use crate::types::{Paragraph, ReviewDocument, ReviewParagraph, StyleOutcome, StyleSet};

/// Extract one review from the source paragraphs.
///
/// Copies paragraphs `start + 1 ..= end` verbatim (the marker paragraph is
/// replaced by the synthesized heading). `end` is clamped to the last
/// paragraph. Source styles are kept when `styles` contains them and
/// otherwise fall back to the default; the outcome is recorded per paragraph.
///
/// # Errors
/// Returns [`SplitterError::Extraction`] when the boundary does not fit the
/// paragraph list.
pub fn extract(
    paragraphs: &[Paragraph],
    boundary: &Boundary,
    styles: &StyleSet,
) -> Result<ReviewDocument> {
    if boundary.start >= paragraphs.len() {
        return Err(SplitterError::Extraction {
            label: boundary.label(),
            message: format!(
                "start index {} is past the end of the document ({} paragraphs)",
                boundary.start,
                paragraphs.len()
            ),
        });
    }

    let stop = (boundary.end + 1).min(paragraphs.len());
    let body = paragraphs.get(boundary.start + 1..stop).unwrap_or(&[]);

    let copied: Vec<ReviewParagraph> = body
        .iter()
        .map(|p| {
            let style = StyleOutcome::resolve(p.style.as_deref(), styles);
            if let StyleOutcome::FellBack { requested } = &style {
                tracing::debug!(
                    review = %boundary.label(),
                    style = %requested,
                    "Style not available in output, using default"
                );
            }
            ReviewParagraph {
                text: p.text.clone(),
                style,
            }
        })
        .collect();

    Ok(ReviewDocument {
        number: boundary.number,
        suffix: boundary.suffix.clone(),
        title: boundary.title.clone(),
        heading: boundary.heading(),
        paragraphs: copied,
    })
}
