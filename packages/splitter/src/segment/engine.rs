//! Segment engine that turns marker paragraphs into review boundaries.

use super::counter::DuplicateCounter;
use super::strategy::{MarkerStrategy, ReviewMarkerStrategy};
use super::types::Boundary;
use crate::types::Paragraph;

/// Engine for finding review boundaries in a paragraph sequence.
///
/// Scans the paragraphs once, opening a [`Boundary`] at each marker the
/// strategy recognizes. Each boundary ends right before the next marker; the
/// last one runs to the final paragraph.
pub struct SegmentEngine<S: MarkerStrategy> {
    strategy: S,
}

impl<S: MarkerStrategy> SegmentEngine<S> {
    /// Create a new segment engine.
    #[must_use]
    pub fn new(strategy: S) -> Self {
        Self { strategy }
    }

    /// Find boundaries, recording duplicate numbers in `counter`.
    ///
    /// Paragraphs before the first marker belong to no boundary.
    pub fn find_boundaries(
        &self,
        paragraphs: &[Paragraph],
        counter: &mut DuplicateCounter,
    ) -> Vec<Boundary> {
        let mut boundaries: Vec<Boundary> = Vec::new();

        for (index, paragraph) in paragraphs.iter().enumerate() {
            let Some(marker) = self.strategy.detect(&paragraph.text) else {
                continue;
            };

            let title = self.resolve_title(marker.title, paragraphs.get(index + 1));
            let suffix = counter.record(marker.number);

            // Previous review ends right before this marker
            if let Some(previous) = boundaries.last_mut() {
                previous.end = index - 1;
            }

            tracing::debug!(
                index,
                number = marker.number,
                suffix = %suffix,
                title = %title,
                "Found review marker"
            );

            boundaries.push(Boundary {
                start: index,
                end: index,
                number: marker.number,
                title,
                suffix,
            });
        }

        if let Some(last) = boundaries.last_mut() {
            last.end = paragraphs.len() - 1;
        }

        boundaries
    }

    /// Replace a weak marker title with the following paragraph when usable.
    fn resolve_title(&self, title: String, next: Option<&Paragraph>) -> String {
        if !self.strategy.needs_fallback_title(&title) {
            return title;
        }

        next.and_then(|p| self.strategy.fallback_title(&p.text))
            .unwrap_or(title)
    }
}

impl Default for SegmentEngine<ReviewMarkerStrategy> {
    fn default() -> Self {
        Self::new(ReviewMarkerStrategy)
    }
}

/// Find review boundaries with a fresh duplicate counter.
///
/// # Examples
/// ```
/// use review_splitter::segment::find_boundaries;
/// use review_splitter::types::Paragraph;
///
/// let paragraphs = vec![
///     Paragraph::new("Review 1: Attention is all you need"),
///     Paragraph::new("Strong paper."),
///     Paragraph::new("Review 2: Scaling laws"),
/// ];
/// let boundaries = find_boundaries(&paragraphs);
/// assert_eq!(boundaries.len(), 2);
/// assert_eq!((boundaries[0].start, boundaries[0].end), (0, 1));
/// assert_eq!((boundaries[1].start, boundaries[1].end), (2, 2));
/// ```
#[must_use]
pub fn find_boundaries(paragraphs: &[Paragraph]) -> Vec<Boundary> {
    let mut counter = DuplicateCounter::new();
    find_boundaries_with(paragraphs, &mut counter)
}

/// Find review boundaries using the caller's duplicate counter.
pub fn find_boundaries_with(
    paragraphs: &[Paragraph],
    counter: &mut DuplicateCounter,
) -> Vec<Boundary> {
    SegmentEngine::default().find_boundaries(paragraphs, counter)
}
