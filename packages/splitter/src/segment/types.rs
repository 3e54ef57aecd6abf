//! Types for the segmentation pass.

use std::ops::Range;

use crate::config::review_file_name;

/// A recognized marker paragraph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Marker {
    /// Review number following the `Review` keyword.
    pub number: u32,

    /// Cleaned title from the rest of the marker line (may be empty).
    pub title: String,
}

/// Paragraph range belonging to one review.
///
/// `start` is the marker paragraph; the body runs from `start + 1` through
/// `end` inclusive. Adjacent markers produce `end == start` and an empty body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Boundary {
    /// Index of the marker paragraph.
    pub start: usize,

    /// Index of the last paragraph of this review.
    pub end: usize,

    /// Review number.
    pub number: u32,

    /// Resolved title.
    pub title: String,

    /// Duplicate suffix, empty for the first occurrence of `number`.
    pub suffix: String,
}

impl Boundary {
    /// Number plus suffix, e.g. `117a`.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{}{}", self.number, self.suffix)
    }

    /// Heading line for the output document.
    #[must_use]
    pub fn heading(&self) -> String {
        format!("Review {}: {}", self.label(), self.title)
    }

    /// Indices of the body paragraphs (marker excluded).
    #[must_use]
    pub fn body_range(&self) -> Range<usize> {
        self.start + 1..self.end + 1
    }

    /// Whether the review has no paragraphs after its marker.
    #[must_use]
    pub fn is_empty_body(&self) -> bool {
        self.body_range().is_empty()
    }

    /// Output file name for the given extension.
    #[must_use]
    pub fn file_name(&self, extension: &str) -> String {
        review_file_name(self.number, &self.suffix, extension)
    }
}
