//! Review segmentation for composite documents.
//!
//! Finds `Review <number>` marker paragraphs, turns them into non-overlapping
//! [`Boundary`] ranges and materializes each range as a [`ReviewDocument`].
//!
//! [`ReviewDocument`]: crate::types::ReviewDocument

mod counter;
mod engine;
mod extract;
mod strategy;
mod types;

pub use counter::{duplicate_suffix, DuplicateCounter};
pub use engine::{find_boundaries, find_boundaries_with, SegmentEngine};
pub use extract::extract;
pub use strategy::{MarkerStrategy, ReviewMarkerStrategy};
pub use types::{Boundary, Marker};
