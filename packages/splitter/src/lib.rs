//! Review Splitter - split composite review documents into one file per review.
//!
//! A source document holds many peer reviews back to back, each introduced by
//! a marker paragraph such as `Review 12: Title`. This crate finds those
//! markers, computes one paragraph range per review and writes every range
//! out as a standalone document.
//!
//! # Example
//!
//! ```
//! use review_splitter::segment::find_boundaries;
//! use review_splitter::types::Paragraph;
//!
//! let paragraphs = vec![
//!     Paragraph::new("Review 9, Short: Fast attention"),
//!     Paragraph::new("Clear writing, weak baselines."),
//! ];
//! let boundaries = find_boundaries(&paragraphs);
//! assert_eq!(boundaries[0].heading(), "Review 9: [Short] Fast attention");
//! ```
//!
//! # Architecture
//!
//! - [`config`]: Constants, output naming and the source manifest
//! - [`types`]: Paragraphs, review documents and style outcomes
//! - [`error`]: Error types and Result alias
//! - [`segment`]: Marker detection, boundaries and extraction
//! - [`format`]: `.docx` and plain-text readers and writers
//! - [`splitter`]: Batch driver over one or many sources
//! - [`cli`]: Command-line interface

pub mod cli;
pub mod config;
pub mod error;
pub mod format;
pub mod segment;
pub mod splitter;
pub mod types;

// Re-export main functions
pub use splitter::{split_many, split_one};

// Re-export commonly used items
pub use error::{Result, SplitterError};
pub use segment::{extract, find_boundaries, Boundary};
pub use types::{Paragraph, ReviewDocument};
