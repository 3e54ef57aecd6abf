//! Configuration constants, output naming and the source manifest.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Result, SplitterError};

/// Default output directory for split reviews.
pub const DEFAULT_OUTPUT_DIR: &str = "split-reviews";

/// Default base directory holding the composite review documents.
pub const DEFAULT_SOURCE_DIR: &str = "mike-paper-reviews-500/docx";

/// Composite review documents processed by `--all`, in processing order.
pub const DEFAULT_SOURCES: &[&str] = &[
    "Reviews_1-30.docx",
    "Reviews_31-60.docx",
    "Reviews_61-90.docx",
    "Reviews_91-120.docx",
    "Reviews_121-150.docx",
    "Reviews_151-180.docx",
    "Reviews_181-207.docx",
];

/// Titles shorter than this (in characters) are replaced by the next
/// paragraph when one is usable.
pub const MIN_TITLE_CHARS: usize = 5;

/// Number of title characters shown in progress output.
pub const TITLE_PREVIEW_CHARS: usize = 50;

/// Paragraph style used for the synthesized review heading.
pub const HEADING_STYLE: &str = "Heading1";

/// Build the output file name for a review.
///
/// # Examples
/// ```
/// use review_splitter::config::review_file_name;
///
/// assert_eq!(review_file_name(7, "", "docx"), "Review_007.docx");
/// assert_eq!(review_file_name(117, "a", "docx"), "Review_117a.docx");
/// assert_eq!(review_file_name(1204, "", "txt"), "Review_1204.txt");
/// ```
pub fn review_file_name(number: u32, suffix: &str, extension: &str) -> String {
    format!("Review_{number:03}{suffix}.{extension}")
}

/// Shorten a title for progress output, appending `...` when it was cut.
pub fn title_preview(title: &str) -> String {
    let mut chars = title.chars();
    let preview: String = chars.by_ref().take(TITLE_PREVIEW_CHARS).collect();
    if chars.next().is_some() {
        format!("{preview}...")
    } else {
        preview
    }
}

/// List of sources processed by a batch run.
///
/// Loaded from YAML:
///
/// ```yaml
/// source_dir: mike-paper-reviews-500/docx
/// sources:
///   - Reviews_1-30.docx
///   - Reviews_31-60.docx
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SourceManifest {
    /// Base directory override; the CLI default applies when absent.
    #[serde(default)]
    pub source_dir: Option<PathBuf>,

    /// Source file names relative to the base directory.
    pub sources: Vec<String>,
}

impl Default for SourceManifest {
    fn default() -> Self {
        Self {
            source_dir: None,
            sources: DEFAULT_SOURCES.iter().map(|s| (*s).to_string()).collect(),
        }
    }
}

impl SourceManifest {
    /// Load a manifest from a YAML file.
    pub fn load(path: &Path) -> Result<Self> {
        let yaml = fs::read_to_string(path)?;
        Self::from_yaml(&yaml, path)
    }

    /// Parse a manifest from YAML text; `origin` is used in error messages.
    pub fn from_yaml(yaml: &str, origin: &Path) -> Result<Self> {
        serde_yaml_ng::from_str(yaml).map_err(|source| SplitterError::Manifest {
            path: origin.to_path_buf(),
            source,
        })
    }
}
