//! Marker detection strategies.

use std::sync::LazyLock;

use regex::Regex;

use super::types::Marker;
use crate::config::MIN_TITLE_CHARS;

/// `Review` keyword (any case), whitespace, then the review number.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static MARKER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?i:review)\s+([0-9]+)").expect("valid regex"));

/// One leading comma or colon separating the number from the title.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static SEPARATOR_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[,:]\s*").expect("valid regex"));

/// `Short,` / `Short:` prefix marking short-paper reviews.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static SHORT_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?i:short)[,:]\s*").expect("valid regex"));

/// Marker written in place of the `Short` prefix.
const SHORT_MARKER: &str = "[Short] ";

/// Trait for configurable marker recognition.
///
/// Implementations decide which paragraphs open a new review and how the
/// title is derived.
pub trait MarkerStrategy {
    /// Recognize a marker paragraph.
    fn detect(&self, text: &str) -> Option<Marker>;

    /// Whether a title from the marker line is too weak to keep.
    fn needs_fallback_title(&self, title: &str) -> bool {
        title.chars().count() < MIN_TITLE_CHARS
    }

    /// Title taken from the paragraph following a marker, if usable.
    fn fallback_title(&self, text: &str) -> Option<String> {
        let text = text.trim();
        if text.is_empty() || text.starts_with("http") {
            None
        } else {
            Some(text.to_string())
        }
    }
}

/// Strategy for `Review <number>[,:] [Short[,:]] <title>` headings.
///
/// This is the default strategy for peer-review collections.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReviewMarkerStrategy;

impl MarkerStrategy for ReviewMarkerStrategy {
    fn detect(&self, text: &str) -> Option<Marker> {
        let text = text.trim();
        let captures = MARKER_PATTERN.captures(text)?;
        let whole = captures.get(0)?;
        let digits = captures.get(1)?.as_str();

        let number = match digits.parse::<u32>() {
            Ok(n) => n,
            Err(e) => {
                tracing::debug!(
                    number = %digits,
                    error = %e,
                    "Review number out of range, not a marker"
                );
                return None;
            }
        };

        Some(Marker {
            number,
            title: clean_title(&text[whole.end()..]),
        })
    }
}

/// Clean the remainder of a marker line into a title.
///
/// - Trims surrounding whitespace
/// - Drops one leading `,` or `:` separator
/// - Rewrites a leading `Short,`/`Short:` into `[Short] `
fn clean_title(rest: &str) -> String {
    let title = rest.trim();
    let title = SEPARATOR_PATTERN.replace(title, "");
    SHORT_PATTERN.replace(&title, SHORT_MARKER).into_owned()
}
