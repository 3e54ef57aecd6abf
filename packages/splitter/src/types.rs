//! Core data types shared by the segmenter, the formats and the batch driver.

use std::collections::BTreeSet;

use crate::config::review_file_name;

/// A paragraph read from a source document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paragraph {
    /// Raw paragraph text.
    pub text: String,

    /// Style identifier from the source document, if any.
    pub style: Option<String>,
}

impl Paragraph {
    /// Create an unstyled paragraph.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: None,
        }
    }

    /// Set the paragraph style.
    #[must_use]
    pub fn with_style(mut self, style: impl Into<String>) -> Self {
        self.style = Some(style.into());
        self
    }
}

/// Paragraph style identifiers an output document can render.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleSet {
    ids: BTreeSet<String>,
}

impl StyleSet {
    /// Create an empty style set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Check whether a style identifier is available.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    /// Iterate over the style identifiers in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }

    /// Number of styles in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Whether the set holds no styles.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for StyleSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            ids: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// What happened to a paragraph's style when it was copied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StyleOutcome {
    /// Source paragraph had no style; the writer's default is used.
    Unstyled,

    /// Source style exists in the output style set and was kept.
    Applied(String),

    /// Source style is unknown to the output; the default was used instead.
    FellBack { requested: String },
}

impl StyleOutcome {
    /// Decide the outcome for a requested style against the output styles.
    #[must_use]
    pub fn resolve(requested: Option<&str>, styles: &StyleSet) -> Self {
        match requested {
            None => Self::Unstyled,
            Some(id) if styles.contains(id) => Self::Applied(id.to_string()),
            Some(id) => Self::FellBack {
                requested: id.to_string(),
            },
        }
    }

    /// Style the writer should use, `None` meaning the default style.
    #[must_use]
    pub fn applied_style(&self) -> Option<&str> {
        match self {
            Self::Applied(id) => Some(id),
            Self::Unstyled | Self::FellBack { .. } => None,
        }
    }

    #[must_use]
    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::FellBack { .. })
    }
}

/// A paragraph copied into a review document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewParagraph {
    pub text: String,
    pub style: StyleOutcome,
}

/// One standalone review, ready to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewDocument {
    /// Review number from the marker paragraph.
    pub number: u32,

    /// Duplicate suffix (empty for the first occurrence).
    pub suffix: String,

    /// Extracted title.
    pub title: String,

    /// Heading line, `Review <number><suffix>: <title>`.
    pub heading: String,

    /// Body paragraphs in source order.
    pub paragraphs: Vec<ReviewParagraph>,
}

impl ReviewDocument {
    /// Number plus suffix, e.g. `117a`.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{}{}", self.number, self.suffix)
    }

    /// Output file name for the given extension.
    #[must_use]
    pub fn file_name(&self, extension: &str) -> String {
        review_file_name(self.number, &self.suffix, extension)
    }

    /// Number of paragraphs whose style fell back to the default.
    #[must_use]
    pub fn fallback_count(&self) -> usize {
        self.paragraphs.iter().filter(|p| p.style.is_fallback()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paragraph_builder() {
        let p = Paragraph::new("Summary").with_style("Heading2");
        assert_eq!(p.text, "Summary");
        assert_eq!(p.style.as_deref(), Some("Heading2"));
    }

    #[test]
    fn test_style_outcome_resolve() {
        let styles: StyleSet = ["Normal", "Heading2"].into_iter().collect();

        assert_eq!(StyleOutcome::resolve(None, &styles), StyleOutcome::Unstyled);
        assert_eq!(
            StyleOutcome::resolve(Some("Heading2"), &styles),
            StyleOutcome::Applied("Heading2".to_string())
        );
        assert_eq!(
            StyleOutcome::resolve(Some("FancyQuote"), &styles),
            StyleOutcome::FellBack {
                requested: "FancyQuote".to_string()
            }
        );
    }

    #[test]
    fn test_style_outcome_applied_style() {
        assert_eq!(
            StyleOutcome::Applied("Quote".to_string()).applied_style(),
            Some("Quote")
        );
        assert_eq!(StyleOutcome::Unstyled.applied_style(), None);
        let fell_back = StyleOutcome::FellBack {
            requested: "X".to_string(),
        };
        assert_eq!(fell_back.applied_style(), None);
        assert!(fell_back.is_fallback());
    }

    #[test]
    fn test_review_document_naming() {
        let doc = ReviewDocument {
            number: 42,
            suffix: "a".to_string(),
            title: "Sparse experts".to_string(),
            heading: "Review 42a: Sparse experts".to_string(),
            paragraphs: Vec::new(),
        };
        assert_eq!(doc.label(), "42a");
        assert_eq!(doc.file_name("docx"), "Review_042a.docx");
        assert_eq!(doc.fallback_count(), 0);
    }
}
