//! The annotation record carried by the Store extension
//!
//! Shape mirrors what the storage service exchanges: a page `uri`, the
//! selected `quote`, DOM range selectors for re-anchoring, and an optional
//! note `text`. Extra string fields configured as annotation-data defaults
//! are flattened alongside.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

use super::config::AnnotationData;

/// A user-created note anchored to a range of content on a page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Annotation {
    /// Unique identifier (UUID)
    pub id: String,
    /// The page this annotation belongs to (fragment-free)
    pub uri: String,
    /// Note content, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// The exact text that was selected
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quote: Option<String>,
    /// DOM ranges anchoring the annotation
    pub ranges: Vec<RangeSelector>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub tags: Vec<String>,
    /// Creation timestamp
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    /// Last modification timestamp
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
    /// Extra fields stamped from annotation-data defaults
    #[serde(flatten, skip_serializing_if = "BTreeMap::is_empty", default)]
    pub extra: BTreeMap<String, String>,
}

/// A DOM range identifying the annotated span
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RangeSelector {
    /// Start container path
    pub start: String,
    /// End container path
    pub end: String,
    /// Offset within the start container
    #[serde(rename = "startOffset")]
    pub start_offset: usize,
    /// Offset within the end container
    #[serde(rename = "endOffset")]
    pub end_offset: usize,
}

impl Annotation {
    /// Create a highlight over a selected range
    pub fn new_highlight(uri: &str, quote: &str, range: RangeSelector) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            uri: uri.to_string(),
            text: None,
            quote: Some(quote.to_string()),
            ranges: vec![range],
            tags: Vec::new(),
            created_at: now,
            updated_at: now,
            extra: BTreeMap::new(),
        }
    }

    /// Create a note over a selected range
    pub fn new_note(uri: &str, quote: &str, range: RangeSelector, note: &str) -> Self {
        let mut annotation = Self::new_highlight(uri, quote, range);
        annotation.text = Some(note.to_string());
        annotation
    }

    /// Add a tag
    pub fn with_tag(mut self, tag: &str) -> Self {
        self.tags.push(tag.to_string());
        self
    }
}

impl AnnotationData {
    /// Merge these defaults into an annotation before persistence.
    ///
    /// Defaults win on collision: the `uri` is stamped unconditionally and
    /// extra fields overwrite same-named fields on the annotation.
    pub fn apply_to(&self, annotation: &mut Annotation) {
        annotation.uri = self.uri.clone();
        for (key, value) in &self.extra {
            annotation.extra.insert(key.clone(), value.clone());
        }
    }
}
