//! Store extension configuration
//!
//! Wire keys follow the extension's expected shape exactly: `prefix`,
//! `annotationData`, `loadFromSearch`.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::page::PageLocation;

/// Extension name used at registration
pub const STORE_EXTENSION: &str = "Store";

/// Max annotations fetched per page load unless overridden
pub const DEFAULT_SEARCH_LIMIT: u32 = 20;

/// Configuration record for the "Store" extension.
///
/// Built once per page load and handed to the capability handle at
/// registration; the bootstrapper keeps no reference afterward.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Base URL of the remote annotation-storage service
    pub prefix: String,
    /// Defaults merged into every annotation before persistence
    #[serde(rename = "annotationData")]
    pub annotation_data: AnnotationData,
    /// Query the extension issues to load existing annotations
    #[serde(rename = "loadFromSearch")]
    pub load_from_search: SearchQuery,
}

/// Fields stamped onto every annotation the store persists.
///
/// `uri` is always present and never carries a fragment; arbitrary extra
/// string fields ride along flattened.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnotationData {
    pub uri: String,
    #[serde(flatten, skip_serializing_if = "BTreeMap::is_empty", default)]
    pub extra: BTreeMap<String, String>,
}

/// Search filter for the initial annotation fetch
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchQuery {
    pub limit: u32,
    pub uri: String,
}

impl StoreConfig {
    /// Build the configuration for a page.
    ///
    /// Both `uri` fields are taken from the location's fragment-free form.
    pub fn for_page(prefix: &str, location: &PageLocation) -> Self {
        let uri = location.document_uri().to_string();
        Self {
            prefix: prefix.to_string(),
            annotation_data: AnnotationData {
                uri: uri.clone(),
                extra: BTreeMap::new(),
            },
            load_from_search: SearchQuery {
                limit: DEFAULT_SEARCH_LIMIT,
                uri,
            },
        }
    }

    /// Override the search limit
    pub fn with_limit(mut self, limit: u32) -> Self {
        self.load_from_search.limit = limit;
        self
    }

    /// Add an extra annotation-data default
    pub fn with_field(mut self, key: &str, value: &str) -> Self {
        self.annotation_data
            .extra
            .insert(key.to_string(), value.to_string());
        self
    }

    /// The search request URL the extension will issue at page load.
    ///
    /// Pure rendering; this crate never issues the request itself.
    pub fn search_url(&self) -> String {
        format!(
            "{}/search?limit={}&uri={}",
            self.prefix.trim_end_matches('/'),
            self.load_from_search.limit,
            urlencoding::encode(&self.load_from_search.uri)
        )
    }
}
