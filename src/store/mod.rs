//! The "Store" extension contract
//!
//! The Store extension persists annotations against a remote service and
//! loads existing ones when a page opens. This module owns the
//! configuration record handed to the extension at registration and the
//! annotation record the extension carries:
//!
//! - `prefix` - base URL of the storage service
//! - `annotationData` - defaults merged into every annotation before it is
//!   persisted, always including the fragment-free page `uri`
//! - `loadFromSearch` - the search query issued at page load (`limit`,
//!   `uri`)
//!
//! The extension itself (and all of its network traffic) belongs to the
//! external annotation library; nothing in this module performs I/O.

mod annotation;
mod config;

pub use annotation::{Annotation, RangeSelector};
pub use config::{
    AnnotationData, SearchQuery, StoreConfig, DEFAULT_SEARCH_LIMIT, STORE_EXTENSION,
};
