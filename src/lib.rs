//! Marginalia
//!
//! In-page annotation bootstrapper: on a single page-ready event it
//! activates an external annotation capability on the document's content
//! root and registers a persistent "Store" backend pointed at a remote
//! storage service.
//!
//! # Features
//!
//! - Explicit, injectable page location (no ambient globals), with
//!   fragment-free document URIs for storage and search
//! - Typed "Store" extension configuration with exact wire keys
//!   (`prefix`, `annotationData`, `loadFromSearch`)
//! - Fire-once attachment per page load with an explicit error taxonomy
//! - Configurable failure policy: fail fast, or log and continue without
//!   annotations
//!
//! The annotation capability itself, and every network request the Store
//! backend makes, belong to the external annotation library behind the
//! [`capability`] seams; this crate performs no I/O.

pub mod bootstrap;
pub mod capability;
pub mod config;
pub mod error;
pub mod page;
pub mod store;

pub use bootstrap::Bootstrapper;
pub use capability::{AnnotationProvider, Capability, Document};
pub use config::{Config, FailurePolicy, StoreSettings};
pub use error::{BootstrapError, Result};
pub use page::PageLocation;
pub use store::{
    Annotation, AnnotationData, RangeSelector, SearchQuery, StoreConfig, DEFAULT_SEARCH_LIMIT,
    STORE_EXTENSION,
};
