//! Error types for the bootstrapper

use thiserror::Error;

/// Crate-wide result type
pub type Result<T> = std::result::Result<T, BootstrapError>;

/// Errors raised while attaching annotation support to a page.
///
/// The original flow failed silently when the page or the annotation
/// library was not ready; these variants make each of those states
/// explicit so the host can decide what to do with them.
#[derive(Error, Debug)]
pub enum BootstrapError {
    /// The document has no queryable root content element
    #[error("document root element is unavailable")]
    RootUnavailable,

    /// The annotation provider failed to activate on the root
    #[error("annotation capability unavailable: {0}")]
    CapabilityUnavailable(#[source] anyhow::Error),

    /// The capability handle refused the extension registration
    #[error("extension {name:?} rejected: {source}")]
    ExtensionRejected {
        name: &'static str,
        #[source]
        source: anyhow::Error,
    },

    /// The bootstrapper already fired for this page load
    #[error("annotation support already attached for this page load")]
    AlreadyAttached,

    #[error("configuration serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
