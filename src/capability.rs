//! Seams toward the host page and the external annotation library
//!
//! The bootstrapper consumes these traits; it never implements them. The
//! host supplies the [`Document`], the annotation library supplies the
//! [`AnnotationProvider`], and activation yields a [`Capability`] handle
//! that accepts extension registrations.

use serde_json::Value;

/// The host document being annotated.
pub trait Document {
    /// The root content element type
    type Root;

    /// The single root content element, if it is queryable yet.
    ///
    /// Returns `None` before the document's structural content has
    /// finished loading.
    fn content_root(&self) -> Option<Self::Root>;
}

/// The external annotation library.
pub trait AnnotationProvider {
    /// Root element type this provider can activate on
    type Root;
    /// Handle type returned by activation
    type Capability: Capability;

    /// Turn annotation support on for a content root.
    fn activate(&self, root: Self::Root) -> anyhow::Result<Self::Capability>;
}

/// Handle returned by activating annotation support on a root element.
///
/// Extensions registered here own everything that happens after
/// registration, including any network traffic to the storage service.
pub trait Capability {
    /// Register a named extension with its configuration record.
    fn register_extension(&mut self, name: &str, config: Value) -> anyhow::Result<()>;
}
