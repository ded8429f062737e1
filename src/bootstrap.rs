//! Page-load bootstrapping
//!
//! Wires a page's content root to annotation capability and registers the
//! persistent "Store" extension, once per page load. The host invokes
//! [`Bootstrapper::on_document_ready`] from its startup sequence after the
//! document's structural content has loaded.

use std::sync::atomic::{AtomicBool, Ordering};

use crate::capability::{AnnotationProvider, Capability, Document};
use crate::config::{Config, FailurePolicy};
use crate::error::{BootstrapError, Result};
use crate::page::PageLocation;
use crate::store::{StoreConfig, STORE_EXTENSION};

/// Fire-once initializer for a single page load.
pub struct Bootstrapper {
    config: Config,
    attached: AtomicBool,
}

impl Bootstrapper {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            attached: AtomicBool::new(false),
        }
    }

    /// Attach annotation support and register the Store extension.
    ///
    /// Runs at most once per bootstrapper; later calls (e.g. from in-page
    /// navigation that does not reload the document) fail with
    /// [`BootstrapError::AlreadyAttached`]. A failed attempt does not
    /// re-arm: a page load gets exactly one activation attempt.
    ///
    /// On success the capability handle is returned to the host; the
    /// extension owns all storage traffic from then on.
    pub fn attach<D, P>(
        &self,
        document: &D,
        provider: &P,
        location: &PageLocation,
    ) -> Result<P::Capability>
    where
        D: Document,
        P: AnnotationProvider<Root = D::Root>,
    {
        if self.attached.swap(true, Ordering::SeqCst) {
            return Err(BootstrapError::AlreadyAttached);
        }

        let root = document
            .content_root()
            .ok_or(BootstrapError::RootUnavailable)?;

        let mut capability = provider
            .activate(root)
            .map_err(BootstrapError::CapabilityUnavailable)?;

        let store = StoreConfig::for_page(&self.config.store.prefix, location)
            .with_limit(self.config.store.search_limit);

        capability
            .register_extension(STORE_EXTENSION, serde_json::to_value(&store)?)
            .map_err(|source| BootstrapError::ExtensionRejected {
                name: STORE_EXTENSION,
                source,
            })?;

        tracing::info!(
            prefix = %store.prefix,
            uri = %store.load_from_search.uri,
            limit = store.load_from_search.limit,
            "annotation store registered"
        );

        Ok(capability)
    }

    /// Host-facing entry point, applying the configured failure policy.
    ///
    /// Under [`FailurePolicy::LogAndContinue`] any failure is logged and
    /// the page proceeds without annotations (`Ok(None)`), matching the
    /// original behavior of a page whose annotation library never loaded.
    pub fn on_document_ready<D, P>(
        &self,
        document: &D,
        provider: &P,
        location: &PageLocation,
    ) -> Result<Option<P::Capability>>
    where
        D: Document,
        P: AnnotationProvider<Root = D::Root>,
    {
        match self.attach(document, provider, location) {
            Ok(capability) => Ok(Some(capability)),
            Err(err) => match self.config.policy {
                FailurePolicy::FailFast => Err(err),
                FailurePolicy::LogAndContinue => {
                    tracing::warn!(error = %err, "continuing without annotation support");
                    Ok(None)
                }
            },
        }
    }
}
