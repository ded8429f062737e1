//! Recording fakes for the host-document and annotation-library seams

use std::cell::RefCell;
use std::rc::Rc;

use anyhow::anyhow;
use serde_json::Value;

use marginalia::{AnnotationProvider, Capability, Document};

/// Extension registrations observed by a provider's capabilities
pub type Registrations = Rc<RefCell<Vec<(String, Value)>>>;

pub struct StaticDocument {
    root: Option<String>,
}

impl StaticDocument {
    pub fn with_body() -> Self {
        Self {
            root: Some("body".to_string()),
        }
    }

    pub fn without_root() -> Self {
        Self { root: None }
    }
}

impl Document for StaticDocument {
    type Root = String;

    fn content_root(&self) -> Option<String> {
        self.root.clone()
    }
}

pub struct RecordingProvider {
    pub registrations: Registrations,
    broken: bool,
}

impl RecordingProvider {
    pub fn new() -> Self {
        Self {
            registrations: Rc::new(RefCell::new(Vec::new())),
            broken: false,
        }
    }

    pub fn broken() -> Self {
        Self {
            registrations: Rc::new(RefCell::new(Vec::new())),
            broken: true,
        }
    }
}

impl AnnotationProvider for RecordingProvider {
    type Root = String;
    type Capability = RecordingCapability;

    fn activate(&self, root: String) -> anyhow::Result<RecordingCapability> {
        if self.broken {
            return Err(anyhow!("annotation library failed to load"));
        }
        Ok(RecordingCapability {
            root,
            registrations: Rc::clone(&self.registrations),
        })
    }
}

pub struct RecordingCapability {
    pub root: String,
    registrations: Registrations,
}

impl Capability for RecordingCapability {
    fn register_extension(&mut self, name: &str, config: Value) -> anyhow::Result<()> {
        self.registrations
            .borrow_mut()
            .push((name.to_string(), config));
        Ok(())
    }
}
