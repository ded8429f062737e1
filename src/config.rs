//! Configuration management for the annotation bootstrapper

use serde::Deserialize;
use std::env;

use crate::store::DEFAULT_SEARCH_LIMIT;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub store: StoreSettings,
    pub policy: FailurePolicy,
}

/// Settings for the persistent "Store" extension
#[derive(Debug, Clone, Deserialize)]
pub struct StoreSettings {
    /// Base URL of the remote annotation-storage service
    pub prefix: String,
    /// Max annotations fetched per page load
    pub search_limit: u32,
}

/// What to do when attaching annotation support fails.
///
/// `LogAndContinue` reproduces the original page behavior (the page keeps
/// working without annotations) while leaving a trace of the failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FailurePolicy {
    FailFast,
    LogAndContinue,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            store: StoreSettings {
                prefix: "http://localhost:5000".to_string(),
                search_limit: DEFAULT_SEARCH_LIMIT,
            },
            policy: FailurePolicy::LogAndContinue,
        }
    }
}

impl Config {
    /// Load configuration, applying any `.env` file first
    pub fn load() -> Self {
        dotenvy::dotenv().ok();
        Self::from_env()
    }

    /// Read configuration from the environment, falling back to defaults
    pub fn from_env() -> Self {
        Config {
            store: StoreSettings {
                prefix: env::var("ANNOTATION_STORE_PREFIX")
                    .unwrap_or_else(|_| "http://localhost:5000".to_string()),
                search_limit: env::var("ANNOTATION_SEARCH_LIMIT")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(DEFAULT_SEARCH_LIMIT),
            },
            policy: match env::var("ANNOTATION_FAILURE_POLICY")
                .unwrap_or_else(|_| "logandcontinue".to_string())
                .as_str()
            {
                "failfast" => FailurePolicy::FailFast,
                _ => FailurePolicy::LogAndContinue,
            },
        }
    }
}
