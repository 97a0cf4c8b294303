//! Resources passed between adjacent pipeline items
//!
//! A resource is an opaque handle advertised by one item and consumed by its
//! neighbors during a pipeline run. Ownership is transient: resources are
//! cloned at pass boundaries, never shared mutably between items.

use serde::{Deserialize, Serialize};

/// Discriminator for what a resource handle points at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceKind {
    /// Database connection string
    Database,
    /// Path to a file on disk
    File,
    /// Generic URL
    Url,
}

/// A handle passed between adjacent pipeline items during execution
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectItemResource {
    /// What kind of handle this is
    pub kind: ResourceKind,
    /// Connection string, file path or URL; format is opaque to the engine
    pub url: String,
    /// Name of the item that advertised this resource
    pub provider: String,
}

impl ProjectItemResource {
    /// Create a new resource
    pub fn new(kind: ResourceKind, url: impl Into<String>, provider: impl Into<String>) -> Self {
        Self {
            kind,
            url: url.into(),
            provider: provider.into(),
        }
    }

    /// Create a database resource
    pub fn database(url: impl Into<String>, provider: impl Into<String>) -> Self {
        Self::new(ResourceKind::Database, url, provider)
    }

    /// Create a file resource
    pub fn file(url: impl Into<String>, provider: impl Into<String>) -> Self {
        Self::new(ResourceKind::File, url, provider)
    }
}

/// Extract the URLs of all database resources in a list
pub fn database_urls(resources: &[ProjectItemResource]) -> Vec<String> {
    resources
        .iter()
        .filter(|r| r.kind == ResourceKind::Database)
        .map(|r| r.url.clone())
        .collect()
}
