//! Error types for the item engine

use thiserror::Error;

/// Result type alias using ItemEngineError
pub type Result<T> = std::result::Result<T, ItemEngineError>;

/// Errors that can occur in the item engine
#[derive(Debug, Error)]
pub enum ItemEngineError {
    /// No factory is registered for an item type
    #[error("Unknown item type: {0}")]
    UnknownItemType(String),

    /// Item type is registered with metadata only, no factory
    #[error("No factory registered for item type '{0}'")]
    NoFactory(String),

    /// Missing required configuration key
    #[error("Missing configuration for '{0}'")]
    MissingConfig(String),

    /// Configuration value has the wrong shape
    #[error("Invalid configuration for '{item}': {reason}")]
    InvalidConfig { item: String, reason: String },
}

impl ItemEngineError {
    /// Create an invalid-config error for the given item
    pub fn invalid_config(item: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            item: item.into(),
            reason: reason.into(),
        }
    }
}
