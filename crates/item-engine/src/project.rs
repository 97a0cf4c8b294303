//! Item construction context
//!
//! Executable items are built from project configuration: the item's name,
//! the project directory, an item-specific configuration dictionary, and the
//! log sink the host wants execution messages delivered to. Per-item data
//! and log directories are derived from the project directory.

use std::path::PathBuf;
use std::sync::Arc;

use serde::de::DeserializeOwned;

use crate::error::{ItemEngineError, Result};
use crate::logger::LogSink;

/// Directory under the project dir where per-item state lives
const ITEMS_DIR: &str = ".workbench/items";

/// Shorten an item name into a filesystem-friendly directory name
pub fn shorten(name: &str) -> String {
    name.to_lowercase().replace(' ', "_")
}

/// Everything needed to construct one executable item
#[derive(Clone)]
pub struct ItemContext {
    /// Item name, unique within the project
    pub name: String,
    /// Root directory of the project
    pub project_dir: PathBuf,
    /// Item-specific configuration dictionary
    pub config: serde_json::Value,
    /// Sink for user-visible execution messages
    pub logger: Arc<dyn LogSink>,
}

impl ItemContext {
    /// Create a new context
    pub fn new(
        name: impl Into<String>,
        project_dir: impl Into<PathBuf>,
        config: serde_json::Value,
        logger: Arc<dyn LogSink>,
    ) -> Self {
        Self {
            name: name.into(),
            project_dir: project_dir.into(),
            config,
            logger,
        }
    }

    /// Per-item data directory: `<project_dir>/.workbench/items/<short-name>`
    pub fn data_dir(&self) -> PathBuf {
        self.project_dir.join(ITEMS_DIR).join(shorten(&self.name))
    }

    /// Per-item log directory: `<data_dir>/logs`
    pub fn logs_dir(&self) -> PathBuf {
        self.data_dir().join("logs")
    }

    /// Deserialize the configuration dictionary into a typed config struct
    pub fn parse_config<T: DeserializeOwned>(&self) -> Result<T> {
        serde_json::from_value(self.config.clone())
            .map_err(|e| ItemEngineError::invalid_config(&self.name, e.to_string()))
    }

    /// Look up a single configuration key, erroring if absent
    pub fn require_config_key(&self, key: &str) -> Result<&serde_json::Value> {
        self.config
            .get(key)
            .ok_or_else(|| ItemEngineError::MissingConfig(format!("{}.{}", self.name, key)))
    }
}

impl std::fmt::Debug for ItemContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ItemContext")
            .field("name", &self.name)
            .field("project_dir", &self.project_dir)
            .field("config", &self.config)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logger::NullLogSink;

    fn context(name: &str) -> ItemContext {
        ItemContext::new(
            name,
            "/projects/demo",
            serde_json::json!({"cancel_on_error": true}),
            Arc::new(NullLogSink),
        )
    }

    #[test]
    fn test_shorten() {
        assert_eq!(shorten("Combiner 1"), "combiner_1");
        assert_eq!(shorten("Data Store"), "data_store");
    }

    #[test]
    fn test_dir_derivation() {
        let ctx = context("Combiner 1");
        assert_eq!(
            ctx.data_dir(),
            PathBuf::from("/projects/demo/.workbench/items/combiner_1")
        );
        assert_eq!(
            ctx.logs_dir(),
            PathBuf::from("/projects/demo/.workbench/items/combiner_1/logs")
        );
        assert!(ctx.logs_dir().starts_with(&ctx.project_dir));
    }

    #[test]
    fn test_logs_dir_is_creatable() {
        let project_dir = tempfile::tempdir().unwrap();
        let ctx = ItemContext::new(
            "Combiner 1",
            project_dir.path(),
            serde_json::json!({}),
            Arc::new(NullLogSink),
        );

        std::fs::create_dir_all(ctx.logs_dir()).unwrap();
        assert!(ctx.logs_dir().is_dir());
    }

    #[test]
    fn test_parse_config() {
        #[derive(serde::Deserialize)]
        struct Config {
            cancel_on_error: bool,
        }

        let ctx = context("Combiner 1");
        let config: Config = ctx.parse_config().unwrap();
        assert!(config.cancel_on_error);
    }

    #[test]
    fn test_parse_config_rejects_wrong_shape() {
        #[derive(serde::Deserialize)]
        #[allow(dead_code)]
        struct Config {
            cancel_on_error: String,
        }

        let ctx = context("Combiner 1");
        let result: Result<Config> = ctx.parse_config();
        assert!(matches!(
            result,
            Err(ItemEngineError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn test_require_config_key() {
        let ctx = context("Combiner 1");
        assert!(ctx.require_config_key("cancel_on_error").is_ok());
        assert!(matches!(
            ctx.require_config_key("missing"),
            Err(ItemEngineError::MissingConfig(_))
        ));
    }
}
