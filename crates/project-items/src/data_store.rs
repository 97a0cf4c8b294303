//! Data Store item
//!
//! Holds a database URL and advertises it as a resource to both neighbors,
//! so upstream items can write into it and downstream items can read from
//! it. The forward pass itself does no work.

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use item_engine::{
    ExecutableItem, ExecutionDirection, ExecutionMessage, ItemCategory, ItemContext,
    ItemDescriptor, ItemFactory, ItemMetadata, LogSink, ProjectItemResource, Result,
};

/// The Data Store's type identifier string
pub const ITEM_TYPE: &str = "Data Store";

/// Configuration stored in the project file for one Data Store
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DataStoreConfig {
    /// Database connection string; empty means not set up yet
    #[serde(default)]
    pub url: String,
}

/// Executable counterpart of the Data Store item
pub struct DataStoreExecutable {
    name: String,
    url: String,
    logger: Arc<dyn LogSink>,
}

impl DataStoreExecutable {
    /// Create a new Data Store executable
    pub fn new(name: impl Into<String>, url: impl Into<String>, logger: Arc<dyn LogSink>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            logger,
        }
    }
}

#[async_trait]
impl ExecutableItem for DataStoreExecutable {
    fn name(&self) -> &str {
        &self.name
    }

    fn item_type(&self) -> &'static str {
        ITEM_TYPE
    }

    fn output_resources(&self, _direction: ExecutionDirection) -> Vec<ProjectItemResource> {
        if self.url.is_empty() {
            return Vec::new();
        }
        vec![ProjectItemResource::database(&self.url, &self.name)]
    }

    async fn execute_forward(&self, _resources: &[ProjectItemResource]) -> bool {
        if self.url.is_empty() {
            // Neighbors simply get nothing to consume; not a failure.
            self.logger.send(ExecutionMessage::warning(
                &self.name,
                format!("Data Store {} has no database URL set.", self.name),
            ));
        } else {
            log::debug!("Data Store {} serving {}", self.name, self.url);
        }
        true
    }
}

/// Factory wiring Data Stores into the host's item registry
pub struct DataStoreFactory;

impl ItemDescriptor for DataStoreFactory {
    fn descriptor() -> ItemMetadata {
        ItemMetadata {
            item_type: ITEM_TYPE.to_string(),
            category: ItemCategory::Store,
            label: "Data Store".to_string(),
            description: "Holds a database that neighbors read and write".to_string(),
            icon: ":/icons/item_icons/database.svg".to_string(),
            icon_color: "#cc33ff".to_string(),
            background_color: "#f9e6ff".to_string(),
        }
    }
}

impl ItemFactory for DataStoreFactory {
    fn metadata(&self) -> ItemMetadata {
        Self::descriptor()
    }

    fn make_executable(&self, context: &ItemContext) -> Result<Arc<dyn ExecutableItem>> {
        let config: DataStoreConfig = context.parse_config()?;
        Ok(Arc::new(DataStoreExecutable::new(
            context.name.clone(),
            config.url,
            context.logger.clone(),
        )))
    }
}

inventory::submit!(item_engine::DescriptorFn(DataStoreFactory::descriptor));
