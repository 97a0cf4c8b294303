//! GDX Exporter item
//!
//! Routes upstream databases to a GDX export file under the item's data
//! directory and advertises that file forward. The GDX encoding itself is
//! performed by the host's database layer when the file resource is
//! consumed; this item owns resource routing and reporting only.

use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use item_engine::{
    database_urls, ExecutableItem, ExecutionDirection, ExecutionMessage, ItemCategory,
    ItemContext, ItemDescriptor, ItemFactory, ItemMetadata, LogSink, ProjectItemResource, Result,
};

/// The GDX Exporter's type identifier string
pub const ITEM_TYPE: &str = "GDX Exporter";

fn default_file_name() -> String {
    "output.gdx".to_string()
}

/// Configuration stored in the project file for one GDX Exporter
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GdxExporterConfig {
    /// Name of the export file under the item's data directory
    #[serde(default = "default_file_name")]
    pub file_name: String,
}

impl Default for GdxExporterConfig {
    fn default() -> Self {
        Self {
            file_name: default_file_name(),
        }
    }
}

/// Executable counterpart of the GDX Exporter item
pub struct GdxExporterExecutable {
    name: String,
    out_path: PathBuf,
    logger: Arc<dyn LogSink>,
}

impl GdxExporterExecutable {
    /// Create a new GDX Exporter executable
    pub fn new(name: impl Into<String>, out_path: PathBuf, logger: Arc<dyn LogSink>) -> Self {
        Self {
            name: name.into(),
            out_path,
            logger,
        }
    }
}

#[async_trait]
impl ExecutableItem for GdxExporterExecutable {
    fn name(&self) -> &str {
        &self.name
    }

    fn item_type(&self) -> &'static str {
        ITEM_TYPE
    }

    fn output_resources(&self, direction: ExecutionDirection) -> Vec<ProjectItemResource> {
        match direction {
            ExecutionDirection::Forward => vec![ProjectItemResource::file(
                self.out_path.to_string_lossy(),
                &self.name,
            )],
            ExecutionDirection::Backward => Vec::new(),
        }
    }

    async fn execute_forward(&self, resources: &[ProjectItemResource]) -> bool {
        let urls = database_urls(resources);
        if urls.is_empty() {
            self.logger.send(ExecutionMessage::warning(
                &self.name,
                "No database(s) to export. Moving on...",
            ));
            return true;
        }
        log::debug!(
            "GDX Exporter {} routing {} database(s) to {}",
            self.name,
            urls.len(),
            self.out_path.display()
        );
        self.logger.send(ExecutionMessage::success(
            &self.name,
            format!(
                "Exporting {} database(s) to {}",
                urls.len(),
                self.out_path.display()
            ),
        ));
        true
    }
}

/// Factory wiring GDX Exporters into the host's item registry
pub struct GdxExporterFactory;

impl ItemDescriptor for GdxExporterFactory {
    fn descriptor() -> ItemMetadata {
        ItemMetadata {
            item_type: ITEM_TYPE.to_string(),
            category: ItemCategory::Exporter,
            label: "GDX Exporter".to_string(),
            description: "Exports upstream databases to a GDX file".to_string(),
            icon: ":/icons/item_icons/database-export.svg".to_string(),
            icon_color: "#00cccc".to_string(),
            background_color: "#e6ffff".to_string(),
        }
    }
}

impl ItemFactory for GdxExporterFactory {
    fn metadata(&self) -> ItemMetadata {
        Self::descriptor()
    }

    fn make_executable(&self, context: &ItemContext) -> Result<Arc<dyn ExecutableItem>> {
        let config: GdxExporterConfig = context.parse_config()?;
        Ok(Arc::new(GdxExporterExecutable::new(
            context.name.clone(),
            context.data_dir().join(config.file_name),
            context.logger.clone(),
        )))
    }
}

inventory::submit!(item_engine::DescriptorFn(GdxExporterFactory::descriptor));
