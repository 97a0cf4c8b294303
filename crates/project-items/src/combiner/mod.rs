//! Combiner item
//!
//! Merges the contents of upstream databases into the databases advertised
//! by downstream items. The merge itself is performed by a host-provided
//! backend (see [`worker`]); this module owns the configuration, the
//! factory, and the execution bridge in [`executable`].

pub mod executable;
pub mod worker;

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use item_engine::{
    ExecutableItem, ItemCategory, ItemContext, ItemDescriptor, ItemFactory, ItemMetadata, Result,
};

pub use executable::CombinerExecutable;
pub use worker::{FnMergeWorker, FnWorkerFactory, MergeSettings, MergeWorker, MergeWorkerFactory};

/// The Combiner's type identifier string
pub const ITEM_TYPE: &str = "Combiner";

/// Configuration stored in the project file for one Combiner
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CombinerConfig {
    /// If true, revert changes on error and move on
    #[serde(default)]
    pub cancel_on_error: bool,
}

/// Factory wiring Combiners into the host's item registry
///
/// Carries the merge backend injected by the host's database layer; every
/// executable built by this factory shares it.
pub struct CombinerFactory {
    workers: Arc<dyn MergeWorkerFactory>,
}

impl CombinerFactory {
    /// Create a factory backed by the given merge implementation
    pub fn new(workers: Arc<dyn MergeWorkerFactory>) -> Self {
        Self { workers }
    }
}

impl ItemDescriptor for CombinerFactory {
    fn descriptor() -> ItemMetadata {
        ItemMetadata {
            item_type: ITEM_TYPE.to_string(),
            category: ItemCategory::Manipulator,
            label: "Combiner".to_string(),
            description: "Merges upstream databases into downstream databases".to_string(),
            icon: ":/icons/item_icons/object-group.svg".to_string(),
            icon_color: "#990000".to_string(),
            background_color: "#ffe6e6".to_string(),
        }
    }
}

impl ItemFactory for CombinerFactory {
    fn metadata(&self) -> ItemMetadata {
        Self::descriptor()
    }

    fn make_executable(&self, context: &ItemContext) -> Result<Arc<dyn ExecutableItem>> {
        let config: CombinerConfig = context.parse_config()?;
        Ok(Arc::new(CombinerExecutable::new(
            context.name.clone(),
            context.logs_dir(),
            config.cancel_on_error,
            context.logger.clone(),
            self.workers.clone(),
        )))
    }
}

inventory::submit!(item_engine::DescriptorFn(CombinerFactory::descriptor));
