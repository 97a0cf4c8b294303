//! Registry setup for host applications
//!
//! Hosts call [`register_builtin_items`] at startup to wire the built-in
//! items into their [`ItemRegistry`]. The merge backend comes from the
//! host's database layer; everything else is self-contained.

use std::sync::Arc;

use item_engine::ItemRegistry;

use crate::combiner::{CombinerFactory, MergeWorkerFactory};
use crate::data_store::DataStoreFactory;
use crate::gdx_exporter::GdxExporterFactory;
use crate::view::ViewFactory;

/// Register the four built-in item factories
pub fn register_builtin_items(
    registry: &mut ItemRegistry,
    merge_backend: Arc<dyn MergeWorkerFactory>,
) {
    registry.register(Arc::new(DataStoreFactory));
    registry.register(Arc::new(CombinerFactory::new(merge_backend)));
    registry.register(Arc::new(GdxExporterFactory));
    registry.register(Arc::new(ViewFactory));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combiner::{FnMergeWorker, FnWorkerFactory, MergeSettings, MergeWorker};
    use item_engine::{CancelToken, ItemContext, LogSink, NullLogSink};

    #[test]
    fn test_registers_all_builtins() {
        let mut registry = ItemRegistry::new();
        let backend = Arc::new(FnWorkerFactory(
            |_settings: MergeSettings, _logger: Arc<dyn LogSink>| {
                Box::new(FnMergeWorker(|_: &CancelToken| true)) as Box<dyn MergeWorker>
            },
        ));
        register_builtin_items(&mut registry, backend);

        for item_type in ["Data Store", "Combiner", "GDX Exporter", "View"] {
            assert!(registry.has_item_type(item_type), "missing {}", item_type);
            let context = ItemContext::new(
                format!("{} 1", item_type),
                "/projects/demo",
                serde_json::json!({}),
                Arc::new(NullLogSink),
            );
            let executable = registry.make_executable(item_type, &context).unwrap();
            assert_eq!(executable.item_type(), item_type);
        }
    }
}
