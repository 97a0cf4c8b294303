//! Project Items
//!
//! Built-in project items for the pipeline item engine. Each item is a
//! node in the host's visual pipeline editor, described here by its
//! metadata (palette entry, icon resource path) and its executable
//! counterpart (the behavior driven during a pipeline run).
//!
//! # Items
//!
//! - **Data Store**: holds a database URL, advertised to both neighbors
//! - **Combiner**: merges upstream databases into downstream databases on
//!   a background task, with cancellable bridged execution
//! - **GDX Exporter**: routes upstream databases to a GDX export file
//! - **View**: displays upstream databases, produces nothing

pub mod combiner;
pub mod data_store;
pub mod gdx_exporter;
pub mod setup;
pub mod view;

pub use combiner::{CombinerConfig, CombinerExecutable, CombinerFactory};
pub use data_store::{DataStoreConfig, DataStoreExecutable, DataStoreFactory};
pub use gdx_exporter::{GdxExporterConfig, GdxExporterExecutable, GdxExporterFactory};
pub use setup::register_builtin_items;
pub use view::{ViewExecutable, ViewFactory};

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use item_engine::{
        CancelToken, ItemContext, ItemRegistry, LogSink, NullLogSink, Pipeline, PipelineOutcome,
        VecLogSink,
    };

    use crate::combiner::{FnMergeWorker, MergeSettings, MergeWorker, MergeWorkerFactory};

    #[test]
    fn test_inventory_collects_all_builtins() {
        let registry = ItemRegistry::with_builtin_metadata();
        let all = registry.all_metadata();

        assert_eq!(all.len(), 4, "Expected 4 built-in items");

        // Spot-check known types
        assert!(registry.has_item_type("Data Store"));
        assert!(registry.has_item_type("Combiner"));
        assert!(registry.has_item_type("GDX Exporter"));
        assert!(registry.has_item_type("View"));
    }

    /// Merge backend that records the settings of every worker it builds
    struct RecordingBackend {
        seen: Mutex<Vec<MergeSettings>>,
    }

    impl MergeWorkerFactory for RecordingBackend {
        fn make_worker(
            &self,
            settings: MergeSettings,
            _logger: Arc<dyn LogSink>,
        ) -> Box<dyn MergeWorker> {
            self.seen.lock().unwrap().push(settings);
            Box::new(FnMergeWorker(|_: &CancelToken| true))
        }
    }

    fn context(name: &str, config: serde_json::Value) -> ItemContext {
        ItemContext::new(name, "/projects/demo", config, Arc::new(NullLogSink))
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_store_combiner_store_pipeline() {
        let backend = Arc::new(RecordingBackend {
            seen: Mutex::new(Vec::new()),
        });
        let mut registry = ItemRegistry::new();
        crate::register_builtin_items(&mut registry, backend.clone());

        let sink = Arc::new(VecLogSink::new());
        let mut pipeline = Pipeline::new(sink);
        pipeline.push(
            registry
                .make_executable(
                    "Data Store",
                    &context("Store A", serde_json::json!({"url": "sqlite:///a.sqlite"})),
                )
                .unwrap(),
        );
        pipeline.push(
            registry
                .make_executable(
                    "Combiner",
                    &context("Combiner 1", serde_json::json!({"cancel_on_error": false})),
                )
                .unwrap(),
        );
        pipeline.push(
            registry
                .make_executable(
                    "Data Store",
                    &context("Store B", serde_json::json!({"url": "sqlite:///b.sqlite"})),
                )
                .unwrap(),
        );

        assert_eq!(pipeline.run().await, PipelineOutcome::Completed);

        let seen = backend.seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].from_urls, vec!["sqlite:///a.sqlite"]);
        assert_eq!(seen[0].to_urls, vec!["sqlite:///b.sqlite"]);
    }

    #[tokio::test]
    async fn test_combiner_without_downstream_store_is_noop() {
        let backend = Arc::new(RecordingBackend {
            seen: Mutex::new(Vec::new()),
        });
        let mut registry = ItemRegistry::new();
        crate::register_builtin_items(&mut registry, backend.clone());

        let mut pipeline = Pipeline::new(Arc::new(NullLogSink));
        pipeline.push(
            registry
                .make_executable(
                    "Data Store",
                    &context("Store A", serde_json::json!({"url": "sqlite:///a.sqlite"})),
                )
                .unwrap(),
        );
        pipeline.push(
            registry
                .make_executable("Combiner", &context("Combiner 1", serde_json::json!({})))
                .unwrap(),
        );

        // No downstream database: the combiner moves on without a worker
        assert_eq!(pipeline.run().await, PipelineOutcome::Completed);
        assert!(backend.seen.lock().unwrap().is_empty());
    }
}
