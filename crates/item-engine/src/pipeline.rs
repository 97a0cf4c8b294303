//! Linear pipeline executor
//!
//! Drives the two passes over a pipeline's executable items. The backward
//! pass runs in reverse order so every item sees what its downstream
//! neighbors advertise; the forward pass then runs in pipeline order,
//! handing each item the resources advertised by everything upstream of it.
//!
//! A pipeline can be stopped from another task; the stop is observed
//! between items and forwarded to every item's `stop_execution`.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use uuid::Uuid;

use crate::executable::{ExecutableItem, ExecutionDirection};
use crate::logger::{ExecutionMessage, LogSink};
use crate::resource::ProjectItemResource;

/// Terminal outcome of one pipeline run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PipelineOutcome {
    /// Every item completed and reported success
    Completed,
    /// An item reported failure; the run ended at that item
    Failed {
        /// Name of the item that failed
        item: String,
    },
    /// The run was stopped from outside
    Stopped,
}

/// A pipeline of executable items in execution order
pub struct Pipeline {
    items: Vec<Arc<dyn ExecutableItem>>,
    logger: Arc<dyn LogSink>,
    stopped: AtomicBool,
}

impl Pipeline {
    /// Create an empty pipeline reporting to the given sink
    pub fn new(logger: Arc<dyn LogSink>) -> Self {
        Self {
            items: Vec::new(),
            logger,
            stopped: AtomicBool::new(false),
        }
    }

    /// Append an item to the end of the pipeline
    pub fn push(&mut self, item: Arc<dyn ExecutableItem>) {
        self.items.push(item);
    }

    /// Number of items in the pipeline
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the pipeline has no items
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Resources advertised toward item `index` for the given direction
    ///
    /// Backward: everything downstream of the item. Forward: everything
    /// upstream of it. Lists are cloned so items never share resource
    /// storage.
    fn resources_for(&self, index: usize, direction: ExecutionDirection) -> Vec<ProjectItemResource> {
        let neighbors: &[Arc<dyn ExecutableItem>] = match direction {
            ExecutionDirection::Backward => &self.items[index + 1..],
            ExecutionDirection::Forward => &self.items[..index],
        };
        neighbors
            .iter()
            .flat_map(|item| item.output_resources(direction))
            .collect()
    }

    /// Run the pipeline: backward pass, then forward pass
    ///
    /// Returns at the first item that reports failure. Items are expected
    /// to have logged their own terminal message by then.
    pub async fn run(&self) -> PipelineOutcome {
        let execution_id = Uuid::new_v4();
        log::info!(
            "pipeline run {} started ({} items)",
            execution_id,
            self.items.len()
        );

        // Backward pass, in reverse order
        for index in (0..self.items.len()).rev() {
            if self.stopped.load(Ordering::SeqCst) {
                return self.finish_stopped(execution_id);
            }
            let item = &self.items[index];
            let resources = self.resources_for(index, ExecutionDirection::Backward);
            if !item.execute_backward(&resources).await {
                log::warn!(
                    "pipeline run {}: backward pass failed at {}",
                    execution_id,
                    item.name()
                );
                return PipelineOutcome::Failed {
                    item: item.name().to_string(),
                };
            }
        }

        // Forward pass, in pipeline order
        for (index, item) in self.items.iter().enumerate() {
            if self.stopped.load(Ordering::SeqCst) {
                return self.finish_stopped(execution_id);
            }
            let resources = self.resources_for(index, ExecutionDirection::Forward);
            log::debug!(
                "pipeline run {}: executing {} with {} upstream resource(s)",
                execution_id,
                item.name(),
                resources.len()
            );
            if !item.execute_forward(&resources).await {
                // A stop that lands mid-item surfaces as that item failing;
                // report the run as stopped rather than failed.
                if self.stopped.load(Ordering::SeqCst) {
                    return self.finish_stopped(execution_id);
                }
                return PipelineOutcome::Failed {
                    item: item.name().to_string(),
                };
            }
        }

        log::info!("pipeline run {} completed", execution_id);
        PipelineOutcome::Completed
    }

    fn finish_stopped(&self, execution_id: Uuid) -> PipelineOutcome {
        log::info!("pipeline run {} stopped", execution_id);
        self.logger
            .send(ExecutionMessage::error("pipeline", "Execution stopped"));
        PipelineOutcome::Stopped
    }

    /// Stop the run: flag the pipeline and stop every item
    ///
    /// Safe to call when nothing is running; items' `stop_execution` is
    /// required to be idempotent. Background work is joined before this
    /// returns.
    pub async fn stop(&self) {
        self.stopped.store(true, Ordering::SeqCst);
        for item in &self.items {
            item.stop_execution().await;
        }
    }

    /// Reset the stop flag so the pipeline can be run again
    pub fn reset(&self) {
        self.stopped.store(false, Ordering::SeqCst);
    }
}
