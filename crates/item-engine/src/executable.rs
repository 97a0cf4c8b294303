//! The executable counterpart of a pipeline item
//!
//! Each project item on the canvas has an executable counterpart that
//! performs its work during a pipeline run. The host drives two passes over
//! the pipeline: a backward pass (downstream items advertise resources to
//! their upstream neighbors) and a forward pass (upstream resources flow
//! down and each item does its actual work).

use async_trait::async_trait;

use crate::resource::ProjectItemResource;

/// Direction of a pipeline pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExecutionDirection {
    /// Resources flow from upstream items toward this item
    Forward,
    /// Resources flow from downstream items toward this item
    Backward,
}

/// Run-time behavior of a pipeline item
///
/// Pass methods return `bool` rather than `Result`: the contract is "may the
/// pipeline continue", and diagnostics are routed through the item's
/// [`LogSink`](crate::LogSink) instead of error values. An executable never
/// fails construction of the pipeline itself.
#[async_trait]
pub trait ExecutableItem: Send + Sync {
    /// The item's name, unique within a project
    fn name(&self) -> &str;

    /// The item's type identifier string (e.g. "Combiner")
    fn item_type(&self) -> &'static str;

    /// Resources this item advertises to its neighbors in the given direction
    fn output_resources(&self, direction: ExecutionDirection) -> Vec<ProjectItemResource> {
        let _ = direction;
        Vec::new()
    }

    /// Backward pass: receive resources advertised by downstream items
    ///
    /// The default implementation ignores them and succeeds.
    async fn execute_backward(&self, resources: &[ProjectItemResource]) -> bool {
        let _ = resources;
        true
    }

    /// Forward pass: receive resources advertised by upstream items and do
    /// this item's work
    ///
    /// The default implementation is a no-op that succeeds.
    async fn execute_forward(&self, resources: &[ProjectItemResource]) -> bool {
        let _ = resources;
        true
    }

    /// Stop any in-flight execution
    ///
    /// Must be idempotent and safe to call when nothing is running. Any
    /// background work owned by this item is joined before this returns.
    async fn stop_execution(&self) {}
}
