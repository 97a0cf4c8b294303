//! Item Engine - engine-side contracts for pipeline project items
//!
//! This crate defines the seam between a workflow-authoring host application
//! and its plugin project items:
//!
//! - `ExecutableItem`: the run-time behavior of an item, driven in backward
//!   and forward passes over the pipeline
//! - `ProjectItemResource`: opaque handles (URL + kind) passed between
//!   adjacent items during a run
//! - `ItemRegistry` / `ItemFactory`: plugin discovery, mapping item type
//!   strings to metadata and constructors
//! - `LogSink`: classified user-visible execution messages
//! - `CancelToken`: cooperative cancellation for background work
//! - `Pipeline`: a linear executor that drives the passes and stop requests
//!
//! Item implementations live in the `project-items` crate; this crate is
//! what the host links against to load and run them.

pub mod cancel;
pub mod descriptor;
pub mod error;
pub mod executable;
pub mod logger;
pub mod pipeline;
pub mod project;
pub mod registry;
pub mod resource;

// Re-export key types
pub use cancel::CancelToken;
pub use descriptor::{DescriptorFn, ItemCategory, ItemDescriptor, ItemMetadata};
pub use error::{ItemEngineError, Result};
pub use executable::{ExecutableItem, ExecutionDirection};
pub use logger::{ExecutionMessage, LogCrateSink, LogSink, MessageKind, NullLogSink, VecLogSink};
pub use pipeline::{Pipeline, PipelineOutcome};
pub use project::{shorten, ItemContext};
pub use registry::{ItemFactory, ItemRegistry};
pub use resource::{database_urls, ProjectItemResource, ResourceKind};
