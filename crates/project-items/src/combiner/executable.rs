//! Combiner's executable item
//!
//! Runs a database merge on the blocking pool while the pipeline task
//! waits, and propagates success, failure or cancellation back. The bridge
//! is a oneshot-channel hand-off raced against a [`CancelToken`]: the
//! worker reports its success flag through the channel when it finishes,
//! and an external stop request cancels the token, which wins the race and
//! turns the pass into a failure regardless of worker state.

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

use item_engine::{
    database_urls, CancelToken, ExecutableItem, ExecutionMessage, LogSink, ProjectItemResource,
};

use super::worker::{MergeSettings, MergeWorkerFactory};
use super::ITEM_TYPE;

/// Executable counterpart of the Combiner item
pub struct CombinerExecutable {
    name: String,
    logs_dir: PathBuf,
    cancel_on_error: bool,
    logger: Arc<dyn LogSink>,
    workers: Arc<dyn MergeWorkerFactory>,
    state: Mutex<RunState>,
}

/// Per-run state; one merge at most is in flight at a time
#[derive(Default)]
struct RunState {
    /// Resources stored by the backward pass
    downstream: Vec<ProjectItemResource>,
    /// The in-flight merge, if any
    active: Option<ActiveMerge>,
    /// Success flag recorded from the worker's completion message
    merge_succeeded: bool,
}

struct ActiveMerge {
    token: CancelToken,
    join: Option<JoinHandle<bool>>,
}

impl CombinerExecutable {
    /// Create a new Combiner executable
    pub fn new(
        name: impl Into<String>,
        logs_dir: PathBuf,
        cancel_on_error: bool,
        logger: Arc<dyn LogSink>,
        workers: Arc<dyn MergeWorkerFactory>,
    ) -> Self {
        Self {
            name: name.into(),
            logs_dir,
            cancel_on_error,
            logger,
            workers,
            state: Mutex::new(RunState::default()),
        }
    }

    /// Join the active merge, if any
    ///
    /// Idempotent; runs both when a merge completes and before starting a
    /// new one, so a leftover handle from a previous pass never dangles.
    async fn finish_active(&self) {
        let active = self.state.lock().unwrap().active.take();
        if let Some(mut run) = active {
            if let Some(join) = run.join.take() {
                let _ = join.await;
            }
        }
    }
}

#[async_trait]
impl ExecutableItem for CombinerExecutable {
    fn name(&self) -> &str {
        &self.name
    }

    fn item_type(&self) -> &'static str {
        ITEM_TYPE
    }

    async fn execute_backward(&self, resources: &[ProjectItemResource]) -> bool {
        self.state.lock().unwrap().downstream = resources.to_vec();
        true
    }

    async fn execute_forward(&self, resources: &[ProjectItemResource]) -> bool {
        let from_urls = database_urls(resources);
        let to_urls = {
            let state = self.state.lock().unwrap();
            database_urls(&state.downstream)
        };
        if from_urls.is_empty() {
            self.logger.send(ExecutionMessage::warning(
                &self.name,
                "No input database(s) available. Moving on...",
            ));
            return true;
        }
        if to_urls.is_empty() {
            self.logger.send(ExecutionMessage::warning(
                &self.name,
                "No output database available. Moving on...",
            ));
            return true;
        }

        self.finish_active().await;

        let token = CancelToken::new();
        {
            // The token must be reachable from stop_execution before the
            // worker exists; otherwise a stop landing while the worker is
            // being built would find nothing to cancel and the merge would
            // run to completion anyway.
            let mut state = self.state.lock().unwrap();
            state.merge_succeeded = false;
            state.active = Some(ActiveMerge {
                token: token.clone(),
                join: None,
            });
        }

        let settings = MergeSettings {
            from_urls,
            to_urls,
            logs_dir: self.logs_dir.clone(),
            cancel_on_error: self.cancel_on_error,
        };
        let worker = self.workers.make_worker(settings, self.logger.clone());

        let (done_tx, done_rx) = oneshot::channel();
        let worker_token = token.clone();
        let stopped_early = {
            let mut state = self.state.lock().unwrap();
            match state.active.as_mut() {
                Some(run) => {
                    run.join = Some(tokio::task::spawn_blocking(move || {
                        let succeeded = worker.merge(&worker_token);
                        let _ = done_tx.send(succeeded);
                        succeeded
                    }));
                    false
                }
                // stop_execution took the run while the worker was being
                // built; the merge never starts.
                None => true,
            }
        };
        if stopped_early {
            self.logger.send(ExecutionMessage::error(
                &self.name,
                format!("Combiner {} stopped", self.name),
            ));
            return false;
        }

        tokio::select! {
            biased;
            _ = token.cancelled() => {
                // Stop request won the race. The worker may still be
                // running; stop_execution owns joining it.
                self.logger.send(ExecutionMessage::error(
                    &self.name,
                    format!("Combiner {} stopped", self.name),
                ));
                false
            }
            finished = done_rx => {
                // Record the flag before tearing down, so the completion
                // handling is ordered ahead of the wait resolving.
                let succeeded = finished.unwrap_or(false);
                self.state.lock().unwrap().merge_succeeded = succeeded;
                self.finish_active().await;
                self.logger.send(ExecutionMessage::success(
                    &self.name,
                    format!("Executing Combiner {} finished", self.name),
                ));
                self.state.lock().unwrap().merge_succeeded
            }
        }
    }

    async fn stop_execution(&self) {
        let active = self.state.lock().unwrap().active.take();
        if let Some(mut run) = active {
            run.token.cancel();
            if let Some(join) = run.join.take() {
                // Stop is synchronous: the blocking task is joined before
                // this returns, so no merge thread outlives the stop.
                let _ = join.await;
            }
        }
    }
}
