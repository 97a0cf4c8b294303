//! Merge worker contract
//!
//! The actual database-merge algorithm lives in the host's database layer;
//! the Combiner only orchestrates it. Hosts provide a [`MergeWorkerFactory`]
//! when registering the Combiner, and the executable obtains exactly one
//! [`MergeWorker`] per forward pass.

use std::path::PathBuf;
use std::sync::Arc;

use item_engine::{CancelToken, LogSink};

/// Everything a merge worker is configured with
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeSettings {
    /// Source database URLs, in upstream order
    pub from_urls: Vec<String>,
    /// Destination database URLs, in downstream order
    pub to_urls: Vec<String>,
    /// Directory where the worker should write its logs
    pub logs_dir: PathBuf,
    /// If true, revert changes on error and move on
    pub cancel_on_error: bool,
}

/// One merge operation
///
/// `merge` runs on the blocking pool and owns the worker for its whole
/// lifetime. The token is advisory: a well-behaved backend polls it between
/// units of work and bails out early, but the bridge does not depend on
/// that for its own cancellation semantics.
pub trait MergeWorker: Send {
    /// Perform the merge, returning whether it succeeded
    fn merge(self: Box<Self>, token: &CancelToken) -> bool;
}

/// Factory handed to the Combiner at registration time
pub trait MergeWorkerFactory: Send + Sync {
    /// Build a worker for one forward pass
    fn make_worker(&self, settings: MergeSettings, logger: Arc<dyn LogSink>) -> Box<dyn MergeWorker>;
}

/// Closure-backed worker, for hosts and tests that don't want a named type
pub struct FnMergeWorker<F>(pub F)
where
    F: FnOnce(&CancelToken) -> bool + Send;

impl<F> MergeWorker for FnMergeWorker<F>
where
    F: FnOnce(&CancelToken) -> bool + Send,
{
    fn merge(self: Box<Self>, token: &CancelToken) -> bool {
        (self.0)(token)
    }
}

/// Closure-backed factory
pub struct FnWorkerFactory<F>(pub F)
where
    F: Fn(MergeSettings, Arc<dyn LogSink>) -> Box<dyn MergeWorker> + Send + Sync;

impl<F> MergeWorkerFactory for FnWorkerFactory<F>
where
    F: Fn(MergeSettings, Arc<dyn LogSink>) -> Box<dyn MergeWorker> + Send + Sync,
{
    fn make_worker(&self, settings: MergeSettings, logger: Arc<dyn LogSink>) -> Box<dyn MergeWorker> {
        (self.0)(settings, logger)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use item_engine::NullLogSink;

    #[test]
    fn test_fn_worker_runs_closure() {
        let worker = Box::new(FnMergeWorker(|token: &CancelToken| !token.is_cancelled()));
        let token = CancelToken::new();
        assert!(worker.merge(&token));
    }

    #[test]
    fn test_fn_worker_observes_cancellation() {
        let worker = Box::new(FnMergeWorker(|token: &CancelToken| !token.is_cancelled()));
        let token = CancelToken::new();
        token.cancel();
        assert!(!worker.merge(&token));
    }

    #[test]
    fn test_fn_factory_passes_settings() {
        let factory = FnWorkerFactory(|settings: MergeSettings, _logger| {
            Box::new(FnMergeWorker(move |_: &CancelToken| {
                settings.from_urls.len() == 1
            })) as Box<dyn MergeWorker>
        });

        let settings = MergeSettings {
            from_urls: vec!["sqlite:///a.sqlite".to_string()],
            to_urls: vec!["sqlite:///b.sqlite".to_string()],
            logs_dir: PathBuf::from("/tmp/logs"),
            cancel_on_error: false,
        };
        let worker = factory.make_worker(settings, Arc::new(NullLogSink));
        assert!(worker.merge(&CancelToken::new()));
    }
}
