//! Async runtime placeholders.

use tokio::runtime::{Handle, RuntimeFlavor};

use super::keys;
use super::value::PlaceholderSetBuilder;

/// Snapshot of the tokio runtime serving the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuntimeStats {
    pub flavor: &'static str,
    pub workers: usize,
    pub alive_tasks: usize,
}

impl RuntimeStats {
    /// Stats of the runtime the caller is running on, if any
    pub fn current() -> Option<Self> {
        let handle = Handle::try_current().ok()?;
        let flavor = match handle.runtime_flavor() {
            RuntimeFlavor::CurrentThread => "current_thread",
            RuntimeFlavor::MultiThread => "multi_thread",
            _ => "other",
        };
        let metrics = handle.metrics();
        Some(Self {
            flavor,
            workers: metrics.num_workers(),
            alive_tasks: metrics.num_alive_tasks(),
        })
    }
}

/// Outside a runtime the keys are omitted.
pub(crate) fn set_runtime_placeholders(
    out: &mut PlaceholderSetBuilder,
    stats: Option<RuntimeStats>,
) {
    let Some(stats) = stats else {
        return;
    };
    out.set(keys::RUNTIME_FLAVOR, stats.flavor);
    out.set(keys::RUNTIME_WORKERS, stats.workers as i64);
    out.set(keys::RUNTIME_ALIVE_TASKS, stats.alive_tasks as i64);
}
