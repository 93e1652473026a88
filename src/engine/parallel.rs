//! Shared helpers for parallel processing.

use anyhow::{Context, Result};
use log::debug;
use rayon::{ThreadPool, ThreadPoolBuilder};

use crate::utils::config::WorkerThreadLimits;

/// Dedicated render pool: `requested` workers, or one per available processor.
pub fn build_render_pool(requested: Option<usize>) -> Result<ThreadPool> {
    let num_threads = WorkerThreadLimits::current().pool_size(requested);
    debug!("Rendering with {} worker threads", num_threads);
    ThreadPoolBuilder::new()
        .num_threads(num_threads)
        .thread_name(|i| format!("{}-render-{i}", env!("CARGO_PKG_NAME")))
        .build()
        .context("build render thread pool")
}
