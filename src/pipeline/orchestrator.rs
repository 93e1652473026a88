use anyhow::{Context, Result};
use log::debug;
use rayon::prelude::*;
use std::collections::BTreeSet;
use std::path::Path;

use crate::engine::parallel::build_render_pool;
use crate::engine::progress::finish_progress_bar;
use crate::icon::Icon;
use crate::types::JobFailure;

use super::context::JobContext;
use super::worker::render_icon;

/// Distinct categories of `icons`, sorted.
pub fn distinct_categories(icons: &[Icon]) -> Vec<&str> {
    icons
        .iter()
        .map(|i| i.category.as_str())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Create `<dist>/<category>` for every category up front. Existing directories are fine.
pub fn create_category_dirs(icons: &[Icon], dist: &Path) -> Result<usize> {
    let categories = distinct_categories(icons);
    for category in &categories {
        let dir = dist.join(category);
        std::fs::create_dir_all(&dir).with_context(|| format!("create {}", dir.display()))?;
    }
    Ok(categories.len())
}

/// Main orchestrator: create category directories, then run one render job per icon on a
/// dedicated pool of `num_threads` workers (None = one per processor).
///
/// Returns only after every job has finished. Failed jobs come back in icon order.
pub fn run_icon_jobs(
    icons: &[Icon],
    ctx: &JobContext<'_>,
    num_threads: Option<usize>,
) -> Result<Vec<JobFailure>> {
    let n_categories = create_category_dirs(icons, ctx.dist_dir)?;
    debug!(
        "Created {} category directories under {}",
        n_categories,
        ctx.dist_dir.display()
    );

    let pool = build_render_pool(num_threads)?;
    let failures: Vec<JobFailure> = pool.install(|| {
        icons
            .par_iter()
            .filter_map(|icon| render_icon(icon, ctx).err())
            .collect()
    });

    if let Some(bar) = &ctx.bar {
        finish_progress_bar(bar);
    }
    debug!(
        "main: all {} render jobs done, {} failed",
        icons.len(),
        failures.len()
    );
    Ok(failures)
}
