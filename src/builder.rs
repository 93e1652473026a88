//! Full build: verify, clean, copy templates, enumerate, render, aggregate, write.

use anyhow::{Result, bail};
use log::{debug, info};
use std::sync::atomic::{AtomicBool, Ordering};

use crate::check::{plantuml_for, verify_environment};
use crate::engine::dist::{clean_dist, copy_templates};
use crate::engine::progress::render_bar;
use crate::icon::{Icon, IconConfig, SpriteEncoder};
use crate::pipeline::{
    JobContext, aggregate, build_file_list, check_for_render_failures, run_icon_jobs,
    write_outputs,
};
use crate::utils::config::ProjectPaths;
use crate::{BuildSummary, Opts};

/// Verify the environment, then build unless `opts.check_env`.
///
/// Returns `None` for a check-only run. `encoder: None` encodes sprites with the PlantUML jar from `opts`.
pub fn run(
    paths: &ProjectPaths,
    opts: &Opts,
    encoder: Option<&dyn SpriteEncoder>,
    cancel: &AtomicBool,
) -> Result<Option<BuildSummary>> {
    let config = verify_environment(paths, opts)?;
    if opts.check_env {
        info!("Prerequisites met, exiting");
        return Ok(None);
    }
    let plantuml = plantuml_for(paths, opts);
    let encoder = encoder.unwrap_or(&plantuml);
    build_icons(paths, opts, &config, encoder, cancel).map(Some)
}

/// Regenerate `dist/` and the aggregate files from scratch. Assumes a verified environment.
pub fn build_icons(
    paths: &ProjectPaths,
    opts: &Opts,
    config: &IconConfig,
    encoder: &dyn SpriteEncoder,
    cancel: &AtomicBool,
) -> Result<BuildSummary> {
    clean_dist(&paths.dist_dir)?;
    let templates_copied = copy_templates(&paths.source_dir, &paths.dist_dir)?;
    debug!("Copied {} templates", templates_copied);

    let source_files = build_file_list(&paths.official_dir)?;
    let icons: Vec<Icon> = source_files
        .iter()
        .map(|f| Icon::new(f, &paths.official_dir, config))
        .collect();
    info!("Building {} icons", icons.len());

    let ctx = JobContext {
        dist_dir: &paths.dist_dir,
        encoder,
        max_target_size: opts.max_target_size,
        cancel,
        bar: render_bar(opts.progress, icons.len()),
    };
    let failures = run_icon_jobs(&icons, &ctx, opts.num_threads)?;

    if cancel.load(Ordering::Relaxed) {
        bail!("Build cancelled by user; dist/ is incomplete");
    }
    check_for_render_failures(&failures, opts.strict, icons.len())?;

    let outputs = aggregate(&icons, &opts.release);
    write_outputs(paths, &outputs)?;

    Ok(BuildSummary {
        discovered: icons.len(),
        templates_copied,
        embedded: outputs.mermaid.info.total,
        render_failures: failures.len(),
    })
}
