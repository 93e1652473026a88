//! CLI command handler: full build by default; --check-env only verifies prerequisites.

use anyhow::{Context, Result};
use log::{debug, info, warn};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::Opts;
use crate::builder::run;
use crate::engine::arg_parser::Cli;
use crate::types::ReleaseInfo;
use crate::utils::builder_toml::opts_from_file;
use crate::utils::config::ProjectPaths;
use crate::utils::{Colors, setup_logging};

/// Defaults, then `.icon-builder.toml`, then CLI flags. Sets up logging.
fn setup_opts(cli: &Cli, paths: &ProjectPaths) -> Result<Opts> {
    let (mut opts, file_warning) = opts_from_file(&paths.settings_file);

    if let Some(v) = cli.verbose {
        opts.verbose = v;
    }
    if let Some(v) = cli.progress {
        opts.progress = v;
    }
    if let Some(v) = cli.strict {
        opts.strict = v;
    }
    if cli.threads.is_some() {
        opts.num_threads = cli.threads;
    }
    if let Some(ref java) = cli.java {
        opts.java = java.clone();
    }
    if let Some(ref jar) = cli.plantuml_jar {
        opts.plantuml_jar = jar.clone();
    }
    if let Some(n) = cli.max_size {
        opts.max_target_size = n;
    }
    if let Some(ref date) = cli.release_date {
        let version = cli.release_version.as_deref().unwrap_or(&opts.release.version);
        opts.release = ReleaseInfo::from_date(version, date)?;
    } else if let Some(ref version) = cli.release_version {
        opts.release.version = version.clone();
    }
    opts.check_env = cli.check_env;

    setup_logging(opts.verbose);
    if let Some(e) = file_warning {
        warn!("{}: {} (ignored)", paths.settings_file.display(), e);
    }
    Ok(opts)
}

/// Run the build (or the environment check) for the scripts directory given on the command line.
pub fn handle_run(cli: &Cli) -> Result<()> {
    let paths = ProjectPaths::new(&cli.dir);
    let opts = setup_opts(cli, &paths)?;
    debug!(
        "{} CONFIG:{:#?}",
        env!("CARGO_PKG_NAME").to_uppercase(),
        opts
    );

    let cancel_requested = Arc::new(AtomicBool::new(false));
    if !opts.check_env {
        let cancel_requested_handler = Arc::clone(&cancel_requested);
        ctrlc::set_handler(move || {
            cancel_requested_handler.store(true, Ordering::Relaxed);
        })
        .context("set Ctrl+C handler")?;
    }

    if let Some(summary) = run(&paths, &opts, None, &cancel_requested)? {
        info!(
            "{} | {} | {}",
            Colors::colorize(Colors::OK, &format!("Icons: {}", summary.discovered)),
            Colors::colorize(Colors::OK, &format!("Embedded: {}", summary.embedded)),
            Colors::colorize(
                Colors::SKIPPED,
                &format!("Render failures: {}", summary.render_failures)
            )
        );
    }
    Ok(())
}
