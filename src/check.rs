//! Environment verification: working directory, configuration, required sources, toolchain.

use anyhow::{Context, Result, bail};
use log::{debug, warn};
use std::path::Path;

use crate::Opts;
use crate::icon::{IconConfig, PlantUml, load_icon_config};
use crate::utils::config::ProjectPaths;

/// Check everything the build needs and return the loaded icon configuration.
///
/// Any failure is returned as an error; the caller ends the run.
pub fn verify_environment(paths: &ProjectPaths, opts: &Opts) -> Result<IconConfig> {
    check_workdir(&paths.scripts_dir)?;

    let config = load_icon_config(&paths.config_file)
        .with_context(|| format!("check {} file", ProjectPaths::CONFIG_FILENAME))?;
    debug!(
        "Loaded {} ({} categories)",
        paths.config_file.display(),
        config.categories.len()
    );

    if !paths.common_puml.exists() {
        bail!("File {} not found in source/", ProjectPaths::COMMON_PUML);
    }
    if !paths.official_dir.exists() {
        bail!("source/official must contain folders of GCP icons");
    }

    check_plantuml(&plantuml_for(paths, opts))?;
    Ok(config)
}

/// The scripts directory must end with [`ProjectPaths::EXPECTED_WORKDIR`].
pub fn check_workdir(scripts_dir: &Path) -> Result<()> {
    let abs = scripts_dir
        .canonicalize()
        .with_context(|| format!("canonicalize {}", scripts_dir.display()))?;
    let tail: Vec<String> = abs
        .components()
        .rev()
        .take(2)
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();
    let expected = ProjectPaths::EXPECTED_WORKDIR;
    if tail.len() != 2 || tail[1] != expected[0] || tail[0] != expected[1] {
        bail!(
            "Working directory must be {}/{} (got {})",
            expected[0],
            expected[1],
            abs.display()
        );
    }
    Ok(())
}

/// Launch `-version`. Only a launch failure is fatal; a non-zero exit is reported and tolerated.
pub fn check_plantuml(plantuml: &PlantUml) -> Result<()> {
    let output = plantuml.version().with_context(|| {
        format!(
            "Error executing plantuml jar file ({} -jar {})",
            plantuml.java,
            plantuml.jar.display()
        )
    })?;
    if output.status.success() {
        let stdout = String::from_utf8_lossy(&output.stdout);
        debug!("{}", stdout.lines().next().unwrap_or_default());
    } else {
        warn!(
            "{} -jar {} -version exited with {}; sprite encoding may fail",
            plantuml.java,
            plantuml.jar.display(),
            output.status
        );
    }
    Ok(())
}

/// PlantUML launcher for `opts`; a relative jar path resolves against the scripts directory.
pub fn plantuml_for(paths: &ProjectPaths, opts: &Opts) -> PlantUml {
    PlantUml::new(&opts.java, &paths.scripts_dir.join(&opts.plantuml_jar))
}
