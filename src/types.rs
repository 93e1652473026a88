//! Public and internal types for the icon-builder API and pipeline.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use std::fmt;
use std::path::PathBuf;

use crate::utils::config::{ReleaseDefaults, RenderConsts};

/// Release metadata injected into the Mermaid manifest.
///
/// `last_modified` is epoch seconds for the release date at 00:00 UTC. It never comes from the
/// clock, so two runs over the same inputs produce identical manifests.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReleaseInfo {
    pub version: String,
    pub last_modified: i64,
}

impl ReleaseInfo {
    /// Build from a version string and a `YYYY-MM-DD` date.
    pub fn from_date(version: &str, date: &str) -> Result<Self> {
        let day = NaiveDate::parse_from_str(date, ReleaseDefaults::DATE_FORMAT)
            .with_context(|| format!("invalid release date {date:?} (expected YYYY-MM-DD)"))?;
        let midnight = day
            .and_hms_opt(0, 0, 0)
            .context("release date has no midnight")?;
        Ok(ReleaseInfo {
            version: version.to_string(),
            last_modified: midnight.and_utc().timestamp(),
        })
    }
}

impl Default for ReleaseInfo {
    fn default() -> Self {
        // 2025-02-07T00:00:00Z
        ReleaseInfo {
            version: ReleaseDefaults::VERSION.to_string(),
            last_modified: 1_738_886_400,
        }
    }
}

/// Full options (CLI and lib).
#[derive(Clone, Debug)]
pub struct Opts {
    /// Render pool size. When None, one worker per available processor.
    pub num_threads: Option<usize>,
    /// Debug-level logging.
    pub verbose: bool,
    /// Show a progress bar while render jobs run.
    pub progress: bool,
    /// Strict mode: abort before aggregation when any render job failed.
    pub strict: bool,
    /// Verify the environment and stop.
    pub check_env: bool,
    /// Command used to launch the JVM.
    pub java: String,
    /// PlantUML jar, relative to the scripts directory unless absolute.
    pub plantuml_jar: PathBuf,
    /// Largest width/height of a rendered variant.
    pub max_target_size: u32,
    pub release: ReleaseInfo,
}

impl Default for Opts {
    fn default() -> Self {
        Opts {
            num_threads: None,
            verbose: false,
            progress: false,
            strict: false,
            check_env: false,
            java: RenderConsts::DEFAULT_JAVA.to_string(),
            plantuml_jar: PathBuf::from(RenderConsts::DEFAULT_PLANTUML_JAR),
            max_target_size: RenderConsts::MAX_TARGET_SIZE,
            release: ReleaseInfo::default(),
        }
    }
}

/// A render job that did not complete, with the icon it was working on.
#[derive(Clone, Debug)]
pub struct JobFailure {
    pub category: String,
    pub target: String,
    pub source: PathBuf,
    pub error: String,
}

impl fmt::Display for JobFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{} ({}): {}",
            self.category,
            self.target,
            self.source.display(),
            self.error
        )
    }
}

/// Counts reported at the end of a build.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BuildSummary {
    /// Source images discovered.
    pub discovered: usize,
    /// Templates copied from `source/` into `dist/`.
    pub templates_copied: usize,
    /// Icons embedded into the Mermaid manifest.
    pub embedded: usize,
    /// Render jobs that failed (non-strict runs only; strict runs return an error).
    pub render_failures: usize,
}
