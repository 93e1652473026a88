//! Application configuration constants.
//! Project layout, output names and tuning in one place.

use std::path::{Path, PathBuf};

// ---- Project layout (relative to the scripts directory) ----

/// Every path the builder reads or writes, resolved once from the scripts directory.
#[derive(Clone, Debug)]
pub struct ProjectPaths {
    pub scripts_dir: PathBuf,
    pub config_file: PathBuf,
    pub settings_file: PathBuf,
    pub source_dir: PathBuf,
    pub common_puml: PathBuf,
    pub official_dir: PathBuf,
    pub dist_dir: PathBuf,
    pub markdown_file: PathBuf,
    pub theme_file: PathBuf,
    pub mermaid_file: PathBuf,
}

impl ProjectPaths {
    /// Last two components the scripts directory must have.
    pub const EXPECTED_WORKDIR: [&'static str; 2] = ["gcp-icons-for-plantuml", "scripts"];

    pub const CONFIG_FILENAME: &'static str = "config.yml";
    pub const SETTINGS_FILENAME: &'static str = ".icon-builder.toml";
    pub const COMMON_PUML: &'static str = "GCPCommon.puml";
    pub const MARKDOWN_FILENAME: &'static str = "GCPSymbols.md";
    pub const THEME_FILENAME: &'static str = "gcp-icons-structurizr-theme.json";
    pub const MERMAID_FILENAME: &'static str = "gcp-icons-mermaid.json";

    pub fn new(scripts_dir: &Path) -> Self {
        let root = scripts_dir.join("..");
        let source_dir = root.join("source");
        let dist_dir = root.join("dist");
        ProjectPaths {
            scripts_dir: scripts_dir.to_path_buf(),
            config_file: scripts_dir.join(Self::CONFIG_FILENAME),
            settings_file: scripts_dir.join(Self::SETTINGS_FILENAME),
            common_puml: source_dir.join(Self::COMMON_PUML),
            official_dir: source_dir.join("official"),
            markdown_file: root.join(Self::MARKDOWN_FILENAME),
            theme_file: dist_dir.join(Self::THEME_FILENAME),
            mermaid_file: dist_dir.join(Self::MERMAID_FILENAME),
            source_dir,
            dist_dir,
        }
    }
}

// ---- File extensions ----

pub struct Extensions;

impl Extensions {
    /// Source images picked up by the enumerator.
    pub const IMAGE: &'static str = "png";
    /// Optional vector sibling of a source image.
    pub const VECTOR: &'static str = "svg";
    /// Pass-through templates and generated includes.
    pub const TEMPLATE: &'static str = "puml";
}

// ---- Rendering ----

pub struct RenderConsts;

impl RenderConsts {
    /// Largest width/height of a rendered variant.
    pub const MAX_TARGET_SIZE: u32 = 128;
    /// PlantUML sprite encoding (16 gray levels, compressed).
    pub const SPRITE_FORMAT: &'static str = "16z";
    pub const DEFAULT_JAVA: &'static str = "java";
    pub const DEFAULT_PLANTUML_JAR: &'static str = "plantuml.jar";
}

// ---- Aggregate outputs ----

/// Fixed labels written into the Markdown index and the JSON manifests.
pub struct OutputConsts;

impl OutputConsts {
    pub const MARKDOWN_TITLE: &'static str = "# GCP Symbols";
    pub const THEME_NAME: &'static str = "GCP Icons Structurizr theme";
    pub const THEME_STROKE: &'static str = "#4284F3";
    pub const MERMAID_PREFIX: &'static str = "gcp";
    pub const MERMAID_NAME: &'static str = "GCP Icons";
    /// Width/height used for raster bodies and as the manifest-wide default.
    pub const DEFAULT_ICON_SIZE: u32 = 64;
}

// ---- Release metadata defaults ----

pub struct ReleaseDefaults;

impl ReleaseDefaults {
    pub const VERSION: &'static str = "20.0";
    pub const DATE: &'static str = "2025-02-07";
    pub const DATE_FORMAT: &'static str = "%Y-%m-%d";
}

// ---- Worker threads ----

/// Render pool sizing. One worker per available processor unless overridden.
#[derive(Clone, Copy, Debug)]
pub struct WorkerThreadLimits {
    /// Available threads (from rayon); set by [`WorkerThreadLimits::current()`].
    pub all_threads: usize,
    pub floor: usize,
}

impl Default for WorkerThreadLimits {
    fn default() -> Self {
        Self {
            all_threads: 0, // use current() to set from rayon
            floor: Self::FLOOR_THREADS,
        }
    }
}

impl WorkerThreadLimits {
    pub const FLOOR_THREADS: usize = 1;

    /// Build limits with `all_threads` set from `rayon::current_num_threads()`.
    pub fn current() -> Self {
        Self {
            all_threads: rayon::current_num_threads(),
            ..Self::default()
        }
    }

    /// Pool size for `requested` threads (None = all available), never below the floor.
    pub fn pool_size(&self, requested: Option<usize>) -> usize {
        requested.unwrap_or(self.all_threads).max(self.floor)
    }
}
