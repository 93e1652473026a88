use clap::Parser;
use std::path::PathBuf;

struct DefaultArgs;

impl DefaultArgs {
    pub const DIR: &'static str = ".";
}

/// Build PlantUML includes, resized PNGs and JSON/Markdown manifests from the GCP icon sources.
#[derive(Clone, Parser)]
#[command(name = "icon-builder")]
#[command(about = "Generates GCP icons for PlantUML; use --check-env to only verify prerequisites.")]
pub struct Cli {
    /// Scripts directory (gcp-icons-for-plantuml/scripts). Default: current directory.
    #[arg(value_name = "DIR", default_value = DefaultArgs::DIR)]
    pub dir: PathBuf,

    /// Verify the environment and exit without touching dist/.
    #[arg(long)]
    pub check_env: bool,

    /// Verbose output.
    #[arg(long, short = 'v', num_args = 0..=1, default_missing_value = "true", value_parser = clap::value_parser!(bool))]
    pub verbose: Option<bool>,

    /// Show a progress bar while icons render.
    #[arg(long, short = 'p', num_args = 0..=1, default_missing_value = "true", value_parser = clap::value_parser!(bool))]
    pub progress: Option<bool>,

    /// Strict mode: abort before writing manifests when any icon failed to render.
    #[arg(long, num_args = 0..=1, default_missing_value = "true", value_parser = clap::value_parser!(bool))]
    pub strict: Option<bool>,

    /// Render worker count. Default: one per available processor.
    #[arg(long, short = 't', value_parser = clap::value_parser!(usize))]
    pub threads: Option<usize>,

    /// Command used to launch the JVM.
    #[arg(long)]
    pub java: Option<String>,

    /// PlantUML jar, relative to DIR unless absolute.
    #[arg(long)]
    pub plantuml_jar: Option<PathBuf>,

    /// Largest width/height of rendered PNGs.
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub max_size: Option<u32>,

    /// Release version written into the Mermaid manifest.
    #[arg(long)]
    pub release_version: Option<String>,

    /// Release date (YYYY-MM-DD) written into the Mermaid manifest as `lastModified`.
    #[arg(long)]
    pub release_date: Option<String>,
}
