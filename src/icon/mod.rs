//! One source image: its derived names and the files it renders.

pub mod config;
pub mod naming;
pub mod puml;
pub mod raster;

pub use config::{IconConfig, IconRule, load_icon_config};
pub use naming::{make_name, trim_suffix};
pub use puml::{PlantUml, SpriteEncoder, puml_template, rename_sprite};
pub use raster::{ImageVariant, render_variant};

use anyhow::{Context, Result};
use std::path::{Component, Path, PathBuf};

use crate::engine::tools::path_relative_to;
use crate::utils::config::Extensions;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Icon {
    /// Source image path.
    pub filename: PathBuf,
    /// Source file stem.
    pub source_name: String,
    pub category: String,
    pub target: String,
    /// PlantUML entity color.
    pub color: String,
}

impl Icon {
    /// Derive names for `filename` found under `official` using `config`.
    pub fn new(filename: &Path, official: &Path, config: &IconConfig) -> Self {
        let source_name = filename
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        let file_name = filename
            .file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        let folder = category_folder(filename, official);

        let category = config
            .category_target(&folder)
            .map(str::to_string)
            .unwrap_or_else(|| make_name(&folder));
        let rule = config.rule_for(&folder, &source_name, &file_name);
        let target = match rule {
            Some(r) => r.target.clone(),
            None => make_name(trim_suffix(&source_name, &config.defaults.trim_suffixes)),
        };
        let color = config.color_for(&folder, rule).to_string();

        Icon {
            filename: filename.to_path_buf(),
            source_name,
            category,
            target,
            color,
        }
    }

    /// `<dir>/<target>.png`
    pub fn image_path(&self, dir: &Path) -> PathBuf {
        dir.join(format!("{}.{}", self.target, Extensions::IMAGE))
    }

    /// `<dir>/<target>.puml`
    pub fn puml_path(&self, dir: &Path) -> PathBuf {
        dir.join(format!("{}.{}", self.target, Extensions::TEMPLATE))
    }

    /// Vector sibling of the source image (same stem, `.svg`), whether or not it exists.
    pub fn vector_sibling(&self) -> PathBuf {
        self.filename.with_extension(Extensions::VECTOR)
    }

    /// Render one PNG variant into `dir`. Variants share `<target>.png`; the last one rendered wins.
    pub fn generate_image(&self, dir: &Path, variant: ImageVariant) -> Result<PathBuf> {
        let dest = self.image_path(dir);
        render_variant(&self.filename, &dest, variant)?;
        Ok(dest)
    }

    /// Write `<target>.puml` into `dir`, encoding the sprite from the `<target>.png` already there.
    pub fn generate_puml(&self, dir: &Path, encoder: &dyn SpriteEncoder) -> Result<PathBuf> {
        let png = self.image_path(dir);
        let sprite = encoder
            .encode_sprite(&png, &self.target)
            .with_context(|| format!("encode sprite for {}", self.target))?;
        let dest = self.puml_path(dir);
        let body = puml_template(&self.category, &self.target, &self.color, &sprite);
        std::fs::write(&dest, body).with_context(|| format!("write {}", dest.display()))?;
        Ok(dest)
    }
}

/// First directory under `official` holding `filename`; [`naming::ROOT_CATEGORY_FOLDER`] for top-level files.
pub fn category_folder(filename: &Path, official: &Path) -> String {
    let rel = path_relative_to(filename, official).unwrap_or_else(|| filename.to_path_buf());
    let mut components = rel.components().filter(|c| matches!(c, Component::Normal(_)));
    match (components.next(), components.next()) {
        (Some(dir), Some(_)) => dir.as_os_str().to_string_lossy().into_owned(),
        _ => naming::ROOT_CATEGORY_FOLDER.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> IconConfig {
        IconConfig::from_yaml(
            r##"
Defaults:
  TrimSuffixes: ["-512-color"]
Categories:
  data_analytics:
    Target: DataAnalytics
    Icons:
      - Source: bigquery
        Target: BigQuery
        Color: "#FF0000"
"##,
        )
        .unwrap()
    }

    #[test]
    fn test_icon_from_rule() {
        let official = Path::new("/src/official");
        let icon = Icon::new(
            Path::new("/src/official/data_analytics/bigquery.png"),
            official,
            &config(),
        );
        assert_eq!(icon.category, "DataAnalytics");
        assert_eq!(icon.target, "BigQuery");
        assert_eq!(icon.source_name, "bigquery");
        assert_eq!(icon.color, "#FF0000");
    }

    #[test]
    fn test_icon_derived_names() {
        let official = Path::new("/src/official");
        let icon = Icon::new(
            Path::new("/src/official/compute_engine/cloud_run-512-color.png"),
            official,
            &config(),
        );
        assert_eq!(icon.category, "ComputeEngine");
        assert_eq!(icon.target, "CloudRun");
        assert_eq!(icon.color, "#4284F3");
    }

    #[test]
    fn test_category_folder_nested_and_top_level() {
        let official = Path::new("/src/official");
        assert_eq!(
            category_folder(Path::new("/src/official/storage/deep/x.png"), official),
            "storage"
        );
        assert_eq!(
            category_folder(Path::new("/src/official/x.png"), official),
            naming::ROOT_CATEGORY_FOLDER
        );
    }

    #[test]
    fn test_output_paths() {
        let icon = Icon::new(
            Path::new("/src/official/storage/filestore.png"),
            Path::new("/src/official"),
            &IconConfig::default(),
        );
        let dir = Path::new("/dist/Storage");
        assert_eq!(icon.image_path(dir), dir.join("Filestore.png"));
        assert_eq!(icon.puml_path(dir), dir.join("Filestore.puml"));
        assert_eq!(
            icon.vector_sibling(),
            PathBuf::from("/src/official/storage/filestore.svg")
        );
    }
}
