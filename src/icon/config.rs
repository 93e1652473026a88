//! `config.yml`: category and target naming rules for the icon set.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

use crate::utils::config::OutputConsts;

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct IconConfig {
    #[serde(default)]
    pub defaults: Defaults,
    /// Keyed by source folder name under `source/official`.
    #[serde(default)]
    pub categories: BTreeMap<String, CategoryConfig>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Defaults {
    #[serde(default)]
    pub category: CategoryDefaults,
    /// Stem suffixes removed before deriving a target name; first match wins.
    #[serde(default)]
    pub trim_suffixes: Vec<String>,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CategoryDefaults {
    #[serde(default = "default_color")]
    pub color: String,
}

impl Default for CategoryDefaults {
    fn default() -> Self {
        CategoryDefaults {
            color: default_color(),
        }
    }
}

fn default_color() -> String {
    OutputConsts::THEME_STROKE.to_string()
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CategoryConfig {
    pub target: Option<String>,
    pub color: Option<String>,
    #[serde(default)]
    pub icons: Vec<IconRule>,
}

/// Explicit name for one source file.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct IconRule {
    /// File stem or full file name.
    pub source: String,
    pub target: String,
    pub color: Option<String>,
}

impl IconConfig {
    pub fn from_yaml(text: &str) -> Result<Self> {
        serde_yaml::from_str(text).context("parse icon configuration")
    }

    /// Rule matching `stem` or `file_name` inside category folder `folder`.
    pub fn rule_for(&self, folder: &str, stem: &str, file_name: &str) -> Option<&IconRule> {
        self.categories
            .get(folder)?
            .icons
            .iter()
            .find(|r| r.source == stem || r.source == file_name)
    }

    /// Configured category name for `folder`, if any.
    pub fn category_target(&self, folder: &str) -> Option<&str> {
        self.categories.get(folder)?.target.as_deref()
    }

    /// Entity color: icon rule, then category, then defaults.
    pub fn color_for<'a>(&'a self, folder: &str, rule: Option<&'a IconRule>) -> &'a str {
        rule.and_then(|r| r.color.as_deref())
            .or_else(|| self.categories.get(folder)?.color.as_deref())
            .unwrap_or(&self.defaults.category.color)
    }
}

/// Read and parse `config.yml`.
pub fn load_icon_config(path: &Path) -> Result<IconConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("read {}", path.display()))?;
    IconConfig::from_yaml(&text).with_context(|| format!("load {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r##"
Defaults:
  Category:
    Color: "#123456"
  TrimSuffixes: ["-512-color"]
Categories:
  ai_and_machine_learning:
    Target: AIMachineLearning
    Color: "#AA00AA"
    Icons:
      - Source: ai_platform
        Target: AIPlatform
      - Source: automl.png
        Target: AutoML
        Color: "#00FF00"
  compute: {}
"##;

    #[test]
    fn test_parse_sample() {
        let cfg = IconConfig::from_yaml(SAMPLE).unwrap();
        assert_eq!(cfg.defaults.category.color, "#123456");
        assert_eq!(cfg.defaults.trim_suffixes, vec!["-512-color".to_string()]);
        assert_eq!(cfg.categories.len(), 2);
        assert_eq!(
            cfg.category_target("ai_and_machine_learning"),
            Some("AIMachineLearning")
        );
        assert_eq!(cfg.category_target("compute"), None);
    }

    #[test]
    fn test_rule_matches_stem_or_file_name() {
        let cfg = IconConfig::from_yaml(SAMPLE).unwrap();
        let folder = "ai_and_machine_learning";
        assert_eq!(
            cfg.rule_for(folder, "ai_platform", "ai_platform.png")
                .map(|r| r.target.as_str()),
            Some("AIPlatform")
        );
        assert_eq!(
            cfg.rule_for(folder, "automl", "automl.png")
                .map(|r| r.target.as_str()),
            Some("AutoML")
        );
        assert!(cfg.rule_for("compute", "ai_platform", "ai_platform.png").is_none());
    }

    #[test]
    fn test_color_precedence() {
        let cfg = IconConfig::from_yaml(SAMPLE).unwrap();
        let folder = "ai_and_machine_learning";
        let automl = cfg.rule_for(folder, "automl", "automl.png");
        assert_eq!(cfg.color_for(folder, automl), "#00FF00");
        let platform = cfg.rule_for(folder, "ai_platform", "ai_platform.png");
        assert_eq!(cfg.color_for(folder, platform), "#AA00AA");
        assert_eq!(cfg.color_for("compute", None), "#123456");
        assert_eq!(cfg.color_for("unknown", None), "#123456");
    }

    #[test]
    fn test_defaults_when_sections_missing() {
        let cfg = IconConfig::from_yaml("Categories: {}\n").unwrap();
        assert_eq!(cfg.defaults.category.color, OutputConsts::THEME_STROKE);
        assert!(cfg.defaults.trim_suffixes.is_empty());
    }

    #[test]
    fn test_malformed_yaml_is_an_error() {
        assert!(IconConfig::from_yaml("Categories: [unclosed").is_err());
        assert!(IconConfig::from_yaml("Categories:\n  compute:\n    Icons: 3\n").is_err());
    }
}
