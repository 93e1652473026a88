//! icon-builder: build-time asset pipeline for the GCP icons for PlantUML.
//!
//! Turns `source/official/**.png` into resized PNGs and PlantUML includes under `dist/`, plus a
//! Markdown index, a Structurizr theme and a Mermaid icon-pack manifest.

pub mod builder;
pub mod check;
pub mod engine;
pub mod icon;
pub mod pipeline;
pub mod types;
pub mod utils;

/// Re-export types for API
pub use types::*;

pub use builder::{build_icons, run};
pub use check::verify_environment;
pub use icon::{Icon, IconConfig, PlantUml, SpriteEncoder};
pub use utils::config::ProjectPaths;

/// Result alias used by public icon-builder API
pub use anyhow::Error;
pub type Result<T> = std::result::Result<T, Error>;
