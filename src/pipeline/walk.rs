//! Source enumeration: every `*.png` under `source/official`, sorted.

use anyhow::{Context, Result};
use log::debug;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::engine::tools::{has_extension, is_os_hidden_file};
use crate::utils::config::Extensions;

/// Returns true if the walked path is a source image to build.
pub fn is_source_image(path: &Path, is_file: bool) -> bool {
    is_file && has_extension(path, Extensions::IMAGE) && !is_os_hidden_file(path)
}

/// Recursively collect source images under `official`, sorted lexicographically.
/// An empty tree yields an empty list; walk errors are returned.
pub fn build_file_list(official: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in WalkDir::new(official).sort_by_file_name() {
        let entry = entry.with_context(|| format!("walk {}", official.display()))?;
        if is_source_image(entry.path(), entry.file_type().is_file()) {
            files.push(entry.into_path());
        }
    }
    files.sort();
    debug!("{} source images under {}", files.len(), official.display());
    Ok(files)
}
