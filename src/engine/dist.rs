//! Output directory preparation: wipe `dist/`, then copy the pass-through templates.

use anyhow::{Context, Result};
use log::debug;
use std::fs;
use std::path::Path;

use crate::engine::tools::{has_extension, is_os_hidden_file};
use crate::utils::config::Extensions;

/// Remove `dist` recursively if it exists, then recreate it empty.
pub fn clean_dist(dist: &Path) -> Result<()> {
    if dist.exists() {
        fs::remove_dir_all(dist).with_context(|| format!("remove {}", dist.display()))?;
    }
    fs::create_dir_all(dist).with_context(|| format!("create {}", dist.display()))?;
    Ok(())
}

/// Copy every top-level `*.puml` file of `source` into `dist`, overwriting. Returns the number copied.
pub fn copy_templates(source: &Path, dist: &Path) -> Result<usize> {
    let mut templates = Vec::new();
    for entry in fs::read_dir(source).with_context(|| format!("read {}", source.display()))? {
        let path = entry
            .with_context(|| format!("read {}", source.display()))?
            .path();
        if path.is_file() && has_extension(&path, Extensions::TEMPLATE) && !is_os_hidden_file(&path)
        {
            templates.push(path);
        }
    }
    templates.sort();

    for path in &templates {
        let Some(name) = path.file_name() else {
            continue;
        };
        let dest = dist.join(name);
        fs::copy(path, &dest)
            .with_context(|| format!("copy {} -> {}", path.display(), dest.display()))?;
        debug!("copied {}", dest.display());
    }
    Ok(templates.len())
}
