//! PlantUML include files: sprite encoding through the PlantUML jar, plus the entity macros.

use anyhow::{Context, Result, bail};
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use crate::utils::config::RenderConsts;

/// Turns a rendered PNG into a PlantUML `sprite` block.
pub trait SpriteEncoder: Send + Sync {
    /// Returns `sprite $<name> [WxH/16z] { ... }` for `png`.
    fn encode_sprite(&self, png: &Path, name: &str) -> Result<String>;
}

/// The PlantUML jar launched through a JVM.
#[derive(Clone, Debug)]
pub struct PlantUml {
    pub java: String,
    pub jar: PathBuf,
}

impl PlantUml {
    pub fn new(java: &str, jar: &Path) -> Self {
        PlantUml {
            java: java.to_string(),
            jar: jar.to_path_buf(),
        }
    }

    fn command(&self) -> Command {
        let mut cmd = Command::new(&self.java);
        cmd.arg("-jar").arg(&self.jar);
        cmd
    }

    /// Run `-version`. Errors only when the process cannot be launched; the exit status is the caller's call.
    pub fn version(&self) -> std::io::Result<Output> {
        self.command().arg("-version").output()
    }
}

impl SpriteEncoder for PlantUml {
    fn encode_sprite(&self, png: &Path, name: &str) -> Result<String> {
        let output = self
            .command()
            .arg("-encodesprite")
            .arg(RenderConsts::SPRITE_FORMAT)
            .arg(png)
            .output()
            .with_context(|| format!("launch {} -jar {}", self.java, self.jar.display()))?;
        if !output.status.success() {
            bail!(
                "plantuml -encodesprite {} exited with {}: {}",
                png.display(),
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            );
        }
        let text = String::from_utf8(output.stdout).context("sprite output is not UTF-8")?;
        rename_sprite(&text, name)
    }
}

/// Rewrite the sprite's name to `$name`. PlantUML names sprites after the PNG file stem.
pub fn rename_sprite(text: &str, name: &str) -> Result<String> {
    let text = text.trim();
    let (first, rest) = text.split_once('\n').unwrap_or((text, ""));
    let mut parts = first.trim().splitn(3, ' ');
    match (parts.next(), parts.next(), parts.next()) {
        (Some("sprite"), Some(_), Some(tail)) if rest.is_empty() => {
            Ok(format!("sprite ${name} {tail}"))
        }
        (Some("sprite"), Some(_), Some(tail)) => Ok(format!("sprite ${name} {tail}\n{rest}")),
        _ => bail!("unexpected sprite output: {first:?}"),
    }
}

/// Include file body for one icon.
pub fn puml_template(category: &str, target: &str, color: &str, sprite: &str) -> String {
    format!(
        "' {category}/{target}, generated by {pkg}; do not edit\n\
         {sprite}\n\
         \n\
         GCPEntityColoring({target})\n\
         !define {target}(e_alias, e_label, e_techn) GCPEntity(e_alias, e_label, e_techn, {color}, {target}, {target})\n\
         !define {target}(e_alias, e_label, e_techn, e_descr) GCPEntity(e_alias, e_label, e_techn, e_descr, {color}, {target}, {target})\n\
         !define {target}Participant(p_alias, p_label, p_techn) GCPParticipant(p_alias, p_label, p_techn, {color}, {target}, {target})\n\
         !define {target}Participant(p_alias, p_label, p_techn, p_descr) GCPParticipant(p_alias, p_label, p_techn, p_descr, {color}, {target}, {target})\n",
        pkg = env!("CARGO_PKG_NAME"),
    )
}
