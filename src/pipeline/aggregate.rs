//! Aggregate outputs: Markdown index, Structurizr theme and Mermaid icon manifest.

use anyhow::{Context, Result};
use indexmap::IndexMap;
use indexmap::map::Entry as MapEntry;
use log::{error, info, warn};
use serde::{Deserialize, Serialize};
use serde_json::ser::{Formatter, PrettyFormatter};
use std::io;
use std::path::Path;

use crate::ReleaseInfo;
use crate::icon::Icon;
use crate::utils::config::{OutputConsts, ProjectPaths};

use super::embed::{EmbeddedIcon, embed_icon};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeElement {
    pub tag: String,
    pub stroke: String,
    pub icon: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    pub name: String,
    pub elements: Vec<ThemeElement>,
}

impl Theme {
    pub fn new() -> Self {
        Theme {
            name: OutputConsts::THEME_NAME.to_string(),
            elements: Vec::new(),
        }
    }

    pub fn push(&mut self, icon: &Icon) {
        self.elements.push(ThemeElement {
            tag: icon.target.clone(),
            stroke: OutputConsts::THEME_STROKE.to_string(),
            icon: format!("{}/{}.png", icon.category, icon.target),
        });
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MermaidInfo {
    pub name: String,
    pub total: usize,
    pub version: String,
}

/// Mermaid icon pack. Maps keep insertion order, i.e. sorted (category, target) order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MermaidManifest {
    pub prefix: String,
    pub info: MermaidInfo,
    pub last_modified: i64,
    pub width: u32,
    pub height: u32,
    pub icons: IndexMap<String, EmbeddedIcon>,
    pub categories: IndexMap<String, Vec<String>>,
}

impl MermaidManifest {
    pub fn new(release: &ReleaseInfo) -> Self {
        MermaidManifest {
            prefix: OutputConsts::MERMAID_PREFIX.to_string(),
            info: MermaidInfo {
                name: OutputConsts::MERMAID_NAME.to_string(),
                total: 0,
                version: release.version.clone(),
            },
            last_modified: release.last_modified,
            width: OutputConsts::DEFAULT_ICON_SIZE,
            height: OutputConsts::DEFAULT_ICON_SIZE,
            icons: IndexMap::new(),
            categories: IndexMap::new(),
        }
    }

    /// Add an embedded icon. Returns false (manifest unchanged) if `target` is already present.
    pub fn insert(&mut self, category: &str, target: &str, icon: EmbeddedIcon) -> bool {
        match self.icons.entry(target.to_string()) {
            MapEntry::Occupied(_) => false,
            MapEntry::Vacant(slot) => {
                slot.insert(icon);
                self.info.total += 1;
                self.categories
                    .entry(category.to_string())
                    .or_default()
                    .push(target.to_string());
                true
            }
        }
    }
}

/// Title of the Markdown index; the icon rows follow directly.
pub fn markdown_header() -> String {
    format!("{}\n\n", OutputConsts::MARKDOWN_TITLE)
}

/// One Markdown index row.
pub fn markdown_row(icon: &Icon) -> String {
    let (cat, tgt) = (&icon.category, &icon.target);
    format!("{cat} | {tgt} | ![{tgt}](dist/{cat}/{tgt}.png?raw=true) | {cat}/{tgt}.puml\n")
}

/// The three documents written at the end of a build.
#[derive(Clone, Debug)]
pub struct Outputs {
    pub markdown: String,
    pub theme: Theme,
    pub mermaid: MermaidManifest,
}

/// Icons ordered by (category, target); ties keep input order.
pub fn sort_icons(icons: &[Icon]) -> Vec<&Icon> {
    let mut sorted: Vec<&Icon> = icons.iter().collect();
    sorted.sort_by(|a, b| (&a.category, &a.target).cmp(&(&b.category, &b.target)));
    sorted
}

/// Build all outputs from `icons` and what is on disk. Embed failures are logged and the icon is
/// left out of the manifest only.
pub fn aggregate(icons: &[Icon], release: &ReleaseInfo) -> Outputs {
    let mut markdown = markdown_header();
    let mut theme = Theme::new();
    let mut mermaid = MermaidManifest::new(release);

    for icon in sort_icons(icons) {
        markdown.push_str(&markdown_row(icon));
        theme.push(icon);
        match embed_icon(icon) {
            Ok(embedded) => {
                if !mermaid.insert(&icon.category, &icon.target, embedded) {
                    warn!(
                        "duplicate target {} ({}) left out of {}",
                        icon.target,
                        icon.filename.display(),
                        ProjectPaths::MERMAID_FILENAME
                    );
                }
            }
            Err(e) => error!(
                "{:#}; {} not added to {}",
                e,
                icon.target,
                ProjectPaths::MERMAID_FILENAME
            ),
        }
    }

    Outputs {
        markdown,
        theme,
        mermaid,
    }
}

/// Write the Markdown index and both JSON files (2-space indentation, ASCII only).
pub fn write_outputs(paths: &ProjectPaths, outputs: &Outputs) -> Result<()> {
    write_file(&paths.markdown_file, &outputs.markdown)?;
    let theme = to_ascii_json(&outputs.theme).context("serialize theme")?;
    write_file(&paths.theme_file, &theme)?;
    let mermaid = to_ascii_json(&outputs.mermaid).context("serialize manifest")?;
    write_file(&paths.mermaid_file, &mermaid)?;
    info!(
        "Wrote {} ({} icons), {}, {}",
        paths.mermaid_file.display(),
        outputs.mermaid.info.total,
        paths.theme_file.display(),
        paths.markdown_file.display()
    );
    Ok(())
}

fn write_file(path: &Path, contents: &str) -> Result<()> {
    std::fs::write(path, contents).with_context(|| format!("write {}", path.display()))
}

/// Pretty JSON where every non-ASCII character is a `\uXXXX` escape (UTF-16 surrogates above the BMP).
pub fn to_ascii_json<T: Serialize>(value: &T) -> Result<String> {
    let mut out = Vec::new();
    let formatter = AsciiPrettyFormatter(PrettyFormatter::with_indent(b"  "));
    let mut ser = serde_json::Serializer::with_formatter(&mut out, formatter);
    value.serialize(&mut ser)?;
    Ok(String::from_utf8(out)?)
}

struct AsciiPrettyFormatter<'a>(PrettyFormatter<'a>);

impl Formatter for AsciiPrettyFormatter<'_> {
    fn begin_array<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.0.begin_array(writer)
    }

    fn end_array<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.0.end_array(writer)
    }

    fn begin_array_value<W: ?Sized + io::Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> io::Result<()> {
        self.0.begin_array_value(writer, first)
    }

    fn end_array_value<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.0.end_array_value(writer)
    }

    fn begin_object<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.0.begin_object(writer)
    }

    fn end_object<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.0.end_object(writer)
    }

    fn begin_object_key<W: ?Sized + io::Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> io::Result<()> {
        self.0.begin_object_key(writer, first)
    }

    fn begin_object_value<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.0.begin_object_value(writer)
    }

    fn end_object_value<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.0.end_object_value(writer)
    }

    fn write_string_fragment<W: ?Sized + io::Write>(
        &mut self,
        writer: &mut W,
        fragment: &str,
    ) -> io::Result<()> {
        let mut start = 0;
        for (i, c) in fragment.char_indices() {
            if c.is_ascii() {
                continue;
            }
            writer.write_all(&fragment.as_bytes()[start..i])?;
            let mut units = [0_u16; 2];
            for unit in c.encode_utf16(&mut units).iter() {
                write!(writer, "\\u{:04x}", unit)?;
            }
            start = i + c.len_utf8();
        }
        writer.write_all(&fragment.as_bytes()[start..])
    }
}
