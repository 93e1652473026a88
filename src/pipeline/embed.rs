//! Inline image data for the Mermaid manifest: SVG markup when a vector sibling exists, else a PNG data URI.

use anyhow::{Context, Result, bail};
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use quick_xml::events::{BytesStart, Event};
use quick_xml::{Reader, Writer};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::icon::Icon;
use crate::utils::config::OutputConsts;

const PNG_DATA_URI_PREFIX: &str = "data:image/png;base64,";

/// One `icons` entry of the Mermaid manifest.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmbeddedIcon {
    pub body: String,
    pub width: u32,
    pub height: u32,
}

/// Embed `icon` from its `.svg` sibling when present, otherwise from the source PNG.
pub fn embed_icon(icon: &Icon) -> Result<EmbeddedIcon> {
    let svg = icon.vector_sibling();
    if svg.exists() {
        embed_svg(&svg).with_context(|| format!("Error parsing SVG {}", svg.display()))
    } else {
        embed_png(&icon.filename)
            .with_context(|| format!("Error reading PNG {}", icon.filename.display()))
    }
}

/// Base64 data URI of the file's bytes, at the default manifest size.
pub fn embed_png(path: &Path) -> Result<EmbeddedIcon> {
    let data = std::fs::read(path)?;
    Ok(EmbeddedIcon {
        body: png_data_uri(&data),
        width: OutputConsts::DEFAULT_ICON_SIZE,
        height: OutputConsts::DEFAULT_ICON_SIZE,
    })
}

pub fn png_data_uri(data: &[u8]) -> String {
    format!("{PNG_DATA_URI_PREFIX}{}", STANDARD.encode(data))
}

pub fn embed_svg(path: &Path) -> Result<EmbeddedIcon> {
    let text = std::fs::read_to_string(path)?;
    parse_svg(&text)
}

/// Size from the root `width`/`height` and the root's children serialized as the body.
///
/// A top-level `<title>` is dropped, as are `xmlns`/`xmlns:*` declarations on every element,
/// comments, processing instructions and whitespace-only text.
pub fn parse_svg(text: &str) -> Result<EmbeddedIcon> {
    let mut reader = Reader::from_str(text);
    reader.config_mut().trim_text(true);
    let mut writer = Writer::new(Vec::new());
    let mut depth = 0_usize;
    let mut size = None;

    loop {
        match reader.read_event()? {
            Event::Start(e) if depth == 0 => {
                size = Some(root_size(&e)?);
                depth = 1;
            }
            Event::Empty(e) if depth == 0 => {
                size = Some(root_size(&e)?);
                break;
            }
            Event::Start(e) if depth == 1 && is_title(&e) => {
                reader.read_to_end(e.name())?;
            }
            Event::Empty(e) if depth == 1 && is_title(&e) => {}
            Event::Start(e) => {
                writer.write_event(Event::Start(strip_namespaces(&e)?))?;
                depth += 1;
            }
            Event::Empty(e) => writer.write_event(Event::Empty(strip_namespaces(&e)?))?,
            Event::End(e) => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    break;
                }
                writer.write_event(Event::End(e))?;
            }
            Event::Text(e) if depth > 0 => writer.write_event(Event::Text(e))?,
            Event::CData(e) if depth > 0 => writer.write_event(Event::CData(e))?,
            Event::Eof => bail!("unexpected end of document"),
            _ => {}
        }
    }

    let (width, height) = size.context("no root element")?;
    let body = String::from_utf8(writer.into_inner()).context("body is not UTF-8")?;
    Ok(EmbeddedIcon {
        body,
        width,
        height,
    })
}

fn is_title(e: &BytesStart<'_>) -> bool {
    e.local_name().as_ref() == b"title"
}

fn is_namespace_decl(key: &[u8]) -> bool {
    key == b"xmlns" || key.starts_with(b"xmlns:")
}

/// Copy of `e` without namespace declarations.
fn strip_namespaces(e: &BytesStart<'_>) -> Result<BytesStart<'static>> {
    let name = std::str::from_utf8(e.name().as_ref())
        .context("element name is not UTF-8")?
        .to_string();
    let mut out = BytesStart::new(name);
    for attr in e.attributes() {
        let attr = attr?;
        if !is_namespace_decl(attr.key.as_ref()) {
            out.push_attribute(attr);
        }
    }
    Ok(out)
}

fn root_size(root: &BytesStart<'_>) -> Result<(u32, u32)> {
    Ok((
        root_dimension(root, "width")?,
        root_dimension(root, "height")?,
    ))
}

fn root_dimension(root: &BytesStart<'_>, key: &str) -> Result<u32> {
    let attr = root
        .try_get_attribute(key)?
        .with_context(|| format!("root element has no {key} attribute"))?;
    let value = attr.unescape_value()?;
    parse_px(&value).with_context(|| format!("invalid {key} {value:?}"))
}

/// `"32px"` → 32. Strips `p`/`x` from both ends, then surrounding whitespace.
pub fn parse_px(value: &str) -> Result<u32> {
    Ok(value
        .trim_matches(|c| c == 'p' || c == 'x')
        .trim()
        .parse::<u32>()?)
}
