//! PNG variant rendering: bound to a maximum size, optionally grayscale, opaque or transparent.

use anyhow::{Context, Result};
use image::imageops::FilterType;
use image::{DynamicImage, ImageFormat, Rgb, RgbImage, RgbaImage};
use std::path::Path;

/// How one PNG variant is rendered.
#[derive(Clone, Copy, Debug)]
pub struct ImageVariant {
    /// Keep colors; false renders grayscale.
    pub color: bool,
    /// Largest width/height; larger images are scaled down keeping aspect ratio.
    pub max_target_size: u32,
    /// Keep the alpha channel; false flattens onto white.
    pub transparency: bool,
}

/// Render `source` as `variant` into `dest` (PNG).
pub fn render_variant(source: &Path, dest: &Path, variant: ImageVariant) -> Result<()> {
    let img = image::open(source).with_context(|| format!("open image {}", source.display()))?;
    let img = bound_size(img, variant.max_target_size);
    let img = if variant.color {
        img
    } else {
        DynamicImage::ImageLumaA8(img.to_luma_alpha8())
    };
    let out = if variant.transparency {
        DynamicImage::ImageRgba8(img.to_rgba8())
    } else {
        DynamicImage::ImageRgb8(flatten_on_white(&img.to_rgba8()))
    };
    out.save_with_format(dest, ImageFormat::Png)
        .with_context(|| format!("write image {}", dest.display()))
}

/// Scale down (never up) so neither side exceeds `max`.
pub fn bound_size(img: DynamicImage, max: u32) -> DynamicImage {
    let max = max.max(1);
    if img.width() > max || img.height() > max {
        img.resize(max, max, FilterType::Lanczos3)
    } else {
        img
    }
}

/// Alpha-blend every pixel onto a white background.
pub fn flatten_on_white(rgba: &RgbaImage) -> RgbImage {
    RgbImage::from_fn(rgba.width(), rgba.height(), |x, y| {
        let [r, g, b, a] = rgba.get_pixel(x, y).0;
        let a = u32::from(a);
        let blend = |c: u8| ((u32::from(c) * a + 255 * (255 - a) + 127) / 255) as u8;
        Rgb([blend(r), blend(g), blend(b)])
    })
}
