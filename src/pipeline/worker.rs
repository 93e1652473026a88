use anyhow::Result;
use log::debug;
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use crate::engine::progress::update_progress_bar;
use crate::icon::{Icon, ImageVariant};
use crate::types::JobFailure;

use super::context::JobContext;

/// Render one icon: opaque PNG, include file (sprite from the opaque PNG), then the transparent PNG
/// over the same file. Errors and panics come back as a [`JobFailure`].
pub fn render_icon(icon: &Icon, ctx: &JobContext<'_>) -> Result<(), JobFailure> {
    if ctx.cancelled() {
        return Ok(());
    }
    debug!("generating PUML for {}", icon.source_name);

    let outcome = panic::catch_unwind(AssertUnwindSafe(|| render_steps(icon, ctx)));
    if let Some(bar) = &ctx.bar {
        update_progress_bar(bar, 1);
    }
    let error = match outcome {
        Ok(Ok(())) => return Ok(()),
        Ok(Err(e)) => format!("{e:#}"),
        Err(payload) => format!("render panicked: {}", panic_message(payload.as_ref())),
    };
    Err(JobFailure {
        category: icon.category.clone(),
        target: icon.target.clone(),
        source: icon.filename.clone(),
        error,
    })
}

fn render_steps(icon: &Icon, ctx: &JobContext<'_>) -> Result<()> {
    let dir = ctx.dist_dir.join(&icon.category);
    let opaque = ImageVariant {
        color: true,
        max_target_size: ctx.max_target_size,
        transparency: false,
    };
    icon.generate_image(&dir, opaque)?;
    icon.generate_puml(&dir, ctx.encoder)?;
    icon.generate_image(
        &dir,
        ImageVariant {
            transparency: true,
            ..opaque
        },
    )?;
    Ok(())
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s
    } else {
        "unknown panic payload"
    }
}
