//! Job context: read-only data shared by every render job.

use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::engine::progress::ProgressBar;
use crate::icon::SpriteEncoder;

/// Everything a render job reads. Jobs share nothing mutable besides the cancel flag and the bar.
pub struct JobContext<'a> {
    /// Output root; each icon renders into `<dist_dir>/<category>`.
    pub dist_dir: &'a Path,
    pub encoder: &'a dyn SpriteEncoder,
    pub max_target_size: u32,
    /// Set from the Ctrl+C handler; jobs not yet started are skipped.
    pub cancel: &'a AtomicBool,
    pub bar: Option<ProgressBar>,
}

impl JobContext<'_> {
    pub fn cancelled(&self) -> bool {
        self.cancel.load(Ordering::Relaxed)
    }
}
