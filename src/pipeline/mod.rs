//! Pipeline components: enumeration, render jobs, failure reporting, aggregation.

pub mod aggregate;
pub mod context;
pub mod embed;
pub mod error_handler;
pub mod orchestrator;
pub mod walk;
pub mod worker;

pub use aggregate::{
    MermaidInfo, MermaidManifest, Outputs, Theme, ThemeElement, aggregate, markdown_header,
    markdown_row, sort_icons, to_ascii_json, write_outputs,
};
pub use context::JobContext;
pub use embed::{EmbeddedIcon, embed_icon, embed_png, embed_svg, parse_px, parse_svg, png_data_uri};
pub use error_handler::check_for_render_failures;
pub use orchestrator::{create_category_dirs, distinct_categories, run_icon_jobs};
pub use walk::{build_file_list, is_source_image};
pub use worker::render_icon;
