//! Engine module: CLI surface, output directory preparation, worker pool and progress

pub mod arg_parser;
pub mod cli;
pub mod dist;
pub mod parallel;
pub mod progress;
pub mod tools;

// Re-export commonly used functions
pub use arg_parser::Cli;
pub use cli::handle_run;
pub use dist::{clean_dist, copy_templates};
pub use parallel::build_render_pool;
pub use tools::{has_extension, is_os_hidden_file, path_relative_to};
