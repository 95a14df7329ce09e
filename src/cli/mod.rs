mod args;
pub mod logger;
pub mod pipeline;

pub use args::Args;
pub use pipeline::{BatchPipeline, Pipeline, default_output_path, is_batch_pattern, is_directory};
