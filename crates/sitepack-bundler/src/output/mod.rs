//! Artifact output.

pub mod writer;

pub use writer::{resolve_output_path, write_artifact};
