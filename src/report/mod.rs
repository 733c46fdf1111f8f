//! Human-readable renderings of a [`crate::core::Manifest`].

pub mod markdown;

pub use markdown::{render_markdown, write_markdown};
