//! Rendering utilities for the assessment report (Markdown, terminal summary).

#![forbid(unsafe_code)]

mod markdown;
mod summary;

pub use markdown::render_markdown;
pub use summary::render_summary;

#[cfg(test)]
pub(crate) mod test_support;
