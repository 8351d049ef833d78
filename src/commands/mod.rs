//! CLI command implementations.
//!
//! Each command is in its own submodule. Commands take an Options struct,
//! return `anyhow::Result`, and print styled output themselves.

pub mod matrix;
pub mod output;
pub mod overrides;
pub mod run;
pub mod score;
pub mod validate;

use std::path::Path;

use anyhow::Context;

use crate::content::ContentRepository;

pub use matrix::{execute_matrix, MatrixOptions};
pub use overrides::{execute_overrides, OverridesOptions, OverridesSubcommand};
pub use run::{execute_run, RunOptions};
pub use score::{execute_score, ScoreOptions};
pub use validate::{execute_validate, ValidateOptions};

/// Loads the content repository from optional file paths, falling back to
/// the builtin content.
pub fn load_repository(
    content: Option<&Path>,
    contextual: Option<&Path>,
) -> anyhow::Result<ContentRepository> {
    let repository = match content {
        Some(path) => ContentRepository::load(path)
            .with_context(|| format!("failed to load content from {}", path.display()))?,
        None => ContentRepository::builtin().context("builtin content failed to parse")?,
    };
    match contextual {
        Some(path) => repository
            .with_contextual_file(path)
            .with_context(|| format!("failed to load contextual content from {}", path.display())),
        None => Ok(repository),
    }
}
