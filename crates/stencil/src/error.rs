//! Error types for stencil operations.

use std::io;

use thiserror::Error;

use stencil_core::model::ModelError;

use crate::render::RenderError;

/// The main error type for stencil operations.
#[derive(Debug, Error)]
pub enum StencilError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Invalid diagram: {0}")]
    Model(#[from] ModelError),

    #[error("Render error: {0}")]
    Render(#[from] RenderError),

    #[error("Configuration error: {0}")]
    Config(String),
}
