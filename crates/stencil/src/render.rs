//! Renderer adapters turning a [`DiagramSpec`] into image files.
//!
//! Two strategies exist:
//!
//! - [`MermaidRenderer`]: serialize to Mermaid markup, save the source next
//!   to the output, and invoke an external compiler process.
//! - [`SvgRenderer`]: draw the spec directly to a layered SVG document,
//!   rasterizing to PNG when the target asks for it.
//!
//! Both overwrite pre-existing output files silently and duplicate the
//! result to every extra destination on the target.

pub mod mermaid;
pub mod raster;
pub mod svg;

mod target;

pub use mermaid::MermaidRenderer;
pub use svg::SvgRenderer;
pub use target::{Background, RenderTarget};

use std::{io, path::PathBuf, process::ExitStatus};

use thiserror::Error;

use stencil_core::model::{DiagramSpec, ModelError};

/// Files written by a successful render.
#[derive(Debug, Default)]
pub struct RenderOutcome {
    written: Vec<PathBuf>,
}

impl RenderOutcome {
    fn record(&mut self, path: PathBuf) {
        self.written.push(path);
    }

    /// All paths written, primary output first.
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }
}

/// Errors from the render stage.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error(transparent)]
    Model(#[from] ModelError),

    #[error(
        "diagram renderer `{command}` was not found on PATH; \
         the diagram source was saved at {diagram_path} - paste it into \
         https://mermaid.live to render it manually"
    )]
    RendererMissing { command: String, diagram_path: PathBuf },

    #[error("diagram renderer exited with {status}: {stderr}")]
    RendererFailed { status: ExitStatus, stderr: String },

    #[error("Rasterization error: {0}")]
    Raster(#[from] raster::RasterError),
}

impl RenderError {
    /// Whether the condition is recoverable with a manual fallback rather
    /// than a defect in the figure or the environment's filesystem.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::RendererMissing { .. })
    }
}

/// A renderer strategy consuming a diagram spec and producing image files.
pub trait Renderer {
    /// Render `spec` to the files described by `target`.
    fn render(&self, spec: &DiagramSpec, target: &RenderTarget) -> Result<RenderOutcome, RenderError>;
}

/// Copy the primary output to every extra destination on the target.
fn distribute(target: &RenderTarget, outcome: &mut RenderOutcome) -> Result<(), RenderError> {
    for copy in target.copies() {
        if let Some(parent) = copy.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::copy(target.primary(), copy)?;
        outcome.record(copy.clone());
    }
    Ok(())
}
