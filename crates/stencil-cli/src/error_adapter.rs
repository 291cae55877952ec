//! Error adapter for converting CLI errors to miette diagnostics.
//!
//! Stencil errors carry no source spans (there is no DSL to point into),
//! so a thin adapter supplying codes and help texts is enough for miette's
//! graphical report rendering.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan};

use stencil::{StencilError, render::RenderError};

use crate::CliError;

/// Adapter wrapping a [`CliError`] for miette rendering.
pub struct ErrorAdapter<'a>(pub &'a CliError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            CliError::Config(_) => "stencil::config",
            CliError::UnknownFigure { .. } => "stencil::unknown_figure",
            CliError::Batch { .. } => "stencil::batch",
            CliError::Stencil(StencilError::Io(_)) => "stencil::io",
            CliError::Stencil(StencilError::Model(_)) => "stencil::model",
            CliError::Stencil(StencilError::Render(_)) => "stencil::render",
            CliError::Stencil(StencilError::Config(_)) => "stencil::config",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match &self.0 {
            CliError::Stencil(StencilError::Render(RenderError::RendererMissing {
                ..
            })) => Some(Box::new(
                "install the Mermaid CLI with `npm install -g @mermaid-js/mermaid-cli` \
                 or point [render].command at another compatible renderer",
            )),
            CliError::UnknownFigure { .. } => Some(Box::new(
                "run `stencil list` to see the available figure ids",
            )),
            _ => None,
        }
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        None
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        None
    }
}
