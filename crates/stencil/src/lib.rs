//! Stencil - one-shot generation of static report figures.
//!
//! Rendering pipeline for diagram specs built from literal layout tables:
//!
//! - [`render`] - the [`Renderer`](render::Renderer) capability with two
//!   strategies: Mermaid markup compiled by an external process, and direct
//!   in-process SVG drawing with optional PNG rasterization
//! - [`batch`] - sequential multi-figure driver with an "N of M" summary
//! - [`logos`] - plain-HTTP technology logo fetching
//! - [`config`] - TOML-loadable application configuration
//!
//! # Examples
//!
//! ```rust,no_run
//! use std::path::PathBuf;
//!
//! use stencil::render::{Renderer, RenderTarget, SvgRenderer};
//! use stencil::model::DiagramSpec;
//! use stencil::geometry::Size;
//!
//! let spec = DiagramSpec::new("Empty", Size::new(100.0, 100.0));
//! let target = RenderTarget::new(PathBuf::from("images/empty.svg"), 100, 100);
//!
//! let renderer = SvgRenderer::new();
//! let outcome = renderer.render(&spec, &target).expect("Failed to render");
//! println!("wrote {} file(s)", outcome.written().len());
//! ```

pub mod batch;
pub mod config;
pub mod logos;
pub mod render;

mod error;

pub use error::StencilError;

pub use stencil_core::{color, draw, geometry, identifier, model};
