//! Render target description: where and how big.

use std::path::{Path, PathBuf};

use stencil_core::color::Color;

/// Background treatment for the rendered image.
#[derive(Debug, Clone)]
pub enum Background {
    /// Solid fill behind the diagram
    Opaque(Color),
    /// No background fill
    Transparent,
}

impl Default for Background {
    fn default() -> Self {
        Self::Opaque(Color::new("white").expect("'white' is a valid CSS color"))
    }
}

/// Output description for one render of a diagram spec.
///
/// The primary path's extension selects the image format (`.png` or
/// `.svg`). A spec may be rendered to extra destinations as verbatim
/// copies of the primary output, e.g. an archival copy next to the
/// canonical report image.
#[derive(Debug, Clone)]
pub struct RenderTarget {
    primary: PathBuf,
    copies: Vec<PathBuf>,
    width: u32,
    height: u32,
    scale: f32,
    background: Background,
}

impl RenderTarget {
    /// Create a target with the given primary path and pixel dimensions.
    /// Scale defaults to 1.0 and the background to opaque white.
    pub fn new(primary: impl Into<PathBuf>, width: u32, height: u32) -> Self {
        Self {
            primary: primary.into(),
            copies: Vec::new(),
            width,
            height,
            scale: 1.0,
            background: Background::default(),
        }
    }

    /// Add an extra destination receiving a copy of the primary output.
    pub fn with_copy(mut self, path: impl Into<PathBuf>) -> Self {
        self.copies.push(path.into());
        self
    }

    /// Set the resolution multiplier (device pixel ratio).
    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    /// Set the background treatment.
    pub fn with_background(mut self, background: Background) -> Self {
        self.background = background;
        self
    }

    /// The primary output path.
    pub fn primary(&self) -> &Path {
        &self.primary
    }

    /// Extra copy destinations.
    pub fn copies(&self) -> &[PathBuf] {
        &self.copies
    }

    /// Requested pixel width.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Requested pixel height.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Resolution multiplier.
    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Background treatment.
    pub fn background(&self) -> &Background {
        &self.background
    }

    /// Path of the intermediate markup source kept alongside the image.
    pub fn source_path(&self) -> PathBuf {
        self.primary.with_extension("mmd")
    }

    /// Path of the SVG output (same stem as the primary).
    pub fn svg_path(&self) -> PathBuf {
        self.primary.with_extension("svg")
    }

    /// True when the primary output should be a raster PNG.
    pub fn wants_png(&self) -> bool {
        self.primary
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("png"))
    }
}
