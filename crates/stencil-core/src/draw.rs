//! Visual definitions and SVG drawing primitives for diagram elements.
//!
//! Everything a renderer needs to turn the neutral diagram model into SVG
//! nodes lives here: stroke and text styling, z-ordered layer collection,
//! shape definitions, and connector rendering.

pub mod connector;
pub mod shape;

mod layer;
mod stroke;
mod text;

pub use connector::{ConnectorDefinition, Direction};
pub use layer::{LayeredOutput, RenderLayer, SvgNode};
pub use shape::{
    ActorDefinition, GroupBoxDefinition, OvalDefinition, RectangleDefinition, ShapeDefinition,
};
pub use stroke::{StrokeCap, StrokeDefinition, StrokeJoin, StrokeStyle};
pub use text::{Text, TextDefinition};

use crate::geometry::{Point, Size};

/// A drawable element that can render itself into layered SVG output.
pub trait Drawable {
    /// Render this drawable centered at the given position.
    fn render_to_layers(&self, position: Point) -> LayeredOutput;

    /// The space this drawable occupies when rendered.
    fn size(&self) -> Size;
}
