use std::rc::Rc;

use svg::{self, node::element as svg_element};

use super::ShapeDefinition;
use crate::{
    apply_stroke,
    color::Color,
    draw::StrokeDefinition,
    geometry::{Point, Size},
};

/// Rounded rectangle shape definition, used for actor name plates and
/// process nodes.
#[derive(Debug, Clone)]
pub struct RectangleDefinition {
    fill_color: Option<Color>,
    stroke: Rc<StrokeDefinition>,
    rounded: f32,
}

impl RectangleDefinition {
    /// Create a new rectangle definition with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a rectangle definition with the given fill, outline, and
    /// corner radius.
    pub fn styled(fill_color: Option<Color>, stroke: Rc<StrokeDefinition>, rounded: f32) -> Self {
        Self {
            fill_color,
            stroke,
            rounded,
        }
    }

    fn fill_color(&self) -> Option<&Color> {
        self.fill_color.as_ref()
    }
}

impl Default for RectangleDefinition {
    fn default() -> Self {
        Self {
            fill_color: None,
            stroke: Rc::new(StrokeDefinition::solid(Color::default(), 2.0)),
            rounded: 0.0,
        }
    }
}

impl ShapeDefinition for RectangleDefinition {
    fn render_to_svg(&self, size: Size, position: Point) -> Box<dyn svg::Node> {
        // position is the center of the element
        let bounds = position.to_bounds(size);

        let mut rect = svg_element::Rectangle::new()
            .set("x", bounds.min_x())
            .set("y", bounds.min_y())
            .set("width", size.width())
            .set("height", size.height())
            .set("fill", "white")
            .set("rx", self.rounded);
        rect = apply_stroke!(rect, &self.stroke);

        if let Some(fill_color) = self.fill_color() {
            rect = rect.set("fill", fill_color.to_string());
        }

        rect.into()
    }

    fn stroke(&self) -> &Rc<StrokeDefinition> {
        &self.stroke
    }
}
