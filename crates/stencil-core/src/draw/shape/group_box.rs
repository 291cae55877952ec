use std::rc::Rc;

use svg::{self, node::element as svg_element};

use super::ShapeDefinition;
use crate::{
    apply_stroke,
    color::Color,
    draw::StrokeDefinition,
    geometry::{Point, Size},
};

/// Grouping box / system boundary shape definition.
///
/// A rounded rectangle visually scoping a set of elements. The title text is
/// placed by the renderer near the top edge; the shape itself only draws the
/// box so it can sit on the [`Group`](crate::draw::RenderLayer::Group) layer
/// below all content.
#[derive(Debug, Clone)]
pub struct GroupBoxDefinition {
    fill_color: Option<Color>,
    stroke: Rc<StrokeDefinition>,
    rounded: f32,
}

impl GroupBoxDefinition {
    /// Create a new group box definition with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a group box definition with the given fill and outline.
    pub fn styled(fill_color: Option<Color>, stroke: Rc<StrokeDefinition>) -> Self {
        Self {
            fill_color,
            stroke,
            rounded: 12.0,
        }
    }

    fn fill_color(&self) -> Option<&Color> {
        self.fill_color.as_ref()
    }
}

impl Default for GroupBoxDefinition {
    fn default() -> Self {
        Self {
            fill_color: None,
            stroke: Rc::new(StrokeDefinition::solid(Color::default(), 1.0)),
            rounded: 12.0,
        }
    }
}

impl ShapeDefinition for GroupBoxDefinition {
    fn render_to_svg(&self, size: Size, position: Point) -> Box<dyn svg::Node> {
        let bounds = position.to_bounds(size);

        let mut rect = svg_element::Rectangle::new()
            .set("x", bounds.min_x())
            .set("y", bounds.min_y())
            .set("width", size.width())
            .set("height", size.height())
            .set("fill", "none")
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_box_has_rounded_corners() {
        let group = GroupBoxDefinition::new();
        let svg = group
            .render_to_svg(Size::new(1600.0, 1100.0), Point::new(1300.0, 650.0))
            .to_string();
        assert!(svg.contains("rx=\"12\""));
        assert!(svg.contains("width=\"1600\""));
    }

    #[test]
    fn test_group_box_without_fill_is_transparent() {
        let group = GroupBoxDefinition::new();
        let svg = group
            .render_to_svg(Size::new(100.0, 100.0), Point::default())
            .to_string();
        assert!(svg.contains("fill=\"none\""));
    }
}
