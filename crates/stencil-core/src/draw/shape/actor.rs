use std::rc::Rc;

use svg::{self, node::element as svg_element};

use super::ShapeDefinition;
use crate::{
    apply_stroke,
    color::Color,
    draw::StrokeDefinition,
    geometry::{Point, Size},
};

/// UML Actor shape definition - a stick figure representation.
///
/// The figure scales with the element's declared height so small and large
/// actor slots render proportionally. The label is drawn by the renderer
/// below the figure, not by the shape itself.
#[derive(Debug, Clone)]
pub struct ActorDefinition {
    fill_color: Option<Color>,
    stroke: Rc<StrokeDefinition>,
}

impl ActorDefinition {
    /// Create a new actor definition with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an actor definition with the given outline stroke.
    pub fn with_stroke(stroke: Rc<StrokeDefinition>) -> Self {
        Self {
            stroke,
            ..Self::default()
        }
    }

    fn fill_color(&self) -> Option<&Color> {
        self.fill_color.as_ref()
    }
}

impl Default for ActorDefinition {
    fn default() -> Self {
        Self {
            fill_color: Some(Color::new("white").expect("'white' is a valid CSS color")),
            stroke: Rc::new(StrokeDefinition::solid(Color::default(), 2.0)),
        }
    }
}

impl ShapeDefinition for ActorDefinition {
    fn render_to_svg(&self, size: Size, position: Point) -> Box<dyn svg::Node> {
        // Proportions of the classic 24x54 stick figure, scaled to the
        // declared height.
        let scale = (size.height() / 54.0).max(0.5);
        let head_radius = 8.0 * scale;
        let body_length = 20.0 * scale;
        let arm_length = 12.0 * scale;
        let leg_length = 18.0 * scale;

        let mut group = svg_element::Group::new().set("class", "actor");

        // Head (circle at the top)
        let head_center = position.with_y(position.y() - 22.0 * scale);
        let mut head = svg_element::Circle::new()
            .set("cx", head_center.x())
            .set("cy", head_center.y())
            .set("r", head_radius)
            .set("fill", "white");
        head = apply_stroke!(head, &self.stroke);

        if let Some(fill_color) = self.fill_color() {
            head = head.set("fill", fill_color.to_string());
        }

        group = group.add(head);

        // Body (vertical line)
        let body_top = position.with_y(head_center.y() + head_radius);
        let body_bottom = position.with_y(body_top.y() + body_length);

        let body = apply_stroke!(
            svg_element::Line::new()
                .set("x1", body_top.x())
                .set("y1", body_top.y())
                .set("x2", body_bottom.x())
                .set("y2", body_bottom.y()),
            &self.stroke
        )
        .set("stroke-linecap", "round");
        group = group.add(body);

        // Arms (two diagonal lines from upper body)
        let arm_center = position.with_y(body_top.y() + 6.0 * scale);

        for direction in [-1.0f32, 1.0] {
            let arm = apply_stroke!(
                svg_element::Line::new()
                    .set("x1", arm_center.x())
                    .set("y1", arm_center.y())
                    .set("x2", arm_center.x() + direction * arm_length)
                    .set("y2", arm_center.y() + 8.0 * scale),
                &self.stroke
            )
            .set("stroke-linecap", "round");
            group = group.add(arm);
        }

        // Legs (two diagonal lines from bottom of body)
        for direction in [-1.0f32, 1.0] {
            let leg = apply_stroke!(
                svg_element::Line::new()
                    .set("x1", body_bottom.x())
                    .set("y1", body_bottom.y())
                    .set("x2", body_bottom.x() + direction * 10.0 * scale)
                    .set("y2", body_bottom.y() + leg_length),
                &self.stroke
            )
            .set("stroke-linecap", "round");
            group = group.add(leg);
        }

        group.into()
    }

    fn stroke(&self) -> &Rc<StrokeDefinition> {
        &self.stroke
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_actor_renders_head_body_and_limbs() {
        let actor = ActorDefinition::new();
        let node = actor.render_to_svg(Size::new(24.0, 54.0), Point::new(100.0, 100.0));
        let svg = node.to_string();

        // One circle head and five lines (body, two arms, two legs)
        assert_eq!(svg.matches("<circle").count(), 1);
        assert_eq!(svg.matches("<line").count(), 5);
    }
}
