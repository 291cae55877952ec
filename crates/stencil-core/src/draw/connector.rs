//! Connection line rendering between diagram elements.
//!
//! A connector is a straight line between two trimmed endpoints, optionally
//! carrying arrowheads (per [`Direction`]) and a relationship label drawn at
//! the midpoint over a background so it stays readable across the line.

use std::{rc::Rc, str::FromStr};

use svg::{self, node::element as svg_element};

use crate::{
    apply_stroke,
    draw::{Drawable, LayeredOutput, RenderLayer, StrokeDefinition, Text, TextDefinition},
    geometry::Point,
};

/// Arrowhead length in pixels.
const HEAD_LENGTH: f32 = 12.0;
/// Half of the arrowhead base width in pixels.
const HEAD_HALF_WIDTH: f32 = 5.0;

/// Direction of a connection between two elements.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Direction {
    /// Plain association line, no arrowheads
    #[default]
    None,
    /// Arrowhead at the target end
    Forward,
    /// Arrowheads at both ends
    Bidirectional,
}

impl FromStr for Direction {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(Self::None),
            "forward" => Ok(Self::Forward),
            "bidirectional" => Ok(Self::Bidirectional),
            _ => Err("Invalid direction"),
        }
    }
}

/// Visual definition for connection lines.
#[derive(Debug, Clone)]
pub struct ConnectorDefinition {
    stroke: Rc<StrokeDefinition>,
    text: Rc<TextDefinition>,
}

impl ConnectorDefinition {
    /// Create a connector definition from a stroke and a label text style.
    pub fn new(stroke: Rc<StrokeDefinition>, text: Rc<TextDefinition>) -> Self {
        Self { stroke, text }
    }

    /// Get the stroke definition for the connector line.
    pub fn stroke(&self) -> &Rc<StrokeDefinition> {
        &self.stroke
    }

    /// Render a connector between two already-trimmed endpoints.
    pub fn render(
        &self,
        start: Point,
        end: Point,
        direction: Direction,
        label: Option<&str>,
    ) -> LayeredOutput {
        let mut output = LayeredOutput::new();

        let line = apply_stroke!(
            svg_element::Line::new()
                .set("x1", start.x())
                .set("y1", start.y())
                .set("x2", end.x())
                .set("y2", end.y()),
            &self.stroke
        );
        output.add_to_layer(RenderLayer::Connector, Box::new(line));

        match direction {
            Direction::None => {}
            Direction::Forward => {
                if let Some(head) = self.arrowhead(start, end) {
                    output.add_to_layer(RenderLayer::Connector, head);
                }
            }
            Direction::Bidirectional => {
                if let Some(head) = self.arrowhead(start, end) {
                    output.add_to_layer(RenderLayer::Connector, head);
                }
                if let Some(head) = self.arrowhead(end, start) {
                    output.add_to_layer(RenderLayer::Connector, head);
                }
            }
        }

        if let Some(label) = label {
            let text = Text::new(&self.text, label);
            output.merge(text.render_to_layers(start.midpoint(end)));
        }

        output
    }

    /// Build a filled triangle arrowhead pointing from `from` to `tip`.
    ///
    /// Returns None for degenerate (zero-length) connectors.
    fn arrowhead(&self, from: Point, tip: Point) -> Option<Box<dyn svg::Node>> {
        let dist = tip.sub_point(from);
        let length = dist.hypot();
        if length < 0.001 {
            return None;
        }

        let dx = dist.x() / length;
        let dy = dist.y() / length;

        let base = Point::new(
            tip.x() - dx * HEAD_LENGTH,
            tip.y() - dy * HEAD_LENGTH,
        );
        // Perpendicular unit vector
        let px = -dy;
        let py = dx;

        let left = Point::new(base.x() + px * HEAD_HALF_WIDTH, base.y() + py * HEAD_HALF_WIDTH);
        let right = Point::new(base.x() - px * HEAD_HALF_WIDTH, base.y() - py * HEAD_HALF_WIDTH);

        let points = format!(
            "{},{} {},{} {},{}",
            tip.x(),
            tip.y(),
            left.x(),
            left.y(),
            right.x(),
            right.y()
        );

        let head = svg_element::Polygon::new()
            .set("points", points)
            .set("fill", self.stroke.color().to_string());
        Some(Box::new(head))
    }
}

impl Default for ConnectorDefinition {
    fn default() -> Self {
        Self {
            stroke: Rc::new(StrokeDefinition::default()),
            text: Rc::new(TextDefinition::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;

    fn render_to_string(output: LayeredOutput) -> String {
        output.render().iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn test_plain_connector_is_a_single_line() {
        let connector = ConnectorDefinition::default();
        let svg = render_to_string(connector.render(
            Point::new(0.0, 0.0),
            Point::new(100.0, 0.0),
            Direction::None,
            None,
        ));
        assert_eq!(svg.matches("<line").count(), 1);
        assert!(!svg.contains("<polygon"));
    }

    #[test]
    fn test_forward_connector_has_one_arrowhead() {
        let connector = ConnectorDefinition::default();
        let svg = render_to_string(connector.render(
            Point::new(0.0, 0.0),
            Point::new(100.0, 0.0),
            Direction::Forward,
            None,
        ));
        assert_eq!(svg.matches("<polygon").count(), 1);
    }

    #[test]
    fn test_bidirectional_connector_has_two_arrowheads() {
        let connector = ConnectorDefinition::default();
        let svg = render_to_string(connector.render(
            Point::new(0.0, 0.0),
            Point::new(0.0, 80.0),
            Direction::Bidirectional,
            None,
        ));
        assert_eq!(svg.matches("<polygon").count(), 2);
    }

    #[test]
    fn test_degenerate_connector_skips_arrowheads() {
        let connector = ConnectorDefinition::default();
        let svg = render_to_string(connector.render(
            Point::new(5.0, 5.0),
            Point::new(5.0, 5.0),
            Direction::Forward,
            None,
        ));
        assert!(!svg.contains("<polygon"));
    }

    #[test]
    fn test_labeled_connector_renders_text_at_midpoint() {
        let stroke = Rc::new(StrokeDefinition::solid(Color::new("#1976D2").unwrap(), 2.0));
        let text = Rc::new(TextDefinition::default());
        let connector = ConnectorDefinition::new(stroke, text);
        let svg = render_to_string(connector.render(
            Point::new(0.0, 0.0),
            Point::new(200.0, 0.0),
            Direction::Forward,
            Some("includes"),
        ));
        assert!(svg.contains("includes"));
        assert!(svg.contains("x=\"100\""));
    }
}
