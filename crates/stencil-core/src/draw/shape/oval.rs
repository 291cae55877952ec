use std::rc::Rc;

use svg::{self, node::element as svg_element};

use super::ShapeDefinition;
use crate::{
    apply_stroke,
    color::Color,
    draw::StrokeDefinition,
    geometry::{Point, Size},
};

/// Use-case oval shape definition.
#[derive(Debug, Clone)]
pub struct OvalDefinition {
    fill_color: Option<Color>,
    stroke: Rc<StrokeDefinition>,
}

impl OvalDefinition {
    /// Create a new oval definition with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an oval definition with the given fill and outline stroke.
    pub fn styled(fill_color: Option<Color>, stroke: Rc<StrokeDefinition>) -> Self {
        Self { fill_color, stroke }
    }

    fn fill_color(&self) -> Option<&Color> {
        self.fill_color.as_ref()
    }
}

impl Default for OvalDefinition {
    fn default() -> Self {
        Self {
            fill_color: Some(Color::new("white").expect("'white' is a valid CSS color")),
            stroke: Rc::new(StrokeDefinition::solid(Color::default(), 1.5)),
        }
    }
}

impl ShapeDefinition for OvalDefinition {
    fn find_intersection(&self, a: Point, b: Point, a_size: Size) -> Point {
        let half_width = a_size.width() / 2.0;
        let half_height = a_size.height() / 2.0;

        let dist = b.sub_point(a);

        let length = dist.hypot();
        if length < 0.001 {
            // Avoid division by zero
            return b;
        }

        let dx_norm = dist.x() / length;
        let dy_norm = dist.y() / length;

        // Radius of the ellipse at the direction angle:
        // r = (a*b) / sqrt((b*cos(theta))^2 + (a*sin(theta))^2)
        let angle = dy_norm.atan2(dx_norm);
        let cos_angle = angle.cos();
        let sin_angle = angle.sin();
        let radius =
            (half_width * half_height) / (half_height * cos_angle).hypot(half_width * sin_angle);

        Point::new(
            dx_norm.mul_add(radius, a.x()),
            dy_norm.mul_add(radius, a.y()),
        )
    }

    fn render_to_svg(&self, size: Size, position: Point) -> Box<dyn svg::Node> {
        let rx = size.width() / 2.0;
        let ry = size.height() / 2.0;

        let mut ellipse = svg_element::Ellipse::new()
            .set("cx", position.x())
            .set("cy", position.y())
            .set("rx", rx)
            .set("ry", ry)
            .set("fill", "white");
        ellipse = apply_stroke!(ellipse, &self.stroke);

        if let Some(fill_color) = self.fill_color() {
            ellipse = ellipse.set("fill", fill_color.to_string());
        }

        ellipse.into()
    }

    fn stroke(&self) -> &Rc<StrokeDefinition> {
        &self.stroke
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    #[test]
    fn test_oval_renders_ellipse_with_radii() {
        let oval = OvalDefinition::new();
        let node = oval.render_to_svg(Size::new(280.0, 60.0), Point::new(775.0, 270.0));
        let svg = node.to_string();
        assert!(svg.contains("<ellipse"));
        assert!(svg.contains("rx=\"140\""));
        assert!(svg.contains("ry=\"30\""));
    }

    #[test]
    fn test_oval_intersection_on_major_axis() {
        let oval = OvalDefinition::new();
        let a = Point::new(0.0, 0.0);
        let b = Point::new(100.0, 0.0);
        let hit = oval.find_intersection(a, b, Size::new(80.0, 40.0));
        assert_approx_eq!(f32, hit.x(), 40.0, epsilon = 0.01);
        assert_approx_eq!(f32, hit.y(), 0.0, epsilon = 0.01);
    }

    #[test]
    fn test_oval_intersection_on_minor_axis() {
        let oval = OvalDefinition::new();
        let a = Point::new(0.0, 0.0);
        let b = Point::new(0.0, -100.0);
        let hit = oval.find_intersection(a, b, Size::new(80.0, 40.0));
        assert_approx_eq!(f32, hit.x(), 0.0, epsilon = 0.01);
        assert_approx_eq!(f32, hit.y(), -20.0, epsilon = 0.01);
    }

    #[test]
    fn test_oval_intersection_same_point_falls_back() {
        let oval = OvalDefinition::new();
        let a = Point::new(5.0, 5.0);
        let hit = oval.find_intersection(a, a, Size::new(80.0, 40.0));
        assert_approx_eq!(f32, hit.x(), a.x());
        assert_approx_eq!(f32, hit.y(), a.y());
    }
}
