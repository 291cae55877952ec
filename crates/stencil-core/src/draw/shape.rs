//! Shape definitions and the connector-trimming intersection helpers.
//!
//! This module provides the [`ShapeDefinition`] trait for rendering diagram
//! element shapes (actors, use-case ovals, rounded rectangles, grouping
//! boxes). Shapes receive their size from the element tables; nothing is
//! computed from content.

use std::rc::Rc;

use crate::{
    draw::StrokeDefinition,
    geometry::{Point, Size},
};

mod actor;
mod group_box;
mod oval;
mod rectangle;

pub use actor::ActorDefinition;
pub use group_box::GroupBoxDefinition;
pub use oval::OvalDefinition;
pub use rectangle::RectangleDefinition;

/// A trait for shape definitions that provide stateless rendering.
pub trait ShapeDefinition: std::fmt::Debug {
    /// Find the point where a line from the shape center `a` toward `b`
    /// crosses the shape outline, for a shape of size `a_size` centered at
    /// `a`. Connectors are trimmed to this point so lines stop at borders.
    fn find_intersection(&self, a: Point, b: Point, a_size: Size) -> Point {
        find_rectangle_intersection(a, b, a_size)
    }

    /// Renders this shape to an SVG node element.
    ///
    /// `position` is the center of the shape; `size` its outer dimensions.
    fn render_to_svg(&self, size: Size, position: Point) -> Box<dyn svg::Node>;

    /// Get the stroke definition for the shape outline.
    fn stroke(&self) -> &Rc<StrokeDefinition>;
}

pub(crate) fn find_rectangle_intersection(a: Point, b: Point, a_size: Size) -> Point {
    let half_width = a_size.width() / 2.0;
    let half_height = a_size.height() / 2.0;

    // Rectangle center is at a
    let rect_center = a;

    let dist = b.sub_point(a);

    let length = dist.hypot();
    if length < 0.001 {
        // Avoid division by zero
        return b;
    }

    let dx_norm = dist.x() / length;
    let dy_norm = dist.y() / length;

    // Distance along the ray to each edge; the smallest positive t that
    // stays within the edge segment wins.
    let t_top = (rect_center.y() - half_height - a.y()) / dy_norm;
    let t_bottom = (rect_center.y() + half_height - a.y()) / dy_norm;
    let t_left = (rect_center.x() - half_width - a.x()) / dx_norm;
    let t_right = (rect_center.x() + half_width - a.x()) / dx_norm;

    let mut t = f32::MAX;

    if t_top.is_finite() && t_top > 0.0 {
        let x = dx_norm.mul_add(t_top, a.x());
        if x >= rect_center.x() - half_width && x <= rect_center.x() + half_width {
            t = t_top;
        }
    }

    if t_bottom.is_finite() && t_bottom > 0.0 && t_bottom < t {
        let x = dx_norm.mul_add(t_bottom, a.x());
        if x >= rect_center.x() - half_width && x <= rect_center.x() + half_width {
            t = t_bottom;
        }
    }

    if t_left.is_finite() && t_left > 0.0 && t_left < t {
        let y = dy_norm.mul_add(t_left, a.y());
        if y >= rect_center.y() - half_height && y <= rect_center.y() + half_height {
            t = t_left;
        }
    }

    if t_right.is_finite() && t_right > 0.0 && t_right < t {
        let y = dy_norm.mul_add(t_right, a.y());
        if y >= rect_center.y() - half_height && y <= rect_center.y() + half_height {
            t = t_right;
        }
    }

    if t == f32::MAX || !t.is_finite() {
        return b; // Fallback if no intersection found
    }

    Point::new(dx_norm.mul_add(t, a.x()), dy_norm.mul_add(t, a.y()))
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    fn assert_point_eq(actual: Point, expected: Point) {
        assert_approx_eq!(f32, actual.x(), expected.x());
        assert_approx_eq!(f32, actual.y(), expected.y());
    }

    #[test]
    fn test_intersection_from_right() {
        // Ray from center (100,100) going right should hit the right edge
        let a = Point::new(100.0, 100.0);
        let b = Point::new(200.0, 100.0);
        let size = Size::new(40.0, 40.0);

        let result = find_rectangle_intersection(a, b, size);

        assert_point_eq(result, Point::new(120.0, 100.0));
    }

    #[test]
    fn test_intersection_from_top() {
        let a = Point::new(100.0, 100.0);
        let b = Point::new(100.0, 0.0);
        let size = Size::new(40.0, 40.0);

        let result = find_rectangle_intersection(a, b, size);

        assert_point_eq(result, Point::new(100.0, 80.0));
    }

    #[test]
    fn test_intersection_diagonal_hits_corner() {
        // 45-degree diagonal on a square hits the corner
        let a = Point::new(100.0, 100.0);
        let b = Point::new(200.0, 200.0);
        let size = Size::new(40.0, 40.0);

        let result = find_rectangle_intersection(a, b, size);

        assert_point_eq(result, Point::new(120.0, 120.0));
    }

    #[test]
    fn test_intersection_same_point_falls_back() {
        let a = Point::new(100.0, 100.0);
        let b = Point::new(100.0, 100.0);
        let size = Size::new(40.0, 40.0);

        let result = find_rectangle_intersection(a, b, size);

        assert_point_eq(result, b);
    }

    #[test]
    fn test_intersection_zero_size_falls_back() {
        // Degenerate rectangle: edges collapse to the center
        let a = Point::new(100.0, 100.0);
        let b = Point::new(200.0, 100.0);
        let size = Size::new(0.0, 0.0);

        let result = find_rectangle_intersection(a, b, size);

        assert_point_eq(result, b);
    }
}

#[cfg(test)]
mod proptest_tests {
    use float_cmp::approx_eq;
    use proptest::prelude::*;

    use super::*;

    fn point_strategy() -> impl Strategy<Value = Point> {
        (-1000.0f32..1000.0, -1000.0f32..1000.0).prop_map(|(x, y)| Point::new(x, y))
    }

    fn size_strategy() -> impl Strategy<Value = Size> {
        (0.0f32..1000.0, 0.0f32..1000.0).prop_map(|(w, h)| Size::new(w, h))
    }

    /// The intersection result must always have finite coordinates.
    fn check_intersection_result_is_finite(
        a: Point,
        b: Point,
        size: Size,
    ) -> Result<(), TestCaseError> {
        let result = find_rectangle_intersection(a, b, size);

        prop_assert!(result.x().is_finite());
        prop_assert!(result.y().is_finite());
        Ok(())
    }

    /// The intersection lies on the rectangle boundary or equals b (fallback).
    fn check_intersection_on_boundary_or_fallback(
        a: Point,
        b: Point,
        size: Size,
    ) -> Result<(), TestCaseError> {
        let result = find_rectangle_intersection(a, b, size);

        let half_w = size.width() / 2.0;
        let half_h = size.height() / 2.0;

        let on_left = approx_eq!(f32, result.x(), a.x() - half_w, epsilon = 0.1);
        let on_right = approx_eq!(f32, result.x(), a.x() + half_w, epsilon = 0.1);
        let on_top = approx_eq!(f32, result.y(), a.y() - half_h, epsilon = 0.1);
        let on_bottom = approx_eq!(f32, result.y(), a.y() + half_h, epsilon = 0.1);

        let is_fallback = approx_eq!(f32, result.x(), b.x(), epsilon = 0.1)
            && approx_eq!(f32, result.y(), b.y(), epsilon = 0.1);

        prop_assert!(
            on_left || on_right || on_top || on_bottom || is_fallback,
            "Result {result:?} is neither on boundary of rect at {a:?} with size {size:?} nor fallback to {b:?}"
        );
        Ok(())
    }

    proptest! {
        #[test]
        fn intersection_result_is_finite(a in point_strategy(), b in point_strategy(), size in size_strategy()) {
            check_intersection_result_is_finite(a, b, size)?;
        }

        #[test]
        fn intersection_on_boundary_or_fallback(a in point_strategy(), b in point_strategy(), size in size_strategy()) {
            check_intersection_on_boundary_or_fallback(a, b, size)?;
        }
    }
}
