//! Stroke and line-style definitions.
//!
//! A single stroke definition carries everything needed to render lines and
//! borders: color, width, dash pattern, cap, and join. The
//! [`apply_stroke!`](crate::apply_stroke!) macro applies all of it to an SVG
//! element at once.
//!
//! The terminology follows SVG/CSS: `style` maps to `stroke-dasharray`,
//! `cap` to `stroke-linecap`, `join` to `stroke-linejoin`.

use std::str::FromStr;

use crate::color::Color;

/// Defines the visual style of a stroke, including dash patterns.
///
/// # SVG Mapping
///
/// - `Solid`: no dasharray attribute
/// - `Dashed`: "5,5"
/// - `Dotted`: "2,3"
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum StrokeStyle {
    /// Solid continuous line (default)
    #[default]
    Solid,
    /// Dashed line with equal dash and gap lengths (5px dash, 5px gap)
    Dashed,
    /// Dotted line with small dots (2px dot, 3px gap)
    Dotted,
}

impl FromStr for StrokeStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "solid" => Ok(Self::Solid),
            "dashed" => Ok(Self::Dashed),
            "dotted" => Ok(Self::Dotted),
            _ => Err(format!(
                "invalid stroke style `{s}`, valid values: solid, dashed, dotted"
            )),
        }
    }
}

impl StrokeStyle {
    /// Returns the SVG dasharray value for this style, or None for solid lines
    pub fn to_svg_value(&self) -> Option<&'static str> {
        match self {
            Self::Solid => None,
            Self::Dashed => Some("5,5"),
            Self::Dotted => Some("2,3"),
        }
    }
}

/// Defines how line endpoints are rendered.
///
/// Maps directly to SVG `stroke-linecap` attribute values.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum StrokeCap {
    /// Flat cap at the exact endpoint (SVG default)
    #[default]
    Butt,
    /// Rounded cap extending beyond the endpoint by half the stroke width
    Round,
    /// Square cap extending beyond the endpoint by half the stroke width
    Square,
}

impl StrokeCap {
    /// Returns the SVG stroke-linecap value
    pub fn to_svg_value(&self) -> &'static str {
        match self {
            Self::Butt => "butt",
            Self::Round => "round",
            Self::Square => "square",
        }
    }
}

/// Defines how line corners (joins) are rendered.
///
/// Maps directly to SVG `stroke-linejoin` attribute values.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum StrokeJoin {
    /// Sharp corner with mitered point (SVG default)
    #[default]
    Miter,
    /// Rounded corner
    Round,
    /// Beveled (cut-off) corner
    Bevel,
}

impl StrokeJoin {
    /// Returns the SVG stroke-linejoin value
    pub fn to_svg_value(&self) -> &'static str {
        match self {
            Self::Miter => "miter",
            Self::Round => "round",
            Self::Bevel => "bevel",
        }
    }
}

/// A stroke definition for rendering lines and borders.
///
/// # Examples
///
/// ```
/// use stencil_core::draw::{StrokeDefinition, StrokeStyle, StrokeCap};
/// use stencil_core::color::Color;
///
/// // Simple solid stroke
/// let stroke = StrokeDefinition::solid(Color::new("black").unwrap(), 2.0);
///
/// // Dashed stroke with rounded caps
/// let mut stroke = StrokeDefinition::dashed(Color::new("blue").unwrap(), 1.5);
/// stroke.set_cap(StrokeCap::Round);
/// ```
#[derive(Debug, Clone)]
pub struct StrokeDefinition {
    color: Color,
    width: f32,
    style: StrokeStyle,
    cap: StrokeCap,
    join: StrokeJoin,
}

impl StrokeDefinition {
    /// Creates a new stroke with the given color and width.
    ///
    /// Other properties use their default values (solid, butt cap, miter join).
    pub fn new(color: Color, width: f32) -> Self {
        Self {
            color,
            width,
            ..Self::default()
        }
    }

    /// Creates a solid stroke (convenience constructor).
    pub fn solid(color: Color, width: f32) -> Self {
        Self::new(color, width)
    }

    /// Creates a dashed stroke (convenience constructor).
    pub fn dashed(color: Color, width: f32) -> Self {
        let mut stroke = Self::new(color, width);
        stroke.set_style(StrokeStyle::Dashed);
        stroke
    }

    /// Creates a dotted stroke (convenience constructor).
    pub fn dotted(color: Color, width: f32) -> Self {
        let mut stroke = Self::new(color, width);
        stroke.set_style(StrokeStyle::Dotted);
        stroke
    }

    /// Creates a stroke from the given style enum value.
    pub fn with_style(color: Color, width: f32, style: StrokeStyle) -> Self {
        let mut stroke = Self::new(color, width);
        stroke.set_style(style);
        stroke
    }

    /// Returns the stroke color.
    pub fn color(&self) -> &Color {
        &self.color
    }

    /// Returns the stroke width.
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Returns the stroke style.
    pub fn style(&self) -> StrokeStyle {
        self.style
    }

    /// Returns the stroke cap style.
    pub fn cap(&self) -> StrokeCap {
        self.cap
    }

    /// Returns the stroke join style.
    pub fn join(&self) -> StrokeJoin {
        self.join
    }

    /// Sets the stroke color.
    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    /// Sets the stroke width.
    pub fn set_width(&mut self, width: f32) {
        self.width = width;
    }

    /// Sets the stroke style.
    pub fn set_style(&mut self, style: StrokeStyle) {
        self.style = style;
    }

    /// Sets the stroke cap style.
    pub fn set_cap(&mut self, cap: StrokeCap) {
        self.cap = cap;
    }

    /// Sets the stroke join style.
    pub fn set_join(&mut self, join: StrokeJoin) {
        self.join = join;
    }
}

impl Default for StrokeDefinition {
    fn default() -> Self {
        Self {
            color: Color::default(),
            width: 1.0,
            style: StrokeStyle::default(),
            cap: StrokeCap::default(),
            join: StrokeJoin::default(),
        }
    }
}

/// Apply all stroke attributes to an SVG element.
///
/// Applies the complete stroke definition including color, width, line cap,
/// line join, and dash pattern (if not solid) to any SVG element.
///
/// # Examples
///
/// ```
/// use stencil_core::draw::StrokeDefinition;
/// use stencil_core::color::Color;
/// use svg::node::element as svg_element;
///
/// let stroke = StrokeDefinition::solid(Color::new("black").unwrap(), 2.0);
/// let rect = svg_element::Rectangle::new()
///     .set("x", 0)
///     .set("y", 0)
///     .set("width", 100)
///     .set("height", 50);
///
/// let rect = stencil_core::apply_stroke!(rect, &stroke);
/// ```
#[macro_export]
macro_rules! apply_stroke {
    ($element:expr, $stroke:expr) => {{
        let mut elem = $element
            .set("stroke", $stroke.color().to_string())
            .set("stroke-width", $stroke.width())
            .set("stroke-linecap", $stroke.cap().to_svg_value())
            .set("stroke-linejoin", $stroke.join().to_svg_value());

        if let Some(dasharray) = $stroke.style().to_svg_value() {
            elem = elem.set("stroke-dasharray", dasharray);
        }

        elem
    }};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stroke_default() {
        let stroke = StrokeDefinition::default();
        assert_eq!(stroke.width(), 1.0);
        assert_eq!(stroke.style(), StrokeStyle::Solid);
        assert_eq!(stroke.cap(), StrokeCap::Butt);
        assert_eq!(stroke.join(), StrokeJoin::Miter);
    }

    #[test]
    fn test_stroke_constructors() {
        let color = Color::new("red").unwrap();

        let solid = StrokeDefinition::solid(color.clone(), 2.0);
        assert_eq!(solid.width(), 2.0);
        assert_eq!(solid.style(), StrokeStyle::Solid);

        let dashed = StrokeDefinition::dashed(color.clone(), 1.5);
        assert_eq!(dashed.style(), StrokeStyle::Dashed);

        let dotted = StrokeDefinition::dotted(color, 1.0);
        assert_eq!(dotted.style(), StrokeStyle::Dotted);
    }

    #[test]
    fn test_stroke_setters() {
        let mut stroke = StrokeDefinition::default();
        stroke.set_color(Color::new("green").unwrap());
        stroke.set_width(2.5);
        stroke.set_style(StrokeStyle::Dashed);
        stroke.set_cap(StrokeCap::Square);
        stroke.set_join(StrokeJoin::Bevel);

        assert_eq!(stroke.width(), 2.5);
        assert_eq!(stroke.style(), StrokeStyle::Dashed);
        assert_eq!(stroke.cap(), StrokeCap::Square);
        assert_eq!(stroke.join(), StrokeJoin::Bevel);
    }

    #[test]
    fn test_stroke_style_dasharray() {
        assert_eq!(StrokeStyle::Solid.to_svg_value(), None);
        assert_eq!(StrokeStyle::Dashed.to_svg_value(), Some("5,5"));
        assert_eq!(StrokeStyle::Dotted.to_svg_value(), Some("2,3"));
    }

    #[test]
    fn test_stroke_style_from_str() {
        assert_eq!(StrokeStyle::from_str("solid").unwrap(), StrokeStyle::Solid);
        assert_eq!(
            StrokeStyle::from_str("dashed").unwrap(),
            StrokeStyle::Dashed
        );
        assert_eq!(
            StrokeStyle::from_str("dotted").unwrap(),
            StrokeStyle::Dotted
        );
        assert!(StrokeStyle::from_str("wavy").is_err());
    }

    #[test]
    fn test_cap_and_join_svg_values() {
        assert_eq!(StrokeCap::Butt.to_svg_value(), "butt");
        assert_eq!(StrokeCap::Round.to_svg_value(), "round");
        assert_eq!(StrokeCap::Square.to_svg_value(), "square");
        assert_eq!(StrokeJoin::Miter.to_svg_value(), "miter");
        assert_eq!(StrokeJoin::Round.to_svg_value(), "round");
        assert_eq!(StrokeJoin::Bevel.to_svg_value(), "bevel");
    }
}
