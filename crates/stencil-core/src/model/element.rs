//! Diagram element types.

use crate::{
    color::Color,
    geometry::{Point, Size},
    identifier::Id,
};

/// The kind of a diagram element, deciding which shape renders it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    /// An actor interacting with the system (stick figure)
    Actor,
    /// A process node / use case (oval or rounded rectangle)
    Node,
    /// A grouping box or system boundary scoping other elements
    Group,
}

/// Visual attributes for an element.
///
/// Unset fields fall back to per-kind renderer defaults, so plain figures
/// only declare colors where the original layout did.
#[derive(Debug, Clone, Default)]
pub struct ElementStyle {
    fill_color: Option<Color>,
    border_color: Option<Color>,
    border_width: Option<f32>,
}

impl ElementStyle {
    /// Creates an empty style (all renderer defaults).
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the fill color (builder style).
    pub fn with_fill(mut self, color: Color) -> Self {
        self.fill_color = Some(color);
        self
    }

    /// Sets the border color (builder style).
    pub fn with_border(mut self, color: Color) -> Self {
        self.border_color = Some(color);
        self
    }

    /// Sets the border width (builder style).
    pub fn with_border_width(mut self, width: f32) -> Self {
        self.border_width = Some(width);
        self
    }

    /// The fill color, if declared.
    pub fn fill_color(&self) -> Option<&Color> {
        self.fill_color.as_ref()
    }

    /// The border color, if declared.
    pub fn border_color(&self) -> Option<&Color> {
        self.border_color.as_ref()
    }

    /// The border width, if declared.
    pub fn border_width(&self) -> Option<f32> {
        self.border_width
    }

    /// Returns true if no attribute is declared.
    pub fn is_empty(&self) -> bool {
        self.fill_color.is_none() && self.border_color.is_none() && self.border_width.is_none()
    }
}

/// A single diagram element with identity, label, and literal geometry.
///
/// `position` is the element center in the diagram's planar coordinate
/// space; `size` its width and height. The label may contain embedded `\n`
/// line breaks. Elements are immutable once built.
#[derive(Debug, Clone)]
pub struct Element {
    id: Id,
    kind: ElementKind,
    label: String,
    position: Point,
    size: Size,
    style: ElementStyle,
    parent: Option<Id>,
}

impl Element {
    /// Create a new element.
    pub fn new(
        id: impl Into<Id>,
        kind: ElementKind,
        label: impl Into<String>,
        position: Point,
        size: Size,
    ) -> Self {
        Self {
            id: id.into(),
            kind,
            label: label.into(),
            position,
            size,
            style: ElementStyle::default(),
            parent: None,
        }
    }

    /// Attach a visual style (builder style).
    pub fn with_style(mut self, style: ElementStyle) -> Self {
        self.style = style;
        self
    }

    /// Declare this element as belonging to a grouping box (builder style).
    pub fn with_parent(mut self, parent: impl Into<Id>) -> Self {
        self.parent = Some(parent.into());
        self
    }

    /// Get the element identifier.
    pub fn id(&self) -> Id {
        self.id
    }

    /// Get the element kind.
    pub fn kind(&self) -> ElementKind {
        self.kind
    }

    /// Get the display label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Get the element center position.
    pub fn position(&self) -> Point {
        self.position
    }

    /// Get the element size.
    pub fn size(&self) -> Size {
        self.size
    }

    /// Get the element style.
    pub fn style(&self) -> &ElementStyle {
        &self.style
    }

    /// Get the parent group id, if any.
    pub fn parent(&self) -> Option<Id> {
        self.parent
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_builder() {
        let element = Element::new(
            "login",
            ElementKind::Node,
            "Login",
            Point::new(775.0, 270.0),
            Size::new(280.0, 60.0),
        )
        .with_parent("authentication");

        assert_eq!(element.id(), "login");
        assert_eq!(element.kind(), ElementKind::Node);
        assert_eq!(element.label(), "Login");
        assert_eq!(element.parent().unwrap(), "authentication");
        assert!(element.style().is_empty());
    }

    #[test]
    fn test_element_style() {
        let style = ElementStyle::new()
            .with_fill(Color::new("#E8F4FD").unwrap())
            .with_border(Color::new("#1976D2").unwrap())
            .with_border_width(3.0);

        assert!(style.fill_color().is_some());
        assert!(style.border_color().is_some());
        assert_eq!(style.border_width(), Some(3.0));
        assert!(!style.is_empty());
    }
}
