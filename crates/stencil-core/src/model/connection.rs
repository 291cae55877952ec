//! Connection types between diagram elements.

use crate::{
    draw::{Direction, StrokeStyle},
    identifier::Id,
};

/// A connection between two declared elements, carrying direction, an
/// optional relationship label (e.g. "includes"), and a line style.
///
/// Both endpoints must reference declared elements; this is checked by
/// [`DiagramSpec::validate`](crate::model::DiagramSpec::validate).
#[derive(Debug, Clone)]
pub struct Connection {
    source: Id,
    target: Id,
    direction: Direction,
    label: Option<String>,
    style: StrokeStyle,
}

impl Connection {
    /// Create a plain undirected solid connection between two element ids.
    pub fn new(source: impl Into<Id>, target: impl Into<Id>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            direction: Direction::None,
            label: None,
            style: StrokeStyle::Solid,
        }
    }

    /// Set the direction (builder style).
    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    /// Set the relationship label (builder style).
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Set the line style (builder style).
    pub fn with_style(mut self, style: StrokeStyle) -> Self {
        self.style = style;
        self
    }

    /// Get the source element id.
    pub fn source(&self) -> Id {
        self.source
    }

    /// Get the target element id.
    pub fn target(&self) -> Id {
        self.target
    }

    /// Get the connection direction.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Get the relationship label, if any.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Get the line style.
    pub fn style(&self) -> StrokeStyle {
        self.style
    }
}
