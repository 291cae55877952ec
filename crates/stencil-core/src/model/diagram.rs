//! The diagram spec: the unit handed to a renderer.

use std::collections::{HashMap, HashSet};

use thiserror::Error;

use crate::{
    color::Color,
    geometry::Size,
    identifier::Id,
    model::{Connection, Element, ElementKind},
};

/// Referential-integrity errors in a diagram description.
///
/// These indicate a malformed figure definition and are caught by the figure
/// unit tests rather than surfacing at render time for the built-in figures.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("duplicate element id `{id}`")]
    DuplicateId { id: String },

    #[error("connection `{from_id}` -> `{target}` references undeclared element `{unknown}`")]
    UnknownEndpoint {
        from_id: String,
        target: String,
        unknown: String,
    },

    #[error("element `{child}` references undeclared parent group `{parent}`")]
    UnknownParent { child: String, parent: String },

    #[error("element `{parent}` is used as parent of `{child}` but is not a group")]
    ParentNotGroup { parent: String, child: String },
}

/// An ordered collection of elements and connections plus global metadata.
///
/// Element insertion order is rendering order within a layer, so figures
/// declare boundaries before groups before nodes. A spec may be rendered to
/// more than one target; rendering never mutates it.
#[derive(Debug, Clone)]
pub struct DiagramSpec {
    title: String,
    canvas: Size,
    background_color: Option<Color>,
    elements: Vec<Element>,
    connections: Vec<Connection>,
}

impl DiagramSpec {
    /// Create an empty spec with a title and canvas size.
    pub fn new(title: impl Into<String>, canvas: Size) -> Self {
        Self {
            title: title.into(),
            canvas,
            background_color: None,
            elements: Vec::new(),
            connections: Vec::new(),
        }
    }

    /// Set the background color (builder style).
    pub fn with_background_color(mut self, color: Color) -> Self {
        self.background_color = Some(color);
        self
    }

    /// Append an element. Order is preserved and affects layering.
    pub fn add_element(&mut self, element: Element) {
        self.elements.push(element);
    }

    /// Append a connection.
    pub fn add_connection(&mut self, connection: Connection) {
        self.connections.push(connection);
    }

    /// Get the diagram title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Get the canvas size in diagram coordinates.
    pub fn canvas(&self) -> Size {
        self.canvas
    }

    /// Get the background color, if declared.
    pub fn background_color(&self) -> Option<&Color> {
        self.background_color.as_ref()
    }

    /// Borrow the elements in declaration order.
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// Borrow the connections in declaration order.
    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }

    /// Look up an element by id.
    pub fn element(&self, id: Id) -> Option<&Element> {
        self.elements.iter().find(|e| e.id() == id)
    }

    /// Check referential integrity: unique ids, declared connection
    /// endpoints, and parents that exist and are groups.
    pub fn validate(&self) -> Result<(), ModelError> {
        let mut kinds: HashMap<Id, ElementKind> = HashMap::new();
        let mut seen: HashSet<Id> = HashSet::new();

        for element in &self.elements {
            if !seen.insert(element.id()) {
                return Err(ModelError::DuplicateId {
                    id: element.id().to_string(),
                });
            }
            kinds.insert(element.id(), element.kind());
        }

        for element in &self.elements {
            if let Some(parent) = element.parent() {
                match kinds.get(&parent) {
                    None => {
                        return Err(ModelError::UnknownParent {
                            child: element.id().to_string(),
                            parent: parent.to_string(),
                        });
                    }
                    Some(kind) if *kind != ElementKind::Group => {
                        return Err(ModelError::ParentNotGroup {
                            parent: parent.to_string(),
                            child: element.id().to_string(),
                        });
                    }
                    Some(_) => {}
                }
            }
        }

        for connection in &self.connections {
            for endpoint in [connection.source(), connection.target()] {
                if !kinds.contains_key(&endpoint) {
                    return Err(ModelError::UnknownEndpoint {
                        from_id: connection.source().to_string(),
                        target: connection.target().to_string(),
                        unknown: endpoint.to_string(),
                    });
                }
            }
        }

        Ok(())
    }
}
