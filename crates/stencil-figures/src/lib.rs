//! Canonical figure definitions for the report.
//!
//! Exactly one generator exists per output image. Each figure builds its
//! [`DiagramSpec`](stencil_core::model::DiagramSpec) from literal layout
//! tables; the registry records which rendering strategy and output
//! geometry belong to it.

mod admin;
mod agency;
mod architecture;
mod customer;

pub use admin::admin_usecase;
pub use agency::agency_usecase;
pub use architecture::architecture_overview;
pub use customer::customer_usecase;

use stencil_core::model::DiagramSpec;

/// Which renderer strategy a figure uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Serialize to Mermaid markup and compile with the external renderer
    Mermaid,
    /// Draw directly to SVG in-process
    Svg,
}

/// A registry entry: one canonical generator for one output image.
pub struct Figure {
    id: &'static str,
    title: &'static str,
    output: &'static str,
    strategy: Strategy,
    width: u32,
    height: u32,
    scale: f32,
    build: fn() -> DiagramSpec,
}

impl Figure {
    /// Stable figure id used on the command line.
    pub fn id(&self) -> &'static str {
        self.id
    }

    /// Human-readable figure title.
    pub fn title(&self) -> &'static str {
        self.title
    }

    /// Output file stem (without directory or extension).
    pub fn output(&self) -> &'static str {
        self.output
    }

    /// The rendering strategy for this figure.
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Requested pixel width of the output image.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Requested pixel height of the output image.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Resolution multiplier for the output image.
    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Build this figure's diagram spec from its literal tables.
    pub fn spec(&self) -> DiagramSpec {
        (self.build)()
    }
}

/// All canonical figures in report order.
pub const FIGURES: &[Figure] = &[
    Figure {
        id: "architecture",
        title: "Figure 1: System Architecture Overview",
        output: "system-architecture-overview",
        strategy: Strategy::Mermaid,
        width: 1200,
        height: 900,
        scale: 2.0,
        build: architecture_overview,
    },
    Figure {
        id: "customer-usecase",
        title: "Figure 2.1: Customer Use Case Diagram",
        output: "customer-usecase-diagram",
        strategy: Strategy::Svg,
        width: 2200,
        height: 1300,
        scale: 1.0,
        build: customer_usecase,
    },
    Figure {
        id: "agency-usecase",
        title: "Figure 2.2: Agency Use Case Diagram",
        output: "agency-usecase-diagram",
        strategy: Strategy::Svg,
        width: 1900,
        height: 1000,
        scale: 1.0,
        build: agency_usecase,
    },
    Figure {
        id: "admin-usecase",
        title: "Figure 2.3: Administrator Use Case Diagram",
        output: "admin-usecase-diagram",
        strategy: Strategy::Svg,
        width: 1900,
        height: 1000,
        scale: 1.0,
        build: admin_usecase,
    },
];

/// Look up a figure by its stable id.
pub fn by_id(id: &str) -> Option<&'static Figure> {
    FIGURES.iter().find(|figure| figure.id == id)
}
