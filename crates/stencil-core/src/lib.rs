//! Stencil Core Types and Definitions
//!
//! This crate provides the foundational types for the stencil figure
//! generator. It includes:
//!
//! - **Identifiers**: Efficient string-interned identifiers ([`identifier::Id`])
//! - **Colors**: Color handling with CSS color support ([`color::Color`])
//! - **Geometry**: Basic geometric types ([`geometry`] module)
//! - **Draw**: SVG drawing primitives for diagram elements ([`draw`] module)
//! - **Model**: The neutral diagram description ([`model`] module)

pub mod color;
pub mod draw;
pub mod geometry;
pub mod identifier;
pub mod model;
