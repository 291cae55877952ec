//! Figures exercised through the real renderers.

use stencil::render::{RenderTarget, SvgRenderer, mermaid};
use stencil_figures::{architecture_overview, by_id, customer_usecase};

#[test]
fn architecture_serializes_to_complete_mermaid_markup() {
    let markup = mermaid::serialize(&architecture_overview());

    assert!(markup.starts_with("graph TD"));

    // Four layer subgraphs
    assert_eq!(markup.matches("subgraph").count(), 4);
    assert!(markup.contains("subgraph presentation[\"PRESENTATION LAYER\"]"));

    // Labeled edges survive serialization
    assert!(markup.contains("angular -->|\"HTTPS REST\"| api"));
    assert!(markup.contains("api <-->|\"JWT\"| keycloak"));
    assert!(markup.contains("docker --> kubernetes"));

    // Multi-line node labels become <br/> breaks
    assert!(markup.contains("Angular Frontend<br/><br/>"));

    // Per-layer styling is emitted as classes
    assert!(markup.contains("classDef"));
    assert!(markup.contains("class docker,kubernetes,gitlab"));
}

#[test]
fn customer_figure_draws_every_declared_element() {
    let figure = by_id("customer-usecase").unwrap();
    let target = RenderTarget::new("unused.svg", figure.width(), figure.height());

    let svg = SvgRenderer::new()
        .render_to_string(&customer_usecase(), &target)
        .unwrap();

    // 18 use-case ovals, 2 stick-figure actors, 7 grouping boxes
    assert_eq!(svg.matches("<ellipse").count(), 18);
    assert_eq!(svg.matches("class=\"actor\"").count(), 2);

    // Every use case label is present
    for label in ["Book Vehicle", "Use Chatbot", "Download Contract"] {
        assert!(svg.contains(label), "missing label {label}");
    }

    // Both includes relations draw directed arrowheads with their label
    assert!(svg.matches("\u{ab}includes\u{bb}").count() >= 2);
}
