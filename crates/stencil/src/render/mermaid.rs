//! Text-markup rendering strategy via an external Mermaid compiler.
//!
//! The spec is serialized to `graph TD` markup, saved next to the output
//! image for reproducibility and manual editing, then compiled by the
//! configured command (`mmdc` by default). The process exit status decides
//! success; a missing binary is a recoverable condition with a manual
//! fallback, not a crash.

use std::{fmt::Write as _, fs, io, process::Command};

use log::{debug, info};

use stencil_core::{
    draw::{Direction, StrokeStyle},
    identifier::Id,
    model::{DiagramSpec, Element, ElementKind},
};

use crate::render::{
    Background, RenderError, RenderOutcome, RenderTarget, Renderer, distribute,
};

/// Serialize a diagram spec to Mermaid `graph TD` markup.
///
/// Groups become `subgraph` blocks (nested per the element parent chain),
/// actors become circle nodes, process nodes become stadium nodes, and
/// element styles become deduplicated `classDef` entries.
pub fn serialize(spec: &DiagramSpec) -> String {
    let mut out = String::from("graph TD\n");

    for element in top_level(spec) {
        emit_element(spec, element, 1, &mut out);
    }

    if !spec.connections().is_empty() {
        out.push('\n');
    }
    for connection in spec.connections() {
        let arrow = arrow_token(connection.style(), connection.direction());
        let line = match connection.label() {
            Some(label) => format!(
                "    {} {}|\"{}\"| {}\n",
                connection.source(),
                arrow,
                escape(label),
                connection.target()
            ),
            None => format!("    {} {} {}\n", connection.source(), arrow, connection.target()),
        };
        out.push_str(&line);
    }

    emit_class_defs(spec, &mut out);

    out
}

fn top_level(spec: &DiagramSpec) -> impl Iterator<Item = &Element> {
    spec.elements().iter().filter(|e| e.parent().is_none())
}

fn children(spec: &DiagramSpec, parent: Id) -> impl Iterator<Item = &Element> {
    spec.elements()
        .iter()
        .filter(move |e| e.parent() == Some(parent))
}

fn emit_element(spec: &DiagramSpec, element: &Element, depth: usize, out: &mut String) {
    let indent = "    ".repeat(depth);
    match element.kind() {
        ElementKind::Group => {
            let _ = writeln!(
                out,
                "{indent}subgraph {}[\"{}\"]",
                element.id(),
                escape(element.label())
            );
            for child in children(spec, element.id()) {
                emit_element(spec, child, depth + 1, out);
            }
            let _ = writeln!(out, "{indent}end");
        }
        ElementKind::Actor => {
            let _ = writeln!(
                out,
                "{indent}{}((\"{}\"))",
                element.id(),
                escape(element.label())
            );
        }
        ElementKind::Node => {
            let _ = writeln!(
                out,
                "{indent}{}([\"{}\"])",
                element.id(),
                escape(element.label())
            );
        }
    }
}

fn emit_class_defs(spec: &DiagramSpec, out: &mut String) {
    // Deduplicate identical styles into shared classes, in declaration order
    let mut classes: Vec<(String, Vec<String>)> = Vec::new();

    for element in spec.elements() {
        let style = element.style();
        if style.is_empty() {
            continue;
        }

        let mut css = Vec::new();
        if let Some(fill) = style.fill_color() {
            css.push(format!("fill:{fill}"));
        }
        if let Some(border) = style.border_color() {
            css.push(format!("stroke:{border}"));
        }
        if let Some(width) = style.border_width() {
            css.push(format!("stroke-width:{width}px"));
        }
        let css = css.join(",");

        match classes.iter_mut().find(|(existing, _)| *existing == css) {
            Some((_, members)) => members.push(element.id().to_string()),
            None => classes.push((css, vec![element.id().to_string()])),
        }
    }

    if classes.is_empty() {
        return;
    }

    out.push('\n');
    for (index, (css, _)) in classes.iter().enumerate() {
        let _ = writeln!(out, "    classDef c{index} {css}");
    }
    for (index, (_, members)) in classes.iter().enumerate() {
        let _ = writeln!(out, "    class {} c{index}", members.join(","));
    }
}

fn arrow_token(style: StrokeStyle, direction: Direction) -> &'static str {
    match (style, direction) {
        (StrokeStyle::Solid, Direction::None) => "---",
        (StrokeStyle::Solid, Direction::Forward) => "-->",
        (StrokeStyle::Solid, Direction::Bidirectional) => "<-->",
        (_, Direction::None) => "-.-",
        (_, Direction::Forward) => "-.->",
        (_, Direction::Bidirectional) => "<-.->",
    }
}

fn escape(label: &str) -> String {
    label.replace('"', "&quot;").replace('\n', "<br/>")
}

/// Renderer invoking an external Mermaid compiler process.
#[derive(Debug, Clone)]
pub struct MermaidRenderer {
    command: String,
}

impl MermaidRenderer {
    /// The conventional Mermaid CLI binary name.
    pub const DEFAULT_COMMAND: &'static str = "mmdc";

    /// Create a renderer invoking the given command.
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
        }
    }

    /// The command this renderer invokes.
    pub fn command(&self) -> &str {
        &self.command
    }
}

impl Default for MermaidRenderer {
    fn default() -> Self {
        Self::new(Self::DEFAULT_COMMAND)
    }
}

impl Renderer for MermaidRenderer {
    fn render(
        &self,
        spec: &DiagramSpec,
        target: &RenderTarget,
    ) -> Result<RenderOutcome, RenderError> {
        spec.validate()?;

        let source = serialize(spec);

        if let Some(parent) = target.primary().parent() {
            fs::create_dir_all(parent)?;
        }

        // The source survives render failures so it can be compiled manually
        let source_path = target.source_path();
        fs::write(&source_path, &source)?;
        debug!(source_path = source_path.display().to_string(); "Saved diagram source");

        let mut outcome = RenderOutcome::default();
        outcome.record(source_path.clone());

        // The spec's own background color wins over the target default
        let background = match (spec.background_color(), target.background()) {
            (Some(color), _) => color.to_string(),
            (None, Background::Opaque(color)) => color.to_string(),
            (None, Background::Transparent) => "transparent".to_string(),
        };

        info!(
            command = self.command,
            output = target.primary().display().to_string();
            "Invoking external diagram renderer"
        );

        let output = Command::new(&self.command)
            .arg("-i")
            .arg(&source_path)
            .arg("-o")
            .arg(target.primary())
            .args(["--width", &target.width().to_string()])
            .args(["--height", &target.height().to_string()])
            .args(["--scale", &target.scale().to_string()])
            .args(["--backgroundColor", &background])
            .output();

        let output = match output {
            Ok(output) => output,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                return Err(RenderError::RendererMissing {
                    command: self.command.clone(),
                    diagram_path: source_path,
                });
            }
            Err(err) => return Err(err.into()),
        };

        if !output.status.success() {
            return Err(RenderError::RendererFailed {
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        outcome.record(target.primary().to_path_buf());
        distribute(target, &mut outcome)?;

        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use stencil_core::{
        color::Color,
        geometry::{Point, Size},
        model::{Connection, ElementStyle},
    };

    use super::*;

    fn sample_spec() -> DiagramSpec {
        let mut spec = DiagramSpec::new("Sample", Size::new(400.0, 300.0));
        spec.add_element(Element::new(
            "services",
            ElementKind::Group,
            "APPLICATION SERVICES",
            Point::new(200.0, 150.0),
            Size::new(300.0, 200.0),
        ));
        spec.add_element(
            Element::new(
                "api",
                ElementKind::Node,
                "Spring Boot API\nREST Services",
                Point::new(200.0, 150.0),
                Size::new(120.0, 60.0),
            )
            .with_parent("services")
            .with_style(
                ElementStyle::new()
                    .with_fill(Color::new("#E8F5E8").unwrap())
                    .with_border(Color::new("#388E3C").unwrap())
                    .with_border_width(2.0),
            ),
        );
        spec.add_element(Element::new(
            "user",
            ElementKind::Actor,
            "User",
            Point::new(50.0, 150.0),
            Size::new(40.0, 60.0),
        ));
        spec.add_connection(
            Connection::new("user", "api")
                .with_direction(Direction::Forward)
                .with_label("HTTPS REST"),
        );
        spec
    }

    #[test]
    fn test_serialize_header_and_subgraph() {
        let markup = serialize(&sample_spec());
        assert!(markup.starts_with("graph TD\n"));
        assert!(markup.contains("subgraph services[\"APPLICATION SERVICES\"]"));
        assert!(markup.contains("end\n"));
    }

    #[test]
    fn test_serialize_nodes_inside_group() {
        let markup = serialize(&sample_spec());
        // api is declared inside the subgraph, indented one level deeper
        assert!(markup.contains("        api([\"Spring Boot API<br/>REST Services\"])"));
        assert!(markup.contains("    user((\"User\"))"));
    }

    #[test]
    fn test_serialize_labeled_arrow() {
        let markup = serialize(&sample_spec());
        assert!(markup.contains("user -->|\"HTTPS REST\"| api"));
    }

    #[test]
    fn test_serialize_class_defs() {
        let markup = serialize(&sample_spec());
        assert!(markup.contains("classDef c0"));
        assert!(markup.contains("stroke-width:2px"));
        assert!(markup.contains("class api c0"));
    }

    #[test]
    fn test_serialize_shared_style_single_class() {
        let mut spec = DiagramSpec::new("Shared", Size::new(100.0, 100.0));
        let style = ElementStyle::new().with_fill(Color::new("#F0F4FF").unwrap());
        for id in ["docker", "kubernetes"] {
            spec.add_element(
                Element::new(id, ElementKind::Node, id, Point::default(), Size::default())
                    .with_style(style.clone()),
            );
        }

        let markup = serialize(&spec);
        assert_eq!(markup.matches("classDef").count(), 1);
        assert!(markup.contains("class docker,kubernetes c0"));
    }

    #[test]
    fn test_arrow_tokens() {
        assert_eq!(arrow_token(StrokeStyle::Solid, Direction::None), "---");
        assert_eq!(arrow_token(StrokeStyle::Solid, Direction::Forward), "-->");
        assert_eq!(
            arrow_token(StrokeStyle::Solid, Direction::Bidirectional),
            "<-->"
        );
        assert_eq!(arrow_token(StrokeStyle::Dashed, Direction::Forward), "-.->");
        assert_eq!(arrow_token(StrokeStyle::Dotted, Direction::None), "-.-");
    }

    #[test]
    fn test_missing_renderer_is_recoverable_and_keeps_source() {
        let dir = tempfile::tempdir().unwrap();
        let target = RenderTarget::new(dir.path().join("figure.png"), 400, 300);
        let renderer = MermaidRenderer::new("stencil-test-no-such-binary");

        let err = renderer.render(&sample_spec(), &target).unwrap_err();
        assert!(err.is_recoverable());
        assert!(matches!(err, RenderError::RendererMissing { .. }));

        // The intermediate source must survive the failed render
        let source = std::fs::read_to_string(target.source_path()).unwrap();
        assert!(source.starts_with("graph TD"));
    }
}
