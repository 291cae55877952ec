//! Direct-drawing rendering strategy.
//!
//! Iterates the spec's elements and connections, issuing drawing primitives
//! into a layered SVG document: grouping boxes below content, actors and
//! use-case ovals on the content layer, connectors above them, text on top.
//! The document is written as `.svg`; when the target's primary path is a
//! `.png`, the same document is rasterized at the target scale and written
//! alongside.

use std::{fs, rc::Rc};

use log::{debug, info};
use svg::Document;

use stencil_core::{
    color::Color,
    draw::{
        ActorDefinition, ConnectorDefinition, Drawable, GroupBoxDefinition, LayeredOutput,
        OvalDefinition, RectangleDefinition, RenderLayer, ShapeDefinition, StrokeDefinition,
        Text, TextDefinition,
    },
    geometry::{Insets, Point, Size},
    model::{Connection, DiagramSpec, Element, ElementKind, ElementStyle},
};

use crate::render::{
    Background, RenderError, RenderOutcome, RenderTarget, Renderer, distribute, raster,
};

/// Vertical offset of the diagram title below the top edge.
const TITLE_OFFSET: f32 = 42.0;
/// Vertical offset of a group label below the group's top edge.
const GROUP_LABEL_OFFSET: f32 = 26.0;
/// Line width for connection lines.
const CONNECTOR_WIDTH: f32 = 1.5;

/// In-process renderer drawing the spec straight to SVG.
#[derive(Debug, Clone, Copy, Default)]
pub struct SvgRenderer;

impl SvgRenderer {
    /// Create a new direct-drawing renderer.
    pub fn new() -> Self {
        Self
    }

    /// Render the spec to an SVG document string without touching the
    /// filesystem. The document's `width`/`height` attributes carry the
    /// target's requested pixel size.
    pub fn render_to_string(
        &self,
        spec: &DiagramSpec,
        target: &RenderTarget,
    ) -> Result<String, RenderError> {
        spec.validate()?;
        Ok(build_document(spec, target).to_string())
    }
}

impl Renderer for SvgRenderer {
    fn render(
        &self,
        spec: &DiagramSpec,
        target: &RenderTarget,
    ) -> Result<RenderOutcome, RenderError> {
        let svg_string = self.render_to_string(spec, target)?;

        if let Some(parent) = target.primary().parent() {
            fs::create_dir_all(parent)?;
        }

        let mut outcome = RenderOutcome::default();

        let svg_path = target.svg_path();
        fs::write(&svg_path, &svg_string)?;
        debug!(svg_path = svg_path.display().to_string(); "SVG document written");

        if target.wants_png() {
            let background = match target.background() {
                Background::Opaque(color) => Some(color.to_string()),
                Background::Transparent => None,
            };
            let png = raster::svg_to_png(&svg_string, target.scale(), background.as_deref())?;
            fs::write(target.primary(), png)?;
            outcome.record(target.primary().to_path_buf());
            outcome.record(svg_path);
        } else {
            outcome.record(svg_path);
        }

        distribute(target, &mut outcome)?;

        info!(
            primary = target.primary().display().to_string(),
            files = outcome.written().len();
            "Figure rendered"
        );

        Ok(outcome)
    }
}

fn build_document(spec: &DiagramSpec, target: &RenderTarget) -> Document {
    let canvas = spec.canvas();

    let mut output = LayeredOutput::new();

    // The spec's own background color wins over the target default
    let background_fill = match (spec.background_color(), target.background()) {
        (Some(color), _) => Some(color.to_string()),
        (None, Background::Opaque(color)) => Some(color.to_string()),
        (None, Background::Transparent) => None,
    };
    if let Some(fill) = background_fill {
        let rect = svg::node::element::Rectangle::new()
            .set("x", 0)
            .set("y", 0)
            .set("width", canvas.width())
            .set("height", canvas.height())
            .set("fill", fill);
        output.add_to_layer(RenderLayer::Background, Box::new(rect));
    }

    if !spec.title().is_empty() {
        let mut title_def = TextDefinition::new();
        title_def.set_font_size(22);
        title_def.set_bold(true);
        let title = Text::new(&title_def, spec.title());
        output.merge(title.render_to_layers(Point::new(canvas.width() / 2.0, TITLE_OFFSET)));
    }

    for element in spec.elements() {
        render_element(element, &mut output);
    }

    for connection in spec.connections() {
        render_connection(spec, connection, &mut output);
    }

    let mut document = Document::new()
        .set("width", target.width())
        .set("height", target.height())
        .set(
            "viewBox",
            (0.0, 0.0, canvas.width(), canvas.height()),
        );
    for node in output.render() {
        document = document.add(node);
    }
    document
}

fn render_element(element: &Element, output: &mut LayeredOutput) {
    let position = element.position();
    let size = element.size();

    match element.kind() {
        ElementKind::Group => {
            let shape = GroupBoxDefinition::styled(
                element.style().fill_color().cloned(),
                stroke_for(element.style(), 1.0),
            );
            output.add_to_layer(RenderLayer::Group, shape.render_to_svg(size, position));

            let mut label_def = TextDefinition::new();
            label_def.set_font_size(16);
            label_def.set_bold(true);
            label_def.set_italic(true);
            label_def.set_color(element.style().border_color().cloned());
            let label = Text::new(&label_def, element.label());
            let label_position = Point::new(
                position.x(),
                position.to_bounds(size).min_y() + GROUP_LABEL_OFFSET,
            );
            output.merge(label.render_to_layers(label_position));
        }
        ElementKind::Actor => {
            let shape = ActorDefinition::with_stroke(stroke_for(element.style(), 2.0));
            // Stick figure in the upper part of the slot, name plate below
            let figure_center = position.with_y(position.y() - size.height() * 0.10);
            output.add_to_layer(
                RenderLayer::Content,
                shape.render_to_svg(size, figure_center),
            );

            let plate_position = position.with_y(position.y() + size.height() * 0.38);
            let plate_size = Size::new(size.width(), size.height() * 0.26);
            let plate = RectangleDefinition::styled(
                element.style().fill_color().cloned(),
                stroke_for(element.style(), 2.0),
                10.0,
            );
            output.add_to_layer(
                RenderLayer::Content,
                plate.render_to_svg(plate_size, plate_position),
            );

            let mut label_def = TextDefinition::new();
            label_def.set_font_size(14);
            label_def.set_bold(true);
            let label = Text::new(&label_def, element.label());
            output.merge(label.render_to_layers(plate_position));
        }
        ElementKind::Node => {
            let fill = element
                .style()
                .fill_color()
                .cloned()
                .unwrap_or_else(|| Color::new("white").expect("'white' is a valid CSS color"));
            let shape = OvalDefinition::styled(Some(fill), stroke_for(element.style(), 1.5));
            output.add_to_layer(RenderLayer::Content, shape.render_to_svg(size, position));

            let mut label_def = TextDefinition::new();
            label_def.set_font_size(12);
            let label = Text::new(&label_def, element.label());
            output.merge(label.render_to_layers(position));
        }
    }
}

fn render_connection(spec: &DiagramSpec, connection: &Connection, output: &mut LayeredOutput) {
    // validate() has run; a missing endpoint would already have failed
    let (Some(source), Some(target)) = (
        spec.element(connection.source()),
        spec.element(connection.target()),
    ) else {
        return;
    };

    let start = boundary_shape(source).find_intersection(
        source.position(),
        target.position(),
        source.size(),
    );
    let end = boundary_shape(target).find_intersection(
        target.position(),
        source.position(),
        target.size(),
    );

    let stroke = Rc::new(StrokeDefinition::with_style(
        Color::default(),
        CONNECTOR_WIDTH,
        connection.style(),
    ));

    let mut label_def = TextDefinition::new();
    label_def.set_font_size(11);
    label_def.set_italic(true);
    label_def.set_padding(Insets::uniform(2.0));
    label_def.set_background_color(Some(
        Color::new("white").expect("'white' is a valid CSS color"),
    ));

    let connector = ConnectorDefinition::new(stroke, Rc::new(label_def));
    output.merge(connector.render(start, end, connection.direction(), connection.label()));
}

/// The shape used to trim connector endpoints at an element's outline.
fn boundary_shape(element: &Element) -> Box<dyn ShapeDefinition> {
    match element.kind() {
        // Ovals trim along the ellipse; actors and boxes along their rectangle
        ElementKind::Node => Box::new(OvalDefinition::new()),
        ElementKind::Actor => Box::new(ActorDefinition::new()),
        ElementKind::Group => Box::new(GroupBoxDefinition::new()),
    }
}

fn stroke_for(style: &ElementStyle, default_width: f32) -> Rc<StrokeDefinition> {
    let color = style.border_color().cloned().unwrap_or_default();
    let width = style.border_width().unwrap_or(default_width);
    Rc::new(StrokeDefinition::solid(color, width))
}
