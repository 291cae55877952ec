//! Text rendering definitions for diagram labels.
//!
//! [`TextDefinition`] is a reusable text style; [`Text`] combines content
//! with a definition and can measure itself through cosmic-text so that
//! label backgrounds and connector labels are sized from real font metrics.
//!
//! When rendered via the [`Drawable`] trait, [`Text`] produces an SVG
//! `<text>` element (one `<tspan>` per line) on the
//! [`Text`](crate::draw::RenderLayer::Text) layer and, if a background color
//! is configured, a rounded rectangle on the
//! [`Background`](crate::draw::RenderLayer::Background) layer.

use std::sync::{Arc, Mutex, OnceLock};

use cosmic_text::{Attrs, Buffer, Family, FontSystem, Metrics, Shaping};
use log::info;
use svg::{self, node::Text as SvgText, node::element as svg_element};

use crate::{
    color::Color,
    draw::{Drawable, LayeredOutput, RenderLayer},
    geometry::{Insets, Point, Size},
};

/// Defines the visual style for text elements in diagrams.
///
/// Multiple [`Text`] elements can share the same definition for consistent
/// styling.
///
/// # Default Values
///
/// | Property | Default |
/// |----------|---------|
/// | Font family | `"Arial"` |
/// | Font size | `15` |
/// | Bold / italic | off |
/// | Background color | `None` |
/// | Text color | `None` (SVG default, typically black) |
/// | Padding | Zero on all sides |
#[derive(Debug, Clone)]
pub struct TextDefinition {
    font_family: String,
    font_size: u16,
    bold: bool,
    italic: bool,
    background_color: Option<Color>,
    color: Option<Color>,
    padding: Insets,
}

impl TextDefinition {
    /// Creates a new text definition with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the font size in points.
    pub fn set_font_size(&mut self, size: u16) {
        self.font_size = size;
    }

    /// Sets the font family for the text.
    pub fn set_font_family(&mut self, family: &str) {
        self.font_family = family.to_string();
    }

    /// Sets whether the text renders with a bold weight.
    pub fn set_bold(&mut self, bold: bool) {
        self.bold = bold;
    }

    /// Sets whether the text renders italic.
    pub fn set_italic(&mut self, italic: bool) {
        self.italic = italic;
    }

    /// Sets the background color for the text.
    ///
    /// When set, the text is rendered over a rounded rectangle in the given
    /// color. Connector labels use this to stay readable over lines.
    pub fn set_background_color(&mut self, color: Option<Color>) {
        self.background_color = color;
    }

    /// Sets the text color. `None` uses the SVG default (black).
    pub fn set_color(&mut self, color: Option<Color>) {
        self.color = color;
    }

    /// Sets the padding around the text content.
    ///
    /// Padding affects the background rectangle (if present) and the overall
    /// size calculation even when no background is set.
    pub fn set_padding(&mut self, padding: Insets) {
        self.padding = padding;
    }

    fn font_size(&self) -> u16 {
        self.font_size
    }

    fn font_family(&self) -> &str {
        &self.font_family
    }

    fn background_color(&self) -> Option<&Color> {
        self.background_color.as_ref()
    }

    fn color(&self) -> Option<&Color> {
        self.color.as_ref()
    }

    fn padding(&self) -> Insets {
        self.padding
    }
}

impl Default for TextDefinition {
    fn default() -> Self {
        Self {
            font_family: "Arial".to_string(),
            font_size: 15,
            bold: false,
            italic: false,
            background_color: None,
            color: None,
            padding: Insets::default(),
        }
    }
}

/// A renderable text element combining content with styling.
///
/// # Examples
///
/// ```
/// # use stencil_core::draw::{TextDefinition, Text};
/// let style = TextDefinition::new();
/// let text = Text::new(&style, "Book Vehicle");
///
/// let size = text.calculate_size();
/// assert!(size.width() > 0.0);
/// assert_eq!(text.content(), "Book Vehicle");
/// ```
#[derive(Debug, Clone)]
pub struct Text<'a> {
    definition: &'a TextDefinition,
    content: &'a str,
}

impl<'a> Text<'a> {
    /// Creates a new text element with the given definition and content.
    pub fn new(definition: &'a TextDefinition, content: &'a str) -> Self {
        Self {
            definition,
            content,
        }
    }

    /// Returns the text content of this element.
    pub fn content(&self) -> &str {
        self.content
    }

    /// Calculate the total size required to display this text, including padding.
    pub fn calculate_size(&self) -> Size {
        let padding = self.definition.padding();
        self.calculate_size_without_padding().add_padding(padding)
    }

    fn calculate_size_without_padding(&self) -> Size {
        TEXT_MANAGER
            .get_or_init(TextManager::new)
            .calculate_text_size(self.content, self.definition)
    }
}

impl<'a> Drawable for Text<'a> {
    fn render_to_layers(&self, position: Point) -> LayeredOutput {
        let mut output = LayeredOutput::new();
        let text_size = self.calculate_size();
        let padding = self.definition.padding();

        let lines: Vec<&str> = self.content.lines().collect();

        // Uniform line height from total measured height / line count
        let text_size_without_padding = self.calculate_size_without_padding();
        let line_height = if lines.is_empty() {
            0.0
        } else {
            text_size_without_padding.height() / lines.len() as f32
        };

        let total_height = text_size_without_padding.height();
        let y_offset = -(total_height + line_height) / 2.0;

        let mut rendered_text = svg_element::Text::new("")
            .set("x", position.x())
            .set("y", position.y() + y_offset)
            .set("text-anchor", "middle")
            .set("dominant-baseline", "central")
            .set("font-family", self.definition.font_family())
            .set("font-size", self.definition.font_size());

        if self.definition.bold {
            rendered_text = rendered_text.set("font-weight", "bold");
        }
        if self.definition.italic {
            rendered_text = rendered_text.set("font-style", "italic");
        }
        if let Some(color) = self.definition.color() {
            rendered_text = rendered_text.set("fill", color.to_string());
        }

        for line in lines.into_iter() {
            let tspan = svg_element::TSpan::new("")
                .set("x", position.x())
                .set("dy", line_height)
                .add(SvgText::new(line));
            rendered_text = rendered_text.add(tspan);
        }

        if let Some(bg_color) = self.definition.background_color() {
            let bg_bounds = position.to_bounds(text_size);
            let bg_min_point = bg_bounds.min_point();

            let bg = svg_element::Rectangle::new()
                .set("x", bg_min_point.x())
                .set("y", bg_min_point.y())
                .set("width", bg_bounds.width())
                .set("height", bg_bounds.height())
                .set("fill", bg_color.to_string())
                .set("rx", 3.0);

            output.add_to_layer(RenderLayer::Background, Box::new(bg));
        }

        output.add_to_layer(RenderLayer::Text, Box::new(rendered_text));
        output
    }

    fn size(&self) -> Size {
        self.calculate_size()
    }
}

/// TextManager handles text measurement and font operations.
/// It maintains a reusable FontSystem instance to avoid expensive recreation.
struct TextManager {
    font_system: Arc<Mutex<FontSystem>>,
}

impl TextManager {
    fn new() -> Self {
        info!("Initializing FontSystem");
        Self {
            font_system: Arc::new(Mutex::new(FontSystem::new())),
        }
    }

    /// Calculate the actual size of text in pixels using cosmic-text.
    ///
    /// Returns a measurement based on real font metrics and shaping; falls
    /// back to a character-count estimate when no layout runs are produced.
    fn calculate_text_size(&self, text: &str, text_def: &TextDefinition) -> Size {
        if text.is_empty() {
            return Size::default();
        }

        let mut font_system = self.font_system.lock().expect("failed to lock FontSystem");

        // Points to pixels (roughly 1.33x multiplier for standard DPI)
        let font_size_px = text_def.font_size() as f32 * 1.33;

        let line_height = font_size_px * 1.15;
        let metrics = Metrics::new(font_size_px, line_height);

        let mut buffer = Buffer::new(&mut font_system, metrics);
        let mut buffer = buffer.borrow_with(&mut font_system);

        let attrs = Attrs::new().family(Family::Name(text_def.font_family()));

        // Unlimited buffer size so text flows naturally
        buffer.set_size(None, None);
        buffer.set_text(text, &attrs, Shaping::Advanced, None);
        buffer.shape_until_scroll(true);

        let mut max_width: f32 = 0.0;
        let mut total_height: f32 = 0.0;

        let layout_runs: Vec<_> = buffer.layout_runs().collect();
        if !layout_runs.is_empty() {
            for last in layout_runs.iter().map(|run| run.glyphs.last()) {
                if let Some(last) = last {
                    let run_width = last.x + last.w;
                    max_width = max_width.max(run_width);
                }
                total_height += metrics.line_height;
            }
        } else {
            max_width = text.len() as f32 * (font_size_px * 0.55);
            total_height = metrics.line_height;
        }

        Size::new(max_width, total_height)
    }
}

static TEXT_MANAGER: OnceLock<TextManager> = OnceLock::new();
