//! Text rendering definitions for titles, notes and item labels.
//!
//! - [`TextDefinition`] - Reusable text style configuration
//! - [`Text`] - A renderable text element combining content with a [`TextDefinition`]
//!
//! Text is measured with `cosmic-text` and wrapped to an optional maximum
//! width. When shaping yields no glyphs (no usable font on the system), the
//! size falls back to a per-character estimate so layout stays deterministic.
//!
//! # Quick Start
//!
//! ```
//! # use pelt_core::draw::{Text, TextDefinition};
//! let style = TextDefinition::from_tokens("text-sm text-slate-700");
//!
//! let text = Text::new(&style, "Event Stream (Kafka / Kinesis)").with_max_width(120.0);
//! let size = text.calculate_size();
//! assert!(size.width() > 0.0);
//! assert!(!text.lines().is_empty());
//! ```

use std::{
    cell::OnceCell,
    sync::{Mutex, OnceLock, PoisonError},
};

use cosmic_text::{Attrs, Buffer, Family, FontSystem, Metrics, Shaping, Weight, Wrap};
use log::{debug, info, trace};
use svg::{self, node::Text as SvgText, node::element as svg_element};

use crate::{
    color::Color,
    draw::{Drawable, LayeredOutput, RenderLayer},
    geometry::{Point, Size},
    style::{StyleToken, parse_tokens},
};

/// Line height as a multiple of the font size.
const LINE_HEIGHT_FACTOR: f32 = 1.4;

/// Average glyph advance as a multiple of the font size, used when no font
/// metrics are available.
const ESTIMATED_ADVANCE: f32 = 0.55;
const ESTIMATED_BOLD_ADVANCE: f32 = 0.6;

/// Defines the visual style for text elements in diagrams.
///
/// # Default Values
///
/// | Property | Default |
/// |----------|---------|
/// | Font family | `"sans-serif"` |
/// | Font size | `16` |
/// | Font weight | `400` |
/// | Text color | `None` (SVG default, black) |
#[derive(Debug, Clone, PartialEq)]
pub struct TextDefinition {
    font_family: String,
    font_size: u16,
    font_weight: u16,
    color: Option<Color>,
}

impl TextDefinition {
    /// Creates a new text definition with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a text definition from style tokens such as `text-lg font-semibold`.
    pub fn from_tokens(tokens: &str) -> Self {
        let mut definition = Self::new();
        definition.apply_tokens(tokens);
        definition
    }

    /// Applies the text-related tokens of `tokens`; other tokens are ignored.
    pub fn apply_tokens(&mut self, tokens: &str) {
        for token in parse_tokens(tokens) {
            match token {
                StyleToken::FontSize(size) => self.font_size = size,
                StyleToken::FontWeight(weight) => self.font_weight = weight,
                StyleToken::TextColor(color) => self.color = Some(color),
                other => trace!(token:? = other; "Token does not apply to text"),
            }
        }
    }

    /// Sets the font size in pixels.
    pub fn set_font_size(&mut self, size: u16) {
        self.font_size = size;
    }

    /// Sets the font family (e.g. "Helvetica", "sans-serif", "monospace").
    pub fn set_font_family(&mut self, family: &str) {
        self.font_family = family.to_string();
    }

    /// Sets the CSS font weight (400 regular, 700 bold).
    pub fn set_font_weight(&mut self, weight: u16) {
        self.font_weight = weight;
    }

    /// Sets the text color; `None` uses the SVG default.
    pub fn set_color(&mut self, color: Option<Color>) {
        self.color = color;
    }

    pub fn font_size(&self) -> u16 {
        self.font_size
    }

    pub fn font_family(&self) -> &str {
        &self.font_family
    }

    pub fn font_weight(&self) -> u16 {
        self.font_weight
    }

    pub fn color(&self) -> Option<Color> {
        self.color
    }

    /// Height of one line of text in pixels.
    pub fn line_height(&self) -> f32 {
        f32::from(self.font_size) * LINE_HEIGHT_FACTOR
    }
}

impl Default for TextDefinition {
    fn default() -> Self {
        Self {
            font_family: "sans-serif".to_string(),
            font_size: 16,
            font_weight: 400,
            color: None,
        }
    }
}

/// Wrapped lines of a text and the size they occupy.
#[derive(Debug, Clone, Default, PartialEq)]
struct TextLayout {
    lines: Vec<String>,
    size: Size,
}

/// A renderable text element combining content with styling.
///
/// # Examples
///
/// ```
/// # use pelt_core::draw::{TextDefinition, Text};
/// let style = TextDefinition::new();
/// let text = Text::new(&style, "Storage");
///
/// assert_eq!(text.content(), "Storage");
/// assert!(text.calculate_size().height() > 0.0);
/// ```
#[derive(Debug, Clone)]
pub struct Text<'a> {
    definition: &'a TextDefinition,
    content: &'a str,
    max_width: Option<f32>,
    attributes: Vec<(&'static str, String)>,
    layout: OnceCell<TextLayout>,
}

impl<'a> Text<'a> {
    /// Creates a new text element with the given definition and content.
    pub fn new(definition: &'a TextDefinition, content: &'a str) -> Self {
        Self {
            definition,
            content,
            max_width: None,
            attributes: Vec::new(),
            layout: OnceCell::new(),
        }
    }

    /// Wraps the content so no line is wider than `max_width`.
    pub fn with_max_width(mut self, max_width: f32) -> Self {
        self.max_width = Some(max_width.max(0.0));
        self.layout = OnceCell::new();
        self
    }

    /// Adds an attribute to the rendered `<text>` element (e.g. `data-role`).
    pub fn with_attribute(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.attributes.push((name, value.into()));
        self
    }

    /// Returns the text content of this element.
    pub fn content(&self) -> &str {
        self.content
    }

    pub fn definition(&self) -> &TextDefinition {
        self.definition
    }

    /// Returns the content broken into rendered lines.
    pub fn lines(&self) -> &[String] {
        &self.layout().lines
    }

    /// Calculate the total size required to display this text.
    pub fn calculate_size(&self) -> Size {
        self.layout().size
    }

    fn layout(&self) -> &TextLayout {
        self.layout.get_or_init(|| {
            TEXT_MANAGER
                .get_or_init(TextManager::new)
                .layout_text(self.content, self.definition, self.max_width)
        })
    }
}

impl Drawable for Text<'_> {
    fn render_to_layers(&self, position: Point) -> LayeredOutput {
        let mut output = LayeredOutput::new();
        let layout = self.layout();
        if layout.lines.is_empty() {
            return output;
        }

        let bounds = position.to_bounds(layout.size);
        let line_height = layout.size.height() / layout.lines.len() as f32;
        let x = bounds.min_x();
        let top = bounds.min_y();

        // The full content stays on the element so wrapped strings remain
        // searchable in the document.
        let mut rendered_text = svg_element::Text::new("")
            .set("x", x)
            .set("y", top)
            .set("aria-label", self.content)
            .set("dominant-baseline", "central")
            .set("font-family", self.definition.font_family())
            .set("font-size", self.definition.font_size());

        if self.definition.font_weight() != 400 {
            rendered_text = rendered_text.set("font-weight", self.definition.font_weight());
        }

        if let Some(color) = self.definition.color() {
            rendered_text = rendered_text
                .set("fill", color.to_string())
                .set("fill-opacity", color.alpha());
        }

        for (name, value) in &self.attributes {
            rendered_text = rendered_text.set(*name, value.as_str());
        }

        let last = layout.lines.len() - 1;
        for (i, line) in layout.lines.iter().enumerate() {
            // Wrapped lines keep the break space so the spans concatenate
            // back to the content.
            let line = if i < last {
                format!("{line} ")
            } else {
                line.clone()
            };
            let tspan = svg_element::TSpan::new("")
                .set("x", x)
                .set("y", top + line_height * (i as f32 + 0.5))
                .add(SvgText::new(line));
            rendered_text = rendered_text.add(tspan);
        }

        output.add_to_layer(RenderLayer::Text, Box::new(rendered_text));
        output
    }

    fn size(&self) -> Size {
        self.calculate_size()
    }
}

/// TextManager handles text measurement and line breaking.
/// It keeps one FontSystem, which is expensive to create.
struct TextManager {
    font_system: Mutex<FontSystem>,
}

impl TextManager {
    fn new() -> Self {
        info!("Initializing FontSystem");
        Self {
            font_system: Mutex::new(FontSystem::new()),
        }
    }

    /// Breaks `text` into lines no wider than `max_width` and measures them.
    ///
    /// Uses real font metrics and shaping; falls back to
    /// [`estimate_layout`] when shaping produced no glyphs.
    fn layout_text(&self, text: &str, text_def: &TextDefinition, max_width: Option<f32>) -> TextLayout {
        if text.is_empty() {
            return TextLayout::default();
        }

        let mut font_system = self
            .font_system
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        // SVG font-size is expressed in user units (px)
        let font_size_px = f32::from(text_def.font_size());
        let metrics = Metrics::new(font_size_px, text_def.line_height());

        let mut buffer = Buffer::new(&mut font_system, metrics);
        let mut buffer = buffer.borrow_with(&mut font_system);

        let family = match text_def.font_family() {
            "sans-serif" => Family::SansSerif,
            "serif" => Family::Serif,
            "monospace" => Family::Monospace,
            name => Family::Name(name),
        };
        let attrs = Attrs::new()
            .family(family)
            .weight(Weight(text_def.font_weight()));

        buffer.set_wrap(Wrap::WordOrGlyph);
        buffer.set_size(max_width, None);
        buffer.set_text(text, &attrs, Shaping::Advanced, None);
        buffer.shape_until_scroll(true);

        let mut lines = Vec::new();
        let mut max_line_width: f32 = 0.0;

        for run in buffer.layout_runs() {
            if run.glyphs.is_empty() {
                if !run.text.trim().is_empty() {
                    debug!(text; "Shaping produced no glyphs, estimating text size");
                    return estimate_layout(text, text_def, max_width);
                }
                lines.push(String::new());
                continue;
            }

            let start = run.glyphs.iter().map(|g| g.start).min().unwrap_or(0);
            let end = run.glyphs.iter().map(|g| g.end).max().unwrap_or(start);
            let left = run.glyphs.iter().map(|g| g.x).fold(f32::MAX, f32::min);
            let right = run.glyphs.iter().map(|g| g.x + g.w).fold(0.0, f32::max);

            lines.push(run.text.get(start..end).unwrap_or_default().trim().to_string());
            max_line_width = max_line_width.max(right - left);
        }

        if lines.is_empty() {
            return estimate_layout(text, text_def, max_width);
        }

        let height = lines.len() as f32 * text_def.line_height();
        TextLayout {
            lines,
            size: Size::new(max_line_width, height),
        }
    }
}

/// Greedy word wrap using an average glyph advance.
fn estimate_layout(text: &str, text_def: &TextDefinition, max_width: Option<f32>) -> TextLayout {
    let advance_factor = if text_def.font_weight() >= 600 {
        ESTIMATED_BOLD_ADVANCE
    } else {
        ESTIMATED_ADVANCE
    };
    let advance = f32::from(text_def.font_size()) * advance_factor;
    let width_of = |line: &str| line.chars().count() as f32 * advance;

    let mut lines: Vec<String> = Vec::new();
    for paragraph in text.lines() {
        let mut current = String::new();
        for word in paragraph.split_whitespace() {
            let candidate = if current.is_empty() {
                word.to_string()
            } else {
                format!("{current} {word}")
            };

            match max_width {
                Some(limit) if !current.is_empty() && width_of(&candidate) > limit => {
                    lines.push(std::mem::replace(&mut current, word.to_string()));
                }
                _ => current = candidate,
            }
        }
        lines.push(current);
    }

    let width = lines.iter().map(|line| width_of(line)).fold(0.0, f32::max);
    let height = lines.len() as f32 * text_def.line_height();

    TextLayout {
        lines,
        size: Size::new(width, height),
    }
}

static TEXT_MANAGER: OnceLock<TextManager> = OnceLock::new();

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;
    use crate::style::palette_color;

    #[test]
    fn test_text_definition_defaults() {
        let def = TextDefinition::new();
        assert_eq!(def.font_size(), 16);
        assert_eq!(def.font_family(), "sans-serif");
        assert_eq!(def.font_weight(), 400);
        assert!(def.color().is_none());
    }

    #[test]
    fn test_text_definition_from_tokens() {
        let def = TextDefinition::from_tokens("text-xs text-slate-500");
        assert_eq!(def.font_size(), 12);
        assert_eq!(def.color(), palette_color("slate-500"));
    }

    #[test]
    fn test_text_definition_weight_tokens() {
        let def = TextDefinition::from_tokens("text-lg font-semibold");
        assert_eq!(def.font_size(), 18);
        assert_eq!(def.font_weight(), 600);
    }

    #[test]
    fn test_text_definition_setters() {
        let mut def = TextDefinition::new();
        def.set_font_family("monospace");
        def.set_font_size(24);
        def.set_font_weight(700);
        def.set_color(Some(Color::new("navy").unwrap()));

        assert_eq!(def.font_family(), "monospace");
        assert_eq!(def.font_size(), 24);
        assert_eq!(def.font_weight(), 700);
        assert!(def.color().is_some());
    }

    #[test]
    fn test_line_height_scales_with_font_size() {
        let mut def = TextDefinition::new();
        def.set_font_size(10);
        assert_approx_eq!(f32, def.line_height(), 14.0);
    }

    #[test]
    fn test_text_calculate_size_empty() {
        let def = TextDefinition::new();
        let text = Text::new(&def, "");
        assert_eq!(text.calculate_size(), Size::default());
        assert!(text.lines().is_empty());
        assert!(text.render_to_layers(Point::default()).is_empty());
    }

    #[test]
    fn test_text_calculate_size_single_line() {
        let def = TextDefinition::new();
        let text = Text::new(&def, "Hello World");
        let size = text.calculate_size();
        assert!(size.width() > 0.0, "Width should be positive");
        assert!(size.height() > 0.0, "Height should be positive");
    }

    #[test]
    fn test_text_calculate_size_multiline() {
        let def = TextDefinition::new();
        let single = Text::new(&def, "Line 1");
        let multi = Text::new(&def, "Line 1\nLine 2\nLine 3");

        assert!(multi.calculate_size().height() > single.calculate_size().height());
        assert_eq!(multi.lines().len(), 3);
    }

    #[test]
    fn test_text_wraps_to_max_width() {
        let def = TextDefinition::new();
        let content = "Data Warehouse (Redshift / BigQuery / Snowflake)";
        let unwrapped = Text::new(&def, content);
        let wrapped = Text::new(&def, content).with_max_width(80.0);

        assert_eq!(unwrapped.lines().len(), 1);
        assert!(wrapped.lines().len() > 1);
        assert!(wrapped.calculate_size().height() > unwrapped.calculate_size().height());
    }

    #[test]
    fn test_text_larger_font_is_larger() {
        let small_def = TextDefinition::from_tokens("text-xs");
        let large_def = TextDefinition::from_tokens("text-3xl");

        let small = Text::new(&small_def, "Test").calculate_size();
        let large = Text::new(&large_def, "Test").calculate_size();

        assert!(large.height() > small.height());
        assert!(large.width() > small.width());
    }

    #[test]
    fn test_text_render_to_layers() {
        let def = TextDefinition::from_tokens("text-lg font-semibold");
        let text = Text::new(&def, "Sources").with_attribute("data-role", "title");
        let output = text.render_to_layers(Point::new(100.0, 100.0));

        assert_eq!(output.layer_len(RenderLayer::Text), 1);
        let rendered: String = output.render().iter().map(|n| n.to_string()).collect();
        assert!(rendered.contains("Sources"));
        assert!(rendered.contains("data-role=\"title\""));
        assert!(rendered.contains("font-weight=\"600\""));
    }

    #[test]
    fn test_wrapped_text_keeps_full_content() {
        let def = TextDefinition::new();
        let content = "Data Warehouse (Redshift / BigQuery / Snowflake)";
        let text = Text::new(&def, content).with_max_width(160.0);
        assert!(text.lines().len() > 1);

        let rendered: String = text
            .render_to_layers(Point::new(50.0, 50.0))
            .render()
            .iter()
            .map(|n| n.to_string())
            .collect();
        assert!(rendered.contains(&format!("aria-label=\"{content}\"")));

        let spans: Vec<&str> = rendered
            .split("<tspan")
            .skip(1)
            .filter_map(|span| span.split_once('>'))
            .filter_map(|(_, rest)| rest.split_once("</tspan>"))
            .map(|(line, _)| line)
            .collect();
        assert_eq!(spans.len(), text.lines().len());
        assert_eq!(spans.concat(), content);
    }

    #[test]
    fn test_estimate_layout_wraps_words() {
        let def = TextDefinition::new();
        let layout = estimate_layout("alpha beta gamma", &def, Some(60.0));
        assert_eq!(layout.lines, ["alpha", "beta", "gamma"]);

        let layout = estimate_layout("alpha beta gamma", &def, None);
        assert_eq!(layout.lines, ["alpha beta gamma"]);
    }

    #[test]
    fn test_estimate_layout_keeps_long_word_whole() {
        let def = TextDefinition::new();
        let layout = estimate_layout("Supercalifragilistic", &def, Some(10.0));
        assert_eq!(layout.lines, ["Supercalifragilistic"]);
        assert!(layout.size.width() > 10.0);
    }
}
