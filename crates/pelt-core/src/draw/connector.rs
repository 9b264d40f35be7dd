//! Directional arrow glyph placed between adjacent pipeline stages.

use crate::{
    color::Color,
    draw::{Drawable, LayeredOutput, RenderLayer, StrokeDefinition, marker::glyph_group},
    geometry::{Point, Size},
    style::palette_color,
};

const CONNECTOR_SIZE: f32 = 40.0;
const CONNECTOR_STROKE_WIDTH: f32 = 1.5;
const CONNECTOR_PATHS: [&str; 2] = ["M3 12h18", "M15 8l4 4-4 4"];

/// A fixed, decorative right-pointing arrow.
#[derive(Debug, Clone, PartialEq)]
pub struct Connector {
    stroke: StrokeDefinition,
}

impl Connector {
    /// Creates a connector stroked in `color`.
    pub fn new(color: Color) -> Self {
        Self {
            stroke: StrokeDefinition::rounded(color, CONNECTOR_STROKE_WIDTH),
        }
    }

    pub fn stroke(&self) -> &StrokeDefinition {
        &self.stroke
    }
}

impl Default for Connector {
    fn default() -> Self {
        Self::new(palette_color("slate-400").unwrap_or_default())
    }
}

impl Drawable for Connector {
    fn render_to_layers(&self, position: Point) -> LayeredOutput {
        let mut output = LayeredOutput::new();
        let bounds = position.to_bounds(self.size());
        let glyph = glyph_group(bounds, &CONNECTOR_PATHS, &self.stroke).set("data-glyph", "connector");
        output.add_to_layer(RenderLayer::Glyph, Box::new(glyph));
        output
    }

    fn size(&self) -> Size {
        Size::new(CONNECTOR_SIZE, CONNECTOR_SIZE)
    }
}
