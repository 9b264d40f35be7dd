//! Row markers drawn in front of card items.

use svg::node::element as svg_element;

use crate::{
    apply_stroke,
    color::Color,
    draw::{Drawable, LayeredOutput, RenderLayer, StrokeDefinition},
    geometry::{Bounds, Point, Size},
};

/// Side of the square box the glyph paths are designed in.
pub(super) const GLYPH_DESIGN_SIZE: f32 = 24.0;

const BULLET_SIZE: f32 = 8.0;
const ARROW_SIZE: f32 = 16.0;
const ARROW_STROKE_WIDTH: f32 = 2.0;
const ARROW_PATHS: [&str; 2] = ["M5 12h14", "M12 5l7 7-7 7"];

/// A marker in front of a card row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Marker {
    /// Filled dot, aligned to the first line of its row.
    Bullet(Color),
    /// Right-pointing arrow glyph, centered on its row.
    Arrow(Color),
}

impl Marker {
    /// Returns the value of the `data-marker` attribute.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Bullet(_) => "bullet",
            Self::Arrow(_) => "arrow",
        }
    }

    /// Whether the marker sits on the first text line rather than the row middle.
    pub fn aligns_to_first_line(&self) -> bool {
        matches!(self, Self::Bullet(_))
    }
}

impl Drawable for Marker {
    fn render_to_layers(&self, position: Point) -> LayeredOutput {
        let mut output = LayeredOutput::new();
        let bounds = position.to_bounds(self.size());

        match self {
            Self::Bullet(color) => {
                let dot = svg_element::Circle::new()
                    .set("cx", position.x())
                    .set("cy", position.y())
                    .set("r", BULLET_SIZE / 2.0)
                    .set("fill", color.to_string())
                    .set("fill-opacity", color.alpha())
                    .set("data-marker", self.name());
                output.add_to_layer(RenderLayer::Glyph, Box::new(dot));
            }
            Self::Arrow(color) => {
                let stroke = StrokeDefinition::rounded(*color, ARROW_STROKE_WIDTH);
                let glyph = glyph_group(bounds, &ARROW_PATHS, &stroke).set("data-marker", self.name());
                output.add_to_layer(RenderLayer::Glyph, Box::new(glyph));
            }
        }

        output
    }

    fn size(&self) -> Size {
        match self {
            Self::Bullet(_) => Size::new(BULLET_SIZE, BULLET_SIZE),
            Self::Arrow(_) => Size::new(ARROW_SIZE, ARROW_SIZE),
        }
    }
}

/// Draws stroked paths from the 24×24 design box scaled into `bounds`.
pub(super) fn glyph_group(bounds: Bounds, paths: &[&str], stroke: &StrokeDefinition) -> svg_element::Group {
    let scale = bounds.width() / GLYPH_DESIGN_SIZE;
    let mut group = svg_element::Group::new().set(
        "transform",
        format!("translate({} {}) scale({scale})", bounds.min_x(), bounds.min_y()),
    );

    for d in paths {
        let path = svg_element::Path::new().set("d", *d).set("fill", "none");
        group = group.add(apply_stroke!(path, stroke));
    }

    group
}
