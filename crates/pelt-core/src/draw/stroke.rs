//! Stroke definitions for glyph outlines and card borders.
//!
//! - [`StrokeDefinition`]: color, width, cap and join of a stroke
//! - [`StrokeCap`]: how line endpoints are rendered
//! - [`StrokeJoin`]: how line corners are rendered
//! - [`apply_stroke!`](crate::apply_stroke!): applies a stroke to an SVG element
//!
//! # Example
//!
//! ```
//! use pelt_core::draw::{StrokeCap, StrokeDefinition, StrokeJoin};
//! use pelt_core::color::Color;
//! use svg::node::element as svg_element;
//!
//! let stroke = StrokeDefinition::new(Color::new("#94a3b8").unwrap(), 1.5)
//!     .with_cap(StrokeCap::Round)
//!     .with_join(StrokeJoin::Round);
//!
//! let path = svg_element::Path::new().set("d", "M3 12h18");
//! let path = pelt_core::apply_stroke!(path, &stroke);
//! ```

use crate::color::Color;

/// Defines how line endpoints are rendered.
///
/// Maps directly to SVG `stroke-linecap` attribute values.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum StrokeCap {
    /// Flat cap at the exact endpoint (SVG default)
    #[default]
    Butt,
    /// Rounded cap extending beyond the endpoint by half the stroke width
    Round,
    /// Square cap extending beyond the endpoint by half the stroke width
    Square,
}

impl StrokeCap {
    /// Returns the SVG stroke-linecap value
    pub fn to_svg_value(&self) -> &'static str {
        match self {
            Self::Butt => "butt",
            Self::Round => "round",
            Self::Square => "square",
        }
    }
}

/// Defines how line corners (joins) are rendered.
///
/// Maps directly to SVG `stroke-linejoin` attribute values.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum StrokeJoin {
    /// Sharp corner with mitered point (SVG default)
    #[default]
    Miter,
    /// Rounded corner
    Round,
    /// Beveled (cut-off) corner
    Bevel,
}

impl StrokeJoin {
    /// Returns the SVG stroke-linejoin value
    pub fn to_svg_value(&self) -> &'static str {
        match self {
            Self::Miter => "miter",
            Self::Round => "round",
            Self::Bevel => "bevel",
        }
    }
}

/// A stroke definition for rendering lines and borders.
#[derive(Debug, Clone, PartialEq)]
pub struct StrokeDefinition {
    color: Color,
    width: f32,
    cap: StrokeCap,
    join: StrokeJoin,
}

impl StrokeDefinition {
    /// Creates a new stroke with the given color and width, butt caps and miter joins.
    pub fn new(color: Color, width: f32) -> Self {
        Self {
            color,
            width,
            ..Self::default()
        }
    }

    /// Creates a stroke with round caps and joins, as used by the diagram glyphs.
    pub fn rounded(color: Color, width: f32) -> Self {
        Self::new(color, width)
            .with_cap(StrokeCap::Round)
            .with_join(StrokeJoin::Round)
    }

    pub fn with_cap(mut self, cap: StrokeCap) -> Self {
        self.cap = cap;
        self
    }

    pub fn with_join(mut self, join: StrokeJoin) -> Self {
        self.join = join;
        self
    }

    /// Returns the stroke color.
    pub fn color(&self) -> Color {
        self.color
    }

    /// Returns the stroke width.
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Returns the stroke cap style.
    pub fn cap(&self) -> StrokeCap {
        self.cap
    }

    /// Returns the stroke join style.
    pub fn join(&self) -> StrokeJoin {
        self.join
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    pub fn set_width(&mut self, width: f32) {
        self.width = width;
    }
}

impl Default for StrokeDefinition {
    fn default() -> Self {
        Self {
            color: Color::default(),
            width: 1.0,
            cap: StrokeCap::default(),
            join: StrokeJoin::default(),
        }
    }
}

/// Apply all stroke attributes to an SVG element.
///
/// Applies color, opacity, width, line cap and line join.
///
/// # Examples
///
/// ```
/// use pelt_core::draw::StrokeDefinition;
/// use pelt_core::color::Color;
/// use svg::node::element as svg_element;
///
/// let stroke = StrokeDefinition::new(Color::new("black").unwrap(), 2.0);
/// let rect = svg_element::Rectangle::new()
///     .set("width", 100)
///     .set("height", 50);
///
/// let rect = pelt_core::apply_stroke!(rect, &stroke);
/// ```
#[macro_export]
macro_rules! apply_stroke {
    ($element:expr, $stroke:expr) => {{
        $element
            .set("stroke", $stroke.color().to_string())
            .set("stroke-opacity", $stroke.color().alpha())
            .set("stroke-width", $stroke.width())
            .set("stroke-linecap", $stroke.cap().to_svg_value())
            .set("stroke-linejoin", $stroke.join().to_svg_value())
    }};
}
