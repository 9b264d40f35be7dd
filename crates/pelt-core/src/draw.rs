//! Drawable Components for Diagram Rendering
//!
//! This module provides drawable abstractions for the elements of a pipeline
//! diagram. All drawable components implement the [`Drawable`] trait, which
//! provides a consistent interface for rendering to layered SVG output and
//! calculating size.
//!
//! # Layer-Based Rendering
//!
//! Drawables render to one or more [`RenderLayer`]s, which are ordered during
//! final SVG generation.

mod card;
mod connector;
mod layer;
mod marker;
mod positioned;
mod stroke;
mod text;

pub use card::{CardTheme, LargeCard, StageCard};
pub use connector::Connector;
pub use layer::{LayeredOutput, RenderLayer, SvgNode};
pub use marker::Marker;
pub use positioned::PositionedDrawable;
pub use stroke::{StrokeCap, StrokeDefinition, StrokeJoin};
pub use text::{Text, TextDefinition};

use crate::geometry::{Point, Size};

/// Trait for drawable diagram elements that can be rendered to SVG layers.
pub trait Drawable: std::fmt::Debug {
    /// Renders this drawable centered on `position`.
    ///
    /// Implementations create SVG nodes and add them to the appropriate layers
    /// of the returned [`LayeredOutput`].
    fn render_to_layers(&self, position: Point) -> LayeredOutput;

    /// Returns the size of this drawable.
    fn size(&self) -> Size;
}
