//! Export functionality for Pelt diagrams.
//!
//! This module provides the [`Exporter`] trait, the last stage of the
//! rendering pipeline.
//!
//! ```text
//! DiagramView
//!     ↓ render
//! ViewTree
//!     ↓ layout
//! Layout (positioned elements)
//!     ↓ export (this module)
//! Document string
//! ```
//!
//! # Available Backends
//!
//! - [`svg`] - SVG output via [`svg::SvgBuilder`] and [`svg::Svg`]

/// SVG export backend.
pub mod svg;

use thiserror::Error;

use crate::layout::Layout;

/// Abstraction for diagram export backends.
pub trait Exporter {
    /// Exports a positioned layout to the backend's output format.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Render`] if the layout cannot be converted to the
    /// target format.
    fn export_layout(&self, layout: &Layout<'_>) -> Result<String, Error>;
}

/// Errors that can occur during diagram export.
///
/// Converted into [`PeltError::Export`](crate::PeltError::Export) at the
/// crate boundary.
#[derive(Debug, Error)]
pub enum Error {
    /// A rendering or conversion failure.
    #[error("Render error: {0}")]
    Render(String),
}
