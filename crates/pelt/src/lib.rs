//! Pelt - renders an end-to-end ELT + streaming pipeline diagram to SVG.
//!
//! A [`view::DiagramView`] holds a fixed set of section descriptors. Rendering
//! turns it into a tree of stage cards, connectors and summary cards, the
//! layout engine positions that tree on a page, and the SVG exporter writes
//! the page as a standalone document.

pub mod catalog;
pub mod config;
pub mod layout;
pub mod theme;
pub mod view;

mod error;
mod export;

pub use pelt_core::{color, draw, geometry, semantic, style};

pub use error::PeltError;

use log::{debug, info};

use config::AppConfig;
use export::Exporter;
use layout::LayoutEngine;
use theme::Theme;
use view::DiagramView;

/// Builder for rendering Pelt diagrams.
///
/// # Examples
///
/// ```rust
/// use pelt::{DiagramBuilder, config::AppConfig, view::DiagramView};
///
/// let builder = DiagramBuilder::new(AppConfig::default());
/// let svg = builder
///     .render_svg(&DiagramView::default())
///     .expect("Failed to render");
///
/// assert!(svg.contains("data-glyph=\"connector\""));
/// ```
#[derive(Debug, Default)]
pub struct DiagramBuilder {
    config: AppConfig,
}

impl DiagramBuilder {
    /// Create a new diagram builder with the given configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Application configuration including layout and style settings
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Builds the [`Theme`] described by the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`PeltError::Config`] for invalid colors or sizes.
    pub fn theme(&self) -> Result<Theme, PeltError> {
        Theme::from_config(&self.config)
    }

    /// Render a diagram view to an SVG string.
    ///
    /// # Errors
    ///
    /// Returns `PeltError` for configuration, layout or rendering errors.
    pub fn render_svg(&self, view: &DiagramView) -> Result<String, PeltError> {
        info!(stages_count = view.layout().stages().len(); "Rendering diagram view");
        let theme = self.theme()?;
        let tree = view.render(&theme);
        debug!("View tree rendered");

        let layout = LayoutEngine::from_config(self.config.layout()).layout(&tree)?;

        let svg = export::svg::SvgBuilder::new()
            .with_background(Some(theme.background()))
            .build()
            .export_layout(&layout)?;

        info!("SVG rendered successfully");
        Ok(svg)
    }
}
