//! Configuration types for Pelt diagram rendering.
//!
//! All types implement [`serde::Deserialize`] so they can be loaded from
//! TOML files.
//!
//! - [`AppConfig`] - Top-level configuration combining layout and style settings.
//! - [`LayoutConfig`] - Card sizes and grid shape.
//! - [`StyleConfig`] - Colors and font family overrides.
//!
//! # Example
//!
//! ```
//! # use pelt::config::AppConfig;
//! let config = AppConfig::default();
//! assert_eq!(config.layout().summary_columns(), 3);
//! assert!(config.style().background_color().is_ok());
//! ```

use serde::Deserialize;

use pelt_core::color::Color;

const DEFAULT_STAGE_WIDTH: f32 = 200.0;
const DEFAULT_SUMMARY_COLUMNS: usize = 3;

/// Top-level application configuration combining layout and style settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Layout configuration section.
    #[serde(default)]
    layout: LayoutConfig,

    /// Style configuration section.
    #[serde(default)]
    style: StyleConfig,
}

impl AppConfig {
    pub fn new(layout: LayoutConfig, style: StyleConfig) -> Self {
        Self { layout, style }
    }

    /// Returns the layout configuration.
    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }
}

/// Card sizes and grid shape.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Width of each pipeline stage card, in pixels.
    stage_width: f32,

    /// Number of columns in the summary grid.
    summary_columns: usize,
}

impl LayoutConfig {
    pub fn new(stage_width: f32, summary_columns: usize) -> Self {
        Self {
            stage_width,
            summary_columns,
        }
    }

    pub fn stage_width(&self) -> f32 {
        self.stage_width
    }

    pub fn summary_columns(&self) -> usize {
        self.summary_columns
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            stage_width: DEFAULT_STAGE_WIDTH,
            summary_columns: DEFAULT_SUMMARY_COLUMNS,
        }
    }
}

/// Visual overrides. Unset fields keep the built-in theme.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct StyleConfig {
    /// Page background, as a color string.
    #[serde(default)]
    background_color: Option<String>,

    /// Font family used for every text element.
    #[serde(default)]
    font_family: Option<String>,

    /// Color of the bullet markers on stage cards.
    #[serde(default)]
    accent_color: Option<String>,

    /// Stroke color of the connectors between stages.
    #[serde(default)]
    connector_color: Option<String>,
}

impl StyleConfig {
    /// Returns the parsed background [`Color`], or `None` if not configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured string is not a valid color.
    pub fn background_color(&self) -> Result<Option<Color>, String> {
        parse_color("background_color", self.background_color.as_deref())
    }

    /// Returns the parsed accent [`Color`], or `None` if not configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured string is not a valid color.
    pub fn accent_color(&self) -> Result<Option<Color>, String> {
        parse_color("accent_color", self.accent_color.as_deref())
    }

    /// Returns the parsed connector [`Color`], or `None` if not configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured string is not a valid color.
    pub fn connector_color(&self) -> Result<Option<Color>, String> {
        parse_color("connector_color", self.connector_color.as_deref())
    }

    pub fn font_family(&self) -> Option<&str> {
        self.font_family.as_deref()
    }
}

fn parse_color(field: &str, value: Option<&str>) -> Result<Option<Color>, String> {
    value
        .map(Color::new)
        .transpose()
        .map_err(|err| format!("Invalid {field} in config: {err}"))
}
