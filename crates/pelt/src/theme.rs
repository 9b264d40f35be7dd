//! Visual theme for the pipeline diagram.
//!
//! A [`Theme`] owns every text definition and card theme the view needs, so
//! the render tree can borrow them for its whole lifetime. The base look is
//! described with style tokens; [`StyleConfig`](crate::config::StyleConfig)
//! values are laid on top.

use log::debug;

use pelt_core::{
    color::Color,
    draw::{CardTheme, Connector, TextDefinition},
    style::CardStyle,
};

use crate::{config::AppConfig, error::PeltError};

const PAGE_TOKENS: &str = "bg-slate-50";
const HEADING_TOKENS: &str = "text-3xl font-extrabold";
const SUBTITLE_TOKENS: &str = "text-base text-slate-600";
const FOOTER_TOKENS: &str = "text-sm text-slate-600";
const FOOTER_LABEL_TOKENS: &str = "text-sm font-bold text-slate-600";

const STAGE_CARD_TOKENS: &str = "p-4 rounded-2xl shadow-sm border border-slate-100 bg-white";
const SUMMARY_CARD_TOKENS: &str = "p-5 rounded-2xl shadow-md border border-slate-100 bg-white";
const CARD_TITLE_TOKENS: &str = "text-lg font-semibold";
const CARD_NOTE_TOKENS: &str = "text-xs text-slate-500";
const CARD_ITEM_TOKENS: &str = "text-sm text-slate-700";

/// Text definitions and card themes for one rendering of a diagram.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    background: Color,
    heading: TextDefinition,
    subtitle: TextDefinition,
    footer_label: TextDefinition,
    footer: TextDefinition,
    stage: CardTheme,
    summary: CardTheme,
    connector: Connector,
}

impl Theme {
    /// Builds the theme, applying the style and layout overrides in `config`.
    ///
    /// # Errors
    ///
    /// Returns [`PeltError::Config`] if a configured color cannot be parsed or
    /// the stage width is not a positive number.
    pub fn from_config(config: &AppConfig) -> Result<Self, PeltError> {
        let style = config.style();
        let mut theme = Self::with_font_family(style.font_family());

        if let Some(background) = style.background_color().map_err(PeltError::Config)? {
            theme.background = background;
        }
        if let Some(accent) = style.accent_color().map_err(PeltError::Config)? {
            theme.stage = theme.stage.with_marker_color(accent);
        }
        if let Some(color) = style.connector_color().map_err(PeltError::Config)? {
            theme.connector = Connector::new(color);
        }

        let stage_width = config.layout().stage_width();
        if !stage_width.is_finite() || stage_width <= 0.0 {
            return Err(PeltError::Config(format!(
                "stage_width must be a positive number, got {stage_width}"
            )));
        }
        theme.stage = theme.stage.with_width(stage_width);

        debug!(stage_width, background:% = theme.background; "Theme built");
        Ok(theme)
    }

    fn with_font_family(family: Option<&str>) -> Self {
        let text = |tokens: &str| {
            let mut definition = TextDefinition::from_tokens(tokens);
            if let Some(family) = family {
                definition.set_font_family(family);
            }
            definition
        };
        let card = |tokens: &str| {
            CardTheme::new(
                CardStyle::from_tokens(tokens),
                text(CARD_TITLE_TOKENS),
                text(CARD_NOTE_TOKENS),
                text(CARD_ITEM_TOKENS),
            )
        };

        Self {
            background: CardStyle::from_tokens(PAGE_TOKENS)
                .fill()
                .unwrap_or_default(),
            heading: text(HEADING_TOKENS),
            subtitle: text(SUBTITLE_TOKENS),
            footer_label: text(FOOTER_LABEL_TOKENS),
            footer: text(FOOTER_TOKENS),
            stage: card(STAGE_CARD_TOKENS),
            summary: card(SUMMARY_CARD_TOKENS),
            connector: Connector::default(),
        }
    }

    /// Page background color.
    pub fn background(&self) -> Color {
        self.background
    }

    pub fn heading(&self) -> &TextDefinition {
        &self.heading
    }

    pub fn subtitle(&self) -> &TextDefinition {
        &self.subtitle
    }

    pub fn footer_label(&self) -> &TextDefinition {
        &self.footer_label
    }

    pub fn footer(&self) -> &TextDefinition {
        &self.footer
    }

    /// Theme shared by the pipeline stage cards.
    pub fn stage(&self) -> &CardTheme {
        &self.stage
    }

    /// Theme shared by the summary cards.
    pub fn summary(&self) -> &CardTheme {
        &self.summary
    }

    /// Prototype connector inserted between adjacent stages.
    pub fn connector(&self) -> &Connector {
        &self.connector
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::with_font_family(None)
    }
}

#[cfg(test)]
mod tests {
    use pelt_core::style::{palette_color, parse_tokens};

    use super::*;
    use crate::config::{LayoutConfig, StyleConfig};

    fn config_from(toml_src: &str) -> AppConfig {
        toml::from_str(toml_src).unwrap()
    }

    #[test]
    fn test_default_theme() {
        let theme = Theme::default();

        assert_eq!(theme.background(), palette_color("slate-50").unwrap());
        assert_eq!(theme.heading().font_size(), 30);
        assert_eq!(theme.heading().font_weight(), 800);
        assert_eq!(theme.stage().title().font_size(), 18);
        assert_eq!(theme.stage().title().font_weight(), 600);
        assert_eq!(theme.stage().note().font_size(), 12);
        assert_eq!(theme.stage().item().color(), palette_color("slate-700"));
        assert_eq!(theme.stage().marker_color(), palette_color("sky-400").unwrap());
        assert_eq!(theme.stage().style().fill(), palette_color("white"));
        assert_eq!(theme.connector(), &Connector::default());
    }

    #[test]
    fn test_builtin_tokens_are_all_recognized() {
        for tokens in [
            PAGE_TOKENS,
            HEADING_TOKENS,
            SUBTITLE_TOKENS,
            FOOTER_TOKENS,
            FOOTER_LABEL_TOKENS,
            STAGE_CARD_TOKENS,
            SUMMARY_CARD_TOKENS,
            CARD_TITLE_TOKENS,
            CARD_NOTE_TOKENS,
            CARD_ITEM_TOKENS,
        ] {
            assert_eq!(
                parse_tokens(tokens).count(),
                tokens.split_whitespace().count(),
                "unrecognized token in `{tokens}`"
            );
        }
    }

    #[test]
    fn test_summary_cards_are_roomier() {
        let theme = Theme::default();
        let stage = theme.stage().style();
        let summary = theme.summary().style();

        assert!(summary.padding().top() > stage.padding().top());
        assert!(summary.shadow().unwrap().offset_y() > stage.shadow().unwrap().offset_y());
    }

    #[test]
    fn test_default_config_matches_default_theme() {
        let theme = Theme::from_config(&AppConfig::default()).unwrap();
        assert_eq!(theme, Theme::default());
    }

    #[test]
    fn test_style_overrides() {
        let config = config_from(
            r##"
            [style]
            background_color = "#ffffff"
            font_family = "Inter"
            accent_color = "#ff0000"
            connector_color = "#00ff00"
            "##,
        );
        let theme = Theme::from_config(&config).unwrap();

        assert_eq!(theme.background(), Color::new("#ffffff").unwrap());
        assert_eq!(theme.stage().marker_color(), Color::new("#ff0000").unwrap());
        assert_eq!(theme.connector(), &Connector::new(Color::new("#00ff00").unwrap()));
        assert_eq!(theme.heading().font_family(), "Inter");
        assert_eq!(theme.summary().item().font_family(), "Inter");
        assert_eq!(theme.footer_label().font_family(), "Inter");
    }

    #[test]
    fn test_stage_width_override() {
        let config = AppConfig::new(LayoutConfig::new(260.0, 3), StyleConfig::default());
        let theme = Theme::from_config(&config).unwrap();
        assert_eq!(theme.stage().width(), 260.0);
    }

    #[test]
    fn test_invalid_stage_width() {
        let config = AppConfig::new(LayoutConfig::new(0.0, 3), StyleConfig::default());
        let err = Theme::from_config(&config).unwrap_err();
        assert!(matches!(err, PeltError::Config(_)));
    }

    #[test]
    fn test_invalid_color_is_config_error() {
        let config = config_from("[style]\nbackground_color = \"not-a-color\"\n");
        let err = Theme::from_config(&config).unwrap_err();
        assert!(matches!(err, PeltError::Config(msg) if msg.contains("background_color")));
    }
}
