//! Class-name-like style tokens.
//!
//! Diagram elements are styled with short tokens such as `bg-white`,
//! `rounded-2xl` or `text-slate-500`. This module parses those tokens into
//! [`StyleToken`] values and applies them to [`CardStyle`]. Text definitions
//! consume the same tokens (see [`TextDefinition::apply_tokens`]).
//!
//! Tokens are presentational configuration only: a token that cannot be
//! parsed is skipped, and a parsed token that does not apply to the styled
//! element is ignored.
//!
//! # Example
//!
//! ```
//! # use pelt_core::style::CardStyle;
//! let style = CardStyle::from_tokens("p-4 rounded-2xl shadow-sm border border-slate-100 bg-white");
//! assert_eq!(style.radius(), 16.0);
//! assert!(style.shadow().is_some());
//! ```
//!
//! [`TextDefinition::apply_tokens`]: crate::draw::TextDefinition::apply_tokens

use std::str::FromStr;

use log::{debug, trace};

use crate::{color::Color, draw::StrokeDefinition, geometry::Insets};

/// One spacing step of the token scale, in pixels (`p-4` is 16px).
const SPACING_UNIT: f32 = 4.0;

/// Named colors understood by `bg-*`, `text-*` and `border-*` tokens.
const PALETTE: &[(&str, &str)] = &[
    ("white", "#ffffff"),
    ("black", "#000000"),
    ("slate-50", "#f8fafc"),
    ("slate-100", "#f1f5f9"),
    ("slate-200", "#e2e8f0"),
    ("slate-300", "#cbd5e1"),
    ("slate-400", "#94a3b8"),
    ("slate-500", "#64748b"),
    ("slate-600", "#475569"),
    ("slate-700", "#334155"),
    ("slate-800", "#1e293b"),
    ("slate-900", "#0f172a"),
    ("sky-100", "#e0f2fe"),
    ("sky-200", "#bae6fd"),
    ("sky-300", "#7dd3fc"),
    ("sky-400", "#38bdf8"),
    ("sky-500", "#0ea5e9"),
    ("sky-600", "#0284c7"),
    ("sky-700", "#0369a1"),
];

/// Looks up a palette color by name (e.g. `"slate-500"`).
///
/// # Examples
///
/// ```
/// # use pelt_core::style::palette_color;
/// assert!(palette_color("sky-400").is_some());
/// assert!(palette_color("mauve-999").is_none());
/// ```
pub fn palette_color(name: &str) -> Option<Color> {
    PALETTE
        .iter()
        .find(|(key, _)| *key == name)
        .and_then(|(_, hex)| Color::new(hex).ok())
}

/// Resolves a token color suffix: a palette name or an arbitrary `[css]` value.
fn parse_color(name: &str) -> Option<Color> {
    match name.strip_prefix('[').and_then(|s| s.strip_suffix(']')) {
        Some(css) => Color::new(css).ok(),
        None => palette_color(name),
    }
}

/// A drop shadow drawn as an offset translucent copy of the element outline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shadow {
    offset_y: f32,
    spread: f32,
    opacity: f32,
}

impl Shadow {
    pub const SMALL: Self = Self::new(1.0, 0.0, 0.05);
    pub const BASE: Self = Self::new(1.0, 1.0, 0.1);
    pub const MEDIUM: Self = Self::new(4.0, 2.0, 0.1);
    pub const LARGE: Self = Self::new(10.0, 4.0, 0.1);

    pub const fn new(offset_y: f32, spread: f32, opacity: f32) -> Self {
        Self {
            offset_y,
            spread,
            opacity,
        }
    }

    pub fn offset_y(&self) -> f32 {
        self.offset_y
    }

    pub fn spread(&self) -> f32 {
        self.spread
    }

    pub fn opacity(&self) -> f32 {
        self.opacity
    }
}

/// A single parsed style token.
#[derive(Debug, Clone, PartialEq)]
pub enum StyleToken {
    /// `bg-<color>`
    Background(Color),
    /// `text-<color>`
    TextColor(Color),
    /// `text-xs` … `text-3xl`, in pixels
    FontSize(u16),
    /// `font-normal` … `font-extrabold`, as a CSS weight
    FontWeight(u16),
    /// `p-<n>`, in pixels
    Padding(f32),
    /// `rounded`, `rounded-<size>`, corner radius in pixels
    Rounded(f32),
    /// `shadow`, `shadow-<size>`; `None` for `shadow-none`
    Shadow(Option<Shadow>),
    /// `border`, `border-<n>`, width in pixels
    Border(f32),
    /// `border-<color>`
    BorderColor(Color),
}

impl FromStr for StyleToken {
    type Err = String;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let unknown = || format!("unrecognized style token `{token}`");

        if let Some(rest) = token.strip_prefix("bg-") {
            return parse_color(rest).map(Self::Background).ok_or_else(unknown);
        }

        if let Some(rest) = token.strip_prefix("text-") {
            let size = match rest {
                "xs" => Some(12),
                "sm" => Some(14),
                "base" => Some(16),
                "lg" => Some(18),
                "xl" => Some(20),
                "2xl" => Some(24),
                "3xl" => Some(30),
                _ => None,
            };
            return match size {
                Some(size) => Ok(Self::FontSize(size)),
                None => parse_color(rest).map(Self::TextColor).ok_or_else(unknown),
            };
        }

        if let Some(rest) = token.strip_prefix("font-") {
            let weight = match rest {
                "normal" => 400,
                "medium" => 500,
                "semibold" => 600,
                "bold" => 700,
                "extrabold" => 800,
                _ => return Err(unknown()),
            };
            return Ok(Self::FontWeight(weight));
        }

        if let Some(rest) = token.strip_prefix("p-") {
            return rest
                .parse::<f32>()
                .ok()
                .filter(|steps| steps.is_finite() && *steps >= 0.0)
                .map(|steps| Self::Padding(steps * SPACING_UNIT))
                .ok_or_else(unknown);
        }

        if token == "rounded" {
            return Ok(Self::Rounded(4.0));
        }
        if let Some(rest) = token.strip_prefix("rounded-") {
            let radius = match rest {
                "none" => 0.0,
                "sm" => 2.0,
                "md" => 6.0,
                "lg" => 8.0,
                "xl" => 12.0,
                "2xl" => 16.0,
                "3xl" => 24.0,
                "full" => 9999.0,
                _ => return Err(unknown()),
            };
            return Ok(Self::Rounded(radius));
        }

        if token == "shadow" {
            return Ok(Self::Shadow(Some(Shadow::BASE)));
        }
        if let Some(rest) = token.strip_prefix("shadow-") {
            let shadow = match rest {
                "none" => None,
                "sm" => Some(Shadow::SMALL),
                "md" => Some(Shadow::MEDIUM),
                "lg" => Some(Shadow::LARGE),
                _ => return Err(unknown()),
            };
            return Ok(Self::Shadow(shadow));
        }

        if token == "border" {
            return Ok(Self::Border(1.0));
        }
        if let Some(rest) = token.strip_prefix("border-") {
            if let Ok(width) = rest.parse::<u8>() {
                return Ok(Self::Border(f32::from(width)));
            }
            return parse_color(rest).map(Self::BorderColor).ok_or_else(unknown);
        }

        Err(unknown())
    }
}

/// Parses a whitespace-separated token string, skipping unrecognized tokens.
///
/// # Examples
///
/// ```
/// # use pelt_core::style::{parse_tokens, StyleToken};
/// let tokens: Vec<_> = parse_tokens("rounded flex items-start").collect();
/// assert_eq!(tokens, vec![StyleToken::Rounded(4.0)]);
/// ```
pub fn parse_tokens(tokens: &str) -> impl Iterator<Item = StyleToken> + '_ {
    tokens
        .split_whitespace()
        .filter_map(|token| match token.parse::<StyleToken>() {
            Ok(parsed) => Some(parsed),
            Err(err) => {
                debug!(token, err:%; "Ignoring style token");
                None
            }
        })
}

/// Visual style of a card: fill, border, corner radius, shadow and padding.
#[derive(Debug, Clone, PartialEq)]
pub struct CardStyle {
    fill: Option<Color>,
    border_width: f32,
    border_color: Color,
    radius: f32,
    shadow: Option<Shadow>,
    padding: Insets,
}

impl CardStyle {
    /// Creates an unstyled card: no fill, no border, square corners.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a card style from a token string.
    pub fn from_tokens(tokens: &str) -> Self {
        let mut style = Self::new();
        style.apply_tokens(tokens);
        style
    }

    /// Applies the card-related tokens of `tokens` on top of this style.
    ///
    /// Text tokens are ignored here.
    pub fn apply_tokens(&mut self, tokens: &str) {
        for token in parse_tokens(tokens) {
            match token {
                StyleToken::Background(color) => self.fill = Some(color),
                StyleToken::Padding(padding) => self.padding = Insets::uniform(padding),
                StyleToken::Rounded(radius) => self.radius = radius,
                StyleToken::Shadow(shadow) => self.shadow = shadow,
                StyleToken::Border(width) => self.border_width = width,
                StyleToken::BorderColor(color) => self.border_color = color,
                other => trace!(token:? = other; "Token does not apply to cards"),
            }
        }
    }

    pub fn fill(&self) -> Option<Color> {
        self.fill
    }

    pub fn set_fill(&mut self, fill: Option<Color>) {
        self.fill = fill;
    }

    /// Returns the border stroke, or `None` when the card has no border.
    pub fn border(&self) -> Option<StrokeDefinition> {
        (self.border_width > 0.0).then(|| StrokeDefinition::new(self.border_color, self.border_width))
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn shadow(&self) -> Option<Shadow> {
        self.shadow
    }

    pub fn padding(&self) -> Insets {
        self.padding
    }
}

impl Default for CardStyle {
    fn default() -> Self {
        Self {
            fill: None,
            border_width: 0.0,
            border_color: palette_color("slate-200").unwrap_or_default(),
            radius: 0.0,
            shadow: None,
            padding: Insets::default(),
        }
    }
}
