//! Stage and summary cards.
//!
//! Both cards draw a titled, rounded panel with one marker row per item:
//! [`StageCard`] uses bullet markers and may show a note under its title,
//! [`LargeCard`] uses arrow markers. Rows keep the order of the section's
//! items, and an empty item list draws a card without rows.

use std::borrow::Cow;

use svg::node::element as svg_element;

use crate::{
    apply_stroke,
    color::Color,
    draw::{Drawable, LayeredOutput, Marker, RenderLayer, Text, TextDefinition},
    geometry::{Point, Size},
    semantic::SectionDescriptor,
    style::{CardStyle, palette_color},
};

const DEFAULT_CARD_WIDTH: f32 = 200.0;
/// Space between the title and the note.
const NOTE_GAP: f32 = 4.0;
/// Space between the heading block and the first row.
const LIST_GAP: f32 = 12.0;
/// Space between consecutive rows.
const ROW_GAP: f32 = 8.0;
/// Space between a marker and its item text.
const MARKER_GAP: f32 = 12.0;

/// Shared look of a family of cards.
#[derive(Debug, Clone, PartialEq)]
pub struct CardTheme {
    style: CardStyle,
    title: TextDefinition,
    note: TextDefinition,
    item: TextDefinition,
    marker_color: Color,
    width: f32,
}

impl CardTheme {
    /// Creates a theme; markers default to `sky-400` and the width to 200px.
    pub fn new(style: CardStyle, title: TextDefinition, note: TextDefinition, item: TextDefinition) -> Self {
        Self {
            style,
            title,
            note,
            item,
            marker_color: palette_color("sky-400").unwrap_or_default(),
            width: DEFAULT_CARD_WIDTH,
        }
    }

    pub fn with_marker_color(mut self, color: Color) -> Self {
        self.marker_color = color;
        self
    }

    pub fn with_width(mut self, width: f32) -> Self {
        self.width = width;
        self
    }

    pub fn style(&self) -> &CardStyle {
        &self.style
    }

    pub fn title(&self) -> &TextDefinition {
        &self.title
    }

    pub fn note(&self) -> &TextDefinition {
        &self.note
    }

    pub fn item(&self) -> &TextDefinition {
        &self.item
    }

    pub fn marker_color(&self) -> Color {
        self.marker_color
    }

    pub fn width(&self) -> f32 {
        self.width
    }
}

/// Measured content of a card, wrapped to the card width.
#[derive(Debug, Clone)]
struct CardBody<'a> {
    kind: &'static str,
    theme: &'a CardTheme,
    style: Cow<'a, CardStyle>,
    section: &'a SectionDescriptor,
    marker: Marker,
    title: Text<'a>,
    note: Option<Text<'a>>,
    rows: Vec<Text<'a>>,
    width: f32,
    min_height: f32,
}

impl<'a> CardBody<'a> {
    fn new(
        kind: &'static str,
        theme: &'a CardTheme,
        section: &'a SectionDescriptor,
        marker: Marker,
        show_note: bool,
    ) -> Self {
        let title = Text::new(&theme.title, section.title()).with_attribute("data-role", "title");
        let note = section
            .note()
            .filter(|_| show_note)
            .map(|note| Text::new(&theme.note, note).with_attribute("data-role", "note"));
        let rows = section
            .items()
            .iter()
            .enumerate()
            .map(|(i, item)| Text::new(&theme.item, item).with_attribute("data-row", i.to_string()))
            .collect();

        let mut body = Self {
            kind,
            theme,
            style: Cow::Borrowed(&theme.style),
            section,
            marker,
            title,
            note,
            rows,
            width: theme.width,
            min_height: 0.0,
        };
        body.rewrap();
        body
    }

    /// Re-wraps every text to the current width and padding.
    fn rewrap(&mut self) {
        let content_width = (self.width - self.style.padding().horizontal_sum()).max(0.0);
        let row_width = (content_width - self.marker.size().width() - MARKER_GAP).max(0.0);

        self.title = self.title.clone().with_max_width(content_width);
        self.note = self.note.take().map(|note| note.with_max_width(content_width));
        self.rows = std::mem::take(&mut self.rows)
            .into_iter()
            .map(|row| row.with_max_width(row_width))
            .collect();
    }

    fn apply_tokens(&mut self, tokens: &str) {
        self.style.to_mut().apply_tokens(tokens);
        self.rewrap();
    }

    fn set_width(&mut self, width: f32) {
        self.width = width;
        self.rewrap();
    }

    fn row_height(&self, row: &Text<'_>) -> f32 {
        row.size().height().max(self.marker.size().height())
    }

    fn content_height(&self) -> f32 {
        let mut height = self.title.size().height();
        if let Some(note) = &self.note {
            height += NOTE_GAP + note.size().height();
        }
        if !self.rows.is_empty() {
            let rows: f32 = self.rows.iter().map(|row| self.row_height(row)).sum();
            height += LIST_GAP + rows + ROW_GAP * (self.rows.len() - 1) as f32;
        }
        height
    }

    fn size(&self) -> Size {
        let height = self.content_height() + self.style.padding().vertical_sum();
        Size::new(self.width, height.max(self.min_height))
    }

    fn render_to_layers(&self, position: Point) -> LayeredOutput {
        let mut output = LayeredOutput::new();
        let bounds = position.to_bounds(self.size());
        let style = &self.style;

        if let Some(shadow) = style.shadow() {
            let spread = shadow.spread();
            let rect = svg_element::Rectangle::new()
                .set("x", bounds.min_x() - spread)
                .set("y", bounds.min_y() - spread + shadow.offset_y())
                .set("width", bounds.width() + spread * 2.0)
                .set("height", bounds.height() + spread * 2.0)
                .set("rx", style.radius() + spread)
                .set("fill", "black")
                .set("fill-opacity", shadow.opacity());
            output.add_to_layer(RenderLayer::Shadow, Box::new(rect));
        }

        let mut card = svg_element::Rectangle::new()
            .set("x", bounds.min_x())
            .set("y", bounds.min_y())
            .set("width", bounds.width())
            .set("height", bounds.height())
            .set("rx", style.radius())
            .set("data-card", self.kind);
        card = match style.fill() {
            Some(fill) => card
                .set("fill", fill.to_string())
                .set("fill-opacity", fill.alpha()),
            None => card.set("fill", "none"),
        };
        if let Some(border) = style.border() {
            card = apply_stroke!(card, &border);
        }
        output.add_to_layer(RenderLayer::Card, Box::new(card));

        let padding = style.padding();
        let left = bounds.min_x() + padding.left();
        let mut y = bounds.min_y() + padding.top();

        let title_size = self.title.size();
        output.merge(
            self.title
                .render_to_layers(Point::new(left + title_size.width() / 2.0, y + title_size.height() / 2.0)),
        );
        y += title_size.height();

        if let Some(note) = &self.note {
            y += NOTE_GAP;
            let note_size = note.size();
            output.merge(
                note.render_to_layers(Point::new(left + note_size.width() / 2.0, y + note_size.height() / 2.0)),
            );
            y += note_size.height();
        }

        if !self.rows.is_empty() {
            y += LIST_GAP;
        }

        let marker_size = self.marker.size();
        let text_left = left + marker_size.width() + MARKER_GAP;
        for (i, row) in self.rows.iter().enumerate() {
            if i > 0 {
                y += ROW_GAP;
            }
            let row_height = self.row_height(row);
            let text_size = row.size();

            let (marker_y, text_y) = if self.marker.aligns_to_first_line() {
                let first_line = row.definition().line_height();
                (y + first_line / 2.0, y + text_size.height() / 2.0)
            } else {
                (y + row_height / 2.0, y + row_height / 2.0)
            };

            output.merge(
                self.marker
                    .render_to_layers(Point::new(left + marker_size.width() / 2.0, marker_y)),
            );
            output.merge(row.render_to_layers(Point::new(text_left + text_size.width() / 2.0, text_y)));

            y += row_height;
        }

        output
    }
}

/// A pipeline stage card: title, optional note and bullet rows.
///
/// # Examples
///
/// ```
/// # use pelt_core::draw::{CardTheme, StageCard, TextDefinition};
/// # use pelt_core::semantic::SectionDescriptor;
/// # use pelt_core::style::CardStyle;
/// let theme = CardTheme::new(
///     CardStyle::from_tokens("p-4 rounded-2xl bg-white"),
///     TextDefinition::from_tokens("text-lg font-semibold"),
///     TextDefinition::from_tokens("text-xs text-slate-500"),
///     TextDefinition::from_tokens("text-sm text-slate-700"),
/// );
/// let section = SectionDescriptor::new("Storage")
///     .with_items(["Data Lake (S3 / GCS / ADLS)", "Raw Zone / Bronze"])
///     .with_note("Immutable raw data");
///
/// let card = StageCard::new(&theme, &section);
/// assert_eq!(card.row_count(), 2);
/// assert_eq!(card.note(), Some("Immutable raw data"));
/// ```
#[derive(Debug, Clone)]
pub struct StageCard<'a> {
    body: CardBody<'a>,
}

impl<'a> StageCard<'a> {
    pub fn new(theme: &'a CardTheme, section: &'a SectionDescriptor) -> Self {
        let marker = Marker::Bullet(theme.marker_color);
        Self {
            body: CardBody::new("stage", theme, section, marker, true),
        }
    }

    /// Applies style tokens (e.g. `bg-white`) on top of the theme's card style.
    pub fn with_color(mut self, tokens: &str) -> Self {
        self.body.apply_tokens(tokens);
        self
    }

    pub fn with_width(mut self, width: f32) -> Self {
        self.body.set_width(width);
        self
    }

    pub fn title(&self) -> &str {
        self.body.section.title()
    }

    /// The note shown beneath the title, if any.
    pub fn note(&self) -> Option<&str> {
        self.body.note.as_ref().map(Text::content)
    }

    /// Item strings, in row order.
    pub fn items(&self) -> &[String] {
        self.body.section.items()
    }

    pub fn rows(&self) -> &[Text<'a>] {
        &self.body.rows
    }

    pub fn row_count(&self) -> usize {
        self.body.rows.len()
    }

    pub fn marker(&self) -> Marker {
        self.body.marker
    }

    pub fn style(&self) -> &CardStyle {
        &self.body.style
    }
}

impl Drawable for StageCard<'_> {
    fn render_to_layers(&self, position: Point) -> LayeredOutput {
        self.body.render_to_layers(position)
    }

    fn size(&self) -> Size {
        self.body.size()
    }
}

/// A summary card: title and arrow rows.
#[derive(Debug, Clone)]
pub struct LargeCard<'a> {
    body: CardBody<'a>,
}

impl<'a> LargeCard<'a> {
    /// Creates a summary card. A note on `section` is not displayed.
    pub fn new(theme: &'a CardTheme, section: &'a SectionDescriptor) -> Self {
        let marker = Marker::Arrow(theme.item.color().unwrap_or_default());
        Self {
            body: CardBody::new("summary", theme, section, marker, false),
        }
    }

    pub fn with_width(mut self, width: f32) -> Self {
        self.body.set_width(width);
        self
    }

    /// Stretches the card to at least `height`.
    pub fn with_min_height(mut self, height: f32) -> Self {
        self.body.min_height = height;
        self
    }

    pub fn title(&self) -> &str {
        self.body.section.title()
    }

    /// Item strings, in row order.
    pub fn items(&self) -> &[String] {
        self.body.section.items()
    }

    pub fn rows(&self) -> &[Text<'a>] {
        &self.body.rows
    }

    pub fn row_count(&self) -> usize {
        self.body.rows.len()
    }

    pub fn marker(&self) -> Marker {
        self.body.marker
    }
}

impl Drawable for LargeCard<'_> {
    fn render_to_layers(&self, position: Point) -> LayeredOutput {
        self.body.render_to_layers(position)
    }

    fn size(&self) -> Size {
        self.body.size()
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    fn theme(card_tokens: &str) -> CardTheme {
        CardTheme::new(
            CardStyle::from_tokens(card_tokens),
            TextDefinition::from_tokens("text-lg font-semibold"),
            TextDefinition::from_tokens("text-xs text-slate-500"),
            TextDefinition::from_tokens("text-sm text-slate-700"),
        )
    }

    fn render(card: &impl Drawable) -> String {
        card.render_to_layers(Point::new(200.0, 200.0))
            .render()
            .iter()
            .map(|n| n.to_string())
            .collect()
    }

    fn sources() -> SectionDescriptor {
        SectionDescriptor::new("Sources").with_items([
            "Shopify / Stripe / Sales APIs",
            "MySQL / Postgres",
            "CSV / SFTP",
            "Event Stream (Kafka / Kinesis)",
        ])
    }

    #[test]
    fn test_stage_card_rows_follow_items() {
        let theme = theme("p-4 rounded-2xl bg-white");
        let section = sources();
        let card = StageCard::new(&theme, &section);

        assert_eq!(card.title(), "Sources");
        assert_eq!(card.row_count(), 4);
        let contents: Vec<_> = card.rows().iter().map(Text::content).collect();
        assert_eq!(contents, section.items());
        assert!(card.note().is_none());
    }

    #[test]
    fn test_stage_card_renders_one_bullet_per_item() {
        let theme = theme("p-4 rounded-2xl bg-white");
        let section = sources();
        let svg = render(&StageCard::new(&theme, &section));

        assert_eq!(svg.matches("data-marker=\"bullet\"").count(), 4);
        for i in 0..4 {
            assert!(svg.contains(&format!("data-row=\"{i}\"")));
        }
        assert!(!svg.contains("data-role=\"note\""));
    }

    #[test]
    fn test_stage_card_empty_items() {
        let theme = theme("p-4 bg-white");
        let section = SectionDescriptor::new("Orchestration");
        let card = StageCard::new(&theme, &section);

        assert_eq!(card.row_count(), 0);
        let svg = render(&card);
        assert_eq!(svg.matches("data-marker").count(), 0);
        assert!(svg.contains("Orchestration"));
    }

    #[test]
    fn test_stage_card_note_present_verbatim() {
        let theme = theme("p-4 bg-white");
        let section = SectionDescriptor::new("Ingestion (Batch)")
            .with_items(["Airbyte / Fivetran"])
            .with_note("CDC or scheduled");
        let card = StageCard::new(&theme, &section);

        assert_eq!(card.note(), Some("CDC or scheduled"));
        let svg = render(&card);
        assert!(svg.contains("data-role=\"note\""));
        assert!(svg.contains("CDC or scheduled"));
    }

    #[test]
    fn test_note_adds_height() {
        let theme = theme("p-4 bg-white");
        let plain = SectionDescriptor::new("Storage").with_items(["Raw Zone / Bronze"]);
        let noted = plain.clone().with_note("Immutable");

        let plain_height = StageCard::new(&theme, &plain).size().height();
        let noted_height = StageCard::new(&theme, &noted).size().height();
        assert!(noted_height > plain_height);
    }

    #[test]
    fn test_stage_card_with_color_overrides_fill() {
        let theme = theme("p-4 bg-slate-50");
        let section = sources();
        let card = StageCard::new(&theme, &section).with_color("bg-white");

        assert_eq!(card.style().fill(), palette_color("white"));
        assert_eq!(theme.style().fill(), palette_color("slate-50"));
    }

    #[test]
    fn test_stage_card_ignores_unknown_color_tokens() {
        let theme = theme("p-4 bg-white");
        let section = sources();
        let card = StageCard::new(&theme, &section).with_color("not-a-token also-unknown");

        assert_eq!(card.style(), theme.style());
    }

    #[test]
    fn test_card_width_follows_theme() {
        let theme = theme("p-4 bg-white").with_width(240.0);
        let section = sources();
        let card = StageCard::new(&theme, &section);
        assert_approx_eq!(f32, card.size().width(), 240.0);

        let card = card.with_width(300.0);
        assert_approx_eq!(f32, card.size().width(), 300.0);
    }

    #[test]
    fn test_large_card_renders_arrows() {
        let theme = theme("p-5 rounded-2xl shadow-md bg-white");
        let section = SectionDescriptor::new("Serving").with_items([
            "Looker / Tableau / Superset",
            "Feature Store / ML Warehouse",
            "APIs & Materialized Views",
        ]);
        let card = LargeCard::new(&theme, &section);

        assert_eq!(card.title(), "Serving");
        assert_eq!(card.items(), section.items());
        let svg = render(&card);
        assert_eq!(svg.matches("data-marker=\"arrow\"").count(), 3);
        assert_eq!(svg.matches("data-marker=\"bullet\"").count(), 0);
    }

    #[test]
    fn test_large_card_hides_note() {
        let theme = theme("p-5 bg-white");
        let section = SectionDescriptor::new("Serving").with_note("hidden");
        let svg = render(&LargeCard::new(&theme, &section));
        assert!(!svg.contains("data-role=\"note\""));
    }

    #[test]
    fn test_large_card_min_height() {
        let theme = theme("p-5 bg-white");
        let section = SectionDescriptor::new("Serving");
        let card = LargeCard::new(&theme, &section);
        let natural = card.size().height();

        let stretched = card.clone().with_min_height(natural + 50.0);
        assert_approx_eq!(f32, stretched.size().height(), natural + 50.0);

        let unchanged = card.with_min_height(1.0);
        assert_approx_eq!(f32, unchanged.size().height(), natural);
    }

    #[test]
    fn test_card_with_shadow_and_border() {
        let theme = theme("p-4 rounded-2xl shadow-sm border border-slate-100 bg-white");
        let section = sources();
        let output = StageCard::new(&theme, &section).render_to_layers(Point::default());

        assert_eq!(output.layer_len(RenderLayer::Shadow), 1);
        assert_eq!(output.layer_len(RenderLayer::Card), 1);
        let svg: String = output.render().iter().map(|n| n.to_string()).collect();
        assert!(svg.contains("stroke-width=\"1\""));
        assert!(svg.contains("rx=\"16\""));
    }

    #[test]
    fn test_card_render_is_idempotent() {
        let theme = theme("p-4 bg-white");
        let section = sources();
        let card = StageCard::new(&theme, &section);
        assert_eq!(render(&card), render(&card));
    }
}
