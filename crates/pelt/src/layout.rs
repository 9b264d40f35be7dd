//! Layout engine for positioning the render tree on the page.
//!
//! The page is a single column of regions, top to bottom:
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │ heading / subtitle                           │
//! │                                              │
//! │ [stage] → [stage] → [stage] → ...            │  pipeline row
//! │                                              │
//! │ [summary]   [summary]   [summary]            │  summary grid
//! │                                              │
//! │ Tips: ...                                    │  footer
//! └──────────────────────────────────────────────┘
//! ```
//!
//! The content width is the width of the pipeline row, never below 720 px.
//! Pipeline items are vertically centered on the middle of the row. Summary
//! cards share the content width in equal columns, and each grid row is
//! stretched to its tallest card.

use log::{debug, info};

use pelt_core::{
    draw::{Connector, Drawable, LargeCard, LayeredOutput, PositionedDrawable, StageCard, Text},
    geometry::{Insets, Point, Size},
};

use crate::{
    config::LayoutConfig,
    error::PeltError,
    view::{PipelineItem, ViewTree},
};

/// A drawable placed by the layout engine.
#[derive(Debug, Clone)]
pub enum ViewElement<'a> {
    Text(Text<'a>),
    Stage(StageCard<'a>),
    Summary(LargeCard<'a>),
    Connector(Connector),
}

impl Drawable for ViewElement<'_> {
    fn render_to_layers(&self, position: Point) -> LayeredOutput {
        match self {
            Self::Text(text) => text.render_to_layers(position),
            Self::Stage(card) => card.render_to_layers(position),
            Self::Summary(card) => card.render_to_layers(position),
            Self::Connector(connector) => connector.render_to_layers(position),
        }
    }

    fn size(&self) -> Size {
        match self {
            Self::Text(text) => text.size(),
            Self::Stage(card) => card.size(),
            Self::Summary(card) => card.size(),
            Self::Connector(connector) => connector.size(),
        }
    }
}

impl<'a> From<&PipelineItem<'a>> for ViewElement<'a> {
    fn from(item: &PipelineItem<'a>) -> Self {
        match item {
            PipelineItem::Stage(card) => Self::Stage(card.clone()),
            PipelineItem::Connector(connector) => Self::Connector(connector.clone()),
        }
    }
}

pub type PositionedElement<'a> = PositionedDrawable<ViewElement<'a>>;

/// Positioned elements of a page, in paint order.
#[derive(Debug, Clone)]
pub struct Layout<'a> {
    size: Size,
    elements: Vec<PositionedElement<'a>>,
}

impl<'a> Layout<'a> {
    /// Total page size, padding included.
    pub fn size(&self) -> Size {
        self.size
    }

    pub fn elements(&self) -> &[PositionedElement<'a>] {
        &self.elements
    }

    /// Positioned stage cards, left to right.
    pub fn stages(&self) -> impl Iterator<Item = &PositionedElement<'a>> {
        self.elements
            .iter()
            .filter(|element| matches!(element.inner(), ViewElement::Stage(_)))
    }

    /// Positioned connectors, left to right.
    pub fn connectors(&self) -> impl Iterator<Item = &PositionedElement<'a>> {
        self.elements
            .iter()
            .filter(|element| matches!(element.inner(), ViewElement::Connector(_)))
    }

    /// Positioned summary cards, row by row.
    pub fn summary_cards(&self) -> impl Iterator<Item = &PositionedElement<'a>> {
        self.elements
            .iter()
            .filter(|element| matches!(element.inner(), ViewElement::Summary(_)))
    }
}

/// Positions a [`ViewTree`] on the page.
#[derive(Debug, Clone)]
pub struct LayoutEngine {
    padding: Insets,
    subtitle_gap: f32,
    header_gap: f32,
    item_gap: f32,
    section_gap: f32,
    grid_gap: f32,
    footer_padding: f32,
    footer_label_gap: f32,
    summary_columns: usize,
    min_content_width: f32,
}

impl LayoutEngine {
    pub fn new() -> Self {
        Self {
            padding: Insets::uniform(32.0),
            subtitle_gap: 8.0,
            header_gap: 24.0,
            item_gap: 8.0,
            section_gap: 32.0,
            grid_gap: 24.0,
            footer_padding: 16.0,
            footer_label_gap: 4.0,
            summary_columns: 3,
            min_content_width: 720.0,
        }
    }

    /// Creates an engine using the grid shape from `config`.
    pub fn from_config(config: &LayoutConfig) -> Self {
        Self::new().with_summary_columns(config.summary_columns())
    }

    pub fn with_summary_columns(mut self, columns: usize) -> Self {
        self.summary_columns = columns;
        self
    }

    /// Positions every element of `tree`.
    ///
    /// # Errors
    ///
    /// Returns [`PeltError::Layout`] when the summary grid has no columns, or
    /// so many columns that they do not fit the content width.
    pub fn layout<'a>(&self, tree: &ViewTree<'a>) -> Result<Layout<'a>, PeltError> {
        if self.summary_columns == 0 {
            return Err(PeltError::Layout(
                "summary_columns must be at least 1".to_string(),
            ));
        }

        let pipeline: Vec<ViewElement<'a>> = tree.pipeline().iter().map(ViewElement::from).collect();
        let sizes: Vec<Size> = pipeline.iter().map(|element| element.size()).collect();
        let row_width = sizes.iter().map(|size| size.width()).sum::<f32>()
            + self.item_gap * sizes.len().saturating_sub(1) as f32;
        let row_height = sizes.iter().map(|size| size.height()).fold(0.0, f32::max);
        let content_width = row_width.max(self.min_content_width);

        let left = self.padding.left();
        let mut cursor = PageCursor::new(self.padding.top());
        let mut elements = Vec::new();

        // Header
        let title = tree.title().clone().with_max_width(content_width);
        cursor.y += place_top_left(&mut elements, ViewElement::Text(title), left, cursor.y);
        if let Some(subtitle) = tree.subtitle() {
            cursor.y += self.subtitle_gap;
            let subtitle = subtitle.clone().with_max_width(content_width);
            cursor.y += place_top_left(&mut elements, ViewElement::Text(subtitle), left, cursor.y);
        }
        cursor.next_gap = self.header_gap;

        // Pipeline row
        if !pipeline.is_empty() {
            cursor.open_section();
            let center_y = cursor.y + row_height / 2.0;
            let mut x = left + (content_width - row_width) / 2.0;
            for (element, size) in pipeline.into_iter().zip(sizes) {
                let center = Point::new(x + size.width() / 2.0, center_y);
                elements.push(PositionedDrawable::new(element).with_position(center));
                x += size.width() + self.item_gap;
            }
            cursor.y += row_height;
            cursor.next_gap = self.section_gap;
        }

        // Summary grid
        if !tree.summary().is_empty() {
            let columns = self.summary_columns;
            let column_width =
                (content_width - self.grid_gap * (columns - 1) as f32) / columns as f32;
            if column_width <= 0.0 {
                return Err(PeltError::Layout(format!(
                    "{columns} summary columns do not fit a content width of {content_width}"
                )));
            }

            cursor.open_section();
            let cards: Vec<LargeCard<'a>> = tree
                .summary()
                .iter()
                .map(|card| card.clone().with_width(column_width))
                .collect();
            for (row_index, row) in cards.chunks(columns).enumerate() {
                if row_index > 0 {
                    cursor.y += self.grid_gap;
                }
                let height = row.iter().map(|card| card.size().height()).fold(0.0, f32::max);
                for (column, card) in row.iter().enumerate() {
                    let card = card.clone().with_min_height(height);
                    let center = Point::new(
                        left + column as f32 * (column_width + self.grid_gap) + column_width / 2.0,
                        cursor.y + height / 2.0,
                    );
                    elements.push(PositionedDrawable::new(ViewElement::Summary(card)).with_position(center));
                }
                cursor.y += height;
            }
            cursor.next_gap = self.section_gap;
        }

        // Footer
        if let Some(footer) = tree.footer() {
            cursor.open_section();
            let inner_left = left + self.footer_padding;
            let inner_width = content_width - 2.0 * self.footer_padding;
            cursor.y += self.footer_padding;
            let label = footer.label().clone().with_max_width(inner_width);
            cursor.y += place_top_left(&mut elements, ViewElement::Text(label), inner_left, cursor.y);
            cursor.y += self.footer_label_gap;
            let text = footer.text().clone().with_max_width(inner_width);
            cursor.y += place_top_left(&mut elements, ViewElement::Text(text), inner_left, cursor.y);
            cursor.y += self.footer_padding;
        }

        let size = Size::new(
            content_width + self.padding.horizontal_sum(),
            cursor.y + self.padding.bottom(),
        );
        debug!(
            width = size.width(),
            height = size.height(),
            columns = self.summary_columns;
            "Page size calculated"
        );
        info!(elements_count = elements.len(); "Layout calculated");

        Ok(Layout { size, elements })
    }
}

impl Default for LayoutEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Vertical position while stacking regions, with the gap owed before the
/// next region.
struct PageCursor {
    y: f32,
    next_gap: f32,
}

impl PageCursor {
    fn new(top: f32) -> Self {
        Self { y: top, next_gap: 0.0 }
    }

    fn open_section(&mut self) {
        self.y += self.next_gap;
        self.next_gap = 0.0;
    }
}

/// Places `element` with its top-left corner at (`left`, `top`) and returns its height.
fn place_top_left<'a>(
    elements: &mut Vec<PositionedElement<'a>>,
    element: ViewElement<'a>,
    left: f32,
    top: f32,
) -> f32 {
    let size = element.size();
    let center = Point::new(left + size.width() / 2.0, top + size.height() / 2.0);
    elements.push(PositionedDrawable::new(element).with_position(center));
    size.height()
}
