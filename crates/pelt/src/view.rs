//! The diagram view: fixed descriptors turned into a render tree.
//!
//! [`DiagramView::render`] is a pure function of the descriptors and the
//! [`Theme`]. It has no failure modes, and rendering the same view twice
//! produces the same tree.
//!
//! # Example
//!
//! ```
//! # use pelt::{theme::Theme, view::DiagramView};
//! let view = DiagramView::default();
//! let theme = Theme::default();
//! let tree = view.render(&theme);
//!
//! assert_eq!(tree.stage_count(), 6);
//! assert_eq!(tree.connector_count(), 5);
//! assert_eq!(tree.summary().len(), 3);
//! ```

use log::debug;

use pelt_core::{
    draw::{Connector, LargeCard, StageCard, Text},
    semantic::DiagramLayout,
};

use crate::{catalog, theme::Theme};

/// A diagram described by a fixed [`DiagramLayout`].
///
/// The default view shows the end-to-end ELT + streaming pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagramView {
    layout: DiagramLayout,
}

impl DiagramView {
    pub fn new(layout: DiagramLayout) -> Self {
        Self { layout }
    }

    pub fn layout(&self) -> &DiagramLayout {
        &self.layout
    }

    /// Builds the render tree for this view.
    ///
    /// A [`Connector`] sits between every adjacent pair of stage cards, so a
    /// row of `n` stages holds `n - 1` connectors (none for zero or one stage).
    pub fn render<'a>(&'a self, theme: &'a Theme) -> ViewTree<'a> {
        let header = self.layout.header();
        let title = Text::new(theme.heading(), header.title()).with_attribute("data-role", "heading");
        let subtitle = header
            .subtitle()
            .map(|subtitle| Text::new(theme.subtitle(), subtitle).with_attribute("data-role", "subtitle"));

        let mut pipeline = Vec::with_capacity(self.layout.stages().len() * 2);
        for (i, stage) in self.layout.stages().iter().enumerate() {
            if i > 0 {
                pipeline.push(PipelineItem::Connector(theme.connector().clone()));
            }
            let mut card = StageCard::new(theme.stage(), stage.section());
            if let Some(tokens) = stage.color() {
                card = card.with_color(tokens);
            }
            pipeline.push(PipelineItem::Stage(card));
        }

        let summary = self
            .layout
            .summary()
            .iter()
            .map(|section| LargeCard::new(theme.summary(), section))
            .collect();

        let footer = self.layout.footer().map(|footer| FooterBlock {
            label: Text::new(theme.footer_label(), footer.label()).with_attribute("data-role", "footer-label"),
            text: Text::new(theme.footer(), footer.text()).with_attribute("data-role", "footer"),
        });

        let tree = ViewTree {
            title,
            subtitle,
            pipeline,
            summary,
            footer,
        };
        debug!(
            stages = tree.stage_count(),
            connectors = tree.connector_count(),
            summary = tree.summary.len();
            "View tree built"
        );
        tree
    }
}

impl Default for DiagramView {
    fn default() -> Self {
        Self::new(catalog::elt_pipeline())
    }
}

/// One slot of the pipeline row.
#[derive(Debug, Clone)]
pub enum PipelineItem<'a> {
    Stage(StageCard<'a>),
    Connector(Connector),
}

impl<'a> PipelineItem<'a> {
    /// Returns the stage card, if this slot holds one.
    pub fn as_stage(&self) -> Option<&StageCard<'a>> {
        match self {
            Self::Stage(card) => Some(card),
            Self::Connector(_) => None,
        }
    }

    pub fn is_connector(&self) -> bool {
        matches!(self, Self::Connector(_))
    }
}

/// The "Tips:" block under the summary grid.
#[derive(Debug, Clone)]
pub struct FooterBlock<'a> {
    label: Text<'a>,
    text: Text<'a>,
}

impl<'a> FooterBlock<'a> {
    pub fn label(&self) -> &Text<'a> {
        &self.label
    }

    pub fn text(&self) -> &Text<'a> {
        &self.text
    }
}

/// Render tree of a [`DiagramView`], borrowing from the view and the theme.
#[derive(Debug, Clone)]
pub struct ViewTree<'a> {
    title: Text<'a>,
    subtitle: Option<Text<'a>>,
    pipeline: Vec<PipelineItem<'a>>,
    summary: Vec<LargeCard<'a>>,
    footer: Option<FooterBlock<'a>>,
}

impl<'a> ViewTree<'a> {
    pub fn title(&self) -> &Text<'a> {
        &self.title
    }

    pub fn subtitle(&self) -> Option<&Text<'a>> {
        self.subtitle.as_ref()
    }

    /// The pipeline row, stages and connectors in display order.
    pub fn pipeline(&self) -> &[PipelineItem<'a>] {
        &self.pipeline
    }

    /// Iterates over the stage cards of the pipeline row.
    pub fn stages(&self) -> impl Iterator<Item = &StageCard<'a>> {
        self.pipeline.iter().filter_map(PipelineItem::as_stage)
    }

    pub fn stage_count(&self) -> usize {
        self.stages().count()
    }

    pub fn connector_count(&self) -> usize {
        self.pipeline.iter().filter(|item| item.is_connector()).count()
    }

    pub fn summary(&self) -> &[LargeCard<'a>] {
        &self.summary
    }

    pub fn footer(&self) -> Option<&FooterBlock<'a>> {
        self.footer.as_ref()
    }
}
