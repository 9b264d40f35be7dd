//! Declarative description of a pipeline diagram.
//!
//! A [`DiagramLayout`] groups [`SectionDescriptor`]s into two regions: a
//! pipeline row of sequential stages and a summary grid of cross-cutting
//! concerns, framed by a [`Header`] and an optional [`Footer`].
//!
//! Descriptors carry no identity. List position is the only addressing
//! mechanism, which holds because layouts are fixed once built.
//!
//! # Example
//!
//! ```
//! # use pelt_core::semantic::{DiagramLayout, Header, SectionDescriptor, StageDescriptor};
//! let layout = DiagramLayout::new(Header::new("Pipeline"))
//!     .with_stage(StageDescriptor::new(
//!         SectionDescriptor::new("Sources").with_items(["MySQL / Postgres", "CSV / SFTP"]),
//!     ))
//!     .with_summary(SectionDescriptor::new("Serving"));
//!
//! assert_eq!(layout.stages().len(), 1);
//! assert!(layout.summary()[0].items().is_empty());
//! ```

/// A titled section: an ordered item list and an optional note.
///
/// The item list defaults to empty when not provided.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionDescriptor {
    title: String,
    items: Vec<String>,
    note: Option<String>,
}

impl SectionDescriptor {
    /// Creates a section with the given title, no items and no note.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// Sets the items, in display order.
    pub fn with_items<I, S>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.items = items.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the note shown beneath the title.
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn note(&self) -> Option<&str> {
        self.note.as_deref()
    }
}

/// A pipeline stage: a section plus optional style tokens for its card.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StageDescriptor {
    section: SectionDescriptor,
    color: Option<String>,
}

impl StageDescriptor {
    pub fn new(section: SectionDescriptor) -> Self {
        Self {
            section,
            color: None,
        }
    }

    /// Sets style tokens (e.g. `"bg-white"`) applied on top of the card theme.
    pub fn with_color(mut self, tokens: impl Into<String>) -> Self {
        self.color = Some(tokens.into());
        self
    }

    pub fn section(&self) -> &SectionDescriptor {
        &self.section
    }

    pub fn color(&self) -> Option<&str> {
        self.color.as_deref()
    }
}

/// Page heading.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Header {
    title: String,
    subtitle: Option<String>,
}

impl Header {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            subtitle: None,
        }
    }

    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn subtitle(&self) -> Option<&str> {
        self.subtitle.as_deref()
    }
}

/// Closing remark below the summary grid, such as `Tips: ...`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Footer {
    label: String,
    text: String,
}

impl Footer {
    pub fn new(label: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            text: text.into(),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

/// The complete diagram description.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiagramLayout {
    header: Header,
    stages: Vec<StageDescriptor>,
    summary: Vec<SectionDescriptor>,
    footer: Option<Footer>,
}

impl DiagramLayout {
    pub fn new(header: Header) -> Self {
        Self {
            header,
            ..Self::default()
        }
    }

    /// Appends a stage to the pipeline row.
    pub fn with_stage(mut self, stage: StageDescriptor) -> Self {
        self.stages.push(stage);
        self
    }

    /// Appends a card to the summary grid.
    pub fn with_summary(mut self, section: SectionDescriptor) -> Self {
        self.summary.push(section);
        self
    }

    pub fn with_footer(mut self, footer: Footer) -> Self {
        self.footer = Some(footer);
        self
    }

    pub fn header(&self) -> &Header {
        &self.header
    }

    pub fn stages(&self) -> &[StageDescriptor] {
        &self.stages
    }

    pub fn summary(&self) -> &[SectionDescriptor] {
        &self.summary
    }

    pub fn footer(&self) -> Option<&Footer> {
        self.footer.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_defaults_to_empty_items() {
        let section = SectionDescriptor::new("Storage");
        assert_eq!(section.title(), "Storage");
        assert!(section.items().is_empty());
        assert!(section.note().is_none());
    }

    #[test]
    fn test_section_keeps_item_order() {
        let section = SectionDescriptor::new("Sources").with_items(["c", "a", "b"]);
        assert_eq!(section.items(), ["c", "a", "b"]);
    }

    #[test]
    fn test_section_note() {
        let section = SectionDescriptor::new("Storage").with_note("Immutable raw data");
        assert_eq!(section.note(), Some("Immutable raw data"));
    }

    #[test]
    fn test_stage_color() {
        let stage = StageDescriptor::new(SectionDescriptor::new("Sources"));
        assert!(stage.color().is_none());

        let stage = stage.with_color("bg-white");
        assert_eq!(stage.color(), Some("bg-white"));
        assert_eq!(stage.section().title(), "Sources");
    }

    #[test]
    fn test_layout_preserves_region_order() {
        let layout = DiagramLayout::new(Header::new("T").with_subtitle("S"))
            .with_stage(StageDescriptor::new(SectionDescriptor::new("A")))
            .with_stage(StageDescriptor::new(SectionDescriptor::new("B")))
            .with_summary(SectionDescriptor::new("X"))
            .with_footer(Footer::new("Tips:", "Be nice."));

        let titles: Vec<_> = layout.stages().iter().map(|s| s.section().title()).collect();
        assert_eq!(titles, ["A", "B"]);
        assert_eq!(layout.summary()[0].title(), "X");
        assert_eq!(layout.header().subtitle(), Some("S"));
        assert_eq!(layout.footer().map(Footer::label), Some("Tips:"));
    }
}
