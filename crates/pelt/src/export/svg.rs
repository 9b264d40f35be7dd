//! SVG rendering of a positioned layout.

use log::{debug, info};
use svg::{Document, node::element as svg_element};

use pelt_core::{
    color::Color,
    draw::{LayeredOutput, RenderLayer},
    geometry::Size,
};

use super::{Error, Exporter};
use crate::layout::Layout;

/// Builder for [`Svg`] exporters.
#[derive(Debug, Default)]
pub struct SvgBuilder {
    background: Option<Color>,
}

impl SvgBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the page background. Without one the page is transparent.
    pub fn with_background(mut self, background: Option<Color>) -> Self {
        self.background = background;
        self
    }

    pub fn build(self) -> Svg {
        Svg {
            background: self.background,
        }
    }
}

/// Renders a [`Layout`] to a standalone SVG document.
#[derive(Debug)]
pub struct Svg {
    background: Option<Color>,
}

impl Svg {
    /// Renders the layout into an SVG document of the layout's page size.
    pub fn render_layout(&self, layout: &Layout<'_>) -> Document {
        let size = layout.size();
        let doc = Document::new()
            .set("xmlns", "http://www.w3.org/2000/svg")
            .set("viewBox", format!("0 0 {} {}", size.width(), size.height()))
            .set("width", size.width())
            .set("height", size.height());

        let mut output = LayeredOutput::new();
        if let Some(background) = self.background {
            output.add_to_layer(RenderLayer::Background, Box::new(background_rect(size, background)));
        }
        for element in layout.elements() {
            output.merge(element.render_to_layers());
        }
        debug!(
            cards = output.layer_len(RenderLayer::Card),
            glyphs = output.layer_len(RenderLayer::Glyph),
            texts = output.layer_len(RenderLayer::Text);
            "Layers collected"
        );

        output.render().into_iter().fold(doc, |doc, node| doc.add(node))
    }
}

impl Exporter for Svg {
    fn export_layout(&self, layout: &Layout<'_>) -> Result<String, Error> {
        let size = layout.size();
        if !size.width().is_finite() || !size.height().is_finite() {
            return Err(Error::Render(format!(
                "page size {}x{} is not finite",
                size.width(),
                size.height()
            )));
        }
        if size.width() <= 0.0 || size.height() <= 0.0 {
            return Err(Error::Render("page size is empty".to_string()));
        }

        let document = self.render_layout(layout).to_string();
        info!(bytes = document.len(); "SVG document rendered");
        Ok(document)
    }
}

fn background_rect(size: Size, color: Color) -> svg_element::Rectangle {
    svg_element::Rectangle::new()
        .set("x", 0)
        .set("y", 0)
        .set("width", size.width())
        .set("height", size.height())
        .set("fill", &color)
        .set("fill-opacity", color.alpha())
}
