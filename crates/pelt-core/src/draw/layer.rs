//! Layer-based rendering system for SVG output.
//!
//! Drawables choose the z-order layer each SVG element belongs to.
//!
//! - [`RenderLayer`]: the available rendering layers, bottom to top
//! - [`LayeredOutput`]: SVG nodes collected by layer
//!
//! # Example
//!
//! ```
//! # use pelt_core::draw::{RenderLayer, LayeredOutput};
//! # use svg::node::element::Rectangle;
//! let mut output = LayeredOutput::new();
//!
//! output.add_to_layer(RenderLayer::Card, Box::new(Rectangle::new()));
//! output.add_to_layer(RenderLayer::Text, Box::new(svg::node::element::Text::new("Sources")));
//!
//! let svg_nodes = output.render();
//! assert_eq!(svg_nodes.len(), 2);
//! ```

use svg::node::element as svg_element;

/// Type alias for boxed SVG nodes.
pub type SvgNode = Box<dyn svg::Node>;

/// Defines the rendering layers for SVG output.
///
/// Layers render bottom to top in variant declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RenderLayer {
    /// Page-level fills - renders first
    Background,
    /// Card drop shadows
    Shadow,
    /// Card bodies and borders
    Card,
    /// Markers and connector glyphs
    Glyph,
    /// Titles, notes and item labels
    Text,
}

impl RenderLayer {
    /// Returns a human-readable name for this layer.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Background => "background",
            Self::Shadow => "shadow",
            Self::Card => "card",
            Self::Glyph => "glyph",
            Self::Text => "text",
        }
    }
}

/// SVG nodes grouped by rendering layer.
///
/// When rendered, nodes are emitted in layer order, keeping insertion order
/// within a layer.
#[derive(Debug, Default)]
pub struct LayeredOutput {
    items: Vec<(RenderLayer, SvgNode)>,
}

impl LayeredOutput {
    /// Creates a new empty `LayeredOutput`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a single node to the specified layer.
    pub fn add_to_layer(&mut self, layer: RenderLayer, node: SvgNode) {
        self.items.push((layer, node));
    }

    /// Merges all layers from another `LayeredOutput` into this one.
    pub fn merge(&mut self, other: LayeredOutput) {
        self.items.extend(other.items);
    }

    /// Returns `true` if there are no nodes in any layer.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the number of nodes on `layer`.
    pub fn layer_len(&self, layer: RenderLayer) -> usize {
        self.items.iter().filter(|(l, _)| *l == layer).count()
    }

    /// Renders all layers to SVG groups, consuming the output.
    ///
    /// Each non-empty layer becomes an SVG `<g>` element with a `data-layer`
    /// attribute identifying the layer. Empty layers are skipped.
    pub fn render(mut self) -> Vec<SvgNode> {
        if self.is_empty() {
            return Vec::new();
        }

        // Stable sort keeps insertion order inside a layer
        self.items.sort_by_key(|(layer, _)| *layer);

        let mut result = Vec::new();
        let mut current_layer = self.items[0].0;
        let mut current_group = svg_element::Group::new().set("data-layer", current_layer.name());

        for (layer, node) in self.items {
            if layer != current_layer {
                result.push(Box::new(current_group) as SvgNode);

                current_layer = layer;
                current_group = svg_element::Group::new().set("data-layer", layer.name());
            }

            current_group = current_group.add(node);
        }

        result.push(Box::new(current_group) as SvgNode);

        result
    }
}

#[cfg(test)]
mod tests {
    use svg::node::element::Rectangle;

    use super::*;

    #[test]
    fn test_layered_output_new() {
        let output = LayeredOutput::new();
        assert!(output.is_empty());
        assert!(output.render().is_empty());
    }

    #[test]
    fn test_layered_output_layer_len() {
        let mut output = LayeredOutput::new();
        output.add_to_layer(RenderLayer::Glyph, Box::new(Rectangle::new()));
        output.add_to_layer(RenderLayer::Glyph, Box::new(Rectangle::new()));
        output.add_to_layer(RenderLayer::Text, Box::new(Rectangle::new()));

        assert_eq!(output.layer_len(RenderLayer::Glyph), 2);
        assert_eq!(output.layer_len(RenderLayer::Text), 1);
        assert_eq!(output.layer_len(RenderLayer::Card), 0);
    }

    #[test]
    fn test_layered_output_merge_same_layer() {
        let mut output1 = LayeredOutput::new();
        output1.add_to_layer(RenderLayer::Card, Box::new(Rectangle::new()));

        let mut output2 = LayeredOutput::new();
        output2.add_to_layer(RenderLayer::Card, Box::new(Rectangle::new()));

        output1.merge(output2);

        assert_eq!(output1.render().len(), 1);
    }

    #[test]
    fn test_layered_output_render_orders_layers() {
        let mut output = LayeredOutput::new();
        output.add_to_layer(RenderLayer::Text, Box::new(Rectangle::new()));
        output.add_to_layer(RenderLayer::Background, Box::new(Rectangle::new()));
        output.add_to_layer(RenderLayer::Shadow, Box::new(Rectangle::new()));

        let rendered: Vec<String> = output.render().iter().map(|n| n.to_string()).collect();

        assert_eq!(rendered.len(), 3);
        assert!(rendered[0].contains("data-layer=\"background\""));
        assert!(rendered[1].contains("data-layer=\"shadow\""));
        assert!(rendered[2].contains("data-layer=\"text\""));
    }
}
