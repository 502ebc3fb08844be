//! Text label node.

use std::any::Any;

use tapnode_render::{Color, Font};

use crate::node::{Node, NodeBase};

/// Horizontal placement of text relative to the label's position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HorizontalAlignment {
    /// Text starts at the position.
    Left,
    /// Text is centered on the position.
    #[default]
    Center,
    /// Text ends at the position.
    Right,
}

/// Vertical placement of text relative to the label's position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VerticalAlignment {
    /// The text baseline sits on the position.
    #[default]
    Baseline,
    /// Text is centered on the position.
    Center,
    /// The top of the text sits on the position.
    Top,
    /// The bottom of the text sits on the position.
    Bottom,
}

/// A node that displays a single line of text.
#[derive(Debug, Clone)]
pub struct LabelNode {
    base: NodeBase,
    text: String,
    font: Font,
    color: Color,
    horizontal_alignment: HorizontalAlignment,
    vertical_alignment: VerticalAlignment,
}

impl LabelNode {
    /// Create an empty label using `font`.
    pub fn new(font: Font) -> Self {
        Self {
            base: NodeBase::new(),
            text: String::new(),
            font,
            color: Color::WHITE,
            horizontal_alignment: HorizontalAlignment::default(),
            vertical_alignment: VerticalAlignment::default(),
        }
    }

    /// Get the label's text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Set the label's text.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Get the font.
    pub fn font(&self) -> &Font {
        &self.font
    }

    /// Get the font for in-place changes.
    pub fn font_mut(&mut self) -> &mut Font {
        &mut self.font
    }

    /// Get the text color.
    pub fn color(&self) -> Color {
        self.color
    }

    /// Set the text color.
    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    /// Get the horizontal alignment.
    pub fn horizontal_alignment(&self) -> HorizontalAlignment {
        self.horizontal_alignment
    }

    /// Set the horizontal alignment.
    pub fn set_horizontal_alignment(&mut self, alignment: HorizontalAlignment) {
        self.horizontal_alignment = alignment;
    }

    /// Get the vertical alignment.
    pub fn vertical_alignment(&self) -> VerticalAlignment {
        self.vertical_alignment
    }

    /// Set the vertical alignment.
    pub fn set_vertical_alignment(&mut self, alignment: VerticalAlignment) {
        self.vertical_alignment = alignment;
    }
}

impl Node for LabelNode {
    fn node_base(&self) -> &NodeBase {
        &self.base
    }

    fn node_base_mut(&mut self) -> &mut NodeBase {
        &mut self.base
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
