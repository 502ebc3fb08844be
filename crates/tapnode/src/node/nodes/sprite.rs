//! Textured or solid-colored rectangle node.

use std::any::Any;

use tapnode_render::{Color, Size, Texture};

use crate::node::{Node, NodeBase};

/// A node that draws a texture, or a flat color when it has none.
#[derive(Debug, Clone)]
pub struct SpriteNode {
    base: NodeBase,
    texture: Option<Texture>,
    color: Color,
}

impl SpriteNode {
    /// Create a sprite showing `texture` at the texture's size.
    pub fn new(texture: Texture) -> Self {
        let mut base = NodeBase::new();
        base.set_size(texture.size());
        Self {
            base,
            texture: Some(texture),
            color: Color::WHITE,
        }
    }

    /// Create an untextured sprite of the given color and size.
    pub fn with_color(color: Color, size: Size) -> Self {
        let mut base = NodeBase::new();
        base.set_size(size);
        Self {
            base,
            texture: None,
            color,
        }
    }

    /// The displayed texture, if any.
    pub fn texture(&self) -> Option<&Texture> {
        self.texture.as_ref()
    }

    /// Replace the displayed texture.
    ///
    /// The node keeps its current size.
    pub fn set_texture(&mut self, texture: Option<Texture>) {
        self.texture = texture;
    }

    /// The tint (or fill, when untextured) color.
    pub fn color(&self) -> Color {
        self.color
    }

    /// Set the tint color.
    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }
}

impl Node for SpriteNode {
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
