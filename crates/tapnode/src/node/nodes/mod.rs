//! Concrete node types.
//!
//! - [`SpriteNode`]: a textured or flat-colored rectangle
//! - [`LabelNode`]: a single line of text
//! - [`Button`]: a sprite with pressed and disabled states, a label, and
//!   touch actions

mod button;
mod label;
mod sprite;

pub use button::{ActionSender, Button, ButtonEvent};
pub use label::{HorizontalAlignment, LabelNode, VerticalAlignment};
pub use sprite::SpriteNode;
