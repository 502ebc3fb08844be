//! Scene nodes for tapnode.
//!
//! This module provides the [`Node`] trait, the shared [`NodeBase`] state,
//! touch events, the [`Scene`] that owns nodes and routes touches to them,
//! and the concrete node types in [`nodes`].
//!
//! # Touch Routing
//!
//! A touch sequence belongs to the node it began on. The scene hit-tests the
//! `Began` location once and then forwards every later event of that
//! sequence to the same node, wherever the finger goes. The node decides
//! what "inside" means for itself.
//!
//! # Example
//!
//! ```
//! use tapnode::node::{Scene, TouchEvent};
//! use tapnode::node::nodes::Button;
//! use tapnode::render::{Color, Point, Texture};
//!
//! let mut scene = Scene::new();
//! let button = Button::new(
//!     Texture::solid(100, 40, Color::BLUE),
//!     Texture::solid(100, 40, Color::GREEN),
//!     None,
//! )
//! .with_position(Point::new(200.0, 100.0));
//! let id = scene.add(button);
//!
//! scene.handle_touch(&TouchEvent::began(1, Point::new(200.0, 100.0)));
//! assert!(scene.get::<Button>(id).unwrap().is_selected());
//!
//! scene.handle_touch(&TouchEvent::ended(1, Point::new(200.0, 100.0)));
//! assert!(!scene.get::<Button>(id).unwrap().is_selected());
//! ```

use std::any::Any;

use tapnode_core::NodeId;
use tapnode_render::{Point, Rect, Size};

mod base;
mod dispatcher;
pub mod nodes;
mod touch;

#[cfg(test)]
mod tests;

pub use base::NodeBase;
pub use dispatcher::{DispatchResult, Scene};
pub use touch::{TouchEvent, TouchPhase};

/// The trait implemented by everything that can live in a [`Scene`].
///
/// Implementors provide access to their [`NodeBase`] and to themselves as
/// [`Any`] so the scene can hand out typed references. Touch handlers
/// default to doing nothing.
pub trait Node: Any + Send + Sync {
    // =========================================================================
    // Required Methods
    // =========================================================================

    /// Get a reference to the node's base.
    fn node_base(&self) -> &NodeBase;

    /// Get a mutable reference to the node's base.
    fn node_base_mut(&mut self) -> &mut NodeBase;

    /// Get this node as `Any` for downcasting.
    fn as_any(&self) -> &dyn Any;

    /// Get this node as mutable `Any` for downcasting.
    fn as_any_mut(&mut self) -> &mut dyn Any;

    // =========================================================================
    // Hierarchy
    // =========================================================================

    /// The node's owned children, in draw order.
    fn children(&self) -> Vec<&dyn Node> {
        Vec::new()
    }

    /// The concrete type name, for debugging output.
    fn type_name(&self) -> &'static str {
        let full = std::any::type_name::<Self>();
        full.rsplit("::").next().unwrap_or(full)
    }

    // =========================================================================
    // Touch Handling
    // =========================================================================

    /// A touch sequence began on this node.
    fn touch_began(&mut self, _event: &TouchEvent) {}

    /// A touch that began on this node moved.
    fn touch_moved(&mut self, _event: &TouchEvent) {}

    /// A touch that began on this node ended.
    fn touch_ended(&mut self, _event: &TouchEvent) {}

    /// A touch that began on this node was cancelled by the system.
    fn touch_cancelled(&mut self, _event: &TouchEvent) {}

    // =========================================================================
    // Geometry (default implementations delegate to NodeBase)
    // =========================================================================

    /// The node's id in its scene.
    fn node_id(&self) -> NodeId {
        self.node_base().id()
    }

    /// The node's name.
    fn name(&self) -> &str {
        self.node_base().name()
    }

    /// Position in parent space.
    fn position(&self) -> Point {
        self.node_base().position()
    }

    /// Set the position in parent space.
    fn set_position(&mut self, position: Point) {
        self.node_base_mut().set_position(position);
    }

    /// The node's size.
    fn size(&self) -> Size {
        self.node_base().size()
    }

    /// The node's bounding rectangle in parent space.
    fn frame(&self) -> Rect {
        self.node_base().frame()
    }

    /// Draw order relative to siblings.
    fn z_position(&self) -> f32 {
        self.node_base().z_position()
    }

    /// Set the draw order.
    fn set_z_position(&mut self, z: f32) {
        self.node_base_mut().set_z_position(z);
    }
}
