//! Shared node state.

use tapnode_core::NodeId;
use tapnode_render::{Point, Rect, Size};

/// State common to every scene node: identity, placement and interaction.
///
/// Positions are expressed in the parent's coordinate space. The anchor
/// point says which point of the node's own rectangle sits on `position`,
/// in unit coordinates; the default `(0.5, 0.5)` centers the node on its
/// position.
#[derive(Debug, Clone)]
pub struct NodeBase {
    id: NodeId,
    name: String,
    position: Point,
    size: Size,
    anchor_point: Point,
    z_position: f32,
    visible: bool,
    user_interaction_enabled: bool,
}

impl Default for NodeBase {
    fn default() -> Self {
        Self::new()
    }
}

impl NodeBase {
    /// Default anchor point: the node's center.
    pub const DEFAULT_ANCHOR: Point = Point::new(0.5, 0.5);

    /// Create a node base at the origin with zero size.
    ///
    /// The id stays null until the node is added to a scene.
    pub fn new() -> Self {
        Self {
            id: NodeId::default(),
            name: String::new(),
            position: Point::ZERO,
            size: Size::ZERO,
            anchor_point: Self::DEFAULT_ANCHOR,
            z_position: 0.0,
            visible: true,
            user_interaction_enabled: false,
        }
    }

    /// The node's id in its scene (null if not in a scene).
    pub fn id(&self) -> NodeId {
        self.id
    }

    pub(crate) fn set_id(&mut self, id: NodeId) {
        self.id = id;
    }

    /// The node's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Set the node's name.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Position in parent space.
    pub fn position(&self) -> Point {
        self.position
    }

    /// Set the position in parent space.
    pub fn set_position(&mut self, position: Point) {
        self.position = position;
    }

    /// The node's size.
    pub fn size(&self) -> Size {
        self.size
    }

    /// Set the node's size.
    pub fn set_size(&mut self, size: Size) {
        self.size = size;
    }

    /// The anchor point in unit coordinates.
    pub fn anchor_point(&self) -> Point {
        self.anchor_point
    }

    /// Set the anchor point in unit coordinates.
    pub fn set_anchor_point(&mut self, anchor: Point) {
        self.anchor_point = anchor;
    }

    /// Draw order relative to siblings; higher is drawn on top.
    pub fn z_position(&self) -> f32 {
        self.z_position
    }

    /// Set the draw order.
    pub fn set_z_position(&mut self, z: f32) {
        self.z_position = z;
    }

    /// Whether the node is visible.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Show or hide the node. Hidden nodes never receive touches.
    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    /// Whether the node receives touch events.
    pub fn is_user_interaction_enabled(&self) -> bool {
        self.user_interaction_enabled
    }

    /// Set whether the node receives touch events.
    pub fn set_user_interaction_enabled(&mut self, enabled: bool) {
        self.user_interaction_enabled = enabled;
    }

    /// The node's bounding rectangle in parent space.
    pub fn frame(&self) -> Rect {
        Rect::from_anchor(self.position, self.size, self.anchor_point)
    }

    /// Whether the node can be the target of a new touch at `location`.
    pub fn accepts_touch_at(&self, location: Point) -> bool {
        self.visible && self.user_interaction_enabled && self.frame().contains(location)
    }
}
