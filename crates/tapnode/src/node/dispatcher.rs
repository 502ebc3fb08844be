//! Scene ownership and touch dispatch.
//!
//! The [`Scene`] owns top-level nodes in arena storage and routes touch
//! sequences to them:
//!
//! 1. **Hit test**: on `Began`, the visible, interaction-enabled node whose
//!    frame contains the location and that has the highest z-position
//!    receives the touch. Among equal z-positions the node added last wins.
//!
//! 2. **Binding**: the touch id is bound to that node. Every later event
//!    of the sequence goes to the same node, even when outside its frame.
//!    A node owns at most one sequence at a time; a touch beginning on a
//!    node that already owns one is ignored.
//!
//! 3. **Release**: `Ended` and `Cancelled` deliver the event and release
//!    the binding.

use std::collections::HashMap;
use std::fmt::Write as _;

use slotmap::SlotMap;

use tapnode_core::logging::targets;
use tapnode_core::{NodeError, NodeId, Result};
use tapnode_render::Point;

use super::touch::{TouchEvent, TouchPhase};
use super::Node;

/// Result of dispatching a touch event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchResult {
    /// The event was delivered to a node.
    Accepted,
    /// No node wanted the event.
    Ignored,
    /// The node bound to the touch has been removed from the scene.
    NodeNotFound,
}

impl DispatchResult {
    /// Check if the event reached a node.
    pub fn was_handled(&self) -> bool {
        matches!(self, Self::Accepted)
    }
}

/// A scene: the root coordinate space and owner of top-level nodes.
///
/// Node locations and touch locations given to the scene are in scene
/// space, which is the parent space of every top-level node.
pub struct Scene {
    nodes: SlotMap<NodeId, Box<dyn Node>>,
    /// Insertion order, used to break hit-test ties.
    order: Vec<NodeId>,
    /// Touch id to the node that owns the sequence.
    active_touches: HashMap<u64, NodeId>,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene {
    /// Create an empty scene.
    pub fn new() -> Self {
        Self {
            nodes: SlotMap::with_key(),
            order: Vec::new(),
            active_touches: HashMap::new(),
        }
    }

    // =========================================================================
    // Membership
    // =========================================================================

    /// Add a node and return its id.
    pub fn add<N: Node>(&mut self, node: N) -> NodeId {
        let id = self.nodes.insert_with_key(|id| {
            let mut node = node;
            node.node_base_mut().set_id(id);
            Box::new(node)
        });
        self.order.push(id);
        tracing::trace!(
            target: targets::SCENE,
            id = id.as_raw(),
            type_name = std::any::type_name::<N>(),
            "added node"
        );
        id
    }

    /// Remove a node and return it.
    ///
    /// Touches bound to the node stay bound until their sequence ends; their
    /// events are reported as [`DispatchResult::NodeNotFound`].
    pub fn remove(&mut self, id: NodeId) -> Result<Box<dyn Node>> {
        let mut node = self.nodes.remove(id).ok_or(NodeError::InvalidNodeId(id))?;
        self.order.retain(|&other| other != id);
        node.node_base_mut().set_id(NodeId::default());
        tracing::trace!(target: targets::SCENE, id = id.as_raw(), "removed node");
        Ok(node)
    }

    /// Check if a node is in the scene.
    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains_key(id)
    }

    /// Number of top-level nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if the scene has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Node ids in insertion order.
    pub fn node_ids(&self) -> &[NodeId] {
        &self.order
    }

    /// Get a node without knowing its type.
    pub fn node(&self, id: NodeId) -> Option<&dyn Node> {
        self.nodes.get(id).map(|node| node.as_ref())
    }

    /// Get a node as its concrete type.
    pub fn get<T: Node>(&self, id: NodeId) -> Result<&T> {
        self.nodes
            .get(id)
            .ok_or(NodeError::InvalidNodeId(id))?
            .as_any()
            .downcast_ref::<T>()
            .ok_or(NodeError::NodeTypeMismatch {
                id,
                expected: std::any::type_name::<T>(),
            })
    }

    /// Get a node mutably as its concrete type.
    pub fn get_mut<T: Node>(&mut self, id: NodeId) -> Result<&mut T> {
        self.nodes
            .get_mut(id)
            .ok_or(NodeError::InvalidNodeId(id))?
            .as_any_mut()
            .downcast_mut::<T>()
            .ok_or(NodeError::NodeTypeMismatch {
                id,
                expected: std::any::type_name::<T>(),
            })
    }

    // =========================================================================
    // Touch Dispatch
    // =========================================================================

    /// Find the node that would receive a touch beginning at `location`.
    pub fn hit_test(&self, location: Point) -> Option<NodeId> {
        let mut best: Option<(NodeId, f32)> = None;
        for &id in &self.order {
            let Some(node) = self.nodes.get(id) else {
                continue;
            };
            let base = node.node_base();
            if !base.accepts_touch_at(location) {
                continue;
            }
            let z = base.z_position();
            // Later nodes win ties.
            if best.is_none_or(|(_, best_z)| z >= best_z) {
                best = Some((id, z));
            }
        }
        best.map(|(id, _)| id)
    }

    /// The node that owns an active touch sequence.
    pub fn touch_owner(&self, touch_id: u64) -> Option<NodeId> {
        self.active_touches.get(&touch_id).copied()
    }

    /// Number of touch sequences in progress.
    pub fn active_touch_count(&self) -> usize {
        self.active_touches.len()
    }

    /// Forget all active touch sequences without notifying their nodes.
    pub fn reset_touches(&mut self) {
        self.active_touches.clear();
    }

    /// Dispatch a touch event.
    pub fn handle_touch(&mut self, event: &TouchEvent) -> DispatchResult {
        let target = match event.phase {
            TouchPhase::Began => {
                let Some(id) = self.hit_test(event.location) else {
                    tracing::trace!(
                        target: targets::SCENE,
                        touch = event.id,
                        x = event.location.x,
                        y = event.location.y,
                        "touch began on no node"
                    );
                    return DispatchResult::Ignored;
                };
                if self.active_touches.values().any(|&owner| owner == id) {
                    tracing::trace!(
                        target: targets::SCENE,
                        touch = event.id,
                        id = id.as_raw(),
                        "node already owns a touch, ignoring"
                    );
                    return DispatchResult::Ignored;
                }
                self.active_touches.insert(event.id, id);
                id
            }
            TouchPhase::Moved => match self.active_touches.get(&event.id) {
                Some(&id) => id,
                None => return DispatchResult::Ignored,
            },
            TouchPhase::Ended | TouchPhase::Cancelled => {
                match self.active_touches.remove(&event.id) {
                    Some(id) => id,
                    None => return DispatchResult::Ignored,
                }
            }
        };

        let Some(node) = self.nodes.get_mut(target) else {
            tracing::trace!(
                target: targets::SCENE,
                touch = event.id,
                id = target.as_raw(),
                "touch owner no longer in scene"
            );
            return DispatchResult::NodeNotFound;
        };

        tracing::trace!(
            target: targets::SCENE,
            touch = event.id,
            phase = ?event.phase,
            id = target.as_raw(),
            "dispatching touch"
        );
        match event.phase {
            TouchPhase::Began => node.touch_began(event),
            TouchPhase::Moved => node.touch_moved(event),
            TouchPhase::Ended => node.touch_ended(event),
            TouchPhase::Cancelled => node.touch_cancelled(event),
        }
        DispatchResult::Accepted
    }

    // =========================================================================
    // Debugging
    // =========================================================================

    /// Format the scene's node tree for debugging.
    ///
    /// ```text
    /// Scene (1 node)
    /// └── Button "play" z=0 frame=(150, 80, 100x40)
    ///     └── LabelNode "" z=1 frame=(0, 0, 0x0)
    /// ```
    pub fn dump_tree(&self) -> String {
        let mut out = String::new();
        let count = self.nodes.len();
        let _ = writeln!(
            out,
            "Scene ({count} node{})",
            if count == 1 { "" } else { "s" }
        );
        let roots: Vec<&dyn Node> = self
            .order
            .iter()
            .filter_map(|&id| self.nodes.get(id).map(|node| node.as_ref()))
            .collect();
        format_children(&mut out, &roots, "");
        out
    }
}

fn format_children(out: &mut String, children: &[&dyn Node], prefix: &str) {
    for (index, child) in children.iter().enumerate() {
        let last = index + 1 == children.len();
        let frame = child.frame();
        let _ = writeln!(
            out,
            "{prefix}{}{} {:?} z={} frame=({}, {}, {}x{})",
            if last { "└── " } else { "├── " },
            child.type_name(),
            child.name(),
            child.z_position(),
            frame.left(),
            frame.top(),
            frame.width(),
            frame.height(),
        );
        let nested = format!("{prefix}{}", if last { "    " } else { "│   " });
        format_children(out, &child.children(), &nested);
    }
}

impl std::fmt::Debug for Scene {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scene")
            .field("nodes", &self.nodes.len())
            .field("active_touches", &self.active_touches.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::nodes::{LabelNode, SpriteNode};
    use tapnode_render::{Color, Size};

    fn touchable(position: Point, z: f32) -> SpriteNode {
        let mut sprite = SpriteNode::with_color(Color::RED, Size::new(20.0, 20.0));
        sprite.set_position(position);
        sprite.set_z_position(z);
        sprite.node_base_mut().set_user_interaction_enabled(true);
        sprite
    }

    #[test]
    fn test_add_assigns_id() {
        let mut scene = Scene::new();
        let id = scene.add(touchable(Point::ZERO, 0.0));
        assert_eq!(scene.len(), 1);
        assert_eq!(scene.node(id).map(|n| n.node_id()), Some(id));
    }

    #[test]
    fn test_typed_lookup() {
        let mut scene = Scene::new();
        let id = scene.add(touchable(Point::ZERO, 0.0));

        assert!(scene.get::<SpriteNode>(id).is_ok());
        assert_eq!(
            scene.get::<LabelNode>(id).unwrap_err(),
            NodeError::NodeTypeMismatch {
                id,
                expected: std::any::type_name::<LabelNode>(),
            }
        );
    }

    #[test]
    fn test_remove() {
        let mut scene = Scene::new();
        let id = scene.add(touchable(Point::ZERO, 0.0));
        let removed = scene.remove(id).unwrap();
        assert!(removed.as_any().is::<SpriteNode>());
        assert!(!scene.contains(id));
        assert!(scene.node_ids().is_empty());
        assert!(matches!(
            scene.remove(id),
            Err(NodeError::InvalidNodeId(other)) if other == id
        ));
    }

    #[test]
    fn test_hit_test_prefers_higher_z() {
        let mut scene = Scene::new();
        let top = scene.add(touchable(Point::ZERO, 5.0));
        let _bottom = scene.add(touchable(Point::ZERO, 1.0));
        assert_eq!(scene.hit_test(Point::ZERO), Some(top));
    }

    #[test]
    fn test_hit_test_later_node_wins_ties() {
        let mut scene = Scene::new();
        let _first = scene.add(touchable(Point::ZERO, 0.0));
        let second = scene.add(touchable(Point::ZERO, 0.0));
        assert_eq!(scene.hit_test(Point::ZERO), Some(second));
    }

    #[test]
    fn test_hit_test_skips_non_interactive() {
        let mut scene = Scene::new();
        let mut inert = touchable(Point::ZERO, 10.0);
        inert.node_base_mut().set_user_interaction_enabled(false);
        scene.add(inert);
        let live = scene.add(touchable(Point::ZERO, 0.0));
        assert_eq!(scene.hit_test(Point::ZERO), Some(live));
        assert_eq!(scene.hit_test(Point::new(100.0, 100.0)), None);
    }

    #[test]
    fn test_touch_binding_lifecycle() {
        let mut scene = Scene::new();
        let id = scene.add(touchable(Point::ZERO, 0.0));

        assert_eq!(
            scene.handle_touch(&TouchEvent::began(7, Point::ZERO)),
            DispatchResult::Accepted
        );
        assert_eq!(scene.touch_owner(7), Some(id));

        // Moving far away still goes to the owner.
        assert_eq!(
            scene.handle_touch(&TouchEvent::moved(7, Point::new(500.0, 500.0))),
            DispatchResult::Accepted
        );

        assert_eq!(
            scene.handle_touch(&TouchEvent::ended(7, Point::new(500.0, 500.0))),
            DispatchResult::Accepted
        );
        assert_eq!(scene.touch_owner(7), None);
        assert_eq!(scene.active_touch_count(), 0);
    }

    #[test]
    fn test_node_owns_one_touch_at_a_time() {
        let mut scene = Scene::new();
        let id = scene.add(touchable(Point::ZERO, 0.0));

        scene.handle_touch(&TouchEvent::began(1, Point::ZERO));
        assert_eq!(
            scene.handle_touch(&TouchEvent::began(2, Point::ZERO)),
            DispatchResult::Ignored
        );
        assert_eq!(scene.touch_owner(2), None);
        assert_eq!(
            scene.handle_touch(&TouchEvent::ended(2, Point::ZERO)),
            DispatchResult::Ignored
        );

        // Once the first sequence ends the node accepts a new one.
        scene.handle_touch(&TouchEvent::ended(1, Point::ZERO));
        assert_eq!(
            scene.handle_touch(&TouchEvent::began(3, Point::ZERO)),
            DispatchResult::Accepted
        );
        assert_eq!(scene.touch_owner(3), Some(id));
    }

    #[test]
    fn test_unbound_touches_are_ignored() {
        let mut scene = Scene::new();
        scene.add(touchable(Point::ZERO, 0.0));
        assert_eq!(
            scene.handle_touch(&TouchEvent::began(1, Point::new(99.0, 99.0))),
            DispatchResult::Ignored
        );
        assert_eq!(
            scene.handle_touch(&TouchEvent::moved(2, Point::ZERO)),
            DispatchResult::Ignored
        );
        assert_eq!(
            scene.handle_touch(&TouchEvent::ended(2, Point::ZERO)),
            DispatchResult::Ignored
        );
    }

    #[test]
    fn test_removed_owner_reports_not_found() {
        let mut scene = Scene::new();
        let id = scene.add(touchable(Point::ZERO, 0.0));
        scene.handle_touch(&TouchEvent::began(1, Point::ZERO));
        scene.remove(id).unwrap();

        assert_eq!(
            scene.handle_touch(&TouchEvent::cancelled(1, Point::ZERO)),
            DispatchResult::NodeNotFound
        );
        assert_eq!(scene.active_touch_count(), 0);
    }

    #[test]
    fn test_dump_tree() {
        let mut scene = Scene::new();
        let mut sprite = touchable(Point::new(10.0, 10.0), 2.0);
        sprite.node_base_mut().set_name("backdrop");
        scene.add(sprite);

        let dump = scene.dump_tree();
        assert!(dump.starts_with("Scene (1 node)\n"));
        assert!(dump.contains("└── SpriteNode \"backdrop\" z=2 frame=(0, 0, 20x20)"));
    }
}
