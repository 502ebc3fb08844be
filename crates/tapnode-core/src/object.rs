//! Node identifiers.
//!
//! Scene nodes live in arena storage owned by the scene; everything else
//! refers to them through an [`NodeId`]. An id stays valid until its node is
//! removed, after which lookups fail instead of aliasing a newer node.

use slotmap::new_key_type;

new_key_type! {
    /// A unique identifier for a node in a scene.
    ///
    /// `NodeId`s are stable handles that remain valid while the node is part
    /// of its scene. They become invalid when the node is removed; a removed
    /// id is never reused for a different node.
    pub struct NodeId;
}

impl NodeId {
    /// Convert the NodeId to a raw u64 value.
    ///
    /// Useful for logging and for hosts that key their own tables by number.
    /// The raw value can be converted back using [`NodeId::from_raw`].
    #[inline]
    pub fn as_raw(self) -> u64 {
        use slotmap::Key;
        self.data().as_ffi()
    }

    /// Create a NodeId from a raw u64 value.
    ///
    /// This does not check that the node still exists in any scene.
    #[inline]
    pub fn from_raw(raw: u64) -> Self {
        Self::from(slotmap::KeyData::from_ffi(raw))
    }
}
