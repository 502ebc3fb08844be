//! Touch events and conversion from platform events.
//!
//! A touch sequence is a `Began` event, any number of `Moved` events and a
//! final `Ended` or `Cancelled` event, all sharing one touch id. Locations
//! are expressed in the parent space of the node receiving the event, the
//! same space as that node's [`frame`](super::NodeBase::frame).
//!
//! Hosts driven by winit can convert platform touches directly:
//!
//! ```ignore
//! use tapnode::node::TouchEvent;
//!
//! // Inside the winit window event handler:
//! WindowEvent::Touch(touch) => {
//!     scene.handle_touch(&TouchEvent::from_winit(&touch));
//! }
//! ```

use winit::event::{Touch, TouchPhase as WinitTouchPhase};

use tapnode_render::Point;

/// The phase of a touch within its sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TouchPhase {
    /// A finger touched the screen.
    Began,
    /// The finger moved.
    Moved,
    /// The finger was lifted.
    Ended,
    /// The system interrupted the sequence.
    Cancelled,
}

impl TouchPhase {
    /// Check if this phase ends the sequence.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Ended | Self::Cancelled)
    }
}

impl From<WinitTouchPhase> for TouchPhase {
    fn from(phase: WinitTouchPhase) -> Self {
        match phase {
            WinitTouchPhase::Started => Self::Began,
            WinitTouchPhase::Moved => Self::Moved,
            WinitTouchPhase::Ended => Self::Ended,
            WinitTouchPhase::Cancelled => Self::Cancelled,
        }
    }
}

/// A single touch event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchEvent {
    /// Identifier shared by every event of one touch sequence.
    pub id: u64,
    /// Where in the sequence this event is.
    pub phase: TouchPhase,
    /// Location in the receiving node's parent space.
    pub location: Point,
}

impl TouchEvent {
    /// Create a touch event.
    pub fn new(id: u64, phase: TouchPhase, location: Point) -> Self {
        Self {
            id,
            phase,
            location,
        }
    }

    /// A `Began` event.
    pub fn began(id: u64, location: Point) -> Self {
        Self::new(id, TouchPhase::Began, location)
    }

    /// A `Moved` event.
    pub fn moved(id: u64, location: Point) -> Self {
        Self::new(id, TouchPhase::Moved, location)
    }

    /// An `Ended` event.
    pub fn ended(id: u64, location: Point) -> Self {
        Self::new(id, TouchPhase::Ended, location)
    }

    /// A `Cancelled` event.
    pub fn cancelled(id: u64, location: Point) -> Self {
        Self::new(id, TouchPhase::Cancelled, location)
    }

    /// Convert a winit touch.
    ///
    /// The location is taken as-is from window coordinates, so this is only
    /// correct for nodes placed directly in a scene that fills the window.
    pub fn from_winit(touch: &Touch) -> Self {
        Self::new(
            touch.id,
            touch.phase.into(),
            Point::new(touch.location.x as f32, touch.location.y as f32),
        )
    }
}
