//! Sprite-backed button node.
//!
//! This module provides [`Button`], a tappable sprite that swaps between a
//! default, a selected and an optional disabled texture and notifies up to
//! three registered actions.
//!
//! # Displayed Texture
//!
//! Exactly one texture is displayed, chosen in priority order:
//!
//! 1. the disabled texture, when the button is disabled and has one;
//! 2. the selected texture, when the button is selected;
//! 3. the default texture.
//!
//! # Touch Handling
//!
//! | touch     | enabled button                                            |
//! |-----------|-----------------------------------------------------------|
//! | began     | select, fire [`ButtonEvent::TouchDown`]                   |
//! | moved     | select while the touch is inside the frame, else deselect |
//! | ended     | deselect, fire `TouchUpInside` if inside, then `TouchUp`  |
//! | cancelled | per [`CancelBehavior`]                                    |
//!
//! A disabled button ignores touches. If it was disabled in the middle of a
//! gesture, the end of that gesture still deselects it, without firing.
//!
//! A button follows one touch at a time. While it tracks a touch, events
//! from any other touch are ignored.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use std::sync::atomic::{AtomicU32, Ordering};
//! use tapnode::node::{Node, TouchEvent};
//! use tapnode::node::nodes::{ActionSender, Button, ButtonEvent};
//! use tapnode::render::{Color, Point, Texture};
//!
//! struct Game {
//!     starts: AtomicU32,
//! }
//!
//! impl Game {
//!     fn start(&self, _sender: &ActionSender) {
//!         self.starts.fetch_add(1, Ordering::SeqCst);
//!     }
//! }
//!
//! let game = Arc::new(Game { starts: AtomicU32::new(0) });
//! let mut play = Button::new(
//!     Texture::solid(120, 40, Color::BLUE),
//!     Texture::solid(120, 40, Color::GREEN),
//!     None,
//! );
//! play.set_label("Play", "Helvetica", 20.0);
//! play.set_action(&game, ButtonEvent::TouchUpInside, Game::start);
//!
//! play.touch_began(&TouchEvent::began(1, Point::ZERO));
//! play.touch_ended(&TouchEvent::ended(1, Point::ZERO));
//! assert_eq!(game.starts.load(Ordering::SeqCst), 1);
//! ```

use std::any::Any;
use std::sync::Arc;

use tapnode_core::logging::targets;
use tapnode_core::{ActionSlot, DispatchOutcome, NodeId};
use tapnode_render::{Color, Point, Texture};

use super::label::{HorizontalAlignment, LabelNode, VerticalAlignment};
use super::sprite::SpriteNode;
use crate::config::{ButtonConfig, CancelBehavior};
use crate::node::{Node, NodeBase, TouchEvent};

/// The button events an action can be registered for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ButtonEvent {
    /// A touch began on the button.
    TouchDown,
    /// A touch that began on the button ended, anywhere.
    TouchUp,
    /// A touch that began on the button ended inside its frame.
    TouchUpInside,
}

impl ButtonEvent {
    /// Every event kind.
    pub const ALL: [ButtonEvent; 3] = [Self::TouchDown, Self::TouchUp, Self::TouchUpInside];
}

/// What an action receives when it is dispatched.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActionSender {
    /// The button's id in its scene (null if the button is not in a scene).
    pub node_id: NodeId,
    /// The event that triggered the action.
    pub event: ButtonEvent,
    /// The touch location, in the button's parent space.
    pub location: Point,
}

/// A sprite node that behaves as a button.
pub struct Button {
    /// The displayed surface; its base is the button's base.
    sprite: SpriteNode,

    /// The single label, drawn above the sprite.
    label: LabelNode,

    default_texture: Texture,
    selected_texture: Texture,
    disabled_texture: Option<Texture>,

    enabled: bool,
    selected: bool,

    /// The touch whose sequence began while enabled and is still in progress.
    tracking: Option<u64>,

    cancel_behavior: CancelBehavior,

    touch_down: ActionSlot<ActionSender>,
    touch_up: ActionSlot<ActionSender>,
    touch_up_inside: ActionSlot<ActionSender>,
}

impl Button {
    /// Create a button with the default configuration.
    ///
    /// The button takes the size of `default_texture`.
    pub fn new(
        default_texture: Texture,
        selected_texture: Texture,
        disabled_texture: Option<Texture>,
    ) -> Self {
        Self::with_config(
            default_texture,
            selected_texture,
            disabled_texture,
            &ButtonConfig::default(),
        )
    }

    /// Create a button using `config` for its label and cancel handling.
    pub fn with_config(
        default_texture: Texture,
        selected_texture: Texture,
        disabled_texture: Option<Texture>,
        config: &ButtonConfig,
    ) -> Self {
        let mut sprite = SpriteNode::new(default_texture.clone());
        sprite.set_color(Color::WHITE);
        sprite.node_base_mut().set_user_interaction_enabled(true);

        // Blank label, centered on the button and drawn above it.
        let mut label = LabelNode::new(config.label.font());
        label.set_color(config.label.color);
        label.set_horizontal_alignment(HorizontalAlignment::Center);
        label.set_vertical_alignment(VerticalAlignment::Center);
        label.set_z_position(sprite.z_position() + config.label.z_offset);

        Self {
            sprite,
            label,
            default_texture,
            selected_texture,
            disabled_texture,
            enabled: true,
            selected: false,
            tracking: None,
            cancel_behavior: config.cancel_behavior,
            touch_down: ActionSlot::new(),
            touch_up: ActionSlot::new(),
            touch_up_inside: ActionSlot::new(),
        }
    }

    // =========================================================================
    // Textures
    // =========================================================================

    /// The texture shown when neither selected nor disabled.
    pub fn default_texture(&self) -> &Texture {
        &self.default_texture
    }

    /// The texture shown while selected.
    pub fn selected_texture(&self) -> &Texture {
        &self.selected_texture
    }

    /// The texture shown while disabled, if any.
    pub fn disabled_texture(&self) -> Option<&Texture> {
        self.disabled_texture.as_ref()
    }

    /// The texture currently displayed.
    pub fn displayed_texture(&self) -> &Texture {
        // The sprite is only ever given one of our own textures.
        self.sprite.texture().unwrap_or(&self.default_texture)
    }

    fn resolve_texture(&self) -> &Texture {
        if !self.enabled {
            if let Some(disabled) = &self.disabled_texture {
                return disabled;
            }
        }
        if self.selected {
            &self.selected_texture
        } else {
            &self.default_texture
        }
    }

    fn refresh_texture(&mut self) {
        let texture = self.resolve_texture().clone();
        if self.sprite.texture() != Some(&texture) {
            self.sprite.set_texture(Some(texture));
        }
    }

    // =========================================================================
    // Enabled / Selected State
    // =========================================================================

    /// Check if the button responds to touches.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Enable or disable the button.
    ///
    /// Shows the disabled texture while disabled, if one was given.
    pub fn set_enabled(&mut self, enabled: bool) {
        if self.enabled != enabled {
            tracing::trace!(target: targets::BUTTON, enabled, "button enabled changed");
            self.enabled = enabled;
            self.refresh_texture();
        }
    }

    /// Set enabled using builder pattern.
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.set_enabled(enabled);
        self
    }

    /// Check if the button is showing its pressed state.
    pub fn is_selected(&self) -> bool {
        self.selected
    }

    /// Select or deselect the button.
    pub fn set_selected(&mut self, selected: bool) {
        if self.selected != selected {
            tracing::trace!(target: targets::BUTTON, selected, "button selected changed");
            self.selected = selected;
            self.refresh_texture();
        }
    }

    /// Check if a touch sequence is in progress on this button.
    pub fn is_tracking(&self) -> bool {
        self.tracking.is_some()
    }

    /// The id of the touch that owns the current sequence, if any.
    pub fn tracked_touch(&self) -> Option<u64> {
        self.tracking
    }

    // =========================================================================
    // Label
    // =========================================================================

    /// Set the label's text, font family and font size.
    ///
    /// Updates the one label the button owns; calling this repeatedly never
    /// creates further labels.
    pub fn set_label(&mut self, text: impl Into<String>, font_name: impl Into<String>, font_size: f32) {
        self.label.set_text(text);
        let font = self.label.font_mut();
        font.set_family(font_name);
        font.set_size(font_size);
    }

    /// Set the label using builder pattern.
    pub fn with_label(
        mut self,
        text: impl Into<String>,
        font_name: impl Into<String>,
        font_size: f32,
    ) -> Self {
        self.set_label(text, font_name, font_size);
        self
    }

    /// The button's label.
    pub fn label(&self) -> &LabelNode {
        &self.label
    }

    /// The button's label, for color or alignment changes.
    pub fn label_mut(&mut self) -> &mut LabelNode {
        &mut self.label
    }

    // =========================================================================
    // Placement
    // =========================================================================

    /// Set the position using builder pattern.
    pub fn with_position(mut self, position: Point) -> Self {
        self.set_position(position);
        self
    }

    /// Set the name using builder pattern.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.sprite.node_base_mut().set_name(name);
        self
    }

    // =========================================================================
    // Actions
    // =========================================================================

    fn slot(&self, event: ButtonEvent) -> &ActionSlot<ActionSender> {
        match event {
            ButtonEvent::TouchDown => &self.touch_down,
            ButtonEvent::TouchUp => &self.touch_up,
            ButtonEvent::TouchUpInside => &self.touch_up_inside,
        }
    }

    fn slot_mut(&mut self, event: ButtonEvent) -> &mut ActionSlot<ActionSender> {
        match event {
            ButtonEvent::TouchDown => &mut self.touch_down,
            ButtonEvent::TouchUp => &mut self.touch_up,
            ButtonEvent::TouchUpInside => &mut self.touch_up_inside,
        }
    }

    /// Register `action` to be called on `target` when `event` happens.
    ///
    /// Replaces any action previously registered for `event`. Only a weak
    /// reference to `target` is kept; once the target is dropped the action
    /// is skipped.
    pub fn set_action<T>(&mut self, target: &Arc<T>, event: ButtonEvent, action: fn(&T, &ActionSender))
    where
        T: Send + Sync + 'static,
    {
        self.slot_mut(event).bind(target, action);
    }

    /// Register a closure for `event`, replacing any previous action.
    pub fn set_action_fn<F>(&mut self, event: ButtonEvent, action: F)
    where
        F: Fn(&ActionSender) + Send + Sync + 'static,
    {
        self.slot_mut(event).bind_fn(action);
    }

    /// Remove the action registered for `event`.
    ///
    /// Returns `true` if one was registered.
    pub fn clear_action(&mut self, event: ButtonEvent) -> bool {
        self.slot_mut(event).clear()
    }

    /// Check if `event` has an action whose target is still alive.
    pub fn has_action(&self, event: ButtonEvent) -> bool {
        self.slot(event).is_live()
    }

    fn send_action(&self, event: ButtonEvent, location: Point) -> DispatchOutcome {
        let sender = ActionSender {
            node_id: self.node_id(),
            event,
            location,
        };
        let outcome = self.slot(event).dispatch(&sender);
        if outcome == DispatchOutcome::TargetDropped {
            tracing::trace!(target: targets::BUTTON, ?event, "action target dropped, skipped");
        }
        outcome
    }

    /// Whether `touch` belongs to a sequence other than the tracked one.
    fn is_foreign(&self, touch: u64) -> bool {
        self.tracking.is_some_and(|owner| owner != touch)
    }

    fn release(&mut self) {
        self.tracking = None;
        self.set_selected(false);
    }

    fn finish_touch(&mut self, location: Point, inside: bool) {
        self.tracking = None;
        self.set_selected(false);

        if inside {
            self.send_action(ButtonEvent::TouchUpInside, location);
        }
        self.send_action(ButtonEvent::TouchUp, location);
    }
}

impl Node for Button {
    fn node_base(&self) -> &NodeBase {
        self.sprite.node_base()
    }

    fn node_base_mut(&mut self) -> &mut NodeBase {
        self.sprite.node_base_mut()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn children(&self) -> Vec<&dyn Node> {
        vec![&self.label]
    }

    fn touch_began(&mut self, event: &TouchEvent) {
        if !self.enabled {
            return;
        }
        if self.tracking.is_some() {
            tracing::trace!(target: targets::BUTTON, touch = event.id, "already tracking, ignored");
            return;
        }
        tracing::trace!(target: targets::BUTTON, touch = event.id, "touch down");
        self.tracking = Some(event.id);
        self.set_selected(true);
        self.send_action(ButtonEvent::TouchDown, event.location);
    }

    fn touch_moved(&mut self, event: &TouchEvent) {
        if !self.enabled || self.is_foreign(event.id) {
            return;
        }
        let inside = self.frame().contains(event.location);
        self.set_selected(inside);
    }

    fn touch_ended(&mut self, event: &TouchEvent) {
        if self.is_foreign(event.id) {
            return;
        }
        if !self.enabled {
            if self.tracking.is_some() {
                // Disabled mid-gesture: drop the pressed state, fire nothing.
                self.release();
            }
            return;
        }
        let inside = self.frame().contains(event.location);
        tracing::trace!(target: targets::BUTTON, touch = event.id, inside, "touch up");
        self.finish_touch(event.location, inside);
    }

    fn touch_cancelled(&mut self, event: &TouchEvent) {
        if self.is_foreign(event.id) {
            return;
        }
        if !self.enabled {
            if self.tracking.is_some() {
                self.release();
            }
            return;
        }
        tracing::trace!(
            target: targets::BUTTON,
            touch = event.id,
            behavior = ?self.cancel_behavior,
            "touch cancelled"
        );
        match self.cancel_behavior {
            CancelBehavior::EndOutside => self.finish_touch(event.location, false),
            CancelBehavior::Silent => self.release(),
        }
    }
}

impl std::fmt::Debug for Button {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Button")
            .field("id", &self.node_id())
            .field("label", &self.label.text())
            .field("enabled", &self.enabled)
            .field("selected", &self.selected)
            .field("displayed_texture", &self.displayed_texture().id())
            .finish()
    }
}

// Ensure Button is Send + Sync
static_assertions::assert_impl_all!(Button: Send, Sync);
