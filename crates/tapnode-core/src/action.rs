//! Weak-target action slots for tapnode.
//!
//! An [`ActionSlot`] holds at most one registered action. Registering a new
//! action replaces the previous one. Actions bound to a target object hold
//! that object by [`Weak`] reference only, so a widget never keeps the
//! objects it notifies alive; before every dispatch the slot checks that the
//! target still exists and silently skips the call if it does not.
//!
//! # Binding Kinds
//!
//! - [`ActionSlot::bind`]: a target `Arc<T>` plus a method `fn(&T, &Args)`.
//!   The target is downgraded to a `Weak<T>` immediately.
//! - [`ActionSlot::bind_fn`]: a plain closure. Closures own whatever they
//!   capture, so they are always live.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use std::sync::atomic::{AtomicBool, Ordering};
//! use tapnode_core::{ActionSlot, DispatchOutcome};
//!
//! struct Menu {
//!     opened: AtomicBool,
//! }
//!
//! impl Menu {
//!     fn open(&self, _: &u32) {
//!         self.opened.store(true, Ordering::SeqCst);
//!     }
//! }
//!
//! let menu = Arc::new(Menu { opened: AtomicBool::new(false) });
//! let mut slot = ActionSlot::<u32>::new();
//! slot.bind(&menu, Menu::open);
//! assert_eq!(slot.dispatch(&7), DispatchOutcome::Delivered);
//! assert!(menu.opened.load(Ordering::SeqCst));
//! ```

use std::fmt;
use std::sync::{Arc, Weak};

use crate::logging::targets;

/// The result of dispatching an [`ActionSlot`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// The action was invoked.
    Delivered,
    /// No action is registered in the slot.
    Unbound,
    /// An action is registered but its target has been dropped.
    TargetDropped,
}

impl DispatchOutcome {
    /// Check if the action was actually invoked.
    pub fn was_delivered(&self) -> bool {
        matches!(self, Self::Delivered)
    }
}

/// A registered action, type-erased over its target.
trait ActionBinding<Args>: Send + Sync {
    /// Whether the target can still receive the action.
    fn is_alive(&self) -> bool;

    /// Invoke the action, returning `false` if the target was gone.
    fn invoke(&self, args: &Args) -> bool;

    /// Name of the target type, for diagnostics.
    fn target_type(&self) -> &'static str;
}

/// An action bound to a target held by weak reference.
struct WeakBinding<T, Args> {
    target: Weak<T>,
    action: fn(&T, &Args),
}

impl<T, Args> ActionBinding<Args> for WeakBinding<T, Args>
where
    T: Send + Sync,
{
    fn is_alive(&self) -> bool {
        self.target.strong_count() > 0
    }

    fn invoke(&self, args: &Args) -> bool {
        // Upgrade for the duration of the call only.
        match self.target.upgrade() {
            Some(target) => {
                (self.action)(&target, args);
                true
            }
            None => false,
        }
    }

    fn target_type(&self) -> &'static str {
        std::any::type_name::<T>()
    }
}

/// An action backed by an owned closure.
struct FnBinding<F> {
    slot: F,
}

impl<F, Args> ActionBinding<Args> for FnBinding<F>
where
    F: Fn(&Args) + Send + Sync,
{
    fn is_alive(&self) -> bool {
        true
    }

    fn invoke(&self, args: &Args) -> bool {
        (self.slot)(args);
        true
    }

    fn target_type(&self) -> &'static str {
        "closure"
    }
}

/// A slot holding at most one action.
///
/// # Type Parameter
///
/// - `Args`: The argument passed by reference to the action on dispatch.
///
/// # Thread Safety
///
/// `ActionSlot<Args>` is `Send + Sync`; bound targets must be `Send + Sync`
/// and closures must be `Send + Sync`.
pub struct ActionSlot<Args> {
    binding: Option<Box<dyn ActionBinding<Args>>>,
}

impl<Args: 'static> Default for ActionSlot<Args> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Args: 'static> ActionSlot<Args> {
    /// Create an empty slot.
    pub fn new() -> Self {
        Self { binding: None }
    }

    /// Bind `action` to be called on `target`, replacing any previous action.
    ///
    /// Only a weak reference to `target` is kept.
    pub fn bind<T>(&mut self, target: &Arc<T>, action: fn(&T, &Args))
    where
        T: Send + Sync + 'static,
    {
        tracing::trace!(
            target: targets::ACTION,
            target_type = std::any::type_name::<T>(),
            replaced = self.binding.is_some(),
            "binding action"
        );
        self.binding = Some(Box::new(WeakBinding {
            target: Arc::downgrade(target),
            action,
        }));
    }

    /// Bind a closure, replacing any previous action.
    pub fn bind_fn<F>(&mut self, slot: F)
    where
        F: Fn(&Args) + Send + Sync + 'static,
    {
        tracing::trace!(
            target: targets::ACTION,
            replaced = self.binding.is_some(),
            "binding closure action"
        );
        self.binding = Some(Box::new(FnBinding { slot }));
    }

    /// Remove the registered action.
    ///
    /// Returns `true` if an action was registered.
    pub fn clear(&mut self) -> bool {
        self.binding.take().is_some()
    }

    /// Check if an action is registered, live or not.
    pub fn is_bound(&self) -> bool {
        self.binding.is_some()
    }

    /// Check if an action is registered and its target still exists.
    pub fn is_live(&self) -> bool {
        self.binding.as_ref().is_some_and(|b| b.is_alive())
    }

    /// Dispatch the registered action with `args`.
    ///
    /// A dropped target is not an error; the call is skipped and reported as
    /// [`DispatchOutcome::TargetDropped`].
    pub fn dispatch(&self, args: &Args) -> DispatchOutcome {
        let Some(binding) = self.binding.as_ref() else {
            return DispatchOutcome::Unbound;
        };

        if binding.invoke(args) {
            tracing::trace!(
                target: targets::ACTION,
                target_type = binding.target_type(),
                "action delivered"
            );
            DispatchOutcome::Delivered
        } else {
            tracing::trace!(
                target: targets::ACTION,
                target_type = binding.target_type(),
                "action target dropped, skipping"
            );
            DispatchOutcome::TargetDropped
        }
    }
}

impl<Args> fmt::Debug for ActionSlot<Args> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActionSlot")
            .field("target", &self.binding.as_ref().map(|b| b.target_type()))
            .field("live", &self.binding.as_ref().is_some_and(|b| b.is_alive()))
            .finish()
    }
}

static_assertions::assert_impl_all!(ActionSlot<()>: Send, Sync);
