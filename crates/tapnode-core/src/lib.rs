//! Core systems for tapnode.
//!
//! This crate provides the foundational pieces shared by the tapnode scene
//! graph and its widgets:
//!
//! - **Node identifiers**: stable arena keys for scene nodes
//! - **Actions**: single-registration callback slots that hold their target
//!   by weak reference and check liveness before every dispatch
//! - **Errors**: the error type for node lookups
//! - **Logging**: `tracing` targets used across the workspace
//!
//! # Action Example
//!
//! ```
//! use std::sync::Arc;
//! use std::sync::atomic::{AtomicU32, Ordering};
//! use tapnode_core::{ActionSlot, DispatchOutcome};
//!
//! struct Scoreboard {
//!     taps: AtomicU32,
//! }
//!
//! impl Scoreboard {
//!     fn tapped(&self, _args: &()) {
//!         self.taps.fetch_add(1, Ordering::SeqCst);
//!     }
//! }
//!
//! let board = Arc::new(Scoreboard { taps: AtomicU32::new(0) });
//! let mut slot = ActionSlot::<()>::new();
//! slot.bind(&board, Scoreboard::tapped);
//!
//! assert_eq!(slot.dispatch(&()), DispatchOutcome::Delivered);
//! assert_eq!(board.taps.load(Ordering::SeqCst), 1);
//!
//! // The slot never keeps its target alive.
//! drop(board);
//! assert_eq!(slot.dispatch(&()), DispatchOutcome::TargetDropped);
//! ```

pub mod action;
mod error;
pub mod logging;
pub mod object;

pub use action::{ActionSlot, DispatchOutcome};
pub use error::{NodeError, Result};
pub use object::NodeId;
