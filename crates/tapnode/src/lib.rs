//! Tapnode - a sprite-backed, tappable button node for 2D scene graphs.
//!
//! This is the main crate. It re-exports the core and render crates and
//! provides the scene, the node types and button configuration.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use std::sync::atomic::{AtomicBool, Ordering};
//! use tapnode::config::ButtonConfig;
//! use tapnode::node::{Scene, TouchEvent};
//! use tapnode::node::nodes::{ActionSender, Button, ButtonEvent};
//! use tapnode::render::{Color, Point, Texture};
//!
//! struct Menu {
//!     quit_requested: AtomicBool,
//! }
//!
//! impl Menu {
//!     fn quit(&self, _sender: &ActionSender) {
//!         self.quit_requested.store(true, Ordering::SeqCst);
//!     }
//! }
//!
//! let config = ButtonConfig::from_toml_str("[label]\nfont-size = 18.0\n")?;
//! let menu = Arc::new(Menu { quit_requested: AtomicBool::new(false) });
//!
//! let mut quit = Button::with_config(
//!     Texture::solid(160, 48, Color::from_hex("#3366cc").unwrap_or(Color::BLUE)),
//!     Texture::solid(160, 48, Color::from_hex("#224488").unwrap_or(Color::BLUE)),
//!     Some(Texture::solid(160, 48, Color::from_rgb8(90, 90, 90))),
//!     &config,
//! )
//! .with_position(Point::new(240.0, 160.0));
//! quit.set_label("Quit", "Helvetica", 18.0);
//! quit.set_action(&menu, ButtonEvent::TouchUpInside, Menu::quit);
//!
//! let mut scene = Scene::new();
//! scene.add(quit);
//!
//! scene.handle_touch(&TouchEvent::began(1, Point::new(240.0, 160.0)));
//! scene.handle_touch(&TouchEvent::ended(1, Point::new(250.0, 170.0)));
//! assert!(menu.quit_requested.load(Ordering::SeqCst));
//! # Ok::<(), tapnode::config::ConfigError>(())
//! ```

pub use tapnode_core::*;

/// Geometry, color, texture and font types.
pub mod render {
    pub use tapnode_render::*;
}

pub mod config;
pub mod node;
