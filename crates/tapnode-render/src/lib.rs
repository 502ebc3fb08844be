//! Geometry, color, texture and font types for tapnode.
//!
//! This crate holds the value types that scene nodes are built from:
//!
//! - [`Point`], [`Size`], [`Rect`]: 2D geometry in points
//! - [`Color`]: RGBA color
//! - [`Texture`]: shared decoded RGBA image, loaded with the `image` crate
//! - [`Font`]: family name and point size
//!
//! # Example
//!
//! ```
//! use tapnode_render::{Color, Point, Rect, Size, Texture};
//!
//! let texture = Texture::solid(120, 44, Color::from_rgb8(40, 120, 220));
//! assert_eq!(texture.size(), Size::new(120.0, 44.0));
//!
//! let frame = Rect::from_center(Point::new(200.0, 100.0), texture.size());
//! assert!(frame.contains(Point::new(150.0, 90.0)));
//! ```

mod error;
mod font;
mod texture;
mod types;

pub use error::{RenderError, RenderResult};
pub use font::Font;
pub use texture::Texture;
pub use types::{Color, Point, Rect, Size};
