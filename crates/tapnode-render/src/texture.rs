//! Texture loading and sharing.
//!
//! A [`Texture`] is a cheap-to-clone handle to decoded RGBA pixels. Cloning
//! shares the pixel data; two handles compare equal only if they refer to
//! the same decoded image, which is what sprite nodes need in order to tell
//! which of their textures is currently displayed.

use std::fmt;
use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use image::{Rgba, RgbaImage};

use crate::error::{RenderError, RenderResult};
use crate::types::{Color, Size};

const TEXTURE_TARGET: &str = "tapnode_render::texture";

static NEXT_TEXTURE_ID: AtomicU64 = AtomicU64::new(1);

struct TextureData {
    id: u64,
    name: Option<String>,
    pixels: RgbaImage,
}

/// A shared, immutable image used by sprite nodes.
#[derive(Clone)]
pub struct Texture {
    inner: Arc<TextureData>,
}

impl Texture {
    /// Create a texture from decoded RGBA pixels.
    ///
    /// Fails if the image has zero width or height.
    pub fn from_image(pixels: RgbaImage) -> RenderResult<Self> {
        let (width, height) = pixels.dimensions();
        if width == 0 || height == 0 {
            return Err(RenderError::InvalidDimensions { width, height });
        }
        Ok(Self::from_pixels(pixels, None))
    }

    /// Decode a texture from encoded image bytes (PNG).
    pub fn from_memory(bytes: &[u8]) -> RenderResult<Self> {
        let pixels = image::load_from_memory(bytes)?.to_rgba8();
        tracing::debug!(
            target: TEXTURE_TARGET,
            width = pixels.width(),
            height = pixels.height(),
            "decoded texture from memory"
        );
        Self::from_image(pixels)
    }

    /// Load and decode a texture from a file.
    ///
    /// The texture is named after the file stem.
    pub fn open(path: impl AsRef<Path>) -> RenderResult<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|source| RenderError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let texture = Self::from_image(image::load_from_memory(&bytes)?.to_rgba8())?;
        tracing::debug!(
            target: TEXTURE_TARGET,
            path = %path.display(),
            width = texture.width(),
            height = texture.height(),
            "loaded texture"
        );
        Ok(match path.file_stem() {
            Some(stem) => texture.with_name(stem.to_string_lossy()),
            None => texture,
        })
    }

    /// Create a texture filled with a single color.
    ///
    /// Zero dimensions are raised to one pixel.
    pub fn solid(width: u32, height: u32, color: Color) -> Self {
        let pixels = RgbaImage::from_pixel(width.max(1), height.max(1), Rgba(color.to_rgba8()));
        Self::from_pixels(pixels, None)
    }

    fn from_pixels(pixels: RgbaImage, name: Option<String>) -> Self {
        Self {
            inner: Arc::new(TextureData {
                id: NEXT_TEXTURE_ID.fetch_add(1, Ordering::Relaxed),
                name,
                pixels,
            }),
        }
    }

    /// Attach a debug name, using builder pattern.
    ///
    /// The returned handle is a new texture sharing no identity with `self`.
    pub fn with_name(self, name: impl Into<String>) -> Self {
        let pixels = match Arc::try_unwrap(self.inner) {
            Ok(data) => data.pixels,
            Err(shared) => shared.pixels.clone(),
        };
        Self::from_pixels(pixels, Some(name.into()))
    }

    /// Process-unique identifier of this texture.
    #[inline]
    pub fn id(&self) -> u64 {
        self.inner.id
    }

    /// Debug name, if any.
    pub fn name(&self) -> Option<&str> {
        self.inner.name.as_deref()
    }

    /// Width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.pixels.width()
    }

    /// Height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.pixels.height()
    }

    /// Size in points (one point per pixel).
    #[inline]
    pub fn size(&self) -> Size {
        Size::from((self.width(), self.height()))
    }

    /// The decoded pixels.
    pub fn pixels(&self) -> &RgbaImage {
        &self.inner.pixels
    }
}

impl PartialEq for Texture {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl Eq for Texture {}

impl fmt::Debug for Texture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Texture")
            .field("id", &self.inner.id)
            .field("name", &self.inner.name)
            .field("width", &self.width())
            .field("height", &self.height())
            .finish()
    }
}

static_assertions::assert_impl_all!(Texture: Send, Sync);
