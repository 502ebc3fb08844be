//! Font descriptors.

/// A font family name and point size.
///
/// Fonts are descriptors only; resolving the family to glyphs is the job of
/// whatever renders the scene.
#[derive(Debug, Clone, PartialEq)]
pub struct Font {
    family: String,
    size: f32,
}

impl Font {
    /// Create a font descriptor.
    pub fn new(family: impl Into<String>, size: f32) -> Self {
        Self {
            family: family.into(),
            size,
        }
    }

    /// The family name.
    pub fn family(&self) -> &str {
        &self.family
    }

    /// The point size.
    pub fn size(&self) -> f32 {
        self.size
    }

    /// Set the family name.
    pub fn set_family(&mut self, family: impl Into<String>) {
        self.family = family.into();
    }

    /// Set the point size.
    pub fn set_size(&mut self, size: f32) {
        self.size = size;
    }
}
