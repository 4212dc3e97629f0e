//! Named color registry
//!
//! Built once at startup with the standard palette and the unit cell axis
//! colors; never mutated afterwards. Lookups resolve either a registered
//! name or a hex literal.

use ahash::AHashMap;

use crate::{Color, ColorError};

/// Registry of named colors
#[derive(Debug)]
pub struct NamedColors {
    colors: Vec<Color>,
    by_name: AHashMap<String, u32>,
}

impl NamedColors {
    /// Create a registry with the default palette and axis colors
    pub fn new() -> Self {
        let mut registry = NamedColors {
            colors: Vec::with_capacity(32),
            by_name: AHashMap::new(),
        };

        registry.register_defaults();
        registry
    }

    fn register_defaults(&mut self) {
        // Basic colors
        self.register("white", Color::new(1.0, 1.0, 1.0));
        self.register("black", Color::new(0.0, 0.0, 0.0));
        self.register("red", Color::new(1.0, 0.0, 0.0));
        self.register("green", Color::new(0.0, 1.0, 0.0));
        self.register("blue", Color::new(0.0, 0.0, 1.0));
        self.register("yellow", Color::new(1.0, 1.0, 0.0));
        self.register("cyan", Color::new(0.0, 1.0, 1.0));
        self.register("magenta", Color::new(1.0, 0.0, 1.0));
        self.register("gray", Color::new(0.5, 0.5, 0.5));
        self.register("orange", Color::new(1.0, 0.5, 0.0));

        // Unit cell axis palette (ColorBrewer Dark2)
        self.register("axis_a", Color::from_rgb8(27, 158, 119));
        self.register("axis_b", Color::from_rgb8(217, 95, 2));
        self.register("axis_c", Color::from_rgb8(117, 112, 179));
    }

    fn register(&mut self, name: &str, color: Color) -> u32 {
        let index = self.colors.len() as u32;
        self.colors.push(color);
        self.by_name.insert(name.to_lowercase(), index);
        index
    }

    /// Get a color by name
    pub fn get_by_name(&self, name: &str) -> Option<Color> {
        self.by_name
            .get(&name.to_lowercase())
            .map(|&idx| self.colors[idx as usize])
    }

    /// Resolve a color name or hex literal, failing with [`ColorError`]
    pub fn resolve(&self, name: &str) -> Result<Color, ColorError> {
        if let Some(color) = self.get_by_name(name) {
            return Ok(color);
        }
        if let Some(color) = Color::from_hex(name) {
            return Ok(color);
        }
        Err(ColorError::NotFound(name.to_string()))
    }

    /// Get the number of registered colors
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Check if the registry is empty
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

impl Default for NamedColors {
    fn default() -> Self {
        Self::new()
    }
}
