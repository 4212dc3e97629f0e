//! Text labels placed in 3D space

use lin_alg::f64::Vec3;
use serde::{Deserialize, Serialize};

use cellaxes_color::Color;

/// A single text glyph anchored at a world-space position
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Label {
    /// Label text
    pub text: String,
    /// Position in world space
    #[serde(with = "vec3_serde")]
    pub position: Vec3,
    /// Text color
    pub color: Color,
}

impl Label {
    /// Create a new label at a position
    pub fn new(text: &str, position: Vec3) -> Self {
        Self {
            text: text.to_string(),
            position,
            color: Color::WHITE,
        }
    }

    /// Set the label color
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }
}

mod vec3_serde {
    use lin_alg::f64::Vec3;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S: Serializer>(v: &Vec3, s: S) -> Result<S::Ok, S::Error> {
        [v.x, v.y, v.z].serialize(s)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Vec3, D::Error> {
        let [x, y, z] = <[f64; 3]>::deserialize(d)?;
        Ok(Vec3::new(x, y, z))
    }
}
