use crate::math::*;

// index into the world's material table
pub type MaterialId = u8;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Material {
    pub color: RGBColor,
    /// Weight of the next link in the reflection chain. 0 ends the chain.
    pub reflectivity: f32,
}

impl Material {
    pub const fn new(color: RGBColor, reflectivity: f32) -> Material {
        Material {
            color,
            reflectivity,
        }
    }
}

pub type MaterialTable = [Material];

/// Matte mauve, returned for an index that has no material so that authoring mistakes
/// are visible in the frame instead of panicking mid render.
pub const MAUVE: Material = Material::new(RGBColor::new(0.88, 0.69, 1.0), 0.0);
