mod color;
mod random;
mod vec;

pub use color::RGBColor;
pub use random::ByteRng;
pub use vec::Vec3;

pub use std::f32::INFINITY;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    pub const fn new(origin: Vec3, direction: Vec3) -> Self {
        Ray { origin, direction }
    }

    pub fn point_at_parameter(self, time: f32) -> Vec3 {
        self.origin + self.direction * time
    }
}
