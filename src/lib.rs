#[macro_use]
extern crate tracing;

pub mod camera;
pub mod geometry;
pub mod hittable;
pub mod integrator;
pub mod materials;
pub mod math;
pub mod parsing;
pub mod prelude;
pub mod profile;
pub mod renderer;
pub mod world;

pub use renderer::{do_raytrace, Clock, FrameSettings, Screen};

pub fn rgb_to_u32(r: u8, g: u8, b: u8) -> u32 {
    ((r as u32) << 16) | ((g as u32) << 8) | (b as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_to_u32() {
        assert_eq!(rgb_to_u32(0, 0, 0), 0);
        assert_eq!(rgb_to_u32(0xff, 0x80, 0x01), 0x00ff8001);
    }
}
