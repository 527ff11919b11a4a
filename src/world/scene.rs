//! The one scene this renderer knows about. Everything is fixed at compile time.

use super::environment::EnvironmentMap;
use crate::geometry::Sphere;
use crate::materials::Material;
use crate::math::*;

pub const CAMERA_POSITION: Vec3 = Vec3::new(4.0, -15.0, 6.5);
pub const CAMERA_TARGET: Vec3 = Vec3::new(0.0, 2.0, 2.0);
/// tan of half the vertical field of view
pub const FIELD_OF_VIEW: f32 = 0.45;

pub const LIGHT_POSITION: Vec3 = Vec3::new(9.0, 6.0, 16.0);
pub const AMBIENT: f32 = 0.1;

pub const SKY: EnvironmentMap = EnvironmentMap::new(
    RGBColor::new(0.05, 0.08, 0.25),
    RGBColor::new(0.7, 0.55, 0.35),
);

pub static MATERIALS: [Material; 3] = [
    // chrome
    Material::new(RGBColor::new(0.85, 0.85, 0.9), 0.7),
    // red enamel, used twice
    Material::new(RGBColor::new(0.9, 0.2, 0.15), 0.3),
    // blue glaze
    Material::new(RGBColor::new(0.15, 0.35, 0.9), 0.45),
];

pub static SPHERES: [Sphere; 4] = [
    Sphere::new(Vec3::new(0.0, 2.0, 3.0), 3.0, 0),
    Sphere::new(Vec3::new(-5.5, 0.0, 1.5), 1.5, 1),
    Sphere::new(Vec3::new(5.5, 4.0, 1.5), 1.5, 1),
    Sphere::new(Vec3::new(2.5, -4.0, 1.0), 1.0, 2),
];
