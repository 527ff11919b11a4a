use crate::materials::MaterialId;
use crate::math::*;

/// What a ray ended up on. `Material` carries the index of the sphere's material.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum HitKind {
    Sky,
    Floor,
    Material(MaterialId),
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct HitRecord {
    pub kind: HitKind,
    pub distance: f32,
    pub normal: Vec3,
}

impl HitRecord {
    pub fn new(kind: HitKind, distance: f32, normal: Vec3) -> Self {
        HitRecord {
            kind,
            distance,
            normal,
        }
    }

    pub const fn sky() -> Self {
        HitRecord {
            kind: HitKind::Sky,
            distance: INFINITY,
            normal: Vec3::ZERO,
        }
    }

    pub fn is_sky(&self) -> bool {
        self.kind == HitKind::Sky
    }
}

pub trait Hittable {
    /// Nearest intersection with `t0 < t < t1`, if any.
    fn hit(&self, r: Ray, t0: f32, t1: f32) -> Option<HitRecord>;
}
