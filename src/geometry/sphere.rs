use crate::hittable::{HitKind, HitRecord, Hittable};
use crate::materials::MaterialId;
use crate::math::*;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Sphere {
    pub center: Vec3,
    pub radius: f32,
    pub material: MaterialId,
}

impl Sphere {
    pub const fn new(center: Vec3, radius: f32, material: MaterialId) -> Sphere {
        Sphere {
            center,
            radius,
            material,
        }
    }
}

impl Hittable for Sphere {
    // assumes r.direction is normalized, so the quadratic's `a` term is 1.
    // only the near root is considered, so rays starting inside a sphere never hit it.
    fn hit(&self, r: Ray, t0: f32, t1: f32) -> Option<HitRecord> {
        let oc: Vec3 = r.origin - self.center;
        let b = r.direction * oc;
        let c = oc * oc - self.radius * self.radius;
        let discriminant = b * b - c;
        if discriminant > 0.0 {
            let time = -b - discriminant.sqrt();
            if time > t0 && time < t1 {
                let normal = (oc + r.direction * time).normalized();
                return Some(HitRecord::new(
                    HitKind::Material(self.material),
                    time,
                    normal,
                ));
            }
        }
        None
    }
}
