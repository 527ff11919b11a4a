use crate::hittable::{HitKind, HitRecord, Hittable};
use crate::math::*;

/// The ground, the infinite plane z = 0. Its normal always points up.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct FloorPlane;

impl Hittable for FloorPlane {
    fn hit(&self, r: Ray, t0: f32, t1: f32) -> Option<HitRecord> {
        if r.direction.z == 0.0 {
            // parallel to the floor
            return None;
        }
        let time = -r.origin.z / r.direction.z;
        if time > t0 && time < t1 {
            Some(HitRecord::new(HitKind::Floor, time, Vec3::Z))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_floor_from_above() {
        let ray = Ray::new(Vec3::new(3.0, -2.0, 4.0), Vec3::new(0.0, 0.6, -0.8));
        let hit = FloorPlane.hit(ray, 0.01, INFINITY).unwrap();
        assert_eq!(hit.kind, HitKind::Floor);
        assert_eq!(hit.normal, Vec3::Z);
        assert!((hit.distance - 5.0).abs() < 1e-5);
        assert!(ray.point_at_parameter(hit.distance).z.abs() < 1e-5);
    }

    #[test]
    fn test_degenerate_directions() {
        // parallel, on the plane and above it
        for z in [0.0, 2.0, -2.0] {
            let ray = Ray::new(Vec3::new(0.0, 0.0, z), Vec3::X);
            assert!(FloorPlane.hit(ray, 0.01, INFINITY).is_none());
        }
        // leaving the floor: t is ~0, inside the epsilon
        let ray = Ray::new(Vec3::new(1.0, 1.0, 0.0), Vec3::Z);
        assert!(FloorPlane.hit(ray, 0.01, INFINITY).is_none());
    }
}
