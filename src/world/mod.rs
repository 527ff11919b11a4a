mod environment;
pub mod scene;

pub use environment::EnvironmentMap;

use crate::geometry::{FloorPlane, Sphere};
use crate::hittable::{HitRecord, Hittable};
use crate::materials::{Material, MaterialId, MaterialTable, MAUVE};
use crate::math::*;

/// Minimum accepted hit distance. Keeps rays that start on a surface from hitting it again.
pub const INTERSECTION_TIME_OFFSET: f32 = 0.01;

#[derive(Copy, Clone, Debug)]
pub struct World {
    pub floor: FloorPlane,
    pub spheres: &'static [Sphere],
    pub materials: &'static MaterialTable,
    pub environment: EnvironmentMap,
    pub light_position: Vec3,
    pub ambient: f32,
}

impl World {
    pub fn new(spheres: &'static [Sphere], materials: &'static MaterialTable) -> Self {
        debug_assert!(spheres.iter().all(|s| s.radius > 0.0));
        debug_assert!(spheres
            .iter()
            .all(|s| (s.material as usize) < materials.len()));
        World {
            floor: FloorPlane,
            spheres,
            materials,
            environment: scene::SKY,
            light_position: scene::LIGHT_POSITION,
            ambient: scene::AMBIENT,
        }
    }

    pub fn get_material(&self, mat_id: MaterialId) -> &Material {
        self.materials.get(mat_id as usize).unwrap_or(&MAUVE)
    }

    /// Closest hit along `r`, which must have a normalized direction.
    ///
    /// The floor is tested first, then the spheres in table order. A later candidate has
    /// to be strictly closer to win, so ties go to whichever was tested first.
    pub fn trace(&self, r: Ray) -> HitRecord {
        let mut nearest = HitRecord::sky();
        let mut t1 = INFINITY;
        if let Some(hit) = self.floor.hit(r, INTERSECTION_TIME_OFFSET, t1) {
            t1 = hit.distance;
            nearest = hit;
        }
        for sphere in self.spheres {
            if let Some(hit) = sphere.hit(r, INTERSECTION_TIME_OFFSET, t1) {
                t1 = hit.distance;
                nearest = hit;
            }
        }
        nearest
    }
}

impl Default for World {
    fn default() -> Self {
        World::new(&scene::SPHERES, &scene::MATERIALS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hittable::HitKind;

    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    static NO_SPHERES: [Sphere; 0] = [];

    static STACKED: [Sphere; 2] = [
        Sphere::new(Vec3::new(0.0, 20.0, 5.0), 2.0, 1),
        Sphere::new(Vec3::new(0.0, 10.0, 5.0), 1.0, 2),
    ];

    static TWINS: [Sphere; 2] = [
        Sphere::new(Vec3::new(0.0, 10.0, 5.0), 1.0, 2),
        Sphere::new(Vec3::new(0.0, 10.0, 5.0), 1.0, 0),
    ];

    fn random_direction(rng: &mut StdRng) -> Vec3 {
        loop {
            let v = Vec3::new(
                rng.gen_range(-1.0..1.0),
                rng.gen_range(-1.0..1.0),
                rng.gen_range(-1.0..1.0),
            );
            let len = v.norm();
            if len > 0.1 && len <= 1.0 {
                return v.normalized();
            }
        }
    }

    #[test]
    fn test_default_scene_is_well_formed() {
        let world = World::default();
        assert_eq!(world.spheres.len(), 4);
        assert_eq!(world.materials.len(), 3);
        for sphere in world.spheres {
            assert!(sphere.radius > 0.0);
            assert!((sphere.material as usize) < world.materials.len());
        }
        for material in world.materials {
            assert!((0.0..1.0).contains(&material.reflectivity));
        }
        // one material is shared by two spheres
        assert_eq!(
            world.spheres.iter().filter(|s| s.material == 1).count(),
            2
        );
    }

    #[test]
    fn test_downward_rays_hit_floor() {
        let world = World::new(&NO_SPHERES, &scene::MATERIALS);
        let mut rng = StdRng::seed_from_u64(0x5eed);
        for _ in 0..1000 {
            let mut direction = random_direction(&mut rng);
            if direction.z >= 0.0 {
                direction.z = -direction.z - 0.01;
                direction = direction.normalized();
            }
            let origin = Vec3::new(
                rng.gen_range(-50.0..50.0),
                rng.gen_range(-50.0..50.0),
                rng.gen_range(0.5..30.0),
            );
            let hit = world.trace(Ray::new(origin, direction));
            assert_eq!(hit.kind, HitKind::Floor);
            assert_eq!(hit.normal, Vec3::Z);
            let expected = -origin.z / direction.z;
            assert!(
                (hit.distance - expected).abs() <= 1e-4 * expected.max(1.0),
                "{} vs {}",
                hit.distance,
                expected
            );
        }
    }

    #[test]
    fn test_upward_rays_see_sky() {
        let world = World::new(&NO_SPHERES, &scene::MATERIALS);
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            let mut direction = random_direction(&mut rng);
            direction.z = direction.z.abs();
            let origin = Vec3::new(
                rng.gen_range(-50.0..50.0),
                rng.gen_range(-50.0..50.0),
                rng.gen_range(0.0..30.0),
            );
            let hit = world.trace(Ray::new(origin, direction));
            assert!(hit.is_sky());
        }
        // exactly horizontal, on and above the floor
        for z in [0.0, 1.0] {
            let hit = world.trace(Ray::new(Vec3::new(0.0, 0.0, z), Vec3::X));
            assert!(hit.is_sky());
        }
    }

    #[test]
    fn test_closest_sphere_wins() {
        let world = World::new(&STACKED, &scene::MATERIALS);
        // passes through both centers; the second table entry is nearer
        let ray = Ray::new(Vec3::new(0.0, 0.0, 5.0), Vec3::Y);
        let hit = world.trace(ray);
        assert_eq!(hit.kind, HitKind::Material(2));
        assert!((hit.distance - 9.0).abs() < 1e-4);
        assert!((hit.normal - -Vec3::Y).norm() < 1e-5);

        // from the far side the order flips
        let ray = Ray::new(Vec3::new(0.0, 30.0, 5.0), -Vec3::Y);
        let hit = world.trace(ray);
        assert_eq!(hit.kind, HitKind::Material(1));
        assert!((hit.distance - 8.0).abs() < 1e-4);
    }

    #[test]
    fn test_sphere_in_front_of_floor() {
        let world = World::new(&STACKED, &scene::MATERIALS);
        // aims down through the near sphere's center, floor is further away
        let origin = Vec3::new(0.0, 0.0, 10.0);
        let direction = (STACKED[1].center - origin).normalized();
        let hit = world.trace(Ray::new(origin, direction));
        assert_eq!(hit.kind, HitKind::Material(2));
        let point = Ray::new(origin, direction).point_at_parameter(hit.distance);
        assert!(((point - STACKED[1].center).norm() - 1.0).abs() < 1e-3);
    }

    #[test]
    fn test_equal_distance_keeps_first() {
        let world = World::new(&TWINS, &scene::MATERIALS);
        let hit = world.trace(Ray::new(Vec3::new(0.0, 0.0, 5.0), Vec3::Y));
        assert_eq!(hit.kind, HitKind::Material(2));
    }

    #[test]
    fn test_missing_material_is_mauve() {
        let world = World::default();
        assert_eq!(*world.get_material(200), MAUVE);
        assert_eq!(*world.get_material(0), scene::MATERIALS[0]);
    }
}
