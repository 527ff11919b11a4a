mod shading;

pub use shading::{sample, Shade, SPECULAR_EXPONENT, TILE_SIZE};

use crate::math::*;
use crate::profile::Profile;
use crate::world::World;

/// Hard cap on shading evaluations per camera ray sample. The renderer never walks past
/// the third link no matter how reflective the materials are.
pub const MAX_LINKS: usize = 3;

/// Walks the linear mirror chain for one camera ray:
/// `c1 + c2 * r1 + c3 * r1 * r2`, stopping as soon as a link returns zero reflectivity.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ReflectionChain {
    max_links: usize,
    shadow_region: f32,
}

impl ReflectionChain {
    pub fn new(max_links: usize, shadow_region: f32) -> Self {
        if max_links > MAX_LINKS {
            warn!(
                "requested {} reflection links, capping at {}",
                max_links, MAX_LINKS
            );
        }
        ReflectionChain {
            max_links: max_links.clamp(1, MAX_LINKS),
            shadow_region,
        }
    }

    pub fn max_links(&self) -> usize {
        self.max_links
    }

    pub fn shadow_region(&self) -> f32 {
        self.shadow_region
    }

    pub fn radiance(
        &self,
        world: &World,
        camera_ray: Ray,
        rng: &mut ByteRng,
        profile: &mut Profile,
    ) -> RGBColor {
        let mut ray = camera_ray;
        let mut sum = RGBColor::ZERO;
        let mut beta = 1.0;
        for _ in 0..self.max_links {
            let Shade {
                color,
                reflectivity,
            } = sample(world, &mut ray, rng, self.shadow_region, profile);
            sum += color * beta;
            if reflectivity <= 0.0 {
                break;
            }
            beta *= reflectivity;
        }
        sum
    }
}

impl Default for ReflectionChain {
    fn default() -> Self {
        ReflectionChain::new(MAX_LINKS, 1.0)
    }
}
