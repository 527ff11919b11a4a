use crate::hittable::HitKind;
use crate::math::*;
use crate::profile::Profile;
use crate::world::World;

/// Floor checker tiles are this many units on a side.
pub const TILE_SIZE: f32 = 5.0;
pub const SPECULAR_EXPONENT: u32 = 5;

/// Result of one link of the chain.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Shade {
    pub color: RGBColor,
    /// Weight for the next link. 0 means the chain stops here.
    pub reflectivity: f32,
}

impl Shade {
    pub const fn terminal(color: RGBColor) -> Self {
        Shade {
            color,
            reflectivity: 0.0,
        }
    }
}

/// Shade whatever `ray` hits.
///
/// On a sphere hit the ray is rewritten in place into the mirror ray leaving the hit
/// point, ready for the next link. Sky and floor hits always end the chain.
///
/// `shadow_region` scales the jitter applied to the light position on x and y. At 0 no
/// random numbers are drawn at all.
pub fn sample(
    world: &World,
    ray: &mut Ray,
    rng: &mut ByteRng,
    shadow_region: f32,
    profile: &mut Profile,
) -> Shade {
    let hit = world.trace(*ray);
    profile.bounce_rays += 1;
    let material_id = match hit.kind {
        HitKind::Sky => {
            profile.env_hits += 1;
            return Shade::terminal(world.environment.emission(ray.direction));
        }
        HitKind::Floor => None,
        HitKind::Material(id) => Some(id),
    };

    ray.origin += ray.direction * hit.distance;
    let normal = hit.normal;
    let half = (ray.direction - normal * (2.0 * (normal * ray.direction))).normalized();

    let mut light = world.light_position;
    if shadow_region > 0.0 {
        light.x += shadow_region * rng.random_float();
        light.y += shadow_region * rng.random_float();
    }
    let to_light = (light - ray.origin).normalized();
    let mut diffuse = to_light * normal;
    if diffuse < 0.0 || !is_lit(world, Ray::new(ray.origin, to_light), profile) {
        diffuse = 0.0;
    }

    match material_id {
        None => {
            let base = diffuse * 0.2 + 0.1;
            let mut color = RGBColor::grey(base * 3.0);
            if is_dark_tile(ray.origin) {
                color.g = base;
                color.b = base;
            }
            Shade::terminal(color)
        }
        Some(id) => {
            let material = world.get_material(id);
            let specular = if diffuse > 0.0 {
                powi(to_light * half, SPECULAR_EXPONENT)
            } else {
                0.0
            };
            ray.direction = half;
            Shade {
                color: material.color * (diffuse * diffuse + world.ambient)
                    + RGBColor::grey(specular),
                reflectivity: material.reflectivity,
            }
        }
    }
}

fn is_lit(world: &World, shadow_ray: Ray, profile: &mut Profile) -> bool {
    profile.shadow_rays += 1;
    world.trace(shadow_ray).is_sky()
}

// tile boundaries come from ceil, which shifts the pattern relative to the axes
fn is_dark_tile(point: Vec3) -> bool {
    let parity = ((point.x / TILE_SIZE).ceil() + (point.y / TILE_SIZE).ceil()) as i64;
    parity & 1 == 1
}

fn powi(base: f32, exponent: u32) -> f32 {
    let mut result = 1.0;
    for _ in 0..exponent {
        result *= base;
    }
    result
}
