pub use crate::camera::PinholeCamera;
pub use crate::hittable::{HitKind, HitRecord, Hittable};
pub use crate::integrator::{ReflectionChain, MAX_LINKS};
pub use crate::materials::{Material, MaterialId};
pub use crate::math::*;
pub use crate::profile::Profile;
pub use crate::renderer::{do_raytrace, Clock, Film, FrameSettings, Screen, SystemClock};
pub use crate::world::{World, INTERSECTION_TIME_OFFSET};
pub use crate::rgb_to_u32;
