use crate::math::*;

/// Pinhole camera. The basis is derived once per frame; each pixel then costs one
/// multiply-add per axis and a normalize.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PinholeCamera {
    pub origin: Vec3,
    pub forward: Vec3,
    pub right: Vec3,
    pub up: Vec3,
    // world units per pixel on the image plane at distance 1
    pixel_scale: f32,
    half_width: f32,
    half_height: f32,
}

impl PinholeCamera {
    /// `field_of_view` is the tangent of half the vertical view angle. The up axis of the
    /// world is +Z, matching the floor plane.
    pub fn new(
        look_from: Vec3,
        look_at: Vec3,
        field_of_view: f32,
        width: usize,
        height: usize,
    ) -> PinholeCamera {
        let forward = (look_at - look_from).normalized();
        let right = forward.cross(Vec3::Z).normalized();
        let up = right.cross(forward);
        let half_height = height as f32 / 2.0;
        PinholeCamera {
            origin: look_from,
            forward,
            right,
            up,
            pixel_scale: field_of_view / half_height,
            half_width: width as f32 / 2.0,
            half_height,
        }
    }

    /// Primary ray through pixel (x, y), where y = 0 is the top row. `jitter` is an
    /// offset within the pixel in [-0.5, 0.5) on each axis, (0, 0) being the center.
    pub fn get_ray(&self, x: usize, y: usize, jitter: (f32, f32)) -> Ray {
        let sx = x as f32 + 0.5 + jitter.0 - self.half_width;
        let sy = self.half_height - (y as f32 + 0.5 + jitter.1);
        let direction = (self.forward
            + self.right * (sx * self.pixel_scale)
            + self.up * (sy * self.pixel_scale))
            .normalized();
        debug_assert!(direction.is_finite());
        Ray::new(self.origin, direction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn camera(width: usize, height: usize) -> PinholeCamera {
        PinholeCamera::new(
            Vec3::new(0.0, -10.0, 2.0),
            Vec3::new(0.0, 0.0, 2.0),
            0.5,
            width,
            height,
        )
    }

    #[test]
    fn test_basis_is_orthonormal() {
        let camera = PinholeCamera::new(
            Vec3::new(4.0, -15.0, 6.5),
            Vec3::new(0.0, 2.0, 2.0),
            0.45,
            320,
            240,
        );
        for v in [camera.forward, camera.right, camera.up] {
            assert!((v.norm() - 1.0).abs() < 1e-5);
        }
        assert!((camera.forward * camera.right).abs() < 1e-5);
        assert!((camera.forward * camera.up).abs() < 1e-5);
        assert!((camera.right * camera.up).abs() < 1e-5);
        // up points up
        assert!(camera.up.z > 0.0);
    }

    #[test]
    fn test_center_and_corners() {
        let camera = camera(4, 4);
        // the center of the image sits between the four middle pixels
        let center = camera.get_ray(2, 2, (-0.5, -0.5));
        assert!((center.direction - Vec3::Y).norm() < 1e-5);

        let top_left = camera.get_ray(0, 0, (0.0, 0.0));
        assert!(top_left.direction.x < 0.0);
        assert!(top_left.direction.z > 0.0);

        let bottom_right = camera.get_ray(3, 3, (0.0, 0.0));
        assert!(bottom_right.direction.x > 0.0);
        assert!(bottom_right.direction.z < 0.0);

        // top edge of the frame is at the field of view
        let edge = camera.get_ray(2, 0, (-0.5, -0.5));
        assert!((edge.direction.z / edge.direction.y - 0.5).abs() < 1e-5);
    }

    #[test]
    fn test_aspect_is_square_pixels() {
        let wide = camera(8, 4);
        let a = wide.get_ray(0, 2, (-0.5, -0.5));
        // left edge is twice as far out as the top edge
        assert!((a.direction.x / a.direction.y + 1.0).abs() < 1e-5);
    }
}
