mod plane;
mod sphere;

pub use plane::FloorPlane;
pub use sphere::Sphere;
