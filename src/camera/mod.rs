mod projective_camera;

pub use projective_camera::PinholeCamera;
