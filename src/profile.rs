#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Profile {
    pub camera_rays: usize, // primary rays fired from the camera
    pub bounce_rays: usize, // every shading evaluation, one scene trace each
    pub shadow_rays: usize, // visibility tests toward the light
    pub env_hits: usize,    // shading evaluations that escaped to the sky
}

impl Profile {
    pub fn new(camera_rays: usize, bounce_rays: usize, shadow_rays: usize, env_hits: usize) -> Self {
        Profile {
            camera_rays,
            bounce_rays,
            shadow_rays,
            env_hits,
        }
    }

    pub fn combine(&self, other: Self) -> Self {
        Profile::new(
            self.camera_rays + other.camera_rays,
            self.bounce_rays + other.bounce_rays,
            self.shadow_rays + other.shadow_rays,
            self.env_hits + other.env_hits,
        )
    }

    /// Scene traces of either kind.
    pub fn total_traces(&self) -> usize {
        self.bounce_rays + self.shadow_rays
    }

    pub fn pretty_print(&self, elapsed: f32) {
        let &Profile {
            camera_rays,
            bounce_rays,
            shadow_rays,
            env_hits,
        } = self;
        println!(
            "{} total camera rays at {} per second",
            camera_rays,
            camera_rays as f32 / elapsed
        );
        println!(
            "{} total bounce rays at {} per second",
            bounce_rays,
            bounce_rays as f32 / elapsed
        );
        println!(
            "{} total shadow rays at {} per second",
            shadow_rays,
            shadow_rays as f32 / elapsed
        );
        println!("{} total env hits", env_hits);
        let sum = self.total_traces();
        println!(
            "{} total traces at {} per second",
            sum,
            sum as f32 / elapsed
        );
    }
}
