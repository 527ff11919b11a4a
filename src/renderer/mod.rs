mod film;
#[cfg(feature = "preview")]
mod preview;
mod progress;
mod vec2d;

pub use film::Film;
#[cfg(feature = "preview")]
pub use preview::PreviewWindow;
pub use progress::ProgressText;
pub use vec2d::Vec2D;

use crate::camera::PinholeCamera;
use crate::integrator::ReflectionChain;
use crate::math::*;
use crate::profile::Profile;
use crate::world::scene::{CAMERA_POSITION, CAMERA_TARGET, FIELD_OF_VIEW};
use crate::world::World;

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::Context;

/// Whatever the host renders into. Pixels arrive pre-clamped.
pub trait Screen {
    fn draw_pixel(&mut self, x: usize, y: usize, r: u8, g: u8, b: u8);
    fn draw_text(&mut self, x: usize, y: usize, text: &str);
}

/// Free-running millisecond counter. Allowed to wrap.
pub trait Clock {
    fn millis(&self) -> u32;
}

impl<F: Fn() -> u32> Clock for F {
    fn millis(&self) -> u32 {
        self()
    }
}

#[derive(Copy, Clone, Debug)]
pub struct SystemClock {
    start: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        SystemClock {
            start: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        SystemClock::new()
    }
}

impl Clock for SystemClock {
    fn millis(&self) -> u32 {
        // truncation is the wraparound
        self.start.elapsed().as_millis() as u32
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FrameSettings {
    /// Camera rays per pixel. 1 turns off all jitter, camera and shadow alike.
    pub rays_per_pixel: u16,
    pub width: usize,
    pub height: usize,
    /// Side of the pixel block shaded with a single color.
    pub step: usize,
    pub shadow_region: f32,
    pub max_links: usize,
    pub progress_origin: (usize, usize),
}

impl Default for FrameSettings {
    fn default() -> Self {
        FrameSettings {
            rays_per_pixel: 4,
            width: 320,
            height: 240,
            step: 1,
            shadow_region: 1.0,
            max_links: crate::integrator::MAX_LINKS,
            progress_origin: (0, 0),
        }
    }
}

/// Render one full frame of `world` into `screen`, top row first, left to right.
///
/// Every output pixel is drawn exactly once. After each row (each row of blocks when
/// `step > 1`) a progress line is written with [`Screen::draw_text`]. Jitter is drawn
/// from `rng`, so consecutive frames that share a generator are not identical unless
/// `rays_per_pixel` is 1.
///
/// Blocks until the frame is done. Nothing in here can fail.
pub fn do_raytrace<S, C>(
    world: &World,
    rng: &mut ByteRng,
    settings: &FrameSettings,
    screen: &mut S,
    clock: &C,
) -> Profile
where
    S: Screen + ?Sized,
    C: Clock + ?Sized,
{
    let FrameSettings {
        width,
        height,
        progress_origin,
        ..
    } = *settings;
    let rays_per_pixel = settings.rays_per_pixel.max(1);
    let step = settings.step.max(1);
    let jittered = rays_per_pixel > 1;

    let camera = PinholeCamera::new(
        CAMERA_POSITION,
        CAMERA_TARGET,
        FIELD_OF_VIEW,
        width,
        height,
    );
    let chain = ReflectionChain::new(
        settings.max_links,
        if jittered { settings.shadow_region } else { 0.0 },
    );
    info!(
        "starting render with film resolution {}x{}, {} rays per pixel, block size {}",
        width, height, rays_per_pixel, step
    );

    let mut profile = Profile::default();
    let start = clock.millis();
    for y in (0..height).step_by(step) {
        for x in (0..width).step_by(step) {
            let mut temp_color = RGBColor::ZERO;
            for _ in 0..rays_per_pixel {
                let jitter = if jittered {
                    (rng.random_float(), rng.random_float())
                } else {
                    (0.0, 0.0)
                };
                let ray = camera.get_ray(x, y, jitter);
                profile.camera_rays += 1;
                temp_color += chain.radiance(world, ray, rng, &mut profile);
            }
            let [r, g, b] = (temp_color / rays_per_pixel as f32).to_rgb8();
            for py in y..(y + step).min(height) {
                for px in x..(x + step).min(width) {
                    screen.draw_pixel(px, py, r, g, b);
                }
            }
        }
        let rows_done = (y + step).min(height);
        let elapsed = clock.millis().wrapping_sub(start);
        let text = ProgressText::new(rows_done * 100 / height, elapsed);
        screen.draw_text(progress_origin.0, progress_origin.1, text.as_str());
    }
    info!(
        "finished {}x{} frame in {}ms",
        width,
        height,
        clock.millis().wrapping_sub(start)
    );
    profile
}

/// Write `film` as `output/<filename>.png`, returning the path written.
pub fn output_film(filename: Option<&str>, film: &Film) -> anyhow::Result<PathBuf> {
    let directory = Path::new("output");
    fs::create_dir_all(directory)
        .with_context(|| format!("failed to create {}", directory.display()))?;
    let png_filename = directory.join(format!("{}.png", filename.unwrap_or("beauty")));
    film.to_image()
        .save(&png_filename)
        .with_context(|| format!("failed to write {}", png_filename.display()))?;
    info!("saved {}", png_filename.display());
    Ok(png_filename)
}
