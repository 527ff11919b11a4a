use crate::integrator::MAX_LINKS;
use crate::renderer::FrameSettings;

use anyhow::bail;
use serde::Deserialize;

#[derive(Deserialize, Copy, Clone, Debug, PartialEq)]
pub struct Resolution {
    pub width: usize,
    pub height: usize,
}

#[derive(Deserialize, Copy, Clone, Debug, Default, PartialEq)]
#[serde(tag = "type")]
pub enum RendererType {
    // renders into memory and writes a png per render
    #[default]
    Scanline,
    // shows the frame in a window while it renders. needs the `preview` feature
    Preview,
}

#[derive(Deserialize, Clone, Debug)]
pub struct TOMLRenderSettings {
    pub filename: Option<String>,
    pub resolution: Resolution,
    pub rays_per_pixel: Option<u16>,      // defaults to 4
    pub step: Option<u16>,                // defaults to 1
    pub shadow_region: Option<f32>,       // defaults to 1.0
    pub max_links: Option<u8>,            // defaults to 3, never more
    pub progress_origin: Option<(usize, usize)>, // defaults to (0, 0)
}

#[derive(Clone, Debug, PartialEq)]
pub struct RenderSettings {
    pub filename: Option<String>,
    pub resolution: Resolution,
    pub rays_per_pixel: u16,
    pub step: u16,
    pub shadow_region: f32,
    pub max_links: u8,
    pub progress_origin: (usize, usize),
}

impl From<TOMLRenderSettings> for RenderSettings {
    fn from(data: TOMLRenderSettings) -> Self {
        RenderSettings {
            filename: data.filename,
            resolution: data.resolution,
            rays_per_pixel: data.rays_per_pixel.unwrap_or(4),
            step: data.step.unwrap_or(1),
            shadow_region: data.shadow_region.unwrap_or(1.0),
            max_links: data.max_links.unwrap_or(MAX_LINKS as u8),
            progress_origin: data.progress_origin.unwrap_or((0, 0)),
        }
    }
}

impl RenderSettings {
    pub fn validate(&self) -> anyhow::Result<()> {
        let Resolution { width, height } = self.resolution;
        if width == 0 || height == 0 {
            bail!("resolution must be at least 1x1, got {}x{}", width, height);
        }
        if self.rays_per_pixel == 0 {
            bail!("rays_per_pixel must be at least 1");
        }
        if self.step == 0 {
            bail!("step must be at least 1");
        }
        if !self.shadow_region.is_finite() || self.shadow_region < 0.0 {
            bail!(
                "shadow_region must be finite and non-negative, got {}",
                self.shadow_region
            );
        }
        if self.max_links == 0 {
            bail!("max_links must be at least 1");
        }
        if self.max_links as usize > MAX_LINKS {
            warn!(
                "max_links of {} requested, reflections stop after {}",
                self.max_links, MAX_LINKS
            );
        }
        Ok(())
    }
}

impl From<&RenderSettings> for FrameSettings {
    fn from(settings: &RenderSettings) -> Self {
        FrameSettings {
            rays_per_pixel: settings.rays_per_pixel,
            width: settings.resolution.width,
            height: settings.resolution.height,
            step: settings.step as usize,
            shadow_region: settings.shadow_region,
            max_links: (settings.max_links as usize).min(MAX_LINKS),
            progress_origin: settings.progress_origin,
        }
    }
}

#[derive(Deserialize, Clone, Debug)]
pub struct TOMLConfig {
    #[serde(default)]
    pub renderer: RendererType,
    pub render_settings: Vec<TOMLRenderSettings>,
}

#[derive(Clone, Debug)]
pub struct Config {
    pub renderer: RendererType,
    pub render_settings: Vec<RenderSettings>,
}

impl From<TOMLConfig> for Config {
    fn from(data: TOMLConfig) -> Self {
        Config {
            renderer: data.renderer,
            render_settings: data
                .render_settings
                .into_iter()
                .map(RenderSettings::from)
                .collect(),
        }
    }
}

impl Config {
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.render_settings.is_empty() {
            bail!("config has no render_settings");
        }
        for (i, settings) in self.render_settings.iter().enumerate() {
            settings
                .validate()
                .map_err(|e| e.context(format!("render_settings[{}] is invalid", i)))?;
        }
        Ok(())
    }
}
