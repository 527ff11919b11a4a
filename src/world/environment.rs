use crate::math::*;

/// Background seen by rays that leave the scene: a dark zenith tint with a warm band
/// that brightens toward the horizon.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct EnvironmentMap {
    pub zenith: RGBColor,
    pub horizon: RGBColor,
}

impl EnvironmentMap {
    pub const fn new(zenith: RGBColor, horizon: RGBColor) -> Self {
        EnvironmentMap { zenith, horizon }
    }

    pub fn emission(&self, direction: Vec3) -> RGBColor {
        let falloff = 1.0 - direction.z;
        self.zenith + self.horizon * (falloff * falloff)
    }
}
