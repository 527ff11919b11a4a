use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign};

#[derive(Copy, Clone, Debug, PartialEq, Default)]
pub struct RGBColor {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl RGBColor {
    pub const fn new(r: f32, g: f32, b: f32) -> RGBColor {
        RGBColor { r, g, b }
    }
    pub const fn grey(v: f32) -> RGBColor {
        RGBColor::new(v, v, v)
    }
    pub const ZERO: RGBColor = RGBColor::new(0.0, 0.0, 0.0);
}

impl RGBColor {
    /// Scale [0, 1] into [0, 255] and clamp each channel. NaN maps to 0.
    pub fn to_rgb8(&self) -> [u8; 3] {
        [
            channel_to_u8(self.r),
            channel_to_u8(self.g),
            channel_to_u8(self.b),
        ]
    }
}

fn channel_to_u8(v: f32) -> u8 {
    let scaled = v * 255.0;
    if scaled.is_nan() {
        0
    } else {
        scaled.clamp(0.0, 255.0) as u8
    }
}

impl Mul for RGBColor {
    type Output = Self;
    fn mul(self, other: RGBColor) -> Self {
        RGBColor::new(self.r * other.r, self.g * other.g, self.b * other.b)
    }
}

impl MulAssign for RGBColor {
    fn mul_assign(&mut self, other: RGBColor) {
        *self = *self * other;
    }
}

impl Mul<f32> for RGBColor {
    type Output = RGBColor;
    fn mul(self, other: f32) -> RGBColor {
        RGBColor::new(self.r * other, self.g * other, self.b * other)
    }
}

impl Mul<RGBColor> for f32 {
    type Output = RGBColor;
    fn mul(self, other: RGBColor) -> RGBColor {
        other * self
    }
}

impl Div<f32> for RGBColor {
    type Output = RGBColor;
    fn div(self, other: f32) -> RGBColor {
        RGBColor::new(self.r / other, self.g / other, self.b / other)
    }
}

impl DivAssign<f32> for RGBColor {
    fn div_assign(&mut self, other: f32) {
        *self = *self / other;
    }
}

impl Add for RGBColor {
    type Output = RGBColor;
    fn add(self, other: RGBColor) -> RGBColor {
        RGBColor::new(self.r + other.r, self.g + other.g, self.b + other.b)
    }
}

impl AddAssign for RGBColor {
    fn add_assign(&mut self, other: RGBColor) {
        *self = *self + other;
    }
}

impl From<f32> for RGBColor {
    fn from(s: f32) -> RGBColor {
        RGBColor::grey(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_to_rgb8() {
        assert_eq!(RGBColor::new(0.0, 0.5, 1.0).to_rgb8(), [0, 127, 255]);
        assert_eq!(RGBColor::grey(1e30).to_rgb8(), [255, 255, 255]);
        assert_eq!(RGBColor::grey(-4.0).to_rgb8(), [0, 0, 0]);
        assert_eq!(
            RGBColor::new(f32::NAN, f32::INFINITY, f32::NEG_INFINITY).to_rgb8(),
            [0, 255, 0]
        );
    }

    #[test]
    fn test_arithmetic() {
        let mut c = RGBColor::new(0.2, 0.4, 0.8);
        c += RGBColor::grey(0.1) * 2.0;
        c *= RGBColor::new(1.0, 0.5, 0.0);
        c /= 2.0;
        assert!((c.r - 0.2).abs() < 1e-6);
        assert!((c.g - 0.15).abs() < 1e-6);
        assert_eq!(c.b, 0.0);
    }
}
