//! 8-bit RGBA color with the small set of named blend operations the scene
//! needs. Channel math runs in `f32` and truncates back to bytes.

use glam::Vec3;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const RED: Color = Color::rgb(230, 41, 55);
    pub const GREEN: Color = Color::rgb(0, 228, 48);
    pub const BLUE: Color = Color::rgb(0, 121, 241);
    pub const DARKBLUE: Color = Color::rgb(0, 82, 172);
    pub const ORANGE: Color = Color::rgb(255, 161, 0);
    pub const YELLOW: Color = Color::rgb(253, 249, 0);
    pub const LIGHTGRAY: Color = Color::rgb(200, 200, 200);
    pub const GRAY: Color = Color::rgb(130, 130, 130);

    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color.
    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    #[inline]
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// Multiply the color channels by `factor`, leaving alpha untouched.
    pub fn scale(self, factor: f32) -> Self {
        Self {
            r: scale_channel(self.r, factor),
            g: scale_channel(self.g, factor),
            b: scale_channel(self.b, factor),
            a: self.a,
        }
    }

    /// Per-channel arithmetic mean of two colors.
    pub fn mean(self, other: Color) -> Self {
        Self {
            r: mean_channel(self.r, other.r),
            g: mean_channel(self.g, other.g),
            b: mean_channel(self.b, other.b),
            a: mean_channel(self.a, other.a),
        }
    }

    /// Linear blend from `self` (t = 0) to `other` (t = 1) on the color
    /// channels. The result is opaque.
    pub fn lerp(self, other: Color, t: f32) -> Self {
        let from = self.to_vec3();
        Self::from_vec3(from + (other.to_vec3() - from) * t)
    }

    /// Darker shade of the same color; `rate` of 1.0 is a no-op.
    pub fn darken(self, rate: f32) -> Self {
        self.scale(rate)
    }

    #[inline]
    pub fn to_vec3(self) -> Vec3 {
        Vec3::new(self.r as f32, self.g as f32, self.b as f32)
    }

    /// Truncating conversion from byte-range components; out-of-range
    /// components saturate.
    #[inline]
    pub fn from_vec3(v: Vec3) -> Self {
        Self::rgb(v.x as u8, v.y as u8, v.z as u8)
    }

    #[inline]
    pub fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

#[inline]
fn scale_channel(c: u8, factor: f32) -> u8 {
    (c as f32 * factor) as u8
}

#[inline]
fn mean_channel(a: u8, b: u8) -> u8 {
    ((a as u16 + b as u16) / 2) as u8
}
