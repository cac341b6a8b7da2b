use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};

/// An RGBA color with f32 channels in [0, 1].
///
/// Premultiplied alpha is assumed throughout: the compositor hands the
/// filters premultiplied pixels and expects premultiplied pixels back.
/// Channel values outside [0, 1] are representable on purpose: the
/// daltonism correction produces intermediate deltas in that range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

const EPSILON: f32 = 0.0001;

impl Default for Rgba {
    fn default() -> Self {
        Self::TRANSPARENT
    }
}

impl Rgba {
    pub const TRANSPARENT: Rgba = Rgba { r: 0.0, g: 0.0, b: 0.0, a: 0.0 };
    pub const BLACK: Rgba = Rgba { r: 0.0, g: 0.0, b: 0.0, a: 1.0 };
    pub const WHITE: Rgba = Rgba { r: 1.0, g: 1.0, b: 1.0, a: 1.0 };

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color from RGB channels.
    pub const fn opaque(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Opaque grey with all color channels set to `val`.
    pub const fn splat(val: f32) -> Self {
        Self { r: val, g: val, b: val, a: 1.0 }
    }

    /// Replace the alpha channel (non-mutating).
    pub fn with_alpha(&self, a: f32) -> Self {
        Self { r: self.r, g: self.g, b: self.b, a }
    }

    pub fn min_channel(&self) -> f32 {
        self.r.min(self.g).min(self.b)
    }

    pub fn max_channel(&self) -> f32 {
        self.r.max(self.g).max(self.b)
    }

    /// Rec.601 luma of the color channels.
    pub fn luma(&self) -> f32 {
        0.299 * self.r + 0.587 * self.g + 0.114 * self.b
    }

    /// Blend toward `other` by `t`: `other*t + self*(1-t)` per color
    /// channel. Alpha follows `self`. This is the strength blend every
    /// filter family uses.
    pub fn lerp(&self, other: Rgba, t: f32) -> Self {
        Self {
            r: other.r * t + self.r * (1.0 - t),
            g: other.g * t + self.g * (1.0 - t),
            b: other.b * t + self.b * (1.0 - t),
            a: self.a,
        }
    }

    /// Approximate equality using epsilon comparison
    pub fn approx_eq(&self, other: &Rgba) -> bool {
        (self.r - other.r).abs() < EPSILON
            && (self.g - other.g).abs() < EPSILON
            && (self.b - other.b).abs() < EPSILON
            && (self.a - other.a).abs() < EPSILON
    }
}

// Operators act on the color channels; alpha follows the left operand.

impl Add for Rgba {
    type Output = Rgba;
    fn add(self, rhs: Rgba) -> Rgba {
        Rgba { r: self.r + rhs.r, g: self.g + rhs.g, b: self.b + rhs.b, a: self.a }
    }
}

impl Sub for Rgba {
    type Output = Rgba;
    fn sub(self, rhs: Rgba) -> Rgba {
        Rgba { r: self.r - rhs.r, g: self.g - rhs.g, b: self.b - rhs.b, a: self.a }
    }
}

impl Mul<f32> for Rgba {
    type Output = Rgba;
    fn mul(self, rhs: f32) -> Rgba {
        Rgba { r: self.r * rhs, g: self.g * rhs, b: self.b * rhs, a: self.a }
    }
}

impl Mul<Rgba> for f32 {
    type Output = Rgba;
    fn mul(self, rhs: Rgba) -> Rgba {
        Rgba { r: rhs.r * self, g: rhs.g * self, b: rhs.b * self, a: rhs.a }
    }
}

impl AddAssign for Rgba {
    fn add_assign(&mut self, rhs: Rgba) {
        self.r += rhs.r;
        self.g += rhs.g;
        self.b += rhs.b;
    }
}

impl SubAssign for Rgba {
    fn sub_assign(&mut self, rhs: Rgba) {
        self.r -= rhs.r;
        self.g -= rhs.g;
        self.b -= rhs.b;
    }
}
