use crate::color::Rgba;
use crate::strength::DEFAULT_STRENGTH;
use serde::{Deserialize, Serialize};

/// Shader families group filters that share one transform function and one
/// live-instance slot. Switching between two filters of the same family
/// reconfigures the existing instance instead of replacing it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[repr(u8)]
pub enum ShaderFamily {
    Daltonism = 0,
    ChannelMixer = 1,
    Inversion = 2,
    Desaturation = 3,
}

impl ShaderFamily {
    pub const COUNT: usize = 4;

    /// Slot index for per-family instance pools.
    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Daltonism => "daltonism",
            Self::ChannelMixer => "channel-mixer",
            Self::Inversion => "inversion",
            Self::Desaturation => "desaturation",
        }
    }
}

/// The uniforms of a live filter instance.
///
/// `mode` selects the family-specific submode (ignored by desaturation);
/// `strength` blends between the original and the fully transformed color
/// and is ignored by families without an adjustable strength.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FilterParams {
    pub mode: u8,
    pub strength: f32,
}

impl Default for FilterParams {
    fn default() -> Self {
        Self { mode: 0, strength: DEFAULT_STRENGTH }
    }
}

impl FilterParams {
    pub const fn new(mode: u8, strength: f32) -> Self {
        Self { mode, strength }
    }
}

/// The core trait for per-pixel filter implementations.
///
/// Each implementation is a deterministic pure transform over one RGBA
/// pixel, configured by a `FilterParams`. Reconfiguration happens in place
/// through `update`; the instance identity never changes, which is what
/// lets the render sink skip re-attachment when only parameters moved.
pub trait PixelFilter {
    /// Transform a single pixel.
    fn shade(&self, input: Rgba) -> Rgba;

    /// Reconfigure this instance in place.
    fn update(&mut self, params: FilterParams);

    fn family(&self) -> ShaderFamily;

    /// Filter name for display and logs.
    fn name(&self) -> &'static str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_family_indices_are_distinct() {
        let indices = [
            ShaderFamily::Daltonism.index(),
            ShaderFamily::ChannelMixer.index(),
            ShaderFamily::Inversion.index(),
            ShaderFamily::Desaturation.index(),
        ];
        for (i, idx) in indices.iter().enumerate() {
            assert!(*idx < ShaderFamily::COUNT);
            assert_eq!(indices.iter().filter(|x| *x == idx).count(), 1, "slot {i} reused");
        }
    }

    #[test]
    fn test_default_params() {
        let p = FilterParams::default();
        assert_eq!(p.mode, 0);
        assert!(p.strength > 0.99 && p.strength < 1.0);
    }
}
