use chroma_core::{FilterParams, PixelFilter, Rgba, ShaderFamily};

/// Remix color channels by cyclic permutation.
///
/// Mode 0 reads (B, R, G) into (R, G, B); mode 1 reads (G, B, R). The
/// result is blended with the original by `strength`; alpha is unchanged.
pub fn channel_mix(c: Rgba, mode: u8, strength: f32) -> Rgba {
    let mixed = match mode {
        0 => Rgba::opaque(c.b, c.r, c.g),
        _ => Rgba::opaque(c.g, c.b, c.r),
    };
    c.lerp(mixed, strength)
}

/// Live channel-mixer filter instance.
#[derive(Debug, Clone)]
pub struct ChannelMixerFilter {
    mode: u8,
    strength: f32,
}

impl ChannelMixerFilter {
    pub fn new(params: FilterParams) -> Self {
        Self { mode: params.mode, strength: params.strength }
    }
}

impl PixelFilter for ChannelMixerFilter {
    fn shade(&self, input: Rgba) -> Rgba {
        channel_mix(input, self.mode, self.strength)
    }

    fn update(&mut self, params: FilterParams) {
        self.mode = params.mode;
        self.strength = params.strength;
    }

    fn family(&self) -> ShaderFamily {
        ShaderFamily::ChannelMixer
    }

    fn name(&self) -> &'static str {
        "ChannelMixer"
    }
}
