use chroma_core::{FilterParams, PixelFilter, Rgba, ShaderFamily};

/// Blend toward perceptual greyscale by `factor`.
///
/// Grey-weighting uses Rec.601 luma; alpha is unchanged.
pub fn desaturate(c: Rgba, factor: f32) -> Rgba {
    c.lerp(Rgba::splat(c.luma()), factor)
}

/// Live desaturation filter instance. The engine's strength maps directly
/// onto the desaturation factor.
#[derive(Debug, Clone)]
pub struct DesaturationFilter {
    factor: f32,
}

impl DesaturationFilter {
    pub fn new(params: FilterParams) -> Self {
        Self { factor: params.strength }
    }
}

impl PixelFilter for DesaturationFilter {
    fn shade(&self, input: Rgba) -> Rgba {
        desaturate(input, self.factor)
    }

    fn update(&mut self, params: FilterParams) {
        self.factor = params.strength;
    }

    fn family(&self) -> ShaderFamily {
        ShaderFamily::Desaturation
    }

    fn name(&self) -> &'static str {
        "Desaturation"
    }
}
