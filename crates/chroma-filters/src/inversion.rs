use chroma_core::{FilterParams, PixelFilter, Rgba, ShaderFamily};

const GAMMA: f32 = 1.8;

/// Invert lightness or color.
///
/// Mode 0 inverts lightness while keeping hue; mode 1 is the same with a
/// small white bias (`0.02 * alpha`) so pure white does not land on pure
/// black; mode 2 inverts every color channel. All modes gamma-compensate
/// the result, since an inversion flips content between the dark and light ends
/// of the lightness scale, where equal channel differences are perceived
/// unequally. Alpha is preserved.
pub fn invert(c: Rgba, mode: u8) -> Rgba {
    let inverted = if mode < 2 {
        let bias = f32::from(mode) * 0.02 * c.a;
        let divisor = 1.0 + bias;
        let shift = bias + c.a - c.min_channel() - c.max_channel();
        Rgba::new(
            (shift + c.r) / divisor,
            (shift + c.g) / divisor,
            (shift + c.b) / divisor,
            c.a,
        )
    } else {
        Rgba::new(c.a - c.r, c.a - c.g, c.a - c.b, c.a)
    };

    Rgba::new(
        inverted.r.powf(1.0 / GAMMA),
        inverted.g.powf(1.0 / GAMMA),
        inverted.b.powf(1.0 / GAMMA),
        inverted.a,
    )
}

/// Live inversion filter instance. Inversions have no strength.
#[derive(Debug, Clone)]
pub struct InversionFilter {
    mode: u8,
}

impl InversionFilter {
    pub fn new(params: FilterParams) -> Self {
        Self { mode: params.mode }
    }
}

impl PixelFilter for InversionFilter {
    fn shade(&self, input: Rgba) -> Rgba {
        invert(input, self.mode)
    }

    fn update(&mut self, params: FilterParams) {
        self.mode = params.mode;
    }

    fn family(&self) -> ShaderFamily {
        ShaderFamily::Inversion
    }

    fn name(&self) -> &'static str {
        "Inversion"
    }
}
