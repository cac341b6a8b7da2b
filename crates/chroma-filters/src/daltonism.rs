use chroma_core::{FilterParams, PixelFilter, Rgba, ShaderFamily};

/// Color-vision-deficiency correction and simulation.
///
/// Submodes: 0 protan correction, 1 protan high-contrast correction,
/// 2 deuter correction, 3 deuter high-contrast correction, 4 tritan
/// correction, 5 protan simulation, 6 deuter simulation, 7 tritan
/// simulation. Modes above 4 output what a deficient viewer sees; modes
/// 0–4 shift the invisible color component back into the visible range.
///
/// Every coefficient below is an empirically tuned literal. Transcribe,
/// never re-derive: small changes shift the perceived correction quality.
pub fn daltonism(c: Rgba, mode: u8, strength: f32) -> Rgba {
    // Cone response (LMS) of the source color
    let l_src = 17.8824 * c.r + 43.5161 * c.g + 4.11935 * c.b;
    let m_src = 3.45565 * c.r + 27.1554 * c.g + 3.86714 * c.b;
    let s_src = 0.0299566 * c.r + 0.184309 * c.g + 1.46709 * c.b;

    // Collapse the deficient cone onto the remaining two
    let (l, m, s) = match mode {
        // Protanopia: L response lost
        0 | 1 | 5 => (2.02344 * m_src - 2.52581 * s_src, m_src, s_src),
        // Deuteranopia: M response lost
        2 | 3 | 6 => (l_src, 0.494207 * l_src + 1.24827 * s_src, s_src),
        // Tritanopia: S response lost
        _ => (
            l_src,
            m_src,
            -0.012491378299329402 * l_src + 0.07203451899279534 * m_src,
        ),
    };

    // Back to RGB: the color as the deficient viewer perceives it
    let seen = Rgba::opaque(
        0.0809444479 * l - 0.130504409 * m + 0.116721066 * s,
        -0.0102485335 * l + 0.0540193266 * m - 0.113614708 * s,
        -0.000365296938 * l - 0.00412161469 * m + 0.693511405 * s,
    );

    // Partial strength models weaker forms of dichromacy
    let seen = c.lerp(seen, strength);

    if mode > 4 {
        return seen;
    }

    // The component invisible to the viewer
    let err = c - seen;

    // Shift the invisible component into channels the viewer resolves
    let correction = match mode {
        0 => Rgba::opaque(
            err.r * 0.56667 + err.g * 0.43333,
            err.r * 0.55833 + err.g * 0.44267,
            err.g * 0.24167 + err.b * 0.75833,
        ),
        1 => Rgba::opaque(
            err.r * 2.56667 + err.g * 0.43333,
            err.r * 1.55833 + err.g * 0.44267,
            err.g * 0.24167 + err.b * 0.75833,
        ),
        2 => Rgba::opaque(
            err.r * -0.7,
            err.r * 0.5 + err.g,
            err.r * -0.3 + err.b,
        ),
        3 => Rgba::opaque(
            err.r * -1.5 + err.g * 1.5,
            err.r * -1.5 + err.g * 1.5,
            err.r * 1.5,
        ),
        _ => Rgba::opaque(
            err.r * 0.3 + err.g * 0.5 + err.b * 0.4,
            err.r * 0.5 + err.g * 0.7 + err.b * 0.3,
            err.b,
        ),
    };

    c + correction
}

/// Live daltonism filter instance.
#[derive(Debug, Clone)]
pub struct DaltonismFilter {
    mode: u8,
    strength: f32,
}

impl DaltonismFilter {
    pub fn new(params: FilterParams) -> Self {
        Self { mode: params.mode, strength: params.strength }
    }
}

impl PixelFilter for DaltonismFilter {
    fn shade(&self, input: Rgba) -> Rgba {
        daltonism(input, self.mode, self.strength)
    }

    fn update(&mut self, params: FilterParams) {
        self.mode = params.mode;
        self.strength = params.strength;
    }

    fn family(&self) -> ShaderFamily {
        ShaderFamily::Daltonism
    }

    fn name(&self) -> &'static str {
        "Daltonism"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_strength_is_identity_for_corrections() {
        let grey = Rgba::opaque(0.5, 0.5, 0.5);
        for mode in 0..=4 {
            let out = daltonism(grey, mode, 0.0);
            assert!(out.approx_eq(&grey), "mode {mode} not identity: {out:?}");
        }
    }

    #[test]
    fn test_zero_strength_is_identity_for_simulations() {
        let grey = Rgba::opaque(0.5, 0.5, 0.5);
        for mode in 5..=7 {
            let out = daltonism(grey, mode, 0.0);
            assert!(out.approx_eq(&grey), "mode {mode} not identity: {out:?}");
        }
    }

    #[test]
    fn test_simulation_preserves_alpha() {
        let c = Rgba::new(0.9, 0.1, 0.1, 0.25);
        for mode in 5..=7 {
            assert_eq!(daltonism(c, mode, 1.0).a, 0.25);
        }
    }

    #[test]
    fn test_correction_preserves_alpha() {
        let c = Rgba::new(0.9, 0.1, 0.1, 0.25);
        for mode in 0..=4 {
            assert_eq!(daltonism(c, mode, 1.0).a, 0.25);
        }
    }

    #[test]
    fn test_protan_simulation_flattens_red() {
        // Pure red through a protan simulation loses most of its red energy
        let red = Rgba::opaque(1.0, 0.0, 0.0);
        let seen = daltonism(red, 5, 1.0);
        assert!(seen.r < 0.5, "simulated red still bright: {}", seen.r);
    }

    #[test]
    fn test_update_changes_output() {
        let mut filter = DaltonismFilter::new(FilterParams::new(2, 0.999));
        let c = Rgba::opaque(0.8, 0.2, 0.3);
        let before = filter.shade(c);
        filter.update(FilterParams::new(2, 0.2));
        let after = filter.shade(c);
        assert!(!before.approx_eq(&after));
    }
}
