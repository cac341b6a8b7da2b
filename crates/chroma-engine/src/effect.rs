use std::cell::RefCell;
use std::rc::Rc;

use chroma_core::{FilterParams, PixelFilter, Rgba, ShaderFamily};
use chroma_filters::{
    shader_source, ChannelMixerFilter, DaltonismFilter, DesaturationFilter, InversionFilter,
};

/// A live, family-tagged filter instance bound to its current parameters.
///
/// One variant per shader family; switching filters within a family is a
/// parameter update on the same instance, never a replacement.
#[derive(Debug, Clone)]
enum FilterKind {
    Daltonism(DaltonismFilter),
    ChannelMixer(ChannelMixerFilter),
    Inversion(InversionFilter),
    Desaturation(DesaturationFilter),
}

#[derive(Debug, Clone)]
pub struct LiveEffect {
    params: FilterParams,
    kind: FilterKind,
}

impl LiveEffect {
    pub fn materialize(family: ShaderFamily, params: FilterParams) -> Self {
        let kind = match family {
            ShaderFamily::Daltonism => FilterKind::Daltonism(DaltonismFilter::new(params)),
            ShaderFamily::ChannelMixer => FilterKind::ChannelMixer(ChannelMixerFilter::new(params)),
            ShaderFamily::Inversion => FilterKind::Inversion(InversionFilter::new(params)),
            ShaderFamily::Desaturation => FilterKind::Desaturation(DesaturationFilter::new(params)),
        };
        Self { params, kind }
    }

    /// Reconfigure in place. Identity is preserved.
    pub fn update(&mut self, params: FilterParams) {
        self.params = params;
        match &mut self.kind {
            FilterKind::Daltonism(f) => f.update(params),
            FilterKind::ChannelMixer(f) => f.update(params),
            FilterKind::Inversion(f) => f.update(params),
            FilterKind::Desaturation(f) => f.update(params),
        }
    }

    /// Transform one pixel through the current configuration.
    pub fn shade(&self, input: Rgba) -> Rgba {
        match &self.kind {
            FilterKind::Daltonism(f) => f.shade(input),
            FilterKind::ChannelMixer(f) => f.shade(input),
            FilterKind::Inversion(f) => f.shade(input),
            FilterKind::Desaturation(f) => f.shade(input),
        }
    }

    pub fn family(&self) -> ShaderFamily {
        match &self.kind {
            FilterKind::Daltonism(_) => ShaderFamily::Daltonism,
            FilterKind::ChannelMixer(_) => ShaderFamily::ChannelMixer,
            FilterKind::Inversion(_) => ShaderFamily::Inversion,
            FilterKind::Desaturation(_) => ShaderFamily::Desaturation,
        }
    }

    pub fn params(&self) -> FilterParams {
        self.params
    }

    /// GLSL text a GPU host may compile instead of the CPU path.
    pub fn shader_source(&self) -> Option<&'static str> {
        shader_source(self.family())
    }
}

/// Shared handle to a live effect.
///
/// The engine is single-threaded by contract, so instances are shared by
/// `Rc`; pointer identity is what the render sink compares to decide
/// whether re-attachment is needed.
pub type SharedEffect = Rc<RefCell<LiveEffect>>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_materialize_each_family() {
        for family in [
            ShaderFamily::Daltonism,
            ShaderFamily::ChannelMixer,
            ShaderFamily::Inversion,
            ShaderFamily::Desaturation,
        ] {
            let effect = LiveEffect::materialize(family, FilterParams::default());
            assert_eq!(effect.family(), family);
        }
    }

    #[test]
    fn test_update_tracks_params() {
        let mut effect = LiveEffect::materialize(ShaderFamily::Daltonism, FilterParams::new(0, 0.5));
        effect.update(FilterParams::new(4, 0.8));
        assert_eq!(effect.params().mode, 4);
        assert!((effect.params().strength - 0.8).abs() < 1e-6);
    }

    #[test]
    fn test_shade_uses_updated_params() {
        let c = Rgba::opaque(1.0, 0.0, 0.0);
        let mut effect =
            LiveEffect::materialize(ShaderFamily::ChannelMixer, FilterParams::new(0, 1.0));
        let gbr = effect.shade(c);
        effect.update(FilterParams::new(1, 1.0));
        let brg = effect.shade(c);
        assert!(gbr.approx_eq(&Rgba::opaque(0.0, 1.0, 0.0)));
        assert!(brg.approx_eq(&Rgba::opaque(0.0, 0.0, 1.0)));
    }

    #[test]
    fn test_shader_source_only_for_shader_families() {
        let desat = LiveEffect::materialize(ShaderFamily::Desaturation, FilterParams::default());
        assert!(desat.shader_source().is_none());
        let dalton = LiveEffect::materialize(ShaderFamily::Daltonism, FilterParams::default());
        assert!(dalton.shader_source().is_some());
    }
}
