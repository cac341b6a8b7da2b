pub mod catalog;
pub mod channel_mixer;
pub mod daltonism;
pub mod desaturation;
pub mod inversion;
pub mod shader_source;

pub use catalog::{by_name, catalog, descriptor, paired, FilterDescriptor, FilterId, DEFAULT_FILTER};
pub use channel_mixer::{channel_mix, ChannelMixerFilter};
pub use daltonism::{daltonism, DaltonismFilter};
pub use desaturation::{desaturate, DesaturationFilter};
pub use inversion::{invert, InversionFilter};
pub use shader_source::shader_source;
