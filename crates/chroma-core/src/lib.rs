pub mod color;
pub mod filter;
pub mod strength;

pub use color::Rgba;
pub use filter::{FilterParams, PixelFilter, ShaderFamily};
pub use strength::{clamp_strength, DEFAULT_STRENGTH, STRENGTH_MAX, STRENGTH_MIN};
