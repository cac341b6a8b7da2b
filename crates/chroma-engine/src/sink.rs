use thiserror::Error;

use crate::effect::SharedEffect;

/// Name of the engine's single attachment slot on the render target.
pub const EFFECT_NAME: &str = "colorblind";

/// Reason a render sink refused an attach or detach request.
#[derive(Debug, Clone, Error)]
#[error("{0}")]
pub struct SinkError(pub String);

/// The host compositor's ability to run a named effect on its output.
///
/// The engine keeps at most one effect attached and always under
/// [`EFFECT_NAME`]. Failures are surfaced to the engine's caller; the
/// engine itself never retries.
pub trait RenderSink {
    fn attach(&mut self, name: &str, effect: SharedEffect) -> Result<(), SinkError>;
    fn detach(&mut self, name: &str) -> Result<(), SinkError>;
    fn has_attached(&self, name: &str) -> bool;
}
