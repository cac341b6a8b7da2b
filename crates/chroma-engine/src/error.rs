use thiserror::Error;

use crate::sink::SinkError;

/// Errors surfaced to the engine's caller.
///
/// Only render-sink failures propagate; malformed persisted input is
/// handled by catalog fallback and never becomes an error.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("render sink refused to attach '{name}': {source}")]
    Attach { name: &'static str, source: SinkError },

    #[error("render sink failed to detach '{name}': {source}")]
    Detach { name: &'static str, source: SinkError },
}
