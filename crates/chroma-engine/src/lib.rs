pub mod debounce;
pub mod effect;
pub mod error;
pub mod pool;
pub mod selector;
pub mod settings;
pub mod sink;

pub use debounce::Debounce;
pub use effect::{LiveEffect, SharedEffect};
pub use error::EngineError;
pub use pool::EffectInstancePool;
pub use selector::FilterSelector;
pub use settings::{EngineState, JsonSettings, MemorySettings, PersistenceAdapter};
pub use sink::{RenderSink, SinkError, EFFECT_NAME};
