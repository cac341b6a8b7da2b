use std::cell::RefCell;
use std::rc::Rc;

use chroma_core::{FilterParams, ShaderFamily};

use crate::effect::{LiveEffect, SharedEffect};

/// Per-family pool of live effect instances.
///
/// At most one instance per shader family ever exists. `get_or_create`
/// updates an existing instance in place and hands back the same handle.
/// Recreating a shader effect on every parameter tweak (a strength slider
/// drag) forces a full-screen repaint and a transient allocation per step.
#[derive(Debug, Default)]
pub struct EffectInstancePool {
    slots: [Option<SharedEffect>; ShaderFamily::COUNT],
}

impl EffectInstancePool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch the family's instance, creating it on first use; an existing
    /// instance is reconfigured in place, preserving identity.
    pub fn get_or_create(&mut self, family: ShaderFamily, params: FilterParams) -> SharedEffect {
        let slot = &mut self.slots[family.index()];
        match slot {
            Some(effect) => {
                effect.borrow_mut().update(params);
                Rc::clone(effect)
            }
            None => {
                let effect = Rc::new(RefCell::new(LiveEffect::materialize(family, params)));
                *slot = Some(Rc::clone(&effect));
                effect
            }
        }
    }

    /// The family's instance, if one has been materialized.
    pub fn get(&self, family: ShaderFamily) -> Option<SharedEffect> {
        self.slots[family.index()].as_ref().map(Rc::clone)
    }

    /// Number of live instances.
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Release all instances. Called on engine teardown.
    pub fn clear(&mut self) {
        for slot in &mut self.slots {
            *slot = None;
        }
    }
}
