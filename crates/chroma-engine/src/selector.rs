use std::rc::Rc;
use std::time::{Duration, Instant};

use chroma_core::{clamp_strength, FilterParams};
use chroma_filters::catalog::{descriptor, paired, FilterDescriptor, FilterId};

use crate::debounce::{Debounce, DEFAULT_DELAY};
use crate::effect::SharedEffect;
use crate::error::EngineError;
use crate::pool::EffectInstancePool;
use crate::settings::{EngineState, PersistenceAdapter};
use crate::sink::{RenderSink, EFFECT_NAME};

/// The filter-selection state machine.
///
/// Owns the current selection, strength and enabled flag, and keeps the
/// render sink consistent with them: exactly one effect is attached while
/// enabled, none while disabled. Every state-mutating command schedules a
/// debounced settings write; the host pumps [`poll`](Self::poll) from its
/// event loop to flush it.
///
/// All commands run synchronously on the caller's thread and are total:
/// no command fails for well-formed input. Only sink refusals surface as
/// errors, and the engine leaves the retry decision to the caller.
pub struct FilterSelector<S: RenderSink, P: PersistenceAdapter> {
    sink: S,
    settings: P,
    state: EngineState,
    pool: EffectInstancePool,
    attached: Option<SharedEffect>,
    persist: Debounce,
    last_cycle: Option<Instant>,
}

impl<S: RenderSink, P: PersistenceAdapter> FilterSelector<S, P> {
    /// Restore persisted state and attach the active effect if filtering
    /// was left enabled.
    pub fn new(sink: S, settings: P) -> Result<Self, EngineError> {
        Self::with_persist_delay(sink, settings, DEFAULT_DELAY)
    }

    pub fn with_persist_delay(
        sink: S,
        settings: P,
        persist_delay: Duration,
    ) -> Result<Self, EngineError> {
        let state = EngineState::load(&settings);
        let mut selector = Self {
            sink,
            settings,
            state,
            pool: EffectInstancePool::new(),
            attached: None,
            persist: Debounce::new(persist_delay),
            last_cycle: None,
        };
        log::info!(
            "filter engine starting: {} ({}, strength {:.2})",
            selector.state.active.name(),
            if selector.state.enabled { "enabled" } else { "disabled" },
            selector.state.strength,
        );
        if selector.state.enabled {
            selector.attach_active()?;
        }
        Ok(selector)
    }

    // ── Commands ─────────────────────────────────────────────────

    /// Make `id` the active filter. While enabled, the materialized
    /// effect replaces (or, within a family, reconfigures) the attached
    /// one.
    pub fn select(&mut self, id: FilterId) -> Result<(), EngineError> {
        self.state.active = id;
        log::info!("filter selected: {}", id.name());
        let result = if self.state.enabled {
            self.attach_active()
        } else {
            Ok(())
        };
        self.schedule_persist();
        result
    }

    /// Set the blend strength, nudged into (0, 1). The live instance is
    /// reconfigured in place; a strength change never re-attaches.
    pub fn adjust_strength(&mut self, value: f32) {
        self.state.strength = clamp_strength(value);
        if let Some(effect) = &self.attached {
            effect.borrow_mut().update(self.active_params());
        }
        self.schedule_persist();
    }

    /// Flip the enabled flag. Disabling detaches but keeps the instance
    /// warm in the pool; re-enabling reuses it.
    pub fn toggle(&mut self) -> Result<(), EngineError> {
        self.state.enabled = !self.state.enabled;
        log::info!(
            "filters {}",
            if self.state.enabled { "enabled" } else { "disabled" }
        );
        let result = if self.state.enabled {
            self.attach_active()
        } else {
            self.detach_current()
        };
        self.schedule_persist();
        result
    }

    /// Advance to the next filter in catalog order, wrapping. No-op while
    /// disabled. Rate limiting is the caller's job; the engine only
    /// records the cycle timestamp.
    pub fn cycle_next(&mut self) -> Result<(), EngineError> {
        if !self.state.enabled {
            return Ok(());
        }
        self.last_cycle = Some(Instant::now());
        self.select(self.state.active.next())
    }

    /// Retreat to the previous filter in catalog order, wrapping. No-op
    /// while disabled.
    pub fn cycle_previous(&mut self) -> Result<(), EngineError> {
        if !self.state.enabled {
            return Ok(());
        }
        self.last_cycle = Some(Instant::now());
        self.select(self.state.active.previous())
    }

    /// Swap between a correction filter and its high-contrast partner.
    /// No-op while disabled or when the active filter has no partner.
    pub fn pair_toggle(&mut self) -> Result<(), EngineError> {
        if !self.state.enabled {
            return Ok(());
        }
        match paired(self.state.active) {
            Some(partner) => self.select(partner),
            None => Ok(()),
        }
    }

    // ── Accessors ────────────────────────────────────────────────

    pub fn is_enabled(&self) -> bool {
        self.state.enabled
    }

    pub fn active_descriptor(&self) -> &'static FilterDescriptor {
        descriptor(self.state.active)
    }

    pub fn strength(&self) -> f32 {
        self.state.strength
    }

    /// Timestamp of the most recent cycle command, for callers enforcing
    /// a minimum inter-cycle interval.
    pub fn last_cycle(&self) -> Option<Instant> {
        self.last_cycle
    }

    /// Handle to the currently attached effect, if any.
    pub fn attached_effect(&self) -> Option<SharedEffect> {
        self.attached.as_ref().map(Rc::clone)
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn settings(&self) -> &P {
        &self.settings
    }

    // ── Persistence pump ─────────────────────────────────────────

    /// Flush the debounced settings write if its window has elapsed.
    pub fn poll(&mut self) {
        if self.persist.fire(Instant::now()) {
            self.write_settings();
        }
    }

    /// Write pending settings immediately.
    pub fn flush(&mut self) {
        if self.persist.is_armed() {
            self.persist.cancel();
            self.write_settings();
        }
    }

    /// Flush settings, detach, and release all pooled instances.
    pub fn shutdown(&mut self) -> Result<(), EngineError> {
        self.flush();
        let result = self.detach_current();
        self.pool.clear();
        result
    }

    // ── Internals ────────────────────────────────────────────────

    fn active_params(&self) -> FilterParams {
        let desc = descriptor(self.state.active);
        FilterParams::new(desc.mode.unwrap_or(0), self.state.strength)
    }

    fn attach_active(&mut self) -> Result<(), EngineError> {
        let family = descriptor(self.state.active).family;
        let effect = self.pool.get_or_create(family, self.active_params());

        // Same instance already attached: the in-place update above is
        // all the sink needs to see.
        if let Some(current) = &self.attached {
            if Rc::ptr_eq(current, &effect) && self.sink.has_attached(EFFECT_NAME) {
                return Ok(());
            }
        }

        if self.sink.has_attached(EFFECT_NAME) {
            self.sink
                .detach(EFFECT_NAME)
                .map_err(|source| EngineError::Detach { name: EFFECT_NAME, source })?;
        }
        self.sink
            .attach(EFFECT_NAME, Rc::clone(&effect))
            .map_err(|source| EngineError::Attach { name: EFFECT_NAME, source })?;
        self.attached = Some(effect);
        Ok(())
    }

    fn detach_current(&mut self) -> Result<(), EngineError> {
        if self.sink.has_attached(EFFECT_NAME) {
            self.sink
                .detach(EFFECT_NAME)
                .map_err(|source| EngineError::Detach { name: EFFECT_NAME, source })?;
        }
        self.attached = None;
        Ok(())
    }

    fn schedule_persist(&mut self) {
        self.persist.arm();
    }

    fn write_settings(&mut self) {
        self.state.store(&mut self.settings);
        log::debug!(
            "settings persisted: {} enabled={} strength={:.2}",
            self.state.active.name(),
            self.state.enabled,
            self.state.strength,
        );
    }
}
