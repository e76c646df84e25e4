//! Fluent builder for constructing an [`Engine`].

use des_core::{Clock, EntityId, RunConfig, SimTime};
use des_events::{Event, EventList};
use des_model::Model;

use crate::{Engine, SimError, SimResult};

/// Fluent builder for [`Engine<M>`].
///
/// # Required inputs
///
/// - [`RunConfig`] — horizon and seed
/// - `M: Model` — the station network
///
/// # Optional inputs (have defaults)
///
/// | Method                 | Default            |
/// |------------------------|--------------------|
/// | `.start_at(t)`         | `SimTime::ZERO`    |
/// | `.seed_event(k, t, s)` | no events          |
///
/// # Example
///
/// ```rust,ignore
/// let mut engine = EngineBuilder::new(RunConfig::new(480.0, 7), shop)
///     .seed_event(ShopEvent::Close, SimTime(480.0), None)
///     .build()?;
/// engine.run(&mut NoopObserver)?;
/// ```
pub struct EngineBuilder<M: Model> {
    config:   RunConfig,
    model:    M,
    start_at: SimTime,
    seeded:   Vec<Event<M::Kind>>,
}

impl<M: Model> EngineBuilder<M> {
    pub fn new(config: RunConfig, model: M) -> Self {
        Self { config, model, start_at: SimTime::ZERO, seeded: Vec::new() }
    }

    /// Start the clock at `t` instead of zero.
    pub fn start_at(mut self, t: SimTime) -> Self {
        self.start_at = t;
        self
    }

    /// Schedule an event before the model's `initialize` hook runs.
    ///
    /// Seeded events are inserted in call order, ahead of anything the model
    /// schedules, so they win equal-time ties.
    pub fn seed_event(mut self, kind: M::Kind, time: SimTime, subject: Option<EntityId>) -> Self {
        self.seeded.push(Event::new(kind, time, subject));
        self
    }

    /// Validate inputs and return a ready-to-run [`Engine`].
    pub fn build(self) -> SimResult<Engine<M>> {
        self.config.validate()?;

        if !self.start_at.is_valid() {
            return Err(des_core::DesError::Config(format!(
                "start time must be finite and >= 0, got {}",
                self.start_at
            ))
            .into());
        }

        let mut events = EventList::new();
        for event in self.seeded {
            if event.time < self.start_at {
                return Err(SimError::EventTimeMismatch { event_time: event.time, now: self.start_at });
            }
            events.insert(event);
        }

        let mut clock = Clock::new();
        clock.advance_to(self.start_at);

        Ok(Engine::from_parts(self.config, clock, events, self.model))
    }
}
