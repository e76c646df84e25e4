//! A model with no events.

use std::fmt;

use des_events::{Event, SimContext};

use crate::{Model, ModelResult};

/// The single (never scheduled) event kind of [`NoopModel`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NoopEvent;

impl fmt::Display for NoopEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "noop")
    }
}

/// A [`Model`] that schedules nothing, so the engine finishes immediately.
#[derive(Default)]
pub struct NoopModel {
    pub results_calls: usize,
}

impl Model for NoopModel {
    type Kind = NoopEvent;

    fn initialize(&mut self, _ctx: &mut SimContext<'_, NoopEvent>) -> ModelResult<()> {
        Ok(())
    }

    fn run_event(&mut self, _event: Event<NoopEvent>, _ctx: &mut SimContext<'_, NoopEvent>) -> ModelResult<()> {
        Ok(())
    }

    fn try_conditional_events(&mut self, _ctx: &mut SimContext<'_, NoopEvent>) -> ModelResult<usize> {
        Ok(0)
    }

    fn results(&mut self, _now: des_core::SimTime) {
        self.results_calls += 1;
    }
}
