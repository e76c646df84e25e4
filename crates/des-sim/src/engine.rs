//! The `Engine` struct and its three-phase loop.

use des_core::{Clock, RunConfig, SimTime};
use des_events::{EventList, SimContext};
use des_model::Model;

use crate::{EngineObserver, SimError, SimResult};

/// Lifecycle of one engine run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EngineState {
    NotStarted,
    Running,
    Finished,
    /// A phase returned an error.  Terminal; `results` is never called.
    Aborted,
}

/// Counters for a finished (or in-progress) run.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RunStats {
    /// Clock value when the run ended.
    pub end_time:           SimTime,
    /// Completed A/B/C iterations.
    pub iterations:         u64,
    /// B-events dispatched to the model.
    pub events_dispatched:  u64,
    /// Services started by C-phases.
    pub conditional_starts: u64,
}

/// The three-phase simulation runner.
///
/// `Engine<M>` owns the clock and the event list; the model `M` owns every
/// resource and entity.  Each iteration:
///
/// 1. **A-phase**: peek the earliest pending time `t`; if `t > now`, advance
///    the clock to `t`.
/// 2. **B-phase**: remove and dispatch every event whose time equals `now`,
///    draining events the model inserts at `now` before the phase ends.
/// 3. **C-phase**: call [`Model::try_conditional_events`] once.
///
/// The loop runs while events are pending and `now < horizon`; the check is
/// made at the top of each iteration, so the last iteration may carry the
/// clock past the horizon to the next event time.
///
/// Create via [`EngineBuilder`](crate::EngineBuilder) or [`Engine::new`].
pub struct Engine<M: Model> {
    /// Horizon and seed for this run.
    pub config: RunConfig,

    /// The run's clock.  Only the A-phase moves it.
    pub clock: Clock,

    /// Pending B-events.
    pub events: EventList<M::Kind>,

    /// The model.  Called from inside each phase.
    pub model: M,

    state: EngineState,
    stats: RunStats,
}

impl<M: Model> Engine<M> {
    /// Build an engine with an empty event list and the clock at zero.
    pub fn new(config: RunConfig, model: M) -> SimResult<Self> {
        config.validate()?;
        Ok(Self::from_parts(config, Clock::new(), EventList::new(), model))
    }

    pub(crate) fn from_parts(config: RunConfig, clock: Clock, events: EventList<M::Kind>, model: M) -> Self {
        Self {
            config,
            clock,
            events,
            model,
            state: EngineState::NotStarted,
            stats: RunStats::default(),
        }
    }

    // ── Public API ────────────────────────────────────────────────────────

    pub fn state(&self) -> EngineState {
        self.state
    }

    /// Current simulation time.
    pub fn now(&self) -> SimTime {
        self.clock.now()
    }

    pub fn stats(&self) -> RunStats {
        RunStats { end_time: self.clock.now(), ..self.stats }
    }

    /// Run until the terminal condition holds, then call the model's
    /// `results` hook.
    ///
    /// Running an engine that has already finished or aborted is an error.
    pub fn run<O: EngineObserver<M::Kind>>(&mut self, observer: &mut O) -> SimResult<RunStats> {
        while self.step(observer)? {}
        Ok(self.stats())
    }

    /// Execute one A/B/C iteration.
    ///
    /// Initializes the model on the first call.  Returns `Ok(false)` once the
    /// run has finished; the call that detects the terminal condition also
    /// invokes `results`.
    ///
    /// Any error aborts the run for good: the engine moves to
    /// [`EngineState::Aborted`] and every later call returns
    /// [`SimError::Aborted`].
    pub fn step<O: EngineObserver<M::Kind>>(&mut self, observer: &mut O) -> SimResult<bool> {
        match self.state {
            EngineState::Finished => return Err(SimError::AlreadyFinished),
            EngineState::Aborted => return Err(SimError::Aborted),
            EngineState::NotStarted | EngineState::Running => {}
        }

        let result = self.iterate(observer);
        if let Err(e) = &result {
            log::error!("t={} engine: run aborted: {e}", self.clock.now());
            self.state = EngineState::Aborted;
        }
        result
    }

    fn iterate<O: EngineObserver<M::Kind>>(&mut self, observer: &mut O) -> SimResult<bool> {
        if self.state == EngineState::NotStarted {
            self.start(observer)?;
        }

        if !self.should_continue() {
            self.finish(observer);
            return Ok(false);
        }

        self.a_phase(observer);
        self.b_phase(observer)?;
        self.c_phase(observer)?;
        self.stats.iterations += 1;
        Ok(true)
    }

    /// `true` while events are pending and the clock is before the horizon.
    pub fn should_continue(&self) -> bool {
        !self.events.is_empty() && self.clock.now() < self.config.horizon
    }

    // ── Lifecycle ─────────────────────────────────────────────────────────

    fn start<O: EngineObserver<M::Kind>>(&mut self, observer: &mut O) -> SimResult<()> {
        let now = self.clock.now();
        log::info!("t={now} engine: initializing (horizon {})", self.config.horizon);
        let mut ctx = SimContext::new(now, &mut self.events);
        self.model.initialize(&mut ctx)?;
        self.state = EngineState::Running;
        observer.on_start(now);
        Ok(())
    }

    fn finish<O: EngineObserver<M::Kind>>(&mut self, observer: &mut O) {
        let now = self.clock.now();
        self.state = EngineState::Finished;
        log::info!(
            "t={now} engine: finished after {} iterations, {} events ({} pending)",
            self.stats.iterations,
            self.stats.events_dispatched,
            self.events.len(),
        );
        self.model.results(now);
        observer.on_finish(now);
    }

    // ── Phases ────────────────────────────────────────────────────────────

    fn a_phase<O: EngineObserver<M::Kind>>(&mut self, observer: &mut O) {
        let from = self.clock.now();
        if let Some(t) = self.events.peek_next_time() {
            if t > from {
                self.clock.advance_to(t);
                log::debug!("t={t} engine: A-phase advanced from {from}");
                observer.on_advance(from, t);
            }
        }
    }

    fn b_phase<O: EngineObserver<M::Kind>>(&mut self, observer: &mut O) -> SimResult<()> {
        let now = self.clock.now();
        while let Some(t) = self.events.peek_next_time() {
            if t > now {
                break;
            }
            if t < now {
                log::error!("t={now} engine: pending event at {t} is in the past");
                return Err(SimError::EventTimeMismatch { event_time: t, now });
            }
            let Some(event) = self.events.remove_earliest() else { break };
            log::debug!("t={now} engine: B-phase dispatching {event}");
            observer.on_event(&event);

            let mut ctx = SimContext::new(now, &mut self.events);
            self.model.run_event(event, &mut ctx)?;
            self.stats.events_dispatched += 1;
        }
        Ok(())
    }

    fn c_phase<O: EngineObserver<M::Kind>>(&mut self, observer: &mut O) -> SimResult<()> {
        let now = self.clock.now();
        let mut ctx = SimContext::new(now, &mut self.events);
        let started = self.model.try_conditional_events(&mut ctx)?;
        if started > 0 {
            log::debug!("t={now} engine: C-phase started {started} services");
        }
        self.stats.conditional_starts += started as u64;
        observer.on_conditional(now, started);
        Ok(())
    }
}
