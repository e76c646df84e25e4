//! Integration tests for des-sim.

use std::fmt;

use des_core::{EntityId, Fixed, RunConfig, Sampler, SimTime, StationId};
use des_entity::EntityStore;
use des_events::{Event, EventKind, SimContext};
use des_model::{Model, ModelError, ModelResult, NoopModel};
use des_resource::{ArrivalProcess, ServicePoint};

use crate::{Engine, EngineBuilder, EngineObserver, EngineState, NoopObserver, SimError};

// ── Helpers ───────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ShopEvent {
    Arrival,
    Departure,
}

impl fmt::Display for ShopEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShopEvent::Arrival => write!(f, "arrival"),
            ShopEvent::Departure => write!(f, "departure"),
        }
    }
}

/// One till, one queue.
struct Shop {
    arrivals:  ArrivalProcess<ShopEvent>,
    till:      ServicePoint<ShopEvent>,
    customers: EntityStore,
    results:   usize,
}

impl Shop {
    fn new(interarrival: impl Sampler + 'static, service: impl Sampler + 'static) -> Self {
        Self {
            arrivals:  ArrivalProcess::new(Box::new(interarrival), ShopEvent::Arrival),
            till:      ServicePoint::new(StationId(0), "till", Box::new(service), ShopEvent::Departure),
            customers: EntityStore::new(),
            results:   0,
        }
    }
}

impl Model for Shop {
    type Kind = ShopEvent;

    fn initialize(&mut self, ctx: &mut SimContext<'_, ShopEvent>) -> ModelResult<()> {
        self.arrivals.generate_next(ctx, &mut self.customers);
        Ok(())
    }

    fn run_event(&mut self, event: Event<ShopEvent>, ctx: &mut SimContext<'_, ShopEvent>) -> ModelResult<()> {
        let who = event.subject.ok_or(ModelError::MissingSubject {
            kind: event.kind.to_string(),
            time: event.time,
        })?;
        match event.kind {
            ShopEvent::Arrival => {
                self.customers.arrive_at(who, self.till.id(), ctx.now)?;
                self.till.add_queue(who, ctx.now);
                self.arrivals.generate_next(ctx, &mut self.customers);
            }
            ShopEvent::Departure => {
                let done = self.till.end_service()?;
                self.customers.depart_from(done, self.till.id(), ctx.now)?;
                self.customers.remove(done, ctx.now)?;
            }
        }
        Ok(())
    }

    fn try_conditional_events(&mut self, ctx: &mut SimContext<'_, ShopEvent>) -> ModelResult<usize> {
        Ok(self.till.begin_service(ctx).is_some() as usize)
    }

    fn results(&mut self, _now: SimTime) {
        self.results += 1;
    }
}

/// Numbered event kind for scripted models.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Step(u8);

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "step{}", self.0)
    }
}

/// Schedules a fixed script at initialization and records what fires.
struct Script {
    initial: Vec<(u8, f64)>,
    seen:    Vec<(u8, SimTime)>,
}

impl Model for Script {
    type Kind = Step;

    fn initialize(&mut self, ctx: &mut SimContext<'_, Step>) -> ModelResult<()> {
        for &(step, t) in &self.initial {
            ctx.schedule_at(Step(step), SimTime(t), None);
        }
        Ok(())
    }

    fn run_event(&mut self, event: Event<Step>, ctx: &mut SimContext<'_, Step>) -> ModelResult<()> {
        self.seen.push((event.kind.0, ctx.now));
        Ok(())
    }

    fn try_conditional_events(&mut self, _ctx: &mut SimContext<'_, Step>) -> ModelResult<usize> {
        Ok(0)
    }
}

/// Its only event schedules another one in the past.
#[derive(Default)]
struct TimeTraveller {
    results: usize,
}

impl Model for TimeTraveller {
    type Kind = Step;

    fn initialize(&mut self, ctx: &mut SimContext<'_, Step>) -> ModelResult<()> {
        ctx.schedule_at(Step(0), SimTime(5.0), None);
        Ok(())
    }

    fn run_event(&mut self, _event: Event<Step>, ctx: &mut SimContext<'_, Step>) -> ModelResult<()> {
        ctx.schedule_at(Step(1), SimTime(2.0), None);
        Ok(())
    }

    fn try_conditional_events(&mut self, _ctx: &mut SimContext<'_, Step>) -> ModelResult<usize> {
        Ok(0)
    }

    fn results(&mut self, _now: SimTime) {
        self.results += 1;
    }
}

/// Records every callback in order.
#[derive(Default)]
struct Recorder {
    log: Vec<String>,
}

impl<K: EventKind> EngineObserver<K> for Recorder {
    fn on_start(&mut self, now: SimTime) {
        self.log.push(format!("start@{now}"));
    }
    fn on_advance(&mut self, _from: SimTime, to: SimTime) {
        self.log.push(format!("A@{to}"));
    }
    fn on_event(&mut self, event: &Event<K>) {
        self.log.push(format!("B:{}@{}", event.kind, event.time));
    }
    fn on_conditional(&mut self, now: SimTime, started: usize) {
        self.log.push(format!("C@{now}:{started}"));
    }
    fn on_finish(&mut self, now: SimTime) {
        self.log.push(format!("finish@{now}"));
    }
}

// ── Lifecycle ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod lifecycle {
    use super::*;

    #[test]
    fn empty_model_finishes_immediately() {
        let mut engine = Engine::new(RunConfig::new(100.0, 1), NoopModel::default()).unwrap();
        assert_eq!(engine.state(), EngineState::NotStarted);
        let stats = engine.run(&mut NoopObserver).unwrap();
        assert_eq!(engine.state(), EngineState::Finished);
        assert_eq!(stats.iterations, 0);
        assert_eq!(stats.end_time, SimTime::ZERO);
        assert_eq!(engine.model.results_calls, 1);
    }

    #[test]
    fn finished_engine_cannot_run_again() {
        let mut engine = Engine::new(RunConfig::new(100.0, 1), NoopModel::default()).unwrap();
        engine.run(&mut NoopObserver).unwrap();
        assert!(matches!(engine.run(&mut NoopObserver), Err(SimError::AlreadyFinished)));
        assert!(matches!(engine.step(&mut NoopObserver), Err(SimError::AlreadyFinished)));
        assert_eq!(engine.model.results_calls, 1);
    }

    #[test]
    fn aborted_engine_stays_aborted() {
        let mut engine = Engine::new(RunConfig::new(100.0, 1), TimeTraveller::default()).unwrap();
        assert!(matches!(engine.run(&mut NoopObserver), Err(SimError::EventTimeMismatch { .. })));
        assert_eq!(engine.state(), EngineState::Aborted);

        assert!(matches!(engine.run(&mut NoopObserver), Err(SimError::Aborted)));
        assert!(matches!(engine.step(&mut NoopObserver), Err(SimError::Aborted)));
        assert_eq!(engine.state(), EngineState::Aborted);
        assert_eq!(engine.model.results, 0);
    }

    #[test]
    fn failed_event_is_not_skipped_on_rerun() {
        // Departure with nobody in service: the till refuses it.
        let shop = Shop::new(Fixed(4.0), Fixed(1.0));
        let mut engine = EngineBuilder::new(RunConfig::new(100.0, 1), shop)
            .seed_event(ShopEvent::Departure, SimTime(1.0), Some(EntityId(0)))
            .build()
            .unwrap();
        let err = engine.run(&mut NoopObserver).unwrap_err();
        assert!(matches!(err, SimError::Model(ModelError::Resource(_))));

        assert!(matches!(engine.run(&mut NoopObserver), Err(SimError::Aborted)));
        assert_eq!(engine.state(), EngineState::Aborted);
        assert_eq!(engine.model.results, 0);
        assert_eq!(engine.now(), SimTime(1.0));
    }

    #[test]
    fn invalid_horizon_rejected() {
        assert!(Engine::new(RunConfig::new(0.0, 1), NoopModel::default()).is_err());
        assert!(EngineBuilder::new(RunConfig::new(-1.0, 1), NoopModel::default()).build().is_err());
    }

    #[test]
    fn results_called_exactly_once_when_horizon_stops_run() {
        let mut engine = Engine::new(RunConfig::new(50.0, 1), Shop::new(Fixed(4.0), Fixed(1.0))).unwrap();
        engine.run(&mut NoopObserver).unwrap();
        assert_eq!(engine.model.results, 1);
        // Arrivals never stop, so the horizon ended the run.
        assert!(!engine.events.is_empty());
    }
}

// ── Phases ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod phases {
    use super::*;

    #[test]
    fn horizon_checked_at_top_of_iteration() {
        // Arrivals every 4.0; horizon 10.  Iterations start at 0, 4, 8; the
        // iteration starting at 8 advances to 12 and processes it.
        let mut engine = Engine::new(RunConfig::new(10.0, 1), Shop::new(Fixed(4.0), Fixed(100.0))).unwrap();
        let stats = engine.run(&mut NoopObserver).unwrap();
        assert_eq!(stats.end_time, SimTime(12.0));
        assert_eq!(stats.iterations, 3);
        assert_eq!(engine.model.arrivals.generated(), 4);
    }

    #[test]
    fn phase_order_per_iteration() {
        let mut engine = Engine::new(RunConfig::new(5.0, 1), Shop::new(Fixed(3.0), Fixed(1.0))).unwrap();
        let mut rec = Recorder::default();
        engine.run(&mut rec).unwrap();
        assert_eq!(
            rec.log,
            vec![
                "start@0",
                "A@3", "B:arrival@3", "C@3:1",
                "A@4", "B:departure@4", "C@4:0",
                "A@6", "B:arrival@6", "C@6:1",
                "finish@6",
            ]
        );
    }

    #[test]
    fn step_runs_one_iteration() {
        let mut engine = Engine::new(RunConfig::new(100.0, 1), Shop::new(Fixed(3.0), Fixed(1.0))).unwrap();
        assert!(engine.step(&mut NoopObserver).unwrap());
        assert_eq!(engine.state(), EngineState::Running);
        assert_eq!(engine.now(), SimTime(3.0));
        assert!(engine.model.till.is_reserved());
        assert!(engine.step(&mut NoopObserver).unwrap());
        assert_eq!(engine.now(), SimTime(4.0));
        assert!(!engine.model.till.is_reserved());
    }

    /// Inserts a follow-up at the same time, and one later.
    struct Chain {
        seen: Vec<(u8, SimTime)>,
        conditional_calls: usize,
    }

    impl Model for Chain {
        type Kind = Step;

        fn initialize(&mut self, ctx: &mut SimContext<'_, Step>) -> ModelResult<()> {
            ctx.schedule_at(Step(0), SimTime(1.0), None);
            ctx.schedule_at(Step(9), SimTime(1.0), None);
            Ok(())
        }

        fn run_event(&mut self, event: Event<Step>, ctx: &mut SimContext<'_, Step>) -> ModelResult<()> {
            self.seen.push((event.kind.0, ctx.now));
            match event.kind.0 {
                0 => {
                    ctx.schedule_at(Step(1), ctx.now, None);
                    ctx.schedule_at(Step(2), SimTime(2.0), None);
                }
                1 => {
                    ctx.schedule_at(Step(3), ctx.now, None);
                }
                _ => {}
            }
            Ok(())
        }

        fn try_conditional_events(&mut self, _ctx: &mut SimContext<'_, Step>) -> ModelResult<usize> {
            self.conditional_calls += 1;
            Ok(0)
        }
    }

    #[test]
    fn same_time_inserts_drain_in_the_same_b_phase() {
        let model = Chain { seen: vec![], conditional_calls: 0 };
        let mut engine = Engine::new(RunConfig::new(100.0, 1), model).unwrap();
        let stats = engine.run(&mut NoopObserver).unwrap();

        let t1 = SimTime(1.0);
        assert_eq!(
            engine.model.seen,
            vec![(0, t1), (9, t1), (1, t1), (3, t1), (2, SimTime(2.0))]
        );
        // One C-phase per iteration, two iterations.
        assert_eq!(stats.iterations, 2);
        assert_eq!(engine.model.conditional_calls, 2);
    }

    #[test]
    fn event_in_the_past_aborts_the_run() {
        let mut engine = Engine::new(RunConfig::new(100.0, 1), TimeTraveller::default()).unwrap();
        let err = engine.run(&mut NoopObserver).unwrap_err();
        assert!(matches!(
            err,
            SimError::EventTimeMismatch { event_time, now } if event_time == SimTime(2.0) && now == SimTime(5.0)
        ));
        assert_eq!(engine.now(), SimTime(5.0));
    }

    /// Two events that should coincide but differ by rounding.
    struct NearMiss {
        iterations_seen: Vec<SimTime>,
    }

    impl Model for NearMiss {
        type Kind = Step;

        fn initialize(&mut self, ctx: &mut SimContext<'_, Step>) -> ModelResult<()> {
            ctx.schedule_at(Step(0), SimTime(0.1 + 0.2), None);
            ctx.schedule_at(Step(1), SimTime(0.3), None);
            Ok(())
        }

        fn run_event(&mut self, _event: Event<Step>, ctx: &mut SimContext<'_, Step>) -> ModelResult<()> {
            self.iterations_seen.push(ctx.now);
            Ok(())
        }

        fn try_conditional_events(&mut self, _ctx: &mut SimContext<'_, Step>) -> ModelResult<usize> {
            Ok(0)
        }
    }

    #[test]
    fn b_phase_grouping_uses_exact_equality() {
        let mut engine = Engine::new(RunConfig::new(10.0, 1), NearMiss { iterations_seen: vec![] }).unwrap();
        let stats = engine.run(&mut NoopObserver).unwrap();
        assert_eq!(stats.iterations, 2);
        assert_eq!(engine.model.iterations_seen, vec![SimTime(0.3), SimTime(0.1 + 0.2)]);
    }
}

// ── Builder ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod builder {
    use super::*;

    #[test]
    fn seeded_events_run_before_model_events_at_equal_time() {
        let script = Script { initial: vec![(1, 3.0)], seen: vec![] };
        let mut engine = EngineBuilder::new(RunConfig::new(10.0, 1), script)
            .seed_event(Step(0), SimTime(3.0), None)
            .build()
            .unwrap();
        engine.run(&mut NoopObserver).unwrap();
        assert_eq!(engine.model.seen, vec![(0, SimTime(3.0)), (1, SimTime(3.0))]);
    }

    #[test]
    fn start_at_moves_clock() {
        let engine = EngineBuilder::new(RunConfig::new(10.0, 1), NoopModel::default())
            .start_at(SimTime(4.0))
            .build()
            .unwrap();
        assert_eq!(engine.now(), SimTime(4.0));
    }

    #[test]
    fn seeded_event_before_start_rejected() {
        let result = EngineBuilder::new(RunConfig::new(10.0, 1), Shop::new(Fixed(3.0), Fixed(1.0)))
            .start_at(SimTime(5.0))
            .seed_event(ShopEvent::Arrival, SimTime(1.0), None)
            .build();
        assert!(matches!(result, Err(SimError::EventTimeMismatch { .. })));
    }

    #[test]
    fn negative_start_rejected() {
        let result = EngineBuilder::new(RunConfig::new(10.0, 1), NoopModel::default())
            .start_at(SimTime(-1.0))
            .build();
        assert!(matches!(result, Err(SimError::Config(_))));
    }
}

// ── Whole runs ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod runs {
    use super::*;
    use crate::{run_replications, SimResult};
    use des_core::{Negexp, NormalSampler, SimRng};

    fn random_shop(seed: u64) -> Shop {
        Shop::new(
            Negexp::new(5.0, SimRng::stream(seed, 0)).unwrap(),
            NormalSampler::new(4.0, 1.5, SimRng::stream(seed, 1)).unwrap(),
        )
    }

    #[test]
    fn single_station_invariants_hold() {
        let mut engine = Engine::new(RunConfig::new(2_000.0, 3), random_shop(3)).unwrap();
        let stats = engine.run(&mut NoopObserver).unwrap();
        let shop = &engine.model;

        assert_eq!(shop.till.throughput(), shop.customers.stats().completed());
        assert!(shop.till.throughput() <= shop.till.enqueued());
        assert!(stats.conditional_starts >= shop.till.throughput());
        for c in shop.customers.completed() {
            assert!(c.removal_time.unwrap() >= c.arrival_time);
        }
    }

    #[test]
    fn runs_are_reproducible() {
        let summarize = |seed: u64| -> SimResult<(Vec<String>, u64)> {
            let mut engine = Engine::new(RunConfig::new(500.0, seed), random_shop(seed))?;
            let mut rec = Recorder::default();
            engine.run(&mut rec)?;
            Ok((rec.log, engine.model.till.busy_time().to_bits()))
        };
        let a = run_replications(&[1, 2, 3], summarize).unwrap();
        let b = run_replications(&[1, 2, 3], summarize).unwrap();
        assert_eq!(a, b);
        assert_ne!(a[0], a[1]);
    }
}
