//! The park's `Model` implementation.

use des_core::{DesResult, EntityId, Negexp, NormalSampler, Sampler, SimRng, SimTime, StationId};
use des_entity::EntityStore;
use des_events::{Event, SimContext};
use des_model::{Model, ModelError, ModelResult};
use des_resource::{ArrivalProcess, ServicePoint, StationStats};

use crate::config::{ParkConfig, ServiceTime};
use crate::event::{ParkEvent, ATTRACTIONS, REST_AREA, TICKET_BOOTH};
use crate::summary::ParkSummary;
use crate::ParkResult;

// Stream indices under the master seed.  Never renumber: each index pins the
// sequence one consumer draws.
const ARRIVAL_STREAM: u64 = 0;
const TICKET_BOOTH_STREAM: u64 = 1;
const REST_AREA_STREAM: u64 = 2;
const ATTRACTION_STREAMS: [u64; 3] = [3, 4, 5];
const ROUTING_STREAM: u64 = 6;

/// Every source of randomness the park consumes.
///
/// Built from a [`ParkConfig`] in production; tests substitute deterministic
/// samplers.
pub struct ParkSamplers {
    pub arrival:      Box<dyn Sampler>,
    pub ticket_booth: Box<dyn Sampler>,
    pub rest_area:    Box<dyn Sampler>,
    pub attractions:  [Box<dyn Sampler>; 3],
    /// Attraction choice and exit decisions.
    pub routing:      SimRng,
}

impl ParkSamplers {
    /// Negative-exponential arrivals and normal service times, one
    /// independent stream each.
    pub fn from_config(config: &ParkConfig) -> DesResult<Self> {
        let seed = config.seed;
        let normal = |time: ServiceTime, stream: u64| -> DesResult<Box<dyn Sampler>> {
            Ok(Box::new(NormalSampler::new(time.mean, time.std_dev, SimRng::stream(seed, stream))?))
        };
        Ok(Self {
            arrival:      Box::new(Negexp::new(config.arrival_mean, SimRng::stream(seed, ARRIVAL_STREAM))?),
            ticket_booth: normal(config.ticket_booth, TICKET_BOOTH_STREAM)?,
            rest_area:    normal(config.rest_area, REST_AREA_STREAM)?,
            attractions:  [
                normal(config.attractions[0], ATTRACTION_STREAMS[0])?,
                normal(config.attractions[1], ATTRACTION_STREAMS[1])?,
                normal(config.attractions[2], ATTRACTION_STREAMS[2])?,
            ],
            routing:      SimRng::stream(seed, ROUTING_STREAM),
        })
    }
}

/// Ticket booth, rest area and three attractions, fed by one arrival stream.
///
/// Service points live in `stations`, indexed by [`StationId`].
pub struct ParkModel {
    arrivals:         ArrivalProcess<ParkEvent>,
    stations:         Vec<ServicePoint<ParkEvent>>,
    visitors:         EntityStore,
    routing:          SimRng,
    exit_probability: f64,
    summary:          Option<ParkSummary>,
}

impl ParkModel {
    /// Validate `config` and build the model with its configured
    /// distributions.
    pub fn new(config: &ParkConfig) -> ParkResult<Self> {
        config.validate()?;
        Ok(Self::with_samplers(ParkSamplers::from_config(config)?, config))
    }

    /// Build the model around explicit samplers.  Only `exit_probability`
    /// is read from `config`.
    pub fn with_samplers(samplers: ParkSamplers, config: &ParkConfig) -> Self {
        let ParkSamplers { arrival, ticket_booth, rest_area, attractions, routing } = samplers;
        let [a1, a2, a3] = attractions;
        let [d1, d2, d3] = ParkEvent::ATTRACTION_DEPARTURES;

        let stations = vec![
            ServicePoint::new(TICKET_BOOTH, "ticket booth", ticket_booth, ParkEvent::DepartureTicketBooth),
            ServicePoint::new(REST_AREA, "rest area", rest_area, ParkEvent::DepartureRest),
            ServicePoint::new(ATTRACTIONS[0], "attraction 1", a1, d1),
            ServicePoint::new(ATTRACTIONS[1], "attraction 2", a2, d2),
            ServicePoint::new(ATTRACTIONS[2], "attraction 3", a3, d3),
        ];

        Self {
            arrivals: ArrivalProcess::new(arrival, ParkEvent::ArrivalTicketBooth),
            stations,
            visitors: EntityStore::new(),
            routing,
            exit_probability: config.exit_probability,
            summary: None,
        }
    }

    pub fn visitors(&self) -> &EntityStore {
        &self.visitors
    }

    pub fn stations(&self) -> &[ServicePoint<ParkEvent>] {
        &self.stations
    }

    pub fn station(&self, id: StationId) -> &ServicePoint<ParkEvent> {
        &self.stations[id.index()]
    }

    pub fn station_stats(&self, now: SimTime) -> Vec<StationStats> {
        self.stations.iter().map(|sp| sp.stats(now)).collect()
    }

    /// Set by `results`; `None` until the run has finished.
    pub fn summary(&self) -> Option<&ParkSummary> {
        self.summary.as_ref()
    }

    /// Queue `visitor` at `station` and open a visit record.
    fn join(&mut self, visitor: EntityId, station: StationId, now: SimTime) -> ModelResult<()> {
        self.visitors.arrive_at(visitor, station, now)?;
        self.stations[station.index()].add_queue(visitor, now);
        Ok(())
    }

    /// End the service at `station` and close the served visitor's visit.
    fn leave(&mut self, station: StationId, now: SimTime) -> ModelResult<EntityId> {
        let visitor = self.stations[station.index()].end_service()?;
        self.visitors.depart_from(visitor, station, now)?;
        Ok(visitor)
    }

    fn exit_or_return(&mut self, visitor: EntityId, now: SimTime) -> ModelResult<()> {
        if self.routing.next_f64() < self.exit_probability {
            self.visitors.remove(visitor, now)?;
            Ok(())
        } else {
            self.join(visitor, REST_AREA, now)
        }
    }
}

impl Model for ParkModel {
    type Kind = ParkEvent;

    fn initialize(&mut self, ctx: &mut SimContext<'_, ParkEvent>) -> ModelResult<()> {
        self.arrivals.generate_next(ctx, &mut self.visitors);
        Ok(())
    }

    fn run_event(&mut self, event: Event<ParkEvent>, ctx: &mut SimContext<'_, ParkEvent>) -> ModelResult<()> {
        let now = ctx.now;

        let Some(station) = event.kind.departure_station() else {
            let visitor = event.subject.ok_or(ModelError::MissingSubject {
                kind: event.kind.to_string(),
                time: event.time,
            })?;
            self.join(visitor, TICKET_BOOTH, now)?;
            self.arrivals.generate_next(ctx, &mut self.visitors);
            return Ok(());
        };

        let visitor = self.leave(station, now)?;
        if station == TICKET_BOOTH {
            self.join(visitor, REST_AREA, now)
        } else if station == REST_AREA {
            let pick = self.routing.gen_range(0..ATTRACTIONS.len());
            log::debug!("t={now} park: {visitor} heads to attraction {}", pick + 1);
            self.join(visitor, ATTRACTIONS[pick], now)
        } else {
            self.exit_or_return(visitor, now)
        }
    }

    fn try_conditional_events(&mut self, ctx: &mut SimContext<'_, ParkEvent>) -> ModelResult<usize> {
        Ok(self.stations.iter_mut().filter_map(|sp| sp.begin_service(ctx)).count())
    }

    fn results(&mut self, now: SimTime) {
        let stats = self.visitors.stats();
        let summary = ParkSummary {
            end_time:         now.value(),
            arrivals:         self.arrivals.generated(),
            completed:        stats.completed(),
            in_park:          self.visitors.active_count(),
            mean_system_time: stats.mean(),
            stations:         self.station_stats(now),
        };

        log::info!("t={now} park: simulation ended");
        for s in &summary.stations {
            log::info!(
                "t={now} park: {} utilization {:.4}, throughput {}",
                s.name, s.utilization, s.served
            );
        }
        match summary.mean_system_time {
            Some(mean) => log::info!("t={now} park: mean system time {mean:.3} over {} visitors", summary.completed),
            None => log::warn!("t={now} park: no visitor left the park"),
        }
        self.summary = Some(summary);
    }
}
