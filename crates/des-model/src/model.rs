//! The `Model` trait — the main extension point for user code.

use des_core::SimTime;
use des_events::{Event, EventKind, SimContext};

use crate::ModelResult;

/// A concrete simulation: its event vocabulary, its resources and its
/// routing.
///
/// The engine calls the hooks in this order:
///
/// ```text
/// initialize                               once
/// loop {
///     run_event              for every event at the current time (B-phase)
///     try_conditional_events once                                (C-phase)
/// }
/// results                                  once
/// ```
///
/// Errors from any hook abort the run; they signal a broken model, not a
/// recoverable condition.
///
/// # Example
///
/// ```rust,ignore
/// impl Model for Shop {
///     type Kind = ShopEvent;
///
///     fn initialize(&mut self, ctx: &mut SimContext<'_, ShopEvent>) -> ModelResult<()> {
///         self.arrivals.generate_next(ctx, &mut self.customers);
///         Ok(())
///     }
///
///     fn run_event(&mut self, event: Event<ShopEvent>, ctx: &mut SimContext<'_, ShopEvent>) -> ModelResult<()> {
///         match event.kind {
///             ShopEvent::Arrival => { /* queue at the till, generate next */ }
///             ShopEvent::Departure => { /* end_service, leave */ }
///         }
///         Ok(())
///     }
///
///     fn try_conditional_events(&mut self, ctx: &mut SimContext<'_, ShopEvent>) -> ModelResult<usize> {
///         Ok(self.till.begin_service(ctx).is_some() as usize)
///     }
/// }
/// ```
pub trait Model {
    /// The model's event vocabulary.
    type Kind: EventKind;

    /// Called once before the first A-phase.  Typically seeds the first
    /// arrival.
    fn initialize(&mut self, ctx: &mut SimContext<'_, Self::Kind>) -> ModelResult<()>;

    /// Execute one B-event.  `event.time == ctx.now` always holds.
    ///
    /// May insert further events; any inserted at `ctx.now` are dispatched in
    /// the same B-phase.
    fn run_event(
        &mut self,
        event: Event<Self::Kind>,
        ctx:   &mut SimContext<'_, Self::Kind>,
    ) -> ModelResult<()>;

    /// C-phase: start service at every owned service point that is idle and
    /// has a non-empty queue.  Each point starts at most one service per call.
    ///
    /// Returns how many services were started.
    fn try_conditional_events(&mut self, ctx: &mut SimContext<'_, Self::Kind>) -> ModelResult<usize>;

    /// Called exactly once after the loop ends, with the final clock value.
    ///
    /// Default: does nothing.
    fn results(&mut self, _now: SimTime) {}
}
