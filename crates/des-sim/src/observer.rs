//! Engine observer trait for tracing and data collection.

use des_core::SimTime;
use des_events::{Event, EventKind};

/// Callbacks invoked by [`Engine`](crate::Engine) at phase boundaries.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — event counter
///
/// ```rust,ignore
/// struct Counter(usize);
///
/// impl<K: EventKind> EngineObserver<K> for Counter {
///     fn on_event(&mut self, _event: &Event<K>) {
///         self.0 += 1;
///     }
/// }
/// ```
pub trait EngineObserver<K: EventKind> {
    /// Called after the model's `initialize` hook.
    fn on_start(&mut self, _now: SimTime) {}

    /// Called when the A-phase moves the clock from `from` to `to`.
    fn on_advance(&mut self, _from: SimTime, _to: SimTime) {}

    /// Called for each B-event, just before it is dispatched to the model.
    fn on_event(&mut self, _event: &Event<K>) {}

    /// Called after each C-phase with the number of services started.
    fn on_conditional(&mut self, _now: SimTime, _started: usize) {}

    /// Called once, after the model's `results` hook.
    fn on_finish(&mut self, _now: SimTime) {}
}

/// An [`EngineObserver`] that does nothing.
pub struct NoopObserver;

impl<K: EventKind> EngineObserver<K> for NoopObserver {}
