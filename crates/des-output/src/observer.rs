//! `SimOutputObserver<W>` — bridges `EngineObserver` to an `OutputWriter`.

use des_core::SimTime;
use des_events::{Event, EventKind};
use des_sim::EngineObserver;

use crate::row::EventRow;
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// Rows buffered before each write call.
const BATCH: usize = 1_024;

/// An [`EngineObserver`] that writes every dispatched B-event to the trace.
///
/// Errors from the writer are stored internally because observer methods
/// have no return value.  After `engine.run()` returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer:     W,
    pending:    Vec<EventRow>,
    written:    u64,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, pending: Vec::with_capacity(BATCH), written: 0, last_error: None }
    }

    /// Take the stored write error (if any) after `engine.run()` returns.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Trace rows handed to the writer so far.
    pub fn rows_written(&self) -> u64 {
        self.written
    }

    /// Unwrap the inner writer, e.g. to append the end-of-run report.
    pub fn into_writer(mut self) -> W {
        self.drain();
        self.writer
    }

    fn drain(&mut self) {
        if self.pending.is_empty() {
            return;
        }
        let result = self.writer.write_events(&self.pending);
        self.written += self.pending.len() as u64;
        self.pending.clear();
        self.store_err(result);
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter, K: EventKind> EngineObserver<K> for SimOutputObserver<W> {
    fn on_event(&mut self, event: &Event<K>) {
        self.pending.push(EventRow::from(event));
        if self.pending.len() >= BATCH {
            self.drain();
        }
    }

    fn on_finish(&mut self, _now: SimTime) {
        self.drain();
        let result = self.writer.flush();
        self.store_err(result);
    }
}
