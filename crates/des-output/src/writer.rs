//! The `OutputWriter` trait implemented by all backend writers.

use des_entity::Entity;
use des_resource::StationStats;

use crate::{EntityRow, EventRow, OutputResult, StationRow, VisitRow};

/// Trait implemented by output backends.
pub trait OutputWriter {
    /// Append a batch of trace rows.
    fn write_events(&mut self, rows: &[EventRow]) -> OutputResult<()>;

    fn write_stations(&mut self, rows: &[StationRow]) -> OutputResult<()>;

    fn write_entities(&mut self, rows: &[EntityRow]) -> OutputResult<()>;

    fn write_visits(&mut self, rows: &[VisitRow]) -> OutputResult<()>;

    /// Push buffered rows to the underlying files without closing them.
    fn flush(&mut self) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}

/// Write the end-of-run station summary, entity and visit tables, then
/// finish the writer.
pub fn write_report<'a, W, I>(writer: &mut W, stations: &[StationStats], entities: I) -> OutputResult<()>
where
    W: OutputWriter,
    I: IntoIterator<Item = &'a Entity>,
{
    let station_rows: Vec<StationRow> = stations.iter().map(StationRow::from).collect();
    writer.write_stations(&station_rows)?;

    let mut entity_rows = Vec::new();
    let mut visit_rows = Vec::new();
    for entity in entities {
        entity_rows.push(EntityRow::from(entity));
        visit_rows.extend(entity.visits.iter().map(|v| VisitRow::new(entity, v)));
    }
    writer.write_entities(&entity_rows)?;
    writer.write_visits(&visit_rows)?;
    writer.finish()
}
