//! CSV output backend.

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{EntityRow, EventRow, OutputError, OutputResult, StationRow, VisitRow};

/// Writes simulation output to four CSV files.
pub struct CsvWriter {
    events:   Writer<File>,
    stations: Writer<File>,
    entities: Writer<File>,
    visits:   Writer<File>,
    finished: bool,
}

fn opt(v: Option<f64>) -> String {
    v.map(|x| x.to_string()).unwrap_or_default()
}

impl CsvWriter {
    /// Create the four CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut events = Writer::from_path(dir.join("event_trace.csv"))?;
        events.write_record(["time", "event_id", "kind", "subject"])?;

        let mut stations = Writer::from_path(dir.join("station_summary.csv"))?;
        stations.write_record(["station", "name", "served", "enqueued", "busy_time", "utilization", "queue_len"])?;

        let mut entities = Writer::from_path(dir.join("entities.csv"))?;
        entities.write_record(["entity_id", "arrival_time", "removal_time", "system_time", "stops"])?;

        let mut visits = Writer::from_path(dir.join("visits.csv"))?;
        visits.write_record(["entity_id", "station", "arrive_at", "depart_at"])?;

        Ok(Self { events, stations, entities, visits, finished: false })
    }

    fn check_open(&self) -> OutputResult<()> {
        if self.finished { Err(OutputError::Finished) } else { Ok(()) }
    }
}

impl OutputWriter for CsvWriter {
    fn write_events(&mut self, rows: &[EventRow]) -> OutputResult<()> {
        self.check_open()?;
        for row in rows {
            self.events.write_record(&[
                row.time.to_string(),
                row.event_id.to_string(),
                row.kind.clone(),
                row.subject.map(|s| s.to_string()).unwrap_or_default(),
            ])?;
        }
        Ok(())
    }

    fn write_stations(&mut self, rows: &[StationRow]) -> OutputResult<()> {
        self.check_open()?;
        for row in rows {
            self.stations.write_record(&[
                row.station.to_string(),
                row.name.clone(),
                row.served.to_string(),
                row.enqueued.to_string(),
                row.busy_time.to_string(),
                row.utilization.to_string(),
                row.queue_len.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_entities(&mut self, rows: &[EntityRow]) -> OutputResult<()> {
        self.check_open()?;
        for row in rows {
            self.entities.write_record(&[
                row.entity_id.to_string(),
                row.arrival_time.to_string(),
                opt(row.removal_time),
                opt(row.system_time),
                row.stops.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_visits(&mut self, rows: &[VisitRow]) -> OutputResult<()> {
        self.check_open()?;
        for row in rows {
            self.visits.write_record(&[
                row.entity_id.to_string(),
                row.station.to_string(),
                row.arrive_at.to_string(),
                opt(row.depart_at),
            ])?;
        }
        Ok(())
    }

    fn flush(&mut self) -> OutputResult<()> {
        self.events.flush()?;
        self.stations.flush()?;
        self.entities.flush()?;
        self.visits.flush()?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.flush()?;
        self.finished = true;
        Ok(())
    }
}
