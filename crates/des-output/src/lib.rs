//! `des-output` — simulation output writers for the des engine.
//!
//! The CSV backend creates four files in the output directory:
//!
//! | File                  | One row per                              |
//! |-----------------------|------------------------------------------|
//! | `event_trace.csv`     | dispatched B-event                       |
//! | `station_summary.csv` | service point, at the end of the run     |
//! | `entities.csv`        | entity ever created                      |
//! | `visits.csv`          | station stay in an entity's visit log    |
//!
//! The trace is fed by [`SimOutputObserver`], which implements
//! `des_sim::EngineObserver`.  The summaries are written by the caller once
//! the run has finished, via [`write_report`].
//!
//! # Usage
//!
//! ```rust,ignore
//! use des_output::{CsvWriter, SimOutputObserver, write_report};
//!
//! let mut obs = SimOutputObserver::new(CsvWriter::new(Path::new("./output"))?);
//! engine.run(&mut obs)?;
//! if let Some(e) = obs.take_error() { return Err(e.into()); }
//! let mut writer = obs.into_writer();
//! write_report(&mut writer, &stations, engine.model.entities())?;
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::SimOutputObserver;
pub use row::{EntityRow, EventRow, StationRow, VisitRow};
pub use writer::{write_report, OutputWriter};
