//! Park parameters, loadable from JSON.
//!
//! Every field has a default, so a file only needs the values it overrides:
//!
//! ```json
//! { "arrival_mean": 6.0, "attractions": [{ "mean": 9.0, "std_dev": 1.5 },
//!                                        { "mean": 8.0, "std_dev": 2.0 },
//!                                        { "mean": 12.0, "std_dev": 4.0 }] }
//! ```

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::{Deserialize, Serialize};

use des_core::RunConfig;

use crate::{ParkError, ParkResult};

/// Normal service-time parameters of one station.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ServiceTime {
    pub mean:    f64,
    pub std_dev: f64,
}

impl ServiceTime {
    pub const fn new(mean: f64, std_dev: f64) -> Self {
        Self { mean, std_dev }
    }

    fn validate(&self, station: &str) -> ParkResult<()> {
        if !self.mean.is_finite() || self.mean <= 0.0 {
            return Err(ParkError::InvalidConfig(format!("{station}: mean must be > 0, got {}", self.mean)));
        }
        if !self.std_dev.is_finite() || self.std_dev < 0.0 {
            return Err(ParkError::InvalidConfig(format!(
                "{station}: std_dev must be >= 0, got {}",
                self.std_dev
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ParkConfig {
    /// Mean inter-arrival time at the ticket booth.
    pub arrival_mean:     f64,
    pub ticket_booth:     ServiceTime,
    pub rest_area:        ServiceTime,
    pub attractions:      [ServiceTime; 3],
    /// Probability of leaving the park after an attraction.
    pub exit_probability: f64,
    pub horizon:          f64,
    pub seed:             u64,
}

impl Default for ParkConfig {
    fn default() -> Self {
        Self {
            arrival_mean:     10.0,
            ticket_booth:     ServiceTime::new(5.0, 2.0),
            rest_area:        ServiceTime::new(2.0, 1.0),
            attractions:      [
                ServiceTime::new(10.0, 3.0),
                ServiceTime::new(8.0, 2.0),
                ServiceTime::new(12.0, 4.0),
            ],
            exit_probability: 0.3,
            horizon:          1_000.0,
            seed:             0,
        }
    }
}

impl ParkConfig {
    /// Parse and validate a JSON document.
    pub fn from_json_reader<R: Read>(reader: R) -> ParkResult<Self> {
        let config: ParkConfig = serde_json::from_reader(reader)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_path(path: &Path) -> ParkResult<Self> {
        let file = File::open(path)?;
        Self::from_json_reader(BufReader::new(file))
    }

    pub fn run_config(&self) -> RunConfig {
        RunConfig::new(self.horizon, self.seed)
    }

    pub fn validate(&self) -> ParkResult<()> {
        if !self.arrival_mean.is_finite() || self.arrival_mean <= 0.0 {
            return Err(ParkError::InvalidConfig(format!(
                "arrival_mean must be > 0, got {}",
                self.arrival_mean
            )));
        }
        self.ticket_booth.validate("ticket_booth")?;
        self.rest_area.validate("rest_area")?;
        for (i, attraction) in self.attractions.iter().enumerate() {
            attraction.validate(&format!("attraction {}", i + 1))?;
        }
        if !(0.0..=1.0).contains(&self.exit_probability) {
            return Err(ParkError::InvalidConfig(format!(
                "exit_probability must be within [0, 1], got {}",
                self.exit_probability
            )));
        }
        self.run_config().validate()?;
        Ok(())
    }
}
