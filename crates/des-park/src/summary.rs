use std::fmt;

use des_resource::StationStats;

/// End-of-run report produced by the model's `results` hook.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParkSummary {
    pub end_time:         f64,
    pub arrivals:         u64,
    /// Visitors who left the park.
    pub completed:        u64,
    pub in_park:          usize,
    /// Mean total time in the park over completed visitors.
    pub mean_system_time: Option<f64>,
    /// Ticket booth, rest area, then attractions 1–3.
    pub stations:         Vec<StationStats>,
}

impl fmt::Display for ParkSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Simulation ended at {:.3}", self.end_time)?;
        writeln!(
            f,
            "Visitors: {} arrived, {} left, {} still in the park",
            self.arrivals, self.completed, self.in_park
        )?;
        match self.mean_system_time {
            Some(mean) => writeln!(f, "Mean time in park: {mean:.3}")?,
            None => writeln!(f, "Mean time in park: n/a")?,
        }
        writeln!(f, "{:<14} {:>8} {:>8} {:>12}", "station", "served", "queue", "utilization")?;
        for s in &self.stations {
            writeln!(f, "{:<14} {:>8} {:>8} {:>12.4}", s.name, s.served, s.queue_len, s.utilization)?;
        }
        Ok(())
    }
}
