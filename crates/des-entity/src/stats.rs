//! Running total-system-time statistics.

/// Running mean of total system time over entities that have left.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SystemTimeStats {
    completed: u64,
    total:     f64,
}

impl SystemTimeStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, system_time: f64) {
        self.completed += 1;
        self.total += system_time;
    }

    pub fn completed(&self) -> u64 {
        self.completed
    }

    pub fn total(&self) -> f64 {
        self.total
    }

    /// `None` until at least one entity has completed.
    pub fn mean(&self) -> Option<f64> {
        (self.completed > 0).then(|| self.total / self.completed as f64)
    }
}
