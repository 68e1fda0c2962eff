//! Running counts of checked motions.

use std::sync::atomic::{AtomicU64, Ordering};

/// Counters of accepted and rejected motions.
///
/// Updated from `&self` so a validator shared across planner threads can
/// record outcomes without locking. Counts are monotonic until [`reset`](Self::reset).
#[derive(Debug, Default)]
pub struct MotionStats {
    valid: AtomicU64,
    invalid: AtomicU64,
}

impl MotionStats {
    /// Create zeroed counters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one motion outcome and return it unchanged.
    pub fn record(&self, valid: bool) -> bool {
        let counter = if valid { &self.valid } else { &self.invalid };
        counter.fetch_add(1, Ordering::Relaxed);
        valid
    }

    /// Number of motions found admissible.
    pub fn valid(&self) -> u64 {
        self.valid.load(Ordering::Relaxed)
    }

    /// Number of motions found inadmissible.
    pub fn invalid(&self) -> u64 {
        self.invalid.load(Ordering::Relaxed)
    }

    /// Fraction of checked motions that were admissible, or 0 if none were checked.
    pub fn valid_fraction(&self) -> f64 {
        let valid = self.valid();
        let total = valid + self.invalid();
        if total == 0 {
            0.0
        } else {
            valid as f64 / total as f64
        }
    }

    /// Zero both counters.
    pub fn reset(&self) {
        self.valid.store(0, Ordering::Relaxed);
        self.invalid.store(0, Ordering::Relaxed);
    }
}
