use core::fmt;

/// Capacity-bounded stock counter.
///
/// The level is kept inside `0..=capacity` by construction and by every
/// mutation. Out-of-range numbers are sanitized (clamped), never rejected;
/// rejecting malformed *text* is the registry's job.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StockLevel {
    capacity: f64,
    level: f64,
}

impl StockLevel {
    /// Create a counter, sanitizing both inputs.
    ///
    /// Negative capacity becomes zero. The initial level is clamped into
    /// `0..=capacity`, so an over-full request fills the counter instead of
    /// failing.
    pub fn new(capacity: f64, initial_level: f64) -> Self {
        let capacity = capacity.max(0.0);
        let level = initial_level.max(0.0).min(capacity);
        Self { capacity, level }
    }

    pub fn capacity(&self) -> f64 {
        self.capacity
    }

    pub fn level(&self) -> f64 {
        self.level
    }

    /// Free space left in the counter, always `>= 0`.
    pub fn remaining_capacity(&self) -> f64 {
        self.capacity - self.level
    }

    /// Add `amount` to the level, discarding whatever exceeds the capacity.
    ///
    /// Negative amounts change nothing.
    pub fn add(&mut self, amount: f64) {
        if amount < 0.0 {
            return;
        }
        self.level = (self.level + amount).min(self.capacity);
    }

    /// Take up to `amount` from the level and return how much was taken.
    ///
    /// Negative amounts take nothing and return `0.0`. Asking for more than
    /// the current level empties the counter and returns what was there, so
    /// callers can detect partial fulfilment by comparing against the request.
    pub fn remove(&mut self, amount: f64) -> f64 {
        if amount < 0.0 {
            return 0.0;
        }
        let taken = amount.min(self.level);
        self.level -= taken;
        taken
    }
}

impl fmt::Display for StockLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "level = {}, space left {}", self.level, self.remaining_capacity())
    }
}
