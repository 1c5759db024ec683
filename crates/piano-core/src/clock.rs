use std::time::Instant;

/// Monotonic millisecond time source.
///
/// The recorder and highlight timing only ever compare readings from the
/// same clock, so the origin is arbitrary.
pub trait Clock {
    /// Milliseconds elapsed since the clock's origin.
    fn now_millis(&self) -> u64;
}

/// Wall clock backed by [`Instant`], origin at construction.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    /// Create a clock whose origin is now.
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }

    /// The instant corresponding to a reading of this clock.
    pub fn instant_at(&self, millis: u64) -> Instant {
        self.origin + std::time::Duration::from_millis(millis)
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now_millis(&self) -> u64 {
        u64::try_from(self.origin.elapsed().as_millis()).unwrap_or(u64::MAX)
    }
}
