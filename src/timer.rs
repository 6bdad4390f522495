use std::time::{Duration, Instant};

/// Deadline for the next gameplay tick.
///
/// The game core never sleeps; it reports the delay it wants and the host
/// loop arms this schedule. A disarmed schedule never becomes due.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct TickSchedule {
    deadline: Option<Instant>,
}

impl TickSchedule {
    /// Creates a schedule that fires `delay` after `now`.
    #[must_use]
    pub fn armed(now: Instant, delay: Duration) -> Self {
        Self {
            deadline: Some(now + delay),
        }
    }

    /// Replaces any pending deadline with `now + delay`.
    pub fn arm(&mut self, now: Instant, delay: Duration) {
        self.deadline = Some(now + delay);
    }

    /// Drops the pending deadline.
    pub fn disarm(&mut self) {
        self.deadline = None;
    }

    /// Returns true once the deadline has passed.
    #[must_use]
    pub fn is_due(&self, now: Instant) -> bool {
        self.deadline.is_some_and(|deadline| now >= deadline)
    }

    /// Time left until the deadline, or `None` when disarmed.
    #[must_use]
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.deadline
            .map(|deadline| deadline.saturating_duration_since(now))
    }
}
