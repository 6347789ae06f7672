use std::time::Duration;

use web_time::Instant;

/// Rate limits how often a scroller evaluates samples.
///
/// Samples that arrive inside the interval are dropped, never queued. Each scroller owns its
/// own gate, so recreating a scroller starts from a fresh state.
#[derive(Clone, Debug)]
pub struct ThrottleGate {
    interval: Duration,
    last_accepted: Option<Instant>,
}

impl ThrottleGate {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_accepted: None,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Returns true and records `now` if the sample may be processed.
    pub fn should_process(&mut self, now: Instant) -> bool {
        let open = match self.last_accepted {
            None => true,
            Some(_) if self.interval.is_zero() => true,
            // a clock that went backwards saturates to zero elapsed
            Some(last) => now.saturating_duration_since(last) >= self.interval,
        };

        if open {
            self.last_accepted = Some(now);
        }

        open
    }
}
