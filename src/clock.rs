use std::time::{Duration, Instant};

/// Source of per-tick elapsed time. The real clock samples `Instant::now()`
/// once per tick; the fixed clock always reports the same step.
pub enum TickClock {
    Real { last: Instant },
    Fixed { step: Duration },
}

impl TickClock {
    pub fn real() -> Self {
        TickClock::Real { last: Instant::now() }
    }

    pub fn fixed(step: Duration) -> Self {
        TickClock::Fixed { step }
    }

    /// Time since the previous call, never negative.
    pub fn tick(&mut self) -> Duration {
        match self {
            TickClock::Real { last } => {
                let now = Instant::now();
                let dt = now.saturating_duration_since(*last);
                *last = now;
                dt
            }
            TickClock::Fixed { step } => *step,
        }
    }

    /// How long to wait for input before the next tick is due.
    pub fn until_next_tick(&self, interval: Duration) -> Duration {
        match self {
            TickClock::Real { last } => interval.saturating_sub(last.elapsed()),
            TickClock::Fixed { .. } => Duration::ZERO,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_clock_repeats_its_step() {
        let mut clock = TickClock::fixed(Duration::from_millis(16));
        assert_eq!(clock.tick(), Duration::from_millis(16));
        assert_eq!(clock.tick(), Duration::from_millis(16));
        assert_eq!(clock.until_next_tick(Duration::from_millis(16)), Duration::ZERO);
    }

    #[test]
    fn real_clock_is_monotonic() {
        let mut clock = TickClock::real();
        let first = clock.tick();
        let second = clock.tick();
        assert!(first < Duration::from_secs(1));
        assert!(second < Duration::from_secs(1));
        assert!(clock.until_next_tick(Duration::from_secs(60)) <= Duration::from_secs(60));
    }
}
