use std::time::{Duration, Instant};

use crate::render::format_usd;

/// Cosmetic count-up of the displayed charge from zero to its final value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CountUp {
    target: f64,
    started_at: Instant,
    duration: Duration,
}

impl CountUp {
    pub fn new(target: f64, started_at: Instant, duration: Duration) -> Self {
        Self {
            target,
            started_at,
            duration,
        }
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    /// Ease-out cubic; lands exactly on the target once the duration has elapsed.
    pub fn value_at(&self, now: Instant) -> f64 {
        if self.is_finished(now) {
            return self.target;
        }
        let progress = self.progress(now);
        let eased = 1.0 - (1.0 - progress).powi(3);
        self.target * eased
    }

    pub fn display_at(&self, now: Instant) -> String {
        format_usd(self.value_at(now))
    }

    pub fn is_finished(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.started_at) >= self.duration
    }

    fn progress(&self, now: Instant) -> f64 {
        let elapsed = now.saturating_duration_since(self.started_at);
        (elapsed.as_secs_f64() / self.duration.as_secs_f64()).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_zero_and_ends_exactly_on_target() {
        let start = Instant::now();
        let counter = CountUp::new(12345.67, start, Duration::from_millis(1200));

        assert_eq!(counter.value_at(start), 0.0);
        assert_eq!(counter.value_at(start + Duration::from_millis(1200)), 12345.67);
        assert_eq!(counter.value_at(start + Duration::from_secs(10)), 12345.67);
        assert_eq!(
            counter.display_at(start + Duration::from_secs(2)),
            "$12,345.67"
        );
    }

    #[test]
    fn eases_out_and_never_overshoots() {
        let start = Instant::now();
        let counter = CountUp::new(1000.0, start, Duration::from_millis(1000));

        let halfway = counter.value_at(start + Duration::from_millis(500));
        assert!(halfway > 500.0, "ease-out should be past linear: {halfway}");

        let mut previous = 0.0;
        for step in 0..=20 {
            let value = counter.value_at(start + Duration::from_millis(step * 50));
            assert!(value >= previous && value <= 1000.0);
            previous = value;
        }
    }

    #[test]
    fn zero_duration_shows_final_value_immediately() {
        let start = Instant::now();
        let counter = CountUp::new(42.0, start, Duration::ZERO);
        assert!(counter.is_finished(start));
        assert_eq!(counter.value_at(start), 42.0);
    }
}
