/// Turns variable frame times into a count of fixed-period ticks.
#[derive(Clone, Debug)]
pub struct TickTimer {
    period: f64,
    accumulated: f64,
    max_burst: u32,
}

impl TickTimer {
    pub const DEFAULT_MAX_BURST: u32 = 10;

    pub fn new(period_ms: u64) -> Self {
        Self {
            period: period_ms as f64 / 1000.0,
            accumulated: 0.0,
            max_burst: Self::DEFAULT_MAX_BURST,
        }
    }

    pub fn with_max_burst(mut self, max_burst: u32) -> Self {
        self.max_burst = max_burst.max(1);
        self
    }

    /// Add `dt` seconds and return how many ticks are now due.
    /// Time beyond `max_burst` ticks is dropped rather than carried over.
    pub fn advance(&mut self, dt: f64) -> u32 {
        self.accumulated += dt.max(0.0);
        let due = (self.accumulated / self.period).floor();
        if due >= self.max_burst as f64 {
            self.accumulated = 0.0;
            return self.max_burst;
        }
        self.accumulated -= due * self.period;
        due as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn carries_remainder_between_frames() {
        let mut timer = TickTimer::new(10);
        assert_eq!(timer.advance(0.016), 1);
        assert_eq!(timer.advance(0.016), 2);
        assert_eq!(timer.advance(0.004), 0);
        assert_eq!(timer.advance(0.005), 1);
    }

    #[test]
    fn long_stall_is_capped() {
        let mut timer = TickTimer::new(10).with_max_burst(5);
        assert_eq!(timer.advance(2.0), 5);
        assert_eq!(timer.advance(0.005), 0);
    }

    #[test]
    fn negative_time_is_ignored() {
        let mut timer = TickTimer::new(10);
        assert_eq!(timer.advance(-1.0), 0);
        assert_eq!(timer.advance(0.011), 1);
    }
}
