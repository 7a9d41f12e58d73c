/// Physics rate used when nothing else is configured.
pub const FIXED_HZ: f32 = 50.0;
pub const FIXED_DT: f32 = 1.0 / FIXED_HZ;

/// Accumulates variable frame deltas and hands out whole fixed ticks.
#[derive(Clone, Debug)]
pub struct FixedTimestep {
    interval: f64,
    max_ticks_per_frame: u32,
    accumulator: f64,
    now: f64,
    ticks: u64,
}

impl FixedTimestep {
    pub fn new(interval: f32, max_ticks_per_frame: u32) -> Self {
        Self {
            interval: f64::from(interval),
            max_ticks_per_frame: max_ticks_per_frame.max(1),
            accumulator: 0.0,
            now: 0.0,
            ticks: 0,
        }
    }

    pub fn interval(&self) -> f32 {
        self.interval as f32
    }

    /// Simulation time of the last tick handed out.
    pub fn now(&self) -> f64 {
        self.now
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Add one frame's delta and return how many fixed ticks are due. The
    /// caller runs that many ticks, calling `tick()` once before each.
    ///
    /// Backlog beyond `max_ticks_per_frame` is dropped rather than replayed.
    pub fn advance(&mut self, frame_dt: f64) -> u32 {
        if frame_dt.is_finite() && frame_dt > 0.0 {
            self.accumulator += frame_dt;
        }
        let mut due = 0u32;
        while self.accumulator >= self.interval && due < self.max_ticks_per_frame {
            self.accumulator -= self.interval;
            due += 1;
        }
        if self.accumulator >= self.interval {
            let dropped = (self.accumulator / self.interval).floor();
            log::warn!("fixed step fell behind, dropping {dropped} ticks");
            self.accumulator -= dropped * self.interval;
        }
        due
    }

    /// Mark one tick as run and return its timestamp.
    pub fn tick(&mut self) -> f64 {
        self.ticks += 1;
        self.now = self.ticks as f64 * self.interval;
        self.now
    }

    /// Fraction of an interval left in the accumulator, for render interpolation.
    pub fn alpha(&self) -> f32 {
        (self.accumulator / self.interval) as f32
    }
}

impl Default for FixedTimestep {
    fn default() -> Self {
        Self::new(FIXED_DT, 5)
    }
}

#[cfg(test)]
mod tests {
    use super::FixedTimestep;
    use approx::assert_relative_eq;

    #[test]
    fn accumulates_partial_frames() {
        let mut clock = FixedTimestep::new(0.02, 5);
        assert_eq!(clock.advance(0.015), 0);
        assert_eq!(clock.advance(0.015), 1);
        assert_relative_eq!(clock.alpha(), 0.5, epsilon = 1e-3);
        assert_eq!(clock.advance(0.04), 2);
    }

    #[test]
    fn zero_and_bogus_deltas_add_nothing() {
        let mut clock = FixedTimestep::default();
        assert_eq!(clock.advance(0.0), 0);
        assert_eq!(clock.advance(-1.0), 0);
        assert_eq!(clock.advance(f64::NAN), 0);
    }

    #[test]
    fn long_stall_is_capped() {
        let mut clock = FixedTimestep::new(0.02, 3);
        assert_eq!(clock.advance(1.0), 3);
        assert!(clock.alpha() < 1.0);
        assert_eq!(clock.advance(0.0), 0);
    }

    #[test]
    fn tick_timestamps_are_monotonic() {
        let mut clock = FixedTimestep::new(0.02, 5);
        let a = clock.tick();
        let b = clock.tick();
        assert!(b > a);
        assert_eq!(clock.ticks(), 2);
        assert_relative_eq!(clock.now(), 0.04, epsilon = 1e-6);
    }
}
