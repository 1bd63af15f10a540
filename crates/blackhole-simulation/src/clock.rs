//! Wall-clock frame timing

use blackhole_physics::Tick;
use std::time::Instant;

/// Turns wall-clock time into per-frame ticks.
///
/// Input handling toggles the pause flag between frames. Every particle
/// reads the same value through the [`Tick`] it receives.
pub struct FrameClock {
    last_frame_time: Instant,
    paused: bool,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::starting_at(Instant::now())
    }

    pub fn starting_at(start: Instant) -> Self {
        Self {
            last_frame_time: start,
            paused: false,
        }
    }

    /// Produce the tick for a frame beginning now.
    pub fn tick(&mut self) -> Tick {
        self.tick_at(Instant::now())
    }

    /// Produce the tick for a frame beginning at `now`.
    ///
    /// An `Instant` earlier than the previous frame yields a zero-length tick.
    pub fn tick_at(&mut self, now: Instant) -> Tick {
        let dt = now.saturating_duration_since(self.last_frame_time).as_secs_f64();
        self.last_frame_time = self.last_frame_time.max(now);
        Tick {
            dt,
            paused: self.paused,
        }
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_tick_measures_elapsed_time() {
        let start = Instant::now();
        let mut clock = FrameClock::starting_at(start);

        let tick = clock.tick_at(start + Duration::from_millis(16));
        assert!((tick.dt - 0.016).abs() < 1e-9);
        assert!(!tick.paused);

        let tick = clock.tick_at(start + Duration::from_millis(48));
        assert!((tick.dt - 0.032).abs() < 1e-9);
    }

    #[test]
    fn test_backwards_time_is_zero() {
        let start = Instant::now() + Duration::from_secs(1);
        let mut clock = FrameClock::starting_at(start);

        let tick = clock.tick_at(start - Duration::from_millis(500));
        assert_eq!(tick.dt, 0.0);

        // The clock did not rewind
        let tick = clock.tick_at(start + Duration::from_millis(10));
        assert!((tick.dt - 0.010).abs() < 1e-9);
    }

    #[test]
    fn test_pause_is_carried_by_ticks() {
        let start = Instant::now();
        let mut clock = FrameClock::starting_at(start);

        clock.toggle_pause();
        assert!(clock.is_paused());
        assert!(clock.tick_at(start + Duration::from_millis(5)).paused);

        clock.set_paused(false);
        assert!(!clock.tick_at(start + Duration::from_millis(10)).paused);
    }
}
