use std::time::{Duration, Instant};

/// Default sketch frame rate.
pub const DEFAULT_FRAME_RATE: f32 = 60.0;

/// Frame timing snapshot.
#[derive(Debug, Copy, Clone)]
pub struct FrameTime {
    /// Time elapsed since the previous frame tick, in seconds.
    pub dt: f32,

    /// Monotonic timestamp taken at the tick.
    pub now: Instant,

    /// Monotonic frame counter.
    pub frame_index: u64,
}

/// Fixed-rate frame clock.
///
/// Produces `FrameTime` snapshots and the deadline of the next frame, which
/// the runtime hands to the event loop as a `WaitUntil`.
///
/// Delta time is clamped to avoid pathological values when the application is
/// paused by the debugger, minimized, or stalls.
#[derive(Debug, Clone)]
pub struct FrameClock {
    last: Instant,
    next: Instant,
    interval: Duration,
    frame_index: u64,
    dt_min: Duration,
    dt_max: Duration,
}

impl FrameClock {
    /// Clock ticking at [`DEFAULT_FRAME_RATE`].
    pub fn new() -> Self {
        Self::with_rate(DEFAULT_FRAME_RATE)
    }

    /// Clock ticking `fps` times per second; non-positive or non-finite rates
    /// fall back to the default.
    pub fn with_rate(fps: f32) -> Self {
        let now = Instant::now();
        let interval = interval_for(fps);
        Self {
            last: now,
            next: now,
            interval,
            frame_index: 0,
            dt_min: Duration::from_micros(100),
            dt_max: Duration::from_millis(250),
        }
    }

    /// Changes the target rate; takes effect from the next scheduled frame.
    pub fn set_rate(&mut self, fps: f32) {
        self.interval = interval_for(fps);
        self.next = self.last + self.interval;
    }

    /// Target rate in frames per second.
    pub fn rate(&self) -> f32 {
        1.0 / self.interval.as_secs_f32()
    }

    /// When the next frame should be produced.
    #[inline]
    pub fn deadline(&self) -> Instant {
        self.next
    }

    /// True once `now` has reached the deadline.
    #[inline]
    pub fn due(&self, now: Instant) -> bool {
        now >= self.next
    }

    /// Advances the clock using the current time.
    pub fn tick(&mut self) -> FrameTime {
        self.tick_at(Instant::now())
    }

    /// Advances the clock to `now` and schedules the following frame.
    ///
    /// If the loop fell behind by more than one interval the schedule restarts
    /// from `now` instead of bursting to catch up.
    pub fn tick_at(&mut self, now: Instant) -> FrameTime {
        let dt = now
            .saturating_duration_since(self.last)
            .clamp(self.dt_min, self.dt_max);

        self.last = now;
        self.next += self.interval;
        if self.next <= now {
            self.next = now + self.interval;
        }

        let ft = FrameTime {
            dt: dt.as_secs_f32(),
            now,
            frame_index: self.frame_index,
        };
        self.frame_index = self.frame_index.wrapping_add(1);
        ft
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

fn interval_for(fps: f32) -> Duration {
    let fps = if fps.is_finite() && fps > 0.0 { fps } else { DEFAULT_FRAME_RATE };
    Duration::from_secs_f32(1.0 / fps)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_frame_is_due_immediately() {
        let clock = FrameClock::with_rate(30.0);
        assert!(clock.due(Instant::now()));
    }

    #[test]
    fn tick_schedules_one_interval_ahead() {
        let mut clock = FrameClock::with_rate(10.0);
        let t0 = Instant::now();
        clock.tick_at(t0);
        assert!(!clock.due(t0 + Duration::from_millis(50)));
        assert!(clock.due(t0 + Duration::from_millis(100)));
    }

    #[test]
    fn falling_behind_does_not_burst() {
        let mut clock = FrameClock::with_rate(10.0);
        let t0 = Instant::now();
        clock.tick_at(t0);
        let late = t0 + Duration::from_secs(2);
        clock.tick_at(late);
        assert!(!clock.due(late + Duration::from_millis(50)));
    }

    #[test]
    fn dt_is_clamped() {
        let mut clock = FrameClock::with_rate(60.0);
        let t0 = Instant::now();
        clock.tick_at(t0);
        let ft = clock.tick_at(t0 + Duration::from_secs(5));
        assert!((ft.dt - 0.25).abs() < 1e-6);
        assert_eq!(ft.frame_index, 1);
    }

    #[test]
    fn invalid_rate_falls_back_to_default() {
        let clock = FrameClock::with_rate(0.0);
        assert!((clock.rate() - DEFAULT_FRAME_RATE).abs() < 0.01);
    }
}
