//=========================================================================
// Clock
//=========================================================================
//
// Frame pacing for the controller loop.
//
// `tick(framerate)` is called once per frame. It sleeps for whatever is
// left of the frame budget (1 / framerate), then returns the full time
// elapsed since the previous tick. That value is the frame's delta time.
//
//   frame N          frame N+1
//   |--work--|sleep--|--work--|sleep--|
//   ^ tick           ^ tick
//   └── returned dt ─┘
//
// The measured frame rate is averaged over the last `FPS_WINDOW` ticks.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::VecDeque;
use std::thread;
use std::time::{Duration, Instant};

use log::trace;

//=== Clock ===============================================================

/// Number of recent frames averaged by [`Clock::fps`].
pub const FPS_WINDOW: usize = 10;

/// Caps the frame rate and measures frame times.
#[derive(Debug)]
pub struct Clock {
    last_tick: Instant,
    frame_times: VecDeque<Duration>,
    ticks: u64,
}

impl Clock {
    //--- Construction -----------------------------------------------------

    /// Creates a clock. The first [`tick`](Self::tick) measures from here.
    pub fn new() -> Self {
        Self {
            last_tick: Instant::now(),
            frame_times: VecDeque::with_capacity(FPS_WINDOW),
            ticks: 0,
        }
    }

    //--- Ticking ----------------------------------------------------------

    /// Ends the current frame.
    ///
    /// With `framerate > 0` the call sleeps until at least
    /// `1 / framerate` seconds have passed since the previous tick. A
    /// framerate of zero disables the cap. Returns the time since the
    /// previous tick, including the sleep.
    pub fn tick(&mut self, framerate: u32) -> Duration {
        if framerate > 0 {
            let budget = Duration::from_secs_f64(1.0 / framerate as f64);
            let elapsed = self.last_tick.elapsed();
            if elapsed < budget {
                thread::sleep(budget - elapsed);
            }
        }

        let now = Instant::now();
        let frame_time = now.duration_since(self.last_tick);
        self.last_tick = now;
        self.record(frame_time);

        trace!("Clock tick {}: {:?}", self.ticks, frame_time);
        frame_time
    }

    /// Stores one frame time in the averaging window.
    pub(crate) fn record(&mut self, frame_time: Duration) {
        if self.frame_times.len() == FPS_WINDOW {
            self.frame_times.pop_front();
        }
        self.frame_times.push_back(frame_time);
        self.ticks += 1;
    }

    //--- Queries ----------------------------------------------------------

    /// Average frames per second over the last [`FPS_WINDOW`] ticks.
    ///
    /// Returns 0.0 before the first tick.
    pub fn fps(&self) -> f64 {
        let total: Duration = self.frame_times.iter().sum();
        if total.is_zero() {
            return 0.0;
        }
        self.frame_times.len() as f64 / total.as_secs_f64()
    }

    /// Number of ticks since creation.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Converts a frame time into delta seconds.
    pub fn delta_seconds(frame_time: Duration) -> f64 {
        frame_time.as_secs_f64()
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::new()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fps_is_zero_before_first_tick() {
        let clock = Clock::new();
        assert_eq!(clock.fps(), 0.0);
        assert_eq!(clock.ticks(), 0);
    }

    #[test]
    fn fps_averages_recorded_frames() {
        let mut clock = Clock::new();
        clock.record(Duration::from_millis(10));
        clock.record(Duration::from_millis(30));

        // 2 frames in 40ms
        assert!((clock.fps() - 50.0).abs() < 1e-9);
    }

    #[test]
    fn fps_window_drops_oldest_frames() {
        let mut clock = Clock::new();
        clock.record(Duration::from_secs(1));
        for _ in 0..FPS_WINDOW {
            clock.record(Duration::from_millis(20));
        }

        assert!((clock.fps() - 50.0).abs() < 1e-6);
        assert_eq!(clock.ticks(), FPS_WINDOW as u64 + 1);
    }

    #[test]
    fn tick_caps_frame_rate() {
        let mut clock = Clock::new();
        clock.tick(0);

        let frame = clock.tick(100);
        assert!(frame >= Duration::from_millis(10), "frame was {:?}", frame);
    }

    #[test]
    fn uncapped_tick_does_not_sleep_a_full_budget() {
        let mut clock = Clock::new();
        clock.tick(0);

        let frame = clock.tick(0);
        assert!(frame < Duration::from_millis(500), "frame was {:?}", frame);
    }

    #[test]
    fn delta_seconds_converts_duration() {
        assert_eq!(Clock::delta_seconds(Duration::from_millis(250)), 0.25);
    }
}
