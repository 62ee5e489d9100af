//! Sleep-based frame rate limiting

use std::{
    thread::sleep,
    time::{Duration, Instant},
};

/// Caps the host loop at a target frame rate by sleeping out the remainder
/// of each frame. Tracks a smoothed frame time for diagnostics.
pub struct FrameLimiter {
    max_fps: f64,
    frame_timer: Instant,
    frametime_smoothed: f64,
}

impl FrameLimiter {
    pub fn new(max_fps: f64) -> Self {
        Self {
            max_fps,
            frame_timer: Instant::now(),
            frametime_smoothed: 0.,
        }
    }

    /// Smoothed frames per second over recent frames
    pub fn fps(&self) -> f64 {
        1. / self.frametime_smoothed
    }

    /// Sleep until the current frame has lasted at least `1 / max_fps`
    pub fn sleep(&mut self) {
        let before_wait = self.frame_timer.elapsed();

        let target_frametime = Duration::from_secs_f64(1. / self.max_fps);
        if target_frametime > before_wait {
            sleep(target_frametime - before_wait);
        }

        let after_wait = self.frame_timer.elapsed();
        let frametime = after_wait.as_secs_f64();
        self.frametime_smoothed += (frametime - self.frametime_smoothed) * 0.1;

        self.frame_timer = Instant::now();
    }
}
