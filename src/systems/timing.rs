use std::time::{Duration, Instant};

/// Fixed-step clock: folds wall time into 60 Hz simulation ticks and keeps
/// a once-per-second FPS figure for the HUD.
pub struct TimeSystem {
    last_update: Instant,
    accumulator: Duration,
    fps_timer: Instant,
    fps_frame_count: u32,
    pub current_fps: u32,

    tick_dt: Duration,
    fps_dt: Duration,
}

impl TimeSystem {
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            last_update: now,
            accumulator: Duration::ZERO,
            fps_timer: now,
            fps_frame_count: 0,
            current_fps: 0,
            tick_dt: Duration::from_secs(1) / 60,
            fps_dt: Duration::from_secs(1),
        }
    }

    /// Advances the clock. Returns the number of fixed ticks to simulate
    /// and whether a redraw is justified.
    pub fn tick(&mut self, now: Instant) -> (u32, bool) {
        let mut frame_dt = now - self.last_update;
        self.last_update = now;

        // Cap catch-up work after a stall
        let max_frame_dt = self.tick_dt * 5;
        frame_dt = frame_dt.min(max_frame_dt);
        self.accumulator += frame_dt;

        let mut steps = 0;
        while self.accumulator >= self.tick_dt {
            self.accumulator -= self.tick_dt;
            steps += 1;
        }

        self.fps_frame_count += 1;
        let mut fps_updated = false;
        if now - self.fps_timer >= self.fps_dt {
            let elapsed = (now - self.fps_timer).as_secs_f32();
            self.current_fps = (self.fps_frame_count as f32 / elapsed).round() as u32;
            self.fps_frame_count = 0;
            self.fps_timer = now;
            fps_updated = true;
        }

        (steps, steps > 0 || fps_updated)
    }

    pub fn next_wakeup(&self) -> Instant {
        self.last_update + self.tick_dt
    }
}
