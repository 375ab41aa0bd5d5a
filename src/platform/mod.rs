//! Platform abstraction layer
//!
//! Host animation-frame callbacks arrive at whatever rate the browser
//! chooses; [`FrameClock`] turns their timestamps into fixed-rate frames.

/// Maximum frames released by a single callback
pub const MAX_FRAMES_PER_CALLBACK: u32 = 4;

/// Longest gap (seconds) counted between two callbacks
const MAX_ELAPSED_SECS: f64 = 0.25;

/// Fixed-rate frame gate driven by host timestamps (milliseconds)
#[derive(Debug, Clone)]
pub struct FrameClock {
    frame_secs: f64,
    accumulator: f64,
    last_time: Option<f64>,
}

impl FrameClock {
    pub fn new(frame_rate: u32) -> Self {
        Self {
            frame_secs: 1.0 / f64::from(frame_rate.max(1)),
            accumulator: 0.0,
            last_time: None,
        }
    }

    /// Number of frames due at host time `now_ms`.
    ///
    /// The very first call always yields one frame.
    pub fn advance(&mut self, now_ms: f64) -> u32 {
        let Some(last) = self.last_time.replace(now_ms) else {
            return 1;
        };

        let dt = ((now_ms - last) / 1000.0).clamp(0.0, MAX_ELAPSED_SECS);
        self.accumulator += dt;

        let mut frames = 0;
        while self.accumulator >= self.frame_secs && frames < MAX_FRAMES_PER_CALLBACK {
            self.accumulator -= self.frame_secs;
            frames += 1;
        }
        // Drop any backlog beyond the cap
        if frames == MAX_FRAMES_PER_CALLBACK {
            self.accumulator = self.accumulator.min(self.frame_secs);
        }
        frames
    }

    /// Forget timing history (the next call yields one frame again)
    pub fn reset(&mut self) {
        self.accumulator = 0.0;
        self.last_time = None;
    }
}
