//! Frame loop bookkeeping that does not depend on the host's frame callback.

use instant::Instant;
use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

/// Shared stop flag for a repeating frame task.
///
/// Clones observe the same flag; the loop checks it before every tick and
/// tears itself down once it is set.
#[derive(Clone, Debug, Default)]
pub struct LoopHandle {
    cancelled: Rc<Cell<bool>>,
}

impl LoopHandle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.set(true);
    }

    #[inline]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.get()
    }
}

/// Counts frames and reports the average rate once per interval.
#[derive(Clone, Debug)]
pub struct FrameStats {
    interval: Duration,
    window_start: Instant,
    frames: u32,
    total_frames: u64,
}

impl FrameStats {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            window_start: Instant::now(),
            frames: 0,
            total_frames: 0,
        }
    }

    /// Record one frame; returns frames per second when a window closes.
    pub fn record(&mut self) -> Option<f32> {
        self.record_at(Instant::now())
    }

    pub fn record_at(&mut self, now: Instant) -> Option<f32> {
        self.frames += 1;
        self.total_frames += 1;
        let elapsed = if now > self.window_start {
            now - self.window_start
        } else {
            Duration::ZERO
        };
        if elapsed < self.interval {
            return None;
        }
        let fps = self.frames as f32 / elapsed.as_secs_f32().max(1e-3);
        self.frames = 0;
        self.window_start = now;
        Some(fps)
    }

    pub fn total_frames(&self) -> u64 {
        self.total_frames
    }
}
