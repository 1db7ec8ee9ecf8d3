use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Presentation snapshot.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct FrameStats {
    /// Frames presented since the clock was created.
    pub frames: u64,

    /// Time between the two most recent presents.
    pub last_interval: Option<Duration>,

    /// Mean frame rate over the rolling window, once two frames exist.
    pub fps: Option<f32>,
}

/// Counts presented frames and measures the frame rate over a rolling window
/// of recent timestamps.
#[derive(Debug, Clone)]
pub struct FrameClock {
    recent: VecDeque<Instant>,
    window: usize,
    frames: u64,
}

impl FrameClock {
    /// Creates a clock averaging over the last 60 frames.
    pub fn new() -> Self {
        Self::with_window(60)
    }

    /// Creates a clock averaging over the last `window` frames (at least 2).
    pub fn with_window(window: usize) -> Self {
        debug_assert!(window >= 2, "a frame rate needs at least two timestamps");
        let window = window.max(2);
        Self {
            recent: VecDeque::with_capacity(window),
            window,
            frames: 0,
        }
    }

    /// Records a frame presented now.
    pub fn tick(&mut self) -> FrameStats {
        self.tick_at(Instant::now())
    }

    /// Records a frame presented at `now`.
    pub fn tick_at(&mut self, now: Instant) -> FrameStats {
        if self.recent.len() == self.window {
            self.recent.pop_front();
        }
        self.recent.push_back(now);
        self.frames = self.frames.wrapping_add(1);
        self.stats()
    }

    /// Current snapshot without recording a frame.
    pub fn stats(&self) -> FrameStats {
        let last_interval = match (self.recent.len(), self.recent.back()) {
            (n, Some(&last)) if n >= 2 => Some(last.saturating_duration_since(self.recent[n - 2])),
            _ => None,
        };

        let fps = match (self.recent.front(), self.recent.back()) {
            (Some(&first), Some(&last)) if self.recent.len() >= 2 => {
                let span = last.saturating_duration_since(first).as_secs_f32();
                (span > 0.0).then(|| (self.recent.len() - 1) as f32 / span)
            }
            _ => None,
        };

        FrameStats {
            frames: self.frames,
            last_interval,
            fps,
        }
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}
