//! Fixed-rate frame pacing.

use std::time::{Duration, Instant};

/// Schedules redraws at a fixed frame rate.
///
/// The event loop waits for input at most until the next frame is due, so
/// input is handled as it arrives and the screen redraws once per frame.
#[derive(Debug, Clone)]
pub struct FrameClock {
    frame: Duration,
    next_frame: Instant,
}

impl FrameClock {
    /// Clock for `fps` frames per second, first frame due immediately.
    pub fn new(fps: u32, now: Instant) -> Self {
        Self {
            frame: frame_duration(fps),
            next_frame: now,
        }
    }

    pub fn frame_duration(&self) -> Duration {
        self.frame
    }

    /// Time left before the next frame is due.
    pub fn time_until_frame(&self, now: Instant) -> Duration {
        self.next_frame.saturating_duration_since(now)
    }

    pub fn frame_due(&self, now: Instant) -> bool {
        now >= self.next_frame
    }

    /// Record a drawn frame and schedule the next one.
    ///
    /// After a stall the schedule restarts from `now` instead of bursting to
    /// catch up on missed frames.
    pub fn frame_drawn(&mut self, now: Instant) {
        self.next_frame += self.frame;
        if self.next_frame < now {
            self.next_frame = now + self.frame;
        }
    }
}

fn frame_duration(fps: u32) -> Duration {
    Duration::from_secs(1) / fps.max(1)
}
