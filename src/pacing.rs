use instant::Instant;
use std::time::Duration;

/// Fixed-rate frame scheduler for the event loop.
///
/// One simulation step runs per frame, so the pacer decides the animation
/// speed as well as the redraw rate.
#[derive(Clone, Debug)]
pub struct FramePacer {
    interval: Duration,
    next: Instant,
}

impl FramePacer {
    pub fn new(target_fps: u32, now: Instant) -> Self {
        Self {
            interval: Duration::from_secs(1) / target_fps.max(1),
            next: now,
        }
    }

    #[inline]
    pub fn due(&self, now: Instant) -> bool {
        now >= self.next
    }

    /// Schedule the next frame after one was produced at `now`. A late frame
    /// does not trigger catch-up frames.
    pub fn advance(&mut self, now: Instant) {
        self.next += self.interval;
        if self.next < now {
            self.next = now + self.interval;
        }
    }

    #[inline]
    pub fn deadline(&self) -> Instant {
        self.next
    }

    #[inline]
    pub fn interval(&self) -> Duration {
        self.interval
    }
}
