//! Frame pacing

use std::time::{Duration, Instant};

/// Sleeps so frames start no faster than a target rate.
///
/// Falling behind does not cause a burst of catch-up frames; the schedule
/// restarts from the current time.
#[derive(Debug, Clone)]
pub struct FrameLimiter {
    frame: Duration,
    next: Instant,
}

impl FrameLimiter {
    pub fn new(rate: u32) -> Self {
        Self {
            frame: Duration::from_secs_f64(1.0 / f64::from(rate.max(1))),
            next: Instant::now(),
        }
    }

    #[inline]
    pub fn frame_duration(&self) -> Duration {
        self.frame
    }

    /// Block until the next frame slot
    pub fn wait(&mut self) {
        let now = Instant::now();
        if self.next > now {
            std::thread::sleep(self.next - now);
            self.next += self.frame;
        } else {
            self.next = now + self.frame;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_duration() {
        let limiter = FrameLimiter::new(60);
        let ms = limiter.frame_duration().as_secs_f64() * 1000.0;
        assert!((ms - 16.666).abs() < 0.01);
        // Zero rate is treated as 1 Hz
        assert_eq!(FrameLimiter::new(0).frame_duration(), Duration::from_secs(1));
    }

    #[test]
    fn test_wait_paces_frames() {
        let mut limiter = FrameLimiter::new(100);
        let start = Instant::now();
        limiter.wait();
        limiter.wait();
        limiter.wait();
        assert!(start.elapsed() >= Duration::from_millis(20));
    }
}
