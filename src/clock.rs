//! Play/pause animation clock and frame statistics.
//!
//! Nothing here reads a wall clock; callers pass `now` in milliseconds, which
//! keeps both types testable without real delays.

/// Source of wall-clock milliseconds.
pub trait TimeSource {
    fn now_millis(&self) -> i64;
}

impl<F: Fn() -> i64> TimeSource for F {
    fn now_millis(&self) -> i64 {
        self()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayState {
    Playing,
    Paused,
}

#[derive(Clone, Debug)]
pub struct AnimationClock {
    state: PlayState,
    elapsed: f64,
    origin_millis: i64,
}

impl AnimationClock {
    pub fn new(now_millis: i64) -> Self {
        Self {
            state: PlayState::Playing,
            elapsed: 0.0,
            origin_millis: now_millis,
        }
    }

    pub fn state(&self) -> PlayState {
        self.state
    }

    pub fn is_playing(&self) -> bool {
        self.state == PlayState::Playing
    }

    /// Seconds since the origin, frozen while paused.
    pub fn elapsed_seconds(&self) -> f64 {
        self.elapsed
    }

    pub fn tick(&mut self, now_millis: i64) {
        if self.is_playing() {
            self.elapsed = (now_millis - self.origin_millis) as f64 / 1000.0;
        }
    }

    pub fn toggle_play(&mut self, now_millis: i64) -> PlayState {
        self.state = match self.state {
            PlayState::Playing => PlayState::Paused,
            PlayState::Paused => {
                // Rebase so elapsed time resumes exactly where it froze.
                self.origin_millis = now_millis - (self.elapsed * 1000.0).round() as i64;
                PlayState::Playing
            }
        };
        self.state
    }

    pub fn reset(&mut self, now_millis: i64) {
        self.elapsed = 0.0;
        self.origin_millis = now_millis;
    }
}

/// Counts rendered frames and publishes a frames-per-second figure once a
/// second.
#[derive(Clone, Debug)]
pub struct FrameStats {
    frames: u32,
    fps: u32,
    last_update_millis: i64,
}

impl FrameStats {
    pub fn new(now_millis: i64) -> Self {
        Self {
            frames: 0,
            fps: 0,
            last_update_millis: now_millis,
        }
    }

    /// Record one frame; returns the new figure when it was refreshed.
    pub fn record(&mut self, now_millis: i64) -> Option<u32> {
        self.frames += 1;
        if now_millis - self.last_update_millis >= 1000 {
            self.fps = self.frames;
            self.frames = 0;
            self.last_update_millis = now_millis;
            Some(self.fps)
        } else {
            None
        }
    }

    pub fn fps(&self) -> u32 {
        self.fps
    }
}

/// Format elapsed seconds the way the time counter shows them, e.g. `3.25s`.
pub fn elapsed_label(seconds: f64) -> String {
    format!("{seconds:.2}s")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fps_refreshes_after_one_second() {
        let mut stats = FrameStats::new(0);
        for i in 1..60 {
            assert_eq!(stats.record(i * 16), None);
        }
        assert_eq!(stats.record(1000), Some(60));
        assert_eq!(stats.fps(), 60);
        assert_eq!(stats.record(1016), None);
    }

    #[test]
    fn label_has_two_decimals() {
        assert_eq!(elapsed_label(0.0), "0.00s");
        assert_eq!(elapsed_label(12.345_6), "12.35s");
    }
}
