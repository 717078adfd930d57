use game_core::Params;

/// Simulated wall clock advancing one frame per call at a fixed rate.
///
/// Milliseconds are derived from the frame count, so a 60 Hz clock alternates
/// 16 and 17 ms steps without drifting.
#[derive(Debug, Clone, Copy)]
pub struct SimClock {
    frames: u64,
    hz: u64,
}

impl SimClock {
    pub fn new(hz: u32) -> Self {
        Self {
            frames: 0,
            hz: u64::from(hz.max(1)),
        }
    }

    pub fn now_ms(&self) -> u64 {
        self.frames * 1000 / self.hz
    }

    /// Step one frame and return the new time.
    pub fn advance(&mut self) -> u64 {
        self.frames += 1;
        self.now_ms()
    }
}

impl Default for SimClock {
    fn default() -> Self {
        Self::new(Params::TICK_RATE_HZ)
    }
}
