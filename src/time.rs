//! Fixed-timestep production clock.
//!
//! `draw_web()` fires at roughly 60fps with a variable delta. `GameTime`
//! folds those frames into whole 100ms ticks with an accumulator, so the
//! production math only ever sees discrete ticks. The clock also carries the
//! session lifecycle: it yields nothing until started and nothing after it
//! has been stopped.

/// Production ticks per real-time second.
pub const TICKS_PER_SEC: u32 = 10;

/// Longest gap (ms) a single frame may contribute. A backgrounded tab
/// resumes with at most this much catch-up.
const MAX_FRAME_DELTA_MS: f64 = 500.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ClockState {
    Idle,
    Running,
    Stopped,
}

pub struct GameTime {
    ms_per_tick: f64,
    /// Milliseconds not yet consumed as ticks.
    accumulator: f64,
    pub total_ticks: u64,
    last_timestamp: Option<f64>,
    state: ClockState,
}

impl GameTime {
    pub fn new(ticks_per_sec: u32) -> Self {
        Self {
            ms_per_tick: 1000.0 / ticks_per_sec.max(1) as f64,
            accumulator: 0.0,
            total_ticks: 0,
            last_timestamp: None,
            state: ClockState::Idle,
        }
    }

    #[cfg(test)]
    pub fn state(&self) -> ClockState {
        self.state
    }

    /// Begin producing ticks. Returns false if the clock was already started
    /// or has been stopped; a stopped clock stays stopped.
    pub fn start(&mut self) -> bool {
        if self.state != ClockState::Idle {
            return false;
        }
        self.state = ClockState::Running;
        true
    }

    /// Stop the clock. Only the first call on a running clock returns true.
    pub fn stop(&mut self) -> bool {
        if self.state != ClockState::Running {
            return false;
        }
        self.state = ClockState::Stopped;
        self.accumulator = 0.0;
        self.last_timestamp = None;
        true
    }

    /// Feed a wall-clock timestamp (from `performance.now()`).
    /// Returns the number of whole ticks to apply this frame.
    pub fn update(&mut self, now_ms: f64) -> u32 {
        if self.state != ClockState::Running {
            return 0;
        }
        let delta = match self.last_timestamp {
            Some(prev) => (now_ms - prev).clamp(0.0, MAX_FRAME_DELTA_MS),
            None => 0.0,
        };
        self.last_timestamp = Some(now_ms);

        self.accumulator += delta;
        let ticks = (self.accumulator / self.ms_per_tick) as u32;
        self.accumulator -= ticks as f64 * self.ms_per_tick;
        self.total_ticks += ticks as u64;
        ticks
    }
}
