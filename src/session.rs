//! One play session: a game plus the production clock that drives it.
//!
//! The clock is started when the session is created and stopped exactly once
//! when the session ends, either by a confirmed restart or by being dropped.

use crate::games::Game;
use crate::input::InputEvent;
use crate::time::{GameTime, TICKS_PER_SEC};

/// A restart must be confirmed by a second request within this window.
pub const RESTART_CONFIRM_MS: f64 = 3_000.0;

pub struct Session {
    pub game: Box<dyn Game>,
    clock: GameTime,
    /// Bumped on every restart.
    pub generation: u32,
    /// When the first restart request arrived, if it is still awaiting confirmation.
    restart_armed_at: Option<f64>,
}

impl Session {
    pub fn new(game: Box<dyn Game>) -> Self {
        Self::start(game, 0)
    }

    fn start(game: Box<dyn Game>, generation: u32) -> Self {
        let mut clock = GameTime::new(TICKS_PER_SEC);
        clock.start();
        #[cfg(target_arch = "wasm32")]
        web_sys::console::log_1(&format!("Cookie World: session {generation} started").into());
        Self {
            game,
            clock,
            generation,
            restart_armed_at: None,
        }
    }

    /// Feed the frame timestamp, apply the elapsed ticks, return how many.
    pub fn advance(&mut self, now_ms: f64) -> u32 {
        let ticks = self.clock.update(now_ms);
        if ticks > 0 {
            self.game.tick(ticks);
        }
        ticks
    }

    #[cfg(test)]
    pub fn clock(&self) -> &GameTime {
        &self.clock
    }

    /// True while a first restart request is waiting for its confirmation.
    pub fn restart_pending(&self, now_ms: f64) -> bool {
        self.restart_armed_at
            .is_some_and(|armed| now_ms - armed <= RESTART_CONFIRM_MS)
    }

    /// Ask for a restart. The first request only arms it; a second one within
    /// `RESTART_CONFIRM_MS` replaces the session. Returns true on restart.
    pub fn request_restart(&mut self, now_ms: f64, new_game: impl FnOnce() -> Box<dyn Game>) -> bool {
        if self.restart_pending(now_ms) {
            self.restart(new_game());
            return true;
        }
        self.restart_armed_at = Some(now_ms);
        false
    }

    /// Route a key press: `r`/`R` requests a restart, anything else goes to the game.
    pub fn handle_key(
        &mut self,
        key: char,
        now_ms: f64,
        new_game: impl FnOnce() -> Box<dyn Game>,
    ) -> bool {
        match key {
            'r' | 'R' => {
                self.request_restart(now_ms, new_game);
                true
            }
            c => self.game.handle_input(&InputEvent::Key(c)),
        }
    }

    /// End this session and begin a fresh one with `game`.
    fn restart(&mut self, game: Box<dyn Game>) {
        let next = Self::start(game, self.generation + 1);
        // Dropping the old session stops its clock.
        drop(std::mem::replace(self, next));
    }

    fn end(&mut self) {
        if self.clock.stop() {
            #[cfg(target_arch = "wasm32")]
            web_sys::console::log_1(
                &format!(
                    "Cookie World: session {} stopped after {} ticks",
                    self.generation, self.clock.total_ticks
                )
                .into(),
            );
        }
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        self.end();
    }
}
