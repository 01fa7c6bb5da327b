/// Cookie World: click for cookies, spend them on automatic production.

pub mod actions;
pub mod logic;
pub mod render;
pub mod state;
pub mod telemetry;
pub mod view;

use std::cell::RefCell;
use std::rc::Rc;

use ratzilla::ratatui::layout::Rect;
use ratzilla::ratatui::Frame;

use crate::games::Game;
use crate::input::{ClickState, InputEvent};

use actions::{BUY_UPGRADE_BASE, CLICK_COOKIE};
use state::{CookieState, CATALOG};
use telemetry::{NullSink, TelemetryEvent, TelemetrySink};

pub struct CookieGame {
    pub state: CookieState,
    telemetry: Box<dyn TelemetrySink>,
}

impl CookieGame {
    pub fn new() -> Self {
        Self::with_telemetry(Box::new(NullSink))
    }

    pub fn with_telemetry(telemetry: Box<dyn TelemetrySink>) -> Self {
        Self {
            state: CookieState::new(),
            telemetry,
        }
    }

    fn click(&mut self) {
        logic::click(&mut self.state);
        self.telemetry.record(&TelemetryEvent::Click);
    }

    fn buy_at(&mut self, index: usize) {
        if logic::buy_at(&mut self.state, index) {
            if let Some(upgrade) = CATALOG.get(index) {
                self.telemetry.record(&TelemetryEvent::UpgradePurchased {
                    item: upgrade.name.to_string(),
                });
            }
        }
    }
}

impl Game for CookieGame {
    fn handle_input(&mut self, event: &InputEvent) -> bool {
        match event {
            InputEvent::Key('c') | InputEvent::Key('C') | InputEvent::Key(' ') => {
                self.click();
                true
            }
            InputEvent::Key(k @ '1'..='9') => {
                let index = (*k as u8 - b'1') as usize;
                if index >= CATALOG.len() {
                    return false;
                }
                self.buy_at(index);
                true
            }
            InputEvent::Click(CLICK_COOKIE) => {
                self.click();
                true
            }
            InputEvent::Click(id) if *id >= BUY_UPGRADE_BASE => {
                let index = (*id - BUY_UPGRADE_BASE) as usize;
                if index >= CATALOG.len() {
                    return false;
                }
                self.buy_at(index);
                true
            }
            _ => false,
        }
    }

    fn tick(&mut self, delta_ticks: u32) {
        logic::tick(&mut self.state, delta_ticks);
    }

    fn render(&self, f: &mut Frame, area: Rect, click_state: &Rc<RefCell<ClickState>>) {
        render::render(&self.state, f, area, click_state);
    }
}
