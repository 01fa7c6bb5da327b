//! Fire-and-forget event tracking.
//!
//! A sink only observes; nothing it does can reach back into game state.

#[cfg(test)]
use std::cell::RefCell;

use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum TelemetryEvent {
    Click,
    UpgradePurchased { item: String },
}

pub trait TelemetrySink {
    fn record(&self, event: &TelemetryEvent);
}

/// Drops every event.
pub struct NullSink;

impl TelemetrySink for NullSink {
    fn record(&self, _event: &TelemetryEvent) {}
}

/// Writes each event as a JSON line to the browser console.
pub struct ConsoleSink;

impl TelemetrySink for ConsoleSink {
    fn record(&self, event: &TelemetryEvent) {
        let json = match serde_json::to_string(event) {
            Ok(j) => j,
            Err(_e) => {
                #[cfg(target_arch = "wasm32")]
                web_sys::console::warn_1(
                    &format!("Cookie World: telemetry serialisation failed: {_e}").into(),
                );
                return;
            }
        };
        #[cfg(target_arch = "wasm32")]
        web_sys::console::log_1(&format!("telemetry {json}").into());
        #[cfg(not(target_arch = "wasm32"))]
        let _ = json;
    }
}

/// Keeps events in memory, in order.
#[cfg(test)]
#[derive(Default)]
pub struct RecordingSink {
    events: RefCell<Vec<TelemetryEvent>>,
}

#[cfg(test)]
impl RecordingSink {
    pub fn events(&self) -> Vec<TelemetryEvent> {
        self.events.borrow().clone()
    }
}

#[cfg(test)]
impl TelemetrySink for RecordingSink {
    fn record(&self, event: &TelemetryEvent) {
        self.events.borrow_mut().push(event.clone());
    }
}

impl<T: TelemetrySink + ?Sized> TelemetrySink for std::rc::Rc<T> {
    fn record(&self, event: &TelemetryEvent) {
        (**self).record(event);
    }
}
