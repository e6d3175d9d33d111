//! The emulated board: one display, one state store and the peripherals
//! that read it.

use std::thread;
use std::time::Duration;

use rand::Rng;

use crate::console::FrameConsole;
use crate::display::{DisplayEngine, Pacing};
use crate::error::MbitResult;
use crate::image::Image;
use crate::peripherals::{Accelerometer, Button, Compass, Pin};
use crate::state::StateStore;

/// Upper bound of the drift added by each `running_time` call.
const RUNTIME_DRIFT_MAX_MS: u64 = 100;

/// A micro:bit.
///
/// Constructed once by the program entry point and passed to whatever code
/// needs it. The display follows the store's `power` field: it is synced on
/// construction, after every sleep and by `power_on`/`power_off`.
pub struct MicroBit<C: FrameConsole> {
    pub display: DisplayEngine<C>,
    pub state: StateStore,
    pub button_a: Button,
    pub button_b: Button,
    pub accelerometer: Accelerometer,
    pub compass: Compass,
    running_time_ms: u64,
}

impl<C: FrameConsole> MicroBit<C> {
    pub fn new(display: DisplayEngine<C>, state: StateStore) -> Self {
        let mut device = Self {
            display,
            state,
            button_a: Button::a(),
            button_b: Button::b(),
            accelerometer: Accelerometer,
            compass: Compass::new(),
            running_time_ms: 0,
        };
        device.sync_power();
        device
    }

    /// Edge-connector pin `number`.
    pub fn pin(&self, number: u8) -> MbitResult<Pin> {
        Pin::new(number)
    }

    /// Sleep, then reload state so changes made by other processes show up.
    pub fn sleep(&mut self, ms: u64) {
        if ms > 0 {
            if self.display.pacing() == Pacing::RealTime {
                thread::sleep(Duration::from_millis(ms));
            }
            self.running_time_ms = self.running_time_ms.saturating_add(ms);
        }
        self.state.load();
        self.sync_power();
    }

    /// Milliseconds since power on. Each call adds a little random drift.
    pub fn running_time(&mut self) -> u64 {
        let drift = rand::thread_rng().gen_range(1..=RUNTIME_DRIFT_MAX_MS);
        self.running_time_ms = self.running_time_ms.saturating_add(drift);
        self.running_time_ms
    }

    /// Show SAD, the error code, SAD, the code and SAD again.
    pub fn panic(&mut self, error_code: i64) {
        tracing::debug!(error_code, "panic");
        let code = error_code.to_string();
        for _ in 0..2 {
            self.display.show(Image::SAD);
            self.display.show(code.as_str());
        }
        self.display.show(Image::SAD);
    }

    /// Zero the press counters, clear the display and reset all state.
    pub fn reset(&mut self) -> MbitResult<()> {
        self.button_a.reset_presses(&mut self.state)?;
        self.button_b.reset_presses(&mut self.state)?;
        self.display.clear();
        self.state.reset();
        self.sync_power();
        Ok(())
    }

    pub fn power_on(&mut self) -> MbitResult<()> {
        self.state.power_on()?;
        self.sync_power();
        Ok(())
    }

    /// Silence the display. The program keeps running.
    pub fn power_off(&mut self) -> MbitResult<()> {
        self.running_time_ms = 0;
        self.state.power_off()?;
        self.sync_power();
        Ok(())
    }

    fn sync_power(&mut self) {
        self.display.set_power(self.state.is_on());
    }
}
