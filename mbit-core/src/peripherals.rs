//! Buttons, pins, accelerometer and compass.
//!
//! These are thin views over [`StateStore`]: every reading comes from the
//! store and every write goes through it. Quantities the store does not
//! model (gestures, heading, field strength) are random.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::{MbitError, MbitResult};
use crate::state::{Field, StateStore};

/// Largest analog pin value.
pub const ANALOG_MAX: i64 = 1023;

/// Gestures the accelerometer can report. The empty string is "no gesture".
pub const GESTURES: [&str; 11] = [
    "", "up", "down", "left", "face up", "face down", "freefall", "3g", "6g", "8g", "shake",
];

/// Button A or B.
#[derive(Debug, Clone)]
pub struct Button {
    field: Field,
    presses: Field,
    last_presses: i64,
}

impl Button {
    /// `name` is `button_a` or `button_b` (any case).
    pub fn new(name: &str) -> MbitResult<Self> {
        let field: Field = name
            .parse()
            .map_err(|_| MbitError::UnknownButton(name.to_string()))?;
        let presses = field
            .presses()
            .ok_or_else(|| MbitError::UnknownButton(name.to_string()))?;
        Ok(Self {
            field,
            presses,
            last_presses: 0,
        })
    }

    pub fn a() -> Self {
        Self {
            field: Field::BUTTON_A,
            presses: Field::BUTTON_A_PRESSES,
            last_presses: 0,
        }
    }

    pub fn b() -> Self {
        Self {
            field: Field::BUTTON_B,
            presses: Field::BUTTON_B_PRESSES,
            last_presses: 0,
        }
    }

    pub fn name(&self) -> &'static str {
        self.field.name()
    }

    /// True while the button is held down.
    pub fn is_pressed(&self, state: &StateStore) -> bool {
        state.int(self.field) > 0
    }

    /// True if the press count grew since the previous call.
    pub fn was_pressed(&mut self, state: &StateStore) -> bool {
        let previous = self.last_presses;
        self.last_presses = self.get_presses(state);
        self.last_presses > previous
    }

    /// Running total of presses.
    pub fn get_presses(&self, state: &StateStore) -> i64 {
        state.int(self.presses)
    }

    pub fn reset_presses(&mut self, state: &mut StateStore) -> MbitResult<()> {
        self.last_presses = 0;
        state.set_field(self.presses, 0)
    }
}

/// An edge-connector pin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pin {
    number: u8,
    field: Field,
}

impl Pin {
    /// Pins 0-16, 19 and 20 exist.
    pub fn new(number: u8) -> MbitResult<Self> {
        let field = Field::pin(number).ok_or(MbitError::UnknownPin(number))?;
        Ok(Self { number, field })
    }

    pub fn number(&self) -> u8 {
        self.number
    }

    /// Write 0 or 1.
    pub fn write_digital(&self, state: &mut StateStore, value: i64) -> MbitResult<()> {
        if !(0..=1).contains(&value) {
            return Err(MbitError::PinValue(value));
        }
        state.set_field(self.field, value)
    }

    /// 1 if the pin is high, else 0.
    pub fn read_digital(&self, state: &StateStore) -> i64 {
        i64::from(state.int(self.field) != 0)
    }

    /// Write a value in `0..=ANALOG_MAX`.
    pub fn write_analog(&self, state: &mut StateStore, value: i64) -> MbitResult<()> {
        if !(0..=ANALOG_MAX).contains(&value) {
            return Err(MbitError::PinValue(value));
        }
        state.set_field(self.field, value)
    }

    pub fn read_analog(&self, state: &StateStore) -> i64 {
        state.int(self.field)
    }

    pub fn is_touched(&self, state: &StateStore) -> bool {
        state.int(self.field) > 0
    }

    /// PWM is not emulated.
    pub fn set_analog_period(&self, _period_ms: u32) {}

    /// PWM is not emulated.
    pub fn set_analog_period_microseconds(&self, _period_us: u32) {}
}

/// Three-axis accelerometer.
#[derive(Debug, Default, Clone, Copy)]
pub struct Accelerometer;

impl Accelerometer {
    /// X axis in milli-g.
    pub fn get_x(&self, state: &StateStore) -> i64 {
        state.int(Field::ACCELEROMETER_X)
    }

    pub fn get_y(&self, state: &StateStore) -> i64 {
        state.int(Field::ACCELEROMETER_Y)
    }

    pub fn get_z(&self, state: &StateStore) -> i64 {
        state.int(Field::ACCELEROMETER_Z)
    }

    pub fn get_values(&self, state: &StateStore) -> (i64, i64, i64) {
        (self.get_x(state), self.get_y(state), self.get_z(state))
    }

    /// A random gesture.
    pub fn current_gesture(&self) -> &'static str {
        GESTURES.choose(&mut rand::thread_rng()).copied().unwrap_or("")
    }

    /// A random, non-empty sample of gestures.
    pub fn get_gestures(&self) -> Vec<&'static str> {
        let mut rng = rand::thread_rng();
        let count = rng.gen_range(1..=GESTURES.len());
        GESTURES.choose_multiple(&mut rng, count).copied().collect()
    }

    pub fn is_gesture(&self, name: &str) -> bool {
        self.get_gestures().contains(&name)
    }

    pub fn was_gesture(&self, name: &str) -> bool {
        self.is_gesture(name)
    }

    /// No gesture history is kept.
    pub fn reset_gestures(&self) {}
}

/// Magnetometer. Readings are random; only calibration is tracked.
#[derive(Debug, Default, Clone)]
pub struct Compass {
    calibrated: bool,
}

impl Compass {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calibrate(&mut self) {
        self.calibrated = true;
    }

    pub fn is_calibrated(&self) -> bool {
        self.calibrated
    }

    pub fn clear_calibration(&mut self) {
        self.calibrated = false;
    }

    /// Degrees clockwise from north, `0..360`.
    pub fn heading(&self) -> u16 {
        rand::thread_rng().gen_range(0..360)
    }

    /// Field strength, `-1000..=1000`.
    pub fn get_field_strength(&self) -> i32 {
        rand::thread_rng().gen_range(-1000..=1000)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> (tempfile::TempDir, StateStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = StateStore::open(dir.path().join("state.json").to_string_lossy());
        (dir, store)
    }

    #[test]
    fn test_button_names() {
        assert_eq!(Button::new("button_a").unwrap().name(), "button_a");
        assert_eq!(Button::new("BUTTON_B").unwrap().name(), "button_b");
        assert!(matches!(Button::new("pin0"), Err(MbitError::UnknownButton(_))));
        assert!(matches!(Button::new("button_c"), Err(MbitError::UnknownButton(_))));
    }

    #[test]
    fn test_is_pressed() {
        let (_dir, mut state) = store();
        let button = Button::a();
        assert!(!button.is_pressed(&state));
        state.press("button_a").unwrap();
        assert!(button.is_pressed(&state));
        assert!(!Button::b().is_pressed(&state));
    }

    #[test]
    fn test_was_pressed() {
        let (_dir, mut state) = store();
        let mut button = Button::b();
        assert!(!button.was_pressed(&state));

        state.press("button_b").unwrap();
        state.release("button_b").unwrap();
        assert!(button.was_pressed(&state));
        assert!(!button.was_pressed(&state));
        assert_eq!(button.get_presses(&state), 1);
    }

    #[test]
    fn test_reset_presses() {
        let (_dir, mut state) = store();
        let mut button = Button::a();
        state.press("button_a").unwrap();
        state.press("button_a").unwrap();
        assert_eq!(button.get_presses(&state), 2);

        button.reset_presses(&mut state).unwrap();
        assert_eq!(button.get_presses(&state), 0);
        assert!(!button.was_pressed(&state));
    }

    #[test]
    fn test_pin_numbers() {
        assert!(Pin::new(0).is_ok());
        assert!(Pin::new(20).is_ok());
        assert!(matches!(Pin::new(17), Err(MbitError::UnknownPin(17))));
    }

    #[test]
    fn test_digital() {
        let (_dir, mut state) = store();
        let pin = Pin::new(5).unwrap();
        assert_eq!(pin.read_digital(&state), 0);
        pin.write_digital(&mut state, 1).unwrap();
        assert_eq!(pin.read_digital(&state), 1);
        assert!(matches!(
            pin.write_digital(&mut state, 2),
            Err(MbitError::PinValue(2))
        ));
    }

    #[test]
    fn test_analog() {
        let (_dir, mut state) = store();
        let pin = Pin::new(19).unwrap();
        pin.write_analog(&mut state, 700).unwrap();
        assert_eq!(pin.read_analog(&state), 700);
        assert_eq!(pin.read_digital(&state), 1);
        assert!(pin.is_touched(&state));
        assert!(pin.write_analog(&mut state, 1024).is_err());
        assert!(pin.write_analog(&mut state, -1).is_err());
        assert_eq!(pin.read_analog(&state), 700);
    }

    #[test]
    fn test_accelerometer_reads_state() {
        let (_dir, mut state) = store();
        state.set("accelerometer_x", -200).unwrap();
        state.set("accelerometer_z", 1024).unwrap();
        assert_eq!(Accelerometer.get_values(&state), (-200, 0, 1024));
    }

    #[test]
    fn test_gestures() {
        let accelerometer = Accelerometer;
        assert!(GESTURES.contains(&accelerometer.current_gesture()));
        let sample = accelerometer.get_gestures();
        assert!(!sample.is_empty() && sample.len() <= GESTURES.len());
        assert!(sample.iter().all(|g| GESTURES.contains(g)));
        assert!(!accelerometer.is_gesture("juggle"));
    }

    #[test]
    fn test_compass() {
        let mut compass = Compass::new();
        assert!(!compass.is_calibrated());
        compass.calibrate();
        assert!(compass.is_calibrated());
        compass.clear_calibration();
        assert!(!compass.is_calibrated());

        assert!(compass.heading() < 360);
        assert!((-1000..=1000).contains(&compass.get_field_strength()));
    }
}
