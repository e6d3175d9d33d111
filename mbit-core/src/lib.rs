//! BBC micro:bit Emulator Core
//!
//! This crate runs micro:bit programs on a desktop:
//! - 5x5 LED images, built-in pictures and the character font
//! - A display engine that renders frames as bordered text
//! - A device-state store persisted to (and chained across) JSON files
//! - Buttons, pins, accelerometer and compass on top of the store
//!
//! # Architecture
//!
//! The display and the state store are independent:
//! - `FrameConsole` trait: where rendered frames go
//! - `DisplayEngine`: show/scroll/clear as cooperative animations
//! - `StateStore`: fail-silent, reload-before-write persistence
//! - `MicroBit`: owns one of each plus the peripherals and the
//!   sleep/reset/panic functions

pub mod console;
pub mod device;
pub mod display;
pub mod error;
pub mod image;
pub mod peripherals;
pub mod state;

pub use console::{FrameConsole, HeadlessConsole, StdoutConsole};
pub use device::MicroBit;
pub use display::{
    Animation, DisplayEngine, FrameBudget, Never, Pacing, ShowOptions, Showable, StopSignal,
};
pub use error::{MbitError, MbitResult};
pub use image::{glyph_for_character, Image};
pub use peripherals::{Accelerometer, Button, Compass, Pin};
pub use state::{Field, StateStore, StateValue, DEFAULT_STATE_FILE};
