//! Frame output abstraction for the display emulator.
//!
//! The `FrameConsole` trait receives rendered frames and works identically
//! for testing (HeadlessConsole) and real terminals (StdoutConsole).

use std::io::Write;

use crate::image::Image;

/// Sink for rendered display frames.
pub trait FrameConsole: Send {
    /// Write one frame (7 lines, each terminated by `\n`).
    fn write_frame(&mut self, frame: &Image);
}

/// Console that prints frames to stdout.
#[derive(Debug, Default)]
pub struct StdoutConsole {
    frame_gap: bool,
}

impl StdoutConsole {
    pub fn new() -> Self {
        Self::default()
    }

    /// Print an empty line after every frame.
    pub fn with_frame_gap(mut self, gap: bool) -> Self {
        self.frame_gap = gap;
        self
    }
}

impl FrameConsole for StdoutConsole {
    fn write_frame(&mut self, frame: &Image) {
        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        let _ = writeln!(handle, "{frame}");
        if self.frame_gap {
            let _ = writeln!(handle);
        }
        let _ = handle.flush();
    }
}

/// Headless console for testing - captures frames and their text.
#[derive(Debug, Default)]
pub struct HeadlessConsole {
    frames: Vec<Image>,
    output: String,
}

impl HeadlessConsole {
    pub fn new() -> Self {
        Self::default()
    }

    /// Frames written so far, oldest first.
    pub fn frames(&self) -> &[Image] {
        &self.frames
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Exact text a terminal would have received.
    pub fn output_string(&self) -> &str {
        &self.output
    }

    /// Clear captured frames and text.
    pub fn clear_output(&mut self) {
        self.frames.clear();
        self.output.clear();
    }
}

impl FrameConsole for HeadlessConsole {
    fn write_frame(&mut self, frame: &Image) {
        self.frames.push(*frame);
        self.output.push_str(&frame.to_string());
        self.output.push('\n');
    }
}
