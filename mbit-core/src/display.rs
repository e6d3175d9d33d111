//! LED display emulation.
//!
//! `DisplayEngine` turns images and text into frames and writes them to a
//! [`FrameConsole`]. Animations are cooperative: the engine emits one frame
//! per [`DisplayEngine::tick`] and checks a [`StopSignal`] between frames
//! while running to completion. Nothing runs in the background.

use std::thread;
use std::time::Duration;

use crate::console::FrameConsole;
use crate::image::{glyph_for_character, Column, Image, HEIGHT, WIDTH};

/// Default pause before a shown image.
pub const IMAGE_DELAY: Duration = Duration::ZERO;
/// Default pause before each character of shown text.
pub const TEXT_DELAY: Duration = Duration::from_millis(400);
/// Default pause before each column step of scrolled text.
pub const SCROLL_DELAY: Duration = Duration::from_millis(150);

/// Something `show` can put on the display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Showable {
    Image(Image),
    Text(String),
    /// One frame per image, in order.
    Images(Vec<Image>),
}

impl From<Image> for Showable {
    fn from(image: Image) -> Self {
        Showable::Image(image)
    }
}

impl From<&[Image]> for Showable {
    fn from(images: &[Image]) -> Self {
        Showable::Images(images.to_vec())
    }
}

impl<const N: usize> From<[Image; N]> for Showable {
    fn from(images: [Image; N]) -> Self {
        Showable::Images(images.to_vec())
    }
}

impl From<Vec<Image>> for Showable {
    fn from(images: Vec<Image>) -> Self {
        Showable::Images(images)
    }
}

impl From<&str> for Showable {
    fn from(text: &str) -> Self {
        Showable::Text(text.to_string())
    }
}

impl From<String> for Showable {
    fn from(text: String) -> Self {
        Showable::Text(text)
    }
}

/// Whether frame delays actually sleep.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Pacing {
    #[default]
    RealTime,
    /// Skip all sleeping. Frame order and counts are unchanged.
    Instant,
}

/// Options shared by `show` and `scroll`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShowOptions {
    /// Repeat until the stop signal fires.
    pub looping: bool,
    /// Block until the animation completes. When false, only the first
    /// frame is emitted and the pending animation is handed back.
    pub wait: bool,
    /// Pause before each frame. `None` uses the per-operation default.
    pub delay: Option<Duration>,
    /// Blank the display once the animation completes.
    pub clear: bool,
}

impl Default for ShowOptions {
    fn default() -> Self {
        Self {
            looping: false,
            wait: true,
            delay: None,
            clear: false,
        }
    }
}

impl ShowOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_loop(mut self, looping: bool) -> Self {
        self.looping = looping;
        self
    }

    pub fn with_wait(mut self, wait: bool) -> Self {
        self.wait = wait;
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn with_clear(mut self, clear: bool) -> Self {
        self.clear = clear;
        self
    }
}

/// Cancellation check consulted after every emitted frame.
pub trait StopSignal {
    fn should_stop(&mut self) -> bool;

    /// Checked once before the first frame of a run. A spent signal
    /// emits nothing.
    fn is_spent(&self) -> bool {
        false
    }
}

impl<F: FnMut() -> bool> StopSignal for F {
    fn should_stop(&mut self) -> bool {
        self()
    }
}

/// Never stops. A looping animation run with this never returns.
#[derive(Debug, Default, Clone, Copy)]
pub struct Never;

impl StopSignal for Never {
    fn should_stop(&mut self) -> bool {
        false
    }
}

/// Stops after a fixed number of frames.
#[derive(Debug, Clone, Copy)]
pub struct FrameBudget {
    remaining: usize,
}

impl FrameBudget {
    pub fn new(frames: usize) -> Self {
        Self { remaining: frames }
    }
}

impl StopSignal for FrameBudget {
    fn should_stop(&mut self) -> bool {
        self.remaining = self.remaining.saturating_sub(1);
        self.remaining == 0
    }

    fn is_spent(&self) -> bool {
        self.remaining == 0
    }
}

#[derive(Debug, Clone)]
enum Source {
    /// Precomputed frames for `show`.
    Frames(Vec<Image>),
    /// Columns swept by a 5-wide viewport for `scroll`.
    Ribbon(Vec<Column>),
}

impl Source {
    fn len(&self) -> usize {
        match self {
            Source::Frames(frames) => frames.len(),
            Source::Ribbon(columns) => (columns.len() + 1).saturating_sub(WIDTH),
        }
    }

    fn frame(&self, index: usize) -> Image {
        match self {
            Source::Frames(frames) => frames[index],
            Source::Ribbon(columns) => Image::from_columns(&columns[index..index + WIDTH]),
        }
    }
}

/// A lazily rendered frame sequence.
///
/// Iterating yields the raw frames (forever, if looping). Driving it
/// through [`DisplayEngine::tick`] also applies delays, power and the
/// trailing clear.
#[derive(Debug, Clone)]
pub struct Animation {
    source: Source,
    cursor: usize,
    looping: bool,
    delay: Duration,
    clear_pending: bool,
}

impl Animation {
    fn new(source: Source, options: &ShowOptions, default_delay: Duration) -> Self {
        let clear_pending = options.clear && source.len() > 0;
        Self {
            source,
            cursor: 0,
            looping: options.looping,
            delay: options.delay.unwrap_or(default_delay),
            clear_pending,
        }
    }

    /// Animation for `show`. Adjacent repeated characters share one frame.
    pub fn show(value: &Showable, options: &ShowOptions) -> Self {
        match value {
            Showable::Image(image) => Self::new(Source::Frames(vec![*image]), options, IMAGE_DELAY),
            Showable::Text(text) => Self::new(Source::Frames(text_frames(text)), options, TEXT_DELAY),
            Showable::Images(images) => Self::new(Source::Frames(images.clone()), options, TEXT_DELAY),
        }
    }

    /// Animation for `scroll`. Every character gets its own glyph.
    pub fn scroll(text: &str, options: &ShowOptions) -> Self {
        Self::new(Source::Ribbon(ribbon(text)), options, SCROLL_DELAY)
    }

    /// Frames in one pass, excluding any trailing clear.
    pub fn frame_count(&self) -> usize {
        self.source.len()
    }

    pub fn is_looping(&self) -> bool {
        self.looping
    }

    /// True once every frame (and the trailing clear) has been emitted.
    pub fn is_finished(&self) -> bool {
        let len = self.source.len();
        !self.clear_pending && (len == 0 || (!self.looping && self.cursor >= len))
    }
}

impl Iterator for Animation {
    type Item = Image;

    fn next(&mut self) -> Option<Image> {
        let len = self.source.len();
        if len == 0 {
            return None;
        }
        if self.cursor >= len {
            if !self.looping {
                return None;
            }
            self.cursor = 0;
        }
        let frame = self.source.frame(self.cursor);
        self.cursor += 1;
        Some(frame)
    }
}

/// One frame per character, superimposing runs of the same character.
///
/// The device redraws nothing when the next character is the one already
/// lit, so "aa" appears as a single frame.
fn text_frames(text: &str) -> Vec<Image> {
    let mut frames: Vec<Image> = Vec::new();
    let mut previous = None;
    for ch in text.chars() {
        let glyph = glyph_for_character(ch);
        match frames.last_mut() {
            Some(last) if previous == Some(ch) => *last = last.overlay(&glyph),
            _ => frames.push(glyph),
        }
        previous = Some(ch);
    }
    frames
}

/// Blank lead-in, glyphs separated by one blank column, blank lead-out.
fn ribbon(text: &str) -> Vec<Column> {
    if text.is_empty() {
        return Vec::new();
    }

    let blank: Column = [0; HEIGHT];
    let mut columns = vec![blank; WIDTH];
    for (i, ch) in text.chars().enumerate() {
        if i > 0 {
            columns.push(blank);
        }
        let glyph = glyph_for_character(ch);
        columns.extend((0..WIDTH).map(|col| glyph.column(col)));
    }
    columns.extend(std::iter::repeat(blank).take(WIDTH));
    columns
}

/// The emulated 5x5 LED display.
pub struct DisplayEngine<C: FrameConsole> {
    console: C,
    powered: bool,
    pacing: Pacing,
}

impl<C: FrameConsole> DisplayEngine<C> {
    /// Create a powered-on display writing to `console`.
    pub fn new(console: C) -> Self {
        Self {
            console,
            powered: true,
            pacing: Pacing::RealTime,
        }
    }

    pub fn with_pacing(mut self, pacing: Pacing) -> Self {
        self.pacing = pacing;
        self
    }

    pub fn pacing(&self) -> Pacing {
        self.pacing
    }

    /// Get console reference.
    pub fn console(&self) -> &C {
        &self.console
    }

    /// Get mutable console reference.
    pub fn console_mut(&mut self) -> &mut C {
        &mut self.console
    }

    pub fn on(&mut self) {
        self.powered = true;
    }

    pub fn off(&mut self) {
        self.powered = false;
    }

    pub fn set_power(&mut self, on: bool) {
        self.powered = on;
    }

    pub fn is_on(&self) -> bool {
        self.powered
    }

    /// Show an image or text with default options.
    pub fn show(&mut self, value: impl Into<Showable>) -> Animation {
        self.show_with(value, ShowOptions::default(), &mut Never)
    }

    /// Show an image or text.
    ///
    /// Returns the animation, finished unless `options.wait` is false or a
    /// looping run was stopped.
    pub fn show_with<S: StopSignal + ?Sized>(
        &mut self,
        value: impl Into<Showable>,
        options: ShowOptions,
        stop: &mut S,
    ) -> Animation {
        let animation = Animation::show(&value.into(), &options);
        tracing::debug!(
            frames = animation.frame_count(),
            looping = options.looping,
            wait = options.wait,
            "show"
        );
        self.start(animation, &options, stop)
    }

    /// Scroll text with default options.
    pub fn scroll(&mut self, text: &str) -> Animation {
        self.scroll_with(text, ShowOptions::default(), &mut Never)
    }

    /// Scroll text one pixel column per frame.
    pub fn scroll_with<S: StopSignal + ?Sized>(
        &mut self,
        text: &str,
        options: ShowOptions,
        stop: &mut S,
    ) -> Animation {
        let animation = Animation::scroll(text, &options);
        tracing::debug!(
            frames = animation.frame_count(),
            looping = options.looping,
            wait = options.wait,
            "scroll"
        );
        self.start(animation, &options, stop)
    }

    /// Blank the display.
    pub fn clear(&mut self) {
        self.emit(&Image::BLANK);
    }

    /// Emit the next frame of `animation`. Returns false once exhausted.
    pub fn tick(&mut self, animation: &mut Animation) -> bool {
        if let Some(frame) = animation.next() {
            self.pause(animation.delay);
            self.emit(&frame);
            return true;
        }
        if std::mem::take(&mut animation.clear_pending) {
            self.emit(&Image::BLANK);
            return true;
        }
        false
    }

    /// Emit frames until the animation is exhausted or `stop` fires.
    /// Returns the number of frames emitted (including suppressed ones).
    pub fn run<S: StopSignal + ?Sized>(&mut self, animation: &mut Animation, stop: &mut S) -> usize {
        if stop.is_spent() {
            return 0;
        }
        let mut emitted = 0;
        while self.tick(animation) {
            emitted += 1;
            if stop.should_stop() {
                tracing::debug!(emitted, "animation stopped");
                break;
            }
        }
        emitted
    }

    fn start<S: StopSignal + ?Sized>(
        &mut self,
        mut animation: Animation,
        options: &ShowOptions,
        stop: &mut S,
    ) -> Animation {
        if options.wait {
            self.run(&mut animation, stop);
        } else {
            self.tick(&mut animation);
        }
        animation
    }

    fn pause(&self, delay: Duration) {
        if self.pacing == Pacing::RealTime && !delay.is_zero() {
            thread::sleep(delay);
        }
    }

    fn emit(&mut self, frame: &Image) {
        if self.powered {
            self.console.write_frame(frame);
        } else {
            tracing::trace!("display off, frame suppressed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::HeadlessConsole;

    fn engine() -> DisplayEngine<HeadlessConsole> {
        DisplayEngine::new(HeadlessConsole::new()).with_pacing(Pacing::Instant)
    }

    fn frames(display: &DisplayEngine<HeadlessConsole>) -> &[Image] {
        display.console().frames()
    }

    #[test]
    fn test_show_blank_image() {
        let mut display = engine();
        display.show(Image::BLANK);

        let output = display.console().output_string();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 7);
        assert_eq!(lines[0], "-------");
        assert!(lines[1..6].iter().all(|line| *line == "|     |"));
        assert_eq!(lines[6], "-------");
    }

    #[test]
    fn test_show_merges_adjacent_repeats() {
        let mut display = engine();
        display.show("aa");
        assert_eq!(frames(&display), &[glyph_for_character('a')]);
    }

    #[test]
    fn test_show_keeps_separated_repeats() {
        let mut display = engine();
        display.show("aba");
        let a = glyph_for_character('a');
        let b = glyph_for_character('b');
        assert_eq!(frames(&display), &[a, b, a]);
    }

    #[test]
    fn test_show_merges_inside_word() {
        let mut display = engine();
        display.show("Hello");
        assert_eq!(display.console().frame_count(), 4);
        assert_eq!(frames(&display)[2], glyph_for_character('l'));
    }

    #[test]
    fn test_show_empty_text() {
        let mut display = engine();
        let animation = display.show_with("", ShowOptions::new().with_clear(true), &mut Never);
        assert_eq!(display.console().frame_count(), 0);
        assert!(animation.is_finished());
    }

    #[test]
    fn test_show_is_stateless() {
        let mut display = engine();
        display.show(Image::HAPPY);
        display.show(Image::HAPPY);
        assert_eq!(display.console().frame_count(), 2);
    }

    #[test]
    fn test_scroll_does_not_merge() {
        let mut display = engine();
        display.scroll("aa");

        let a = glyph_for_character('a');
        let scrolled = frames(&display);
        assert_eq!(scrolled.len(), 17);
        // Offsets 5 and 11 line each glyph up with the viewport.
        assert_eq!(scrolled[5], a);
        assert_eq!(scrolled[11], a);
        assert!(scrolled.len() > 1);
    }

    #[test]
    fn test_scroll_frame_count() {
        let mut display = engine();
        let animation = display.scroll("a");
        assert_eq!(animation.frame_count(), 11);
        assert!(frames(&display)[0].is_blank());
        assert!(frames(&display)[10].is_blank());
        assert_eq!(frames(&display)[1].column(4), glyph_for_character('a').column(0));

        assert_eq!(Animation::scroll("Hello", &ShowOptions::new()).frame_count(), 35);
        assert_eq!(Animation::scroll("", &ShowOptions::new()).frame_count(), 0);
    }

    #[test]
    fn test_power_off_suppresses_output() {
        let mut display = engine();
        display.off();
        assert!(!display.is_on());

        let mut animation = Animation::show(&"abc".into(), &ShowOptions::new());
        let emitted = display.run(&mut animation, &mut Never);
        display.clear();

        assert_eq!(emitted, 3);
        assert!(animation.is_finished());
        assert_eq!(display.console().frame_count(), 0);

        display.on();
        display.clear();
        assert_eq!(display.console().frame_count(), 1);
    }

    #[test]
    fn test_no_wait_returns_after_first_frame() {
        let mut display = engine();
        let mut animation = display.show_with("abc", ShowOptions::new().with_wait(false), &mut Never);
        assert_eq!(display.console().frame_count(), 1);
        assert!(!animation.is_finished());

        assert!(display.tick(&mut animation));
        assert_eq!(display.console().frame_count(), 2);

        assert_eq!(display.run(&mut animation, &mut Never), 1);
        assert!(!display.tick(&mut animation));
        assert_eq!(display.console().frame_count(), 3);
    }

    #[test]
    fn test_no_wait_scroll() {
        let mut display = engine();
        let animation = display.scroll_with("hi", ShowOptions::new().with_wait(false), &mut Never);
        assert_eq!(display.console().frame_count(), 1);
        assert_eq!(animation.frame_count(), 17);
    }

    #[test]
    fn test_loop_stops_on_budget() {
        let mut display = engine();
        let options = ShowOptions::new().with_loop(true);
        let animation = display.show_with("ab", options, &mut FrameBudget::new(7));

        let a = glyph_for_character('a');
        let b = glyph_for_character('b');
        assert_eq!(frames(&display), &[a, b, a, b, a, b, a]);
        assert!(animation.is_looping());
        assert!(!animation.is_finished());
    }

    #[test]
    fn test_loop_stops_on_flag() {
        let mut display = engine();
        let mut checks = 0;
        let mut stop = || {
            checks += 1;
            checks == 3
        };
        display.scroll_with("x", ShowOptions::new().with_loop(true), &mut stop);
        assert_eq!(display.console().frame_count(), 3);
    }

    #[test]
    fn test_loop_wraps_scroll() {
        let mut display = engine();
        display.scroll_with("x", ShowOptions::new().with_loop(true), &mut FrameBudget::new(13));
        let scrolled = frames(&display);
        assert_eq!(scrolled.len(), 13);
        assert_eq!(scrolled[11], scrolled[0]);
        assert_eq!(scrolled[12], scrolled[1]);
    }

    #[test]
    fn test_clear_after_show() {
        let mut display = engine();
        display.show_with(Image::HEART, ShowOptions::new().with_clear(true), &mut Never);
        assert_eq!(frames(&display), &[Image::HEART, Image::BLANK]);
    }

    #[test]
    fn test_clear() {
        let mut display = engine();
        display.clear();
        assert_eq!(frames(&display), &[Image::BLANK]);
    }

    #[test]
    fn test_iterator_is_lazy_and_loops() {
        let animation = Animation::show(&"ab".into(), &ShowOptions::new().with_loop(true));
        let taken: Vec<Image> = animation.take(5).collect();
        assert_eq!(taken.len(), 5);
        assert_eq!(taken[4], glyph_for_character('a'));
    }

    #[test]
    fn test_frame_budget() {
        let mut budget = FrameBudget::new(2);
        assert!(!budget.should_stop());
        assert!(budget.should_stop());
        assert!(FrameBudget::new(0).should_stop());
        assert!(FrameBudget::new(0).is_spent());
        assert!(!FrameBudget::new(1).is_spent());
    }

    #[test]
    fn test_empty_budget_emits_nothing() {
        let mut display = engine();
        let options = ShowOptions::new().with_loop(true).with_clear(true);
        display.show_with("ab", options, &mut FrameBudget::new(0));
        display.scroll_with("ab", options, &mut FrameBudget::new(0));
        assert_eq!(display.console().frame_count(), 0);
    }

    #[test]
    fn test_show_image_sequence() {
        let mut display = engine();
        let animation = display.show(Image::ALL_CLOCKS);
        assert_eq!(animation.frame_count(), 12);
        assert_eq!(frames(&display), &Image::ALL_CLOCKS[..]);
        assert_eq!(animation.delay, TEXT_DELAY);
    }

    #[test]
    fn test_image_sequence_does_not_merge() {
        let mut display = engine();
        display.show(&[Image::HEART, Image::HEART, Image::SAD][..]);
        assert_eq!(frames(&display), &[Image::HEART, Image::HEART, Image::SAD]);
    }
}
