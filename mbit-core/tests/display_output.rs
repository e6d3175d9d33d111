//! Integration tests for the exact text the display writes.

use mbit_core::{
    glyph_for_character, DisplayEngine, FrameBudget, HeadlessConsole, Image, Never, Pacing,
    ShowOptions,
};

const BLANK_FRAME: &str = "-------\n|     |\n|     |\n|     |\n|     |\n|     |\n-------\n";

fn display() -> DisplayEngine<HeadlessConsole> {
    DisplayEngine::new(HeadlessConsole::new()).with_pacing(Pacing::Instant)
}

#[test]
fn test_image_frame_bytes() {
    let mut display = display();
    display.show(Image::HAPPY);

    assert_eq!(
        display.console().output_string(),
        "-------\n|     |\n| 9 9 |\n|     |\n|9   9|\n| 999 |\n-------\n"
    );
}

#[test]
fn test_frames_are_back_to_back() {
    let mut display = display();
    display.clear();
    display.clear();
    assert_eq!(display.console().output_string(), BLANK_FRAME.repeat(2));
}

#[test]
fn test_brightness_digits() {
    let mut display = display();
    let image: Image = "12345:06789:".parse().unwrap();
    display.show(image);

    let output = display.console().output_string();
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines[1], "|12345|");
    assert_eq!(lines[2], "| 6789|");
    assert_eq!(lines[3], "|     |");
}

#[test]
fn test_show_text_merges_only_adjacent() {
    let mut display = display();
    display.show_with("aa", ShowOptions::new(), &mut Never);
    let merged = display.console().frame_count();

    display.console_mut().clear_output();
    display.show("aba");
    assert_eq!(merged, 1);
    assert_eq!(display.console().frame_count(), 3);
}

#[test]
fn test_scroll_longer_than_merged_show() {
    let mut display = display();
    display.show("aa");
    let shown = display.console().frame_count();

    display.console_mut().clear_output();
    display.scroll("aa");
    let scrolled = display.console().frames();

    assert!(scrolled.len() > shown);
    let a = glyph_for_character('a');
    assert_eq!(scrolled.iter().filter(|frame| **frame == a).count(), 2);
}

#[test]
fn test_power_off_keeps_control_flow() {
    let mut on = display();
    let mut off = display();
    off.off();

    let options = ShowOptions::new().with_loop(true);
    let shown_on = on.show_with("hi", options, &mut FrameBudget::new(5));
    let shown_off = off.show_with("hi", options, &mut FrameBudget::new(5));

    assert_eq!(on.console().frame_count(), 5);
    assert_eq!(off.console().frame_count(), 0);
    assert_eq!(shown_on.frame_count(), shown_off.frame_count());
}
