//! micro:bit CLI - drive the emulated display and device state.
//!
//! Usage:
//!   mbit [--state-file PATH] <command>
//!
//! Examples:
//!   mbit show "Hello"                 # Show text a character at a time
//!   mbit show --image HAPPY           # Show a built-in image
//!   mbit scroll "Hi!" --loop --frames 40
//!   mbit state                        # Print every state field
//!   mbit state set pin0 512           # Change one field in the state file
//!   mbit press button_a --count 100   # Simulate presses for a running program
//!   mbit keypad                       # Press buttons from the keyboard

use std::sync::mpsc;
use std::time::Duration;

use clap::{Parser, Subcommand, ValueEnum};
use crossterm::{
    event::{self, Event, KeyCode, KeyModifiers},
    terminal::{disable_raw_mode, enable_raw_mode},
};
use tokio::sync::mpsc as tokio_mpsc;
use tracing_subscriber::EnvFilter;

use mbit_core::{
    DisplayEngine, Field, FrameBudget, Image, MicroBit, Never, ShowOptions, Showable,
    StateStore, StateValue, StdoutConsole, StopSignal, DEFAULT_STATE_FILE,
};

/// micro:bit Emulator CLI
#[derive(Parser, Debug)]
#[command(name = "mbit")]
#[command(about = "Emulate a BBC micro:bit display and device state")]
struct Args {
    /// Initial state file
    #[arg(long, env = "MICROBIT_STATE_FILE", default_value = DEFAULT_STATE_FILE)]
    state_file: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show text a character at a time, or a built-in image
    Show {
        /// Text to show
        #[arg(required_unless_present = "image")]
        text: Option<String>,

        /// Built-in image name (e.g. HAPPY)
        #[arg(long, conflicts_with = "text")]
        image: Option<String>,

        #[command(flatten)]
        animation: AnimationArgs,
    },
    /// Scroll text across the display
    Scroll {
        text: String,

        #[command(flatten)]
        animation: AnimationArgs,
    },
    /// Inspect or change the state file
    State {
        #[command(subcommand)]
        action: Option<StateAction>,
    },
    /// Press and release a button (or set and clear a pin)
    Press {
        #[arg(default_value = "button_a")]
        input: String,

        /// Number of presses
        #[arg(short, long, default_value_t = 1)]
        count: u32,

        /// Milliseconds to hold, and to wait after releasing
        #[arg(long, default_value_t = 50)]
        hold: u64,
    },
    /// Switch the display power
    Power {
        #[arg(value_enum)]
        switch: PowerSwitch,
    },
    /// Press buttons from the keyboard: a, b, r = reset, p = power, q = quit
    Keypad,
}

#[derive(clap::Args, Debug)]
struct AnimationArgs {
    /// Milliseconds before each frame
    #[arg(long)]
    delay: Option<u64>,

    /// Repeat the animation
    #[arg(long = "loop")]
    looping: bool,

    /// Stop after this many frames (needed to end a loop)
    #[arg(long)]
    frames: Option<usize>,

    /// Clear the display afterwards
    #[arg(long)]
    clear: bool,
}

impl AnimationArgs {
    fn options(&self) -> ShowOptions {
        let mut options = ShowOptions::new()
            .with_loop(self.looping)
            .with_clear(self.clear);
        if let Some(ms) = self.delay {
            options = options.with_delay(Duration::from_millis(ms));
        }
        options
    }
}

#[derive(Subcommand, Debug)]
enum StateAction {
    /// Print one field
    Get { field: String },
    /// Set one field
    Set { field: String, value: String },
    /// Reset every field to its default
    Reset,
    /// Load the state file (following any chain) and print it
    Load,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
enum PowerSwitch {
    On,
    Off,
}

/// Parse a command-line value for `field`.
fn parse_value(field: &str, value: &str) -> Result<StateValue, Box<dyn std::error::Error>> {
    if field.parse::<Field>()? == Field::STATE_FILE {
        Ok(StateValue::Text(value.to_string()))
    } else {
        Ok(StateValue::Int(value.parse::<i64>()?))
    }
}

fn device(state_file: &str) -> MicroBit<StdoutConsole> {
    MicroBit::new(
        DisplayEngine::new(StdoutConsole::new()),
        StateStore::open(state_file),
    )
}

fn animate(
    mb: &mut MicroBit<StdoutConsole>,
    frames: Option<usize>,
    start: impl FnOnce(&mut DisplayEngine<StdoutConsole>, &mut dyn StopSignal),
) {
    match frames {
        Some(n) => start(&mut mb.display, &mut FrameBudget::new(n)),
        None => start(&mut mb.display, &mut Never),
    }
}

/// Translate a key to a keypad action.
fn translate_key(code: KeyCode, modifiers: KeyModifiers) -> Option<char> {
    if modifiers.contains(KeyModifiers::CONTROL) && code == KeyCode::Char('c') {
        return Some('q');
    }

    match code {
        KeyCode::Char(c) => Some(c.to_ascii_lowercase()),
        KeyCode::Esc => Some('q'),
        KeyCode::Left => Some('a'),
        KeyCode::Right => Some('b'),
        _ => None,
    }
}

async fn keypad(state_file: String) -> Result<(), Box<dyn std::error::Error>> {
    // Keys flow from the terminal reader to the blocking state writer
    let (key_tx, key_rx) = mpsc::channel::<char>();

    // Create shutdown signal
    let (shutdown_tx, mut shutdown_rx) = tokio_mpsc::channel::<()>(1);

    // Enable raw mode (gracefully handle non-TTY)
    let raw_mode_enabled = enable_raw_mode().is_ok();
    eprint!("a/b: press button, r: reset, p: toggle power, q: quit\r\n");

    let writer = tokio::task::spawn_blocking(move || {
        let mut state = StateStore::open(state_file);
        while let Ok(key) = key_rx.recv() {
            let result = match key {
                'a' => state.press_and_release("button_a", Duration::from_millis(50)),
                'b' => state.press_and_release("button_b", Duration::from_millis(50)),
                'r' => {
                    state.reset();
                    Ok(())
                }
                'p' => {
                    state.load();
                    if state.is_on() {
                        state.power_off()
                    } else {
                        state.power_on()
                    }
                }
                _ => continue,
            };
            match result {
                Ok(()) => eprint!(
                    "a={} presses, b={} presses, power={}\r\n",
                    state.int(Field::BUTTON_A_PRESSES),
                    state.int(Field::BUTTON_B_PRESSES),
                    state.int(Field::POWER)
                ),
                Err(e) => eprint!("Error: {}\r\n", e),
            }
        }
    });

    // Spawn terminal input reader
    let input = tokio::spawn(async move {
        loop {
            tokio::select! {
                _ = shutdown_rx.recv() => {
                    break;
                }
                _ = tokio::time::sleep(Duration::from_millis(10)) => {
                    // Poll for terminal events
                    if event::poll(Duration::from_millis(0)).unwrap_or(false) {
                        if let Ok(Event::Key(key_event)) = event::read() {
                            match translate_key(key_event.code, key_event.modifiers) {
                                Some('q') => break,
                                Some(key) => {
                                    if key_tx.send(key).is_err() {
                                        break; // Writer gone
                                    }
                                }
                                None => {}
                            }
                        }
                    }
                }
            }
        }
        // Dropping key_tx ends the writer
    });

    let _ = input.await;
    let _ = shutdown_tx.send(()).await;
    let writer_result = writer.await;

    // Disable raw mode if we enabled it
    if raw_mode_enabled {
        let _ = disable_raw_mode();
    }

    writer_result?;
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Diagnostics go to stderr so frames on stdout stay exact
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    tracing::debug!(state_file = %args.state_file, "starting");

    match args.command {
        Command::Show {
            text,
            image,
            animation,
        } => {
            let value: Showable = match image {
                Some(name) => Image::from_catalogue(&name)?.into(),
                None => text.unwrap_or_default().into(),
            };
            let options = animation.options();
            let mut mb = device(&args.state_file);
            animate(&mut mb, animation.frames, |display, stop| {
                display.show_with(value, options, stop);
            });
        }
        Command::Scroll { text, animation } => {
            let options = animation.options();
            let mut mb = device(&args.state_file);
            animate(&mut mb, animation.frames, |display, stop| {
                display.scroll_with(&text, options, stop);
            });
        }
        Command::State { action } => {
            let mut state = StateStore::open(args.state_file);
            match action {
                None => println!("{}", state),
                Some(StateAction::Get { field }) => println!("{}", state.get(&field)?),
                Some(StateAction::Set { field, value }) => {
                    let value = parse_value(&field, &value)?;
                    state.set(&field, value)?;
                }
                Some(StateAction::Reset) => state.reset(),
                Some(StateAction::Load) => {
                    state.load();
                    println!("{}", state);
                }
            }
            if !state.is_file_backed() {
                eprintln!("Warning: state file {} not written", state.state_file());
            }
        }
        Command::Press { input, count, hold } => {
            let mut state = StateStore::open(args.state_file);
            eprintln!("pressing {}", input);
            for _ in 0..count {
                state.press_and_release(&input, Duration::from_millis(hold))?;
            }
        }
        Command::Power { switch } => {
            let mut mb = device(&args.state_file);
            match switch {
                PowerSwitch::On => mb.power_on()?,
                PowerSwitch::Off => mb.power_off()?,
            }
        }
        Command::Keypad => keypad(args.state_file).await?,
    }

    Ok(())
}
