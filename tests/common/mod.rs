//! Shared test utilities and fixtures
//!
//! Drive an [`App`] on the virtual clock the way a player would.

#![allow(dead_code)]

use std::time::Duration;

use says_engine::{App, Button, Mode, UiOptions};

/// Roughly one frame at the binary's cadence.
pub const FRAME: Duration = Duration::from_millis(8);

pub fn seeded_app(seed: u64) -> App {
    App::with_seed(UiOptions::default(), seed)
}

/// Advance frame by frame until the player may press, or panic after a minute of game time.
pub fn wait_for_turn(app: &mut App) {
    for _ in 0..7500 {
        if app.mode() == Mode::AwaitingInput {
            return;
        }
        app.advance(FRAME);
    }
    panic!("never reached the player's turn, stuck in {:?}", app.mode());
}

/// Press the whole current sequence back correctly.
pub fn repeat_sequence(app: &mut App) {
    let steps: Vec<Button> = app.state().sequence().as_slice().to_vec();
    for step in steps {
        app.press(step);
    }
}

pub fn wrong_button(expected: Button) -> Button {
    match expected {
        Button::Up => Button::Select,
        Button::Select => Button::Down,
        Button::Down => Button::Up,
    }
}
