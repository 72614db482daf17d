//! Unit tests for the frontend wrapper.

use std::time::Duration;

use says_types::ui::{Pulse, UiOptions};
use says_types::{Button, Mode, Outcome};

use super::App;
use crate::config::SaysConfig;
use crate::game::prompts;

const STEP: Duration = Duration::from_millis(25);

fn test_app() -> App {
    App::with_seed(UiOptions::default(), 42)
}

fn wait_for_turn(app: &mut App) {
    for _ in 0..2000 {
        if app.mode() == Mode::AwaitingInput {
            return;
        }
        app.advance(STEP);
    }
    panic!("never reached the player's turn, stuck in {:?}", app.mode());
}

fn wrong_button(expected: Button) -> Button {
    match expected {
        Button::Up => Button::Down,
        Button::Select | Button::Down => Button::Up,
    }
}

#[test]
fn new_app_waits_for_select() {
    let app = test_app();
    assert_eq!(app.mode(), Mode::AwaitingStart);
    assert_eq!(app.screen().status(), prompts::PRESS_SELECT);
    assert_eq!(app.screen().info(), "");
    assert!(app.pulse_effect().is_none());
}

#[test]
fn select_starts_round_one() {
    let mut app = test_app();
    app.press(Button::Select);
    assert_eq!(app.mode(), Mode::ShowingSequence);
    assert_eq!(app.state().sequence_length(), 1);
    assert_eq!(app.screen().info(), "Round: 1");
    let first = app.state().sequence().as_slice()[0];
    assert_eq!(app.screen().status(), first.name());
    assert!(app.screen().is_highlighted(first));
}

#[test]
fn correct_press_shakes_and_advances() {
    let mut app = test_app();
    app.press(Button::Select);
    wait_for_turn(&mut app);
    assert_eq!(app.screen().status(), prompts::YOUR_TURN);

    let first = app.state().sequence().as_slice()[0];
    app.press(first);
    assert_eq!(app.mode(), Mode::RoundTransition);
    assert_eq!(app.state().sequence_length(), 2);
    // The round's double pulse outranks the press feedback in the same frame.
    let effect = app.pulse_effect().expect("pulse effect after round");
    assert_eq!(effect.pulse(), Pulse::Double);
}

#[test]
fn wrong_press_ends_game_with_long_pulse() {
    let mut app = test_app();
    app.press(Button::Select);
    wait_for_turn(&mut app);

    let first = app.state().sequence().as_slice()[0];
    app.press(wrong_button(first));
    assert_eq!(app.mode(), Mode::GameOver(Outcome::Lost));
    assert_eq!(app.screen().status(), prompts::GAME_OVER);
    assert_eq!(app.screen().info(), "Press Select to Restart\nRound: 1");
    assert_eq!(app.pulse_effect().map(|effect| effect.pulse()), Some(Pulse::Long));
}

#[test]
fn pulse_effect_expires() {
    let mut app = test_app();
    app.press(Button::Select);
    wait_for_turn(&mut app);
    let first = app.state().sequence().as_slice()[0];
    app.press(wrong_button(first));
    assert!(app.pulse_effect().is_some());

    app.advance(Pulse::Long.duration());
    assert!(app.pulse_effect().is_none());
}

#[test]
fn reduced_motion_suppresses_shake() {
    let options = UiOptions {
        reduced_motion: true,
        ..UiOptions::default()
    };
    let mut app = App::with_seed(options, 42);
    app.press(Button::Select);
    wait_for_turn(&mut app);
    let first = app.state().sequence().as_slice()[0];
    app.press(wrong_button(first));
    assert_eq!(app.mode(), Mode::GameOver(Outcome::Lost));
    assert!(app.pulse_effect().is_none());
}

#[test]
fn bell_rings_once_per_request() {
    let config: SaysConfig = toml::from_str("[game]\nseed = 3\n[haptics]\nbell = true\n").unwrap();
    let mut app = App::new(Some(&config));
    app.press(Button::Select);
    wait_for_turn(&mut app);
    let first = app.state().sequence().as_slice()[0];
    app.press(first);

    assert!(app.take_bell());
    assert!(!app.take_bell());
}

#[test]
fn disabled_haptics_never_shake_or_ring() {
    let config: SaysConfig =
        toml::from_str("[game]\nseed = 3\n[haptics]\nenabled = false\nbell = true\n").unwrap();
    let mut app = App::new(Some(&config));
    app.press(Button::Select);
    wait_for_turn(&mut app);
    let first = app.state().sequence().as_slice()[0];
    app.press(first);

    assert!(app.pulse_effect().is_none());
    assert!(!app.take_bell());
}

#[test]
fn same_seed_same_first_step() {
    let mut a = App::with_seed(UiOptions::default(), 99);
    let mut b = App::with_seed(UiOptions::default(), 99);
    a.press(Button::Select);
    b.press(Button::Select);
    assert_eq!(
        a.state().sequence().as_slice(),
        b.state().sequence().as_slice()
    );
}

#[test]
fn request_quit_sets_should_quit() {
    let mut app = test_app();
    assert!(!app.should_quit());
    app.request_quit();
    assert!(app.should_quit());
}

#[test]
fn shutdown_cancels_timers_and_clears_display() {
    let mut app = test_app();
    app.press(Button::Select);
    assert!(app.game().timers().has_pending());

    app.shutdown();
    assert!(!app.game().timers().has_pending());
    assert!(app.screen().highlighted().is_empty());
    assert_eq!(app.screen().flash(), None);
    assert!(app.pulse_effect().is_none());
}

#[test]
fn milestone_shake_at_least_as_strong_as_regular_round() {
    let mut app = test_app();
    app.press(Button::Select);

    let mut shakes = Vec::new();
    while app.state().sequence_length() < 6 {
        wait_for_turn(&mut app);
        let steps = app.state().sequence().as_slice().to_vec();
        for step in steps {
            app.press(step);
        }
        assert_eq!(app.mode(), Mode::RoundTransition);
        let effect = app.pulse_effect().expect("pulse effect after round");
        shakes.push((app.state().sequence_length(), effect.pulse()));
    }

    let strength = |length: usize| {
        shakes
            .iter()
            .find(|(len, _)| *len == length)
            .map(|(_, pulse)| pulse.strength())
            .expect("round reached")
    };
    assert!(strength(4) >= strength(3));
    assert!(strength(6) >= strength(5));
    assert_eq!(strength(4), Pulse::Double.strength());
}
