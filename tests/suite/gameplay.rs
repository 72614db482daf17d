//! Whole games played through the public `App` surface.

use std::time::Duration;

use says_engine::{Button, MAX_LEN, Mode, Outcome, prompts};

use crate::common::{repeat_sequence, seeded_app, wait_for_turn, wrong_button};

fn ms(value: u64) -> Duration {
    Duration::from_millis(value)
}

#[test]
fn first_round_timeline() {
    let mut app = seeded_app(11);
    app.press(Button::Select);
    let first = app.state().sequence().as_slice()[0];

    app.advance(ms(699));
    assert_eq!(app.mode(), Mode::ShowingSequence);
    assert_eq!(app.screen().status(), first.name());
    assert!(app.screen().is_highlighted(first));

    app.advance(ms(1));
    assert_eq!(app.mode(), Mode::ShowingSequence);
    assert_eq!(app.screen().status(), "");
    assert!(app.screen().highlighted().is_empty());

    app.advance(ms(299));
    assert_eq!(app.mode(), Mode::ShowingSequence);

    app.advance(ms(1));
    assert_eq!(app.mode(), Mode::AwaitingInput);
    assert_eq!(app.screen().status(), prompts::YOUR_TURN);
}

#[test]
fn perfect_game_is_won_at_capacity() {
    let mut app = seeded_app(2024);
    app.press(Button::Select);

    for round in 1..=MAX_LEN {
        wait_for_turn(&mut app);
        assert_eq!(app.state().round(), round);
        assert_eq!(app.screen().info(), format!("Round: {round}"));
        repeat_sequence(&mut app);
    }

    assert_eq!(app.mode(), Mode::GameOver(Outcome::Won));
    assert_eq!(app.screen().status(), prompts::YOU_WIN);
    assert_eq!(
        app.screen().info(),
        format!("Press Select to Restart\nRound: {MAX_LEN}")
    );
    assert_eq!(app.state().sequence_length(), MAX_LEN);

    // Nothing is left running once the game is over except the glyph clear.
    app.advance(ms(1000));
    assert_eq!(app.mode(), Mode::GameOver(Outcome::Won));
    assert!(!app.game().timers().has_pending());
    assert!(app.screen().highlighted().is_empty());
}

#[test]
fn sequence_only_grows_by_appending() {
    let mut app = seeded_app(77);
    app.press(Button::Select);

    let mut previous = app.state().sequence().as_slice().to_vec();
    for _ in 0..4 {
        wait_for_turn(&mut app);
        repeat_sequence(&mut app);
        let current = app.state().sequence().as_slice().to_vec();
        assert_eq!(current.len(), previous.len() + 1);
        assert_eq!(&current[..previous.len()], previous.as_slice());
        previous = current;
    }
}

#[test]
fn mistake_then_restart() {
    let mut app = seeded_app(5);
    app.press(Button::Select);
    wait_for_turn(&mut app);
    repeat_sequence(&mut app);
    wait_for_turn(&mut app);

    let first = app.state().sequence().as_slice()[0];
    app.press(wrong_button(first));
    assert_eq!(app.mode(), Mode::GameOver(Outcome::Lost));
    assert_eq!(app.screen().status(), prompts::GAME_OVER);
    assert_eq!(app.screen().info(), "Press Select to Restart\nRound: 2");

    // Only Select restarts.
    app.press(Button::Up);
    app.press(Button::Down);
    assert_eq!(app.mode(), Mode::GameOver(Outcome::Lost));

    app.press(Button::Select);
    assert_eq!(app.mode(), Mode::ShowingSequence);
    assert_eq!(app.state().sequence_length(), 1);
    assert_eq!(app.state().round(), 1);
    assert_eq!(app.screen().info(), "Round: 1");
}

#[test]
fn transition_shows_length_then_replays() {
    let mut app = seeded_app(9);
    app.press(Button::Select);
    wait_for_turn(&mut app);
    repeat_sequence(&mut app);

    assert_eq!(app.mode(), Mode::RoundTransition);
    assert_eq!(app.screen().status(), "Length 2");
    assert_eq!(app.screen().flash(), Some(0));

    // Three flash cycles plus settle time.
    app.advance(ms(649));
    assert_eq!(app.mode(), Mode::RoundTransition);
    app.advance(ms(1));
    assert_eq!(app.mode(), Mode::ShowingSequence);
    assert_eq!(app.screen().flash(), None);
    assert_eq!(app.state().show_duration(), ms(640));
}

#[test]
fn same_seed_plays_the_same_game() {
    let mut a = seeded_app(31337);
    let mut b = seeded_app(31337);
    for app in [&mut a, &mut b] {
        app.press(Button::Select);
        for _ in 0..3 {
            wait_for_turn(app);
            repeat_sequence(app);
        }
    }
    assert_eq!(
        a.state().sequence().as_slice(),
        b.state().sequence().as_slice()
    );
}
