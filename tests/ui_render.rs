//! Render tests against a vt100 virtual terminal.


use std::time::Duration;

use ratatui::Terminal;

use says_engine::{App, Button, Mode, UiOptions};
use says_tui::draw;

use vt100_backend::VT100Backend;

const WIDTH: u16 = 60;
const HEIGHT: u16 = 20;

/// First interior cell of the centered card: one in from its top-left corner.
const CARD_INTERIOR: (u16, u16) = ((WIDTH - 34) / 2 + 1, (HEIGHT - 11) / 2 + 1);

fn render(app: &App) -> Terminal<VT100Backend> {
    let mut terminal =
        Terminal::new(VT100Backend::new(WIDTH, HEIGHT)).expect("failed to create terminal");
    terminal.draw(|frame| draw(frame, app)).expect("failed to draw");
    terminal
}

fn screen_text(app: &App) -> String {
    render(app).backend().contents()
}

fn play_to_turn(app: &mut App) {
    app.press(Button::Select);
    for _ in 0..500 {
        if app.mode() == Mode::AwaitingInput {
            return;
        }
        app.advance(Duration::from_millis(25));
    }
    panic!("never reached the player's turn");
}

#[test]
fn idle_screen_prompts_for_select() {
    let app = App::with_seed(UiOptions::default(), 1);
    let text = screen_text(&app);
    assert!(text.contains("Says"), "{text}");
    assert!(text.contains("Press Select"), "{text}");
    assert!(!text.contains("Round:"), "{text}");
    assert!(text.contains("q quit"), "{text}");
    for glyph in ["▲", "●", "▼"] {
        assert!(text.contains(glyph), "missing {glyph} in\n{text}");
    }
}

#[test]
fn ascii_only_uses_letters() {
    let options = UiOptions {
        ascii_only: true,
        ..UiOptions::default()
    };
    let app = App::with_seed(options, 1);
    let text = screen_text(&app);
    assert!(!text.contains('▲'), "{text}");
    for letter in ["U", "S", "D"] {
        let glyph = format!(" {letter} │");
        assert!(text.contains(&glyph), "missing {glyph} in\n{text}");
    }
}

#[test]
fn playback_shows_step_name_and_round() {
    let mut app = App::with_seed(UiOptions::default(), 4);
    app.press(Button::Select);
    let first = app.state().sequence().as_slice()[0];
    let text = screen_text(&app);
    assert!(text.contains(first.name()), "{text}");
    assert!(text.contains("Round: 1"), "{text}");
}

#[test]
fn game_over_shows_restart_hint() {
    let mut app = App::with_seed(UiOptions::default(), 4);
    play_to_turn(&mut app);
    let first = app.state().sequence().as_slice()[0];
    let wrong = Button::ALL
        .into_iter()
        .find(|button| *button != first)
        .expect("three buttons");
    app.press(wrong);

    let text = screen_text(&app);
    assert!(text.contains("Game Over"), "{text}");
    assert!(text.contains("Press Select to Restart"), "{text}");
    assert!(text.contains("Round: 1"), "{text}");
}

#[test]
fn transition_fills_card_with_flash_colour() {
    let mut app = App::with_seed(UiOptions::default(), 4);
    play_to_turn(&mut app);
    let first = app.state().sequence().as_slice()[0];
    app.press(first);
    assert_eq!(app.screen().flash(), Some(0));

    let terminal = render(&app);
    let text = terminal.backend().contents();
    assert!(text.contains("Length 2"), "{text}");
    let (x, y) = CARD_INTERIOR;
    assert_eq!(
        terminal.backend().background(x, y),
        Some(vt100::Color::Rgb(242, 236, 188))
    );
}

#[test]
fn reduced_motion_keeps_base_colours_during_flash() {
    let options = UiOptions {
        reduced_motion: true,
        ..UiOptions::default()
    };
    let mut app = App::with_seed(options, 4);
    play_to_turn(&mut app);
    let first = app.state().sequence().as_slice()[0];
    app.press(first);
    assert_eq!(app.screen().flash(), Some(0));

    let terminal = render(&app);
    let (x, y) = CARD_INTERIOR;
    assert_eq!(
        terminal.backend().background(x, y),
        Some(vt100::Color::Rgb(31, 31, 40))
    );
    assert!(terminal.backend().contents().contains('═'));
}

#[test]
fn tiny_terminal_does_not_panic() {
    let mut app = App::with_seed(UiOptions::default(), 4);
    app.press(Button::Select);
    let mut terminal =
        Terminal::new(VT100Backend::new(12, 4)).expect("failed to create terminal");
    terminal.draw(|frame| draw(frame, &app)).expect("failed to draw");
}
