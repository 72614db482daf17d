//! The game state machine.
//!
//! # Architecture
//!
//! One [`Game`] owns the [`GameState`] record, the [`Scheduler`] and the three
//! collaborators. Every mutation goes through [`Game::handle`], one
//! [`GameEvent`] at a time:
//!
//! ```text
//!  AwaitingStart ──Select──► ShowingSequence ──playback done──► AwaitingInput
//!        ▲                         ▲                               │
//!        │                         │ TransitionDone        correct │ wrong
//!   (process start)         RoundTransition ◄──round complete──────┤
//!                                                                  ▼
//!                     GameOver(Won | Lost) ──Select──► ShowingSequence
//! ```
//!
//! The work is split the same way the game is played:
//!
//! - `sequence`: growing the sequence
//! - `playback`: showing it to the player
//! - `input`: validating presses against it
//! - `transition`: celebrating a completed round

mod input;
mod playback;
mod sequence;
mod transition;


use std::time::Duration;

use tracing::info;

use says_types::{Button, FormFactor, Mode, Sequence, ShowPhase};

use crate::device::{Display, Haptics, MoveSource};
use crate::timers::{Scheduler, Timer};

/// Status-line texts.
pub mod prompts {
    pub const PRESS_SELECT: &str = "Press Select";
    pub const YOUR_TURN: &str = "Your turn";
    pub const GOOD: &str = "Good";
    pub const YOU_WIN: &str = "You win!";
    pub const GAME_OVER: &str = "Game Over";
}

/// Everything that can happen to a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    Press(Button),
    Timer(Timer),
}

/// The single mutable game record.
#[derive(Debug, Clone, Default)]
pub struct GameState {
    sequence: Sequence,
    round: usize,
    input_index: usize,
    show_index: usize,
    show_phase: ShowPhase,
    show_duration: Duration,
    mode: Mode,
    flash_phase: u32,
}

impl GameState {
    #[must_use]
    pub fn sequence(&self) -> &Sequence {
        &self.sequence
    }

    #[must_use]
    pub fn sequence_length(&self) -> usize {
        self.sequence.len()
    }

    /// Round counter shown to the player; equals the sequence length once a round starts.
    #[must_use]
    pub fn round(&self) -> usize {
        self.round
    }

    /// Steps reproduced correctly so far this turn.
    #[must_use]
    pub fn input_index(&self) -> usize {
        self.input_index
    }

    #[must_use]
    pub fn show_index(&self) -> usize {
        self.show_index
    }

    #[must_use]
    pub fn show_phase(&self) -> ShowPhase {
        self.show_phase
    }

    /// Per-step show time for the current round.
    #[must_use]
    pub fn show_duration(&self) -> Duration {
        self.show_duration
    }

    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    #[must_use]
    pub fn flash_phase(&self) -> u32 {
        self.flash_phase
    }
}

pub struct Game<D, H, R> {
    state: GameState,
    timers: Scheduler,
    display: D,
    haptics: H,
    moves: R,
    form_factor: FormFactor,
}

impl<D: Display, H: Haptics, R: MoveSource> Game<D, H, R> {
    /// Create an idle game and put the start prompt up.
    pub fn new(display: D, haptics: H, moves: R, form_factor: FormFactor) -> Self {
        let mut game = Self {
            state: GameState::default(),
            timers: Scheduler::new(),
            display,
            haptics,
            moves,
            form_factor,
        };
        game.display.show_text(prompts::PRESS_SELECT);
        game.refresh_info();
        game
    }

    /// Apply one event. The only way game state changes.
    pub fn handle(&mut self, event: GameEvent) {
        match event {
            GameEvent::Press(button) => self.on_press(button),
            GameEvent::Timer(timer) => self.on_timer(timer),
        }
    }

    pub fn press(&mut self, button: Button) {
        self.handle(GameEvent::Press(button));
    }

    /// Move the clock forward by `elapsed`, firing every timer that comes due on the way.
    pub fn advance(&mut self, elapsed: Duration) {
        let target = self.timers.now().saturating_add(elapsed);
        while let Some(timer) = self.timers.pop_due(target) {
            self.handle(GameEvent::Timer(timer));
        }
        self.timers.advance_to(target);
    }

    /// Start a fresh game: one random step, then straight into playback.
    pub fn restart(&mut self) {
        self.timers.cancel_all();
        self.clear_highlights();
        self.state.flash_phase = 0;
        self.display.set_flash(None);

        self.state.sequence.clear();
        self.state.round = 0;
        self.state.input_index = 0;
        info!("Starting new game");

        self.append_random_step();
        self.begin_round();
    }

    /// Cancel everything outstanding and leave the display at rest.
    pub fn shutdown(&mut self) {
        self.timers.cancel_all();
        self.clear_highlights();
        self.display.set_flash(None);
        info!(
            round = self.state.round,
            mode = ?self.state.mode,
            "Game shut down"
        );
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn mode(&self) -> Mode {
        self.state.mode
    }

    #[must_use]
    pub fn timers(&self) -> &Scheduler {
        &self.timers
    }

    #[must_use]
    pub fn display(&self) -> &D {
        &self.display
    }

    #[must_use]
    pub fn haptics(&self) -> &H {
        &self.haptics
    }

    pub fn haptics_mut(&mut self) -> &mut H {
        &mut self.haptics
    }

    /// Watch shape the flash timing was chosen for.
    #[must_use]
    pub fn form_factor(&self) -> FormFactor {
        self.form_factor
    }

    fn on_press(&mut self, button: Button) {
        if button == Button::Select && self.state.mode.accepts_restart() {
            self.restart();
            return;
        }
        self.handle_input(button);
    }

    fn on_timer(&mut self, timer: Timer) {
        match timer {
            Timer::Playback => self.playback_tick(),
            Timer::FeedbackClear(button) => self.clear_feedback(button),
            Timer::PromptRestore => self.restore_prompt(),
            Timer::TransitionDone => self.finish_transition(),
            Timer::FlashTick { cycles } => self.flash_tick(cycles),
        }
    }

    fn info_line(&self) -> String {
        match self.state.mode {
            Mode::AwaitingStart => String::new(),
            Mode::GameOver(_) if !self.state.sequence.is_empty() => {
                format!("Press Select to Restart\nRound: {}", self.state.round)
            }
            _ => format!("Round: {}", self.state.round),
        }
    }

    fn refresh_info(&mut self) {
        let info = self.info_line();
        self.display.show_round_info(&info);
    }

    fn clear_highlights(&mut self) {
        for button in Button::ALL {
            self.display.set_highlight(button, false);
        }
    }
}
