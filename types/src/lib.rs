//! Core domain types for Says.
//!
//! This crate contains pure domain types with no IO, no async, and minimal dependencies.
//! The button alphabet, the bounded move sequence, the game mode discriminant and the
//! timing rules all live here so that every layer agrees on them.

// Pedantic lint configuration - these are intentional design choices
#![allow(clippy::missing_errors_doc)] // Result-returning functions are self-explanatory
#![allow(clippy::missing_panics_doc)] // Panics are documented in assertions

mod sequence;
mod timing;
pub mod ui;

pub use sequence::{MAX_LEN, Sequence, SequenceFull};
pub use timing::{
    BASE_SHOW, FEEDBACK_PULSE, FormFactor, GOOD_INTERLUDE, MIN_SHOW, Milestone, PAUSE,
    show_duration,
};

use std::fmt;

// ============================================================================
// Buttons
// ============================================================================

/// One of the three physical buttons, and therefore one step of a sequence.
///
/// The discriminant doubles as the move encoding (0..=2) and as the index of the
/// glyph that gets highlighted for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    Up = 0,
    Select = 1,
    Down = 2,
}

impl Button {
    pub const ALL: [Button; 3] = [Button::Up, Button::Select, Button::Down];

    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Button::Up),
            1 => Some(Button::Select),
            2 => Some(Button::Down),
            _ => None,
        }
    }

    /// Name shown on the status line while the sequence plays back.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Button::Up => "Up",
            Button::Select => "Select",
            Button::Down => "Down",
        }
    }
}

impl fmt::Display for Button {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ============================================================================
// Game mode
// ============================================================================

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Won,
    Lost,
}

/// The single authoritative state-machine discriminant.
///
/// "Showing", "transitioning" and "game over" are views of this value, never
/// separate flags, so they cannot disagree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Fresh process, nothing played yet.
    #[default]
    AwaitingStart,
    ShowingSequence,
    AwaitingInput,
    RoundTransition,
    /// Terminal until an explicit restart.
    GameOver(Outcome),
}

impl Mode {
    /// Only the player's turn feeds presses to the validator.
    #[must_use]
    pub const fn accepts_input(self) -> bool {
        matches!(self, Mode::AwaitingInput)
    }

    /// Select starts a new game from the idle screen and after a finished game.
    #[must_use]
    pub const fn accepts_restart(self) -> bool {
        matches!(self, Mode::AwaitingStart | Mode::GameOver(_))
    }

    #[must_use]
    pub const fn is_showing(self) -> bool {
        matches!(self, Mode::ShowingSequence)
    }

    #[must_use]
    pub const fn is_transitioning(self) -> bool {
        matches!(self, Mode::RoundTransition)
    }

    #[must_use]
    pub const fn is_game_over(self) -> bool {
        matches!(self, Mode::GameOver(_))
    }

    #[must_use]
    pub const fn outcome(self) -> Option<Outcome> {
        match self {
            Mode::GameOver(outcome) => Some(outcome),
            _ => None,
        }
    }
}

/// Progress cursor phase inside `Mode::ShowingSequence`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShowPhase {
    /// Next tick displays the current step.
    #[default]
    ShowingStep,
    /// Next tick clears the step and moves to the following one.
    Pausing,
}
