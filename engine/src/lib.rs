//! Core engine for Says - the game state machine and its timers.
//!
//! This crate contains the game without TUI dependencies, providing:
//!
//! - **Game state**: [`Game`] owns the sequence, the mode and every timer
//! - **Scheduling**: [`Scheduler`] is a virtual clock with one pending timer per [`TimerSlot`]
//! - **Collaborators**: [`Display`], [`Haptics`] and [`MoveSource`] are the only outputs and inputs
//! - **Frontend wrapper**: [`App`] adds wall-clock frames, config and the pulse effect
//!
//! The TUI layer (`says_tui`) reads [`Screen`] from the `App` and forwards key
//! presses back to it. No rendering logic lives in this crate.

mod app;
mod config;
mod device;
mod game;
mod screen;
mod timers;

pub use app::{App, TerminalGame};
pub use config::{AppConfig, ConfigError, GameConfig, HapticsConfig, SaysConfig, config_path};
pub use device::{Display, HapticQueue, Haptics, MoveSource, SeededMoves};
pub use game::{Game, GameEvent, GameState, prompts};
pub use screen::Screen;
pub use timers::{Scheduler, Timer, TimerHandle, TimerSlot};

pub use says_types::ui::{AnimPhase, Pulse, PulseEffect, UiOptions};
pub use says_types::{Button, FormFactor, MAX_LEN, Milestone, Mode, Outcome, Sequence, ShowPhase};
