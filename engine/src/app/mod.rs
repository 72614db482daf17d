//! Frontend-facing wrapper around [`Game`].
//!
//! The TUI owns one [`App`]: it forwards button presses in, calls [`App::tick`]
//! once per frame, and reads the [`Screen`] and the active [`PulseEffect`] back
//! out for drawing. Wall-clock time only enters the engine here.

#[cfg(test)]
mod tests;

use std::mem;
use std::time::{Duration, Instant};

use tracing::{debug, info};

use says_types::ui::{Pulse, PulseEffect, UiOptions};
use says_types::{Button, Mode};

use crate::config::SaysConfig;
use crate::device::{HapticQueue, SeededMoves};
use crate::game::{Game, GameState};
use crate::screen::Screen;

pub type TerminalGame = Game<Screen, HapticQueue, SeededMoves>;

pub struct App {
    game: TerminalGame,
    options: UiOptions,
    bell_enabled: bool,
    /// Shake standing in for the vibration motor. Newer pulses replace older ones;
    /// within one frame the strongest pulse wins.
    pulse_effect: Option<PulseEffect>,
    bell_pending: bool,
    last_frame: Instant,
    should_quit: bool,
}

impl App {
    /// Build from the loaded config. A missing config means defaults and a clock seed.
    #[must_use]
    pub fn new(config: Option<&SaysConfig>) -> Self {
        let options = SaysConfig::ui_options(config);
        let haptics = SaysConfig::haptics(config);
        let moves = match SaysConfig::seed(config) {
            Some(seed) => SeededMoves::from_seed(seed),
            None => SeededMoves::from_clock(),
        };
        info!(
            seed = moves.seed(),
            form_factor = ?options.form_factor,
            haptics = haptics.enabled,
            bell = haptics.bell,
            "Starting says"
        );
        Self::from_parts(options, HapticQueue::new(haptics.enabled), haptics.bell, moves)
    }

    /// Deterministic app with haptics on and no bell.
    #[must_use]
    pub fn with_seed(options: UiOptions, seed: u64) -> Self {
        Self::from_parts(
            options,
            HapticQueue::new(true),
            false,
            SeededMoves::from_seed(seed),
        )
    }

    fn from_parts(
        options: UiOptions,
        haptics: HapticQueue,
        bell_enabled: bool,
        moves: SeededMoves,
    ) -> Self {
        Self {
            game: Game::new(Screen::new(), haptics, moves, options.form_factor),
            options,
            bell_enabled,
            pulse_effect: None,
            bell_pending: false,
            last_frame: Instant::now(),
            should_quit: false,
        }
    }

    pub fn press(&mut self, button: Button) {
        self.game.press(button);
        self.collect_pulses();
    }

    /// Advance by the wall-clock time since the previous frame.
    pub fn tick(&mut self) {
        let elapsed = self.frame_elapsed();
        self.advance(elapsed);
    }

    /// Advance the game clock and the pulse effect by `elapsed`.
    pub fn advance(&mut self, elapsed: Duration) {
        self.game.advance(elapsed);
        if let Some(effect) = &mut self.pulse_effect {
            effect.advance(elapsed);
            if effect.is_finished() {
                self.pulse_effect = None;
            }
        }
        self.collect_pulses();
    }

    fn frame_elapsed(&mut self) -> Duration {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_frame);
        self.last_frame = now;
        elapsed
    }

    fn collect_pulses(&mut self) {
        let mut strongest: Option<Pulse> = None;
        for pulse in self.game.haptics_mut().drain() {
            debug!(?pulse, "Haptic pulse");
            if strongest.is_none_or(|kept| pulse.strength() >= kept.strength()) {
                strongest = Some(pulse);
            }
        }
        let Some(pulse) = strongest else {
            return;
        };
        if self.bell_enabled {
            self.bell_pending = true;
        }
        if !self.options.reduced_motion {
            self.pulse_effect = Some(PulseEffect::new(pulse));
        }
    }

    /// Whether a bell should ring this frame. Resets the request.
    pub fn take_bell(&mut self) -> bool {
        mem::take(&mut self.bell_pending)
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Cancel every timer and clear the display before exit.
    pub fn shutdown(&mut self) {
        self.game.shutdown();
        self.pulse_effect = None;
        self.bell_pending = false;
    }

    #[must_use]
    pub fn screen(&self) -> &Screen {
        self.game.display()
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        self.game.state()
    }

    #[must_use]
    pub fn mode(&self) -> Mode {
        self.game.mode()
    }

    #[must_use]
    pub fn game(&self) -> &TerminalGame {
        &self.game
    }

    #[must_use]
    pub fn ui_options(&self) -> UiOptions {
        self.options
    }

    #[must_use]
    pub fn pulse_effect(&self) -> Option<&PulseEffect> {
        self.pulse_effect.as_ref()
    }
}
