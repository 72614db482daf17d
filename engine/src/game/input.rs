use tracing::{debug, info};

use says_types::{Button, FEEDBACK_PULSE, GOOD_INTERLUDE, Mode, Outcome};

use super::{Game, prompts};
use crate::device::{Display, Haptics, MoveSource};
use crate::timers::{Timer, TimerSlot};

impl<D: Display, H: Haptics, R: MoveSource> Game<D, H, R> {
    /// Check one press against the sequence. Does nothing unless it is the player's turn.
    pub fn handle_input(&mut self, button: Button) {
        if !self.state.mode.accepts_input() {
            debug!(%button, mode = ?self.state.mode, "Input ignored");
            return;
        }
        let index = self.state.input_index;
        let Some(expected) = self.state.sequence.get(index) else {
            debug!(index, len = self.state.sequence.len(), "Input ignored - turn complete");
            return;
        };

        info!(%button, %expected, index, "Button pressed");
        self.flash_feedback(button);

        if button != expected {
            self.lose(button, expected);
            return;
        }

        self.haptics.pulse_short();
        self.state.input_index += 1;

        if self.state.input_index < self.state.sequence.len() {
            self.display.show_text(prompts::GOOD);
            self.timers.schedule(Timer::PromptRestore, GOOD_INTERLUDE);
        } else if self.state.sequence.is_full() {
            self.win();
        } else {
            self.complete_round();
        }
    }

    /// Highlight the pressed glyph briefly, whatever the outcome.
    fn flash_feedback(&mut self, button: Button) {
        // Replacing the pending clear would strand the older highlight.
        if let Some(Timer::FeedbackClear(previous)) = self.timers.pending(TimerSlot::Feedback)
            && previous != button
        {
            self.display.set_highlight(previous, false);
        }
        self.display.set_highlight(button, true);
        self.timers
            .schedule(Timer::FeedbackClear(button), FEEDBACK_PULSE);
    }

    pub(super) fn clear_feedback(&mut self, button: Button) {
        self.display.set_highlight(button, false);
    }

    pub(super) fn restore_prompt(&mut self) {
        if self.state.mode.accepts_input() {
            self.display.show_text(prompts::YOUR_TURN);
        }
    }

    fn complete_round(&mut self) {
        self.timers.cancel_slot(TimerSlot::Prompt);
        self.append_random_step();
        self.state.round = self.state.sequence.len();
        self.refresh_info();
        info!(len = self.state.sequence.len(), "Round complete");
        self.start_transition();
    }

    fn win(&mut self) {
        self.timers.cancel_slot(TimerSlot::Prompt);
        self.state.mode = Mode::GameOver(Outcome::Won);
        self.display.show_text(prompts::YOU_WIN);
        self.refresh_info();
        info!(len = self.state.sequence.len(), "Player won");
    }

    fn lose(&mut self, pressed: Button, expected: Button) {
        self.haptics.pulse_long();
        self.timers.cancel_slot(TimerSlot::Playback);
        self.timers.cancel_slot(TimerSlot::Prompt);
        self.state.mode = Mode::GameOver(Outcome::Lost);
        self.display.show_text(prompts::GAME_OVER);
        self.refresh_info();
        info!(
            %pressed,
            %expected,
            index = self.state.input_index,
            round = self.state.round,
            "Game over"
        );
    }
}
