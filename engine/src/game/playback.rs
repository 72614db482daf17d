use tracing::{debug, info};

use says_types::{Mode, PAUSE, ShowPhase, show_duration};

use super::{Game, prompts};
use crate::device::{Display, Haptics, MoveSource};
use crate::timers::{Timer, TimerSlot};

impl<D: Display, H: Haptics, R: MoveSource> Game<D, H, R> {
    /// Reset the turn and start showing the current sequence right away.
    pub fn begin_round(&mut self) {
        let state = &mut self.state;
        state.input_index = 0;
        state.show_index = 0;
        state.show_phase = ShowPhase::ShowingStep;
        state.mode = Mode::ShowingSequence;
        state.round = state.sequence.len();
        state.show_duration = show_duration(state.sequence.len());

        self.refresh_info();
        info!(
            round = self.state.round,
            len = self.state.sequence.len(),
            show_ms = self.state.show_duration.as_millis() as u64,
            "Begin round"
        );

        self.timers.cancel_slot(TimerSlot::Playback);
        self.playback_tick();
    }

    /// One step of the show/pause cycle.
    pub fn playback_tick(&mut self) {
        if !self.state.mode.is_showing() {
            debug!(mode = ?self.state.mode, "Playback tick outside playback ignored");
            return;
        }

        let index = self.state.show_index;
        let Some(step) = self.state.sequence.get(index) else {
            self.finish_playback();
            return;
        };

        match self.state.show_phase {
            ShowPhase::ShowingStep => {
                debug!(index, %step, "Showing step");
                self.display.show_text(step.name());
                self.display.set_highlight(step, true);
                self.state.show_phase = ShowPhase::Pausing;
                self.timers
                    .schedule(Timer::Playback, self.state.show_duration);
            }
            ShowPhase::Pausing => {
                self.display.show_text("");
                self.display.set_highlight(step, false);
                self.state.show_index += 1;
                self.state.show_phase = ShowPhase::ShowingStep;
                self.timers.schedule(Timer::Playback, PAUSE);
            }
        }
    }

    fn finish_playback(&mut self) {
        self.clear_highlights();
        self.state.mode = Mode::AwaitingInput;
        self.display.show_text(prompts::YOUR_TURN);
        debug!(len = self.state.sequence.len(), "Playback finished");
    }
}
