use tracing::{debug, info};

use says_types::{Milestone, Mode};

use super::Game;
use crate::device::{Display, Haptics, MoveSource};
use crate::timers::{Timer, TimerSlot};

impl<D: Display, H: Haptics, R: MoveSource> Game<D, H, R> {
    /// Celebrate reaching the new sequence length, then begin the next round.
    pub fn start_transition(&mut self) {
        let length = self.state.sequence.len();
        let milestone = Milestone::for_length(length);
        self.state.mode = Mode::RoundTransition;

        self.haptics.pulse_double();
        match milestone {
            Milestone::Minor => self.haptics.pulse_short(),
            Milestone::Major => self.haptics.pulse_long(),
            Milestone::Regular => {}
        }

        self.display.show_text(&format!("Length {length}"));
        self.start_flash(milestone.flash_cycles());

        let duration = milestone.transition_duration();
        self.timers.schedule(Timer::TransitionDone, duration);
        info!(
            length,
            ?milestone,
            duration_ms = duration.as_millis() as u64,
            "Round transition"
        );
    }

    fn start_flash(&mut self, cycles: u32) {
        self.state.flash_phase = 0;
        self.display.set_flash(Some(0));
        self.timers.schedule(
            Timer::FlashTick { cycles },
            self.form_factor.flash_interval(),
        );
    }

    pub(super) fn flash_tick(&mut self, cycles: u32) {
        if !self.state.mode.is_transitioning() {
            self.display.set_flash(None);
            return;
        }

        self.state.flash_phase += 1;
        if self.state.flash_phase >= cycles {
            debug!(cycles, "Flash finished");
            self.display.set_flash(None);
            return;
        }
        self.display.set_flash(Some(self.state.flash_phase));
        self.timers.schedule(
            Timer::FlashTick { cycles },
            self.form_factor.flash_interval(),
        );
    }

    pub(super) fn finish_transition(&mut self) {
        if self.timers.cancel_slot(TimerSlot::Flash) {
            debug!(phase = self.state.flash_phase, "Flash cut short");
        }
        self.state.flash_phase = 0;
        self.display.set_flash(None);
        self.begin_round();
    }
}
