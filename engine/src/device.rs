//! Narrow interfaces the game drives, plus the stock implementations.
//!
//! The game never knows how text reaches a screen or how a motor buzzes; it
//! calls these traits and moves on. Everything here is fire-and-forget.

use std::collections::VecDeque;
use std::time::{SystemTime, UNIX_EPOCH};

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use says_types::Button;
use says_types::ui::Pulse;

/// Output surface: one status line, one info line, three button glyphs and a
/// full-screen flash overlay.
pub trait Display {
    /// Replace the primary status text.
    fn show_text(&mut self, message: &str);
    /// Replace the secondary line. Empty hides it.
    fn show_round_info(&mut self, info: &str);
    fn set_highlight(&mut self, button: Button, on: bool);
    /// `Some(phase)` draws the celebration overlay for that phase, `None` is the base state.
    fn set_flash(&mut self, phase: Option<u32>);
}

pub trait Haptics {
    fn pulse(&mut self, pulse: Pulse);

    fn pulse_short(&mut self) {
        self.pulse(Pulse::Short);
    }

    fn pulse_long(&mut self) {
        self.pulse(Pulse::Long);
    }

    fn pulse_double(&mut self) {
        self.pulse(Pulse::Double);
    }
}

/// Where new sequence steps come from.
pub trait MoveSource {
    fn next_move(&mut self) -> Button;
}

/// Uniform random moves from a generator seeded once.
#[derive(Debug, Clone)]
pub struct SeededMoves {
    rng: SmallRng,
    seed: u64,
}

impl SeededMoves {
    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
            seed,
        }
    }

    /// Seed from the wall clock.
    #[must_use]
    pub fn from_clock() -> Self {
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_nanos() as u64)
            .unwrap_or_default();
        Self::from_seed(seed)
    }

    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl MoveSource for SeededMoves {
    fn next_move(&mut self) -> Button {
        Button::ALL[self.rng.random_range(0..Button::ALL.len())]
    }
}

/// Buffers pulses until the frontend drains them once per frame.
#[derive(Debug, Default)]
pub struct HapticQueue {
    enabled: bool,
    queued: VecDeque<Pulse>,
}

impl HapticQueue {
    #[must_use]
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            queued: VecDeque::new(),
        }
    }

    pub fn drain(&mut self) -> impl Iterator<Item = Pulse> + '_ {
        self.queued.drain(..)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.queued.is_empty()
    }
}

impl Haptics for HapticQueue {
    fn pulse(&mut self, pulse: Pulse) {
        if !self.enabled {
            debug!(?pulse, "Haptics disabled, pulse dropped");
            return;
        }
        self.queued.push_back(pulse);
    }
}

#[cfg(test)]
mod tests {
    use says_types::Button;
    use says_types::ui::Pulse;

    use super::{HapticQueue, Haptics, MoveSource, SeededMoves};

    #[test]
    fn same_seed_same_moves() {
        let mut a = SeededMoves::from_seed(7);
        let mut b = SeededMoves::from_seed(7);
        let first: Vec<Button> = (0..32).map(|_| a.next_move()).collect();
        let second: Vec<Button> = (0..32).map(|_| b.next_move()).collect();
        assert_eq!(first, second);
        assert_eq!(a.seed(), 7);
    }

    #[test]
    fn moves_cover_all_buttons() {
        let mut moves = SeededMoves::from_seed(1234);
        let drawn: Vec<Button> = (0..300).map(|_| moves.next_move()).collect();
        for button in Button::ALL {
            assert!(drawn.contains(&button), "{button} never drawn");
        }
    }

    #[test]
    fn queue_keeps_order_and_drains() {
        let mut queue = HapticQueue::new(true);
        queue.pulse_double();
        queue.pulse_short();
        let drained: Vec<Pulse> = queue.drain().collect();
        assert_eq!(drained, vec![Pulse::Double, Pulse::Short]);
        assert!(queue.is_empty());
    }

    #[test]
    fn disabled_queue_drops_pulses() {
        let mut queue = HapticQueue::new(false);
        queue.pulse_long();
        assert!(queue.is_empty());
    }
}
