//! Haptic pulses and the on-screen effect that stands in for them.

use std::time::Duration;

use super::animation::{AnimPhase, EffectTimer};

/// A fire-and-forget vibration request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pulse {
    Short,
    Long,
    /// Two short buzzes with a gap.
    Double,
}

impl Pulse {
    /// Total length of the pulse pattern.
    #[must_use]
    pub const fn duration(self) -> Duration {
        match self {
            Pulse::Short => Duration::from_millis(100),
            Pulse::Long => Duration::from_millis(500),
            Pulse::Double => Duration::from_millis(300),
        }
    }

    /// Relative intensity, used to rank pulses that land together.
    #[must_use]
    pub const fn strength(self) -> u8 {
        match self {
            Pulse::Short => 1,
            Pulse::Double => 2,
            Pulse::Long => 3,
        }
    }

    /// Whether the motor is on at `progress` (0.0..=1.0) through the pattern.
    #[must_use]
    pub fn is_buzzing(self, progress: f32) -> bool {
        match self {
            Pulse::Short | Pulse::Long => progress < 1.0,
            // on / off / on in equal thirds
            Pulse::Double => !(1.0 / 3.0..2.0 / 3.0).contains(&progress) && progress < 1.0,
        }
    }
}

/// Shake animation state for one pulse.
#[derive(Debug, Clone)]
pub struct PulseEffect {
    pulse: Pulse,
    timer: EffectTimer,
}

impl PulseEffect {
    #[must_use]
    pub fn new(pulse: Pulse) -> Self {
        Self {
            pulse,
            timer: EffectTimer::new(pulse.duration()),
        }
    }

    pub fn advance(&mut self, delta: Duration) {
        self.timer.advance(delta);
    }

    #[must_use]
    pub fn phase(&self) -> AnimPhase {
        self.timer.phase()
    }

    #[must_use]
    pub fn pulse(&self) -> Pulse {
        self.pulse
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        matches!(self.phase(), AnimPhase::Completed)
    }

    /// Whether the emulated motor is on right now.
    #[must_use]
    pub fn is_buzzing(&self) -> bool {
        match self.phase() {
            AnimPhase::Running { progress } => self.pulse.is_buzzing(progress),
            AnimPhase::Completed => false,
        }
    }
}
