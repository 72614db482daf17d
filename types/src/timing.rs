//! Timing rules: playback speed ramp, fixed pauses and celebration lengths.

use std::time::Duration;

use crate::MAX_LEN;

/// Playback show time for the first round.
pub const BASE_SHOW: Duration = Duration::from_millis(700);
/// Playback never gets faster than this.
pub const MIN_SHOW: Duration = Duration::from_millis(200);
/// Blank gap between two shown steps.
pub const PAUSE: Duration = Duration::from_millis(300);
/// How long a pressed button stays highlighted.
pub const FEEDBACK_PULSE: Duration = Duration::from_millis(150);
/// How long "Good" stays up before the prompt comes back.
pub const GOOD_INTERLUDE: Duration = Duration::from_millis(200);

const STEEP_DROP_MS: i64 = 60;
const GENTLE_DROP_MS: i64 = 35;
const TRANSITION_MS_PER_CYCLE: u64 = 150;
const TRANSITION_TAIL_MS: u64 = 200;

/// Per-step show time for a sequence of `length` steps.
///
/// Steep ramp for lengths 2..=3, gentler after that, floored at [`MIN_SHOW`].
#[must_use]
pub fn show_duration(length: usize) -> Duration {
    let base = BASE_SHOW.as_millis() as i64;
    let len = length as i64;
    let ms = match length {
        0 | 1 => base,
        2 | 3 => base - STEEP_DROP_MS * (len - 1),
        _ => base - STEEP_DROP_MS * 2 - GENTLE_DROP_MS * (len - 3),
    };
    let floor = MIN_SHOW.as_millis() as i64;
    Duration::from_millis(ms.max(floor) as u64)
}

/// Celebration intensity for reaching a new sequence length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Milestone {
    Regular,
    /// Lengths 4 and 6.
    Minor,
    /// The final length.
    Major,
}

impl Milestone {
    #[must_use]
    pub const fn for_length(length: usize) -> Self {
        match length {
            4 | 6 => Milestone::Minor,
            MAX_LEN => Milestone::Major,
            _ => Milestone::Regular,
        }
    }

    #[must_use]
    pub const fn flash_cycles(self) -> u32 {
        match self {
            Milestone::Regular => 3,
            Milestone::Minor => 5,
            Milestone::Major => 7,
        }
    }

    /// Time from the start of a round transition until the next round begins.
    #[must_use]
    pub const fn transition_duration(self) -> Duration {
        Duration::from_millis(
            TRANSITION_MS_PER_CYCLE * self.flash_cycles() as u64 + TRANSITION_TAIL_MS,
        )
    }
}

/// Screen shape of the device being emulated. Only affects flash pacing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormFactor {
    #[default]
    Rect,
    Round,
}

impl FormFactor {
    #[must_use]
    pub const fn flash_interval(self) -> Duration {
        match self {
            FormFactor::Rect => Duration::from_millis(140),
            FormFactor::Round => Duration::from_millis(180),
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "rect" | "rectangle" => Some(FormFactor::Rect),
            "round" | "chalk" => Some(FormFactor::Round),
            _ => None,
        }
    }
}
