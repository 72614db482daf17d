//! Cooperative single-threaded timer scheduling.
//!
//! The scheduler owns a virtual clock and one pending entry per [`TimerSlot`].
//! Nothing runs on its own: the owner asks for due timers with
//! [`Scheduler::pop_due`] and dispatches them one at a time, so exactly one
//! callback is ever in flight.
//!
//! ```text
//! schedule(timer, delay) ──► slot[timer.slot()] = Pending { deadline: now + delay }
//!                             (any previous entry in that slot is dropped)
//! pop_due(until)          ──► earliest deadline <= until, slot cleared, clock = deadline
//! ```

use std::time::Duration;

use tracing::trace;

use says_types::Button;

/// A deferred callback, carrying whatever payload the callback needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Timer {
    /// Next step of the sequence playback.
    Playback,
    /// Un-highlight a pressed button.
    FeedbackClear(Button),
    /// Put "Your turn" back after the "Good" interlude.
    PromptRestore,
    /// Round celebration is over; begin the next round.
    TransitionDone,
    /// One frame of the celebration flash.
    FlashTick { cycles: u32 },
}

impl Timer {
    #[must_use]
    pub const fn slot(self) -> TimerSlot {
        match self {
            Timer::Playback => TimerSlot::Playback,
            Timer::FeedbackClear(_) => TimerSlot::Feedback,
            Timer::PromptRestore => TimerSlot::Prompt,
            Timer::TransitionDone => TimerSlot::Transition,
            Timer::FlashTick { .. } => TimerSlot::Flash,
        }
    }
}

/// Independent deferred-callback slots. Each holds at most one pending timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerSlot {
    Playback,
    Feedback,
    Prompt,
    Transition,
    Flash,
}

impl TimerSlot {
    pub const ALL: [TimerSlot; 5] = [
        TimerSlot::Playback,
        TimerSlot::Feedback,
        TimerSlot::Prompt,
        TimerSlot::Transition,
        TimerSlot::Flash,
    ];

    const fn index(self) -> usize {
        self as usize
    }
}

/// Identifies one particular scheduling of a slot.
///
/// Cancelling with a handle whose timer already fired, or was replaced by a
/// newer schedule, does nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerHandle {
    slot: TimerSlot,
    generation: u64,
}

impl TimerHandle {
    #[must_use]
    pub fn slot(self) -> TimerSlot {
        self.slot
    }
}

#[derive(Debug, Clone, Copy)]
struct Pending {
    timer: Timer,
    deadline: Duration,
    generation: u64,
}

#[derive(Debug, Default)]
pub struct Scheduler {
    now: Duration,
    next_generation: u64,
    slots: [Option<Pending>; TimerSlot::ALL.len()],
}

impl Scheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time since the scheduler was created.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Schedule `timer` to fire `delay` from now, replacing anything pending in its slot.
    pub fn schedule(&mut self, timer: Timer, delay: Duration) -> TimerHandle {
        let slot = timer.slot();
        if let Some(previous) = self.slots[slot.index()].take() {
            trace!(?slot, replaced = ?previous.timer, "Timer replaced");
        }

        let generation = self.next_generation;
        self.next_generation = self.next_generation.wrapping_add(1);
        self.slots[slot.index()] = Some(Pending {
            timer,
            deadline: self.now.saturating_add(delay),
            generation,
        });
        trace!(?timer, delay_ms = delay.as_millis() as u64, "Timer scheduled");

        TimerHandle { slot, generation }
    }

    /// Cancel the exact scheduling `handle` refers to. Returns whether anything was cancelled.
    pub fn cancel(&mut self, handle: TimerHandle) -> bool {
        let entry = &mut self.slots[handle.slot.index()];
        if matches!(*entry, Some(pending) if pending.generation == handle.generation) {
            *entry = None;
            return true;
        }
        false
    }

    /// Cancel whatever is pending in `slot`. Returns whether anything was cancelled.
    pub fn cancel_slot(&mut self, slot: TimerSlot) -> bool {
        let cancelled = self.slots[slot.index()].take();
        if let Some(pending) = cancelled {
            trace!(?slot, timer = ?pending.timer, "Timer cancelled");
        }
        cancelled.is_some()
    }

    pub fn cancel_all(&mut self) {
        for slot in TimerSlot::ALL {
            self.cancel_slot(slot);
        }
    }

    #[must_use]
    pub fn pending(&self, slot: TimerSlot) -> Option<Timer> {
        self.slots[slot.index()].map(|pending| pending.timer)
    }

    #[must_use]
    pub fn is_pending(&self, slot: TimerSlot) -> bool {
        self.slots[slot.index()].is_some()
    }

    /// Time left until `slot` fires.
    #[must_use]
    pub fn remaining(&self, slot: TimerSlot) -> Option<Duration> {
        self.slots[slot.index()].map(|pending| pending.deadline.saturating_sub(self.now))
    }

    #[must_use]
    pub fn has_pending(&self) -> bool {
        self.slots.iter().any(Option::is_some)
    }

    /// Take the earliest timer due at or before `until`.
    ///
    /// The clock moves to that timer's deadline so that anything the callback
    /// schedules is measured from when it was due. Ties fire in scheduling order.
    pub fn pop_due(&mut self, until: Duration) -> Option<Timer> {
        let (index, due) = self
            .slots
            .iter()
            .enumerate()
            .filter_map(|(index, entry)| entry.map(|pending| (index, pending)))
            .filter(|(_, pending)| pending.deadline <= until)
            .min_by_key(|(_, pending)| (pending.deadline, pending.generation))?;

        self.slots[index] = None;
        self.now = self.now.max(due.deadline);
        Some(due.timer)
    }

    /// Move the clock forward without firing anything.
    pub fn advance_to(&mut self, until: Duration) {
        self.now = self.now.max(until);
    }
}
