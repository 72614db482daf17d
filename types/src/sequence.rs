//! Fixed-capacity move sequence.

use thiserror::Error;

use crate::Button;

/// Longest sequence a game can reach. Completing a round at this length wins.
pub const MAX_LEN: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("sequence already holds {MAX_LEN} steps")]
pub struct SequenceFull;

/// Append-only sequence of buttons, bounded by [`MAX_LEN`].
///
/// Only `steps[..len]` is meaningful; the tail is filler and never observed.
#[derive(Debug, Clone, Copy)]
pub struct Sequence {
    steps: [Button; MAX_LEN],
    len: usize,
}

impl Default for Sequence {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for Sequence {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl Eq for Sequence {}

impl Sequence {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            steps: [Button::Up; MAX_LEN],
            len: 0,
        }
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[must_use]
    pub const fn is_full(&self) -> bool {
        self.len == MAX_LEN
    }

    pub fn push(&mut self, step: Button) -> Result<(), SequenceFull> {
        if self.is_full() {
            return Err(SequenceFull);
        }
        self.steps[self.len] = step;
        self.len += 1;
        Ok(())
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<Button> {
        self.as_slice().get(index).copied()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Button] {
        &self.steps[..self.len]
    }

    pub fn clear(&mut self) {
        self.len = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::{MAX_LEN, Sequence, SequenceFull};
    use crate::Button;

    #[test]
    fn push_until_full_then_rejects() {
        let mut seq = Sequence::new();
        for i in 0..MAX_LEN {
            let button = Button::ALL[i % 3];
            assert_eq!(seq.push(button), Ok(()));
        }
        assert!(seq.is_full());
        assert_eq!(seq.push(Button::Down), Err(SequenceFull));
        assert_eq!(seq.len(), MAX_LEN);
    }

    #[test]
    fn get_only_sees_valid_prefix() {
        let mut seq = Sequence::new();
        seq.push(Button::Down).unwrap();
        assert_eq!(seq.get(0), Some(Button::Down));
        assert_eq!(seq.get(1), None);
        assert_eq!(seq.as_slice(), &[Button::Down]);
    }

    #[test]
    fn clear_empties_sequence() {
        let mut seq = Sequence::new();
        seq.push(Button::Select).unwrap();
        seq.clear();
        assert!(seq.is_empty());
        assert_eq!(seq.get(0), None);
        assert_eq!(seq, Sequence::new());
    }
}
