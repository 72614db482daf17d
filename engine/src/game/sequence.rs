use tracing::{debug, info};

use super::Game;
use crate::device::{Display, Haptics, MoveSource};

impl<D: Display, H: Haptics, R: MoveSource> Game<D, H, R> {
    /// Append one random step. Returns `false` (and changes nothing) at capacity;
    /// reaching capacity is the win condition, handled by the caller.
    pub fn append_random_step(&mut self) -> bool {
        let step = self.moves.next_move();
        if let Err(err) = self.state.sequence.push(step) {
            debug!(%err, len = self.state.sequence.len(), "Step not added");
            return false;
        }
        info!(%step, len = self.state.sequence.len(), "Added step");
        true
    }
}
