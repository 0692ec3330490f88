use serde::{Deserialize, Serialize};

/// Seat state for one player at the table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Stable identifier, unique within the session.
    pub name: String,
    /// Signed currency balance. The engine only debits what it has
    /// pre-checked, so this never goes negative through normal play.
    pub bankroll: i64,
    /// The number committed for the current round, if any.
    pub pick: Option<u8>,
    /// True once the pick is locked in for the current round.
    pub committed: bool,
    /// Finalization lock: once set, further picks are rejected until the
    /// round resolves. Survives `clear_pick`.
    pub locked: bool,
}

impl Player {
    pub fn new(name: String, bankroll: i64) -> Self {
        Self {
            name,
            bankroll,
            pick: None,
            committed: false,
            locked: false,
        }
    }

    /// True if this seat has a usable commit for resolution.
    pub fn has_committed(&self) -> bool {
        self.committed && self.pick.is_some()
    }

    /// Clear all per-round state (pick, commit flag, lock).
    pub fn clear_round_state(&mut self) {
        self.pick = None;
        self.committed = false;
        self.locked = false;
    }
}
