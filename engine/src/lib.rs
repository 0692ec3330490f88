//! Wager round settlement engine for cubehall.
//!
//! The engine owns all table state (bankrolls, ante, jackpot, round
//! counter, per-seat picks) and exposes a small synchronous operation set:
//! start a round, commit picks, resolve against a rolled cube value, and
//! reset. It never rolls the cube itself; the roll source hands it a value
//! in 1-6 once the spin settles.
//!
//! Every detected error is a recoverable, reported [`RoundError`]; nothing
//! panics for a caller mistake. Across every resolution the engine
//! conserves total currency: antes and payouts only move value between
//! bankrolls and the carried jackpot.

mod payout;
mod table;

#[cfg(test)]
mod integration_tests;

pub use table::CubeTable;

use cubehall_types::CUBE_FACES;
use thiserror::Error;

/// Recoverable rejection reasons for engine operations.
///
/// Sequencing errors mean the caller invoked an operation out of order;
/// validation errors reject bad input with no state mutation; economic
/// errors name the seat at fault so the presentation layer can react.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RoundError {
    #[error("a round is already active")]
    RoundAlreadyActive,
    #[error("{player} cannot cover the {min_bet} ante")]
    PlayerBroke { player: String, min_bet: u64 },
    #[error("no active round")]
    NoActiveRound,
    #[error("player index {index} out of range (seats={seats})")]
    InvalidPlayer { index: usize, seats: usize },
    #[error("pick {pick} outside 1-{max}", max = CUBE_FACES)]
    InvalidPick { pick: u8 },
    #[error("{player} already committed this round")]
    AlreadyCommitted { player: String },
    #[error("{player}'s pick is locked until the round resolves")]
    PickLocked { player: String },
    #[error("rolled value {rolled} outside 1-{max}", max = CUBE_FACES)]
    InvalidRoll { rolled: u8 },
    #[error("not all players have committed")]
    NotAllCommitted,
    #[error("{player} has no pick recorded")]
    NoPick { player: String },
    #[error("table is booted to the lobby; reset to play again")]
    Booted,
}
