use serde::{Deserialize, Serialize};

use super::{Player, TableConfig};

/// Table lifecycle phase.
///
/// Replaces the ad hoc `roundActive`/`inRoom` flags with one explicit
/// state: `Idle` between rounds, `Active` while antes are at risk, and
/// `Booted` as the terminal out-of-room state (solo rooms only). Every
/// operation guards on the phase before mutating anything.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TablePhase {
    /// No round in flight; `start_round` is accepted.
    Idle,
    /// Antes debited, picks being collected, awaiting `resolve`.
    Active,
    /// Terminal: a broke player was booted to the lobby. Only `reset`
    /// leaves this phase.
    Booted,
}

impl TablePhase {
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Active)
    }
}

/// Per-player classification for a resolved round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Win,
    Miss,
}

/// One player's line in a resolved round's outcome sheet.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerOutcome {
    pub name: String,
    pub pick: u8,
    pub outcome: Outcome,
}

/// Full table state. The engine hands out deep copies of this as its
/// snapshot; presentation layers render it and can never mutate engine
/// internals through it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableState {
    /// Seats in order; fixed count for the session.
    pub players: Vec<Player>,
    /// Current required ante. Non-decreasing within a session.
    pub min_bet: u64,
    /// Carry balance from no-winner rounds and split remainders.
    pub jackpot: u64,
    /// Rounds resolved so far (not rounds started).
    pub round: u64,
    pub phase: TablePhase,
    /// Last rolled value, or `None` before any resolution.
    pub last_result: Option<u8>,
    /// Outcome sheet of the most recently resolved round.
    pub last_outcomes: Vec<PlayerOutcome>,
}

impl TableState {
    /// Fresh session state from a (validated) configuration.
    pub fn new(config: &TableConfig) -> Self {
        Self {
            players: config
                .players
                .iter()
                .map(|name| Player::new(name.clone(), config.starting_bankroll))
                .collect(),
            min_bet: config.starting_min_bet,
            jackpot: 0,
            round: 0,
            phase: TablePhase::Idle,
            last_result: None,
            last_outcomes: Vec::new(),
        }
    }

    /// Total currency in play: bankrolls plus the carried jackpot. The
    /// settlement engine conserves this across every resolution.
    pub fn total_currency(&self) -> i64 {
        self.players.iter().map(|p| p.bankroll).sum::<i64>() + self.jackpot as i64
    }

    /// True once every seat holds a usable commit.
    pub fn all_committed(&self) -> bool {
        self.players.iter().all(Player::has_committed)
    }
}

/// Successful `start_round` receipt.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StartSummary {
    /// Ante debited from every seat.
    pub min_bet: u64,
    /// 1-based index of the round now in play.
    pub round: u64,
}

/// Successful `pick_number` receipt.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PickReceipt {
    /// True once this commit completed the table; the cube may roll.
    pub all_committed: bool,
    /// Name of the player who just committed.
    pub last_commit_by: String,
}

/// Settlement summary for a resolved round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundSummary {
    pub rolled: u8,
    /// Names of the players whose pick matched the roll.
    pub winners: Vec<String>,
    /// Total at stake this round: all antes plus the carried jackpot.
    pub pot: u64,
    /// Amount credited to each winner (zero when nobody won).
    pub share: u64,
    /// Jackpot after settlement (carry or split remainder).
    pub jackpot: u64,
    /// Ante for the next round, after any escalation.
    pub min_bet: u64,
    /// Rounds resolved so far, including this one.
    pub round: u64,
    pub outcomes: Vec<PlayerOutcome>,
}
