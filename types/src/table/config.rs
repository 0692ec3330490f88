use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{
    DEFAULT_BET_INCREMENT, DEFAULT_ROUNDS_PER_STEP, DEFAULT_STARTING_BANKROLL,
    DEFAULT_STARTING_MIN_BET, MAX_NAME_LENGTH, MAX_PLAYERS, SOLO_BET_INCREMENT,
    SOLO_ROUNDS_PER_STEP, SOLO_STARTING_BANKROLL, SOLO_STARTING_MIN_BET,
};

/// Rejection reasons for a malformed [`TableConfig`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("a table needs at least one player")]
    NoPlayers,
    #[error("too many players (got={got}, max={max})")]
    TooManyPlayers { got: usize, max: usize },
    #[error("player name too long (name={name}, max={max})")]
    NameTooLong { name: String, max: usize },
    #[error("duplicate player name: {name}")]
    DuplicateName { name: String },
    #[error("starting bankroll must be positive (got={got})")]
    NonPositiveBankroll { got: i64 },
    #[error("starting min bet must be positive")]
    ZeroMinBet,
    #[error("rounds per escalation step must be positive")]
    ZeroRoundsPerStep,
    #[error("starting bankroll {bankroll} cannot cover the first ante {min_bet}")]
    BankrollBelowAnte { bankroll: i64, min_bet: u64 },
}

/// Session configuration, fixed for the table's lifetime.
///
/// Defaults match the two-seat table: bankroll 200, ante 10, increment 5,
/// escalation every 5 resolved rounds. [`TableConfig::solo`] builds the
/// single-seat room preset instead.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableConfig {
    /// Seat names, in seat order. Must be unique within the session.
    pub players: Vec<String>,
    /// Bankroll every player starts (and resets) with.
    pub starting_bankroll: i64,
    /// Ante required from every player at round start.
    pub starting_min_bet: u64,
    /// Amount added to the ante at each escalation step.
    pub bet_increment: u64,
    /// Number of resolved rounds between escalation steps.
    pub rounds_per_step: u64,
    /// When true, a failed ante check boots the table to a terminal
    /// out-of-room state instead of merely rejecting the round.
    pub boot_when_broke: bool,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            players: vec!["P1".to_string(), "P2".to_string()],
            starting_bankroll: DEFAULT_STARTING_BANKROLL,
            starting_min_bet: DEFAULT_STARTING_MIN_BET,
            bet_increment: DEFAULT_BET_INCREMENT,
            rounds_per_step: DEFAULT_ROUNDS_PER_STEP,
            boot_when_broke: false,
        }
    }
}

impl TableConfig {
    /// Single-seat room preset: smaller bankroll, steeper escalation, and
    /// the broke player is booted to the lobby.
    pub fn solo(name: impl Into<String>) -> Self {
        Self {
            players: vec![name.into()],
            starting_bankroll: SOLO_STARTING_BANKROLL,
            starting_min_bet: SOLO_STARTING_MIN_BET,
            bet_increment: SOLO_BET_INCREMENT,
            rounds_per_step: SOLO_ROUNDS_PER_STEP,
            boot_when_broke: true,
        }
    }

    /// Validate the configuration. Engines must reject invalid configs at
    /// construction rather than tolerate them at runtime.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.players.is_empty() {
            return Err(ConfigError::NoPlayers);
        }
        if self.players.len() > MAX_PLAYERS {
            return Err(ConfigError::TooManyPlayers {
                got: self.players.len(),
                max: MAX_PLAYERS,
            });
        }
        for (i, name) in self.players.iter().enumerate() {
            if name.len() > MAX_NAME_LENGTH {
                return Err(ConfigError::NameTooLong {
                    name: name.clone(),
                    max: MAX_NAME_LENGTH,
                });
            }
            if self.players[..i].contains(name) {
                return Err(ConfigError::DuplicateName { name: name.clone() });
            }
        }
        if self.starting_bankroll <= 0 {
            return Err(ConfigError::NonPositiveBankroll {
                got: self.starting_bankroll,
            });
        }
        if self.starting_min_bet == 0 {
            return Err(ConfigError::ZeroMinBet);
        }
        if self.rounds_per_step == 0 {
            return Err(ConfigError::ZeroRoundsPerStep);
        }
        if self.starting_bankroll < self.starting_min_bet as i64 {
            return Err(ConfigError::BankrollBelowAnte {
                bankroll: self.starting_bankroll,
                min_bet: self.starting_min_bet,
            });
        }
        Ok(())
    }
}
