//! The cube-pick wager table.
//!
//! One [`CubeTable`] instance owns one session: a fixed set of seats, the
//! escalating ante, the carried jackpot, and the round lifecycle. All
//! operations are synchronous and atomic; ordering is enforced through the
//! explicit [`TablePhase`] and per-seat commit state, not through locks.

use cubehall_types::{
    ConfigError, Outcome, PickReceipt, PlayerOutcome, RoundSummary, StartSummary, TableConfig,
    TablePhase, TableState, CUBE_FACES,
};
use tracing::{debug, info, warn};

use crate::payout::{escalate, pot_size, split_pot};
use crate::RoundError;

/// Round/wager settlement engine with a configurable seat count (>= 1).
///
/// Control flow per round: `start_round` debits every ante, `pick_number`
/// collects one commit per seat, and once the external roll source settles
/// on a value, `resolve` splits the pot and reopens the table.
pub struct CubeTable {
    config: TableConfig,
    state: TableState,
}

impl CubeTable {
    /// Build a table from a configuration. Malformed configs are rejected
    /// here, not tolerated at runtime.
    pub fn new(config: TableConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let state = TableState::new(&config);
        Ok(Self { config, state })
    }

    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    /// Deep-copied state snapshot. Mutating the returned value has no
    /// effect on the table.
    pub fn snapshot(&self) -> TableState {
        self.state.clone()
    }

    /// Seats at the table.
    pub fn seats(&self) -> usize {
        self.state.players.len()
    }

    fn guard_not_booted(&self) -> Result<(), RoundError> {
        if self.state.phase == TablePhase::Booted {
            return Err(RoundError::Booted);
        }
        Ok(())
    }

    fn guard_active(&self) -> Result<(), RoundError> {
        if !self.state.phase.is_active() {
            return Err(RoundError::NoActiveRound);
        }
        Ok(())
    }

    fn guard_seat(&self, index: usize) -> Result<(), RoundError> {
        if index >= self.state.players.len() {
            return Err(RoundError::InvalidPlayer {
                index,
                seats: self.state.players.len(),
            });
        }
        Ok(())
    }

    /// Start a round: check every seat can cover the ante, then debit all
    /// antes at once and open the pick window.
    ///
    /// The affordability check is atomic: either every seat antes or none
    /// does, and the failing seat is named. On a boot-when-broke table the
    /// failed check additionally moves the session to the terminal
    /// [`TablePhase::Booted`] state.
    pub fn start_round(&mut self) -> Result<StartSummary, RoundError> {
        self.guard_not_booted()?;
        if self.state.phase.is_active() {
            return Err(RoundError::RoundAlreadyActive);
        }

        let min_bet = self.state.min_bet;
        let broke = self
            .state
            .players
            .iter()
            .find(|p| p.bankroll < min_bet as i64)
            .map(|p| p.name.clone());
        if let Some(player) = broke {
            if self.config.boot_when_broke {
                warn!(%player, min_bet, "ante check failed, booting table to lobby");
                self.state.phase = TablePhase::Booted;
            }
            return Err(RoundError::PlayerBroke { player, min_bet });
        }

        for player in &mut self.state.players {
            player.bankroll -= min_bet as i64;
            player.clear_round_state();
        }
        self.state.phase = TablePhase::Active;
        self.state.last_outcomes.clear();

        let round = self.state.round + 1;
        debug!(round, min_bet, seats = self.seats(), "antes collected");
        Ok(StartSummary { min_bet, round })
    }

    /// Alias for [`CubeTable::start_round`], kept for solo-room callers.
    pub fn begin_next_round(&mut self) -> Result<StartSummary, RoundError> {
        self.start_round()
    }

    /// Commit a pick for one seat. Commits are write-once per round: a
    /// second call for the same seat is rejected and the stored pick is
    /// unchanged.
    pub fn pick_number(&mut self, index: usize, pick: u8) -> Result<PickReceipt, RoundError> {
        self.guard_not_booted()?;
        self.guard_active()?;
        self.guard_seat(index)?;
        if pick < 1 || pick > CUBE_FACES {
            return Err(RoundError::InvalidPick { pick });
        }

        let player = &mut self.state.players[index];
        if player.locked {
            return Err(RoundError::PickLocked {
                player: player.name.clone(),
            });
        }
        if player.committed {
            return Err(RoundError::AlreadyCommitted {
                player: player.name.clone(),
            });
        }

        player.pick = Some(pick);
        player.committed = true;
        let last_commit_by = player.name.clone();

        let all_committed = self.state.all_committed();
        debug!(player = %last_commit_by, pick, all_committed, "pick committed");
        Ok(PickReceipt {
            all_committed,
            last_commit_by,
        })
    }

    /// Finalize a seat's commit. Once locked, further `pick_number` calls
    /// are rejected until the round resolves (which unlocks automatically).
    pub fn lock_pick(&mut self, index: usize) -> Result<(), RoundError> {
        self.guard_not_booted()?;
        self.guard_active()?;
        self.guard_seat(index)?;

        let player = &mut self.state.players[index];
        if player.pick.is_none() {
            return Err(RoundError::NoPick {
                player: player.name.clone(),
            });
        }
        player.locked = true;
        Ok(())
    }

    /// Clear a seat's recorded pick (display cleanup between rounds, or an
    /// un-commit while the round is still collecting picks). The lock is
    /// untouched: a locked seat cannot clear until the round resolves.
    pub fn clear_pick(&mut self, index: usize) -> Result<(), RoundError> {
        self.guard_not_booted()?;
        self.guard_seat(index)?;

        let player = &mut self.state.players[index];
        if player.locked {
            return Err(RoundError::PickLocked {
                player: player.name.clone(),
            });
        }
        player.pick = None;
        player.committed = false;
        Ok(())
    }

    /// Settle the round against the rolled cube value.
    ///
    /// Pot policy: `pot = min_bet * seats + jackpot`. Winners split the pot
    /// evenly; the floor-division remainder carries as the new jackpot.
    /// With no winners the entire pot carries. Either way
    /// `sum(bankrolls) + jackpot` is unchanged by settlement.
    pub fn resolve(&mut self, rolled: u8) -> Result<RoundSummary, RoundError> {
        self.guard_not_booted()?;
        self.guard_active()?;
        if rolled < 1 || rolled > CUBE_FACES {
            return Err(RoundError::InvalidRoll { rolled });
        }
        if let Some(player) = self.state.players.iter().find(|p| !p.has_committed()) {
            // Single-seat rooms report the missing pick directly; at a full
            // table the caller only needs to know the gate is still closed.
            if self.seats() == 1 {
                return Err(RoundError::NoPick {
                    player: player.name.clone(),
                });
            }
            return Err(RoundError::NotAllCommitted);
        }

        // Antes are in flight between start_round and here: debited from
        // bankrolls but not yet in the jackpot. Settlement returns them to
        // the system, so the post-settlement total must rise by exactly the
        // antes collected this round.
        #[cfg(debug_assertions)]
        let antes = self.state.min_bet * self.seats() as u64;
        #[cfg(debug_assertions)]
        let before = self.state.total_currency();

        let pot = pot_size(self.state.min_bet, self.seats(), self.state.jackpot);
        let outcomes: Vec<PlayerOutcome> = self
            .state
            .players
            .iter()
            .map(|p| {
                let pick = p.pick.unwrap_or_default();
                PlayerOutcome {
                    name: p.name.clone(),
                    pick,
                    outcome: if pick == rolled {
                        Outcome::Win
                    } else {
                        Outcome::Miss
                    },
                }
            })
            .collect();
        let winners: Vec<String> = outcomes
            .iter()
            .filter(|o| o.outcome == Outcome::Win)
            .map(|o| o.name.clone())
            .collect();

        let share = if winners.is_empty() {
            // Winnerless round: the whole pot (old jackpot plus this
            // round's antes) carries forward.
            self.state.jackpot = pot;
            0
        } else {
            let split = split_pot(pot, winners.len());
            for player in &mut self.state.players {
                if winners.contains(&player.name) {
                    player.bankroll += split.share as i64;
                }
            }
            self.state.jackpot = split.remainder;
            split.share
        };

        self.state.last_result = Some(rolled);
        self.state.last_outcomes = outcomes.clone();
        for player in &mut self.state.players {
            player.locked = false;
        }
        self.state.phase = TablePhase::Idle;
        self.state.round += 1;
        self.state.min_bet = escalate(
            self.state.min_bet,
            self.state.round,
            self.config.rounds_per_step,
            self.config.bet_increment,
        );

        #[cfg(debug_assertions)]
        debug_assert_eq!(self.state.total_currency(), before + antes as i64);

        info!(
            rolled,
            pot,
            share,
            winners = winners.len(),
            jackpot = self.state.jackpot,
            min_bet = self.state.min_bet,
            round = self.state.round,
            "round settled"
        );
        Ok(RoundSummary {
            rolled,
            winners,
            pot,
            share,
            jackpot: self.state.jackpot,
            min_bet: self.state.min_bet,
            round: self.state.round,
            outcomes,
        })
    }

    /// Restore every field to session-start defaults. Player identities and
    /// seat count are untouched. Also the only way out of a booted table.
    pub fn reset(&mut self) {
        self.state = TableState::new(&self.config);
    }
}
