//! Local backend for cubehall.
//!
//! Stands in for the presentation layer: it starts rounds, scripts picks
//! for every seat, spins the [`Cube`], and feeds the settled value back
//! into the engine, logging what a HUD would display along the way.

use cubehall_engine::{CubeTable, RoundError};
use cubehall_types::{ConfigError, RoundSummary, TableConfig, TableState, CUBE_FACES};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::Serialize;
use tracing::{debug, info, warn};

/// The cube roll source. Seeded so sessions replay identically; yields a
/// face value in 1-6 once per spin. The engine never rolls — it only
/// accepts what the cube settled on.
pub struct Cube {
    rng: ChaCha8Rng,
}

impl Cube {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Spin and return the top face.
    pub fn roll(&mut self) -> u8 {
        self.rng.gen_range(1..=CUBE_FACES)
    }
}

/// Closing report for a simulated session.
#[derive(Debug, Serialize)]
pub struct SessionReport {
    /// Rounds that reached settlement.
    pub rounds_played: u64,
    /// Rounds settled with at least one winner.
    pub rounds_won: u64,
    /// Largest pot seen at settlement.
    pub biggest_pot: u64,
    /// Set when the session ended because a seat could not cover the ante.
    pub ended_broke: Option<String>,
    /// Final table snapshot.
    pub final_state: TableState,
}

/// Drives one table through scripted rounds.
pub struct Simulator {
    table: CubeTable,
    cube: Cube,
    picks: ChaCha8Rng,
}

impl Simulator {
    pub fn new(config: TableConfig, seed: u64) -> Result<Self, ConfigError> {
        let table = CubeTable::new(config)?;
        Ok(Self {
            table,
            cube: Cube::new(seed),
            // Separate stream so pick scripting never perturbs the cube.
            picks: ChaCha8Rng::seed_from_u64(seed ^ 0x9e37_79b9_7f4a_7c15),
        })
    }

    pub fn table(&self) -> &CubeTable {
        &self.table
    }

    /// Play one full round: ante, one random pick per seat, spin, settle.
    pub fn play_round(&mut self) -> Result<RoundSummary, RoundError> {
        let start = self.table.start_round()?;
        debug!(round = start.round, ante = start.min_bet, "round open");

        let seats = self.table.seats();
        for seat in 0..seats {
            let pick = self.picks.gen_range(1..=CUBE_FACES);
            let receipt = self.table.pick_number(seat, pick)?;
            if receipt.all_committed {
                debug!(last = %receipt.last_commit_by, "all seats committed");
            }
        }
        // A lone player finalizes explicitly, the way the solo room's HUD
        // did before spinning.
        if seats == 1 {
            self.table.lock_pick(0)?;
        }

        let rolled = self.cube.roll();
        self.table.resolve(rolled)
    }

    /// Attempt up to `rounds` rounds; stops early when a seat goes broke.
    pub fn run(&mut self, rounds: u64) -> SessionReport {
        let mut report = SessionReport {
            rounds_played: 0,
            rounds_won: 0,
            biggest_pot: 0,
            ended_broke: None,
            final_state: self.table.snapshot(),
        };

        for _ in 0..rounds {
            match self.play_round() {
                Ok(summary) => {
                    report.rounds_played += 1;
                    if !summary.winners.is_empty() {
                        report.rounds_won += 1;
                    }
                    report.biggest_pot = report.biggest_pot.max(summary.pot);
                }
                Err(RoundError::PlayerBroke { player, min_bet }) => {
                    info!(%player, min_bet, "session over: seat cannot cover the ante");
                    report.ended_broke = Some(player);
                    break;
                }
                Err(err) => {
                    // The scripted driver never calls out of order, so any
                    // other rejection is a bug worth surfacing loudly.
                    warn!(%err, "unexpected engine rejection, closing table");
                    break;
                }
            }
        }

        report.final_state = self.table.snapshot();
        report
    }
}
