//! Pot and escalation arithmetic for round settlement.
//!
//! Payout policy is pot-based with jackpot carry: every round the pot is
//! all antes plus whatever jackpot carried forward. Winners split the pot
//! with floor division and the remainder carries as the new jackpot, so no
//! currency unit is ever destroyed or fabricated.

/// Result of dividing a pot among winners.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct PotSplit {
    /// Amount credited to each winner.
    pub share: u64,
    /// Leftover preserved as the new jackpot.
    pub remainder: u64,
}

/// Total at stake for a round: one ante per seat plus the carried jackpot.
pub(crate) fn pot_size(min_bet: u64, seats: usize, jackpot: u64) -> u64 {
    min_bet * seats as u64 + jackpot
}

/// Split `pot` among `winner_count` winners. `winner_count` must be
/// non-zero; a winnerless round carries the whole pot instead.
pub(crate) fn split_pot(pot: u64, winner_count: usize) -> PotSplit {
    debug_assert!(winner_count > 0);
    let share = pot / winner_count as u64;
    PotSplit {
        share,
        remainder: pot - share * winner_count as u64,
    }
}

/// Ante for the next round. Strict modular check: the ante grows by exactly
/// one increment each time the resolved-round counter crosses a step
/// boundary, and never between boundaries.
pub(crate) fn escalate(min_bet: u64, round: u64, rounds_per_step: u64, increment: u64) -> u64 {
    if round % rounds_per_step == 0 {
        min_bet + increment
    } else {
        min_bet
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pot_size() {
        assert_eq!(pot_size(10, 2, 0), 20);
        assert_eq!(pot_size(10, 2, 20), 40);
        assert_eq!(pot_size(20, 1, 0), 20);
    }

    #[test]
    fn test_split_preserves_remainder() {
        // pot=17, three winners: 5 each, 2 carries. Never 0, never discarded.
        let split = split_pot(17, 3);
        assert_eq!(split.share, 5);
        assert_eq!(split.remainder, 2);
        assert_eq!(split.share * 3 + split.remainder, 17);
    }

    #[test]
    fn test_split_even() {
        let split = split_pot(40, 2);
        assert_eq!(split.share, 20);
        assert_eq!(split.remainder, 0);
    }

    #[test]
    fn test_split_sole_winner_takes_all() {
        let split = split_pot(37, 1);
        assert_eq!(split.share, 37);
        assert_eq!(split.remainder, 0);
    }

    #[test]
    fn test_escalation_boundaries() {
        // Step every 3 rounds, increment 10.
        assert_eq!(escalate(20, 1, 3, 10), 20);
        assert_eq!(escalate(20, 2, 3, 10), 20);
        assert_eq!(escalate(20, 3, 3, 10), 30);
        assert_eq!(escalate(30, 4, 3, 10), 30);
        assert_eq!(escalate(30, 5, 3, 10), 30);
        assert_eq!(escalate(30, 6, 3, 10), 40);
    }
}
