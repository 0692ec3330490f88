//! Session-level settlement tests: full ante/pick/resolve cycles, the
//! conservation property, and escalation across step boundaries.

use cubehall_types::{TableConfig, TablePhase};
use proptest::collection::vec;
use proptest::prelude::*;

use crate::{CubeTable, RoundError};

fn table(players: &[&str], bankroll: i64, min_bet: u64, increment: u64, step: u64) -> CubeTable {
    CubeTable::new(TableConfig {
        players: players.iter().map(|s| s.to_string()).collect(),
        starting_bankroll: bankroll,
        starting_min_bet: min_bet,
        bet_increment: increment,
        rounds_per_step: step,
        boot_when_broke: false,
    })
    .unwrap()
}

#[test]
fn test_solo_win_returns_ante_plus_jackpot() {
    // Single seat, bankroll 200, ante 10, empty jackpot.
    let mut t = table(&["Lone"], 200, 10, 5, 100);

    t.start_round().unwrap();
    assert_eq!(t.snapshot().players[0].bankroll, 190);

    t.pick_number(0, 4).unwrap();
    let summary = t.resolve(4).unwrap();

    assert_eq!(summary.winners, vec!["Lone".to_string()]);
    assert_eq!(summary.pot, 10);
    assert_eq!(summary.jackpot, 0);
    assert_eq!(summary.round, 1);
    assert_eq!(t.snapshot().players[0].bankroll, 200);
}

#[test]
fn test_two_player_pot_carry_sequence() {
    let mut t = table(&["P1", "P2"], 200, 10, 5, 100);

    // Round 1: P1 hits. Pot is both antes, winner takes all of it.
    t.start_round().unwrap();
    t.pick_number(0, 3).unwrap();
    t.pick_number(1, 5).unwrap();
    let summary = t.resolve(3).unwrap();
    assert_eq!(summary.pot, 20);
    assert_eq!(summary.share, 20);
    assert_eq!(summary.jackpot, 0);

    // Round 2: both miss, the pot carries.
    t.start_round().unwrap();
    t.pick_number(0, 1).unwrap();
    t.pick_number(1, 2).unwrap();
    let summary = t.resolve(6).unwrap();
    assert_eq!(summary.jackpot, 20);

    // Round 3: new antes plus the carry go to the sole winner.
    t.start_round().unwrap();
    t.pick_number(0, 2).unwrap();
    t.pick_number(1, 6).unwrap();
    let summary = t.resolve(6).unwrap();
    assert_eq!(summary.pot, 40);
    assert_eq!(summary.winners, vec!["P2".to_string()]);
    assert_eq!(summary.share, 40);
    assert_eq!(summary.jackpot, 0);
}

#[test]
fn test_split_remainder_survives_as_jackpot() {
    // Escalate every round so the round-2 pot is odd for two winners:
    // carry 30 plus three antes of 15 makes 75.
    let mut t = table(&["A", "B", "C"], 500, 10, 5, 1);

    t.start_round().unwrap();
    for i in 0..3 {
        t.pick_number(i, 1).unwrap();
    }
    let summary = t.resolve(2).unwrap();
    assert_eq!(summary.jackpot, 30);
    assert_eq!(summary.min_bet, 15);

    t.start_round().unwrap();
    t.pick_number(0, 4).unwrap();
    t.pick_number(1, 4).unwrap();
    t.pick_number(2, 5).unwrap();
    let summary = t.resolve(4).unwrap();
    assert_eq!(summary.pot, 75);
    assert_eq!(summary.share, 37);
    assert_eq!(summary.jackpot, 1);

    // Nothing destroyed: 37 + 37 + 1 = 75.
    assert_eq!(summary.share * 2 + summary.jackpot, summary.pot);
}

#[test]
fn test_escalation_only_at_step_boundaries() {
    const M: u64 = 10;
    const I: u64 = 5;
    const K: u64 = 4;
    let mut t = table(&["Lone"], 10_000, M, I, K);

    for round in 1..=(3 * K) {
        t.start_round().unwrap();
        t.pick_number(0, 1).unwrap();
        let summary = t.resolve(2).unwrap();
        let expected = M + I * (round / K);
        assert_eq!(summary.min_bet, expected, "after round {round}");
    }
}

#[test]
fn test_resolution_gated_at_every_table_size() {
    let names = ["A", "B", "C", "D"];
    for seats in 1..=4usize {
        let mut t = table(&names[..seats], 100, 10, 5, 5);
        t.start_round().unwrap();

        // Leave the last seat uncommitted.
        for seat in 0..seats - 1 {
            t.pick_number(seat, 3).unwrap();
        }
        let err = t.resolve(3).unwrap_err();
        if seats == 1 {
            assert!(matches!(err, RoundError::NoPick { .. }), "seats={seats}");
        } else {
            assert_eq!(err, RoundError::NotAllCommitted, "seats={seats}");
        }

        t.pick_number(seats - 1, 3).unwrap();
        assert!(t.resolve(3).is_ok(), "seats={seats}");
    }
}

#[test]
fn test_min_bet_is_monotone() {
    let mut t = table(&["A", "B"], 100_000, 10, 5, 2);
    let mut last = t.snapshot().min_bet;
    for _ in 0..20 {
        t.start_round().unwrap();
        t.pick_number(0, 1).unwrap();
        t.pick_number(1, 2).unwrap();
        let summary = t.resolve(3).unwrap();
        assert!(summary.min_bet >= last);
        last = summary.min_bet;
    }
}

#[test]
fn test_session_ends_cleanly_when_escalation_outruns_bankrolls() {
    // Tight bankrolls with steep escalation: the session must end with a
    // named broke player, never a partial ante or a panic.
    let mut t = table(&["A", "B"], 30, 10, 10, 1);

    let mut rounds = 0;
    loop {
        match t.start_round() {
            Ok(_) => {}
            Err(RoundError::PlayerBroke { min_bet, .. }) => {
                let state = t.snapshot();
                assert_eq!(state.phase, TablePhase::Idle);
                assert!(state.players.iter().any(|p| p.bankroll < min_bet as i64));
                break;
            }
            Err(other) => panic!("unexpected error: {other}"),
        }
        t.pick_number(0, 1).unwrap();
        t.pick_number(1, 2).unwrap();
        t.resolve(3).unwrap();
        rounds += 1;
        assert!(rounds < 100, "session never ended");
    }
}

proptest! {
    /// Conservation: across any sequence of resolved rounds, with any mix
    /// of winners, losers, and carried jackpots, `sum(bankrolls) + jackpot`
    /// never changes.
    #[test]
    fn conservation_over_random_sessions(
        seats in 1usize..=4,
        rounds in vec((vec(1u8..=6u8, 4), 1u8..=6u8), 1..30),
    ) {
        let names = ["A", "B", "C", "D"];
        let mut t = table(&names[..seats], 1_000, 10, 5, 3);
        let initial = t.snapshot().total_currency();

        for (picks, rolled) in rounds {
            if t.start_round().is_err() {
                break;
            }
            for seat in 0..seats {
                t.pick_number(seat, picks[seat]).unwrap();
            }
            let summary = t.resolve(rolled).unwrap();

            let state = t.snapshot();
            prop_assert_eq!(state.total_currency(), initial);
            prop_assert_eq!(state.jackpot, summary.jackpot);
        }
    }

    /// A second pick in the same round never lands, regardless of value.
    #[test]
    fn commits_are_write_once(first in 1u8..=6u8, second in 1u8..=6u8) {
        let mut t = table(&["A", "B"], 100, 10, 5, 5);
        t.start_round().unwrap();
        t.pick_number(0, first).unwrap();

        let err = t.pick_number(0, second).unwrap_err();
        prop_assert_eq!(err, RoundError::AlreadyCommitted { player: "A".to_string() });
        prop_assert_eq!(t.snapshot().players[0].pick, Some(first));
    }
}
