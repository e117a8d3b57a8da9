//! Rock-paper-scissors tests.

use parlor::rps::{Move, Outcome, duel};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

#[test]
fn the_cycle_beats_one_way() {
    assert!(Move::Rock.beats(Move::Scissors));
    assert!(Move::Scissors.beats(Move::Paper));
    assert!(Move::Paper.beats(Move::Rock));

    assert!(!Move::Scissors.beats(Move::Rock));
    assert!(!Move::Paper.beats(Move::Scissors));
    assert!(!Move::Rock.beats(Move::Paper));
}

#[test]
fn no_move_beats_itself() {
    for first in Move::ALL {
        assert!(!first.beats(first));
        assert_eq!(duel(first, first), Outcome::Tie);
    }
}

#[test]
fn duel_settles_from_the_player_side() {
    assert_eq!(duel(Move::Rock, Move::Scissors), Outcome::Win);
    assert_eq!(duel(Move::Rock, Move::Paper), Outcome::Lose);
    assert_eq!(duel(Move::Paper, Move::Rock), Outcome::Win);
    assert_eq!(duel(Move::Scissors, Move::Rock), Outcome::Lose);
}

#[test]
fn parse_accepts_the_three_moves_only() {
    assert_eq!(Move::parse("rock"), Some(Move::Rock));
    assert_eq!(Move::parse("PAPER"), Some(Move::Paper));
    assert_eq!(Move::parse(" scissors "), Some(Move::Scissors));

    assert_eq!(Move::parse("lizard"), None);
    assert_eq!(Move::parse(""), None);
    assert_eq!(Move::parse("rock paper"), None);
}

#[test]
fn random_is_deterministic_per_seed() {
    let mut first = ChaCha8Rng::seed_from_u64(3);
    let mut second = ChaCha8Rng::seed_from_u64(3);

    for _ in 0..20 {
        assert_eq!(Move::random(&mut first), Move::random(&mut second));
    }
}

#[test]
fn random_reaches_every_move() {
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let mut counts = [0_u32; 3];

    for _ in 0..300 {
        counts[Move::random(&mut rng) as usize] += 1;
    }

    // 100 expected per move; any reasonable draw stays well inside.
    for (index, &count) in counts.iter().enumerate() {
        assert!(count > 40, "move {index} drawn only {count} times");
    }
}

#[test]
fn moves_render_lowercase() {
    assert_eq!(Move::Rock.to_string(), "rock");
    assert_eq!(Move::Paper.to_string(), "paper");
    assert_eq!(Move::Scissors.to_string(), "scissors");
}
