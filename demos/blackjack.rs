//! Console blackjack demo.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use parlor::{Decision, DecisionSource, Hand, Outcome, Round, RoundResult, Seat, TableView};

/// Reads hit/stand decisions from stdin.
///
/// Unrecognized input stands, so a closed stdin also ends the turn.
struct ConsoleDecisions;

impl DecisionSource for ConsoleDecisions {
    fn decide(&mut self) -> Decision {
        Decision::from_input(&prompt_line("\nHit or Stand? (h/s): "))
    }
}

/// Prints hands and the final result to stdout.
struct ConsoleView;

impl TableView for ConsoleView {
    fn show_hand(&mut self, seat: Seat, hand: &Hand) {
        let who = match seat {
            Seat::Player => "Player",
            Seat::Dealer => "Dealer",
        };

        println!("\n{who}'s hand:");
        for card in hand.cards() {
            println!("{card}");
        }
        println!("Value: {}", hand.total());
    }

    fn show_outcome(&mut self, result: &RoundResult) {
        let message = match result.outcome {
            Outcome::PlayerBust => "Player busts! Dealer wins.",
            Outcome::DealerBust => "Dealer busts! Player wins.",
            Outcome::DealerWins => "Dealer wins.",
            Outcome::PlayerWins => "Player wins!",
            Outcome::Tie => "It's a tie!",
        };
        println!("\n{message}");
    }
}

fn main() {
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();

    let mut round = Round::new(seed);

    // The outcome is informational; the process exits 0 either way.
    if let Err(err) = round.play(&mut ConsoleDecisions, &mut ConsoleView) {
        println!("Round aborted: {err}");
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_lowercase()
}
