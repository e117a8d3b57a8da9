//! The display boundary.

use crate::hand::Hand;
use crate::result::RoundResult;

/// Which party a hand belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Seat {
    /// The player.
    Player,
    /// The dealer.
    Dealer,
}

/// Renders table state during a round.
///
/// Pure output: nothing a view produces feeds back into the round. The
/// round shows both hands after the deal, the player hand after each hit,
/// the dealer hand after the dealer turn, and the final result.
pub trait TableView {
    /// Shows a hand and its running total.
    fn show_hand(&mut self, seat: Seat, hand: &Hand);

    /// Shows the final result of the round.
    fn show_outcome(&mut self, result: &RoundResult);
}

/// A view that renders nothing, for tests and headless play.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentView;

impl TableView for SilentView {
    fn show_hand(&mut self, _seat: Seat, _hand: &Hand) {}

    fn show_outcome(&mut self, _result: &RoundResult) {}
}
