//! Settlement result types.

/// Outcome of a settled round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Player went over 21; the round ends before the dealer draws.
    PlayerBust,
    /// Dealer went over 21 while drawing to 17.
    DealerBust,
    /// Dealer finished with the higher total.
    DealerWins,
    /// Player finished with the higher total.
    PlayerWins,
    /// Both totals are equal.
    Tie,
}

/// Final totals of a settled round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundResult {
    /// The outcome of the round.
    pub outcome: Outcome,
    /// The player's final hand total.
    pub player_total: u8,
    /// The dealer's final hand total.
    pub dealer_total: u8,
}
