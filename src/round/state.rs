//! Round state types.

/// Position in the linear round flow.
///
/// States advance one way: `Dealing → PlayerTurn → DealerTurn → Settled`,
/// except that a player bust skips the dealer turn entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundState {
    /// Initial cards are being dealt.
    Dealing,
    /// Waiting for player decisions.
    PlayerTurn,
    /// Dealer draws out their hand.
    DealerTurn,
    /// Round has ended and the result is available.
    Settled,
}
