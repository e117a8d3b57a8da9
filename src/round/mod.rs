//! Round engine and state management.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::deck::Deck;
use crate::decision::DecisionSource;
use crate::error::EmptyDeckError;
use crate::hand::Hand;
use crate::result::{Outcome, RoundResult};
use crate::view::{Seat, TableView};

pub mod state;
mod turns;

pub use state::RoundState;

/// Dealer draws while below this total.
const DEALER_STANDS_AT: u8 = 17;

/// A single blackjack round between one player and the dealer.
///
/// The round owns the deck and both hands and moves through a linear state
/// machine: dealing, player turn, dealer turn, settlement. [`Round::play`]
/// drives the whole flow against a decision source and a view.
///
/// # Example
///
/// ```
/// use parlor::{Round, ScriptedDecisions, SilentView};
///
/// let mut round = Round::new(42);
/// let result = round.play(&mut ScriptedDecisions::new(&[]), &mut SilentView)?;
/// let _ = result.outcome;
/// # Ok::<(), parlor::EmptyDeckError>(())
/// ```
#[derive(Debug)]
pub struct Round {
    /// Cards remaining this round.
    deck: Deck,
    /// The player's hand.
    player: Hand,
    /// The dealer's hand.
    dealer: Hand,
    /// Current position in the round flow.
    state: RoundState,
    /// Result, present once settled.
    result: Option<RoundResult>,
}

impl Round {
    /// Creates a round over a freshly shuffled deck.
    ///
    /// The seed fully determines the shuffle: the same seed produces the
    /// same draw order.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut deck = Deck::standard();
        deck.shuffle(&mut rng);
        Self::with_deck(deck)
    }

    /// Creates a round over a prepared deck, without shuffling.
    #[must_use]
    pub const fn with_deck(deck: Deck) -> Self {
        Self {
            deck,
            player: Hand::new(),
            dealer: Hand::new(),
            state: RoundState::Dealing,
            result: None,
        }
    }

    /// Plays the round to completion.
    ///
    /// Deals two cards to each side, runs the player decision loop, then the
    /// dealer draw loop, and settles. A player bust settles immediately; the
    /// dealer never draws. Calling `play` on an already settled round
    /// returns the stored result without touching the deck.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyDeckError`] if the deck runs out mid-round. A full
    /// 52-card deck cannot be exhausted by one two-party round, but the
    /// contract also covers prepared decks of any size.
    pub fn play<D, V>(
        &mut self,
        decisions: &mut D,
        view: &mut V,
    ) -> Result<RoundResult, EmptyDeckError>
    where
        D: DecisionSource,
        V: TableView,
    {
        if let Some(result) = self.result {
            return Ok(result);
        }

        self.deal()?;
        view.show_hand(Seat::Player, &self.player);
        view.show_hand(Seat::Dealer, &self.dealer);

        self.player_turn(decisions, view)?;

        if self.player.is_bust() {
            return Ok(self.settle(view));
        }

        self.state = RoundState::DealerTurn;
        self.dealer_turn()?;
        view.show_hand(Seat::Dealer, &self.dealer);

        Ok(self.settle(view))
    }

    /// Compares the final totals and records the result.
    fn settle<V: TableView>(&mut self, view: &mut V) -> RoundResult {
        let outcome = if self.player.is_bust() {
            Outcome::PlayerBust
        } else if self.dealer.is_bust() {
            Outcome::DealerBust
        } else if self.dealer.total() > self.player.total() {
            Outcome::DealerWins
        } else if self.dealer.total() < self.player.total() {
            Outcome::PlayerWins
        } else {
            Outcome::Tie
        };

        let result = RoundResult {
            outcome,
            player_total: self.player.total(),
            dealer_total: self.dealer.total(),
        };

        self.state = RoundState::Settled;
        self.result = Some(result);
        view.show_outcome(&result);

        result
    }

    /// Returns the current round state.
    #[must_use]
    pub const fn state(&self) -> RoundState {
        self.state
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn player_hand(&self) -> &Hand {
        &self.player
    }

    /// Returns the dealer's hand.
    #[must_use]
    pub const fn dealer_hand(&self) -> &Hand {
        &self.dealer
    }

    /// Returns the number of cards remaining in the deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }

    /// Returns the result if the round has settled.
    #[must_use]
    pub const fn result(&self) -> Option<RoundResult> {
        self.result
    }
}
