use crate::decision::{Decision, DecisionSource};
use crate::error::EmptyDeckError;
use crate::view::{Seat, TableView};

use super::{DEALER_STANDS_AT, Round, RoundState};

impl Round {
    /// Deals the initial two cards to each side, player first, alternating.
    pub(super) fn deal(&mut self) -> Result<(), EmptyDeckError> {
        for _ in 0..2 {
            let card = self.deck.draw()?;
            self.player.add_card(card);
            let card = self.deck.draw()?;
            self.dealer.add_card(card);
        }

        self.state = RoundState::PlayerTurn;
        Ok(())
    }

    /// Runs the player decision loop.
    ///
    /// Asks for one decision per iteration while the total is below 21. A
    /// hit draws one card and re-evaluates; a stand exits immediately.
    pub(super) fn player_turn<D, V>(
        &mut self,
        decisions: &mut D,
        view: &mut V,
    ) -> Result<(), EmptyDeckError>
    where
        D: DecisionSource,
        V: TableView,
    {
        while self.player.total() < 21 {
            match decisions.decide() {
                Decision::Hit => {
                    let card = self.deck.draw()?;
                    self.player.add_card(card);
                    view.show_hand(Seat::Player, &self.player);
                }
                Decision::Stand => break,
            }
        }

        Ok(())
    }

    /// Dealer draws until reaching 17 or better.
    ///
    /// The threshold is a plain comparison on the corrected total; the hand
    /// has already demoted soft aces, so no separate soft-17 rule applies.
    pub(super) fn dealer_turn(&mut self) -> Result<(), EmptyDeckError> {
        while self.dealer.total() < DEALER_STANDS_AT {
            let card = self.deck.draw()?;
            self.dealer.add_card(card);
        }

        Ok(())
    }
}
