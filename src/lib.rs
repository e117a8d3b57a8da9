//! Educational console game engines with optional `no_std` support.
//!
//! The crate provides a single-round blackjack engine and a small
//! rock-paper-scissors module ([`rps`]). [`Round`] drives the deal, the
//! player decision loop, the dealer draw-to-17 loop, and settlement against
//! pluggable decision and display boundaries.
//!
//! # Example
//!
//! ```
//! use parlor::{Decision, Round, ScriptedDecisions, SilentView};
//!
//! let mut round = Round::new(42);
//! let result = round.play(
//!     &mut ScriptedDecisions::new(&[Decision::Hit, Decision::Stand]),
//!     &mut SilentView,
//! )?;
//! let _ = result.outcome;
//! # Ok::<(), parlor::EmptyDeckError>(())
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod decision;
pub mod error;
pub mod hand;
pub mod result;
pub mod round;
pub mod rps;
pub mod view;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deck::Deck;
pub use decision::{Decision, DecisionSource, ScriptedDecisions};
pub use error::EmptyDeckError;
pub use hand::Hand;
pub use result::{Outcome, RoundResult};
pub use round::{Round, RoundState};
pub use view::{Seat, SilentView, TableView};
