pub mod error;
pub mod runner;
pub mod simulation;
pub mod strategy;
pub mod summary;

use serde_enum_str::{Deserialize_enum_str, Serialize_enum_str};

pub use error::{RoundError, SimulationError};
pub use runner::SimulationRunner;
pub use simulation::{
    hand::Hand,
    participant::{Dealer, Participant, Player},
    shoe::Shoe,
    Card, LoggingHandler, Rank, Round, RoundEventHandler, RoundPhase, RoundRecord, Suit,
};
pub use strategy::{DecisionContext, ReferenceStrategy, Strategy};
pub use summary::SummaryRecord;

/// Highest total a hand can hold without busting.
pub const BLACKJACK: u8 = 21;

/// The dealer draws below this total and stands on anything at or above it,
/// soft totals included (an Ace and a Six stands).
pub const DEALER_STAND_THRESHOLD: u8 = 17;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize_enum_str, Deserialize_enum_str)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Hit,
    Stand,
    Split,
}

/// Result of one player hand against the dealer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize_enum_str, Deserialize_enum_str)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Win,
    Loss,
    Tie,
}
