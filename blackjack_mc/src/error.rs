use thiserror::Error;

use crate::{simulation::RoundPhase, Action};

/// Errors raised by a single round. None of them leaves a hand half-updated.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RoundError {
    #[error("{operation} is only allowed in {expected} phase, the round is in {actual} phase")]
    WrongPhase {
        operation: &'static str,
        expected: &'static str,
        actual: RoundPhase,
    },

    #[error("cannot {action} hand {hand_index}: {reason}")]
    InvalidAction {
        action: Action,
        hand_index: usize,
        reason: &'static str,
    },
}

#[derive(Debug, Error)]
pub enum SimulationError {
    #[error("number of decks must be at least 1, got {0}")]
    InvalidDeckCount(u8),

    /// A strategy broke the action contract. The run halts instead of
    /// recording a corrupted round.
    #[error("trial #{trial} aborted: {source}")]
    Round {
        trial: usize,
        #[source]
        source: RoundError,
    },

    #[error("cannot build worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}
