//! Error types.
//!
//! - `ConfigError`: a caller handed the engine something it can never
//!   accept (unsupported table size, blank name, a checkpoint dealt for a
//!   different table). Surfaced before a game exists.
//! - `ActionError`: an action that a guard rejected. The engine's state is
//!   untouched whenever one of these is returned.

use thiserror::Error;

use super::player::PlayerId;
use super::policy::Policy;
use super::state::Phase;
use crate::powers::SpecialPower;

/// Invalid game configuration.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum ConfigError {
    #[error("unsupported player count {0}: expected 5, 7 or 9")]
    UnsupportedPlayerCount(usize),

    #[error("human player name must not be blank")]
    EmptyHumanName,

    #[error("chat probability {0} is outside [0, 1]")]
    InvalidChatProbability(f64),

    #[error("checkpoint holds {found} seats but the configuration expects {expected}")]
    SeatCountMismatch { expected: usize, found: usize },
}

/// Why a nominee cannot be chancellor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum Ineligibility {
    #[error("is dead")]
    Dead,
    #[error("is not eligible")]
    Ineligible,
    #[error("is the sitting president")]
    SittingPresident,
    #[error("was the previous chancellor")]
    PreviousChancellor,
    #[error("was the previous president")]
    PreviousPresident,
}

/// A rejected action.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ActionError {
    #[error("{action} is not allowed during {phase}")]
    WrongPhase { action: &'static str, phase: Phase },

    #[error("the game is over")]
    GameOver,

    #[error("no such seat: {0}")]
    UnknownPlayer(PlayerId),

    #[error("{0} is dead")]
    DeadPlayer(PlayerId),

    #[error("{nominee} cannot be chancellor: {reason}")]
    IneligibleNominee { nominee: PlayerId, reason: Ineligibility },

    #[error("no chancellor has been nominated")]
    NoChancellor,

    #[error("policies have already been drawn this session")]
    AlreadyDrawn,

    #[error("the president has not drawn policies yet")]
    NothingDrawn,

    #[error("the president has not passed policies to the chancellor yet")]
    NothingPassed,

    #[error("{0} is not among the cards in hand")]
    PolicyNotInHand(Policy),

    #[error("the legislative session has not finished")]
    SessionInProgress,

    #[error("no special power is available")]
    NoPowerAvailable,

    #[error("{0} must be resolved before play continues")]
    PowerPending(SpecialPower),

    #[error("{0} requires a target")]
    TargetRequired(SpecialPower),

    #[error("{target} is not a valid target for {power}: {reason}")]
    InvalidTarget {
        power: SpecialPower,
        target: PlayerId,
        reason: &'static str,
    },

    #[error("{0} has already been investigated")]
    AlreadyInvestigated(PlayerId),
}
