//! Phase advancement.
//!
//! ```text
//! lobby -> role-reveal -> nomination -> voting -> legislative -> policy-boards
//!                              ^                                     |
//!                              |                          [special-power]
//!                              +------------- discussion <-----------+
//! ```
//!
//! Any phase may jump to game-over when a win condition is met.

use crate::ai::memory;
use crate::core::{ActionError, GameRng, GameState, Phase, PlayerId};

use super::government;

/// Reject unless the game is in `phase`.
pub(crate) fn expect_phase(
    state: &GameState,
    phase: Phase,
    action: &'static str,
) -> Result<(), ActionError> {
    if state.phase == Phase::GameOver {
        return Err(ActionError::GameOver);
    }
    if state.phase != phase {
        return Err(ActionError::WrongPhase { action, phase: state.phase });
    }
    Ok(())
}

/// The sitting president. Missing only outside a dealt game.
pub(crate) fn sitting_president(
    state: &GameState,
    action: &'static str,
) -> Result<PlayerId, ActionError> {
    state
        .president
        .ok_or(ActionError::WrongPhase { action, phase: state.phase })
}

/// Move to the next phase.
pub fn advance(state: &mut GameState, rng: &mut GameRng) -> Result<(), ActionError> {
    const ACTION: &str = "advance phase";

    let from = state.phase;
    match from {
        Phase::Lobby => return Err(ActionError::WrongPhase { action: ACTION, phase: from }),
        Phase::GameOver => return Err(ActionError::GameOver),
        Phase::RoleReveal => state.phase = Phase::Nomination,
        Phase::Nomination => close_nomination(state)?,
        Phase::Voting => government::tally(state, rng)?,
        Phase::Legislative => return Err(ActionError::SessionInProgress),
        Phase::PolicyBoards => {
            state.phase = if state.available_power.is_some() {
                Phase::SpecialPower
            } else {
                Phase::Discussion
            };
        }
        Phase::SpecialPower => match state.available_power {
            Some(power) => return Err(ActionError::PowerPending(power)),
            None => state.phase = Phase::Discussion,
        },
        Phase::Discussion => next_round(state)?,
    }

    tracing::debug!(%from, to = %state.phase, round = state.round, "phase advanced");
    Ok(())
}

/// Nomination is done: open the ballot.
fn close_nomination(state: &mut GameState) -> Result<(), ActionError> {
    if state.chancellor.is_none() {
        return Err(ActionError::NoChancellor);
    }
    state.ballot.clear();
    state.phase = Phase::Voting;
    Ok(())
}

/// Close discussion and start the next round.
///
/// The presidency rotates unless it was already moved this round by a
/// special election or a chaos enactment.
fn next_round(state: &mut GameState) -> Result<(), ActionError> {
    let president = sitting_president(state, "advance phase")?;
    memory::observe_all(state, memory::Observation::Discussion);

    if state.hold_presidency {
        state.hold_presidency = false;
    } else {
        state.previous_president = Some(president);
        if state.chancellor.is_some() {
            state.previous_chancellor = state.chancellor;
        }
        state.president = state.next_alive_after(president);
    }

    state.chancellor = None;
    state.ballot.clear();
    state.policy_peek = None;
    state.round += 1;
    state.phase = Phase::Nomination;
    Ok(())
}
