//! Win conditions.
//!
//! Evaluated after every accepted action. Once an outcome is recorded it is
//! never replaced.

use crate::core::{
    GameState, Outcome, Phase, Role, VictoryReason, FASCIST_TRACK, HITLER_ZONE, LIBERAL_TRACK,
};

/// The win condition the state currently satisfies, if any.
///
/// Hitler's election only counts while the approved government is seated,
/// i.e. during the legislative session that follows a passing ballot.
#[must_use]
pub fn pending_victory(state: &GameState) -> Option<VictoryReason> {
    if state.liberal_policies >= LIBERAL_TRACK {
        return Some(VictoryReason::LiberalTrackComplete);
    }
    if state.fascist_policies >= FASCIST_TRACK {
        return Some(VictoryReason::FascistTrackComplete);
    }

    let chancellor_is_hitler = state
        .chancellor
        .and_then(|id| state.player(id))
        .is_some_and(|p| p.role == Role::Hitler);

    if state.phase == Phase::Legislative
        && chancellor_is_hitler
        && state.fascist_policies >= HITLER_ZONE
        && state.ballot_passes()
    {
        return Some(VictoryReason::HitlerElected);
    }

    None
}

/// Record the outcome if a win condition holds and none is recorded yet.
///
/// Returns the newly recorded outcome.
pub fn settle(state: &mut GameState) -> Option<Outcome> {
    if state.outcome.is_some() {
        return None;
    }
    let reason = pending_victory(state)?;
    Some(declare(state, reason))
}

/// End the game for `reason`.
pub fn declare(state: &mut GameState, reason: VictoryReason) -> Outcome {
    let outcome = Outcome::new(reason);
    state.outcome = Some(outcome);
    state.phase = Phase::GameOver;
    state.available_power = None;
    state.power_slot = None;
    state.announce(format!("Game over: {}. The {}s win!", reason, outcome.winner));

    tracing::info!(winner = %outcome.winner, reason = %reason, round = state.round, "game over");
    outcome
}
