//! Who may be nominated, and who may be targeted by a power.
//!
//! The engine uses these checks to guard actions; collaborators use the
//! list forms to offer only valid choices.

use crate::core::{ActionError, GameState, Ineligibility, PlayerId};
use crate::powers::SpecialPower;

/// Why `nominee` may not be chancellor right now, if anything.
#[must_use]
pub fn nominee_ineligibility(state: &GameState, nominee: PlayerId) -> Option<Ineligibility> {
    let player = state.player(nominee)?;

    if !player.is_alive {
        Some(Ineligibility::Dead)
    } else if !player.is_eligible {
        Some(Ineligibility::Ineligible)
    } else if state.president == Some(nominee) {
        Some(Ineligibility::SittingPresident)
    } else if state.previous_chancellor == Some(nominee) {
        Some(Ineligibility::PreviousChancellor)
    } else if state.previous_president == Some(nominee) {
        Some(Ineligibility::PreviousPresident)
    } else {
        None
    }
}

/// Validate a nomination.
pub fn check_nominee(state: &GameState, nominee: PlayerId) -> Result<(), ActionError> {
    if state.player(nominee).is_none() {
        return Err(ActionError::UnknownPlayer(nominee));
    }
    match nominee_ineligibility(state, nominee) {
        Some(reason) => Err(ActionError::IneligibleNominee { nominee, reason }),
        None => Ok(()),
    }
}

/// Seats the sitting president may nominate.
#[must_use]
pub fn eligible_nominees(state: &GameState) -> Vec<PlayerId> {
    state
        .players
        .iter()
        .map(|p| p.id)
        .filter(|id| nominee_ineligibility(state, *id).is_none())
        .collect()
}

/// Validate a power target.
pub fn check_power_target(
    state: &GameState,
    power: SpecialPower,
    target: PlayerId,
) -> Result<(), ActionError> {
    let player = state.player(target).ok_or(ActionError::UnknownPlayer(target))?;

    if !player.is_alive {
        return Err(ActionError::InvalidTarget { power, target, reason: "target is dead" });
    }
    if state.president == Some(target) {
        return Err(ActionError::InvalidTarget {
            power,
            target,
            reason: "the president cannot target themselves",
        });
    }
    if power == SpecialPower::InvestigateLoyalty && state.investigations.contains_key(&target) {
        return Err(ActionError::AlreadyInvestigated(target));
    }
    Ok(())
}

/// Seats `power` may be used on. Empty for policy peek.
#[must_use]
pub fn valid_power_targets(state: &GameState, power: SpecialPower) -> Vec<PlayerId> {
    if !power.needs_target() {
        return Vec::new();
    }
    state
        .players
        .iter()
        .map(|p| p.id)
        .filter(|id| check_power_target(state, power, *id).is_ok())
        .collect()
}
