//! Resolving a special power.

use crate::core::{
    ActionError, GameState, Investigation, Phase, PlayerId, PolicyPeek, Role, VictoryReason,
};
use crate::powers::SpecialPower;

use super::eligibility;
use super::flow::{expect_phase, sitting_president};
use super::victory;

/// Cards shown by policy peek.
pub const PEEK_SIZE: usize = 3;

/// The president uses the pending power.
///
/// Executing Hitler ends the game immediately and leaves the power
/// unconsumed; every other resolution consumes the slot and opens
/// discussion.
pub fn use_power(state: &mut GameState, target: Option<PlayerId>) -> Result<(), ActionError> {
    const ACTION: &str = "use special power";

    expect_phase(state, Phase::SpecialPower, ACTION)?;
    let power = state.available_power.ok_or(ActionError::NoPowerAvailable)?;
    let president = sitting_president(state, ACTION)?;

    let target = if power.needs_target() {
        let target = target.ok_or(ActionError::TargetRequired(power))?;
        eligibility::check_power_target(state, power, target)?;
        Some(target)
    } else {
        None
    };

    let president_name = state.name_of(president);
    match (power, target) {
        (SpecialPower::InvestigateLoyalty, Some(target)) => {
            let role = state.player(target).ok_or(ActionError::UnknownPlayer(target))?.role;
            state
                .investigations
                .insert(target, Investigation { investigator: president, role });
            let target_name = state.name_of(target);
            state.announce(format!("{} investigated {}", president_name, target_name));
        }
        (SpecialPower::SpecialElection, Some(target)) => {
            state.president = Some(target);
            state.hold_presidency = true;
            let target_name = state.name_of(target);
            state.announce(format!(
                "{} called a special election. {} is now President.",
                president_name, target_name
            ));
        }
        (SpecialPower::Execution, Some(target)) => {
            let seat = state.player_mut(target).ok_or(ActionError::UnknownPlayer(target))?;
            seat.is_alive = false;
            seat.is_eligible = false;
            let was_hitler = seat.role == Role::Hitler;
            state.ballot.remove(&target);

            let target_name = state.name_of(target);
            state.announce(format!("{} executed {}", president_name, target_name));
            tracing::debug!(%president, %target, was_hitler, "seat executed");

            if was_hitler {
                state.announce("Hitler was executed! Liberals win!");
                victory::declare(state, VictoryReason::HitlerExecuted);
                return Ok(());
            }
        }
        (SpecialPower::PolicyPeek, _) => {
            let cards = state.deck.peek(PEEK_SIZE);
            state.policy_peek = Some(PolicyPeek { president, cards });
            state.announce(format!("{} looked at the top 3 policy cards", president_name));
        }
        (power, None) => return Err(ActionError::TargetRequired(power)),
    }

    if let Some(slot) = state.power_slot.take() {
        state.powers.consume(slot, power);
    }
    state.available_power = None;
    state.phase = Phase::Discussion;
    tracing::debug!(%power, ?target, "special power resolved");
    Ok(())
}
