//! The legislative session: draw three, discard one, enact one.

use crate::core::{ActionError, GameRng, GameState, Hand, Phase, Policy};

use super::flow::expect_phase;

/// Cards the president draws each session.
pub const DRAW_SIZE: usize = 3;

/// The president draws the top three policies.
pub fn draw_policies(state: &mut GameState, rng: &mut GameRng) -> Result<(), ActionError> {
    expect_phase(state, Phase::Legislative, "draw policies")?;
    if !state.presidential_draw.is_empty() || !state.chancellor_choice.is_empty() {
        return Err(ActionError::AlreadyDrawn);
    }

    state.presidential_draw = state.deck.draw(DRAW_SIZE, rng);
    tracing::debug!(president = ?state.president, cards = state.presidential_draw.len(), "policies drawn");
    Ok(())
}

/// The president discards one card; the rest go to the chancellor.
///
/// Only the first matching card is removed, so discarding `liberal` from
/// `[liberal, fascist, liberal]` passes `[fascist, liberal]`.
pub fn presidential_discard(state: &mut GameState, policy: Policy) -> Result<(), ActionError> {
    expect_phase(state, Phase::Legislative, "presidential discard")?;
    if state.presidential_draw.is_empty() {
        return Err(ActionError::NothingDrawn);
    }

    let mut hand = std::mem::take(&mut state.presidential_draw);
    if let Err(err) = remove_first(&mut hand, policy) {
        state.presidential_draw = hand;
        return Err(err);
    }

    state.deck.discard([policy]);
    state.chancellor_choice = hand;
    Ok(())
}

/// The chancellor enacts one card and discards the other.
///
/// A fascist enactment that reaches an unused power slot opens the
/// special-power phase; anything else goes to the policy boards.
pub fn chancellor_enact(state: &mut GameState, policy: Policy) -> Result<(), ActionError> {
    expect_phase(state, Phase::Legislative, "chancellor enact")?;
    if state.chancellor_choice.is_empty() {
        return Err(ActionError::NothingPassed);
    }

    let mut hand = std::mem::take(&mut state.chancellor_choice);
    if let Err(err) = remove_first(&mut hand, policy) {
        state.chancellor_choice = hand;
        return Err(err);
    }
    state.deck.discard(hand);

    match policy {
        Policy::Liberal => state.liberal_policies += 1,
        Policy::Fascist => state.fascist_policies += 1,
    }
    state.announce(format!(
        "A {} policy was enacted. Liberal {} / Fascist {}.",
        policy, state.liberal_policies, state.fascist_policies
    ));
    tracing::debug!(
        %policy,
        liberal = state.liberal_policies,
        fascist = state.fascist_policies,
        "policy enacted"
    );

    let slot = state.fascist_policies;
    let granted = match policy {
        Policy::Fascist => state.powers.available(state.player_count, slot),
        Policy::Liberal => None,
    };
    match granted {
        Some(power) => {
            state.available_power = Some(power);
            state.power_slot = Some(slot);
            state.phase = Phase::SpecialPower;
            tracing::debug!(%power, slot, "special power unlocked");
        }
        None => state.phase = Phase::PolicyBoards,
    }
    Ok(())
}

fn remove_first(hand: &mut Hand, policy: Policy) -> Result<(), ActionError> {
    let index = hand
        .iter()
        .position(|p| *p == policy)
        .ok_or(ActionError::PolicyNotInHand(policy))?;
    hand.remove(index);
    Ok(())
}
