//! State invariants.
//!
//! These never fail for a state produced by the engine. The engine checks
//! them in debug builds after every commit; tests check them after every
//! step of simulated games.

use crate::core::{
    GameState, Phase, Policy, ELECTION_TRACKER_LIMIT, FASCIST_CARDS, FASCIST_TRACK, LIBERAL_CARDS,
    LIBERAL_TRACK, TOTAL_CARDS,
};
use crate::powers::power_for;

/// Invariant violation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub message: String,
}

impl std::fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Invariant violation: {}", self.message)
    }
}

impl std::error::Error for InvariantViolation {}

/// Check all state invariants. Empty when everything holds.
#[must_use]
pub fn check_invariants(state: &GameState) -> Vec<InvariantViolation> {
    let mut violations = Vec::new();
    let mut fail = |message: String| violations.push(InvariantViolation { message });

    if state.phase == Phase::Lobby {
        return Vec::new();
    }

    if state.liberal_policies > LIBERAL_TRACK {
        fail(format!("liberal track at {} > {}", state.liberal_policies, LIBERAL_TRACK));
    }
    if state.fascist_policies > FASCIST_TRACK {
        fail(format!("fascist track at {} > {}", state.fascist_policies, FASCIST_TRACK));
    }
    if state.election_tracker > ELECTION_TRACKER_LIMIT {
        fail(format!("election tracker at {}", state.election_tracker));
    }
    if state.cards_accounted() != TOTAL_CARDS {
        fail(format!("{} cards accounted for, expected {}", state.cards_accounted(), TOTAL_CARDS));
    }
    for (policy, expected) in [(Policy::Liberal, LIBERAL_CARDS), (Policy::Fascist, FASCIST_CARDS)] {
        let in_hands = state
            .presidential_draw
            .iter()
            .chain(state.chancellor_choice.iter())
            .filter(|p| **p == policy)
            .count();
        let found = usize::from(state.enacted(policy)) + state.deck.count(policy) + in_hands;
        if found != expected {
            fail(format!("{} {} cards accounted for, expected {}", found, policy, expected));
        }
    }
    if state.ballot.len() > state.alive_count() {
        fail(format!(
            "ballot has {} entries for {} living seats",
            state.ballot.len(),
            state.alive_count()
        ));
    }
    for id in state.ballot.keys() {
        if !state.is_alive(*id) {
            fail(format!("dead {} on the ballot", id));
        }
    }

    if state.phase != Phase::GameOver {
        match state.president {
            Some(id) if state.is_alive(id) => {}
            Some(id) => fail(format!("president {} is dead", id)),
            None => fail("no president".to_string()),
        }
        if let Some(id) = state.chancellor {
            if !state.is_alive(id) && state.phase != Phase::Discussion {
                fail(format!("chancellor {} is dead", id));
            }
        }
    }

    if state.presidential_draw.len() > 3 || state.chancellor_choice.len() > 2 {
        fail("hand sizes out of range".to_string());
    }
    if state.available_power.is_some() != state.power_slot.is_some() {
        fail("pending power without a slot".to_string());
    }
    for (slot, power) in state.powers.iter() {
        if slot > state.fascist_policies || power_for(state.player_count, slot) != Some(power) {
            fail(format!("{} consumed at slot {} it does not belong to", power, slot));
        }
    }

    violations
}
