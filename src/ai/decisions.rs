//! Role-aware choices for AI seats.
//!
//! Each choice scores the legal options from the seat's point of view and
//! adds a little noise, so equal options are broken at random. Liberals
//! lean on memory and investigation results. Fascists know their team
//! (Hitler only at the five-seat table) and steer toward it.

use crate::core::{GameRng, GameState, Player, PlayerCount, PlayerId, Policy, Role, HITLER_ZONE};
use crate::powers::SpecialPower;
use crate::rules::{eligible_nominees, valid_power_targets};

use super::memory::{recall_alliance, recall_suspicion};

/// Noise added to every option score.
const NOISE: f64 = 0.2;

/// Whether `player` knows who is on the fascist team.
#[must_use]
pub fn knows_team(player: &Player, state: &GameState) -> bool {
    match player.role {
        Role::Fascist => true,
        Role::Hitler => state.player_count == PlayerCount::Five,
        Role::Liberal => false,
    }
}

/// How much `player` wants `other` in government, before noise.
fn affinity(player: &Player, state: &GameState, other: &Player) -> f64 {
    let mut score = recall_alliance(player, other.id) - recall_suspicion(player, other.id);

    if let Some(role) = state.known_role(player.id, other.id) {
        score += if role.is_liberal() { 0.5 } else { -1.0 };
    }

    if !player.role.is_liberal() && knows_team(player, state) && !other.role.is_liberal() {
        score += 0.5;
        if other.role == Role::Hitler && state.fascist_policies >= HITLER_ZONE {
            score += 1.0;
        }
    }
    score
}

fn pick_best(
    candidates: &[PlayerId],
    rng: &mut GameRng,
    mut score: impl FnMut(PlayerId) -> f64,
) -> Option<PlayerId> {
    candidates
        .iter()
        .map(|id| (*id, score(*id) + rng.jitter(NOISE)))
        .max_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(id, _)| id)
}

/// Chancellor the sitting president nominates.
pub fn choose_nominee(state: &GameState, rng: &mut GameRng) -> Option<PlayerId> {
    let president = state.president.and_then(|id| state.player(id))?;
    let candidates = eligible_nominees(state);

    pick_best(&candidates, rng, |id| {
        state.player(id).map_or(0.0, |other| affinity(president, state, other))
    })
}

/// Card the president discards from `hand`.
pub fn choose_discard(player: &Player, hand: &[Policy], rng: &mut GameRng) -> Option<Policy> {
    let has = |policy| hand.contains(&policy);
    let first = *hand.first()?;

    let discard = if player.role.is_liberal() {
        Policy::Fascist
    } else if rng.gen_bool(0.3 * player.traits().deception_skill) {
        // Burn a fascist card now and then to look clean.
        Policy::Fascist
    } else {
        Policy::Liberal
    };
    Some(if has(discard) { discard } else { first })
}

/// Card the chancellor enacts from `hand`.
pub fn choose_enactment(
    player: &Player,
    state: &GameState,
    hand: &[Policy],
    rng: &mut GameRng,
) -> Option<Policy> {
    let has = |policy| hand.contains(&policy);
    let first = *hand.first()?;

    let preferred = if player.role.is_liberal() {
        Policy::Liberal
    } else if state.fascist_policies < HITLER_ZONE
        && rng.gen_bool(0.25 * player.traits().deception_skill)
    {
        Policy::Liberal
    } else {
        Policy::Fascist
    };
    Some(if has(preferred) { preferred } else { first })
}

/// Target the sitting president aims `power` at. `None` for policy peek.
pub fn choose_power_target(
    state: &GameState,
    power: SpecialPower,
    rng: &mut GameRng,
) -> Option<PlayerId> {
    let president = state.president.and_then(|id| state.player(id))?;
    let targets = valid_power_targets(state, power);

    pick_best(&targets, rng, |id| {
        let Some(other) = state.player(id) else {
            return f64::MIN;
        };
        let affinity = affinity(president, state, other);
        match power {
            // Put a friend in the chair.
            SpecialPower::SpecialElection => affinity,
            // Look at or remove whoever is least wanted.
            SpecialPower::InvestigateLoyalty | SpecialPower::Execution => -affinity,
            SpecialPower::PolicyPeek => 0.0,
        }
    })
}
