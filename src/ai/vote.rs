//! Ballot simulation for AI seats.
//!
//! Early rounds are mostly cooperative: with little information, most seats
//! approve. Rounds three and four still lean ja while the seat's secret role
//! starts to weigh in at half strength. From round five the role counts in
//! full.

use crate::core::{GameRng, GameState, Player, Role, Vote, HITLER_ZONE};

/// Score above which a seat votes ja.
const JA_THRESHOLD: f64 = 0.5;
/// Lean toward ja in rounds three and four.
const MIDGAME_LEAN: f64 = 0.3;

/// How `player` votes on the proposed government.
pub fn simulate_vote(player: &Player, state: &GameState, rng: &mut GameRng) -> Vote {
    if !player.is_alive {
        return Vote::Nein;
    }
    let (Some(president), Some(chancellor)) = (
        state.president.and_then(|id| state.player(id)),
        state.chancellor.and_then(|id| state.player(id)),
    ) else {
        return Vote::Nein;
    };

    let traits = player.traits();

    if state.round <= 2 {
        let approve = rng.gen_bool(0.85 + 0.1 * traits.trust_level);
        return if approve { Vote::Ja } else { Vote::Nein };
    }

    let (mut score, role_weight) = if state.round <= 4 {
        (JA_THRESHOLD + MIDGAME_LEAN + 0.1 * traits.trust_level, 0.5)
    } else {
        (JA_THRESHOLD, 1.0)
    };

    let tainted = !president.role.is_liberal() || !chancellor.role.is_liberal();
    let hitler_ready = chancellor.role == Role::Hitler && state.fascist_policies >= HITLER_ZONE;

    let role_bias = match player.role {
        Role::Liberal => {
            let mut bias = 0.0;
            if tainted {
                bias -= 0.3;
            }
            if hitler_ready {
                bias -= 0.8;
            }
            bias
        }
        Role::Fascist => {
            let mut bias = 0.0;
            if tainted {
                bias += 0.4;
            }
            if hitler_ready {
                bias += 0.6;
            }
            bias
        }
        Role::Hitler => traits.deception_skill * 0.2,
    };

    score += role_bias * role_weight;
    score += (traits.trust_level - 0.5) * 0.3;
    score += rng.jitter(0.2);

    if score > JA_THRESHOLD {
        Vote::Ja
    } else {
        Vote::Nein
    }
}
