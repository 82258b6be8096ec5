//! Seat controllers: who decides for a seat.
//!
//! - `HeuristicController`: personality and role aware (default)
//! - `RandomController`: uniform over legal options

use crate::core::{GameRng, GameState, Player, PlayerId, Policy, Vote};
use crate::powers::SpecialPower;
use crate::rules::{eligible_nominees, valid_power_targets};

use super::{decisions, vote};

/// Decision maker for one or more seats.
///
/// Every method returns a choice that is legal in `state`, or `None` if
/// there is nothing to choose from.
pub trait SeatController {
    /// Chancellor for the sitting president to nominate.
    fn nominate(&self, state: &GameState, rng: &mut GameRng) -> Option<PlayerId>;

    /// How `player` votes on the proposed government.
    fn vote(&self, player: &Player, state: &GameState, rng: &mut GameRng) -> Vote;

    /// Card the president discards from the current draw.
    fn discard(&self, player: &Player, state: &GameState, rng: &mut GameRng) -> Option<Policy>;

    /// Card the chancellor enacts from the current hand.
    fn enact(&self, player: &Player, state: &GameState, rng: &mut GameRng) -> Option<Policy>;

    /// Target for the pending power.
    fn power_target(
        &self,
        state: &GameState,
        power: SpecialPower,
        rng: &mut GameRng,
    ) -> Option<PlayerId>;
}

/// Personality-driven controller.
#[derive(Clone, Debug, Default)]
pub struct HeuristicController;

impl SeatController for HeuristicController {
    fn nominate(&self, state: &GameState, rng: &mut GameRng) -> Option<PlayerId> {
        decisions::choose_nominee(state, rng)
    }

    fn vote(&self, player: &Player, state: &GameState, rng: &mut GameRng) -> Vote {
        vote::simulate_vote(player, state, rng)
    }

    fn discard(&self, player: &Player, state: &GameState, rng: &mut GameRng) -> Option<Policy> {
        decisions::choose_discard(player, &state.presidential_draw, rng)
    }

    fn enact(&self, player: &Player, state: &GameState, rng: &mut GameRng) -> Option<Policy> {
        decisions::choose_enactment(player, state, &state.chancellor_choice, rng)
    }

    fn power_target(
        &self,
        state: &GameState,
        power: SpecialPower,
        rng: &mut GameRng,
    ) -> Option<PlayerId> {
        decisions::choose_power_target(state, power, rng)
    }
}

/// Uniform random controller.
///
/// Picks uniformly from legal options.
#[derive(Clone, Debug, Default)]
pub struct RandomController;

impl SeatController for RandomController {
    fn nominate(&self, state: &GameState, rng: &mut GameRng) -> Option<PlayerId> {
        rng.choose(&eligible_nominees(state)).copied()
    }

    fn vote(&self, _player: &Player, _state: &GameState, rng: &mut GameRng) -> Vote {
        if rng.gen_bool(0.5) {
            Vote::Ja
        } else {
            Vote::Nein
        }
    }

    fn discard(&self, _player: &Player, state: &GameState, rng: &mut GameRng) -> Option<Policy> {
        rng.choose(&state.presidential_draw).copied()
    }

    fn enact(&self, _player: &Player, state: &GameState, rng: &mut GameRng) -> Option<Policy> {
        rng.choose(&state.chancellor_choice).copied()
    }

    fn power_target(
        &self,
        state: &GameState,
        power: SpecialPower,
        rng: &mut GameRng,
    ) -> Option<PlayerId> {
        rng.choose(&valid_power_targets(state, power)).copied()
    }
}
