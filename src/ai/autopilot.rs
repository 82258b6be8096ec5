//! Driving AI seats through the engine.
//!
//! The autopilot looks at the current phase, finds the seat that has to
//! act, asks its controller for a decision and submits it through the
//! public action API. It stops when the human seat must act (unless it is
//! also driving the human) or the game is over.

use crate::core::{Action, ActionError, GameRng, GameState, Outcome, Phase, PlayerId};
use crate::rules::Engine;

use super::controller::{HeuristicController, SeatController};

/// Result of one autopilot step.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Progress {
    /// The lobby was dealt into a new game.
    Dealt,
    /// An action was applied.
    Acted(Action),
    /// The human seat must act next.
    AwaitingHuman(PlayerId),
    /// Nothing left to do.
    GameOver,
}

/// Plays AI seats (and optionally the human) through an [`Engine`].
#[derive(Clone, Debug)]
pub struct AutoPilot<C: SeatController = HeuristicController> {
    controller: C,
    rng: GameRng,
    drive_human: bool,
}

impl AutoPilot<HeuristicController> {
    /// Heuristic autopilot seeded with `seed`.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::with_controller(HeuristicController, seed)
    }
}

impl<C: SeatController> AutoPilot<C> {
    #[must_use]
    pub fn with_controller(controller: C, seed: u64) -> Self {
        Self {
            controller,
            rng: GameRng::new(seed).for_context("autopilot"),
            drive_human: false,
        }
    }

    /// Also play the human seat.
    #[must_use]
    pub fn driving_human(mut self, drive_human: bool) -> Self {
        self.drive_human = drive_human;
        self
    }

    fn controls(&self, state: &GameState, seat: PlayerId) -> bool {
        self.drive_human || state.player(seat).is_some_and(|p| !p.is_human)
    }

    /// Take the next pending action.
    pub fn step(&mut self, engine: &mut Engine) -> Result<Progress, ActionError> {
        let state = engine.snapshot();

        let action = match state.phase {
            Phase::Lobby => {
                engine.start();
                return Ok(Progress::Dealt);
            }
            Phase::GameOver => return Ok(Progress::GameOver),
            Phase::RoleReveal | Phase::PolicyBoards => Action::AdvancePhase,
            Phase::Discussion => {
                engine.discussion_tick();
                Action::AdvancePhase
            }
            Phase::Nomination => match (state.chancellor, state.president) {
                (Some(_), _) => Action::AdvancePhase,
                (None, Some(president)) if !self.controls(&state, president) => {
                    return Ok(Progress::AwaitingHuman(president));
                }
                (None, _) => match self.controller.nominate(&state, &mut self.rng) {
                    Some(chancellor) => Action::Nominate { chancellor },
                    None => Action::AdvancePhase,
                },
            },
            Phase::Voting => match self.next_voter(&state) {
                Some(voter) if !self.controls(&state, voter) => {
                    return Ok(Progress::AwaitingHuman(voter));
                }
                Some(voter) => {
                    let player = state.player(voter).ok_or(ActionError::UnknownPlayer(voter))?;
                    let vote = self.controller.vote(player, &state, &mut self.rng);
                    Action::CastVote { player: voter, vote }
                }
                None => Action::AdvancePhase,
            },
            Phase::Legislative => return self.legislate(engine, &state),
            Phase::SpecialPower => {
                let president = state.president.ok_or(ActionError::NoPowerAvailable)?;
                if !self.controls(&state, president) {
                    return Ok(Progress::AwaitingHuman(president));
                }
                let power = state.available_power.ok_or(ActionError::NoPowerAvailable)?;
                let target = self.controller.power_target(&state, power, &mut self.rng);
                Action::UsePower { target }
            }
        };

        engine.apply(&action)?;
        Ok(Progress::Acted(action))
    }

    /// First living seat without a vote, AI seats before the human.
    fn next_voter(&self, state: &GameState) -> Option<PlayerId> {
        let mut waiting = state
            .alive_players()
            .filter(|p| !state.ballot.contains_key(&p.id))
            .map(|p| p.id);
        let first = waiting.next()?;
        if self.controls(state, first) {
            return Some(first);
        }
        waiting.next().or(Some(first))
    }

    fn legislate(&mut self, engine: &mut Engine, state: &GameState) -> Result<Progress, ActionError> {
        let president = state.president.ok_or(ActionError::NothingDrawn)?;
        let chancellor = state.chancellor.ok_or(ActionError::NoChancellor)?;

        let action = if !state.chancellor_choice.is_empty() {
            if !self.controls(state, chancellor) {
                return Ok(Progress::AwaitingHuman(chancellor));
            }
            let player = state.player(chancellor).ok_or(ActionError::UnknownPlayer(chancellor))?;
            let policy = self
                .controller
                .enact(player, state, &mut self.rng)
                .ok_or(ActionError::NothingPassed)?;
            Action::ChancellorEnact { policy }
        } else {
            if !self.controls(state, president) {
                return Ok(Progress::AwaitingHuman(president));
            }
            if state.presidential_draw.is_empty() {
                Action::DrawPolicies
            } else {
                let player = state.player(president).ok_or(ActionError::UnknownPlayer(president))?;
                let policy = self
                    .controller
                    .discard(player, state, &mut self.rng)
                    .ok_or(ActionError::NothingDrawn)?;
                Action::PresidentialDiscard { policy }
            }
        };

        engine.apply(&action)?;
        Ok(Progress::Acted(action))
    }

    /// Step until the game ends, the human must act, or `max_steps` is hit.
    ///
    /// Returns the outcome if the game finished.
    pub fn run_to_completion(
        &mut self,
        engine: &mut Engine,
        max_steps: usize,
    ) -> Result<Option<Outcome>, ActionError> {
        for _ in 0..max_steps {
            match self.step(engine)? {
                Progress::GameOver | Progress::AwaitingHuman(_) => break,
                Progress::Dealt | Progress::Acted(_) => {}
            }
        }
        Ok(engine.state().outcome())
    }
}
