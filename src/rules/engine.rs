//! The game engine: one owned state, one action API.
//!
//! Every action is applied to a clone of the committed state and RNG. Only
//! if every guard passes is the clone committed, so a rejected action
//! leaves the game exactly as it was. Win conditions are evaluated after
//! every accepted action.
//!
//! ```
//! use secret_council::rules::initialize_game;
//! use secret_council::core::Phase;
//!
//! let mut engine = initialize_game(5, "Ada").unwrap();
//! assert_eq!(engine.state().phase, Phase::RoleReveal);
//!
//! engine.advance_phase().unwrap();
//! assert_eq!(engine.state().phase, Phase::Nomination);
//! ```

use serde::{Deserialize, Serialize};

use crate::ai::{memory, message, MessageContext};
use crate::core::{
    Action, ActionError, ActionRecord, ChatMessage, ConfigError, GameConfig, GameRng,
    GameRngState, GameState, Phase, PlayerCount, PlayerId, Policy, Vote,
};

use super::{executive, flow, government, legislative, setup, victory};

/// A saved game: configuration, state and both random streams.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Checkpoint {
    pub config: GameConfig,
    pub state: GameState,
    pub rng: GameRngState,
    pub chatter_rng: GameRngState,
}

/// Owns one game.
#[derive(Clone, Debug)]
pub struct Engine {
    config: GameConfig,
    state: GameState,
    rng: GameRng,
    /// Separate stream so chatter never shifts deck shuffles.
    chatter_rng: GameRng,
}

impl Engine {
    /// An engine in the lobby. Call [`Engine::start`] to deal.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let rng = GameRng::new(config.seed);
        let chatter_rng = rng.for_context("chatter");
        let state = GameState::lobby(config.player_count);
        Ok(Self { config, state, rng, chatter_rng })
    }

    /// Deal a game with the current configuration.
    pub fn start(&mut self) {
        self.state = setup::deal(&self.config, &mut self.rng);
    }

    /// Discard the current game and deal a new one with `config`.
    pub fn new_game(&mut self, config: GameConfig) -> Result<(), ConfigError> {
        *self = Self::new(config)?;
        self.start();
        Ok(())
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The committed state.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// An owned copy of the committed state. O(1).
    #[must_use]
    pub fn snapshot(&self) -> GameState {
        self.state.clone()
    }

    /// Everything needed to continue this game later.
    #[must_use]
    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint {
            config: self.config.clone(),
            state: self.state.clone(),
            rng: self.rng.state(),
            chatter_rng: self.chatter_rng.state(),
        }
    }

    /// Continue a game from a checkpoint.
    ///
    /// The saved state must be dealt for the configured table size.
    pub fn resume(checkpoint: Checkpoint) -> Result<Self, ConfigError> {
        checkpoint.config.validate()?;

        let expected = checkpoint.config.player_count.seats();
        let state = &checkpoint.state;
        let found = if state.player_count != checkpoint.config.player_count {
            Some(state.player_count.seats())
        } else if state.phase != Phase::Lobby && state.players.len() != expected {
            Some(state.players.len())
        } else {
            None
        };
        if let Some(found) = found {
            return Err(ConfigError::SeatCountMismatch { expected, found });
        }
        Ok(Self {
            config: checkpoint.config,
            state: checkpoint.state,
            rng: GameRng::from_state(&checkpoint.rng),
            chatter_rng: GameRng::from_state(&checkpoint.chatter_rng),
        })
    }

    // === Actions ===

    pub fn nominate_chancellor(&mut self, chancellor: PlayerId) -> Result<(), ActionError> {
        self.apply(&Action::Nominate { chancellor })
    }

    pub fn cast_vote(&mut self, player: PlayerId, vote: Vote) -> Result<(), ActionError> {
        self.apply(&Action::CastVote { player, vote })
    }

    pub fn draw_policies(&mut self) -> Result<(), ActionError> {
        self.apply(&Action::DrawPolicies)
    }

    /// The president discards `discarded`.
    pub fn presidential_action(&mut self, discarded: Policy) -> Result<(), ActionError> {
        self.apply(&Action::PresidentialDiscard { policy: discarded })
    }

    /// The chancellor enacts `enacted`.
    pub fn chancellor_action(&mut self, enacted: Policy) -> Result<(), ActionError> {
        self.apply(&Action::ChancellorEnact { policy: enacted })
    }

    pub fn use_special_power(&mut self, target: Option<PlayerId>) -> Result<(), ActionError> {
        self.apply(&Action::UsePower { target })
    }

    pub fn advance_phase(&mut self) -> Result<(), ActionError> {
        self.apply(&Action::AdvancePhase)
    }

    pub fn post_chat(&mut self, player: PlayerId, text: impl Into<String>) -> Result<(), ActionError> {
        self.apply(&Action::Chat { player, text: text.into(), template: None })
    }

    /// Apply one action atomically.
    pub fn apply(&mut self, action: &Action) -> Result<(), ActionError> {
        let mut next = self.state.clone();
        let mut rng = self.rng.clone();

        if let Err(err) = step(&mut next, &mut rng, action) {
            tracing::warn!(
                action = action.name(),
                phase = %self.state.phase,
                round = self.state.round,
                error = %err,
                "action rejected"
            );
            return Err(err);
        }

        next.history
            .push_back(ActionRecord::new(self.state.round, self.state.phase, action.clone()));
        victory::settle(&mut next);

        debug_assert!(
            super::check_invariants(&next).is_empty(),
            "{:?}",
            super::check_invariants(&next)
        );

        tracing::debug!(
            action = action.name(),
            from = %self.state.phase,
            to = %next.phase,
            round = next.round,
            "action applied"
        );
        self.state = next;
        self.rng = rng;
        Ok(())
    }

    // === AI chatter ===

    /// One tick of the discussion window.
    ///
    /// With the configured probability a random living AI seat says
    /// something about the current situation. Returns the posted message.
    pub fn discussion_tick(&mut self) -> Option<ChatMessage> {
        if !self.config.ai_chat_enabled || self.state.phase != Phase::Discussion {
            return None;
        }
        if !self.chatter_rng.gen_bool(self.config.discussion.chat_probability) {
            return None;
        }

        let speakers: Vec<PlayerId> = self
            .state
            .alive_players()
            .filter(|p| !p.is_human)
            .map(|p| p.id)
            .collect();
        let speaker = *self.chatter_rng.choose(&speakers)?;
        let player = self.state.player(speaker)?;
        let context = message::discussion_context(player, &self.state);

        self.ai_speak(speaker, context).ok()
    }

    /// Make `player` say something fitting `context`.
    pub fn ai_speak(
        &mut self,
        player: PlayerId,
        context: MessageContext,
    ) -> Result<ChatMessage, ActionError> {
        let seat = self.state.player(player).ok_or(ActionError::UnknownPlayer(player))?;
        let utterance = message::generate(seat, &self.state, context, &mut self.chatter_rng);

        self.apply(&Action::Chat {
            player,
            text: utterance.text,
            template: Some(utterance.template.to_string()),
        })?;
        tracing::debug!(%player, %context, "ai spoke");

        self.state
            .chat
            .last()
            .cloned()
            .ok_or(ActionError::UnknownPlayer(player))
    }
}

/// Dispatch one action onto `state`.
fn step(state: &mut GameState, rng: &mut GameRng, action: &Action) -> Result<(), ActionError> {
    match action {
        Action::Nominate { chancellor } => government::nominate(state, *chancellor),
        Action::CastVote { player, vote } => government::cast_vote(state, *player, *vote),
        Action::DrawPolicies => legislative::draw_policies(state, rng),
        Action::PresidentialDiscard { policy } => legislative::presidential_discard(state, *policy),
        Action::ChancellorEnact { policy } => legislative::chancellor_enact(state, *policy),
        Action::UsePower { target } => executive::use_power(state, *target),
        Action::AdvancePhase => flow::advance(state, rng),
        Action::Chat { player, text, template } => chat(state, *player, text, template.as_deref()),
    }
}

fn chat(
    state: &mut GameState,
    player: PlayerId,
    text: &str,
    template: Option<&str>,
) -> Result<(), ActionError> {
    match state.phase {
        Phase::GameOver => return Err(ActionError::GameOver),
        Phase::Lobby => return Err(ActionError::WrongPhase { action: "chat", phase: Phase::Lobby }),
        _ => {}
    }
    let seat = state.player(player).ok_or(ActionError::UnknownPlayer(player))?;
    if !seat.is_alive {
        return Err(ActionError::DeadPlayer(player));
    }
    state.post(player, text);

    if let Some(template) = template {
        let round = state.round;
        if let Some(seat) = state.player_mut(player).filter(|p| !p.is_human) {
            memory::note_template(seat, round, template);
        }
    }
    Ok(())
}

/// Create and deal a game for `player_count` seats with a human named
/// `human_name`.
pub fn initialize_game(player_count: usize, human_name: &str) -> Result<Engine, ConfigError> {
    let count = PlayerCount::try_from(player_count)?;
    let mut engine = Engine::new(GameConfig::new(count, human_name))?;
    engine.start();
    Ok(engine)
}
