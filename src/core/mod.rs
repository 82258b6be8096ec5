//! Core types: seats, roles, policies, state, actions, RNG, configuration.
//!
//! Everything here is plain data plus the two leaf components the engine
//! consults: the role assignor (`role`) and the policy deck (`policy`).

pub mod player;
pub mod rng;
pub mod config;
pub mod role;
pub mod policy;
pub mod action;
pub mod state;
pub mod error;

pub use player::{MemoryEntry, Personality, Player, PlayerId, Traits};
pub use rng::{GameRng, GameRngState};
pub use config::{DiscussionConfig, GameConfig, PlayerCount};
pub use role::{assign_roles, Party, Role, RoleDistribution};
pub use policy::{Hand, Policy, PolicyDeck, FASCIST_CARDS, LIBERAL_CARDS, TOTAL_CARDS};
pub use action::{Action, ActionRecord, Vote};
pub use state::{
    ChatMessage, ChatSender, GameState, Investigation, Outcome, Phase, PolicyPeek, VictoryReason,
    ELECTION_TRACKER_LIMIT, FASCIST_TRACK, HITLER_ZONE, LIBERAL_TRACK,
};
pub use error::{ActionError, ConfigError, Ineligibility};
