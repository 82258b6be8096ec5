//! # secret-council
//!
//! Rules engine for a social-deduction game of hidden roles: one human and
//! four, six or eight AI seats, split into liberals and a fascist team led
//! by Hitler, elect governments and enact policies until one side wins.
//!
//! ## Design Principles
//!
//! 1. **One owned state**: each `Engine` owns exactly one `GameState`.
//!    There is no global game.
//!
//! 2. **Atomic actions**: an action is applied to a clone of the state and
//!    committed only if every guard passes. Rejected actions change nothing.
//!
//! 3. **Injected randomness**: every shuffle and AI decision flows through
//!    a seeded `GameRng`, so tests are deterministic.
//!
//! ## Architecture
//!
//! - **Persistent Data Structures**: O(1) state cloning via `im-rs`.
//!
//! - **Closed Tables**: table sizes are the `PlayerCount` enum, so role
//!   distribution and power tables are exhaustive matches.
//!
//! ## Modules
//!
//! - `core`: Seats, roles, policies, state, actions, RNG, configuration
//! - `powers`: Special powers and their table
//! - `rules`: The engine, phase transitions and win conditions
//! - `ai`: Personalities, memory, chat, decisions and the autopilot

pub mod core;
pub mod powers;
pub mod rules;
pub mod ai;

// Re-export commonly used types
pub use crate::core::{
    PlayerId, Player, Personality, Traits,
    GameRng, GameRngState,
    PlayerCount, GameConfig, DiscussionConfig,
    Role, Party, Policy, PolicyDeck,
    Action, ActionRecord, Vote,
    GameState, Phase, Outcome, VictoryReason, ChatMessage,
    ActionError, ConfigError,
};

pub use crate::powers::{power_for, PowerLedger, SpecialPower};

pub use crate::rules::{initialize_game, Engine, check_invariants};

pub use crate::ai::{AutoPilot, HeuristicController, MessageContext, RandomController, SeatController};
