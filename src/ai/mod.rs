//! AI seats: personalities, memory, chatter and decisions.
//!
//! Everything here is a pure function of a state snapshot plus an RNG,
//! except [`AutoPilot`], which submits the decisions through the engine's
//! public action API like any other collaborator would.
//!
//! - `personality`: the archetype roster and seat names
//! - `memory`: per-seat observations and recall
//! - `vote`: ballot simulation
//! - `message`: chat line generation
//! - `decisions`: nominee, discard, enactment and power target
//! - `controller`: `SeatController` and its implementations
//! - `autopilot`: drives a game through the engine

pub mod personality;
pub mod memory;
pub mod vote;
pub mod message;
pub mod decisions;
pub mod controller;
pub mod autopilot;

pub use personality::{draw_names, roster, shuffled_roster, AI_NAMES};
pub use memory::{most_suspected, most_trusted, observe_all, update_memory, Observation};
pub use vote::simulate_vote;
pub use message::{discussion_context, generate, MessageContext, Utterance};
pub use decisions::{choose_discard, choose_enactment, choose_nominee, choose_power_target};
pub use controller::{HeuristicController, RandomController, SeatController};
pub use autopilot::{AutoPilot, Progress};
