//! Game rules and the engine that enforces them.
//!
//! - `setup`: dealing a new game
//! - `eligibility`: nomination and power-target guards
//! - `government`: nomination, ballot, election tracker
//! - `legislative`: draw, discard, enact
//! - `executive`: special powers
//! - `flow`: phase advancement
//! - `victory`: win conditions
//! - `invariants`: state consistency checks
//! - `engine`: the `Engine` that applies actions atomically

pub mod setup;
pub mod eligibility;
pub mod government;
pub mod legislative;
pub mod executive;
pub mod flow;
pub mod victory;
pub mod invariants;
pub mod engine;

pub use eligibility::{
    check_nominee, check_power_target, eligible_nominees, nominee_ineligibility,
    valid_power_targets,
};
pub use engine::{initialize_game, Checkpoint, Engine};
pub use invariants::{check_invariants, InvariantViolation};
pub use victory::pending_victory;
