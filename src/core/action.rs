//! Engine actions and the action history.
//!
//! Every operation a collaborator can perform on a game is one variant of
//! [`Action`]. The engine exposes a method per variant and also accepts the
//! enum directly through `Engine::apply`, which is how recorded histories
//! are replayed.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;
use super::policy::Policy;
use super::state::Phase;

/// A ballot entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Vote {
    Ja,
    Nein,
}

impl Vote {
    #[must_use]
    pub const fn is_ja(self) -> bool {
        matches!(self, Vote::Ja)
    }
}

impl std::fmt::Display for Vote {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Vote::Ja => f.write_str("ja"),
            Vote::Nein => f.write_str("nein"),
        }
    }
}

/// A complete engine action.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Action {
    /// The sitting president proposes a chancellor.
    Nominate { chancellor: PlayerId },
    /// A living seat votes on the proposed government.
    CastVote { player: PlayerId, vote: Vote },
    /// The president draws three policies.
    DrawPolicies,
    /// The president discards one of the three drawn policies.
    PresidentialDiscard { policy: Policy },
    /// The chancellor enacts one of the two remaining policies.
    ChancellorEnact { policy: Policy },
    /// The president resolves the pending special power.
    UsePower { target: Option<PlayerId> },
    /// Move to the next phase.
    AdvancePhase,
    /// A seat posts a chat message. AI lines carry the template they were
    /// filled from, so the speaker remembers not to repeat it.
    Chat {
        player: PlayerId,
        text: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        template: Option<String>,
    },
}

impl Action {
    /// Short verb used in diagnostics.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Action::Nominate { .. } => "nominate chancellor",
            Action::CastVote { .. } => "cast vote",
            Action::DrawPolicies => "draw policies",
            Action::PresidentialDiscard { .. } => "presidential discard",
            Action::ChancellorEnact { .. } => "chancellor enact",
            Action::UsePower { .. } => "use special power",
            Action::AdvancePhase => "advance phase",
            Action::Chat { .. } => "chat",
        }
    }
}

/// An accepted action with the point in the game it was taken.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// Round when the action was taken.
    pub round: u32,

    /// Phase the action was taken in.
    pub phase: Phase,

    /// The action taken.
    pub action: Action,
}

impl ActionRecord {
    /// Create a new action record.
    #[must_use]
    pub fn new(round: u32, phase: Phase, action: Action) -> Self {
        Self { round, phase, action }
    }
}
