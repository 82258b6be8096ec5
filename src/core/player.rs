//! Seat identification and per-seat data.
//!
//! ## PlayerId
//!
//! Type-safe seat identifier. Seats are 0-based and follow table order,
//! so "next seat" rotation is just `index + 1` with wrap-around.
//!
//! ## Player
//!
//! Everything the engine knows about a seat: secret role, life and
//! eligibility flags, optional AI personality and the AI's bounded memory.

use im::{OrdMap, Vector};
use serde::{Deserialize, Serialize};

use super::role::Role;

/// Seat identifier.
///
/// Seat indices are 0-based: the human always sits at `PlayerId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// The seat reserved for the human player.
    pub const HUMAN: PlayerId = PlayerId(0);

    /// Create a new seat ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw seat index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all seat IDs for a table of `player_count` seats.
    ///
    /// ```
    /// use secret_council::core::PlayerId;
    ///
    /// let seats: Vec<_> = PlayerId::all(5).collect();
    /// assert_eq!(seats.len(), 5);
    /// assert_eq!(seats[0], PlayerId::HUMAN);
    /// assert_eq!(seats[4], PlayerId::new(4));
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Seat {}", self.0)
    }
}

/// Personality traits of an AI seat, each in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Traits {
    pub aggression: f64,
    pub trust_level: f64,
    pub deception_skill: f64,
    pub memory_reliability: f64,
}

impl Traits {
    /// Create a trait set, clamping every value into `[0, 1]`.
    #[must_use]
    pub fn new(aggression: f64, trust_level: f64, deception_skill: f64, memory_reliability: f64) -> Self {
        Self {
            aggression: aggression.clamp(0.0, 1.0),
            trust_level: trust_level.clamp(0.0, 1.0),
            deception_skill: deception_skill.clamp(0.0, 1.0),
            memory_reliability: memory_reliability.clamp(0.0, 1.0),
        }
    }

    /// Traits used when a seat without a personality must decide.
    #[must_use]
    pub const fn neutral() -> Self {
        Self {
            aggression: 0.5,
            trust_level: 0.5,
            deception_skill: 0.5,
            memory_reliability: 0.5,
        }
    }

    /// Aggressive speakers unlock confrontational lines.
    #[must_use]
    pub fn is_aggressive(&self) -> bool {
        self.aggression > 0.7
    }

    /// Cautious speakers unlock measured lines.
    #[must_use]
    pub fn is_cautious(&self) -> bool {
        self.aggression < 0.3
    }

    #[must_use]
    pub fn is_trusting(&self) -> bool {
        self.trust_level > 0.7
    }

    #[must_use]
    pub fn is_suspicious(&self) -> bool {
        self.trust_level < 0.3
    }
}

impl Default for Traits {
    fn default() -> Self {
        Self::neutral()
    }
}

/// Named AI archetype with its trait profile.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Personality {
    /// Archetype key, e.g. `"cautious-analyst"`.
    pub archetype: String,
    /// Display title, e.g. `"The Analyst"`.
    pub title: String,
    pub traits: Traits,
}

/// One remembered round of observations held by an AI seat.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MemoryEntry {
    /// Round the observation was made in.
    pub round: u32,
    /// Short label for what triggered the update (e.g. `"vote"`).
    pub event: String,
    /// Suspicion deltas toward other seats.
    pub suspicions: OrdMap<PlayerId, f64>,
    /// Alliance deltas toward other seats.
    pub alliances: OrdMap<PlayerId, f64>,
    /// Message templates spoken while this entry was the latest.
    pub messages: Vector<String>,
}

impl MemoryEntry {
    /// Create an empty entry for `round`.
    #[must_use]
    pub fn new(round: u32, event: impl Into<String>) -> Self {
        Self {
            round,
            event: event.into(),
            suspicions: OrdMap::new(),
            alliances: OrdMap::new(),
            messages: Vector::new(),
        }
    }
}

/// A seat at the table.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    /// Secret role; never changes after assignment.
    pub role: Role,
    pub is_human: bool,
    pub is_alive: bool,
    /// Cleared together with `is_alive` by execution.
    pub is_eligible: bool,
    /// `None` for the human seat.
    pub personality: Option<Personality>,
    /// How suspicious the rest of the table currently finds this seat.
    pub suspicion: f64,
    /// Most recent memory last; spans at most [`Player::MEMORY_ROUNDS`] rounds.
    pub memory: Vector<MemoryEntry>,
}

impl Player {
    /// Number of rounds an AI seat remembers.
    pub const MEMORY_ROUNDS: u32 = 5;

    /// Create the human seat.
    #[must_use]
    pub fn human(id: PlayerId, name: impl Into<String>, role: Role) -> Self {
        Self {
            id,
            name: name.into(),
            role,
            is_human: true,
            is_alive: true,
            is_eligible: true,
            personality: None,
            suspicion: 0.0,
            memory: Vector::new(),
        }
    }

    /// Create an AI seat.
    #[must_use]
    pub fn ai(id: PlayerId, name: impl Into<String>, role: Role, personality: Personality) -> Self {
        Self {
            is_human: false,
            personality: Some(personality),
            ..Self::human(id, name, role)
        }
    }

    /// Traits to decide with: the personality's, or neutral for the human.
    #[must_use]
    pub fn traits(&self) -> Traits {
        self.personality
            .as_ref()
            .map(|p| p.traits)
            .unwrap_or_default()
    }

    /// Append a memory entry, forgetting rounds that fall out of the window.
    pub fn remember(&mut self, entry: MemoryEntry) {
        let oldest = entry.round.saturating_sub(Self::MEMORY_ROUNDS - 1);
        self.memory.push_back(entry);
        while self.memory.front().is_some_and(|m| m.round < oldest) {
            self.memory.pop_front();
        }
    }
}
