//! Game configuration.
//!
//! - `PlayerCount`: the closed set of supported table sizes
//! - `DiscussionConfig`: cooperative schedule for the discussion window
//! - `GameConfig`: everything needed to start a game
//!
//! Unsupported table sizes are rejected once, at the edge, by
//! `PlayerCount::try_from`; everything downstream takes a `PlayerCount`.

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Supported table sizes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub enum PlayerCount {
    Five,
    Seven,
    Nine,
}

impl PlayerCount {
    /// All supported sizes, smallest first.
    pub const ALL: [PlayerCount; 3] = [PlayerCount::Five, PlayerCount::Seven, PlayerCount::Nine];

    /// Number of seats.
    #[must_use]
    pub const fn seats(self) -> usize {
        match self {
            PlayerCount::Five => 5,
            PlayerCount::Seven => 7,
            PlayerCount::Nine => 9,
        }
    }
}

impl TryFrom<usize> for PlayerCount {
    type Error = ConfigError;

    fn try_from(seats: usize) -> Result<Self, Self::Error> {
        match seats {
            5 => Ok(PlayerCount::Five),
            7 => Ok(PlayerCount::Seven),
            9 => Ok(PlayerCount::Nine),
            other => Err(ConfigError::UnsupportedPlayerCount(other)),
        }
    }
}

impl From<PlayerCount> for usize {
    fn from(count: PlayerCount) -> Self {
        count.seats()
    }
}

impl std::fmt::Display for PlayerCount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} players", self.seats())
    }
}

/// Timing of the discussion window.
///
/// The engine never measures time. The caller runs a timer of
/// `duration_secs`, calls `Engine::discussion_tick` every `tick_secs`
/// (first after `opening_delay_secs`), and advances the phase on timeout.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DiscussionConfig {
    /// Length of the window (default: 60).
    pub duration_secs: u32,

    /// Interval between chatter ticks (default: 3).
    pub tick_secs: u32,

    /// Delay before the first tick (default: 2).
    pub opening_delay_secs: u32,

    /// Chance that a tick produces an AI message (default: 0.3).
    pub chat_probability: f64,
}

impl Default for DiscussionConfig {
    fn default() -> Self {
        Self {
            duration_secs: 60,
            tick_secs: 3,
            opening_delay_secs: 2,
            chat_probability: 0.3,
        }
    }
}

/// Everything needed to start a game.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Table size.
    pub player_count: PlayerCount,

    /// Display name of the human seat.
    pub human_name: String,

    /// Seed for the game's random source.
    /// Same seed and same actions produce the same game.
    pub seed: u64,

    /// Whether AI seats chat during discussion.
    pub ai_chat_enabled: bool,

    /// Discussion window schedule.
    pub discussion: DiscussionConfig,
}

impl GameConfig {
    /// Create a config with default options.
    pub fn new(player_count: PlayerCount, human_name: impl Into<String>) -> Self {
        Self {
            player_count,
            human_name: human_name.into(),
            seed: 42,
            ai_chat_enabled: true,
            discussion: DiscussionConfig::default(),
        }
    }

    /// Set the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Enable or disable AI chatter.
    pub fn with_ai_chat(mut self, enabled: bool) -> Self {
        self.ai_chat_enabled = enabled;
        self
    }

    /// Replace the discussion schedule.
    pub fn with_discussion(mut self, discussion: DiscussionConfig) -> Self {
        self.discussion = discussion;
        self
    }

    /// Check values a caller may have filled in by hand.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.human_name.trim().is_empty() {
            return Err(ConfigError::EmptyHumanName);
        }
        if !(0.0..=1.0).contains(&self.discussion.chat_probability) {
            return Err(ConfigError::InvalidChatProbability(self.discussion.chat_probability));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_count_try_from() {
        assert_eq!(PlayerCount::try_from(5), Ok(PlayerCount::Five));
        assert_eq!(PlayerCount::try_from(7), Ok(PlayerCount::Seven));
        assert_eq!(PlayerCount::try_from(9), Ok(PlayerCount::Nine));

        for bad in [0, 4, 6, 8, 10] {
            assert_eq!(
                PlayerCount::try_from(bad),
                Err(ConfigError::UnsupportedPlayerCount(bad))
            );
        }
    }

    #[test]
    fn test_player_count_serde_uses_seat_number() {
        let json = serde_json::to_string(&PlayerCount::Seven).unwrap();
        assert_eq!(json, "7");
        assert_eq!(serde_json::from_str::<PlayerCount>("9").unwrap(), PlayerCount::Nine);
        assert!(serde_json::from_str::<PlayerCount>("6").is_err());
    }

    #[test]
    fn test_config_builder_and_validation() {
        let config = GameConfig::new(PlayerCount::Five, "Ada")
            .with_seed(7)
            .with_ai_chat(false);

        assert_eq!(config.seed, 7);
        assert!(!config.ai_chat_enabled);
        assert_eq!(config.discussion.duration_secs, 60);
        assert!(config.validate().is_ok());

        let blank = GameConfig::new(PlayerCount::Five, "  ");
        assert_eq!(blank.validate(), Err(ConfigError::EmptyHumanName));

        let noisy = GameConfig::new(PlayerCount::Five, "Ada").with_discussion(DiscussionConfig {
            chat_probability: 1.5,
            ..DiscussionConfig::default()
        });
        assert!(noisy.validate().is_err());
    }
}
