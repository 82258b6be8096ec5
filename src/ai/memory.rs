//! What AI seats remember between rounds.
//!
//! After each ballot and each discussion every living AI seat records one
//! [`MemoryEntry`]. A ballot entry bumps alliance toward seats that voted the
//! same way and suspicion toward seats that voted differently. Liberals also
//! add a faint suspicion toward fascist seats on every entry. Only the last
//! five rounds are kept.

use rustc_hash::FxHashSet;

use crate::core::{GameState, MemoryEntry, Player, PlayerId, Role};

/// Weight added per matching or mismatching vote.
pub const VOTE_WEIGHT: f64 = 0.1;
/// Weight a liberal adds toward each fascist seat per observation.
pub const INTUITION_WEIGHT: f64 = 0.05;
/// Recalled weight needed before a seat is named in chat.
pub const RECALL_THRESHOLD: f64 = 0.3;
/// Entries whose spoken templates are avoided.
pub const RECENT_ENTRIES: usize = 3;

/// What an AI seat is reacting to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Observation {
    /// A ballot was just tallied.
    Ballot,
    /// The round's discussion closed.
    Discussion,
}

impl Observation {
    /// Label stored in [`MemoryEntry::event`].
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Observation::Ballot => "vote",
            Observation::Discussion => "discussion",
        }
    }
}

/// The entry `player` would record for `event`, or `None` for seats
/// without a personality.
#[must_use]
pub fn observe(player: &Player, state: &GameState, event: Observation) -> Option<MemoryEntry> {
    player.personality.as_ref()?;

    let mut entry = MemoryEntry::new(state.round, event.label());
    // Each ballot is weighed once, when it is tallied.
    let own_vote = match event {
        Observation::Ballot => state.ballot.get(&player.id),
        Observation::Discussion => None,
    };

    for other in state.players.iter().filter(|p| p.id != player.id) {
        if let (Some(mine), Some(theirs)) = (own_vote, state.ballot.get(&other.id)) {
            let bucket = if mine == theirs {
                &mut entry.alliances
            } else {
                &mut entry.suspicions
            };
            *bucket.entry(other.id).or_insert(0.0) += VOTE_WEIGHT;
        }

        if player.role == Role::Liberal && !other.role.is_liberal() {
            *entry.suspicions.entry(other.id).or_insert(0.0) += INTUITION_WEIGHT;
        }
    }

    Some(entry)
}

/// A copy of `player` with the observation for `event` appended.
#[must_use]
pub fn update_memory(player: &Player, state: &GameState, event: Observation) -> Player {
    let mut updated = player.clone();
    if let Some(entry) = observe(player, state, event) {
        updated.remember(entry);
    }
    updated
}

/// Every living AI seat observes `event`, then public suspicion is refreshed.
pub fn observe_all(state: &mut GameState, event: Observation) {
    for index in 0..state.players.len() {
        let player = &state.players[index];
        if player.is_human || !player.is_alive {
            continue;
        }
        let updated = update_memory(player, state, event);
        state.players[index] = updated;
    }
    refresh_suspicion(state);
}

/// Recompute each seat's public suspicion as the mean of what AI seats
/// most recently recorded about it.
pub fn refresh_suspicion(state: &mut GameState) {
    let scores: Vec<Option<f64>> = state
        .players
        .iter()
        .map(|target| {
            let latest: Vec<f64> = state
                .players
                .iter()
                .filter(|p| !p.is_human && p.id != target.id)
                .filter_map(|p| p.memory.last())
                .map(|entry| entry.suspicions.get(&target.id).copied().unwrap_or(0.0))
                .collect();
            (!latest.is_empty()).then(|| latest.iter().sum::<f64>() / latest.len() as f64)
        })
        .collect();

    for (index, score) in scores.into_iter().enumerate() {
        if let Some(score) = score {
            state.players[index].suspicion = score;
        }
    }
}

/// Suspicion `player` recalls toward `target`, scaled by how reliable
/// their memory is.
#[must_use]
pub fn recall_suspicion(player: &Player, target: PlayerId) -> f64 {
    let total: f64 = player
        .memory
        .iter()
        .filter_map(|m| m.suspicions.get(&target))
        .sum();
    total * player.traits().memory_reliability
}

#[must_use]
pub fn recall_alliance(player: &Player, target: PlayerId) -> f64 {
    let total: f64 = player
        .memory
        .iter()
        .filter_map(|m| m.alliances.get(&target))
        .sum();
    total * player.traits().memory_reliability
}

/// The living seat `player` suspects most, if above the recall threshold.
#[must_use]
pub fn most_suspected(player: &Player, state: &GameState) -> Option<PlayerId> {
    strongest(player, state, recall_suspicion)
}

/// The living seat `player` trusts most, if above the recall threshold.
#[must_use]
pub fn most_trusted(player: &Player, state: &GameState) -> Option<PlayerId> {
    strongest(player, state, recall_alliance)
}

fn strongest(
    player: &Player,
    state: &GameState,
    recall: fn(&Player, PlayerId) -> f64,
) -> Option<PlayerId> {
    state
        .alive_players()
        .filter(|p| p.id != player.id)
        .map(|p| (p.id, recall(player, p.id)))
        .filter(|(_, weight)| *weight > RECALL_THRESHOLD)
        .max_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(id, _)| id)
}

/// Templates `player` spoke within the last few entries.
#[must_use]
pub fn recent_templates(player: &Player) -> FxHashSet<&str> {
    let skip = player.memory.len().saturating_sub(RECENT_ENTRIES);
    player
        .memory
        .iter()
        .skip(skip)
        .flat_map(|m| m.messages.iter().map(String::as_str))
        .collect()
}

/// Record that `player` spoke `template` this round.
pub fn note_template(player: &mut Player, round: u32, template: &str) {
    if player.memory.last().map_or(true, |m| m.round != round) {
        player.remember(MemoryEntry::new(round, "chat"));
    }
    if let Some(entry) = player.memory.back_mut() {
        entry.messages.push_back(template.to_string());
    }
}
