//! Chat lines for AI seats.
//!
//! A line is picked from a pool chosen by context and personality, avoiding
//! templates the seat used recently, then its placeholders are filled from
//! the seat's memory and the current government.

use serde::{Deserialize, Serialize};

use crate::core::{GameRng, GameState, Player, PlayerId};

use super::memory;

/// What the table is talking about.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MessageContext {
    Nomination,
    Voting,
    PostVote,
    PostPolicy,
    Accusation,
    Defense,
}

impl std::fmt::Display for MessageContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            MessageContext::Nomination => "nomination",
            MessageContext::Voting => "voting",
            MessageContext::PostVote => "post-vote",
            MessageContext::PostPolicy => "post-policy",
            MessageContext::Accusation => "accusation",
            MessageContext::Defense => "defense",
        };
        f.write_str(name)
    }
}

/// A generated line and the template it came from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Utterance {
    pub template: &'static str,
    pub text: String,
}

/// Line spoken by seats without a personality.
pub const FALLBACK_LINE: &str = "I agree.";

const NOMINATION_HAWKISH: &[&str] = &[
    "We need to be careful who we trust here. {president} better choose wisely.",
    "I don't like how this is going. Someone's playing games.",
    "The fascists are among us - we need to smoke them out!",
];
const NOMINATION_MEASURED: &[&str] = &[
    "Let's think this through carefully. Who do we trust?",
    "I believe {president} will make the right choice.",
    "We should consider all options before deciding.",
];
const NOMINATION: &[&str] = &[
    "This is a crucial decision.",
    "Who can we trust with this power?",
    "The fate of democracy hangs in the balance.",
];
const VOTING_LIBERAL: &[&str] = &[
    "I'm voting based on what I think is best for the liberals.",
    "This government seems trustworthy to me.",
    "I have concerns about this pairing.",
    "Let's see what policies they give us.",
];
const VOTING_FASCIST: &[&str] = &[
    "This could work in our favor.",
    "I trust this government completely.",
    "Something feels off about this choice.",
    "We need to be strategic here.",
];
const POST_VOTE: &[&str] = &[
    "Interesting voting pattern there...",
    "I'm watching who voted how.",
    "That tells us something about people's loyalties.",
    "The votes reveal more than the policies sometimes.",
];
const POST_POLICY_SUSPICIOUS: &[&str] = &[
    "That policy result is very convenient for someone...",
    "I'm starting to see a pattern here.",
    "The fascists are playing us perfectly.",
    "We're being manipulated and it's working.",
];
const POST_POLICY: &[&str] = &[
    "Well, that changes things.",
    "Another piece of the puzzle.",
    "The board is telling a story.",
    "We need to adjust our strategy.",
];
const ACCUSATION_AGGRESSIVE: &[&str] = &[
    "{suspicious} has been acting very suspiciously!",
    "I think {suspicious} is definitely a fascist!",
    "Look at {suspicious}'s voting pattern - it's obvious!",
    "We need to stop trusting {suspicious} immediately!",
];
const ACCUSATION: &[&str] = &[
    "I have some concerns about {suspicious}...",
    "Something doesn't add up with {suspicious}.",
    "I'm not sure we can trust {suspicious}.",
    "{suspicious} might not be who they seem.",
];
const DEFENSE: &[&str] = &[
    "I'm a liberal! You have to believe me!",
    "Check my voting record - I've been consistent!",
    "This is exactly what the fascists want - liberals fighting!",
    "I'm trying to help us win, not hurt us!",
    "{trusted} can vouch for me.",
];

/// Template pool for `player` in `context`.
#[must_use]
pub fn templates(player: &Player, context: MessageContext) -> &'static [&'static str] {
    let traits = player.traits();
    match context {
        MessageContext::Nomination if traits.is_aggressive() && traits.is_suspicious() => {
            NOMINATION_HAWKISH
        }
        MessageContext::Nomination if traits.is_cautious() && traits.is_trusting() => {
            NOMINATION_MEASURED
        }
        MessageContext::Nomination => NOMINATION,
        MessageContext::Voting if player.role.is_liberal() => VOTING_LIBERAL,
        MessageContext::Voting => VOTING_FASCIST,
        MessageContext::PostVote => POST_VOTE,
        MessageContext::PostPolicy if traits.is_suspicious() => POST_POLICY_SUSPICIOUS,
        MessageContext::PostPolicy => POST_POLICY,
        MessageContext::Accusation if traits.is_aggressive() => ACCUSATION_AGGRESSIVE,
        MessageContext::Accusation => ACCUSATION,
        MessageContext::Defense => DEFENSE,
    }
}

/// A line for `player` to say in `context`.
pub fn generate(
    player: &Player,
    state: &GameState,
    context: MessageContext,
    rng: &mut GameRng,
) -> Utterance {
    if player.personality.is_none() {
        return Utterance { template: FALLBACK_LINE, text: FALLBACK_LINE.to_string() };
    }

    let pool = templates(player, context);
    let recent = memory::recent_templates(player);
    let fresh: Vec<&'static str> = pool.iter().copied().filter(|t| !recent.contains(t)).collect();
    let candidates: &[&'static str] = if fresh.is_empty() { pool } else { &fresh };

    let template = rng.choose(candidates).copied().unwrap_or(FALLBACK_LINE);
    Utterance { template, text: fill(template, player, state) }
}

fn fill(template: &str, player: &Player, state: &GameState) -> String {
    let named = |id: Option<PlayerId>, fallback: &'static str| {
        id.and_then(|id| state.player(id))
            .map_or_else(|| fallback.to_string(), |p| p.name.clone())
    };

    template
        .replace("{suspicious}", &named(memory::most_suspected(player, state), "someone"))
        .replace("{trusted}", &named(memory::most_trusted(player, state), "someone"))
        .replace("{president}", &named(state.president, "the president"))
        .replace("{chancellor}", &named(state.chancellor, "the chancellor"))
}

/// What `player` would talk about during discussion right now.
///
/// An aggressive seat with a suspect accuses; a seat another AI suspects
/// defends itself; otherwise the topic follows the game.
#[must_use]
pub fn discussion_context(player: &Player, state: &GameState) -> MessageContext {
    if player.traits().is_aggressive() && memory::most_suspected(player, state).is_some() {
        return MessageContext::Accusation;
    }

    let accused = state
        .alive_players()
        .filter(|p| !p.is_human && p.id != player.id)
        .any(|p| memory::most_suspected(p, state) == Some(player.id));
    if accused {
        return MessageContext::Defense;
    }

    if state.round == 1 {
        MessageContext::Nomination
    } else if !state.ballot.is_empty() {
        MessageContext::PostVote
    } else if state.liberal_policies + state.fascist_policies > 0 {
        MessageContext::PostPolicy
    } else {
        MessageContext::Voting
    }
}
