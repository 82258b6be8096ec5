//! Game state: the single source of truth for one game.
//!
//! ## GameState
//!
//! - Phase, round and the seating (players in table order)
//! - Current and previous government
//! - Enacted-policy tracks, the policy deck and the cards in hand
//! - Ballot and election tracker
//! - Pending special power, consumed powers, private power results
//! - Outcome, chat log and action history
//!
//! All collections are `im` persistent structures, so cloning a state to
//! apply an action is O(1). The engine never mutates a committed state: it
//! clones, applies, and swaps the new value in on success.

use im::{OrdMap, Vector};
use serde::{Deserialize, Serialize};

use super::action::{ActionRecord, Vote};
use super::config::PlayerCount;
use super::player::{Player, PlayerId};
use super::policy::{Hand, Policy, PolicyDeck, TOTAL_CARDS};
use super::role::{Party, Role};
use crate::powers::{PowerLedger, SpecialPower};

/// Enacted liberal policies that win the game.
pub const LIBERAL_TRACK: u8 = 5;
/// Enacted fascist policies that win the game.
pub const FASCIST_TRACK: u8 = 6;
/// Failed elections that force a chaos policy.
pub const ELECTION_TRACKER_LIMIT: u8 = 3;
/// Fascist policies after which electing Hitler chancellor wins.
pub const HITLER_ZONE: u8 = 3;

/// State-machine tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Phase {
    Lobby,
    RoleReveal,
    Nomination,
    Voting,
    Legislative,
    PolicyBoards,
    SpecialPower,
    Discussion,
    GameOver,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Phase::Lobby => "lobby",
            Phase::RoleReveal => "role-reveal",
            Phase::Nomination => "nomination",
            Phase::Voting => "voting",
            Phase::Legislative => "legislative",
            Phase::PolicyBoards => "policy-boards",
            Phase::SpecialPower => "special-power",
            Phase::Discussion => "discussion",
            Phase::GameOver => "game-over",
        };
        f.write_str(name)
    }
}

/// Why the game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VictoryReason {
    LiberalTrackComplete,
    FascistTrackComplete,
    HitlerElected,
    HitlerExecuted,
}

impl VictoryReason {
    /// Team that wins for this reason.
    #[must_use]
    pub const fn winner(self) -> Party {
        match self {
            VictoryReason::LiberalTrackComplete | VictoryReason::HitlerExecuted => Party::Liberal,
            VictoryReason::FascistTrackComplete | VictoryReason::HitlerElected => Party::Fascist,
        }
    }
}

impl std::fmt::Display for VictoryReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            VictoryReason::LiberalTrackComplete => "5 Liberal policies enacted",
            VictoryReason::FascistTrackComplete => "6 Fascist policies enacted",
            VictoryReason::HitlerElected => "Hitler elected Chancellor",
            VictoryReason::HitlerExecuted => "Hitler was executed",
        };
        f.write_str(text)
    }
}

/// Final result of a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    pub winner: Party,
    pub reason: VictoryReason,
}

impl Outcome {
    #[must_use]
    pub const fn new(reason: VictoryReason) -> Self {
        Self { winner: reason.winner(), reason }
    }
}

/// Who posted a chat line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ChatSender {
    System,
    Player(PlayerId),
}

/// One line of the chat log.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Position in the log, starting at 0.
    pub id: u64,
    pub round: u32,
    pub sender: ChatSender,
    pub sender_name: String,
    pub text: String,
    pub is_ai: bool,
}

/// A recorded loyalty investigation. Only the investigator may read it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Investigation {
    pub investigator: PlayerId,
    pub role: Role,
}

/// Cards seen through policy peek. Only the peeking president may read them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyPeek {
    pub president: PlayerId,
    pub cards: Vec<Policy>,
}

/// Canonical state of one game.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    // === Progression ===
    pub player_count: PlayerCount,
    pub phase: Phase,
    /// Starts at 1.
    pub round: u32,
    /// Seats in table order; index == seat id.
    pub players: Vector<Player>,

    // === Government ===
    pub president: Option<PlayerId>,
    pub chancellor: Option<PlayerId>,
    pub previous_president: Option<PlayerId>,
    pub previous_chancellor: Option<PlayerId>,
    /// Set when the president was already moved this round (special
    /// election, or rotation after a failed election); the discussion
    /// advance then keeps them instead of rotating again.
    pub hold_presidency: bool,

    // === Policies ===
    pub liberal_policies: u8,
    pub fascist_policies: u8,
    pub deck: PolicyDeck,
    /// The president's three cards.
    pub presidential_draw: Hand,
    /// The chancellor's two cards.
    pub chancellor_choice: Hand,

    // === Elections ===
    /// Current ballot; cleared on each new nomination.
    pub ballot: OrdMap<PlayerId, Vote>,
    /// Consecutive failed governments, 0..=3.
    pub election_tracker: u8,

    // === Powers ===
    pub available_power: Option<SpecialPower>,
    /// Fascist-track slot that granted `available_power`.
    pub power_slot: Option<u8>,
    pub powers: PowerLedger,
    /// Write-once per target.
    pub investigations: OrdMap<PlayerId, Investigation>,
    pub policy_peek: Option<PolicyPeek>,

    // === Result & logs ===
    pub outcome: Option<Outcome>,
    pub chat: Vector<ChatMessage>,
    pub history: Vector<ActionRecord>,
}

impl GameState {
    /// Pre-game state: no seats dealt yet.
    #[must_use]
    pub fn lobby(player_count: PlayerCount) -> Self {
        Self {
            player_count,
            phase: Phase::Lobby,
            round: 1,
            players: Vector::new(),
            president: None,
            chancellor: None,
            previous_president: None,
            previous_chancellor: None,
            hold_presidency: false,
            liberal_policies: 0,
            fascist_policies: 0,
            deck: PolicyDeck::empty(),
            presidential_draw: Hand::new(),
            chancellor_choice: Hand::new(),
            ballot: OrdMap::new(),
            election_tracker: 0,
            available_power: None,
            power_slot: None,
            powers: PowerLedger::new(),
            investigations: OrdMap::new(),
            policy_peek: None,
            outcome: None,
            chat: Vector::new(),
            history: Vector::new(),
        }
    }

    // === Seats ===

    /// Look up a seat.
    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.get(id.index())
    }

    pub fn player_mut(&mut self, id: PlayerId) -> Option<&mut Player> {
        self.players.get_mut(id.index())
    }

    /// Display name, or the seat label if unknown.
    #[must_use]
    pub fn name_of(&self, id: PlayerId) -> String {
        self.player(id)
            .map(|p| p.name.clone())
            .unwrap_or_else(|| id.to_string())
    }

    #[must_use]
    pub fn is_alive(&self, id: PlayerId) -> bool {
        self.player(id).is_some_and(|p| p.is_alive)
    }

    pub fn alive_players(&self) -> impl Iterator<Item = &Player> {
        self.players.iter().filter(|p| p.is_alive)
    }

    #[must_use]
    pub fn alive_count(&self) -> usize {
        self.alive_players().count()
    }

    /// Next living seat after `from` in table order, wrapping around.
    #[must_use]
    pub fn next_alive_after(&self, from: PlayerId) -> Option<PlayerId> {
        let seats = self.players.len();
        (1..=seats)
            .map(|offset| PlayerId::new(((from.index() + offset) % seats) as u8))
            .find(|id| self.is_alive(*id))
    }

    /// Seat holding the given role.
    #[must_use]
    pub fn seat_with_role(&self, role: Role) -> Option<PlayerId> {
        self.players.iter().find(|p| p.role == role).map(|p| p.id)
    }

    // === Ballot ===

    /// Ja votes currently on the ballot.
    #[must_use]
    pub fn ja_votes(&self) -> usize {
        self.ballot.values().filter(|v| v.is_ja()).count()
    }

    /// Government passes on a strict majority of living seats; ties fail.
    #[must_use]
    pub fn ballot_passes(&self) -> bool {
        self.ja_votes() * 2 > self.alive_count()
    }

    // === Policies ===

    /// Enacted count for `policy`.
    #[must_use]
    pub fn enacted(&self, policy: Policy) -> u8 {
        match policy {
            Policy::Liberal => self.liberal_policies,
            Policy::Fascist => self.fascist_policies,
        }
    }

    /// Every card accounted for: enacted, draw pile, discard pile and hands.
    /// Always [`TOTAL_CARDS`] once a game has started.
    #[must_use]
    pub fn cards_accounted(&self) -> usize {
        usize::from(self.liberal_policies)
            + usize::from(self.fascist_policies)
            + self.deck.len()
            + self.deck.discard_len()
            + self.presidential_draw.len()
            + self.chancellor_choice.len()
    }

    #[must_use]
    pub fn cards_conserved(&self) -> bool {
        self.phase == Phase::Lobby || self.cards_accounted() == TOTAL_CARDS
    }

    // === Private information ===

    /// Role of `target` as known to `viewer` through investigation.
    #[must_use]
    pub fn known_role(&self, viewer: PlayerId, target: PlayerId) -> Option<Role> {
        self.investigations
            .get(&target)
            .filter(|inv| inv.investigator == viewer)
            .map(|inv| inv.role)
    }

    /// Cards `viewer` saw through policy peek, if they peeked.
    #[must_use]
    pub fn peeked_cards(&self, viewer: PlayerId) -> Option<&[Policy]> {
        self.policy_peek
            .as_ref()
            .filter(|peek| peek.president == viewer)
            .map(|peek| peek.cards.as_slice())
    }

    // === Result ===

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    #[must_use]
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// Every seat's secret role, once the game is over.
    #[must_use]
    pub fn role_reveal(&self) -> Option<Vec<(PlayerId, String, Role)>> {
        self.outcome.map(|_| {
            self.players
                .iter()
                .map(|p| (p.id, p.name.clone(), p.role))
                .collect()
        })
    }

    // === Chat ===

    /// Append a system announcement.
    pub fn announce(&mut self, text: impl Into<String>) {
        self.push_chat(ChatSender::System, "System".to_string(), text.into(), false);
    }

    /// Append a message from a seat.
    pub fn post(&mut self, id: PlayerId, text: impl Into<String>) {
        let (name, is_ai) = self
            .player(id)
            .map(|p| (p.name.clone(), !p.is_human))
            .unwrap_or_else(|| (id.to_string(), false));
        self.push_chat(ChatSender::Player(id), name, text.into(), is_ai);
    }

    fn push_chat(&mut self, sender: ChatSender, sender_name: String, text: String, is_ai: bool) {
        let message = ChatMessage {
            id: self.chat.len() as u64,
            round: self.round,
            sender,
            sender_name,
            text,
            is_ai,
        };
        self.chat.push_back(message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seated(count: usize) -> GameState {
        let mut state = GameState::lobby(PlayerCount::try_from(count).unwrap());
        for id in PlayerId::all(count) {
            state.players.push_back(Player::human(id, format!("P{}", id.0), Role::Liberal));
        }
        state
    }

    #[test]
    fn test_lobby_state() {
        let state = GameState::lobby(PlayerCount::Seven);
        assert_eq!(state.phase, Phase::Lobby);
        assert_eq!(state.round, 1);
        assert!(state.players.is_empty());
        assert!(state.cards_conserved());
        assert!(state.role_reveal().is_none());
    }

    #[test]
    fn test_next_alive_wraps_and_skips_dead() {
        let mut state = seated(5);
        state.player_mut(PlayerId::new(0)).unwrap().is_alive = false;

        assert_eq!(state.next_alive_after(PlayerId::new(1)), Some(PlayerId::new(2)));
        assert_eq!(state.next_alive_after(PlayerId::new(4)), Some(PlayerId::new(1)));
    }

    #[test]
    fn test_ballot_majority_of_living() {
        let mut state = seated(7);
        state.player_mut(PlayerId::new(6)).unwrap().is_alive = false;

        for (seat, vote) in [Vote::Ja, Vote::Ja, Vote::Ja, Vote::Nein, Vote::Nein, Vote::Nein]
            .into_iter()
            .enumerate()
        {
            state.ballot.insert(PlayerId::new(seat as u8), vote);
        }
        // 3 of 6 living is a tie.
        assert!(!state.ballot_passes());

        state.ballot.insert(PlayerId::new(5), Vote::Ja);
        assert!(state.ballot_passes());
    }

    #[test]
    fn test_private_information_is_viewer_checked() {
        let mut state = seated(5);
        state.investigations.insert(
            PlayerId::new(3),
            Investigation { investigator: PlayerId::new(1), role: Role::Fascist },
        );
        state.policy_peek = Some(PolicyPeek {
            president: PlayerId::new(2),
            cards: vec![Policy::Fascist, Policy::Liberal, Policy::Fascist],
        });

        assert_eq!(state.known_role(PlayerId::new(1), PlayerId::new(3)), Some(Role::Fascist));
        assert_eq!(state.known_role(PlayerId::new(0), PlayerId::new(3)), None);
        assert_eq!(state.peeked_cards(PlayerId::new(2)).map(<[Policy]>::len), Some(3));
        assert!(state.peeked_cards(PlayerId::new(1)).is_none());
    }

    #[test]
    fn test_chat_log() {
        let mut state = seated(5);
        state.announce("Round begins");
        state.post(PlayerId::new(2), "hello");

        assert_eq!(state.chat.len(), 2);
        assert_eq!(state.chat[0].sender, ChatSender::System);
        assert_eq!(state.chat[1].sender_name, "P2");
        assert_eq!(state.chat[1].id, 1);
    }

    #[test]
    fn test_outcome_and_reveal() {
        let mut state = seated(5);
        state.outcome = Some(Outcome::new(VictoryReason::HitlerExecuted));

        let outcome = state.outcome().unwrap();
        assert_eq!(outcome.winner, Party::Liberal);
        assert_eq!(outcome.reason.to_string(), "Hitler was executed");
        assert_eq!(state.role_reveal().unwrap().len(), 5);
    }

    #[test]
    fn test_clone_is_independent() {
        let state = seated(5);
        let mut next = state.clone();
        next.player_mut(PlayerId::new(1)).unwrap().is_alive = false;

        assert!(state.is_alive(PlayerId::new(1)));
        assert!(!next.is_alive(PlayerId::new(1)));
    }
}
