//! Policy cards and the policy deck.
//!
//! The deck is built once per game from 6 liberal and 11 fascist cards.
//! Cards only ever move between the draw pile, the discard pile, a
//! player's hand, and the enacted tracks, so their total stays at 17.
//!
//! The top of the draw pile is the front of the vector.

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::rng::GameRng;

/// Liberal cards in a fresh deck.
pub const LIBERAL_CARDS: usize = 6;
/// Fascist cards in a fresh deck.
pub const FASCIST_CARDS: usize = 11;
/// Total cards in play for a whole game.
pub const TOTAL_CARDS: usize = LIBERAL_CARDS + FASCIST_CARDS;

/// A policy card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Policy {
    Liberal,
    Fascist,
}

impl std::fmt::Display for Policy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Policy::Liberal => f.write_str("liberal"),
            Policy::Fascist => f.write_str("fascist"),
        }
    }
}

/// Up to three cards held by the president or chancellor.
pub type Hand = SmallVec<[Policy; 3]>;

/// Draw pile plus discard pile.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyDeck {
    draw_pile: Vector<Policy>,
    discard_pile: Vector<Policy>,
}

impl PolicyDeck {
    /// A freshly shuffled 17-card deck.
    pub fn shuffled(rng: &mut GameRng) -> Self {
        let mut cards: Vec<Policy> = std::iter::repeat(Policy::Liberal)
            .take(LIBERAL_CARDS)
            .chain(std::iter::repeat(Policy::Fascist).take(FASCIST_CARDS))
            .collect();
        rng.shuffle(&mut cards);
        Self::from_piles(cards, Vec::new())
    }

    /// Build a deck from explicit piles (top of draw pile first).
    #[must_use]
    pub fn from_piles(draw_pile: Vec<Policy>, discard_pile: Vec<Policy>) -> Self {
        Self {
            draw_pile: draw_pile.into_iter().collect(),
            discard_pile: discard_pile.into_iter().collect(),
        }
    }

    /// An empty deck (lobby).
    #[must_use]
    pub fn empty() -> Self {
        Self::from_piles(Vec::new(), Vec::new())
    }

    /// Cards remaining in the draw pile.
    #[must_use]
    pub fn len(&self) -> usize {
        self.draw_pile.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.draw_pile.is_empty()
    }

    #[must_use]
    pub fn discard_len(&self) -> usize {
        self.discard_pile.len()
    }

    /// Draw pile, top first.
    pub fn draw_pile(&self) -> impl Iterator<Item = &Policy> {
        self.draw_pile.iter()
    }

    pub fn discard_pile(&self) -> impl Iterator<Item = &Policy> {
        self.discard_pile.iter()
    }

    /// Take the top `n` cards.
    ///
    /// If fewer than `n` remain, the discard pile is appended to the draw
    /// pile, the whole pile is shuffled, and the discard pile is emptied
    /// before drawing.
    pub fn draw(&mut self, n: usize, rng: &mut GameRng) -> Hand {
        if self.draw_pile.len() < n {
            self.reshuffle(rng);
        }

        let take = n.min(self.draw_pile.len());
        let rest = self.draw_pile.split_off(take);
        let drawn: Hand = self.draw_pile.iter().copied().collect();
        self.draw_pile = rest;
        drawn
    }

    /// Look at the top `n` cards without removing them.
    #[must_use]
    pub fn peek(&self, n: usize) -> Vec<Policy> {
        self.draw_pile.iter().take(n).copied().collect()
    }

    /// Put cards on the discard pile.
    pub fn discard(&mut self, cards: impl IntoIterator<Item = Policy>) {
        self.discard_pile.extend(cards);
    }

    fn reshuffle(&mut self, rng: &mut GameRng) {
        let mut cards: Vec<Policy> = self.draw_pile.iter().copied().collect();
        cards.extend(self.discard_pile.iter().copied());
        rng.shuffle(&mut cards);

        tracing::debug!(cards = cards.len(), "reshuffling discard pile into policy deck");
        self.draw_pile = cards.into_iter().collect();
        self.discard_pile = Vector::new();
    }

    /// Count of `policy` across draw and discard piles.
    #[must_use]
    pub fn count(&self, policy: Policy) -> usize {
        self.draw_pile
            .iter()
            .chain(self.discard_pile.iter())
            .filter(|p| **p == policy)
            .count()
    }
}
