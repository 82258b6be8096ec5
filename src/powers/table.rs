//! Power lookup and per-slot consumption.

use im::OrdMap;
use serde::{Deserialize, Serialize};

use crate::core::PlayerCount;

/// A one-time presidential ability.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SpecialPower {
    InvestigateLoyalty,
    SpecialElection,
    PolicyPeek,
    Execution,
}

impl SpecialPower {
    /// Whether the power is aimed at another seat.
    #[must_use]
    pub const fn needs_target(self) -> bool {
        !matches!(self, SpecialPower::PolicyPeek)
    }
}

impl std::fmt::Display for SpecialPower {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SpecialPower::InvestigateLoyalty => f.write_str("investigate-loyalty"),
            SpecialPower::SpecialElection => f.write_str("special-election"),
            SpecialPower::PolicyPeek => f.write_str("policy-peek"),
            SpecialPower::Execution => f.write_str("execution"),
        }
    }
}

/// Power granted when the fascist track reaches `fascist_policies`.
#[must_use]
pub const fn power_for(count: PlayerCount, fascist_policies: u8) -> Option<SpecialPower> {
    use SpecialPower::*;
    match (count, fascist_policies) {
        (PlayerCount::Five, 3) => Some(PolicyPeek),
        (PlayerCount::Five, 4) => Some(Execution),
        (PlayerCount::Seven, 2) => Some(InvestigateLoyalty),
        (PlayerCount::Seven, 3) => Some(SpecialElection),
        (PlayerCount::Seven, 4 | 5) => Some(Execution),
        (PlayerCount::Nine, 1 | 2) => Some(InvestigateLoyalty),
        (PlayerCount::Nine, 3) => Some(SpecialElection),
        (PlayerCount::Nine, 4 | 5) => Some(Execution),
        _ => None,
    }
}

/// Powers consumed so far, keyed by the slot that granted them.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PowerLedger {
    consumed: OrdMap<u8, SpecialPower>,
}

impl PowerLedger {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Power to grant for slot `fascist_policies`, if any and unused.
    #[must_use]
    pub fn available(&self, count: PlayerCount, fascist_policies: u8) -> Option<SpecialPower> {
        power_for(count, fascist_policies).filter(|_| !self.consumed.contains_key(&fascist_policies))
    }

    /// Record the power granted by slot `fascist_policies` as used.
    pub fn consume(&mut self, fascist_policies: u8, power: SpecialPower) {
        self.consumed.insert(fascist_policies, power);
    }

    #[must_use]
    pub fn is_consumed(&self, fascist_policies: u8) -> bool {
        self.consumed.contains_key(&fascist_policies)
    }

    /// Number of times `power` has been used this game.
    #[must_use]
    pub fn times_used(&self, power: SpecialPower) -> usize {
        self.consumed.values().filter(|p| **p == power).count()
    }

    /// Consumed slots in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, SpecialPower)> + '_ {
        self.consumed.iter().map(|(slot, power)| (*slot, *power))
    }
}
