//! Secret roles and the role assignor.
//!
//! Each table size has a fixed role multiset:
//!
//! | seats | liberal | fascist | hitler |
//! |-------|---------|---------|--------|
//! | 5     | 3       | 1       | 1      |
//! | 7     | 4       | 2       | 1      |
//! | 9     | 5       | 3       | 1      |
//!
//! [`assign_roles`] deals a uniformly random permutation of that multiset.

use serde::{Deserialize, Serialize};

use super::config::PlayerCount;
use super::rng::GameRng;

/// The two teams.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Party {
    Liberal,
    Fascist,
}

impl std::fmt::Display for Party {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Party::Liberal => f.write_str("liberal"),
            Party::Fascist => f.write_str("fascist"),
        }
    }
}

/// A seat's secret role.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Role {
    Liberal,
    Fascist,
    Hitler,
}

impl Role {
    /// Team this role plays for. Hitler is on the fascist team.
    #[must_use]
    pub const fn party(self) -> Party {
        match self {
            Role::Liberal => Party::Liberal,
            Role::Fascist | Role::Hitler => Party::Fascist,
        }
    }

    #[must_use]
    pub const fn is_liberal(self) -> bool {
        matches!(self, Role::Liberal)
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Liberal => f.write_str("liberal"),
            Role::Fascist => f.write_str("fascist"),
            Role::Hitler => f.write_str("hitler"),
        }
    }
}

/// Role counts for one table size.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleDistribution {
    pub liberals: usize,
    pub fascists: usize,
    pub hitler: usize,
}

impl RoleDistribution {
    /// Fixed distribution for `count`.
    #[must_use]
    pub const fn for_count(count: PlayerCount) -> Self {
        match count {
            PlayerCount::Five => Self { liberals: 3, fascists: 1, hitler: 1 },
            PlayerCount::Seven => Self { liberals: 4, fascists: 2, hitler: 1 },
            PlayerCount::Nine => Self { liberals: 5, fascists: 3, hitler: 1 },
        }
    }

    /// Total seats covered.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.liberals + self.fascists + self.hitler
    }

    /// The multiset in table order (liberals, fascists, hitler).
    #[must_use]
    pub fn roles(&self) -> Vec<Role> {
        let mut roles = Vec::with_capacity(self.total());
        roles.extend(std::iter::repeat(Role::Liberal).take(self.liberals));
        roles.extend(std::iter::repeat(Role::Fascist).take(self.fascists));
        roles.extend(std::iter::repeat(Role::Hitler).take(self.hitler));
        roles
    }
}

/// Deal one role per seat; index `i` is seat `i`'s role.
pub fn assign_roles(count: PlayerCount, rng: &mut GameRng) -> Vec<Role> {
    let mut roles = RoleDistribution::for_count(count).roles();
    rng.shuffle(&mut roles);
    roles
}
