//! AI personality roster and seat names.

use crate::core::{GameRng, Personality, Traits};

/// Names available to AI seats.
pub const AI_NAMES: [&str; 12] = [
    "Klaus Weber",
    "Emma Fischer",
    "Hans Mueller",
    "Anna Schmidt",
    "Franz Wagner",
    "Maria Bauer",
    "Otto Zimmermann",
    "Greta Hofmann",
    "Wilhelm Richter",
    "Ingrid Neumann",
    "Ernst Krueger",
    "Liesel Braun",
];

/// (archetype, title, aggression, trust, deception, memory)
const ROSTER: [(&str, &str, f64, f64, f64, f64); 9] = [
    ("cautious-analyst", "The Analyst", 0.3, 0.7, 0.4, 0.9),
    ("aggressive-accuser", "The Prosecutor", 0.9, 0.2, 0.6, 0.7),
    ("deceptive-joker", "The Jester", 0.5, 0.4, 0.9, 0.5),
    ("trust-builder", "The Diplomat", 0.2, 0.9, 0.3, 0.8),
    ("flip-flopper", "The Opportunist", 0.6, 0.3, 0.7, 0.4),
    ("quiet-observer", "The Watcher", 0.1, 0.6, 0.5, 0.9),
    ("suspicious-skeptic", "The Doubter", 0.4, 0.1, 0.4, 0.8),
    ("overconfident-leader", "The Commander", 0.8, 0.8, 0.3, 0.6),
    ("paranoid-screamer", "The Alarmist", 0.7, 0.1, 0.2, 0.3),
];

/// Every archetype, in a fixed order.
#[must_use]
pub fn roster() -> Vec<Personality> {
    ROSTER
        .iter()
        .map(|&(archetype, title, aggression, trust, deception, memory)| Personality {
            archetype: archetype.to_string(),
            title: title.to_string(),
            traits: Traits::new(aggression, trust, deception, memory),
        })
        .collect()
}

/// The roster in random order.
pub fn shuffled_roster(rng: &mut GameRng) -> Vec<Personality> {
    let mut personalities = roster();
    rng.shuffle(&mut personalities);
    personalities
}

/// `count` distinct names from [`AI_NAMES`].
///
/// # Panics
///
/// Panics if `count` exceeds the pool; the largest table needs eight.
pub fn draw_names(count: usize, rng: &mut GameRng) -> Vec<String> {
    assert!(count <= AI_NAMES.len(), "only {} AI names available", AI_NAMES.len());
    let mut names = AI_NAMES.to_vec();
    rng.shuffle(&mut names);
    names.into_iter().take(count).map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roster_profiles() {
        let roster = roster();
        assert_eq!(roster.len(), 9);

        let prosecutor = roster.iter().find(|p| p.title == "The Prosecutor").unwrap();
        assert!(prosecutor.traits.is_aggressive());
        assert!(prosecutor.traits.is_suspicious());

        let diplomat = roster.iter().find(|p| p.archetype == "trust-builder").unwrap();
        assert!(diplomat.traits.is_cautious());
        assert!(diplomat.traits.is_trusting());
    }

    #[test]
    fn test_shuffle_keeps_every_archetype() {
        let mut shuffled: Vec<_> = shuffled_roster(&mut GameRng::new(4))
            .into_iter()
            .map(|p| p.archetype)
            .collect();
        shuffled.sort();
        let mut fixed: Vec<_> = roster().into_iter().map(|p| p.archetype).collect();
        fixed.sort();
        assert_eq!(shuffled, fixed);
    }

    #[test]
    fn test_draw_names() {
        let names = draw_names(8, &mut GameRng::new(2));
        assert_eq!(names.len(), 8);
        assert!(names.iter().all(|n| AI_NAMES.contains(&n.as_str())));
    }
}
