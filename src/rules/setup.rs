//! Dealing a new game.

use im::Vector;

use crate::ai::personality;
use crate::core::{
    assign_roles, GameConfig, GameRng, GameState, Phase, Player, PlayerId, PolicyDeck,
};

/// Seat the table, deal roles and the deck, and pick the first president.
///
/// Seat 0 is the human. AI seats take names and personalities from
/// shuffled pools. The result is in the role-reveal phase.
pub fn deal(config: &GameConfig, rng: &mut GameRng) -> GameState {
    let count = config.player_count;
    let seats = count.seats();

    let roles = assign_roles(count, rng);
    let names = personality::draw_names(seats - 1, rng);
    let roster = personality::shuffled_roster(rng);

    let players: Vector<Player> = PlayerId::all(seats)
        .zip(roles)
        .map(|(id, role)| {
            if id == PlayerId::HUMAN {
                Player::human(id, config.human_name.clone(), role)
            } else {
                let ai_index = id.index() - 1;
                let persona = roster[ai_index % roster.len()].clone();
                Player::ai(id, names[ai_index].clone(), role, persona)
            }
        })
        .collect();

    let mut state = GameState::lobby(count);
    state.players = players;
    state.deck = PolicyDeck::shuffled(rng);
    state.president = Some(PlayerId::new(rng.gen_range_usize(0..seats) as u8));
    state.phase = Phase::RoleReveal;
    state.announce(format!("A new game begins with {} players.", seats));

    tracing::info!(
        seats,
        president = ?state.president,
        human_role = %state.players[0].role,
        "dealt new game"
    );
    state
}
