//! Scenario builders shared by the integration tests.
//!
//! Scenarios start from a normally dealt game and then edit its checkpoint,
//! so every subsequent step goes through the public engine API.

#![allow(dead_code)]

use secret_council::core::{
    GameConfig, GameState, Phase, PlayerCount, PlayerId, Policy, PolicyDeck, Role, FASCIST_CARDS,
    LIBERAL_CARDS,
};
use secret_council::rules::Engine;

/// Route engine logs to the test harness. Filter with `RUST_LOG`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Deal a game, then reshape its state before play continues.
pub fn engine_with(count: PlayerCount, seed: u64, edit: impl FnOnce(&mut GameState)) -> Engine {
    init_tracing();
    let mut engine = Engine::new(GameConfig::new(count, "Ada").with_seed(seed)).unwrap();
    engine.start();
    let mut checkpoint = engine.checkpoint();
    edit(&mut checkpoint.state);
    Engine::resume(checkpoint).unwrap()
}

/// Seat 0 presides over a fresh nomination.
pub fn at_nomination(state: &mut GameState) {
    state.phase = Phase::Nomination;
    state.president = Some(PlayerId::new(0));
    state.chancellor = None;
}

/// Seat 0 presides and seat 1 chairs an approved legislative session.
pub fn in_session(state: &mut GameState) {
    state.phase = Phase::Legislative;
    state.president = Some(PlayerId::new(0));
    state.chancellor = Some(PlayerId::new(1));
    for player in state.players.iter() {
        state.ballot.insert(player.id, secret_council::Vote::Ja);
    }
}

/// Hitler at `hitler`, fascists at `fascists`, liberals everywhere else.
pub fn seat_roles(state: &mut GameState, hitler: u8, fascists: &[u8]) {
    for player in state.players.iter_mut() {
        player.role = if player.id.0 == hitler {
            Role::Hitler
        } else if fascists.contains(&player.id.0) {
            Role::Fascist
        } else {
            Role::Liberal
        };
    }
}

/// Rebuild the deck with `top` on top and every remaining card below it,
/// liberals first. Accounts for the policies already on the tracks.
pub fn restack(state: &mut GameState, top: &[Policy]) {
    let liberal_left = LIBERAL_CARDS - usize::from(state.liberal_policies);
    let fascist_left = FASCIST_CARDS - usize::from(state.fascist_policies);

    let top_liberals = top.iter().filter(|p| **p == Policy::Liberal).count();
    let top_fascists = top.len() - top_liberals;

    let mut draw = top.to_vec();
    draw.extend(std::iter::repeat(Policy::Liberal).take(liberal_left - top_liberals));
    draw.extend(std::iter::repeat(Policy::Fascist).take(fascist_left - top_fascists));
    state.deck = PolicyDeck::from_piles(draw, Vec::new());
}

/// Draw, discard the first listed card and enact the second.
pub fn legislate(engine: &mut Engine, discard: Policy, enact: Policy) {
    engine.draw_policies().unwrap();
    engine.presidential_action(discard).unwrap();
    engine.chancellor_action(enact).unwrap();
}
