//! Legislative sessions: drawing, discarding, enacting and reshuffling.

mod common;

use common::{engine_with, in_session, legislate, restack, seat_roles};
use secret_council::core::{
    ActionError, Phase, PlayerCount, PlayerId, Policy, PolicyDeck, TOTAL_CARDS,
};
use secret_council::powers::SpecialPower;
use secret_council::rules::check_invariants;

#[test]
fn test_discard_removes_first_match_only() {
    let mut engine = engine_with(PlayerCount::Seven, 11, |state| {
        in_session(state);
        restack(state, &[Policy::Liberal, Policy::Fascist, Policy::Liberal]);
    });

    engine.draw_policies().unwrap();
    assert_eq!(
        engine.state().presidential_draw.as_slice(),
        &[Policy::Liberal, Policy::Fascist, Policy::Liberal]
    );

    engine.presidential_action(Policy::Liberal).unwrap();
    let state = engine.state();
    assert!(state.presidential_draw.is_empty());
    assert_eq!(state.chancellor_choice.as_slice(), &[Policy::Fascist, Policy::Liberal]);
    assert_eq!(state.deck.discard_len(), 1);
    assert!(state.cards_conserved());
}

#[test]
fn test_enacting_moves_the_other_card_to_discard() {
    let mut engine = engine_with(PlayerCount::Seven, 12, |state| {
        in_session(state);
        restack(state, &[Policy::Liberal, Policy::Fascist, Policy::Liberal]);
    });

    legislate(&mut engine, Policy::Liberal, Policy::Liberal);

    let state = engine.state();
    assert_eq!(state.liberal_policies, 1);
    assert_eq!(state.phase, Phase::PolicyBoards);
    assert_eq!(state.deck.discard_len(), 2);
    assert_eq!(state.deck.discard_pile().filter(|p| **p == Policy::Fascist).count(), 1);
    assert_eq!(state.deck.len(), TOTAL_CARDS - 3);
    assert!(state
        .chat
        .iter()
        .any(|m| m.text == "A liberal policy was enacted. Liberal 1 / Fascist 0."));
}

#[test]
fn test_cards_outside_the_hand_are_rejected() {
    let mut engine = engine_with(PlayerCount::Five, 13, |state| {
        in_session(state);
        restack(state, &[Policy::Fascist, Policy::Fascist, Policy::Fascist]);
    });

    assert_eq!(engine.presidential_action(Policy::Fascist), Err(ActionError::NothingDrawn));
    assert_eq!(engine.chancellor_action(Policy::Fascist), Err(ActionError::NothingPassed));

    engine.draw_policies().unwrap();
    assert_eq!(engine.draw_policies(), Err(ActionError::AlreadyDrawn));
    let before = engine.snapshot();
    assert_eq!(
        engine.presidential_action(Policy::Liberal),
        Err(ActionError::PolicyNotInHand(Policy::Liberal))
    );
    assert_eq!(engine.state(), &before);

    engine.presidential_action(Policy::Fascist).unwrap();
    assert_eq!(
        engine.chancellor_action(Policy::Liberal),
        Err(ActionError::PolicyNotInHand(Policy::Liberal))
    );
    assert_eq!(engine.state().chancellor_choice.len(), 2);
}

#[test]
fn test_short_deck_reshuffles_discards() {
    let mut engine = engine_with(PlayerCount::Nine, 14, |state| {
        in_session(state);
        restack(state, &[]);
        let cards: Vec<Policy> = state.deck.draw_pile().copied().collect();
        let (draw, discard) = cards.split_at(2);
        state.deck = PolicyDeck::from_piles(draw.to_vec(), discard.to_vec());
    });

    engine.draw_policies().unwrap();
    let state = engine.state();
    assert_eq!(state.presidential_draw.len(), 3);
    assert_eq!(state.deck.discard_len(), 0);
    assert_eq!(state.deck.len(), TOTAL_CARDS - 3);
    assert!(check_invariants(state).is_empty());
}

#[test]
fn test_fascist_policies_unlock_five_player_powers() {
    let mut engine = engine_with(PlayerCount::Five, 15, |state| {
        in_session(state);
        seat_roles(state, 4, &[3]);
        state.fascist_policies = 2;
        restack(state, &[Policy::Fascist; 6]);
    });

    legislate(&mut engine, Policy::Fascist, Policy::Fascist);
    let state = engine.state();
    assert_eq!(state.fascist_policies, 3);
    assert_eq!(state.phase, Phase::SpecialPower);
    assert_eq!(state.available_power, Some(SpecialPower::PolicyPeek));
    assert_eq!(state.power_slot, Some(3));

    let upcoming: Vec<Policy> = state.deck.peek(3);
    engine.use_special_power(None).unwrap();
    let state = engine.state();
    assert_eq!(state.phase, Phase::Discussion);
    assert_eq!(state.peeked_cards(PlayerId::new(0)), Some(upcoming.as_slice()));
    assert_eq!(state.peeked_cards(PlayerId::new(1)), None);
    assert!(state.powers.is_consumed(3));
}

#[test]
fn test_liberal_policies_never_grant_powers() {
    let mut engine = engine_with(PlayerCount::Nine, 16, |state| {
        in_session(state);
        restack(state, &[Policy::Liberal, Policy::Liberal, Policy::Fascist]);
    });

    legislate(&mut engine, Policy::Fascist, Policy::Liberal);
    assert_eq!(engine.state().phase, Phase::PolicyBoards);
    assert_eq!(engine.state().available_power, None);
}
