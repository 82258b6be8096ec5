//! Nomination, voting and the election tracker through the public engine API.

mod common;

use common::{at_nomination, engine_with, restack};
use secret_council::core::{
    ActionError, Ineligibility, Phase, PlayerCount, PlayerId, Policy, Vote, TOTAL_CARDS,
};
use secret_council::rules::{check_invariants, eligible_nominees};

#[test]
fn test_tie_among_living_fails() {
    let mut engine = engine_with(PlayerCount::Seven, 1, |state| {
        at_nomination(state);
        state.player_mut(PlayerId::new(6)).unwrap().is_alive = false;
    });

    engine.nominate_chancellor(PlayerId::new(1)).unwrap();
    engine.advance_phase().unwrap();

    let votes = [Vote::Ja, Vote::Ja, Vote::Ja, Vote::Nein, Vote::Nein, Vote::Nein];
    for (seat, vote) in PlayerId::all(6).zip(votes) {
        engine.cast_vote(seat, vote).unwrap();
    }
    assert_eq!(
        engine.cast_vote(PlayerId::new(6), Vote::Ja),
        Err(ActionError::DeadPlayer(PlayerId::new(6)))
    );

    engine.advance_phase().unwrap();
    let state = engine.state();
    assert_eq!(state.phase, Phase::Nomination);
    assert_eq!(state.election_tracker, 1);
    assert_eq!(state.president, Some(PlayerId::new(1)));
}

#[test]
fn test_majority_of_living_passes() {
    let mut engine = engine_with(PlayerCount::Five, 2, |state| {
        at_nomination(state);
        state.player_mut(PlayerId::new(4)).unwrap().is_alive = false;
    });

    engine.nominate_chancellor(PlayerId::new(2)).unwrap();
    engine.advance_phase().unwrap();
    for seat in PlayerId::all(3) {
        engine.cast_vote(seat, Vote::Ja).unwrap();
    }
    engine.advance_phase().unwrap();

    // 3 of 4 living seats.
    let state = engine.state();
    assert_eq!(state.phase, Phase::Legislative);
    assert_eq!(state.election_tracker, 0);
    assert_eq!(state.previous_chancellor, Some(PlayerId::new(2)));
}

#[test]
fn test_ineligible_nomination_is_a_no_op() {
    let mut engine = engine_with(PlayerCount::Five, 3, |state| {
        at_nomination(state);
        state.previous_chancellor = Some(PlayerId::new(3));
        state.previous_president = Some(PlayerId::new(4));
        state.player_mut(PlayerId::new(2)).unwrap().is_alive = false;
    });
    let before = engine.snapshot();

    for (seat, reason) in [
        (0, Ineligibility::SittingPresident),
        (2, Ineligibility::Dead),
        (3, Ineligibility::PreviousChancellor),
        (4, Ineligibility::PreviousPresident),
    ] {
        assert_eq!(
            engine.nominate_chancellor(PlayerId::new(seat)),
            Err(ActionError::IneligibleNominee { nominee: PlayerId::new(seat), reason })
        );
    }
    assert_eq!(engine.advance_phase(), Err(ActionError::NoChancellor));
    assert_eq!(engine.state(), &before);
    assert_eq!(eligible_nominees(engine.state()), vec![PlayerId::new(1)]);
}

#[test]
fn test_three_failures_enact_top_card() {
    let mut engine = engine_with(PlayerCount::Five, 4, |state| {
        at_nomination(state);
        restack(state, &[Policy::Fascist]);
    });

    for round in 0..3 {
        let nominee = eligible_nominees(engine.state())[0];
        engine.nominate_chancellor(nominee).unwrap();
        engine.advance_phase().unwrap();
        for seat in PlayerId::all(5) {
            engine.cast_vote(seat, Vote::Nein).unwrap();
        }
        engine.advance_phase().unwrap();

        let state = engine.state();
        assert!(state.election_tracker <= 2, "round {round}: tracker {}", state.election_tracker);
    }

    let state = engine.state();
    assert_eq!(state.fascist_policies, 1);
    assert_eq!(state.election_tracker, 0);
    assert_eq!(state.phase, Phase::PolicyBoards);
    assert_eq!(state.president, Some(PlayerId::new(3)));
    assert_eq!(state.deck.len(), TOTAL_CARDS - 1);
    assert!(state
        .chat
        .iter()
        .any(|m| m.text == "Due to 3 failed elections, the top policy card (FASCIST) was automatically enacted!"));
    assert!(check_invariants(state).is_empty());

    // The chaos round does not rotate the presidency a second time.
    engine.advance_phase().unwrap();
    engine.advance_phase().unwrap();
    assert_eq!(engine.state().phase, Phase::Nomination);
    assert_eq!(engine.state().president, Some(PlayerId::new(3)));
    assert_eq!(engine.state().round, 2);
}

#[test]
fn test_votes_outside_voting_are_rejected() {
    let mut engine = engine_with(PlayerCount::Nine, 5, at_nomination);
    assert!(matches!(
        engine.cast_vote(PlayerId::new(1), Vote::Ja),
        Err(ActionError::WrongPhase { .. })
    ));
    assert!(engine.state().ballot.is_empty());
}
