//! AI seats: chatter, memory and sharing the table with a human.

mod common;

use common::{at_nomination, engine_with, legislate, restack};
use secret_council::ai::{message, AutoPilot, MessageContext, Progress};
use secret_council::core::{
    ChatSender, DiscussionConfig, GameConfig, Phase, PlayerCount, PlayerId, Policy, Vote,
};
use secret_council::powers::SpecialPower;
use secret_council::rules::{eligible_nominees, valid_power_targets, Engine};

fn chatty(count: PlayerCount, seed: u64, enabled: bool) -> Engine {
    let discussion = DiscussionConfig { chat_probability: 1.0, ..DiscussionConfig::default() };
    let config = GameConfig::new(count, "Ada")
        .with_seed(seed)
        .with_discussion(discussion)
        .with_ai_chat(enabled);
    let mut engine = Engine::new(config).unwrap();
    engine.start();

    let mut checkpoint = engine.checkpoint();
    checkpoint.state.phase = Phase::Discussion;
    Engine::resume(checkpoint).unwrap()
}

#[test]
fn test_discussion_tick_posts_from_a_living_ai() {
    let mut engine = chatty(PlayerCount::Seven, 41, true);

    for _ in 0..10 {
        let posted = engine.discussion_tick().unwrap();
        assert!(posted.is_ai);
        let ChatSender::Player(id) = posted.sender else {
            panic!("system line from a discussion tick");
        };
        let seat = engine.state().player(id).unwrap();
        assert!(!seat.is_human && seat.is_alive);
        assert_eq!(seat.name, posted.sender_name);
    }
    assert_eq!(engine.state().phase, Phase::Discussion);
}

#[test]
fn test_chatter_can_be_disabled() {
    let mut engine = chatty(PlayerCount::Five, 42, false);
    let before = engine.state().chat.len();
    for _ in 0..10 {
        assert!(engine.discussion_tick().is_none());
    }
    assert_eq!(engine.state().chat.len(), before);
}

#[test]
fn test_chatter_does_not_disturb_the_deck() {
    let mut quiet = chatty(PlayerCount::Five, 43, false);
    let mut noisy = chatty(PlayerCount::Five, 43, true);
    for _ in 0..5 {
        noisy.discussion_tick();
        quiet.discussion_tick();
    }
    quiet.advance_phase().unwrap();
    noisy.advance_phase().unwrap();

    assert_eq!(quiet.state().deck, noisy.state().deck);
    assert_eq!(quiet.state().president, noisy.state().president);
}

#[test]
fn test_speaker_avoids_repeating_itself() {
    let mut engine = chatty(PlayerCount::Five, 44, true);
    let speaker = PlayerId::new(1);
    let pool = message::templates(&engine.state().players[1], MessageContext::PostVote).len();

    let lines: Vec<String> = (0..pool)
        .map(|_| engine.ai_speak(speaker, MessageContext::PostVote).unwrap().text)
        .collect();
    let mut distinct = lines.clone();
    distinct.sort();
    distinct.dedup();
    assert_eq!(distinct.len(), lines.len(), "{lines:?}");
}

#[test]
fn test_ballots_shape_memory() {
    let mut engine = engine_with(PlayerCount::Seven, 45, |state| {
        state.phase = Phase::Nomination;
        state.president = Some(PlayerId::new(0));
    });

    engine.nominate_chancellor(PlayerId::new(1)).unwrap();
    engine.advance_phase().unwrap();
    for seat in PlayerId::all(7) {
        let vote = if seat.0 < 4 { Vote::Ja } else { Vote::Nein };
        engine.cast_vote(seat, vote).unwrap();
    }
    engine.advance_phase().unwrap();

    let state = engine.state();
    assert!(state.players[0].memory.is_empty(), "the human keeps no memory");

    let observer = &state.players[2];
    let entry = observer.memory.last().unwrap();
    assert_eq!(entry.event, "vote");
    assert!(entry.alliances.contains_key(&PlayerId::new(3)));
    assert!(entry.suspicions.get(&PlayerId::new(5)).copied().unwrap_or(0.0) > 0.0);
    assert!(!entry.alliances.contains_key(&PlayerId::new(5)));
}

#[test]
fn test_memory_spans_the_last_five_rounds() {
    use Policy::{Fascist as F, Liberal as L};
    let mut engine = engine_with(PlayerCount::Five, 47, |state| {
        at_nomination(state);
        restack(state, &[L, F, F, L, F, F, L, F, F, L, F, F, F, F, F]);
    });

    for enacted in [L, L, L, L, F] {
        let nominee = eligible_nominees(engine.state())[0];
        engine.nominate_chancellor(nominee).unwrap();
        engine.advance_phase().unwrap();
        for seat in PlayerId::all(5) {
            engine.cast_vote(seat, Vote::Ja).unwrap();
        }
        engine.advance_phase().unwrap();
        legislate(&mut engine, F, enacted);
        while engine.state().phase != Phase::Nomination {
            engine.advance_phase().unwrap();
        }
    }
    assert_eq!(engine.state().round, 6);

    let nominee = eligible_nominees(engine.state())[0];
    engine.nominate_chancellor(nominee).unwrap();
    engine.advance_phase().unwrap();
    for seat in PlayerId::all(5) {
        let vote = if seat.0 < 3 { Vote::Ja } else { Vote::Nein };
        engine.cast_vote(seat, vote).unwrap();
    }
    engine.advance_phase().unwrap();

    let memory = &engine.state().players[1].memory;
    let rounds: Vec<u32> = memory.iter().map(|m| m.round).collect();
    assert_eq!(rounds, [2, 2, 3, 3, 4, 4, 5, 5, 6]);

    // Each ballot counts once, when tallied; discussion adds no vote weight.
    assert!(memory.iter().filter(|m| m.event == "discussion").all(|m| m.alliances.is_empty()));
    let latest = memory.last().unwrap();
    assert_eq!(latest.event, "vote");
    assert_eq!(latest.alliances.get(&PlayerId::new(2)), Some(&0.1));
    assert!(!latest.alliances.contains_key(&PlayerId::new(3)));

    let toward_two: f64 = memory.iter().filter_map(|m| m.alliances.get(&PlayerId::new(2))).sum();
    assert!((toward_two - 0.5).abs() < 1e-9, "{toward_two}");
}

#[test]
fn test_human_and_autopilot_share_a_game() {
    for count in PlayerCount::ALL {
        let mut engine = Engine::new(GameConfig::new(count, "Ada").with_seed(46)).unwrap();
        let mut pilot = AutoPilot::new(46);

        for _ in 0..10_000 {
            match pilot.step(&mut engine).unwrap() {
                Progress::GameOver => break,
                Progress::AwaitingHuman(seat) => {
                    assert_eq!(seat, PlayerId::HUMAN);
                    play_human(&mut engine);
                }
                Progress::Dealt | Progress::Acted(_) => {}
            }
        }
        assert!(engine.state().is_over(), "{count} seats did not finish");
    }
}

/// The simplest legal move for the human seat.
fn play_human(engine: &mut Engine) {
    let state = engine.snapshot();
    match state.phase {
        Phase::Nomination => {
            let nominee = eligible_nominees(&state)[0];
            engine.nominate_chancellor(nominee).unwrap();
        }
        Phase::Voting => engine.cast_vote(PlayerId::HUMAN, Vote::Ja).unwrap(),
        Phase::Legislative if state.presidential_draw.is_empty() && state.chancellor_choice.is_empty() => {
            engine.draw_policies().unwrap();
        }
        Phase::Legislative if !state.presidential_draw.is_empty() => {
            engine.presidential_action(state.presidential_draw[0]).unwrap();
        }
        Phase::Legislative => {
            let card = if state.chancellor_choice.contains(&Policy::Liberal) {
                Policy::Liberal
            } else {
                Policy::Fascist
            };
            engine.chancellor_action(card).unwrap();
        }
        Phase::SpecialPower => {
            let power = state.available_power.unwrap();
            let target = valid_power_targets(&state, power).first().copied();
            assert_eq!(target.is_none(), power == SpecialPower::PolicyPeek);
            engine.use_special_power(target).unwrap();
        }
        phase => panic!("the human was asked to act in {phase}"),
    }
}
