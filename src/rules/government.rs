//! Forming a government: nomination, the ballot, and the election tracker.

use crate::ai::memory;
use crate::core::{
    ActionError, GameRng, GameState, Phase, Policy, PlayerId, Vote, ELECTION_TRACKER_LIMIT,
};

use super::eligibility;
use super::flow::{expect_phase, sitting_president};

/// The sitting president proposes `chancellor`. Re-nominating before the
/// vote opens replaces the earlier choice.
pub fn nominate(state: &mut GameState, chancellor: PlayerId) -> Result<(), ActionError> {
    expect_phase(state, Phase::Nomination, "nominate chancellor")?;
    eligibility::check_nominee(state, chancellor)?;

    state.chancellor = Some(chancellor);
    tracing::debug!(president = ?state.president, %chancellor, "chancellor nominated");
    Ok(())
}

/// Record or overwrite a living seat's vote.
pub fn cast_vote(state: &mut GameState, voter: PlayerId, vote: Vote) -> Result<(), ActionError> {
    expect_phase(state, Phase::Voting, "cast vote")?;
    let player = state.player(voter).ok_or(ActionError::UnknownPlayer(voter))?;
    if !player.is_alive {
        return Err(ActionError::DeadPlayer(voter));
    }

    state.ballot.insert(voter, vote);
    Ok(())
}

/// Close the ballot and move on.
///
/// - Passed: tracker resets, the pair becomes the previous government,
///   legislative session opens.
/// - Failed: tracker advances, presidency rotates, back to nomination;
///   on the third failure the top card is enacted outright.
pub fn tally(state: &mut GameState, rng: &mut GameRng) -> Result<(), ActionError> {
    expect_phase(state, Phase::Voting, "advance phase")?;
    let president = sitting_president(state, "advance phase")?;

    let passed = state.ballot_passes();
    tracing::debug!(
        ja = state.ja_votes(),
        alive = state.alive_count(),
        passed,
        "ballot closed"
    );
    memory::observe_all(state, memory::Observation::Ballot);

    state.previous_president = Some(president);
    state.previous_chancellor = state.chancellor;

    if passed {
        state.election_tracker = 0;
        state.phase = Phase::Legislative;
        return Ok(());
    }

    state.president = state.next_alive_after(president);
    state.chancellor = None;
    state.election_tracker += 1;

    if state.election_tracker >= ELECTION_TRACKER_LIMIT {
        enact_chaos_policy(state, rng);
    } else {
        state.phase = Phase::Nomination;
    }
    Ok(())
}

/// Three failed governments: enact the top card with no legislative choice.
fn enact_chaos_policy(state: &mut GameState, rng: &mut GameRng) {
    let drawn = state.deck.draw(1, rng);
    match drawn.first().copied() {
        Some(policy) => {
            match policy {
                Policy::Liberal => state.liberal_policies += 1,
                Policy::Fascist => state.fascist_policies += 1,
            }
            state.announce(format!(
                "Due to {} failed elections, the top policy card ({}) was automatically enacted!",
                ELECTION_TRACKER_LIMIT,
                policy.to_string().to_uppercase()
            ));
            tracing::debug!(%policy, "chaos policy enacted");
        }
        None => tracing::warn!("policy deck exhausted; no chaos policy enacted"),
    }

    state.election_tracker = 0;
    state.hold_presidency = true;
    state.phase = Phase::PolicyBoards;
}
