//! Single greedy attempt over a shuffled candidate pool.

use rand::Rng;
use rand::seq::SliceRandom;
use tracing::trace;

use santa_model::{Assignment, Participant};

use crate::error::{MatchError, Result};
use crate::exclusion::ExclusionSet;

/// Whether `candidate` may receive from `giver`.
pub fn is_valid_choice(
    giver: &Participant,
    candidate: &Participant,
    exclusions: &ExclusionSet<'_>,
) -> bool {
    candidate.email != giver.email && !exclusions.is_forbidden(&giver.email, &candidate.email)
}

/// Candidates in `pool` that `giver` may give to, in pool order.
pub fn valid_choices<'p>(
    giver: &Participant,
    pool: &[&'p Participant],
    exclusions: &ExclusionSet<'_>,
) -> Vec<&'p Participant> {
    pool.iter()
        .copied()
        .filter(|candidate| is_valid_choice(giver, candidate, exclusions))
        .collect()
}

/// Run one matching attempt.
///
/// The roster is shuffled into a candidate pool, then givers are visited in
/// roster order and each takes the first valid candidate still in the pool.
/// Fails with [`MatchError::NoFeasibleAssignment`] as soon as a giver has no
/// valid candidate left; a new shuffle may still succeed.
///
/// Roster emails must be unique.
pub fn match_once<R>(
    roster: &[Participant],
    exclusions: &ExclusionSet<'_>,
    rng: &mut R,
) -> Result<Vec<Assignment>>
where
    R: Rng + ?Sized,
{
    if roster.len() < 2 {
        return Err(MatchError::TooFewParticipants {
            count: roster.len(),
        });
    }

    let mut pool: Vec<&Participant> = roster.iter().collect();
    pool.shuffle(rng);

    let mut assignments = Vec::with_capacity(roster.len());
    for (step, giver) in roster.iter().enumerate() {
        let Some(position) = pool
            .iter()
            .position(|candidate| is_valid_choice(giver, candidate, exclusions))
        else {
            trace!(step, remaining = pool.len(), "giver has no valid candidate");
            return Err(MatchError::NoFeasibleAssignment {
                giver: giver.email.clone(),
            });
        };
        let recipient = pool.remove(position);
        assignments.push(Assignment::new(giver.clone(), recipient.clone()));
    }
    Ok(assignments)
}
