//! Bounded retry loop around [`match_once`].

use rand::Rng;
use tracing::{debug, info_span, trace, warn};

use santa_model::{Assignment, MatchOptions, Participant, PriorAssignment};

use crate::error::{MatchError, Result};
use crate::exclusion::ExclusionSet;
use crate::matcher::{is_valid_choice, match_once, valid_choices};

/// A successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchOutcome {
    /// One edge per roster entry, in roster order.
    pub assignments: Vec<Assignment>,
    /// Attempts used, including the successful one.
    pub attempts: u32,
    /// Forbidden history edges that applied to this roster.
    pub excluded_edges: usize,
    /// History entries ignored because their giver is not on the roster.
    pub ignored_history: usize,
}

/// Reject rosters where some constraint can never be met by any shuffle.
///
/// Checks that every giver has at least one allowed recipient and every
/// participant at least one allowed giver. Passing this check does not
/// guarantee a full assignment exists.
pub fn check_feasible(roster: &[Participant], exclusions: &ExclusionSet<'_>) -> Result<()> {
    if roster.len() < 2 {
        return Err(MatchError::TooFewParticipants {
            count: roster.len(),
        });
    }
    let everyone: Vec<&Participant> = roster.iter().collect();
    for giver in roster {
        if valid_choices(giver, &everyone, exclusions).is_empty() {
            return Err(MatchError::NoFeasibleAssignment {
                giver: giver.email.clone(),
            });
        }
    }
    for recipient in roster {
        if !roster
            .iter()
            .any(|giver| is_valid_choice(giver, recipient, exclusions))
        {
            return Err(MatchError::NoEligibleGiver {
                recipient: recipient.email.clone(),
            });
        }
    }
    Ok(())
}

/// Build a full assignment, reshuffling up to `options.max_attempts` times.
///
/// History entries for givers outside the roster are ignored. Never returns
/// a partial assignment.
pub fn assign<R>(
    roster: &[Participant],
    history: &[PriorAssignment],
    options: &MatchOptions,
    rng: &mut R,
) -> Result<MatchOutcome>
where
    R: Rng + ?Sized,
{
    let span = info_span!("assign", participants = roster.len(), history = history.len());
    let _guard = span.enter();

    let exclusions = ExclusionSet::build(roster, history);
    if exclusions.ignored() > 0 {
        debug!(
            ignored = exclusions.ignored(),
            "ignoring history entries for givers not on the roster"
        );
    }
    check_feasible(roster, &exclusions)?;

    let max_attempts = options.max_attempts.max(1);
    let mut blocked = String::new();
    for attempt in 1..=max_attempts {
        match match_once(roster, &exclusions, rng) {
            Ok(assignments) => {
                debug!(attempt, "assignment found");
                return Ok(MatchOutcome {
                    assignments,
                    attempts: attempt,
                    excluded_edges: exclusions.len(),
                    ignored_history: exclusions.ignored(),
                });
            }
            Err(MatchError::NoFeasibleAssignment { giver }) => {
                trace!(attempt, "attempt blocked, reshuffling");
                blocked = giver;
            }
            Err(other) => return Err(other),
        }
    }
    warn!(attempts = max_attempts, "retry budget exhausted");
    Err(MatchError::AttemptsExhausted {
        attempts: max_attempts,
        giver: blocked,
    })
}
