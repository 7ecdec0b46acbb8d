//! Property tests for matcher invariants.

use proptest::collection::vec;
use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

use santa_match::{ExclusionSet, MatchError, assign, match_once, verify_assignments};
use santa_model::{MatchOptions, Participant, PriorAssignment};

fn roster_of(size: usize) -> Vec<Participant> {
    (0..size)
        .map(|i| Participant::new(format!("Person {i}"), format!("p{i}@example.com")))
        .collect()
}

fn history_from(roster: &[Participant], pairs: &[(usize, usize)]) -> Vec<PriorAssignment> {
    pairs
        .iter()
        .filter(|(g, r)| *g < roster.len() && *r < roster.len())
        .map(|(g, r)| PriorAssignment::new(&roster[*g].email, &roster[*r].email))
        .collect()
}

proptest! {
    #[test]
    fn empty_history_gives_a_derangement(size in 2usize..30, seed in any::<u64>()) {
        let roster = roster_of(size);
        let options = MatchOptions::new().with_max_attempts(10_000);
        let outcome = assign(&roster, &[], &options, &mut StdRng::seed_from_u64(seed))
            .expect("derangement exists for n >= 2");
        prop_assert_eq!(outcome.assignments.len(), roster.len());
        prop_assert_eq!(verify_assignments(&roster, &[], &outcome.assignments), Ok(()));
        for (assignment, giver) in outcome.assignments.iter().zip(&roster) {
            prop_assert_eq!(&assignment.giver, giver);
        }
    }

    #[test]
    fn successful_runs_avoid_history(
        size in 2usize..12,
        pairs in vec((0usize..12, 0usize..12), 0..40),
        seed in any::<u64>(),
    ) {
        let roster = roster_of(size);
        let history = history_from(&roster, &pairs);
        let options = MatchOptions::new().with_max_attempts(200);
        match assign(&roster, &history, &options, &mut StdRng::seed_from_u64(seed)) {
            Ok(outcome) => {
                prop_assert_eq!(
                    verify_assignments(&roster, &history, &outcome.assignments),
                    Ok(())
                );
                prop_assert!(outcome.attempts >= 1 && outcome.attempts <= 200);
            }
            Err(err) => {
                let expected = matches!(
                    err,
                    MatchError::NoFeasibleAssignment { .. }
                        | MatchError::NoEligibleGiver { .. }
                        | MatchError::AttemptsExhausted { .. }
                );
                prop_assert!(expected, "unexpected error {:?}", err);
            }
        }
    }

    #[test]
    fn single_attempt_is_all_or_nothing(
        size in 2usize..12,
        pairs in vec((0usize..12, 0usize..12), 0..20),
        seed in any::<u64>(),
    ) {
        let roster = roster_of(size);
        let history = history_from(&roster, &pairs);
        let exclusions = ExclusionSet::build(&roster, &history);
        match match_once(&roster, &exclusions, &mut StdRng::seed_from_u64(seed)) {
            Ok(assignments) => prop_assert_eq!(
                verify_assignments(&roster, &history, &assignments),
                Ok(())
            ),
            Err(err) => prop_assert!(err.is_retryable()),
        }
    }

    #[test]
    fn rematch_avoids_previous_round(size in 3usize..20, seed in any::<u64>()) {
        let roster = roster_of(size);
        let options = MatchOptions::new().with_max_attempts(10_000);
        let mut rng = StdRng::seed_from_u64(seed);
        let first = assign(&roster, &[], &options, &mut rng).expect("first round");
        let history: Vec<PriorAssignment> =
            first.assignments.iter().map(santa_model::Assignment::to_prior).collect();
        let second = assign(&roster, &history, &options, &mut rng).expect("second round");
        prop_assert_eq!(
            verify_assignments(&roster, &history, &second.assignments),
            Ok(())
        );
    }
}
