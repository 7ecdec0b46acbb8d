//! Post-hoc check of a finished assignment set.

use std::collections::HashSet;

use santa_model::{Assignment, Participant, PriorAssignment};

use crate::error::Violation;
use crate::exclusion::ExclusionSet;

/// Confirm that `assignments` is a derangement of `roster` avoiding `history`.
///
/// Returns the first broken invariant found.
pub fn verify_assignments(
    roster: &[Participant],
    history: &[PriorAssignment],
    assignments: &[Assignment],
) -> Result<(), Violation> {
    if assignments.len() != roster.len() {
        return Err(Violation::WrongCount {
            expected: roster.len(),
            found: assignments.len(),
        });
    }
    let members: HashSet<&str> = roster.iter().map(|p| p.email.as_str()).collect();
    let exclusions = ExclusionSet::build(roster, history);
    let mut givers = HashSet::with_capacity(roster.len());
    let mut recipients = HashSet::with_capacity(roster.len());

    for assignment in assignments {
        let giver = assignment.giver_email();
        let recipient = assignment.recipient_email();
        for email in [giver, recipient] {
            if !members.contains(email) {
                return Err(Violation::UnknownParticipant {
                    email: email.to_string(),
                });
            }
        }
        if giver == recipient {
            return Err(Violation::SelfAssignment {
                email: giver.to_string(),
            });
        }
        if !givers.insert(giver) {
            return Err(Violation::DuplicateGiver {
                email: giver.to_string(),
            });
        }
        if !recipients.insert(recipient) {
            return Err(Violation::DuplicateRecipient {
                email: recipient.to_string(),
            });
        }
        if exclusions.is_forbidden(giver, recipient) {
            return Err(Violation::RepeatsHistory {
                giver: giver.to_string(),
                recipient: recipient.to_string(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edge(giver: (&str, &str), recipient: (&str, &str)) -> Assignment {
        Assignment::new(
            Participant::new(giver.0, giver.1),
            Participant::new(recipient.0, recipient.1),
        )
    }

    fn pair() -> Vec<Participant> {
        vec![Participant::new("Alice", "a@x"), Participant::new("Bob", "b@x")]
    }

    #[test]
    fn accepts_swap() {
        let assignments = vec![
            edge(("Alice", "a@x"), ("Bob", "b@x")),
            edge(("Bob", "b@x"), ("Alice", "a@x")),
        ];
        assert_eq!(verify_assignments(&pair(), &[], &assignments), Ok(()));
    }

    #[test]
    fn flags_self_assignment() {
        let assignments = vec![
            edge(("Alice", "a@x"), ("Alice", "a@x")),
            edge(("Bob", "b@x"), ("Bob", "b@x")),
        ];
        assert_eq!(
            verify_assignments(&pair(), &[], &assignments),
            Err(Violation::SelfAssignment {
                email: "a@x".to_string()
            })
        );
    }

    #[test]
    fn flags_history_repeat() {
        let assignments = vec![
            edge(("Alice", "a@x"), ("Bob", "b@x")),
            edge(("Bob", "b@x"), ("Alice", "a@x")),
        ];
        let history = vec![PriorAssignment::new("b@x", "a@x")];
        assert_eq!(
            verify_assignments(&pair(), &history, &assignments),
            Err(Violation::RepeatsHistory {
                giver: "b@x".to_string(),
                recipient: "a@x".to_string(),
            })
        );
    }

    #[test]
    fn flags_missing_rows() {
        let assignments = vec![edge(("Alice", "a@x"), ("Bob", "b@x"))];
        assert_eq!(
            verify_assignments(&pair(), &[], &assignments),
            Err(Violation::WrongCount {
                expected: 2,
                found: 1,
            })
        );
    }
}
