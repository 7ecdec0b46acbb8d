//! Error types for the matcher.

use thiserror::Error;

/// Errors raised while building an assignment.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatchError {
    /// The roster is too small to form an exchange.
    #[error("at least two participants are required, found {count}")]
    TooFewParticipants { count: usize },

    /// A giver ran out of valid recipients.
    ///
    /// Raised by a single attempt, or up front when no shuffle could ever
    /// give this giver a recipient.
    #[error("no valid recipient left for '{giver}'")]
    NoFeasibleAssignment { giver: String },

    /// Every other participant is excluded from giving to this one.
    #[error("nobody is allowed to give to '{recipient}'")]
    NoEligibleGiver { recipient: String },

    /// The retry budget ran out before a shuffle produced an assignment.
    #[error(
        "failed to generate unique assignments after {attempts} attempts \
         (last blocked giver: '{giver}')"
    )]
    AttemptsExhausted { attempts: u32, giver: String },
}

impl MatchError {
    /// Whether a fresh shuffle could succeed where this attempt failed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::NoFeasibleAssignment { .. })
    }
}

/// Result type for matcher operations.
pub type Result<T> = std::result::Result<T, MatchError>;

/// A broken invariant in a finished assignment set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Violation {
    #[error("expected {expected} assignments, found {found}")]
    WrongCount { expected: usize, found: usize },

    #[error("'{email}' is not on the roster")]
    UnknownParticipant { email: String },

    #[error("'{email}' is assigned to themselves")]
    SelfAssignment { email: String },

    #[error("'{email}' gives more than once")]
    DuplicateGiver { email: String },

    #[error("'{email}' receives more than once")]
    DuplicateRecipient { email: String },

    #[error("'{giver}' -> '{recipient}' repeats a previous round")]
    RepeatsHistory { giver: String, recipient: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_single_attempt_failures_retry() {
        assert!(
            MatchError::NoFeasibleAssignment {
                giver: "a@x".to_string()
            }
            .is_retryable()
        );
        assert!(!MatchError::TooFewParticipants { count: 1 }.is_retryable());
        assert!(
            !MatchError::AttemptsExhausted {
                attempts: 3,
                giver: "a@x".to_string()
            }
            .is_retryable()
        );
    }

    #[test]
    fn exhausted_message_names_attempts() {
        let err = MatchError::AttemptsExhausted {
            attempts: 100,
            giver: "c@x".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "failed to generate unique assignments after 100 attempts (last blocked giver: 'c@x')"
        );
    }
}
