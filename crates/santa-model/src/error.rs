use thiserror::Error;

/// Roster field names used in validation messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RosterField {
    Name,
    Email,
}

impl std::fmt::Display for RosterField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Name => f.write_str("name"),
            Self::Email => f.write_str("email"),
        }
    }
}

/// Problems with a roster that must be fixed before matching.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RosterError {
    #[error("at least two participants are required, found {count}")]
    TooFewParticipants { count: usize },

    #[error("participant {index} has an empty {field}")]
    BlankField { index: usize, field: RosterField },

    #[error("duplicate email '{email}' at participants {first} and {second}")]
    DuplicateEmail {
        email: String,
        first: usize,
        second: usize,
    },
}

pub type Result<T> = std::result::Result<T, RosterError>;
