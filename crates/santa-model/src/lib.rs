pub mod error;
pub mod options;
pub mod participant;
pub mod roster;

pub use error::{Result, RosterError, RosterField};
pub use options::{DEFAULT_MAX_ATTEMPTS, MatchOptions};
pub use participant::{Assignment, AssignmentRecord, Participant, PriorAssignment};
pub use roster::{Roster, validate_roster};
