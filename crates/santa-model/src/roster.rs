use std::collections::HashMap;
use std::ops::Deref;

use crate::error::{Result, RosterError, RosterField};
use crate::participant::Participant;

/// Check that a roster can be handed to the matcher.
///
/// Rejects rosters with fewer than two people, blank names or emails, and
/// repeated emails.
pub fn validate_roster(participants: &[Participant]) -> Result<()> {
    if participants.len() < 2 {
        return Err(RosterError::TooFewParticipants {
            count: participants.len(),
        });
    }
    let mut seen: HashMap<&str, usize> = HashMap::with_capacity(participants.len());
    for (index, participant) in participants.iter().enumerate() {
        if participant.name.trim().is_empty() {
            return Err(RosterError::BlankField {
                index,
                field: RosterField::Name,
            });
        }
        if participant.email.trim().is_empty() {
            return Err(RosterError::BlankField {
                index,
                field: RosterField::Email,
            });
        }
        if let Some(&first) = seen.get(participant.email.as_str()) {
            return Err(RosterError::DuplicateEmail {
                email: participant.email.clone(),
                first,
                second: index,
            });
        }
        seen.insert(&participant.email, index);
    }
    Ok(())
}

/// A roster that passed [`validate_roster`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Roster {
    participants: Vec<Participant>,
}

impl Roster {
    pub fn new(participants: Vec<Participant>) -> Result<Self> {
        validate_roster(&participants)?;
        Ok(Self { participants })
    }

    pub fn participants(&self) -> &[Participant] {
        &self.participants
    }

    pub fn find(&self, email: &str) -> Option<&Participant> {
        self.participants.iter().find(|p| p.email == email)
    }
}

impl Deref for Roster {
    type Target = [Participant];

    fn deref(&self) -> &Self::Target {
        &self.participants
    }
}
