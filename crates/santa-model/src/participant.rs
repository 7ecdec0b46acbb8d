use serde::{Deserialize, Serialize};

/// A member of the gift exchange.
///
/// The email is the identity key: two participants are the same person iff
/// their emails are equal. Emails are compared exactly as given.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Participant {
    pub name: String,
    pub email: String,
}

impl Participant {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }
}

/// A giver -> recipient edge from an earlier round.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriorAssignment {
    pub giver_email: String,
    pub recipient_email: String,
}

impl PriorAssignment {
    pub fn new(giver_email: impl Into<String>, recipient_email: impl Into<String>) -> Self {
        Self {
            giver_email: giver_email.into(),
            recipient_email: recipient_email.into(),
        }
    }
}

/// A giver -> recipient edge produced by the current run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    pub giver: Participant,
    pub recipient: Participant,
}

impl Assignment {
    pub fn new(giver: Participant, recipient: Participant) -> Self {
        Self { giver, recipient }
    }

    pub fn giver_email(&self) -> &str {
        &self.giver.email
    }

    pub fn recipient_email(&self) -> &str {
        &self.recipient.email
    }

    /// The history edge this assignment becomes in a later round.
    pub fn to_prior(&self) -> PriorAssignment {
        PriorAssignment::new(&self.giver.email, &self.recipient.email)
    }
}

/// One row of the four-column exchange table.
///
/// The same layout is written by the exporter and read back as history, so
/// a run's output can be fed straight into the next run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentRecord {
    pub name: String,
    pub email: String,
    pub secret_child_name: String,
    pub secret_child_email: String,
}

impl AssignmentRecord {
    /// Column headers in file order.
    pub const HEADERS: [&'static str; 4] = ["name", "email", "secretChildName", "secretChildEmail"];
}

impl From<&Assignment> for AssignmentRecord {
    fn from(assignment: &Assignment) -> Self {
        Self {
            name: assignment.giver.name.clone(),
            email: assignment.giver.email.clone(),
            secret_child_name: assignment.recipient.name.clone(),
            secret_child_email: assignment.recipient.email.clone(),
        }
    }
}
