//! Tests for roster validation.

use santa_model::{Participant, Roster, RosterError, RosterField, validate_roster};

fn people(entries: &[(&str, &str)]) -> Vec<Participant> {
    entries
        .iter()
        .map(|(name, email)| Participant::new(*name, *email))
        .collect()
}

#[test]
fn accepts_two_distinct_participants() {
    let roster = Roster::new(people(&[("Alice", "a@x"), ("Bob", "b@x")])).expect("valid roster");
    assert_eq!(roster.len(), 2);
    assert_eq!(roster.find("b@x").map(|p| p.name.as_str()), Some("Bob"));
    assert!(roster.find("c@x").is_none());
}

#[test]
fn roster_keeps_input_order() {
    let roster = Roster::new(people(&[("Cara", "c@x"), ("Alice", "a@x"), ("Bob", "b@x")]))
        .expect("valid roster");
    let emails: Vec<&str> = roster.participants().iter().map(|p| p.email.as_str()).collect();
    assert_eq!(emails, vec!["c@x", "a@x", "b@x"]);
    assert_eq!(roster[0].name, "Cara");
}

#[test]
fn rejects_small_rosters() {
    assert_eq!(
        validate_roster(&[]),
        Err(RosterError::TooFewParticipants { count: 0 })
    );
    assert_eq!(
        validate_roster(&people(&[("Alice", "a@x")])),
        Err(RosterError::TooFewParticipants { count: 1 })
    );
}

#[test]
fn rejects_duplicate_emails() {
    let err = validate_roster(&people(&[("Alice", "a@x"), ("Bob", "b@x"), ("Al", "a@x")]))
        .expect_err("duplicate");
    assert_eq!(
        err,
        RosterError::DuplicateEmail {
            email: "a@x".to_string(),
            first: 0,
            second: 2,
        }
    );
    assert_eq!(
        err.to_string(),
        "duplicate email 'a@x' at participants 0 and 2"
    );
}

#[test]
fn emails_are_case_sensitive() {
    validate_roster(&people(&[("Alice", "a@x"), ("Also Alice", "A@x")]))
        .expect("distinct emails");
}

#[test]
fn rejects_blank_fields() {
    assert_eq!(
        validate_roster(&people(&[("Alice", "a@x"), ("  ", "b@x")])),
        Err(RosterError::BlankField {
            index: 1,
            field: RosterField::Name,
        })
    );
    assert_eq!(
        validate_roster(&people(&[("Alice", ""), ("Bob", "b@x")])),
        Err(RosterError::BlankField {
            index: 0,
            field: RosterField::Email,
        })
    );
}
