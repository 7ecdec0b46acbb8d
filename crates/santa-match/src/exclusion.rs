//! Forbidden-edge index built from prior rounds.

use std::collections::{HashMap, HashSet};

use santa_model::{Participant, PriorAssignment};

/// History edges that constrain the current roster.
///
/// Entries whose giver is not on the roster are dropped and counted.
/// Self-assignment is not stored here; the matcher checks it directly.
#[derive(Debug, Clone, Default)]
pub struct ExclusionSet<'a> {
    edges: HashMap<&'a str, HashSet<&'a str>>,
    ignored: usize,
}

impl<'a> ExclusionSet<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn build(roster: &'a [Participant], history: &'a [PriorAssignment]) -> Self {
        let givers: HashSet<&str> = roster.iter().map(|p| p.email.as_str()).collect();
        let mut set = Self::new();
        for prior in history {
            if givers.contains(prior.giver_email.as_str()) {
                set.edges
                    .entry(prior.giver_email.as_str())
                    .or_default()
                    .insert(prior.recipient_email.as_str());
            } else {
                set.ignored += 1;
            }
        }
        set
    }

    pub fn is_forbidden(&self, giver: &str, recipient: &str) -> bool {
        self.edges
            .get(giver)
            .is_some_and(|recipients| recipients.contains(recipient))
    }

    /// Number of distinct forbidden edges.
    pub fn len(&self) -> usize {
        self.edges.values().map(HashSet::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// History entries skipped because their giver is not on the roster.
    pub fn ignored(&self) -> usize {
        self.ignored
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drops_givers_outside_roster() {
        let roster = vec![Participant::new("Alice", "a@x"), Participant::new("Bob", "b@x")];
        let history = vec![
            PriorAssignment::new("a@x", "b@x"),
            PriorAssignment::new("a@x", "b@x"),
            PriorAssignment::new("z@x", "a@x"),
        ];
        let set = ExclusionSet::build(&roster, &history);
        assert_eq!(set.len(), 1);
        assert_eq!(set.ignored(), 1);
        assert!(set.is_forbidden("a@x", "b@x"));
        assert!(!set.is_forbidden("b@x", "a@x"));
        assert!(!set.is_forbidden("z@x", "a@x"));
    }

    #[test]
    fn empty_history() {
        let roster = vec![Participant::new("Alice", "a@x")];
        let set = ExclusionSet::build(&roster, &[]);
        assert!(set.is_empty());
        assert_eq!(set.ignored(), 0);
    }
}
