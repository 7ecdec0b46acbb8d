use std::path::PathBuf;

use santa_match::{MatchError, Violation};
use santa_model::{Assignment, Roster};

/// Result of a drawing run.
#[derive(Debug)]
pub struct AssignResult {
    pub participants: usize,
    pub history_edges: usize,
    pub excluded_edges: usize,
    pub ignored_history: usize,
    pub attempts: u32,
    pub seed: u64,
    pub assignments: Vec<Assignment>,
    /// `None` for dry runs.
    pub output: Option<PathBuf>,
}

/// Result of validating inputs without drawing.
#[derive(Debug)]
pub struct CheckResult {
    pub roster: Roster,
    pub history_edges: usize,
    pub excluded_edges: usize,
    pub ignored_history: usize,
    /// Outcome of the feasibility pre-check.
    pub feasibility: Result<(), MatchError>,
}

/// Result of checking an existing assignment file.
#[derive(Debug)]
pub struct VerifyResult {
    pub rows: usize,
    pub violation: Option<Violation>,
}

impl VerifyResult {
    pub fn is_valid(&self) -> bool {
        self.violation.is_none()
    }
}
