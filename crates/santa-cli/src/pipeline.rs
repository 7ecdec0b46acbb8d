//! Load -> match -> export stages behind the CLI commands.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{info, info_span, trace};

use santa_ingest::{IngestOptions, read_history_with_options, read_roster_with_options};
use santa_match::{ExclusionSet, Violation, assign, check_feasible, verify_assignments};
use santa_model::{Assignment, MatchOptions, PriorAssignment, Roster};
use santa_output::{DEFAULT_FILE_NAME, OutputFormat, write_assignments_to_path};

use crate::logging::redact_value;
use crate::types::{AssignResult, CheckResult, VerifyResult};

/// Validated inputs for one run.
#[derive(Debug)]
pub struct Inputs {
    pub roster: Roster,
    pub history: Vec<PriorAssignment>,
}

/// Settings for [`run_assign`].
#[derive(Debug, Clone)]
pub struct AssignRequest {
    pub roster: PathBuf,
    pub history: Option<PathBuf>,
    pub ingest: IngestOptions,
    pub options: MatchOptions,
    pub output: Option<PathBuf>,
    pub format: OutputFormat,
    pub dry_run: bool,
}

/// Read and validate the roster and the optional history file.
pub fn load_inputs(
    roster_path: &Path,
    history_path: Option<&Path>,
    ingest: IngestOptions,
) -> Result<Inputs> {
    let participants = read_roster_with_options(roster_path, ingest)
        .with_context(|| format!("load roster {}", roster_path.display()))?;
    let roster = Roster::new(participants)
        .with_context(|| format!("invalid roster {}", roster_path.display()))?;
    let history = match history_path {
        Some(path) => read_history_with_options(path, ingest)
            .with_context(|| format!("load history {}", path.display()))?,
        None => Vec::new(),
    };
    Ok(Inputs { roster, history })
}

/// Output path used when none is given.
pub fn default_output_path(format: OutputFormat) -> PathBuf {
    PathBuf::from(DEFAULT_FILE_NAME).with_extension(format.extension())
}

pub fn run_assign(request: &AssignRequest) -> Result<AssignResult> {
    let span = info_span!("assign", roster = %request.roster.display());
    let _guard = span.enter();

    let Inputs { roster, history } =
        load_inputs(&request.roster, request.history.as_deref(), request.ingest)?;

    let seed = request.options.seed.unwrap_or_else(rand::random);
    info!(seed, "drawing assignments");
    let mut rng = StdRng::seed_from_u64(seed);
    let outcome = assign(&roster, &history, &request.options, &mut rng)
        .context("generate assignments")?;
    for assignment in &outcome.assignments {
        trace!(
            giver = redact_value(assignment.giver_email()),
            recipient = redact_value(assignment.recipient_email()),
            "pair"
        );
    }

    let output = if request.dry_run {
        None
    } else {
        let path = request
            .output
            .clone()
            .unwrap_or_else(|| default_output_path(request.format));
        write_assignments_to_path(&path, &outcome.assignments, request.format)
            .with_context(|| format!("write {}", path.display()))?;
        Some(path)
    };

    Ok(AssignResult {
        participants: roster.len(),
        history_edges: history.len(),
        excluded_edges: outcome.excluded_edges,
        ignored_history: outcome.ignored_history,
        attempts: outcome.attempts,
        seed,
        assignments: outcome.assignments,
        output,
    })
}

pub fn run_check(
    roster_path: &Path,
    history_path: Option<&Path>,
    ingest: IngestOptions,
) -> Result<CheckResult> {
    let Inputs { roster, history } = load_inputs(roster_path, history_path, ingest)?;
    let exclusions = ExclusionSet::build(&roster, &history);
    let feasibility = check_feasible(&roster, &exclusions);
    let excluded_edges = exclusions.len();
    let ignored_history = exclusions.ignored();
    Ok(CheckResult {
        history_edges: history.len(),
        excluded_edges,
        ignored_history,
        feasibility,
        roster,
    })
}

pub fn run_verify(
    roster_path: &Path,
    assignments_path: &Path,
    history_path: Option<&Path>,
    ingest: IngestOptions,
) -> Result<VerifyResult> {
    let Inputs { roster, history } = load_inputs(roster_path, history_path, ingest)?;
    let edges = read_history_with_options(assignments_path, ingest)
        .with_context(|| format!("load assignments {}", assignments_path.display()))?;

    let mut assignments = Vec::with_capacity(edges.len());
    for edge in &edges {
        let resolved = [&edge.giver_email, &edge.recipient_email]
            .map(|email| roster.find(email).cloned().ok_or_else(|| email.clone()));
        match resolved {
            [Ok(giver), Ok(recipient)] => assignments.push(Assignment::new(giver, recipient)),
            [Err(email), _] | [_, Err(email)] => {
                return Ok(VerifyResult {
                    rows: edges.len(),
                    violation: Some(Violation::UnknownParticipant { email }),
                });
            }
        }
    }
    let violation = verify_assignments(&roster, &history, &assignments).err();
    Ok(VerifyResult {
        rows: edges.len(),
        violation,
    })
}
