use anyhow::Result;

use santa_cli::pipeline::{AssignRequest, run_assign, run_check, run_verify};
use santa_cli::types::{AssignResult, CheckResult, VerifyResult};
use santa_model::MatchOptions;

use crate::cli::{AssignArgs, CheckArgs, VerifyArgs};

pub fn assign_request(args: &AssignArgs) -> AssignRequest {
    AssignRequest {
        roster: args.input.roster.clone(),
        history: args.input.history.clone(),
        ingest: args.input.ingest_options(),
        options: MatchOptions::new()
            .with_max_attempts(args.max_attempts)
            .with_seed(args.seed),
        output: args.output.clone(),
        format: args.format.into(),
        dry_run: args.dry_run,
    }
}

pub fn run_assign_command(args: &AssignArgs) -> Result<AssignResult> {
    run_assign(&assign_request(args))
}

pub fn run_check_command(args: &CheckArgs) -> Result<CheckResult> {
    run_check(
        &args.input.roster,
        args.input.history.as_deref(),
        args.input.ingest_options(),
    )
}

pub fn run_verify_command(args: &VerifyArgs) -> Result<VerifyResult> {
    run_verify(
        &args.input.roster,
        &args.assignments,
        args.input.history.as_deref(),
        args.input.ingest_options(),
    )
}
