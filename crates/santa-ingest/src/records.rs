//! Roster and history loaders.
//!
//! Both files share the exchange layout
//! `name, email, secretChildName, secretChildEmail`. The roster reads the
//! first two columns; history reads `email` and `secretChildEmail`.

use std::io::Read;
use std::path::Path;

use tracing::{debug, info};

use santa_model::{Participant, PriorAssignment};

use crate::csv::{RawRow, open_file, read_rows};
use crate::error::{IngestError, Result};
use crate::options::IngestOptions;

const NAME: (usize, &str) = (0, "name");
const EMAIL: (usize, &str) = (1, "email");
const CHILD_EMAIL: (usize, &str) = (3, "secretChildEmail");

const ROSTER_FIELDS: [(usize, &str); 2] = [NAME, EMAIL];
const HISTORY_FIELDS: [(usize, &str); 2] = [EMAIL, CHILD_EMAIL];

fn missing_field(row: &RawRow, fields: &[(usize, &'static str)]) -> Option<&'static str> {
    fields
        .iter()
        .find(|(index, _)| row.cell(*index).is_none())
        .map(|(_, name)| *name)
}

fn strip_header(mut rows: Vec<RawRow>, options: IngestOptions) -> Vec<RawRow> {
    if rows.first().is_some_and(|first| options.header.skips(first)) {
        rows.remove(0);
    }
    rows
}

/// Strip the header and trailing incomplete rows, then require every
/// remaining row to carry the roster fields.
fn roster_rows(rows: Vec<RawRow>, path: &Path, options: IngestOptions) -> Result<Vec<RawRow>> {
    let mut rows = strip_header(rows, options);
    while rows
        .last()
        .is_some_and(|last| missing_field(last, &ROSTER_FIELDS).is_some())
    {
        if let Some(dropped) = rows.pop() {
            debug!(line = dropped.line, path = %path.display(), "dropping trailing incomplete row");
        }
    }
    if let Some((row, field)) = rows
        .iter()
        .find_map(|row| missing_field(row, &ROSTER_FIELDS).map(|field| (row, field)))
    {
        return Err(IngestError::IncompleteRow {
            path: path.to_path_buf(),
            line: row.line,
            field,
        });
    }
    Ok(rows)
}

/// Strip the header and keep only rows that record a pairing.
///
/// A previous export lists everyone, including people who were not
/// assigned anyone, so rows without both emails are skipped wherever
/// they appear.
fn history_rows(rows: Vec<RawRow>, path: &Path, options: IngestOptions) -> Vec<RawRow> {
    strip_header(rows, options)
        .into_iter()
        .filter(|row| match missing_field(row, &HISTORY_FIELDS) {
            Some(field) => {
                debug!(line = row.line, field, path = %path.display(), "skipping history row without a pair");
                false
            }
            None => true,
        })
        .collect()
}

fn cell_string(row: &RawRow, (index, _): (usize, &str)) -> String {
    row.cell(index).unwrap_or_default().to_string()
}

/// Load participants from the roster CSV at `path`.
pub fn read_roster(path: &Path) -> Result<Vec<Participant>> {
    read_roster_with_options(path, IngestOptions::default())
}

pub fn read_roster_with_options(path: &Path, options: IngestOptions) -> Result<Vec<Participant>> {
    let file = open_file(path)?;
    read_roster_from_reader(file, path, options)
}

/// Load participants from any reader; `path` labels errors.
pub fn read_roster_from_reader<R: Read>(
    reader: R,
    path: &Path,
    options: IngestOptions,
) -> Result<Vec<Participant>> {
    let rows = roster_rows(read_rows(reader, path)?, path, options)?;
    if rows.is_empty() {
        return Err(IngestError::EmptyRoster {
            path: path.to_path_buf(),
        });
    }
    let participants: Vec<Participant> = rows
        .iter()
        .map(|row| Participant::new(cell_string(row, NAME), cell_string(row, EMAIL)))
        .collect();
    info!(path = %path.display(), participants = participants.len(), "loaded roster");
    Ok(participants)
}

/// Load prior-round edges from the history CSV at `path`.
///
/// A file with no data rows yields an empty history.
pub fn read_history(path: &Path) -> Result<Vec<PriorAssignment>> {
    read_history_with_options(path, IngestOptions::default())
}

pub fn read_history_with_options(
    path: &Path,
    options: IngestOptions,
) -> Result<Vec<PriorAssignment>> {
    let file = open_file(path)?;
    read_history_from_reader(file, path, options)
}

pub fn read_history_from_reader<R: Read>(
    reader: R,
    path: &Path,
    options: IngestOptions,
) -> Result<Vec<PriorAssignment>> {
    let rows = history_rows(read_rows(reader, path)?, path, options);
    let history: Vec<PriorAssignment> = rows
        .iter()
        .map(|row| PriorAssignment::new(cell_string(row, EMAIL), cell_string(row, CHILD_EMAIL)))
        .collect();
    info!(path = %path.display(), edges = history.len(), "loaded history");
    Ok(history)
}
