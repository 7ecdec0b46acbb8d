//! Secret Santa output generation.
//!
//! Writes the assignment table in the exchange layout
//! `name, email, secretChildName, secretChildEmail`:
//!
//! - **CSV**: the default; readable again as next round's history
//! - **JSON**: an array of records with the same keys

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use santa_model::{Assignment, AssignmentRecord};

/// File name used when no output path is given.
pub const DEFAULT_FILE_NAME: &str = "SecretSantaAssignments.csv";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Csv,
    Json,
}

impl OutputFormat {
    pub fn extension(self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Json => "json",
        }
    }
}

#[derive(Debug, Error)]
pub enum OutputError {
    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("io error: {0}")]
    Stream(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, OutputError>;

/// Flatten assignments into table rows, keeping giver order.
pub fn assignment_records(assignments: &[Assignment]) -> Vec<AssignmentRecord> {
    assignments.iter().map(AssignmentRecord::from).collect()
}

/// Write assignments to `writer` in the given format.
///
/// CSV output always starts with the header row, even when empty.
pub fn write_assignments<W: Write>(
    writer: W,
    assignments: &[Assignment],
    format: OutputFormat,
) -> Result<()> {
    let records = assignment_records(assignments);
    match format {
        OutputFormat::Csv => {
            let mut csv_writer = csv::WriterBuilder::new()
                .has_headers(false)
                .from_writer(writer);
            csv_writer.write_record(AssignmentRecord::HEADERS)?;
            for record in &records {
                csv_writer.serialize(record)?;
            }
            csv_writer.flush()?;
        }
        OutputFormat::Json => {
            let mut writer = writer;
            serde_json::to_writer_pretty(&mut writer, &records)?;
            writeln!(writer)?;
            writer.flush()?;
        }
    }
    Ok(())
}

/// Write assignments to a file, replacing it if present.
pub fn write_assignments_to_path(
    path: &Path,
    assignments: &[Assignment],
    format: OutputFormat,
) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|source| OutputError::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    let file = File::create(path).map_err(|source| OutputError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    write_assignments(BufWriter::new(file), assignments, format)?;
    info!(path = %path.display(), rows = assignments.len(), "wrote assignments");
    Ok(())
}

pub fn write_assignments_csv(path: &Path, assignments: &[Assignment]) -> Result<()> {
    write_assignments_to_path(path, assignments, OutputFormat::Csv)
}
